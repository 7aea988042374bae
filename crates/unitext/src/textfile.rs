//! Line-oriented buffered text file.
//!
//! Files persist UTF-8; callers may work in UTF-8 or UTF-16 and pay a recode
//! at the boundary. Lines read from disk pass through the repairer, so a
//! caller never observes malformed UTF-8, however damaged the file. Writing
//! is gated on an explicit open-for-write call: a handle that was never
//! deliberately opened for writing refuses to write, as a guard against
//! accidental destructive opens.
//!
//! A handle owns at most one OS file description and is not meant to be
//! shared across threads without external serialization. All I/O is
//! synchronous and blocking; end of input is a "no more lines" result, not
//! an error.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::vec::Vec;

use bstr::ByteSlice;
use thiserror::Error;

use crate::recode::{Status, utf8_to_utf16, utf16_to_utf8};
use crate::validate::{rebuild, validate};

/// Errors surfaced by [`TextFile`] operations.
#[derive(Debug, Error)]
pub enum TextFileError {
    /// The handle is closed and the operation does not auto-open.
    #[error("file is not open")]
    NotOpen,
    /// A read was attempted on a handle opened for writing.
    #[error("file is not open for reading")]
    NotReadable,
    /// A write was attempted without an explicit `open_for_writing` call.
    #[error("file is not open for writing")]
    NotWritable,
    /// A UTF-16 payload failed to recode for storage (estimator contract
    /// violation).
    #[error("utf-16 line failed to recode")]
    Recode,
    /// An underlying I/O failure. No retry is attempted; that policy belongs
    /// to the caller.
    #[error(transparent)]
    Io(#[from] io::Error),
}

enum Backing {
    Closed,
    Reading(BufReader<File>),
    Writing(File),
}

/// A UTF-8 text file read and written a line at a time.
///
/// The handle starts closed; [`open_for_reading`] and [`open_for_writing`]
/// perform the explicit state transitions. Reading auto-opens from the
/// closed state. Dropping the handle releases the descriptor.
///
/// [`open_for_reading`]: TextFile::open_for_reading
/// [`open_for_writing`]: TextFile::open_for_writing
///
/// # Examples
///
/// ```no_run
/// use unitext::TextFile;
///
/// # fn main() -> Result<(), unitext::TextFileError> {
/// let mut file = TextFile::new("notes.txt");
/// file.open_for_writing(false)?;
/// file.write_line(b"first line")?;
/// file.close()?;
///
/// let mut file = TextFile::new("notes.txt");
/// while let Some(line) = file.read_line()? {
///     println!("{}", line.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct TextFile {
    path: PathBuf,
    backing: Backing,
}

impl TextFile {
    /// Creates a closed handle for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backing: Backing::Closed,
        }
    }

    /// The path this handle operates on.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the file for reading, replacing any previous state.
    pub fn open_for_reading(&mut self) -> Result<(), TextFileError> {
        let file = File::open(&self.path)?;
        tracing::debug!(path = %self.path.display(), "opened text file for reading");
        self.backing = Backing::Reading(BufReader::new(file));
        Ok(())
    }

    /// Opens the file for writing, truncating it, or appending when `append`
    /// is set. This is the only way to make the handle writable.
    pub fn open_for_writing(&mut self, append: bool) -> Result<(), TextFileError> {
        let mut options = OpenOptions::new();
        options.write(true).create(true);
        if append {
            options.append(true);
        } else {
            options.truncate(true);
        }
        let file = options.open(&self.path)?;
        tracing::debug!(path = %self.path.display(), append, "opened text file for writing");
        self.backing = Backing::Writing(file);
        Ok(())
    }

    /// Reads the next line, with the `\n` or `\r\n` terminator stripped.
    ///
    /// A closed handle auto-opens for reading. Returns `Ok(None)` at end of
    /// input. The returned bytes are always valid per the repairer: a line
    /// containing malformed UTF-8 comes back repaired, never raw.
    pub fn read_line(&mut self) -> Result<Option<Vec<u8>>, TextFileError> {
        if matches!(self.backing, Backing::Closed) {
            self.open_for_reading()?;
        }
        let Backing::Reading(reader) = &mut self.backing else {
            return Err(TextFileError::NotReadable);
        };

        let mut line = Vec::new();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }

        let check = validate(&line);
        if !check.is_valid {
            tracing::warn!(
                path = %self.path.display(),
                line = %line.as_bstr(),
                "repaired malformed utf-8 in line"
            );
            line = rebuild(&line, check.repaired_len);
        }
        Ok(Some(line))
    }

    /// Reads the next line recoded to UTF-16.
    pub fn read_line_utf16(&mut self) -> Result<Option<Vec<u16>>, TextFileError> {
        match self.read_line()? {
            None => Ok(None),
            Some(line) => {
                let (wide, _) = utf8_to_utf16(&line);
                Ok(Some(wide))
            }
        }
    }

    /// Drains all remaining lines.
    pub fn read_lines(&mut self) -> Result<Vec<Vec<u8>>, TextFileError> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            lines.push(line);
        }
        Ok(lines)
    }

    /// Drains all remaining lines recoded to UTF-16.
    pub fn read_lines_utf16(&mut self) -> Result<Vec<Vec<u16>>, TextFileError> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line_utf16()? {
            lines.push(line);
        }
        Ok(lines)
    }

    /// Writes `line` verbatim, no terminator handling.
    ///
    /// Fails with [`TextFileError::NotWritable`] unless the handle went
    /// through [`open_for_writing`](TextFile::open_for_writing).
    pub fn write_str(&mut self, line: &[u8]) -> Result<(), TextFileError> {
        let Backing::Writing(file) = &mut self.backing else {
            return Err(TextFileError::NotWritable);
        };
        file.write_all(line)?;
        Ok(())
    }

    /// Writes `line` and terminates it with `\r\n`, unless the line already
    /// ends in `\n`.
    pub fn write_line(&mut self, line: &[u8]) -> Result<(), TextFileError> {
        self.write_str(line)?;
        if line.last() != Some(&b'\n') {
            self.write_str(b"\r\n")?;
        }
        Ok(())
    }

    /// Recodes a UTF-16 line to UTF-8 storage form and writes it verbatim.
    pub fn write_str_utf16(&mut self, line: &[u16]) -> Result<(), TextFileError> {
        let (bytes, status) = utf16_to_utf8(line);
        if status == Status::InternalError {
            return Err(TextFileError::Recode);
        }
        self.write_str(&bytes)
    }

    /// Recodes a UTF-16 line and writes it with terminator handling as in
    /// [`write_line`](TextFile::write_line).
    pub fn write_line_utf16(&mut self, line: &[u16]) -> Result<(), TextFileError> {
        let (bytes, status) = utf16_to_utf8(line);
        if status == Status::InternalError {
            return Err(TextFileError::Recode);
        }
        self.write_line(&bytes)
    }

    /// Writes every line, terminating all but the last.
    ///
    /// Succeeds only when every line was written; the first failure stops
    /// the batch and is returned.
    pub fn write_lines<L: AsRef<[u8]>>(&mut self, lines: &[L]) -> Result<(), TextFileError> {
        let Some((last, rest)) = lines.split_last() else {
            return Ok(());
        };
        for line in rest {
            self.write_line(line.as_ref())?;
        }
        self.write_str(last.as_ref())
    }

    /// UTF-16 variant of [`write_lines`](TextFile::write_lines).
    pub fn write_lines_utf16<L: AsRef<[u16]>>(
        &mut self,
        lines: &[L],
    ) -> Result<(), TextFileError> {
        let Some((last, rest)) = lines.split_last() else {
            return Ok(());
        };
        for line in rest {
            self.write_line_utf16(line.as_ref())?;
        }
        self.write_str_utf16(last.as_ref())
    }

    /// Flushes buffered writes. A reading handle has nothing to flush; a
    /// closed handle reports [`TextFileError::NotOpen`].
    pub fn flush(&mut self) -> Result<(), TextFileError> {
        match &mut self.backing {
            Backing::Closed => Err(TextFileError::NotOpen),
            Backing::Reading(_) => Ok(()),
            Backing::Writing(file) => Ok(file.flush()?),
        }
    }

    /// Flushes and releases the descriptor. Closing a closed handle is fine.
    pub fn close(&mut self) -> Result<(), TextFileError> {
        if let Backing::Writing(file) = &mut self.backing {
            file.flush()?;
        }
        if !matches!(self.backing, Backing::Closed) {
            tracing::debug!(path = %self.path.display(), "closed text file");
        }
        self.backing = Backing::Closed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use bstr::ByteSlice;

    use super::*;

    fn scratch_path(dir: &tempfile::TempDir, name: &str) -> PathBuf {
        dir.path().join(name)
    }

    #[test]
    fn write_then_read_round_trips_without_extra_terminators() {
        let dir = tempfile::tempdir().unwrap();
        let path = scratch_path(&dir, "roundtrip.txt");

        let mut file = TextFile::new(&path);
        file.open_for_writing(false).unwrap();
        file.write_line(b"abc").unwrap();
        file.write_line(b"already terminated\n").unwrap();
        file.close().unwrap();

        let raw = std::fs::read(&path).unwrap();
        assert_eq!(raw.as_bstr(), b"abc\r\nalready terminated\n".as_bstr());

        let mut file = TextFile::new(&path);
        assert_eq!(file.read_line().unwrap().unwrap().as_bstr(), b"abc".as_bstr());
        assert_eq!(
            file.read_line().unwrap().unwrap().as_bstr(),
            b"already terminated".as_bstr()
        );
        assert!(file.read_line().unwrap().is_none());
    }

    #[test]
    fn writing_requires_explicit_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = TextFile::new(scratch_path(&dir, "gate.txt"));
        assert!(matches!(
            file.write_line(b"nope"),
            Err(TextFileError::NotWritable)
        ));
    }

    #[test]
    fn reading_auto_opens_from_closed() {
        let dir = tempfile::tempdir().unwrap();
        let path = scratch_path(&dir, "auto.txt");
        std::fs::write(&path, b"one\r\ntwo\n").unwrap();

        let mut file = TextFile::new(&path);
        let lines = file.read_lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].as_bstr(), b"one".as_bstr());
        assert_eq!(lines[1].as_bstr(), b"two".as_bstr());
    }

    #[test]
    fn malformed_lines_come_back_repaired() {
        let dir = tempfile::tempdir().unwrap();
        let path = scratch_path(&dir, "damaged.txt");
        let mut raw = std::fs::File::create(&path).unwrap();
        raw.write_all(b"ok \xFF here\nclean\n").unwrap();
        drop(raw);

        let mut file = TextFile::new(&path);
        let first = file.read_line().unwrap().unwrap();
        assert_eq!(first.as_bstr(), b"ok \xEF\xBF\xBD here".as_bstr());
        let second = file.read_line().unwrap().unwrap();
        assert_eq!(second.as_bstr(), b"clean".as_bstr());
    }

    #[test]
    fn utf16_lines_recode_at_the_boundary() {
        let dir = tempfile::tempdir().unwrap();
        let path = scratch_path(&dir, "wide.txt");

        let mut file = TextFile::new(&path);
        file.open_for_writing(false).unwrap();
        let wide: Vec<u16> = "žluťoučký".encode_utf16().collect();
        file.write_line_utf16(&wide).unwrap();
        file.close().unwrap();

        let mut file = TextFile::new(&path);
        assert_eq!(file.read_line_utf16().unwrap().unwrap(), wide);
        assert!(file.read_line_utf16().unwrap().is_none());
    }

    #[test]
    fn batch_write_terminates_all_but_the_last_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = scratch_path(&dir, "batch.txt");

        let mut file = TextFile::new(&path);
        file.open_for_writing(false).unwrap();
        file.write_lines(&[b"a".as_slice(), b"b".as_slice(), b"c".as_slice()])
            .unwrap();
        file.close().unwrap();

        let raw = std::fs::read(&path).unwrap();
        assert_eq!(raw.as_bstr(), b"a\r\nb\r\nc".as_bstr());
    }

    #[test]
    fn append_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = scratch_path(&dir, "append.txt");
        std::fs::write(&path, b"kept\r\n").unwrap();

        let mut file = TextFile::new(&path);
        file.open_for_writing(true).unwrap();
        file.write_line(b"added").unwrap();
        file.close().unwrap();

        let raw = std::fs::read(&path).unwrap();
        assert_eq!(raw.as_bstr(), b"kept\r\nadded\r\n".as_bstr());
    }

    #[test]
    fn reading_a_write_handle_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = TextFile::new(scratch_path(&dir, "modes.txt"));
        file.open_for_writing(false).unwrap();
        assert!(matches!(file.read_line(), Err(TextFileError::NotReadable)));
    }

    #[test]
    fn flush_on_closed_handle_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = TextFile::new(scratch_path(&dir, "flush.txt"));
        assert!(matches!(file.flush(), Err(TextFileError::NotOpen)));
    }

    #[test]
    fn empty_line_still_gets_a_terminator() {
        let dir = tempfile::tempdir().unwrap();
        let path = scratch_path(&dir, "empty.txt");

        let mut file = TextFile::new(&path);
        file.open_for_writing(false).unwrap();
        file.write_line(b"").unwrap();
        file.close().unwrap();

        assert_eq!(std::fs::read(&path).unwrap().as_bstr(), b"\r\n".as_bstr());
    }
}
