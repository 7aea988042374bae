//! Generated simple case-folding data (UCD 14.0).
//!
//! Layout: one [`FoldBlock`] per 256-codepoint block. Dense blocks use a
//! direct 256-entry slice of `FOLD_CODES`; sparse blocks list arithmetic
//! runs in `FOLD_SEQUENCES`. Codepoints past the last block fold to
//! themselves.

use super::{FoldBlock, FoldSequence};

pub(crate) const FOLD_BLOCK_COUNT: usize = 490;

pub(crate) static FOLD_BLOCKS: [FoldBlock; FOLD_BLOCK_COUNT] = [
    FoldBlock::Table { index: 0 }, FoldBlock::Table { index: 1 }, FoldBlock::Table { index: 2 },
    FoldBlock::Table { index: 3 }, FoldBlock::Table { index: 4 },
    FoldBlock::Sequences { index: 0, len: 2 }, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Sequences { index: 2, len: 2 }, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Sequences { index: 4, len: 1 }, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Sequences { index: 5, len: 10 },
    FoldBlock::Unchanged, FoldBlock::Sequences { index: 15, len: 4 },
    FoldBlock::Sequences { index: 19, len: 24 }, FoldBlock::Unchanged,
    FoldBlock::Sequences { index: 43, len: 6 }, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Sequences { index: 49, len: 1 }, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Sequences { index: 50, len: 15 }, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Sequences { index: 65, len: 2 }, FoldBlock::Sequences { index: 67, len: 25 },
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Sequences { index: 92, len: 1 }, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Sequences { index: 93, len: 1 }, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Sequences { index: 94, len: 2 }, FoldBlock::Sequences { index: 96, len: 4 },
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Sequences { index: 100, len: 1 },
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Sequences { index: 101, len: 1 }, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Sequences { index: 102, len: 1 }, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged, FoldBlock::Unchanged,
    FoldBlock::Sequences { index: 103, len: 1 },
];

pub(crate) static FOLD_CODES: [u32; 1280] = [
    // block U+0000..=U+00FF
    0x000000, 0x000001, 0x000002, 0x000003, 0x000004, 0x000005, 0x000006, 0x000007,
    0x000008, 0x000009, 0x00000A, 0x00000B, 0x00000C, 0x00000D, 0x00000E, 0x00000F,
    0x000010, 0x000011, 0x000012, 0x000013, 0x000014, 0x000015, 0x000016, 0x000017,
    0x000018, 0x000019, 0x00001A, 0x00001B, 0x00001C, 0x00001D, 0x00001E, 0x00001F,
    0x000020, 0x000021, 0x000022, 0x000023, 0x000024, 0x000025, 0x000026, 0x000027,
    0x000028, 0x000029, 0x00002A, 0x00002B, 0x00002C, 0x00002D, 0x00002E, 0x00002F,
    0x000030, 0x000031, 0x000032, 0x000033, 0x000034, 0x000035, 0x000036, 0x000037,
    0x000038, 0x000039, 0x00003A, 0x00003B, 0x00003C, 0x00003D, 0x00003E, 0x00003F,
    0x000040, 0x000061, 0x000062, 0x000063, 0x000064, 0x000065, 0x000066, 0x000067,
    0x000068, 0x000069, 0x00006A, 0x00006B, 0x00006C, 0x00006D, 0x00006E, 0x00006F,
    0x000070, 0x000071, 0x000072, 0x000073, 0x000074, 0x000075, 0x000076, 0x000077,
    0x000078, 0x000079, 0x00007A, 0x00005B, 0x00005C, 0x00005D, 0x00005E, 0x00005F,
    0x000060, 0x000061, 0x000062, 0x000063, 0x000064, 0x000065, 0x000066, 0x000067,
    0x000068, 0x000069, 0x00006A, 0x00006B, 0x00006C, 0x00006D, 0x00006E, 0x00006F,
    0x000070, 0x000071, 0x000072, 0x000073, 0x000074, 0x000075, 0x000076, 0x000077,
    0x000078, 0x000079, 0x00007A, 0x00007B, 0x00007C, 0x00007D, 0x00007E, 0x00007F,
    0x000080, 0x000081, 0x000082, 0x000083, 0x000084, 0x000085, 0x000086, 0x000087,
    0x000088, 0x000089, 0x00008A, 0x00008B, 0x00008C, 0x00008D, 0x00008E, 0x00008F,
    0x000090, 0x000091, 0x000092, 0x000093, 0x000094, 0x000095, 0x000096, 0x000097,
    0x000098, 0x000099, 0x00009A, 0x00009B, 0x00009C, 0x00009D, 0x00009E, 0x00009F,
    0x0000A0, 0x0000A1, 0x0000A2, 0x0000A3, 0x0000A4, 0x0000A5, 0x0000A6, 0x0000A7,
    0x0000A8, 0x0000A9, 0x0000AA, 0x0000AB, 0x0000AC, 0x0000AD, 0x0000AE, 0x0000AF,
    0x0000B0, 0x0000B1, 0x0000B2, 0x0000B3, 0x0000B4, 0x0003BC, 0x0000B6, 0x0000B7,
    0x0000B8, 0x0000B9, 0x0000BA, 0x0000BB, 0x0000BC, 0x0000BD, 0x0000BE, 0x0000BF,
    0x0000E0, 0x0000E1, 0x0000E2, 0x0000E3, 0x0000E4, 0x0000E5, 0x0000E6, 0x0000E7,
    0x0000E8, 0x0000E9, 0x0000EA, 0x0000EB, 0x0000EC, 0x0000ED, 0x0000EE, 0x0000EF,
    0x0000F0, 0x0000F1, 0x0000F2, 0x0000F3, 0x0000F4, 0x0000F5, 0x0000F6, 0x0000D7,
    0x0000F8, 0x0000F9, 0x0000FA, 0x0000FB, 0x0000FC, 0x0000FD, 0x0000FE, 0x0000DF,
    0x0000E0, 0x0000E1, 0x0000E2, 0x0000E3, 0x0000E4, 0x0000E5, 0x0000E6, 0x0000E7,
    0x0000E8, 0x0000E9, 0x0000EA, 0x0000EB, 0x0000EC, 0x0000ED, 0x0000EE, 0x0000EF,
    0x0000F0, 0x0000F1, 0x0000F2, 0x0000F3, 0x0000F4, 0x0000F5, 0x0000F6, 0x0000F7,
    0x0000F8, 0x0000F9, 0x0000FA, 0x0000FB, 0x0000FC, 0x0000FD, 0x0000FE, 0x0000FF,
    // block U+0100..=U+01FF
    0x000101, 0x000101, 0x000103, 0x000103, 0x000105, 0x000105, 0x000107, 0x000107,
    0x000109, 0x000109, 0x00010B, 0x00010B, 0x00010D, 0x00010D, 0x00010F, 0x00010F,
    0x000111, 0x000111, 0x000113, 0x000113, 0x000115, 0x000115, 0x000117, 0x000117,
    0x000119, 0x000119, 0x00011B, 0x00011B, 0x00011D, 0x00011D, 0x00011F, 0x00011F,
    0x000121, 0x000121, 0x000123, 0x000123, 0x000125, 0x000125, 0x000127, 0x000127,
    0x000129, 0x000129, 0x00012B, 0x00012B, 0x00012D, 0x00012D, 0x00012F, 0x00012F,
    0x000130, 0x000131, 0x000133, 0x000133, 0x000135, 0x000135, 0x000137, 0x000137,
    0x000138, 0x00013A, 0x00013A, 0x00013C, 0x00013C, 0x00013E, 0x00013E, 0x000140,
    0x000140, 0x000142, 0x000142, 0x000144, 0x000144, 0x000146, 0x000146, 0x000148,
    0x000148, 0x000149, 0x00014B, 0x00014B, 0x00014D, 0x00014D, 0x00014F, 0x00014F,
    0x000151, 0x000151, 0x000153, 0x000153, 0x000155, 0x000155, 0x000157, 0x000157,
    0x000159, 0x000159, 0x00015B, 0x00015B, 0x00015D, 0x00015D, 0x00015F, 0x00015F,
    0x000161, 0x000161, 0x000163, 0x000163, 0x000165, 0x000165, 0x000167, 0x000167,
    0x000169, 0x000169, 0x00016B, 0x00016B, 0x00016D, 0x00016D, 0x00016F, 0x00016F,
    0x000171, 0x000171, 0x000173, 0x000173, 0x000175, 0x000175, 0x000177, 0x000177,
    0x0000FF, 0x00017A, 0x00017A, 0x00017C, 0x00017C, 0x00017E, 0x00017E, 0x000073,
    0x000180, 0x000253, 0x000183, 0x000183, 0x000185, 0x000185, 0x000254, 0x000188,
    0x000188, 0x000256, 0x000257, 0x00018C, 0x00018C, 0x00018D, 0x0001DD, 0x000259,
    0x00025B, 0x000192, 0x000192, 0x000260, 0x000263, 0x000195, 0x000269, 0x000268,
    0x000199, 0x000199, 0x00019A, 0x00019B, 0x00026F, 0x000272, 0x00019E, 0x000275,
    0x0001A1, 0x0001A1, 0x0001A3, 0x0001A3, 0x0001A5, 0x0001A5, 0x000280, 0x0001A8,
    0x0001A8, 0x000283, 0x0001AA, 0x0001AB, 0x0001AD, 0x0001AD, 0x000288, 0x0001B0,
    0x0001B0, 0x00028A, 0x00028B, 0x0001B4, 0x0001B4, 0x0001B6, 0x0001B6, 0x000292,
    0x0001B9, 0x0001B9, 0x0001BA, 0x0001BB, 0x0001BD, 0x0001BD, 0x0001BE, 0x0001BF,
    0x0001C0, 0x0001C1, 0x0001C2, 0x0001C3, 0x0001C6, 0x0001C6, 0x0001C6, 0x0001C9,
    0x0001C9, 0x0001C9, 0x0001CC, 0x0001CC, 0x0001CC, 0x0001CE, 0x0001CE, 0x0001D0,
    0x0001D0, 0x0001D2, 0x0001D2, 0x0001D4, 0x0001D4, 0x0001D6, 0x0001D6, 0x0001D8,
    0x0001D8, 0x0001DA, 0x0001DA, 0x0001DC, 0x0001DC, 0x0001DD, 0x0001DF, 0x0001DF,
    0x0001E1, 0x0001E1, 0x0001E3, 0x0001E3, 0x0001E5, 0x0001E5, 0x0001E7, 0x0001E7,
    0x0001E9, 0x0001E9, 0x0001EB, 0x0001EB, 0x0001ED, 0x0001ED, 0x0001EF, 0x0001EF,
    0x0001F0, 0x0001F3, 0x0001F3, 0x0001F3, 0x0001F5, 0x0001F5, 0x000195, 0x0001BF,
    0x0001F9, 0x0001F9, 0x0001FB, 0x0001FB, 0x0001FD, 0x0001FD, 0x0001FF, 0x0001FF,
    // block U+0200..=U+02FF
    0x000201, 0x000201, 0x000203, 0x000203, 0x000205, 0x000205, 0x000207, 0x000207,
    0x000209, 0x000209, 0x00020B, 0x00020B, 0x00020D, 0x00020D, 0x00020F, 0x00020F,
    0x000211, 0x000211, 0x000213, 0x000213, 0x000215, 0x000215, 0x000217, 0x000217,
    0x000219, 0x000219, 0x00021B, 0x00021B, 0x00021D, 0x00021D, 0x00021F, 0x00021F,
    0x00019E, 0x000221, 0x000223, 0x000223, 0x000225, 0x000225, 0x000227, 0x000227,
    0x000229, 0x000229, 0x00022B, 0x00022B, 0x00022D, 0x00022D, 0x00022F, 0x00022F,
    0x000231, 0x000231, 0x000233, 0x000233, 0x000234, 0x000235, 0x000236, 0x000237,
    0x000238, 0x000239, 0x002C65, 0x00023C, 0x00023C, 0x00019A, 0x002C66, 0x00023F,
    0x000240, 0x000242, 0x000242, 0x000180, 0x000289, 0x00028C, 0x000247, 0x000247,
    0x000249, 0x000249, 0x00024B, 0x00024B, 0x00024D, 0x00024D, 0x00024F, 0x00024F,
    0x000250, 0x000251, 0x000252, 0x000253, 0x000254, 0x000255, 0x000256, 0x000257,
    0x000258, 0x000259, 0x00025A, 0x00025B, 0x00025C, 0x00025D, 0x00025E, 0x00025F,
    0x000260, 0x000261, 0x000262, 0x000263, 0x000264, 0x000265, 0x000266, 0x000267,
    0x000268, 0x000269, 0x00026A, 0x00026B, 0x00026C, 0x00026D, 0x00026E, 0x00026F,
    0x000270, 0x000271, 0x000272, 0x000273, 0x000274, 0x000275, 0x000276, 0x000277,
    0x000278, 0x000279, 0x00027A, 0x00027B, 0x00027C, 0x00027D, 0x00027E, 0x00027F,
    0x000280, 0x000281, 0x000282, 0x000283, 0x000284, 0x000285, 0x000286, 0x000287,
    0x000288, 0x000289, 0x00028A, 0x00028B, 0x00028C, 0x00028D, 0x00028E, 0x00028F,
    0x000290, 0x000291, 0x000292, 0x000293, 0x000294, 0x000295, 0x000296, 0x000297,
    0x000298, 0x000299, 0x00029A, 0x00029B, 0x00029C, 0x00029D, 0x00029E, 0x00029F,
    0x0002A0, 0x0002A1, 0x0002A2, 0x0002A3, 0x0002A4, 0x0002A5, 0x0002A6, 0x0002A7,
    0x0002A8, 0x0002A9, 0x0002AA, 0x0002AB, 0x0002AC, 0x0002AD, 0x0002AE, 0x0002AF,
    0x0002B0, 0x0002B1, 0x0002B2, 0x0002B3, 0x0002B4, 0x0002B5, 0x0002B6, 0x0002B7,
    0x0002B8, 0x0002B9, 0x0002BA, 0x0002BB, 0x0002BC, 0x0002BD, 0x0002BE, 0x0002BF,
    0x0002C0, 0x0002C1, 0x0002C2, 0x0002C3, 0x0002C4, 0x0002C5, 0x0002C6, 0x0002C7,
    0x0002C8, 0x0002C9, 0x0002CA, 0x0002CB, 0x0002CC, 0x0002CD, 0x0002CE, 0x0002CF,
    0x0002D0, 0x0002D1, 0x0002D2, 0x0002D3, 0x0002D4, 0x0002D5, 0x0002D6, 0x0002D7,
    0x0002D8, 0x0002D9, 0x0002DA, 0x0002DB, 0x0002DC, 0x0002DD, 0x0002DE, 0x0002DF,
    0x0002E0, 0x0002E1, 0x0002E2, 0x0002E3, 0x0002E4, 0x0002E5, 0x0002E6, 0x0002E7,
    0x0002E8, 0x0002E9, 0x0002EA, 0x0002EB, 0x0002EC, 0x0002ED, 0x0002EE, 0x0002EF,
    0x0002F0, 0x0002F1, 0x0002F2, 0x0002F3, 0x0002F4, 0x0002F5, 0x0002F6, 0x0002F7,
    0x0002F8, 0x0002F9, 0x0002FA, 0x0002FB, 0x0002FC, 0x0002FD, 0x0002FE, 0x0002FF,
    // block U+0300..=U+03FF
    0x000300, 0x000301, 0x000302, 0x000303, 0x000304, 0x000305, 0x000306, 0x000307,
    0x000308, 0x000309, 0x00030A, 0x00030B, 0x00030C, 0x00030D, 0x00030E, 0x00030F,
    0x000310, 0x000311, 0x000312, 0x000313, 0x000314, 0x000315, 0x000316, 0x000317,
    0x000318, 0x000319, 0x00031A, 0x00031B, 0x00031C, 0x00031D, 0x00031E, 0x00031F,
    0x000320, 0x000321, 0x000322, 0x000323, 0x000324, 0x000325, 0x000326, 0x000327,
    0x000328, 0x000329, 0x00032A, 0x00032B, 0x00032C, 0x00032D, 0x00032E, 0x00032F,
    0x000330, 0x000331, 0x000332, 0x000333, 0x000334, 0x000335, 0x000336, 0x000337,
    0x000338, 0x000339, 0x00033A, 0x00033B, 0x00033C, 0x00033D, 0x00033E, 0x00033F,
    0x000340, 0x000341, 0x000342, 0x000343, 0x000344, 0x0003B9, 0x000346, 0x000347,
    0x000348, 0x000349, 0x00034A, 0x00034B, 0x00034C, 0x00034D, 0x00034E, 0x00034F,
    0x000350, 0x000351, 0x000352, 0x000353, 0x000354, 0x000355, 0x000356, 0x000357,
    0x000358, 0x000359, 0x00035A, 0x00035B, 0x00035C, 0x00035D, 0x00035E, 0x00035F,
    0x000360, 0x000361, 0x000362, 0x000363, 0x000364, 0x000365, 0x000366, 0x000367,
    0x000368, 0x000369, 0x00036A, 0x00036B, 0x00036C, 0x00036D, 0x00036E, 0x00036F,
    0x000371, 0x000371, 0x000373, 0x000373, 0x000374, 0x000375, 0x000377, 0x000377,
    0x000378, 0x000379, 0x00037A, 0x00037B, 0x00037C, 0x00037D, 0x00037E, 0x0003F3,
    0x000380, 0x000381, 0x000382, 0x000383, 0x000384, 0x000385, 0x0003AC, 0x000387,
    0x0003AD, 0x0003AE, 0x0003AF, 0x00038B, 0x0003CC, 0x00038D, 0x0003CD, 0x0003CE,
    0x000390, 0x0003B1, 0x0003B2, 0x0003B3, 0x0003B4, 0x0003B5, 0x0003B6, 0x0003B7,
    0x0003B8, 0x0003B9, 0x0003BA, 0x0003BB, 0x0003BC, 0x0003BD, 0x0003BE, 0x0003BF,
    0x0003C0, 0x0003C1, 0x0003A2, 0x0003C3, 0x0003C4, 0x0003C5, 0x0003C6, 0x0003C7,
    0x0003C8, 0x0003C9, 0x0003CA, 0x0003CB, 0x0003AC, 0x0003AD, 0x0003AE, 0x0003AF,
    0x0003B0, 0x0003B1, 0x0003B2, 0x0003B3, 0x0003B4, 0x0003B5, 0x0003B6, 0x0003B7,
    0x0003B8, 0x0003B9, 0x0003BA, 0x0003BB, 0x0003BC, 0x0003BD, 0x0003BE, 0x0003BF,
    0x0003C0, 0x0003C1, 0x0003C3, 0x0003C3, 0x0003C4, 0x0003C5, 0x0003C6, 0x0003C7,
    0x0003C8, 0x0003C9, 0x0003CA, 0x0003CB, 0x0003CC, 0x0003CD, 0x0003CE, 0x0003D7,
    0x0003B2, 0x0003B8, 0x0003D2, 0x0003D3, 0x0003D4, 0x0003C6, 0x0003C0, 0x0003D7,
    0x0003D9, 0x0003D9, 0x0003DB, 0x0003DB, 0x0003DD, 0x0003DD, 0x0003DF, 0x0003DF,
    0x0003E1, 0x0003E1, 0x0003E3, 0x0003E3, 0x0003E5, 0x0003E5, 0x0003E7, 0x0003E7,
    0x0003E9, 0x0003E9, 0x0003EB, 0x0003EB, 0x0003ED, 0x0003ED, 0x0003EF, 0x0003EF,
    0x0003BA, 0x0003C1, 0x0003F2, 0x0003F3, 0x0003B8, 0x0003B5, 0x0003F6, 0x0003F8,
    0x0003F8, 0x0003F2, 0x0003FB, 0x0003FB, 0x0003FC, 0x00037B, 0x00037C, 0x00037D,
    // block U+0400..=U+04FF
    0x000450, 0x000451, 0x000452, 0x000453, 0x000454, 0x000455, 0x000456, 0x000457,
    0x000458, 0x000459, 0x00045A, 0x00045B, 0x00045C, 0x00045D, 0x00045E, 0x00045F,
    0x000430, 0x000431, 0x000432, 0x000433, 0x000434, 0x000435, 0x000436, 0x000437,
    0x000438, 0x000439, 0x00043A, 0x00043B, 0x00043C, 0x00043D, 0x00043E, 0x00043F,
    0x000440, 0x000441, 0x000442, 0x000443, 0x000444, 0x000445, 0x000446, 0x000447,
    0x000448, 0x000449, 0x00044A, 0x00044B, 0x00044C, 0x00044D, 0x00044E, 0x00044F,
    0x000430, 0x000431, 0x000432, 0x000433, 0x000434, 0x000435, 0x000436, 0x000437,
    0x000438, 0x000439, 0x00043A, 0x00043B, 0x00043C, 0x00043D, 0x00043E, 0x00043F,
    0x000440, 0x000441, 0x000442, 0x000443, 0x000444, 0x000445, 0x000446, 0x000447,
    0x000448, 0x000449, 0x00044A, 0x00044B, 0x00044C, 0x00044D, 0x00044E, 0x00044F,
    0x000450, 0x000451, 0x000452, 0x000453, 0x000454, 0x000455, 0x000456, 0x000457,
    0x000458, 0x000459, 0x00045A, 0x00045B, 0x00045C, 0x00045D, 0x00045E, 0x00045F,
    0x000461, 0x000461, 0x000463, 0x000463, 0x000465, 0x000465, 0x000467, 0x000467,
    0x000469, 0x000469, 0x00046B, 0x00046B, 0x00046D, 0x00046D, 0x00046F, 0x00046F,
    0x000471, 0x000471, 0x000473, 0x000473, 0x000475, 0x000475, 0x000477, 0x000477,
    0x000479, 0x000479, 0x00047B, 0x00047B, 0x00047D, 0x00047D, 0x00047F, 0x00047F,
    0x000481, 0x000481, 0x000482, 0x000483, 0x000484, 0x000485, 0x000486, 0x000487,
    0x000488, 0x000489, 0x00048B, 0x00048B, 0x00048D, 0x00048D, 0x00048F, 0x00048F,
    0x000491, 0x000491, 0x000493, 0x000493, 0x000495, 0x000495, 0x000497, 0x000497,
    0x000499, 0x000499, 0x00049B, 0x00049B, 0x00049D, 0x00049D, 0x00049F, 0x00049F,
    0x0004A1, 0x0004A1, 0x0004A3, 0x0004A3, 0x0004A5, 0x0004A5, 0x0004A7, 0x0004A7,
    0x0004A9, 0x0004A9, 0x0004AB, 0x0004AB, 0x0004AD, 0x0004AD, 0x0004AF, 0x0004AF,
    0x0004B1, 0x0004B1, 0x0004B3, 0x0004B3, 0x0004B5, 0x0004B5, 0x0004B7, 0x0004B7,
    0x0004B9, 0x0004B9, 0x0004BB, 0x0004BB, 0x0004BD, 0x0004BD, 0x0004BF, 0x0004BF,
    0x0004CF, 0x0004C2, 0x0004C2, 0x0004C4, 0x0004C4, 0x0004C6, 0x0004C6, 0x0004C8,
    0x0004C8, 0x0004CA, 0x0004CA, 0x0004CC, 0x0004CC, 0x0004CE, 0x0004CE, 0x0004CF,
    0x0004D1, 0x0004D1, 0x0004D3, 0x0004D3, 0x0004D5, 0x0004D5, 0x0004D7, 0x0004D7,
    0x0004D9, 0x0004D9, 0x0004DB, 0x0004DB, 0x0004DD, 0x0004DD, 0x0004DF, 0x0004DF,
    0x0004E1, 0x0004E1, 0x0004E3, 0x0004E3, 0x0004E5, 0x0004E5, 0x0004E7, 0x0004E7,
    0x0004E9, 0x0004E9, 0x0004EB, 0x0004EB, 0x0004ED, 0x0004ED, 0x0004EF, 0x0004EF,
    0x0004F1, 0x0004F1, 0x0004F3, 0x0004F3, 0x0004F5, 0x0004F5, 0x0004F7, 0x0004F7,
    0x0004F9, 0x0004F9, 0x0004FB, 0x0004FB, 0x0004FD, 0x0004FD, 0x0004FF, 0x0004FF,
];

pub(crate) static FOLD_SEQUENCES: [FoldSequence; 104] = [
    FoldSequence { first: 0x000500, last: 0x00052E, shift: 1, stride: 2 },
    FoldSequence { first: 0x000531, last: 0x000556, shift: 48, stride: 1 },
    FoldSequence { first: 0x0010A0, last: 0x0010C5, shift: 7264, stride: 1 },
    FoldSequence { first: 0x0010C7, last: 0x0010CD, shift: 7264, stride: 6 },
    FoldSequence { first: 0x0013F8, last: 0x0013FD, shift: -8, stride: 1 },
    FoldSequence { first: 0x001C80, last: 0x001C80, shift: -6222, stride: 1 },
    FoldSequence { first: 0x001C81, last: 0x001C81, shift: -6221, stride: 1 },
    FoldSequence { first: 0x001C82, last: 0x001C82, shift: -6212, stride: 1 },
    FoldSequence { first: 0x001C83, last: 0x001C84, shift: -6210, stride: 1 },
    FoldSequence { first: 0x001C85, last: 0x001C85, shift: -6211, stride: 1 },
    FoldSequence { first: 0x001C86, last: 0x001C86, shift: -6204, stride: 1 },
    FoldSequence { first: 0x001C87, last: 0x001C87, shift: -6180, stride: 1 },
    FoldSequence { first: 0x001C88, last: 0x001C88, shift: 35267, stride: 1 },
    FoldSequence { first: 0x001C90, last: 0x001CBA, shift: -3008, stride: 1 },
    FoldSequence { first: 0x001CBD, last: 0x001CBF, shift: -3008, stride: 1 },
    FoldSequence { first: 0x001E00, last: 0x001E94, shift: 1, stride: 2 },
    FoldSequence { first: 0x001E9B, last: 0x001E9B, shift: -58, stride: 1 },
    FoldSequence { first: 0x001E9E, last: 0x001E9E, shift: -7615, stride: 1 },
    FoldSequence { first: 0x001EA0, last: 0x001EFE, shift: 1, stride: 2 },
    FoldSequence { first: 0x001F08, last: 0x001F0F, shift: -8, stride: 1 },
    FoldSequence { first: 0x001F18, last: 0x001F1D, shift: -8, stride: 1 },
    FoldSequence { first: 0x001F28, last: 0x001F2F, shift: -8, stride: 1 },
    FoldSequence { first: 0x001F38, last: 0x001F3F, shift: -8, stride: 1 },
    FoldSequence { first: 0x001F48, last: 0x001F4D, shift: -8, stride: 1 },
    FoldSequence { first: 0x001F59, last: 0x001F5F, shift: -8, stride: 2 },
    FoldSequence { first: 0x001F68, last: 0x001F6F, shift: -8, stride: 1 },
    FoldSequence { first: 0x001F88, last: 0x001F8F, shift: -8, stride: 1 },
    FoldSequence { first: 0x001F98, last: 0x001F9F, shift: -8, stride: 1 },
    FoldSequence { first: 0x001FA8, last: 0x001FAF, shift: -8, stride: 1 },
    FoldSequence { first: 0x001FB8, last: 0x001FB9, shift: -8, stride: 1 },
    FoldSequence { first: 0x001FBA, last: 0x001FBB, shift: -74, stride: 1 },
    FoldSequence { first: 0x001FBC, last: 0x001FBC, shift: -9, stride: 1 },
    FoldSequence { first: 0x001FBE, last: 0x001FBE, shift: -7173, stride: 1 },
    FoldSequence { first: 0x001FC8, last: 0x001FCB, shift: -86, stride: 1 },
    FoldSequence { first: 0x001FCC, last: 0x001FCC, shift: -9, stride: 1 },
    FoldSequence { first: 0x001FD8, last: 0x001FD9, shift: -8, stride: 1 },
    FoldSequence { first: 0x001FDA, last: 0x001FDB, shift: -100, stride: 1 },
    FoldSequence { first: 0x001FE8, last: 0x001FE9, shift: -8, stride: 1 },
    FoldSequence { first: 0x001FEA, last: 0x001FEB, shift: -112, stride: 1 },
    FoldSequence { first: 0x001FEC, last: 0x001FEC, shift: -7, stride: 1 },
    FoldSequence { first: 0x001FF8, last: 0x001FF9, shift: -128, stride: 1 },
    FoldSequence { first: 0x001FFA, last: 0x001FFB, shift: -126, stride: 1 },
    FoldSequence { first: 0x001FFC, last: 0x001FFC, shift: -9, stride: 1 },
    FoldSequence { first: 0x002126, last: 0x002126, shift: -7517, stride: 1 },
    FoldSequence { first: 0x00212A, last: 0x00212A, shift: -8383, stride: 1 },
    FoldSequence { first: 0x00212B, last: 0x00212B, shift: -8262, stride: 1 },
    FoldSequence { first: 0x002132, last: 0x002132, shift: 28, stride: 1 },
    FoldSequence { first: 0x002160, last: 0x00216F, shift: 16, stride: 1 },
    FoldSequence { first: 0x002183, last: 0x002183, shift: 1, stride: 1 },
    FoldSequence { first: 0x0024B6, last: 0x0024CF, shift: 26, stride: 1 },
    FoldSequence { first: 0x002C00, last: 0x002C2F, shift: 48, stride: 1 },
    FoldSequence { first: 0x002C60, last: 0x002C60, shift: 1, stride: 1 },
    FoldSequence { first: 0x002C62, last: 0x002C62, shift: -10743, stride: 1 },
    FoldSequence { first: 0x002C63, last: 0x002C63, shift: -3814, stride: 1 },
    FoldSequence { first: 0x002C64, last: 0x002C64, shift: -10727, stride: 1 },
    FoldSequence { first: 0x002C67, last: 0x002C6B, shift: 1, stride: 2 },
    FoldSequence { first: 0x002C6D, last: 0x002C6D, shift: -10780, stride: 1 },
    FoldSequence { first: 0x002C6E, last: 0x002C6E, shift: -10749, stride: 1 },
    FoldSequence { first: 0x002C6F, last: 0x002C6F, shift: -10783, stride: 1 },
    FoldSequence { first: 0x002C70, last: 0x002C70, shift: -10782, stride: 1 },
    FoldSequence { first: 0x002C72, last: 0x002C75, shift: 1, stride: 3 },
    FoldSequence { first: 0x002C7E, last: 0x002C7F, shift: -10815, stride: 1 },
    FoldSequence { first: 0x002C80, last: 0x002CE2, shift: 1, stride: 2 },
    FoldSequence { first: 0x002CEB, last: 0x002CED, shift: 1, stride: 2 },
    FoldSequence { first: 0x002CF2, last: 0x002CF2, shift: 1, stride: 1 },
    FoldSequence { first: 0x00A640, last: 0x00A66C, shift: 1, stride: 2 },
    FoldSequence { first: 0x00A680, last: 0x00A69A, shift: 1, stride: 2 },
    FoldSequence { first: 0x00A722, last: 0x00A72E, shift: 1, stride: 2 },
    FoldSequence { first: 0x00A732, last: 0x00A76E, shift: 1, stride: 2 },
    FoldSequence { first: 0x00A779, last: 0x00A77B, shift: 1, stride: 2 },
    FoldSequence { first: 0x00A77D, last: 0x00A77D, shift: -35332, stride: 1 },
    FoldSequence { first: 0x00A77E, last: 0x00A786, shift: 1, stride: 2 },
    FoldSequence { first: 0x00A78B, last: 0x00A78B, shift: 1, stride: 1 },
    FoldSequence { first: 0x00A78D, last: 0x00A78D, shift: -42280, stride: 1 },
    FoldSequence { first: 0x00A790, last: 0x00A792, shift: 1, stride: 2 },
    FoldSequence { first: 0x00A796, last: 0x00A7A8, shift: 1, stride: 2 },
    FoldSequence { first: 0x00A7AA, last: 0x00A7AA, shift: -42308, stride: 1 },
    FoldSequence { first: 0x00A7AB, last: 0x00A7AB, shift: -42319, stride: 1 },
    FoldSequence { first: 0x00A7AC, last: 0x00A7AC, shift: -42315, stride: 1 },
    FoldSequence { first: 0x00A7AD, last: 0x00A7AD, shift: -42305, stride: 1 },
    FoldSequence { first: 0x00A7AE, last: 0x00A7AE, shift: -42308, stride: 1 },
    FoldSequence { first: 0x00A7B0, last: 0x00A7B0, shift: -42258, stride: 1 },
    FoldSequence { first: 0x00A7B1, last: 0x00A7B1, shift: -42282, stride: 1 },
    FoldSequence { first: 0x00A7B2, last: 0x00A7B2, shift: -42261, stride: 1 },
    FoldSequence { first: 0x00A7B3, last: 0x00A7B3, shift: 928, stride: 1 },
    FoldSequence { first: 0x00A7B4, last: 0x00A7C2, shift: 1, stride: 2 },
    FoldSequence { first: 0x00A7C4, last: 0x00A7C4, shift: -48, stride: 1 },
    FoldSequence { first: 0x00A7C5, last: 0x00A7C5, shift: -42307, stride: 1 },
    FoldSequence { first: 0x00A7C6, last: 0x00A7C6, shift: -35384, stride: 1 },
    FoldSequence { first: 0x00A7C7, last: 0x00A7C9, shift: 1, stride: 2 },
    FoldSequence { first: 0x00A7D0, last: 0x00A7D6, shift: 1, stride: 6 },
    FoldSequence { first: 0x00A7D8, last: 0x00A7F5, shift: 1, stride: 29 },
    FoldSequence { first: 0x00AB70, last: 0x00ABBF, shift: -38864, stride: 1 },
    FoldSequence { first: 0x00FF21, last: 0x00FF3A, shift: 32, stride: 1 },
    FoldSequence { first: 0x010400, last: 0x010427, shift: 40, stride: 1 },
    FoldSequence { first: 0x0104B0, last: 0x0104D3, shift: 40, stride: 1 },
    FoldSequence { first: 0x010570, last: 0x01057A, shift: 39, stride: 1 },
    FoldSequence { first: 0x01057C, last: 0x01058A, shift: 39, stride: 1 },
    FoldSequence { first: 0x01058C, last: 0x010592, shift: 39, stride: 1 },
    FoldSequence { first: 0x010594, last: 0x010595, shift: 39, stride: 1 },
    FoldSequence { first: 0x010C80, last: 0x010CB2, shift: 64, stride: 1 },
    FoldSequence { first: 0x0118A0, last: 0x0118BF, shift: 32, stride: 1 },
    FoldSequence { first: 0x016E40, last: 0x016E5F, shift: 32, stride: 1 },
    FoldSequence { first: 0x01E900, last: 0x01E921, shift: 34, stride: 1 },
];
