//! Grapheme_Cluster_Break, Extended_Pictographic and Emoji_Presentation
//! ranges (Unicode 17.0.0), inclusive and sorted. Generated; do not edit by
//! hand. Hangul syllables (LV/LVT) are computed arithmetically and are not
//! listed here.

use super::GraphemeProperty::{self, *};

pub(super) static GRAPHEME: &[(u32, u32, GraphemeProperty)] = &[
    (0x0000, 0x0009, Control),
    (0x000A, 0x000A, Lf),
    (0x000B, 0x000C, Control),
    (0x000D, 0x000D, Cr),
    (0x000E, 0x001F, Control),
    (0x007F, 0x009F, Control),
    (0x00A9, 0x00A9, ExtendedPictographic),
    (0x00AD, 0x00AD, Control),
    (0x00AE, 0x00AE, ExtendedPictographic),
    (0x0300, 0x036F, Extend),
    (0x0483, 0x0489, Extend),
    (0x0591, 0x05BD, Extend),
    (0x05BF, 0x05BF, Extend),
    (0x05C1, 0x05C2, Extend),
    (0x05C4, 0x05C5, Extend),
    (0x05C7, 0x05C7, Extend),
    (0x0600, 0x0605, Prepend),
    (0x0610, 0x061A, Extend),
    (0x061C, 0x061C, Control),
    (0x064B, 0x065F, Extend),
    (0x0670, 0x0670, Extend),
    (0x06D6, 0x06DC, Extend),
    (0x06DD, 0x06DD, Prepend),
    (0x06DF, 0x06E4, Extend),
    (0x06E7, 0x06E8, Extend),
    (0x06EA, 0x06ED, Extend),
    (0x070F, 0x070F, Prepend),
    (0x0711, 0x0711, Extend),
    (0x0730, 0x074A, Extend),
    (0x07A6, 0x07B0, Extend),
    (0x07EB, 0x07F3, Extend),
    (0x07FD, 0x07FD, Extend),
    (0x0816, 0x0819, Extend),
    (0x081B, 0x0823, Extend),
    (0x0825, 0x0827, Extend),
    (0x0829, 0x082D, Extend),
    (0x0859, 0x085B, Extend),
    (0x0890, 0x0891, Prepend),
    (0x0897, 0x089F, Extend),
    (0x08CA, 0x08E1, Extend),
    (0x08E2, 0x08E2, Prepend),
    (0x08E3, 0x0902, Extend),
    (0x0903, 0x0903, SpacingMark),
    (0x093A, 0x093A, Extend),
    (0x093B, 0x093B, SpacingMark),
    (0x093C, 0x093C, Extend),
    (0x093E, 0x0940, SpacingMark),
    (0x0941, 0x0948, Extend),
    (0x0949, 0x094C, SpacingMark),
    (0x094D, 0x094D, Extend),
    (0x094E, 0x094F, SpacingMark),
    (0x0951, 0x0957, Extend),
    (0x0962, 0x0963, Extend),
    (0x0981, 0x0981, Extend),
    (0x0982, 0x0983, SpacingMark),
    (0x09BC, 0x09BC, Extend),
    (0x09BE, 0x09BE, Extend),
    (0x09BF, 0x09C0, SpacingMark),
    (0x09C1, 0x09C4, Extend),
    (0x09C7, 0x09C8, SpacingMark),
    (0x09CB, 0x09CC, SpacingMark),
    (0x09CD, 0x09CD, Extend),
    (0x09D7, 0x09D7, Extend),
    (0x09E2, 0x09E3, Extend),
    (0x09FE, 0x09FE, Extend),
    (0x0A01, 0x0A02, Extend),
    (0x0A03, 0x0A03, SpacingMark),
    (0x0A3C, 0x0A3C, Extend),
    (0x0A3E, 0x0A40, SpacingMark),
    (0x0A41, 0x0A42, Extend),
    (0x0A47, 0x0A48, Extend),
    (0x0A4B, 0x0A4D, Extend),
    (0x0A51, 0x0A51, Extend),
    (0x0A70, 0x0A71, Extend),
    (0x0A75, 0x0A75, Extend),
    (0x0A81, 0x0A82, Extend),
    (0x0A83, 0x0A83, SpacingMark),
    (0x0ABC, 0x0ABC, Extend),
    (0x0ABE, 0x0AC0, SpacingMark),
    (0x0AC1, 0x0AC5, Extend),
    (0x0AC7, 0x0AC8, Extend),
    (0x0AC9, 0x0AC9, SpacingMark),
    (0x0ACB, 0x0ACC, SpacingMark),
    (0x0ACD, 0x0ACD, Extend),
    (0x0AE2, 0x0AE3, Extend),
    (0x0AFA, 0x0AFF, Extend),
    (0x0B01, 0x0B01, Extend),
    (0x0B02, 0x0B03, SpacingMark),
    (0x0B3C, 0x0B3C, Extend),
    (0x0B3E, 0x0B3F, Extend),
    (0x0B40, 0x0B40, SpacingMark),
    (0x0B41, 0x0B44, Extend),
    (0x0B47, 0x0B48, SpacingMark),
    (0x0B4B, 0x0B4C, SpacingMark),
    (0x0B4D, 0x0B4D, Extend),
    (0x0B55, 0x0B57, Extend),
    (0x0B62, 0x0B63, Extend),
    (0x0B82, 0x0B82, Extend),
    (0x0BBE, 0x0BBE, Extend),
    (0x0BBF, 0x0BBF, SpacingMark),
    (0x0BC0, 0x0BC0, Extend),
    (0x0BC1, 0x0BC2, SpacingMark),
    (0x0BC6, 0x0BC8, SpacingMark),
    (0x0BCA, 0x0BCC, SpacingMark),
    (0x0BCD, 0x0BCD, Extend),
    (0x0BD7, 0x0BD7, Extend),
    (0x0C00, 0x0C00, Extend),
    (0x0C01, 0x0C03, SpacingMark),
    (0x0C04, 0x0C04, Extend),
    (0x0C3C, 0x0C3C, Extend),
    (0x0C3E, 0x0C40, Extend),
    (0x0C41, 0x0C44, SpacingMark),
    (0x0C46, 0x0C48, Extend),
    (0x0C4A, 0x0C4D, Extend),
    (0x0C55, 0x0C56, Extend),
    (0x0C62, 0x0C63, Extend),
    (0x0C81, 0x0C81, Extend),
    (0x0C82, 0x0C83, SpacingMark),
    (0x0CBC, 0x0CBC, Extend),
    (0x0CBE, 0x0CBE, SpacingMark),
    (0x0CBF, 0x0CC0, Extend),
    (0x0CC1, 0x0CC1, SpacingMark),
    (0x0CC2, 0x0CC2, Extend),
    (0x0CC3, 0x0CC4, SpacingMark),
    (0x0CC6, 0x0CC8, Extend),
    (0x0CCA, 0x0CCD, Extend),
    (0x0CD5, 0x0CD6, Extend),
    (0x0CE2, 0x0CE3, Extend),
    (0x0CF3, 0x0CF3, SpacingMark),
    (0x0D00, 0x0D01, Extend),
    (0x0D02, 0x0D03, SpacingMark),
    (0x0D3B, 0x0D3C, Extend),
    (0x0D3E, 0x0D3E, Extend),
    (0x0D3F, 0x0D40, SpacingMark),
    (0x0D41, 0x0D44, Extend),
    (0x0D46, 0x0D48, SpacingMark),
    (0x0D4A, 0x0D4C, SpacingMark),
    (0x0D4D, 0x0D4D, Extend),
    (0x0D4E, 0x0D4E, Prepend),
    (0x0D57, 0x0D57, Extend),
    (0x0D62, 0x0D63, Extend),
    (0x0D81, 0x0D81, Extend),
    (0x0D82, 0x0D83, SpacingMark),
    (0x0DCA, 0x0DCA, Extend),
    (0x0DCF, 0x0DCF, Extend),
    (0x0DD0, 0x0DD1, SpacingMark),
    (0x0DD2, 0x0DD4, Extend),
    (0x0DD6, 0x0DD6, Extend),
    (0x0DD8, 0x0DDE, SpacingMark),
    (0x0DDF, 0x0DDF, Extend),
    (0x0DF2, 0x0DF3, SpacingMark),
    (0x0E31, 0x0E31, Extend),
    (0x0E33, 0x0E33, SpacingMark),
    (0x0E34, 0x0E3A, Extend),
    (0x0E47, 0x0E4E, Extend),
    (0x0EB1, 0x0EB1, Extend),
    (0x0EB3, 0x0EB3, SpacingMark),
    (0x0EB4, 0x0EBC, Extend),
    (0x0EC8, 0x0ECE, Extend),
    (0x0F18, 0x0F19, Extend),
    (0x0F35, 0x0F35, Extend),
    (0x0F37, 0x0F37, Extend),
    (0x0F39, 0x0F39, Extend),
    (0x0F3E, 0x0F3F, SpacingMark),
    (0x0F71, 0x0F7E, Extend),
    (0x0F7F, 0x0F7F, SpacingMark),
    (0x0F80, 0x0F84, Extend),
    (0x0F86, 0x0F87, Extend),
    (0x0F8D, 0x0F97, Extend),
    (0x0F99, 0x0FBC, Extend),
    (0x0FC6, 0x0FC6, Extend),
    (0x102D, 0x1030, Extend),
    (0x1031, 0x1031, SpacingMark),
    (0x1032, 0x1037, Extend),
    (0x1039, 0x103A, Extend),
    (0x103B, 0x103C, SpacingMark),
    (0x103D, 0x103E, Extend),
    (0x1056, 0x1057, SpacingMark),
    (0x1058, 0x1059, Extend),
    (0x105E, 0x1060, Extend),
    (0x1071, 0x1074, Extend),
    (0x1082, 0x1082, Extend),
    (0x1084, 0x1084, SpacingMark),
    (0x1085, 0x1086, Extend),
    (0x108D, 0x108D, Extend),
    (0x109D, 0x109D, Extend),
    (0x1100, 0x115F, L),
    (0x1160, 0x11A7, V),
    (0x11A8, 0x11FF, T),
    (0x135D, 0x135F, Extend),
    (0x1712, 0x1715, Extend),
    (0x1732, 0x1734, Extend),
    (0x1752, 0x1753, Extend),
    (0x1772, 0x1773, Extend),
    (0x17B4, 0x17B5, Extend),
    (0x17B6, 0x17B6, SpacingMark),
    (0x17B7, 0x17BD, Extend),
    (0x17BE, 0x17C5, SpacingMark),
    (0x17C6, 0x17C6, Extend),
    (0x17C7, 0x17C8, SpacingMark),
    (0x17C9, 0x17D3, Extend),
    (0x17DD, 0x17DD, Extend),
    (0x180B, 0x180D, Extend),
    (0x180E, 0x180E, Control),
    (0x180F, 0x180F, Extend),
    (0x1885, 0x1886, Extend),
    (0x18A9, 0x18A9, Extend),
    (0x1920, 0x1922, Extend),
    (0x1923, 0x1926, SpacingMark),
    (0x1927, 0x1928, Extend),
    (0x1929, 0x192B, SpacingMark),
    (0x1930, 0x1931, SpacingMark),
    (0x1932, 0x1932, Extend),
    (0x1933, 0x1938, SpacingMark),
    (0x1939, 0x193B, Extend),
    (0x1A17, 0x1A18, Extend),
    (0x1A19, 0x1A1A, SpacingMark),
    (0x1A1B, 0x1A1B, Extend),
    (0x1A55, 0x1A55, SpacingMark),
    (0x1A56, 0x1A56, Extend),
    (0x1A57, 0x1A57, SpacingMark),
    (0x1A58, 0x1A5E, Extend),
    (0x1A60, 0x1A60, Extend),
    (0x1A62, 0x1A62, Extend),
    (0x1A65, 0x1A6C, Extend),
    (0x1A6D, 0x1A72, SpacingMark),
    (0x1A73, 0x1A7C, Extend),
    (0x1A7F, 0x1A7F, Extend),
    (0x1AB0, 0x1ADD, Extend),
    (0x1AE0, 0x1AEB, Extend),
    (0x1B00, 0x1B03, Extend),
    (0x1B04, 0x1B04, SpacingMark),
    (0x1B34, 0x1B3D, Extend),
    (0x1B3E, 0x1B41, SpacingMark),
    (0x1B42, 0x1B44, Extend),
    (0x1B6B, 0x1B73, Extend),
    (0x1B80, 0x1B81, Extend),
    (0x1B82, 0x1B82, SpacingMark),
    (0x1BA1, 0x1BA1, SpacingMark),
    (0x1BA2, 0x1BA5, Extend),
    (0x1BA6, 0x1BA7, SpacingMark),
    (0x1BA8, 0x1BAD, Extend),
    (0x1BE6, 0x1BE6, Extend),
    (0x1BE7, 0x1BE7, SpacingMark),
    (0x1BE8, 0x1BE9, Extend),
    (0x1BEA, 0x1BEC, SpacingMark),
    (0x1BED, 0x1BED, Extend),
    (0x1BEE, 0x1BEE, SpacingMark),
    (0x1BEF, 0x1BF3, Extend),
    (0x1C24, 0x1C2B, SpacingMark),
    (0x1C2C, 0x1C33, Extend),
    (0x1C34, 0x1C35, SpacingMark),
    (0x1C36, 0x1C37, Extend),
    (0x1CD0, 0x1CD2, Extend),
    (0x1CD4, 0x1CE0, Extend),
    (0x1CE1, 0x1CE1, SpacingMark),
    (0x1CE2, 0x1CE8, Extend),
    (0x1CED, 0x1CED, Extend),
    (0x1CF4, 0x1CF4, Extend),
    (0x1CF7, 0x1CF7, SpacingMark),
    (0x1CF8, 0x1CF9, Extend),
    (0x1DC0, 0x1DFF, Extend),
    (0x200B, 0x200B, Control),
    (0x200C, 0x200C, Extend),
    (0x200D, 0x200D, Zwj),
    (0x200E, 0x200F, Control),
    (0x2028, 0x202E, Control),
    (0x203C, 0x203C, ExtendedPictographic),
    (0x2049, 0x2049, ExtendedPictographic),
    (0x2060, 0x206F, Control),
    (0x20D0, 0x20F0, Extend),
    (0x2122, 0x2122, ExtendedPictographic),
    (0x2139, 0x2139, ExtendedPictographic),
    (0x2194, 0x2199, ExtendedPictographic),
    (0x21A9, 0x21AA, ExtendedPictographic),
    (0x231A, 0x231B, ExtendedPictographic),
    (0x2328, 0x2328, ExtendedPictographic),
    (0x23CF, 0x23CF, ExtendedPictographic),
    (0x23E9, 0x23F3, ExtendedPictographic),
    (0x23F8, 0x23FA, ExtendedPictographic),
    (0x24C2, 0x24C2, ExtendedPictographic),
    (0x25AA, 0x25AB, ExtendedPictographic),
    (0x25B6, 0x25B6, ExtendedPictographic),
    (0x25C0, 0x25C0, ExtendedPictographic),
    (0x25FB, 0x25FE, ExtendedPictographic),
    (0x2600, 0x2604, ExtendedPictographic),
    (0x260E, 0x260E, ExtendedPictographic),
    (0x2611, 0x2611, ExtendedPictographic),
    (0x2614, 0x2615, ExtendedPictographic),
    (0x2618, 0x2618, ExtendedPictographic),
    (0x261D, 0x261D, ExtendedPictographic),
    (0x2620, 0x2620, ExtendedPictographic),
    (0x2622, 0x2623, ExtendedPictographic),
    (0x2626, 0x2626, ExtendedPictographic),
    (0x262A, 0x262A, ExtendedPictographic),
    (0x262E, 0x262F, ExtendedPictographic),
    (0x2638, 0x263A, ExtendedPictographic),
    (0x2640, 0x2640, ExtendedPictographic),
    (0x2642, 0x2642, ExtendedPictographic),
    (0x2648, 0x2653, ExtendedPictographic),
    (0x265F, 0x2660, ExtendedPictographic),
    (0x2663, 0x2663, ExtendedPictographic),
    (0x2665, 0x2666, ExtendedPictographic),
    (0x2668, 0x2668, ExtendedPictographic),
    (0x267B, 0x267B, ExtendedPictographic),
    (0x267E, 0x267F, ExtendedPictographic),
    (0x2692, 0x2697, ExtendedPictographic),
    (0x2699, 0x2699, ExtendedPictographic),
    (0x269B, 0x269C, ExtendedPictographic),
    (0x26A0, 0x26A1, ExtendedPictographic),
    (0x26A7, 0x26A7, ExtendedPictographic),
    (0x26AA, 0x26AB, ExtendedPictographic),
    (0x26B0, 0x26B1, ExtendedPictographic),
    (0x26BD, 0x26BE, ExtendedPictographic),
    (0x26C4, 0x26C5, ExtendedPictographic),
    (0x26C8, 0x26C8, ExtendedPictographic),
    (0x26CE, 0x26CF, ExtendedPictographic),
    (0x26D1, 0x26D1, ExtendedPictographic),
    (0x26D3, 0x26D4, ExtendedPictographic),
    (0x26E9, 0x26EA, ExtendedPictographic),
    (0x26F0, 0x26F5, ExtendedPictographic),
    (0x26F7, 0x26FA, ExtendedPictographic),
    (0x26FD, 0x26FD, ExtendedPictographic),
    (0x2702, 0x2702, ExtendedPictographic),
    (0x2705, 0x2705, ExtendedPictographic),
    (0x2708, 0x270D, ExtendedPictographic),
    (0x270F, 0x270F, ExtendedPictographic),
    (0x2712, 0x2712, ExtendedPictographic),
    (0x2714, 0x2714, ExtendedPictographic),
    (0x2716, 0x2716, ExtendedPictographic),
    (0x271D, 0x271D, ExtendedPictographic),
    (0x2721, 0x2721, ExtendedPictographic),
    (0x2728, 0x2728, ExtendedPictographic),
    (0x2733, 0x2734, ExtendedPictographic),
    (0x2744, 0x2744, ExtendedPictographic),
    (0x2747, 0x2747, ExtendedPictographic),
    (0x274C, 0x274C, ExtendedPictographic),
    (0x274E, 0x274E, ExtendedPictographic),
    (0x2753, 0x2755, ExtendedPictographic),
    (0x2757, 0x2757, ExtendedPictographic),
    (0x2763, 0x2764, ExtendedPictographic),
    (0x2795, 0x2797, ExtendedPictographic),
    (0x27A1, 0x27A1, ExtendedPictographic),
    (0x27B0, 0x27B0, ExtendedPictographic),
    (0x27BF, 0x27BF, ExtendedPictographic),
    (0x2934, 0x2935, ExtendedPictographic),
    (0x2B05, 0x2B07, ExtendedPictographic),
    (0x2B1B, 0x2B1C, ExtendedPictographic),
    (0x2B50, 0x2B50, ExtendedPictographic),
    (0x2B55, 0x2B55, ExtendedPictographic),
    (0x2CEF, 0x2CF1, Extend),
    (0x2D7F, 0x2D7F, Extend),
    (0x2DE0, 0x2DFF, Extend),
    (0x302A, 0x302F, Extend),
    (0x3030, 0x3030, ExtendedPictographic),
    (0x303D, 0x303D, ExtendedPictographic),
    (0x3099, 0x309A, Extend),
    (0x3297, 0x3297, ExtendedPictographic),
    (0x3299, 0x3299, ExtendedPictographic),
    (0xA66F, 0xA672, Extend),
    (0xA674, 0xA67D, Extend),
    (0xA69E, 0xA69F, Extend),
    (0xA6F0, 0xA6F1, Extend),
    (0xA802, 0xA802, Extend),
    (0xA806, 0xA806, Extend),
    (0xA80B, 0xA80B, Extend),
    (0xA823, 0xA824, SpacingMark),
    (0xA825, 0xA826, Extend),
    (0xA827, 0xA827, SpacingMark),
    (0xA82C, 0xA82C, Extend),
    (0xA880, 0xA881, SpacingMark),
    (0xA8B4, 0xA8C3, SpacingMark),
    (0xA8C4, 0xA8C5, Extend),
    (0xA8E0, 0xA8F1, Extend),
    (0xA8FF, 0xA8FF, Extend),
    (0xA926, 0xA92D, Extend),
    (0xA947, 0xA951, Extend),
    (0xA952, 0xA952, SpacingMark),
    (0xA953, 0xA953, Extend),
    (0xA960, 0xA97C, L),
    (0xA980, 0xA982, Extend),
    (0xA983, 0xA983, SpacingMark),
    (0xA9B3, 0xA9B3, Extend),
    (0xA9B4, 0xA9B5, SpacingMark),
    (0xA9B6, 0xA9B9, Extend),
    (0xA9BA, 0xA9BB, SpacingMark),
    (0xA9BC, 0xA9BD, Extend),
    (0xA9BE, 0xA9BF, SpacingMark),
    (0xA9C0, 0xA9C0, Extend),
    (0xA9E5, 0xA9E5, Extend),
    (0xAA29, 0xAA2E, Extend),
    (0xAA2F, 0xAA30, SpacingMark),
    (0xAA31, 0xAA32, Extend),
    (0xAA33, 0xAA34, SpacingMark),
    (0xAA35, 0xAA36, Extend),
    (0xAA43, 0xAA43, Extend),
    (0xAA4C, 0xAA4C, Extend),
    (0xAA4D, 0xAA4D, SpacingMark),
    (0xAA7C, 0xAA7C, Extend),
    (0xAAB0, 0xAAB0, Extend),
    (0xAAB2, 0xAAB4, Extend),
    (0xAAB7, 0xAAB8, Extend),
    (0xAABE, 0xAABF, Extend),
    (0xAAC1, 0xAAC1, Extend),
    (0xAAEB, 0xAAEB, SpacingMark),
    (0xAAEC, 0xAAED, Extend),
    (0xAAEE, 0xAAEF, SpacingMark),
    (0xAAF5, 0xAAF5, SpacingMark),
    (0xAAF6, 0xAAF6, Extend),
    (0xABE3, 0xABE4, SpacingMark),
    (0xABE5, 0xABE5, Extend),
    (0xABE6, 0xABE7, SpacingMark),
    (0xABE8, 0xABE8, Extend),
    (0xABE9, 0xABEA, SpacingMark),
    (0xABEC, 0xABEC, SpacingMark),
    (0xABED, 0xABED, Extend),
    (0xD7B0, 0xD7C6, V),
    (0xD7CB, 0xD7FB, T),
    (0xFB1E, 0xFB1E, Extend),
    (0xFE00, 0xFE0F, Extend),
    (0xFE20, 0xFE2F, Extend),
    (0xFEFF, 0xFEFF, Control),
    (0xFF9E, 0xFF9F, Extend),
    (0xFFF0, 0xFFFB, Control),
    (0x101FD, 0x101FD, Extend),
    (0x102E0, 0x102E0, Extend),
    (0x10376, 0x1037A, Extend),
    (0x10A01, 0x10A03, Extend),
    (0x10A05, 0x10A06, Extend),
    (0x10A0C, 0x10A0F, Extend),
    (0x10A38, 0x10A3A, Extend),
    (0x10A3F, 0x10A3F, Extend),
    (0x10AE5, 0x10AE6, Extend),
    (0x10D24, 0x10D27, Extend),
    (0x10D69, 0x10D6D, Extend),
    (0x10EAB, 0x10EAC, Extend),
    (0x10EFA, 0x10EFF, Extend),
    (0x10F46, 0x10F50, Extend),
    (0x10F82, 0x10F85, Extend),
    (0x11000, 0x11000, SpacingMark),
    (0x11001, 0x11001, Extend),
    (0x11002, 0x11002, SpacingMark),
    (0x11038, 0x11046, Extend),
    (0x11070, 0x11070, Extend),
    (0x11073, 0x11074, Extend),
    (0x1107F, 0x11081, Extend),
    (0x11082, 0x11082, SpacingMark),
    (0x110B0, 0x110B2, SpacingMark),
    (0x110B3, 0x110B6, Extend),
    (0x110B7, 0x110B8, SpacingMark),
    (0x110B9, 0x110BA, Extend),
    (0x110BD, 0x110BD, Prepend),
    (0x110C2, 0x110C2, Extend),
    (0x110CD, 0x110CD, Prepend),
    (0x11100, 0x11102, Extend),
    (0x11127, 0x1112B, Extend),
    (0x1112C, 0x1112C, SpacingMark),
    (0x1112D, 0x11134, Extend),
    (0x11145, 0x11146, SpacingMark),
    (0x11173, 0x11173, Extend),
    (0x11180, 0x11181, Extend),
    (0x11182, 0x11182, SpacingMark),
    (0x111B3, 0x111B5, SpacingMark),
    (0x111B6, 0x111BE, Extend),
    (0x111BF, 0x111BF, SpacingMark),
    (0x111C0, 0x111C0, Extend),
    (0x111C2, 0x111C3, Prepend),
    (0x111C9, 0x111CC, Extend),
    (0x111CE, 0x111CE, SpacingMark),
    (0x111CF, 0x111CF, Extend),
    (0x1122C, 0x1122E, SpacingMark),
    (0x1122F, 0x11231, Extend),
    (0x11232, 0x11233, SpacingMark),
    (0x11234, 0x11237, Extend),
    (0x1123E, 0x1123E, Extend),
    (0x11241, 0x11241, Extend),
    (0x112DF, 0x112DF, Extend),
    (0x112E0, 0x112E2, SpacingMark),
    (0x112E3, 0x112EA, Extend),
    (0x11300, 0x11301, Extend),
    (0x11302, 0x11303, SpacingMark),
    (0x1133B, 0x1133C, Extend),
    (0x1133E, 0x1133E, Extend),
    (0x1133F, 0x1133F, SpacingMark),
    (0x11340, 0x11340, Extend),
    (0x11341, 0x11344, SpacingMark),
    (0x11347, 0x11348, SpacingMark),
    (0x1134B, 0x1134C, SpacingMark),
    (0x1134D, 0x1134D, Extend),
    (0x11357, 0x11357, Extend),
    (0x11362, 0x11363, SpacingMark),
    (0x11366, 0x1136C, Extend),
    (0x11370, 0x11374, Extend),
    (0x113B8, 0x113B8, Extend),
    (0x113B9, 0x113BA, SpacingMark),
    (0x113BB, 0x113C0, Extend),
    (0x113C2, 0x113C2, Extend),
    (0x113C5, 0x113C5, Extend),
    (0x113C7, 0x113C9, Extend),
    (0x113CA, 0x113CA, SpacingMark),
    (0x113CC, 0x113CD, SpacingMark),
    (0x113CE, 0x113D0, Extend),
    (0x113D1, 0x113D1, Prepend),
    (0x113D2, 0x113D2, Extend),
    (0x113E1, 0x113E2, Extend),
    (0x11435, 0x11437, SpacingMark),
    (0x11438, 0x1143F, Extend),
    (0x11440, 0x11441, SpacingMark),
    (0x11442, 0x11444, Extend),
    (0x11445, 0x11445, SpacingMark),
    (0x11446, 0x11446, Extend),
    (0x1145E, 0x1145E, Extend),
    (0x114B0, 0x114B0, Extend),
    (0x114B1, 0x114B2, SpacingMark),
    (0x114B3, 0x114B8, Extend),
    (0x114B9, 0x114B9, SpacingMark),
    (0x114BA, 0x114BA, Extend),
    (0x114BB, 0x114BC, SpacingMark),
    (0x114BD, 0x114BD, Extend),
    (0x114BE, 0x114BE, SpacingMark),
    (0x114BF, 0x114C0, Extend),
    (0x114C1, 0x114C1, SpacingMark),
    (0x114C2, 0x114C3, Extend),
    (0x115AF, 0x115AF, Extend),
    (0x115B0, 0x115B1, SpacingMark),
    (0x115B2, 0x115B5, Extend),
    (0x115B8, 0x115BB, SpacingMark),
    (0x115BC, 0x115BD, Extend),
    (0x115BE, 0x115BE, SpacingMark),
    (0x115BF, 0x115C0, Extend),
    (0x115DC, 0x115DD, Extend),
    (0x11630, 0x11632, SpacingMark),
    (0x11633, 0x1163A, Extend),
    (0x1163B, 0x1163C, SpacingMark),
    (0x1163D, 0x1163D, Extend),
    (0x1163E, 0x1163E, SpacingMark),
    (0x1163F, 0x11640, Extend),
    (0x116AB, 0x116AB, Extend),
    (0x116AC, 0x116AC, SpacingMark),
    (0x116AD, 0x116AD, Extend),
    (0x116AE, 0x116AF, SpacingMark),
    (0x116B0, 0x116B7, Extend),
    (0x1171D, 0x1171D, Extend),
    (0x1171E, 0x1171E, SpacingMark),
    (0x1171F, 0x1171F, Extend),
    (0x11722, 0x11725, Extend),
    (0x11726, 0x11726, SpacingMark),
    (0x11727, 0x1172B, Extend),
    (0x1182C, 0x1182E, SpacingMark),
    (0x1182F, 0x11837, Extend),
    (0x11838, 0x11838, SpacingMark),
    (0x11839, 0x1183A, Extend),
    (0x11930, 0x11930, Extend),
    (0x11931, 0x11935, SpacingMark),
    (0x11937, 0x11938, SpacingMark),
    (0x1193B, 0x1193E, Extend),
    (0x1193F, 0x1193F, Prepend),
    (0x11940, 0x11940, SpacingMark),
    (0x11941, 0x11941, Prepend),
    (0x11942, 0x11942, SpacingMark),
    (0x11943, 0x11943, Extend),
    (0x119D1, 0x119D3, SpacingMark),
    (0x119D4, 0x119D7, Extend),
    (0x119DA, 0x119DB, Extend),
    (0x119DC, 0x119DF, SpacingMark),
    (0x119E0, 0x119E0, Extend),
    (0x119E4, 0x119E4, SpacingMark),
    (0x11A01, 0x11A0A, Extend),
    (0x11A33, 0x11A38, Extend),
    (0x11A39, 0x11A39, SpacingMark),
    (0x11A3B, 0x11A3E, Extend),
    (0x11A47, 0x11A47, Extend),
    (0x11A51, 0x11A56, Extend),
    (0x11A57, 0x11A58, SpacingMark),
    (0x11A59, 0x11A5B, Extend),
    (0x11A84, 0x11A89, Prepend),
    (0x11A8A, 0x11A96, Extend),
    (0x11A97, 0x11A97, SpacingMark),
    (0x11A98, 0x11A99, Extend),
    (0x11B60, 0x11B60, Extend),
    (0x11B61, 0x11B61, SpacingMark),
    (0x11B62, 0x11B64, Extend),
    (0x11B65, 0x11B65, SpacingMark),
    (0x11B66, 0x11B66, Extend),
    (0x11B67, 0x11B67, SpacingMark),
    (0x11C2F, 0x11C2F, SpacingMark),
    (0x11C30, 0x11C36, Extend),
    (0x11C38, 0x11C3D, Extend),
    (0x11C3E, 0x11C3E, SpacingMark),
    (0x11C3F, 0x11C3F, Extend),
    (0x11C92, 0x11CA7, Extend),
    (0x11CA9, 0x11CA9, SpacingMark),
    (0x11CAA, 0x11CB0, Extend),
    (0x11CB1, 0x11CB1, SpacingMark),
    (0x11CB2, 0x11CB3, Extend),
    (0x11CB4, 0x11CB4, SpacingMark),
    (0x11CB5, 0x11CB6, Extend),
    (0x11D31, 0x11D36, Extend),
    (0x11D3A, 0x11D3A, Extend),
    (0x11D3C, 0x11D3D, Extend),
    (0x11D3F, 0x11D45, Extend),
    (0x11D46, 0x11D46, Prepend),
    (0x11D47, 0x11D47, Extend),
    (0x11D8A, 0x11D8E, SpacingMark),
    (0x11D90, 0x11D91, Extend),
    (0x11D93, 0x11D94, SpacingMark),
    (0x11D95, 0x11D95, Extend),
    (0x11D96, 0x11D96, SpacingMark),
    (0x11D97, 0x11D97, Extend),
    (0x11EF3, 0x11EF4, Extend),
    (0x11EF5, 0x11EF6, SpacingMark),
    (0x11F00, 0x11F01, Extend),
    (0x11F02, 0x11F02, Prepend),
    (0x11F03, 0x11F03, SpacingMark),
    (0x11F34, 0x11F35, SpacingMark),
    (0x11F36, 0x11F3A, Extend),
    (0x11F3E, 0x11F3F, SpacingMark),
    (0x11F40, 0x11F42, Extend),
    (0x11F5A, 0x11F5A, Extend),
    (0x13430, 0x1343F, Control),
    (0x13440, 0x13440, Extend),
    (0x13447, 0x13455, Extend),
    (0x1611E, 0x16129, Extend),
    (0x1612A, 0x1612C, SpacingMark),
    (0x1612D, 0x1612F, Extend),
    (0x16AF0, 0x16AF4, Extend),
    (0x16B30, 0x16B36, Extend),
    (0x16D63, 0x16D63, V),
    (0x16D67, 0x16D6A, V),
    (0x16F4F, 0x16F4F, Extend),
    (0x16F51, 0x16F87, SpacingMark),
    (0x16F8F, 0x16F92, Extend),
    (0x16FE4, 0x16FE4, Extend),
    (0x16FF0, 0x16FF1, Extend),
    (0x1BC9D, 0x1BC9E, Extend),
    (0x1BCA0, 0x1BCA3, Control),
    (0x1CF00, 0x1CF2D, Extend),
    (0x1CF30, 0x1CF46, Extend),
    (0x1D165, 0x1D169, Extend),
    (0x1D16D, 0x1D172, Extend),
    (0x1D173, 0x1D17A, Control),
    (0x1D17B, 0x1D182, Extend),
    (0x1D185, 0x1D18B, Extend),
    (0x1D1AA, 0x1D1AD, Extend),
    (0x1D242, 0x1D244, Extend),
    (0x1DA00, 0x1DA36, Extend),
    (0x1DA3B, 0x1DA6C, Extend),
    (0x1DA75, 0x1DA75, Extend),
    (0x1DA84, 0x1DA84, Extend),
    (0x1DA9B, 0x1DA9F, Extend),
    (0x1DAA1, 0x1DAAF, Extend),
    (0x1E000, 0x1E006, Extend),
    (0x1E008, 0x1E018, Extend),
    (0x1E01B, 0x1E021, Extend),
    (0x1E023, 0x1E024, Extend),
    (0x1E026, 0x1E02A, Extend),
    (0x1E08F, 0x1E08F, Extend),
    (0x1E130, 0x1E136, Extend),
    (0x1E2AE, 0x1E2AE, Extend),
    (0x1E2EC, 0x1E2EF, Extend),
    (0x1E4EC, 0x1E4EF, Extend),
    (0x1E5EE, 0x1E5EF, Extend),
    (0x1E6E3, 0x1E6E3, Extend),
    (0x1E6E6, 0x1E6E6, Extend),
    (0x1E6EE, 0x1E6EF, Extend),
    (0x1E6F5, 0x1E6F5, Extend),
    (0x1E8D0, 0x1E8D6, Extend),
    (0x1E944, 0x1E94A, Extend),
    (0x1F004, 0x1F004, ExtendedPictographic),
    (0x1F02C, 0x1F02F, ExtendedPictographic),
    (0x1F094, 0x1F09F, ExtendedPictographic),
    (0x1F0AF, 0x1F0B0, ExtendedPictographic),
    (0x1F0C0, 0x1F0C0, ExtendedPictographic),
    (0x1F0CF, 0x1F0D0, ExtendedPictographic),
    (0x1F0F6, 0x1F0FF, ExtendedPictographic),
    (0x1F170, 0x1F171, ExtendedPictographic),
    (0x1F17E, 0x1F17F, ExtendedPictographic),
    (0x1F18E, 0x1F18E, ExtendedPictographic),
    (0x1F191, 0x1F19A, ExtendedPictographic),
    (0x1F1AE, 0x1F1E5, ExtendedPictographic),
    (0x1F1E6, 0x1F1FF, RegionalIndicator),
    (0x1F201, 0x1F20F, ExtendedPictographic),
    (0x1F21A, 0x1F21A, ExtendedPictographic),
    (0x1F22F, 0x1F22F, ExtendedPictographic),
    (0x1F232, 0x1F23A, ExtendedPictographic),
    (0x1F23C, 0x1F23F, ExtendedPictographic),
    (0x1F249, 0x1F25F, ExtendedPictographic),
    (0x1F266, 0x1F321, ExtendedPictographic),
    (0x1F324, 0x1F393, ExtendedPictographic),
    (0x1F396, 0x1F397, ExtendedPictographic),
    (0x1F399, 0x1F39B, ExtendedPictographic),
    (0x1F39E, 0x1F3F0, ExtendedPictographic),
    (0x1F3F3, 0x1F3F5, ExtendedPictographic),
    (0x1F3F7, 0x1F3FA, ExtendedPictographic),
    (0x1F3FB, 0x1F3FF, Extend),
    (0x1F400, 0x1F4FD, ExtendedPictographic),
    (0x1F4FF, 0x1F53D, ExtendedPictographic),
    (0x1F549, 0x1F54E, ExtendedPictographic),
    (0x1F550, 0x1F567, ExtendedPictographic),
    (0x1F56F, 0x1F570, ExtendedPictographic),
    (0x1F573, 0x1F57A, ExtendedPictographic),
    (0x1F587, 0x1F587, ExtendedPictographic),
    (0x1F58A, 0x1F58D, ExtendedPictographic),
    (0x1F590, 0x1F590, ExtendedPictographic),
    (0x1F595, 0x1F596, ExtendedPictographic),
    (0x1F5A4, 0x1F5A5, ExtendedPictographic),
    (0x1F5A8, 0x1F5A8, ExtendedPictographic),
    (0x1F5B1, 0x1F5B2, ExtendedPictographic),
    (0x1F5BC, 0x1F5BC, ExtendedPictographic),
    (0x1F5C2, 0x1F5C4, ExtendedPictographic),
    (0x1F5D1, 0x1F5D3, ExtendedPictographic),
    (0x1F5DC, 0x1F5DE, ExtendedPictographic),
    (0x1F5E1, 0x1F5E1, ExtendedPictographic),
    (0x1F5E3, 0x1F5E3, ExtendedPictographic),
    (0x1F5E8, 0x1F5E8, ExtendedPictographic),
    (0x1F5EF, 0x1F5EF, ExtendedPictographic),
    (0x1F5F3, 0x1F5F3, ExtendedPictographic),
    (0x1F5FA, 0x1F64F, ExtendedPictographic),
    (0x1F680, 0x1F6C5, ExtendedPictographic),
    (0x1F6CB, 0x1F6D2, ExtendedPictographic),
    (0x1F6D5, 0x1F6E5, ExtendedPictographic),
    (0x1F6E9, 0x1F6E9, ExtendedPictographic),
    (0x1F6EB, 0x1F6F0, ExtendedPictographic),
    (0x1F6F3, 0x1F6FF, ExtendedPictographic),
    (0x1F7DA, 0x1F7FF, ExtendedPictographic),
    (0x1F80C, 0x1F80F, ExtendedPictographic),
    (0x1F848, 0x1F84F, ExtendedPictographic),
    (0x1F85A, 0x1F85F, ExtendedPictographic),
    (0x1F888, 0x1F88F, ExtendedPictographic),
    (0x1F8AE, 0x1F8AF, ExtendedPictographic),
    (0x1F8BC, 0x1F8BF, ExtendedPictographic),
    (0x1F8C2, 0x1F8CF, ExtendedPictographic),
    (0x1F8D9, 0x1F8FF, ExtendedPictographic),
    (0x1F90C, 0x1F93A, ExtendedPictographic),
    (0x1F93C, 0x1F945, ExtendedPictographic),
    (0x1F947, 0x1F9FF, ExtendedPictographic),
    (0x1FA58, 0x1FA5F, ExtendedPictographic),
    (0x1FA6E, 0x1FAFF, ExtendedPictographic),
    (0x1FC00, 0x1FFFD, ExtendedPictographic),
    (0xE0000, 0xE001F, Control),
    (0xE0020, 0xE007F, Extend),
    (0xE0080, 0xE00FF, Control),
    (0xE0100, 0xE01EF, Extend),
    (0xE01F0, 0xE0FFF, Control),
];

pub(super) static EMOJI_PRESENTATION: &[(u32, u32)] = &[
    (0x231A, 0x231B),
    (0x23E9, 0x23EC),
    (0x23F0, 0x23F0),
    (0x23F3, 0x23F3),
    (0x25FD, 0x25FE),
    (0x2614, 0x2615),
    (0x2648, 0x2653),
    (0x267F, 0x267F),
    (0x2693, 0x2693),
    (0x26A1, 0x26A1),
    (0x26AA, 0x26AB),
    (0x26BD, 0x26BE),
    (0x26C4, 0x26C5),
    (0x26CE, 0x26CE),
    (0x26D4, 0x26D4),
    (0x26EA, 0x26EA),
    (0x26F2, 0x26F3),
    (0x26F5, 0x26F5),
    (0x26FA, 0x26FA),
    (0x26FD, 0x26FD),
    (0x2705, 0x2705),
    (0x270A, 0x270B),
    (0x2728, 0x2728),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2795, 0x2797),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x1F004, 0x1F004),
    (0x1F0CF, 0x1F0CF),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F1E6, 0x1F1FF),
    (0x1F201, 0x1F201),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F236),
    (0x1F238, 0x1F23A),
    (0x1F250, 0x1F251),
    (0x1F300, 0x1F320),
    (0x1F32D, 0x1F335),
    (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393),
    (0x1F3A0, 0x1F3CA),
    (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0),
    (0x1F3F4, 0x1F3F4),
    (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440),
    (0x1F442, 0x1F4FC),
    (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E),
    (0x1F550, 0x1F567),
    (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596),
    (0x1F5A4, 0x1F5A4),
    (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5),
    (0x1F6CC, 0x1F6CC),
    (0x1F6D0, 0x1F6D2),
    (0x1F6D5, 0x1F6D8),
    (0x1F6DC, 0x1F6DF),
    (0x1F6EB, 0x1F6EC),
    (0x1F6F4, 0x1F6FC),
    (0x1F7E0, 0x1F7EB),
    (0x1F7F0, 0x1F7F0),
    (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1F9FF),
    (0x1FA70, 0x1FA7C),
    (0x1FA80, 0x1FA8A),
    (0x1FA8E, 0x1FAC6),
    (0x1FAC8, 0x1FAC8),
    (0x1FACD, 0x1FADC),
    (0x1FADF, 0x1FAEA),
    (0x1FAEF, 0x1FAF8),
];
