#![forbid(unsafe_code)]

//! Packed width table.
//!
//! The mapping from every code point to its cell width is stored as an
//! implicit three-tier trie over the bits of the code point:
//!
//! ```text
//!  20        13 12        6 5     2 1 0
//! +------------+-----------+-------+---+
//! |   tier 1   |  tier 2   |tier 3 |sel|
//! +------------+-----------+-------+---+
//! ```
//!
//! - Tier 1 has 256 entries, each naming a 128-entry block of tier 2.
//! - Tier 2 entries name a 16-byte block of tier 3.
//! - Each tier-3 byte packs four 2-bit width codes; the low two bits of the
//!   code point select one.
//!
//! Identical blocks are shared, which keeps the whole table a few kilobytes
//! instead of one entry per code point. Code 3 is reserved for code points
//! with no assigned width and surfaces as [`TableWidth::Unassigned`].
//!
//! East Asian Ambiguous code points are stored as narrow; [`is_ambiguous`]
//! lets the classifier widen them at runtime.

mod ambiguous;
mod packed;

use packed::{TIER1, TIER2, TIER3};

/// Highest code point the trie can address (21 bits).
pub const MAX_INDEXED: u32 = 0x1F_FFFF;

const UNASSIGNED_CODE: u8 = 0b11;

/// Width code decoded from the packed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableWidth {
    /// Combining, enclosing and most format characters.
    Zero,
    /// Ordinary single-cell characters (including Ambiguous).
    Narrow,
    /// East Asian Wide and Fullwidth characters.
    Wide,
    /// Unassigned, surrogate, C0/C1 control or out-of-range code points.
    Unassigned,
}

impl TableWidth {
    /// Numeric form: `0`, `1`, `2`, or `-1` for [`TableWidth::Unassigned`].
    #[must_use]
    pub const fn raw(self) -> i8 {
        match self {
            Self::Zero => 0,
            Self::Narrow => 1,
            Self::Wide => 2,
            Self::Unassigned => -1,
        }
    }

    /// Cell count, or `None` for [`TableWidth::Unassigned`].
    #[must_use]
    pub const fn cells(self) -> Option<usize> {
        match self {
            Self::Zero => Some(0),
            Self::Narrow => Some(1),
            Self::Wide => Some(2),
            Self::Unassigned => None,
        }
    }

    /// Cell count, substituting `default` for [`TableWidth::Unassigned`].
    #[must_use]
    pub const fn cells_or(self, default: usize) -> usize {
        match self.cells() {
            Some(cells) => cells,
            None => default,
        }
    }

    const fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Zero,
            1 => Self::Narrow,
            2 => Self::Wide,
            _ => Self::Unassigned,
        }
    }
}

/// Decode the width code of `code_point` from the packed table.
///
/// Constant time for every input. Values above [`MAX_INDEXED`] (including
/// negative `i32` values cast to `u32`) are reported as unassigned instead of
/// being masked back into range.
#[inline]
#[must_use]
pub fn lookup(code_point: u32) -> TableWidth {
    if code_point > MAX_INDEXED {
        return TableWidth::Unassigned;
    }
    let cp = code_point as usize;

    let t2_block = usize::from(TIER1[(cp >> 13) & 0xFF]);
    let t3_block = usize::from(TIER2[128 * t2_block + ((cp >> 6) & 0x7F)]);
    let packed = TIER3[16 * t3_block + ((cp >> 2) & 0xF)];
    let code = (packed >> (2 * (cp & 0b11))) & 0b11;

    if code == UNASSIGNED_CODE {
        TableWidth::Unassigned
    } else {
        TableWidth::from_code(code)
    }
}

/// Whether `c` has East Asian Width `A` (Ambiguous).
#[must_use]
pub fn is_ambiguous(c: char) -> bool {
    let cp = u32::from(c);
    ambiguous::AMBIGUOUS
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_sizes_are_consistent() {
        assert_eq!(TIER1.len(), 256);
        assert_eq!(TIER2.len() % 128, 0);
        assert_eq!(TIER3.len() % 16, 0);
        let t2_blocks = TIER2.len() / 128;
        let t3_blocks = TIER3.len() / 16;
        assert!(TIER1.iter().all(|&b| usize::from(b) < t2_blocks));
        assert!(TIER2.iter().all(|&b| usize::from(b) < t3_blocks));
    }

    #[test]
    fn ascii_is_narrow() {
        for cp in 0x20..=0x7E {
            assert_eq!(lookup(cp), TableWidth::Narrow, "U+{cp:04X}");
        }
    }

    #[test]
    fn c0_and_c1_controls_are_unassigned() {
        for cp in (0x00..=0x1F).chain(0x7F..=0x9F) {
            assert_eq!(lookup(cp), TableWidth::Unassigned, "U+{cp:04X}");
        }
    }

    #[test]
    fn combining_marks_are_zero() {
        assert_eq!(lookup(0x0301), TableWidth::Zero);
        assert_eq!(lookup(0x20D0), TableWidth::Zero);
        assert_eq!(lookup(0xFE0F), TableWidth::Zero);
        assert_eq!(lookup(0x200B), TableWidth::Zero);
    }

    #[test]
    fn hangul_medial_vowels_are_zero() {
        assert_eq!(lookup(0x1160), TableWidth::Zero);
        assert_eq!(lookup(0x11FF), TableWidth::Zero);
        assert_eq!(lookup(0xD7B0), TableWidth::Zero);
    }

    #[test]
    fn wide_and_fullwidth() {
        assert_eq!(lookup(0x1100), TableWidth::Wide);
        assert_eq!(lookup(0x4E00), TableWidth::Wide);
        assert_eq!(lookup(0xAC00), TableWidth::Wide);
        assert_eq!(lookup(0xFF01), TableWidth::Wide);
        assert_eq!(lookup(0x1F600), TableWidth::Wide);
        assert_eq!(lookup(0x20000), TableWidth::Wide);
    }

    #[test]
    fn unassigned_code_points() {
        assert_eq!(lookup(0x0378), TableWidth::Unassigned);
        assert_eq!(lookup(0xD800), TableWidth::Unassigned);
        assert_eq!(lookup(0xDFFF), TableWidth::Unassigned);
    }

    #[test]
    fn soft_hyphen_and_prepended_marks_stay_narrow() {
        assert_eq!(lookup(0x00AD), TableWidth::Narrow);
        assert_eq!(lookup(0x0600), TableWidth::Narrow);
    }

    #[test]
    fn guard_range_decodes_unassigned() {
        assert_eq!(lookup(0x11_0000), TableWidth::Unassigned);
        assert_eq!(lookup(0x1F_FFFF), TableWidth::Unassigned);
        assert_eq!(lookup(0x20_0041), TableWidth::Unassigned);
        assert_eq!(lookup(u32::MAX), TableWidth::Unassigned);
        assert_eq!(lookup(-1i32 as u32), TableWidth::Unassigned);
    }

    #[test]
    fn raw_values() {
        assert_eq!(TableWidth::Zero.raw(), 0);
        assert_eq!(TableWidth::Narrow.raw(), 1);
        assert_eq!(TableWidth::Wide.raw(), 2);
        assert_eq!(TableWidth::Unassigned.raw(), -1);
    }

    #[test]
    fn cells_or_substitutes_default_only_for_unassigned() {
        assert_eq!(TableWidth::Unassigned.cells_or(1), 1);
        assert_eq!(TableWidth::Zero.cells_or(1), 0);
        assert_eq!(TableWidth::Wide.cells_or(1), 2);
    }

    #[test]
    fn ambiguous_lookup() {
        assert!(is_ambiguous('\u{00A1}'));
        assert!(is_ambiguous('\u{2460}'));
        assert!(is_ambiguous('\u{E000}'));
        assert!(!is_ambiguous('a'));
        assert!(!is_ambiguous('\u{4E00}'));
    }

    #[test]
    fn ambiguous_ranges_sorted_and_disjoint() {
        for pair in ambiguous::AMBIGUOUS.windows(2) {
            assert!(pair[0].0 <= pair[0].1);
            assert!(pair[0].1 < pair[1].0);
        }
    }

    #[test]
    fn ambiguous_code_points_are_narrow_or_zero_in_table() {
        for &(lo, hi) in ambiguous::AMBIGUOUS {
            for cp in lo..=hi {
                let w = lookup(cp);
                assert!(
                    matches!(w, TableWidth::Narrow | TableWidth::Zero),
                    "U+{cp:04X} decoded as {w:?}"
                );
            }
        }
    }
}
