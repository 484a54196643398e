#![forbid(unsafe_code)]

//! Unicode property lookup used by the width classifier.
//!
//! Two properties are needed: the Grapheme_Cluster_Break value of a rune
//! (with Extended_Pictographic folded in, as UAX #29 treats them as mutually
//! exclusive) and whether the rune has Emoji_Presentation by default.

mod data;

use std::cmp::Ordering;

/// Grapheme_Cluster_Break classification of a rune.
///
/// [`GraphemeProperty::ExtendedPictographic`] is derived from the emoji
/// data rather than the break property itself, but is never assigned to a
/// rune that has any other break value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphemeProperty {
    /// No break property applies.
    #[default]
    Other,
    Cr,
    Lf,
    Control,
    Extend,
    Zwj,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    /// Hangul leading consonant jamo.
    L,
    /// Hangul vowel jamo.
    V,
    /// Hangul trailing consonant jamo.
    T,
    /// Precomposed Hangul syllable without a trailing consonant.
    Lv,
    /// Precomposed Hangul syllable with a trailing consonant.
    Lvt,
    ExtendedPictographic,
}

impl GraphemeProperty {
    /// Properties whose runes never advance the cursor.
    #[must_use]
    pub const fn is_zero_width(self) -> bool {
        matches!(
            self,
            Self::Control | Self::Cr | Self::Lf | Self::Extend | Self::Zwj
        )
    }
}

/// Unicode version of the property data and the packed width table.
///
/// Must equal the version `unicode-segmentation` segments with, or newly
/// encoded emoji get a cluster boundary but no emoji presentation.
pub const UNICODE_VERSION: (u8, u8, u8) = (17, 0, 0);

const HANGUL_BASE: u32 = 0xAC00;
const HANGUL_LAST: u32 = 0xD7A3;
const HANGUL_T_COUNT: u32 = 28;

/// Look up the grapheme property of `c`.
#[must_use]
pub fn grapheme_property(c: char) -> GraphemeProperty {
    let cp = u32::from(c);
    if cp < 0x7F {
        return match cp {
            0x0A => GraphemeProperty::Lf,
            0x0D => GraphemeProperty::Cr,
            0x00..=0x1F => GraphemeProperty::Control,
            _ => GraphemeProperty::Other,
        };
    }
    if (HANGUL_BASE..=HANGUL_LAST).contains(&cp) {
        return if (cp - HANGUL_BASE).is_multiple_of(HANGUL_T_COUNT) {
            GraphemeProperty::Lv
        } else {
            GraphemeProperty::Lvt
        };
    }
    data::GRAPHEME
        .binary_search_by(|&(lo, hi, _)| range_ordering(lo, hi, cp))
        .map_or(GraphemeProperty::Other, |idx| data::GRAPHEME[idx].2)
}

/// Whether `c` is displayed as an emoji (rather than text) by default.
#[must_use]
pub fn has_emoji_presentation(c: char) -> bool {
    let cp = u32::from(c);
    data::EMOJI_PRESENTATION
        .binary_search_by(|&(lo, hi)| range_ordering(lo, hi, cp))
        .is_ok()
}

#[inline]
fn range_ordering(lo: u32, hi: u32, cp: u32) -> Ordering {
    if hi < cp {
        Ordering::Less
    } else if lo > cp {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_properties() {
        assert_eq!(grapheme_property('a'), GraphemeProperty::Other);
        assert_eq!(grapheme_property(' '), GraphemeProperty::Other);
        assert_eq!(grapheme_property('\n'), GraphemeProperty::Lf);
        assert_eq!(grapheme_property('\r'), GraphemeProperty::Cr);
        assert_eq!(grapheme_property('\t'), GraphemeProperty::Control);
        assert_eq!(grapheme_property('\u{7F}'), GraphemeProperty::Control);
    }

    #[test]
    fn marks_and_joiners() {
        assert_eq!(grapheme_property('\u{0301}'), GraphemeProperty::Extend);
        assert_eq!(grapheme_property('\u{FE0F}'), GraphemeProperty::Extend);
        assert_eq!(grapheme_property('\u{200D}'), GraphemeProperty::Zwj);
        assert_eq!(grapheme_property('\u{0903}'), GraphemeProperty::SpacingMark);
        assert_eq!(grapheme_property('\u{0600}'), GraphemeProperty::Prepend);
    }

    #[test]
    fn hangul_jamo_and_syllables() {
        assert_eq!(grapheme_property('\u{1100}'), GraphemeProperty::L);
        assert_eq!(grapheme_property('\u{1161}'), GraphemeProperty::V);
        assert_eq!(grapheme_property('\u{11A8}'), GraphemeProperty::T);
        assert_eq!(grapheme_property('\u{AC00}'), GraphemeProperty::Lv);
        assert_eq!(grapheme_property('\u{AC01}'), GraphemeProperty::Lvt);
        assert_eq!(grapheme_property('\u{AC1C}'), GraphemeProperty::Lv);
        assert_eq!(grapheme_property('\u{D7A3}'), GraphemeProperty::Lvt);
    }

    #[test]
    fn regional_indicators() {
        assert_eq!(
            grapheme_property('\u{1F1E6}'),
            GraphemeProperty::RegionalIndicator
        );
        assert_eq!(
            grapheme_property('\u{1F1FF}'),
            GraphemeProperty::RegionalIndicator
        );
    }

    #[test]
    fn pictographs() {
        assert_eq!(
            grapheme_property('\u{1F600}'),
            GraphemeProperty::ExtendedPictographic
        );
        assert_eq!(
            grapheme_property('\u{00A9}'),
            GraphemeProperty::ExtendedPictographic
        );
        assert_eq!(
            grapheme_property('\u{2764}'),
            GraphemeProperty::ExtendedPictographic
        );
    }

    #[test]
    fn emoji_presentation() {
        assert!(has_emoji_presentation('\u{1F600}'));
        assert!(has_emoji_presentation('\u{231A}'));
        assert!(!has_emoji_presentation('\u{00A9}'));
        assert!(!has_emoji_presentation('\u{2764}'));
        assert!(!has_emoji_presentation('a'));
    }

    #[test]
    fn recent_emoji_have_presentation() {
        // Unicode 15: shaking face, light blue heart. Unicode 16: face with
        // bags under eyes. Unicode 17: distorted face.
        for c in ['\u{1FAE8}', '\u{1FA77}', '\u{1FAE9}', '\u{1FAEA}'] {
            assert_eq!(grapheme_property(c), GraphemeProperty::ExtendedPictographic, "{c:?}");
            assert!(has_emoji_presentation(c), "{c:?}");
        }
    }

    #[test]
    fn data_matches_segmenter_unicode_version() {
        let (major, minor, update) = UNICODE_VERSION;
        assert_eq!(
            unicode_segmentation::UNICODE_VERSION,
            (u64::from(major), u64::from(minor), u64::from(update))
        );
    }

    #[test]
    fn zero_width_set() {
        for prop in [
            GraphemeProperty::Control,
            GraphemeProperty::Cr,
            GraphemeProperty::Lf,
            GraphemeProperty::Extend,
            GraphemeProperty::Zwj,
        ] {
            assert!(prop.is_zero_width(), "{prop:?}");
        }
        assert!(!GraphemeProperty::Other.is_zero_width());
        assert!(!GraphemeProperty::RegionalIndicator.is_zero_width());
    }

    #[test]
    fn grapheme_ranges_sorted_and_disjoint() {
        for pair in data::GRAPHEME.windows(2) {
            assert!(pair[0].0 <= pair[0].1);
            assert!(pair[0].1 < pair[1].0);
        }
        for pair in data::EMOJI_PRESENTATION.windows(2) {
            assert!(pair[0].1 < pair[1].0);
        }
    }
}
