#![forbid(unsafe_code)]

//! Per-rune width classification.
//!
//! Rules, first match wins:
//!
//! 1. Control, CR, LF, Extend, ZWJ: 0 cells.
//! 2. Regional indicator: 2 cells (each half of a flag pair).
//! 3. Extended pictographic: 2 cells with Emoji_Presentation, else 1.
//! 4. U+2E3A TWO-EM DASH: 3 cells. U+2E3B THREE-EM DASH: 4 cells.
//! 5. Packed table, with Ambiguous widened by the configuration and
//!    unassigned code points counted as [`UNASSIGNED_WIDTH`].

use crate::config::{AmbiguousWidth, WidthConfig};
use crate::properties::{GraphemeProperty, grapheme_property, has_emoji_presentation};
use crate::table::{self, TableWidth};

/// U+2E3A TWO-EM DASH.
pub const TWO_EM_DASH: char = '\u{2E3A}';
/// U+2E3B THREE-EM DASH.
pub const THREE_EM_DASH: char = '\u{2E3B}';

/// Width assumed for code points the table marks as unassigned.
pub const UNASSIGNED_WIDTH: usize = 1;

impl WidthConfig {
    /// Cell width of `c`, given its grapheme property.
    #[must_use]
    pub fn rune_width(&self, c: char, property: GraphemeProperty) -> usize {
        if property.is_zero_width() {
            return 0;
        }
        match property {
            GraphemeProperty::RegionalIndicator => return 2,
            GraphemeProperty::ExtendedPictographic => {
                return if has_emoji_presentation(c) { 2 } else { 1 };
            }
            _ => {}
        }

        match c {
            TWO_EM_DASH => return 3,
            THREE_EM_DASH => return 4,
            _ => {}
        }

        match table::lookup(u32::from(c)) {
            TableWidth::Narrow
                if self.ambiguous == AmbiguousWidth::Wide && table::is_ambiguous(c) =>
            {
                AmbiguousWidth::Wide.cells()
            }
            width => width.cells_or(UNASSIGNED_WIDTH),
        }
    }

    /// Cell width of a lone `c`, looking up its grapheme property.
    #[inline]
    #[must_use]
    pub fn char_width(&self, c: char) -> usize {
        self.rune_width(c, grapheme_property(c))
    }
}

/// Cell width of `c` under the process-wide configuration.
#[inline]
#[must_use]
pub fn rune_width(c: char, property: GraphemeProperty) -> usize {
    WidthConfig::current().rune_width(c, property)
}

/// Cell width of a lone `c` under the process-wide configuration.
#[inline]
#[must_use]
pub fn char_width(c: char) -> usize {
    WidthConfig::current().char_width(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NARROW: WidthConfig = WidthConfig::new();
    const WIDE: WidthConfig = WidthConfig::with_ambiguous(AmbiguousWidth::Wide);

    #[test]
    fn zero_width_properties_override_table() {
        // 'A' is narrow in the table; the property decides.
        for prop in [
            GraphemeProperty::Control,
            GraphemeProperty::Cr,
            GraphemeProperty::Lf,
            GraphemeProperty::Extend,
            GraphemeProperty::Zwj,
        ] {
            assert_eq!(NARROW.rune_width('A', prop), 0, "{prop:?}");
            assert_eq!(NARROW.rune_width('\u{4E00}', prop), 0, "{prop:?}");
        }
    }

    #[test]
    fn only_zero_width_properties_give_zero() {
        for prop in [
            GraphemeProperty::Other,
            GraphemeProperty::Cr,
            GraphemeProperty::Lf,
            GraphemeProperty::Control,
            GraphemeProperty::Extend,
            GraphemeProperty::Zwj,
            GraphemeProperty::RegionalIndicator,
            GraphemeProperty::Prepend,
            GraphemeProperty::SpacingMark,
            GraphemeProperty::L,
            GraphemeProperty::V,
            GraphemeProperty::T,
            GraphemeProperty::Lv,
            GraphemeProperty::Lvt,
            GraphemeProperty::ExtendedPictographic,
        ] {
            assert_eq!(
                NARROW.rune_width('A', prop) == 0,
                prop.is_zero_width(),
                "{prop:?}"
            );
        }
    }

    #[test]
    fn regional_indicator_is_wide() {
        assert_eq!(
            NARROW.rune_width('\u{1F1FA}', GraphemeProperty::RegionalIndicator),
            2
        );
        assert_eq!(NARROW.char_width('\u{1F1E6}'), 2);
    }

    #[test]
    fn pictographs_follow_emoji_presentation() {
        let prop = GraphemeProperty::ExtendedPictographic;
        assert_eq!(NARROW.rune_width('\u{1F600}', prop), 2);
        assert_eq!(NARROW.rune_width('\u{231A}', prop), 2);
        assert_eq!(NARROW.rune_width('\u{2764}', prop), 1);
        assert_eq!(NARROW.rune_width('\u{00A9}', prop), 1);
    }

    #[test]
    fn em_dashes_regardless_of_property() {
        for prop in [
            GraphemeProperty::Other,
            GraphemeProperty::Prepend,
            GraphemeProperty::SpacingMark,
            GraphemeProperty::L,
        ] {
            assert_eq!(NARROW.rune_width(TWO_EM_DASH, prop), 3);
            assert_eq!(NARROW.rune_width(THREE_EM_DASH, prop), 4);
            assert_eq!(WIDE.rune_width(TWO_EM_DASH, prop), 3);
        }
    }

    #[test]
    fn table_widths() {
        assert_eq!(NARROW.char_width('a'), 1);
        assert_eq!(NARROW.char_width('\u{4E2D}'), 2);
        assert_eq!(NARROW.char_width('\u{FF01}'), 2);
        assert_eq!(NARROW.char_width('\u{FF76}'), 1);
        assert_eq!(NARROW.rune_width('\u{0301}', GraphemeProperty::Other), 0);
    }

    #[test]
    fn unassigned_counts_as_one() {
        assert_eq!(table::lookup(0x0378), TableWidth::Unassigned);
        assert_eq!(NARROW.rune_width('\u{0378}', GraphemeProperty::Other), 1);
        assert_eq!(NARROW.char_width('\u{0378}'), UNASSIGNED_WIDTH);
        // C1 control decoded without its Control property.
        assert_eq!(NARROW.rune_width('\u{0085}', GraphemeProperty::Other), 1);
    }

    #[test]
    fn ambiguous_follows_config() {
        assert_eq!(NARROW.char_width('\u{00A1}'), 1);
        assert_eq!(WIDE.char_width('\u{00A1}'), 2);
        assert_eq!(NARROW.char_width('\u{2460}'), 1);
        assert_eq!(WIDE.char_width('\u{2460}'), 2);
        // Not ambiguous: unaffected.
        assert_eq!(WIDE.char_width('a'), 1);
        assert_eq!(WIDE.char_width('\u{4E00}'), 2);
    }

    #[test]
    fn ambiguous_combining_marks_stay_zero() {
        // U+0300..U+036F are East Asian Ambiguous but combining.
        assert!(table::is_ambiguous('\u{0301}'));
        assert_eq!(WIDE.rune_width('\u{0301}', GraphemeProperty::Other), 0);
    }

    #[test]
    fn hangul_syllable_is_wide() {
        assert_eq!(NARROW.char_width('\u{D55C}'), 2);
    }
}
