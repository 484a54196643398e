//! Property-based invariant tests for width classification and measurement.
//!
//! 1. Table lookup never panics and only yields -1, 0, 1 or 2.
//! 2. Code points past the index range are unassigned.
//! 3. Zero-width properties give 0 regardless of the rune.
//! 4. Regional indicators give 2 regardless of the rune.
//! 5. Rune widths never exceed 4 cells.
//! 6. Printable ASCII width equals byte length.
//! 7. Width is additive across hard cluster boundaries.
//! 8. String width equals the sum of cluster widths.
//! 9. Clusters cover the input exactly.
//! 10. Wide ambiguous policy never shrinks a string.
//! 11. Malformed bytes are measured without panicking.

use ftui_width::table::{self, MAX_INDEXED};
use ftui_width::{AmbiguousWidth, GraphemeProperty, TableWidth, WidthConfig};
use proptest::prelude::*;

const NARROW: WidthConfig = WidthConfig::new();
const WIDE: WidthConfig = WidthConfig::with_ambiguous(AmbiguousWidth::Wide);

// ── Helpers ─────────────────────────────────────────────────────────────

fn config_strategy() -> impl Strategy<Value = WidthConfig> {
    prop_oneof![Just(NARROW), Just(WIDE)]
}

fn zero_width_property() -> impl Strategy<Value = GraphemeProperty> {
    prop_oneof![
        Just(GraphemeProperty::Control),
        Just(GraphemeProperty::Cr),
        Just(GraphemeProperty::Lf),
        Just(GraphemeProperty::Extend),
        Just(GraphemeProperty::Zwj),
    ]
}

fn any_property() -> impl Strategy<Value = GraphemeProperty> {
    prop_oneof![
        zero_width_property(),
        Just(GraphemeProperty::Other),
        Just(GraphemeProperty::RegionalIndicator),
        Just(GraphemeProperty::Prepend),
        Just(GraphemeProperty::SpacingMark),
        Just(GraphemeProperty::L),
        Just(GraphemeProperty::V),
        Just(GraphemeProperty::T),
        Just(GraphemeProperty::Lv),
        Just(GraphemeProperty::Lvt),
        Just(GraphemeProperty::ExtendedPictographic),
    ]
}

/// Text mixing scripts that exercise every classifier branch.
fn mixed_text() -> impl Strategy<Value = String> {
    "[a-z \\t\\r\\n\u{00A1}\u{00E9}\u{0301}\u{0600}\u{0915}\u{094D}\u{1100}\u{1161}\u{200D}\u{2460}\u{2764}\u{2E3A}\u{2E3B}\u{4E00}-\u{4E10}\u{AC00}\u{FE0F}\u{FF01}\u{1F1E6}-\u{1F1FF}\u{1F3FB}\u{1F468}\u{1F600}]{0,40}"
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Table lookup
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lookup_yields_known_codes(cp in any::<u32>()) {
        let width = table::lookup(cp);
        prop_assert!(matches!(width.raw(), -1..=2), "cp={:#X} raw={}", cp, width.raw());
        prop_assert_eq!(width, table::lookup(cp));
    }

    #[test]
    fn lookup_past_index_is_unassigned(cp in (MAX_INDEXED + 1)..=u32::MAX) {
        prop_assert_eq!(table::lookup(cp), TableWidth::Unassigned);
    }

    #[test]
    fn lookup_beyond_unicode_is_unassigned(cp in 0x11_0000u32..=MAX_INDEXED) {
        prop_assert_eq!(table::lookup(cp), TableWidth::Unassigned);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-5. Rune classification
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zero_width_properties_win(
        c in any::<char>(),
        property in zero_width_property(),
        config in config_strategy(),
    ) {
        prop_assert_eq!(config.rune_width(c, property), 0, "c={:?}", c);
    }

    #[test]
    fn regional_indicator_is_wide(c in any::<char>(), config in config_strategy()) {
        prop_assert_eq!(config.rune_width(c, GraphemeProperty::RegionalIndicator), 2);
    }

    #[test]
    fn rune_width_is_bounded(
        c in any::<char>(),
        property in any_property(),
        config in config_strategy(),
    ) {
        prop_assert!(config.rune_width(c, property) <= 4);
    }

    #[test]
    fn char_width_is_bounded(c in any::<char>(), config in config_strategy()) {
        let width = config.char_width(c);
        if c == ftui_width::THREE_EM_DASH {
            prop_assert_eq!(width, 4);
        } else if c == ftui_width::TWO_EM_DASH {
            prop_assert_eq!(width, 3);
        } else {
            prop_assert!(width <= 2, "c={:?} width={}", c, width);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6-9. String measurement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn printable_ascii_width_is_len(s in "[ -~]{0,80}") {
        prop_assert_eq!(NARROW.string_width(&s), s.len());
        prop_assert_eq!(WIDE.string_width(&s), s.len());
    }

    #[test]
    fn additive_across_script_boundaries(
        ascii in "[a-zA-Z0-9 ]{0,20}",
        cjk in "[\u{4E00}-\u{9FFF}]{0,20}",
    ) {
        let joined = format!("{ascii}{cjk}{ascii}");
        prop_assert_eq!(
            NARROW.string_width(&joined),
            2 * NARROW.string_width(&ascii) + NARROW.string_width(&cjk)
        );
        prop_assert_eq!(NARROW.string_width(&cjk), 2 * cjk.chars().count());
    }

    #[test]
    fn width_is_sum_of_clusters(s in mixed_text(), config in config_strategy()) {
        let summed: usize = config.clusters(&s).map(|(_, width)| width).sum();
        prop_assert_eq!(config.string_width(&s), summed);
    }

    #[test]
    fn clusters_cover_input(s in mixed_text()) {
        let rebuilt: String = NARROW.clusters(&s).map(|(cluster, _)| cluster).collect();
        prop_assert_eq!(rebuilt, s);
    }

    #[test]
    fn cluster_width_matches_iteration(s in mixed_text(), config in config_strategy()) {
        for (cluster, width) in config.clusters(&s) {
            prop_assert!(!cluster.is_empty());
            prop_assert_eq!(config.cluster_width(cluster), width, "cluster={:?}", cluster);
        }
    }

    #[test]
    fn arbitrary_text_does_not_panic(s in "\\PC{0,60}", config in config_strategy()) {
        let width = config.string_width(&s);
        prop_assert!(width <= 4 * s.chars().count());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 10. Ambiguous policy
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn wide_policy_never_shrinks(s in mixed_text()) {
        let narrow = NARROW.string_width(&s);
        let wide = WIDE.string_width(&s);
        prop_assert!(wide >= narrow);
        prop_assert!(wide - narrow <= s.chars().count());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 11. Malformed input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bytes_width_is_bounded(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        // Invalid sequences become U+FFFD, which is at most 2 cells per byte.
        prop_assert!(WIDE.bytes_width(&bytes) <= 2 * bytes.len());
        prop_assert!(NARROW.bytes_width(&bytes) <= WIDE.bytes_width(&bytes));
    }

    #[test]
    fn bytes_width_matches_string_width_for_utf8(s in mixed_text()) {
        prop_assert_eq!(NARROW.bytes_width(s.as_bytes()), NARROW.string_width(&s));
    }
}
