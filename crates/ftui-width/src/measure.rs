#![forbid(unsafe_code)]

//! String width: the sum of one width per grapheme cluster.

use crate::config::WidthConfig;
use crate::segment::ClusterState;

impl WidthConfig {
    /// Number of terminal cells `text` occupies.
    #[must_use]
    pub fn string_width(&self, text: &str) -> usize {
        if text.is_ascii() {
            return ascii_width(text);
        }

        let mut width = 0;
        let mut rest = text;
        let mut state = ClusterState::START;
        while let Some(step) = self.first_grapheme_cluster(rest, state) {
            debug_assert!(step.rest.len() < rest.len());
            width += step.width;
            rest = step.rest;
            state = step.state;
        }
        width
    }

    /// Width of possibly malformed UTF-8.
    ///
    /// Each invalid sequence is measured as U+FFFD REPLACEMENT CHARACTER.
    #[must_use]
    pub fn bytes_width(&self, bytes: &[u8]) -> usize {
        self.string_width(&String::from_utf8_lossy(bytes))
    }
}

/// ASCII never clusters except CR LF, and every control (CR and LF included)
/// is zero width, so only printable bytes count.
#[inline]
fn ascii_width(text: &str) -> usize {
    text.bytes().filter(|b| (0x20..=0x7E).contains(b)).count()
}

/// Number of terminal cells `text` occupies under the process-wide
/// configuration.
#[must_use]
pub fn string_width(text: &str) -> usize {
    WidthConfig::current().string_width(text)
}

/// [`string_width`] for possibly malformed UTF-8.
#[must_use]
pub fn bytes_width(bytes: &[u8]) -> usize {
    WidthConfig::current().bytes_width(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AmbiguousWidth;

    const NARROW: WidthConfig = WidthConfig::new();
    const WIDE: WidthConfig = WidthConfig::with_ambiguous(AmbiguousWidth::Wide);

    #[test]
    fn empty_is_zero() {
        assert_eq!(NARROW.string_width(""), 0);
        assert_eq!(NARROW.bytes_width(b""), 0);
    }

    #[test]
    fn ascii_counts_printable() {
        assert_eq!(NARROW.string_width("hello"), 5);
        assert_eq!(NARROW.string_width("Hello, World!"), 13);
        assert_eq!(NARROW.string_width("a\tb\r\nc"), 3);
        assert_eq!(NARROW.string_width("\x1b"), 0);
    }

    #[test]
    fn ascii_fast_path_agrees_with_cluster_walk() {
        let text = "a\tb\r\nc\x7f ~";
        let walked: usize = NARROW.clusters(text).map(|(_, w)| w).sum();
        assert_eq!(NARROW.string_width(text), walked);
    }

    #[test]
    fn cjk_and_fullwidth() {
        assert_eq!(NARROW.string_width("\u{4F60}\u{597D}"), 4);
        assert_eq!(NARROW.string_width("\u{FF01}"), 2);
        assert_eq!(NARROW.string_width("hi\u{4E2D}"), 4);
    }

    #[test]
    fn base_plus_combining_counts_base_only() {
        assert_eq!(NARROW.string_width("e\u{0301}"), 1);
        assert_eq!(NARROW.string_width("\u{4E00}\u{0301}"), 2);
        assert_eq!(NARROW.string_width("a\u{0300}\u{0301}\u{0302}"), 1);
    }

    #[test]
    fn emoji_and_flags() {
        assert_eq!(NARROW.string_width("\u{1F600}"), 2);
        assert_eq!(NARROW.string_width("\u{1F1FA}\u{1F1F8}"), 2);
        assert_eq!(
            NARROW.string_width("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}"),
            2
        );
        assert_eq!(NARROW.string_width("\u{2764}"), 1);
    }

    #[test]
    fn em_dashes() {
        assert_eq!(NARROW.string_width("\u{2E3A}"), 3);
        assert_eq!(NARROW.string_width("a\u{2E3B}b"), 6);
    }

    #[test]
    fn ambiguous_depends_on_config() {
        let text = "\u{00A1}\u{2460}x";
        assert_eq!(NARROW.string_width(text), 3);
        assert_eq!(WIDE.string_width(text), 5);
    }

    #[test]
    fn invalid_utf8_uses_replacement_width() {
        assert_eq!(NARROW.bytes_width(b"ab\xFFc"), 4);
        assert_eq!(NARROW.bytes_width(&[0xE4, 0xB8]), 1);
        assert_eq!(NARROW.bytes_width("\u{4E2D}".as_bytes()), 2);
    }

    #[test]
    fn concatenation_is_additive_at_cluster_boundaries() {
        let a = "abc\u{4E2D}";
        let b = "\u{1F600}e\u{0301}";
        let joined = format!("{a}{b}");
        assert_eq!(
            NARROW.string_width(a) + NARROW.string_width(b),
            NARROW.string_width(&joined)
        );
    }
}
