#![forbid(unsafe_code)]

//! Grapheme cluster stepping with per-cluster widths.
//!
//! Boundaries come from `unicode-segmentation` (extended grapheme clusters,
//! UAX #29). Each step returns the cluster, the remaining text, the width of
//! the cluster and a [`ClusterState`] to pass to the next step, so callers
//! can resume iteration without holding an iterator.
//!
//! # Example
//! ```
//! use ftui_width::{ClusterState, WidthConfig};
//!
//! let config = WidthConfig::new();
//! let mut rest = "e\u{301}\u{4E2D}";
//! let mut state = ClusterState::START;
//! let mut widths = Vec::new();
//! while let Some(step) = config.first_grapheme_cluster(rest, state) {
//!     widths.push((step.cluster, step.width));
//!     rest = step.rest;
//!     state = step.state;
//! }
//! assert_eq!(widths, vec![("e\u{301}", 1), ("\u{4E2D}", 2)]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::config::WidthConfig;
use crate::properties::{GraphemeProperty, grapheme_property};

/// Resumable position between grapheme clusters.
///
/// Carries the grapheme property of the first rune of the remaining text,
/// which the previous step already had to look up. A state is only
/// meaningful together with the `rest` returned alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClusterState {
    leading: Option<GraphemeProperty>,
}

impl ClusterState {
    /// State for the start of a string.
    pub const START: Self = Self { leading: None };

    /// Whether this is the start-of-string state.
    #[must_use]
    pub const fn is_start(self) -> bool {
        self.leading.is_none()
    }
}

/// Result of one segmentation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterStep<'a> {
    /// The grapheme cluster.
    pub cluster: &'a str,
    /// Text following the cluster.
    pub rest: &'a str,
    /// Cell width of the cluster.
    pub width: usize,
    /// State to pass with `rest` to the next step.
    pub state: ClusterState,
}

impl WidthConfig {
    /// Split the first grapheme cluster off `text` and measure it.
    ///
    /// Returns `None` once `text` is empty. Every step consumes at least one
    /// `char`.
    #[must_use]
    pub fn first_grapheme_cluster<'a>(
        &self,
        text: &'a str,
        state: ClusterState,
    ) -> Option<ClusterStep<'a>> {
        let first = text.chars().next()?;
        let end = text
            .graphemes(true)
            .next()
            .map_or(0, str::len)
            .max(first.len_utf8());
        let (cluster, rest) = text.split_at(end);

        let leading = state
            .leading
            .unwrap_or_else(|| grapheme_property(first));
        let width = self.cluster_width_with(cluster, first, leading);

        Some(ClusterStep {
            cluster,
            rest,
            width,
            state: ClusterState {
                leading: rest.chars().next().map(grapheme_property),
            },
        })
    }

    /// Width of a single grapheme cluster.
    ///
    /// The width is that of the cluster's base rune: the first rune, or the
    /// first non-Prepend rune when the cluster opens with Prepend marks.
    /// Marks and joiners that follow the base do not add to it.
    #[must_use]
    pub fn cluster_width(&self, cluster: &str) -> usize {
        match cluster.chars().next() {
            Some(first) => self.cluster_width_with(cluster, first, grapheme_property(first)),
            None => 0,
        }
    }

    fn cluster_width_with(&self, cluster: &str, first: char, leading: GraphemeProperty) -> usize {
        if leading == GraphemeProperty::Prepend
            && let Some((base, property)) = cluster
                .chars()
                .skip(1)
                .map(|c| (c, grapheme_property(c)))
                .find(|&(_, p)| p != GraphemeProperty::Prepend)
        {
            return self.rune_width(base, property);
        }
        self.rune_width(first, leading)
    }

    /// Iterate over the grapheme clusters of `text` with their widths.
    #[must_use]
    pub fn clusters<'a>(&self, text: &'a str) -> Clusters<'a> {
        Clusters {
            config: *self,
            rest: text,
            state: ClusterState::START,
        }
    }
}

/// Iterator over `(cluster, width)` pairs. See [`WidthConfig::clusters`].
#[derive(Debug, Clone)]
pub struct Clusters<'a> {
    config: WidthConfig,
    rest: &'a str,
    state: ClusterState,
}

impl<'a> Clusters<'a> {
    /// Text not yet yielded.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.rest
    }
}

impl<'a> Iterator for Clusters<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.config.first_grapheme_cluster(self.rest, self.state)?;
        self.rest = step.rest;
        self.state = step.state;
        Some((step.cluster, step.width))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            (0, Some(0))
        } else {
            (1, Some(self.rest.len()))
        }
    }
}

impl std::iter::FusedIterator for Clusters<'_> {}

/// [`WidthConfig::first_grapheme_cluster`] under the process-wide configuration.
#[must_use]
pub fn first_grapheme_cluster(text: &str, state: ClusterState) -> Option<ClusterStep<'_>> {
    WidthConfig::current().first_grapheme_cluster(text, state)
}

/// [`WidthConfig::clusters`] under the process-wide configuration.
#[must_use]
pub fn clusters(text: &str) -> Clusters<'_> {
    WidthConfig::current().clusters(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: WidthConfig = WidthConfig::new();

    fn collect(text: &str) -> Vec<(&str, usize)> {
        CONFIG.clusters(text).collect()
    }

    #[test]
    fn empty_text_has_no_step() {
        assert!(CONFIG.first_grapheme_cluster("", ClusterState::START).is_none());
        assert_eq!(collect(""), vec![]);
    }

    #[test]
    fn single_ascii_step() {
        let step = CONFIG
            .first_grapheme_cluster("ab", ClusterState::START)
            .unwrap();
        assert_eq!(step.cluster, "a");
        assert_eq!(step.rest, "b");
        assert_eq!(step.width, 1);
        assert!(!step.state.is_start());
    }

    #[test]
    fn last_step_resets_state() {
        let step = CONFIG
            .first_grapheme_cluster("a", ClusterState::START)
            .unwrap();
        assert_eq!(step.rest, "");
        assert!(step.state.is_start());
    }

    #[test]
    fn combining_mark_joins_base() {
        assert_eq!(collect("e\u{0301}x"), vec![("e\u{0301}", 1), ("x", 1)]);
    }

    #[test]
    fn crlf_is_one_zero_width_cluster() {
        assert_eq!(collect("a\r\nb"), vec![("a", 1), ("\r\n", 0), ("b", 1)]);
    }

    #[test]
    fn flag_pair_is_one_cluster() {
        let flag = "\u{1F1FA}\u{1F1F8}";
        assert_eq!(collect(flag), vec![(flag, 2)]);
    }

    #[test]
    fn odd_regional_indicator_stands_alone() {
        let text = "\u{1F1FA}\u{1F1F8}\u{1F1EB}";
        assert_eq!(
            collect(text),
            vec![("\u{1F1FA}\u{1F1F8}", 2), ("\u{1F1EB}", 2)]
        );
    }

    #[test]
    fn zwj_sequence_measured_by_first_pictograph() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        assert_eq!(collect(family), vec![(family, 2)]);
    }

    #[test]
    fn hangul_jamo_sequence_is_wide() {
        let jamo = "\u{1100}\u{1161}\u{11A8}";
        assert_eq!(collect(jamo), vec![(jamo, 2)]);
    }

    #[test]
    fn prepend_uses_following_base() {
        // ARABIC NUMBER SIGN + ARABIC-INDIC DIGIT ONE
        let text = "\u{0600}\u{0661}";
        assert_eq!(CONFIG.cluster_width(text), 1);
        // Prepend mark followed by a wide base.
        assert_eq!(CONFIG.cluster_width("\u{0600}\u{4E00}"), 2);
    }

    #[test]
    fn lone_extend_is_zero() {
        assert_eq!(collect("\u{0301}"), vec![("\u{0301}", 0)]);
    }

    #[test]
    fn state_carries_next_property() {
        let step = CONFIG
            .first_grapheme_cluster("a\u{4E2D}", ClusterState::START)
            .unwrap();
        let next = CONFIG.first_grapheme_cluster(step.rest, step.state).unwrap();
        assert_eq!(next.cluster, "\u{4E2D}");
        assert_eq!(next.width, 2);
    }

    #[test]
    fn iterator_as_str_tracks_progress() {
        let mut it = CONFIG.clusters("ab");
        assert_eq!(it.as_str(), "ab");
        it.next();
        assert_eq!(it.as_str(), "b");
        it.next();
        assert_eq!(it.as_str(), "");
        assert!(it.next().is_none());
    }

    #[test]
    fn every_step_makes_progress() {
        let text = "a\u{0301}\u{200D}\u{1F600}\r\n\u{FFFD}\u{0600}";
        let mut rest = text;
        let mut state = ClusterState::START;
        while let Some(step) = CONFIG.first_grapheme_cluster(rest, state) {
            assert!(step.rest.len() < rest.len());
            rest = step.rest;
            state = step.state;
        }
        assert!(rest.is_empty());
    }
}
