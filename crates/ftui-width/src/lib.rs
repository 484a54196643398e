#![forbid(unsafe_code)]

//! Terminal cell widths for Unicode text.
//!
//! This crate answers "how many monospace cells does this occupy?" for a
//! single rune, a grapheme cluster, or a whole string:
//! - [`table::lookup`] - packed three-tier trie mapping code points to 0/1/2
//!   cells (or unassigned)
//! - [`rune_width`] - per-rune classification (controls, marks, regional
//!   indicators, emoji presentation, em dashes, table fallback)
//! - [`string_width`] - sum of one width per grapheme cluster
//! - [`WidthConfig`] / [`set_ambiguous_width`] - East Asian Ambiguous policy
//! - [`WidthCache`] - LRU cache for repeated measurements
//!
//! # Example
//! ```
//! use ftui_width::{AmbiguousWidth, WidthConfig, string_width};
//!
//! assert_eq!(string_width("hello"), 5);
//! assert_eq!(string_width("\u{4F60}\u{597D}"), 4);
//! assert_eq!(string_width("e\u{301}"), 1);
//! assert_eq!(string_width("\u{1F1FA}\u{1F1F8}"), 2);
//!
//! let cjk = WidthConfig::with_ambiguous(AmbiguousWidth::Wide);
//! assert_eq!(cjk.string_width("\u{2460}"), 2);
//! ```

pub mod classify;
pub mod config;
pub mod logging;
pub mod measure;
pub mod properties;
pub mod segment;
pub mod table;
pub mod width_cache;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};

pub use classify::{
    THREE_EM_DASH, TWO_EM_DASH, UNASSIGNED_WIDTH, char_width, rune_width,
};
pub use config::{
    AmbiguousWidth, ENV_AMBIGUOUS_WIDTH, ENV_CJK_WIDTH, ParseAmbiguousWidthError, WidthConfig,
    ambiguous_width, init_from_env, set_ambiguous_width,
};
pub use measure::{bytes_width, string_width};
pub use properties::{
    GraphemeProperty, UNICODE_VERSION, grapheme_property, has_emoji_presentation,
};
pub use segment::{ClusterState, ClusterStep, Clusters, clusters, first_grapheme_cluster};
pub use table::TableWidth;
pub use width_cache::{CacheStats, DEFAULT_CACHE_CAPACITY, WidthCache};

#[cfg(feature = "thread_local_cache")]
pub use width_cache::{cached_width, clear_thread_cache};
