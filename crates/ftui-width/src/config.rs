#![forbid(unsafe_code)]

//! Width configuration.
//!
//! The only tunable is how East Asian Ambiguous characters are rendered.
//! Most terminals draw them in one cell; some CJK fonts and terminal
//! profiles draw them in two.
//!
//! The setting exists in two forms:
//! - [`WidthConfig`], a `Copy` value that can be held by a renderer and
//!   passed explicitly (useful for tests and for rendering into several
//!   targets with different policies);
//! - a process-wide value read by the free functions ([`crate::string_width`],
//!   [`crate::rune_width`]). It is stored in an atomic, so it may be changed at
//!   any time from any thread; the last writer wins and computations already
//!   finished are unaffected.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable selecting the ambiguous width (`1`/`2`, `narrow`/`wide`).
pub const ENV_AMBIGUOUS_WIDTH: &str = "FTUI_AMBIGUOUS_WIDTH";
/// Legacy boolean environment variable; truthy means ambiguous is wide.
pub const ENV_CJK_WIDTH: &str = "FTUI_TEXT_CJK_WIDTH";

/// Process-wide ambiguous width, stored as its cell count.
static AMBIGUOUS_WIDTH: AtomicU8 = AtomicU8::new(AmbiguousWidth::Narrow as u8);

/// Cell width used for East Asian Ambiguous characters.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AmbiguousWidth {
    /// One cell (the Unicode recommendation outside CJK contexts).
    #[default]
    Narrow = 1,
    /// Two cells.
    Wide = 2,
}

impl AmbiguousWidth {
    /// Number of cells an ambiguous character occupies.
    #[must_use]
    pub const fn cells(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }
}

impl fmt::Display for AmbiguousWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an [`AmbiguousWidth`] fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmbiguousWidthError {
    /// The string was not a recognised width name or number.
    Unrecognized(String),
    /// The number was not 1 or 2.
    OutOfRange(u8),
}

impl fmt::Display for ParseAmbiguousWidthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(value) => {
                write!(f, "unrecognized ambiguous width {value:?} (expected 1, 2, narrow or wide)")
            }
            Self::OutOfRange(cells) => {
                write!(f, "ambiguous width must be 1 or 2 cells, got {cells}")
            }
        }
    }
}

impl std::error::Error for ParseAmbiguousWidthError {}

impl TryFrom<u8> for AmbiguousWidth {
    type Error = ParseAmbiguousWidthError;

    fn try_from(cells: u8) -> Result<Self, Self::Error> {
        match cells {
            1 => Ok(Self::Narrow),
            2 => Ok(Self::Wide),
            other => Err(ParseAmbiguousWidthError::OutOfRange(other)),
        }
    }
}

impl FromStr for AmbiguousWidth {
    type Err = ParseAmbiguousWidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        match value.as_str() {
            "narrow" | "single" | "n" => Ok(Self::Narrow),
            "wide" | "double" | "w" => Ok(Self::Wide),
            _ => match value.parse::<u8>() {
                Ok(cells) => Self::try_from(cells),
                Err(_) => Err(ParseAmbiguousWidthError::Unrecognized(s.to_string())),
            },
        }
    }
}

/// Width computation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WidthConfig {
    /// Width of East Asian Ambiguous characters.
    pub ambiguous: AmbiguousWidth,
}

impl WidthConfig {
    /// Default configuration (ambiguous characters are narrow).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ambiguous: AmbiguousWidth::Narrow,
        }
    }

    /// Configuration with the given ambiguous width.
    #[must_use]
    pub const fn with_ambiguous(ambiguous: AmbiguousWidth) -> Self {
        Self { ambiguous }
    }

    /// Snapshot of the process-wide configuration.
    #[must_use]
    pub fn current() -> Self {
        Self {
            ambiguous: ambiguous_width(),
        }
    }

    /// Resolve configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Resolve configuration using a custom environment lookup (for tests).
    ///
    /// [`ENV_AMBIGUOUS_WIDTH`] wins over [`ENV_CJK_WIDTH`]. Unparseable
    /// values are ignored.
    #[must_use]
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(value) = get_env(ENV_AMBIGUOUS_WIDTH) {
            match value.parse::<AmbiguousWidth>() {
                Ok(ambiguous) => {
                    config.ambiguous = ambiguous;
                    crate::debug!(ambiguous = ambiguous.as_str(), "width config resolved");
                    return config;
                }
                Err(err) => {
                    crate::warn!(
                        key = ENV_AMBIGUOUS_WIDTH,
                        value = %value,
                        error = %err,
                        "ignoring invalid ambiguous width"
                    );
                }
            }
        }

        if let Some(value) = get_env(ENV_CJK_WIDTH) {
            match parse_bool(&value) {
                Some(true) => config.ambiguous = AmbiguousWidth::Wide,
                Some(false) => config.ambiguous = AmbiguousWidth::Narrow,
                None => {
                    crate::warn!(key = ENV_CJK_WIDTH, value = %value, "ignoring invalid boolean");
                }
            }
        }

        crate::debug!(ambiguous = config.ambiguous.as_str(), "width config resolved");
        config
    }
}

/// Current process-wide ambiguous width.
#[inline]
#[must_use]
pub fn ambiguous_width() -> AmbiguousWidth {
    match AMBIGUOUS_WIDTH.load(Ordering::Relaxed) {
        2 => AmbiguousWidth::Wide,
        _ => AmbiguousWidth::Narrow,
    }
}

/// Set the process-wide ambiguous width, returning the previous value.
///
/// Affects only computations started after the store.
pub fn set_ambiguous_width(width: AmbiguousWidth) -> AmbiguousWidth {
    let previous = match AMBIGUOUS_WIDTH.swap(width as u8, Ordering::Relaxed) {
        2 => AmbiguousWidth::Wide,
        _ => AmbiguousWidth::Narrow,
    };
    if previous != width {
        crate::debug!(
            from = previous.as_str(),
            to = width.as_str(),
            "ambiguous width changed"
        );
    }
    previous
}

/// Resolve configuration from the environment and install it process-wide.
pub fn init_from_env() -> WidthConfig {
    let span = crate::debug_span!("width_init_from_env");
    let _guard = span.enter();
    let config = WidthConfig::from_env();
    set_ambiguous_width(config.ambiguous);
    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn map_env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn get_env<'a>(map: &'a HashMap<String, String>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_is_narrow() {
        assert_eq!(WidthConfig::default().ambiguous, AmbiguousWidth::Narrow);
        assert_eq!(WidthConfig::new(), WidthConfig::default());
        assert_eq!(AmbiguousWidth::default().cells(), 1);
        assert_eq!(AmbiguousWidth::Wide.cells(), 2);
    }

    #[test]
    fn parse_names_and_numbers() {
        assert_eq!("1".parse(), Ok(AmbiguousWidth::Narrow));
        assert_eq!("2".parse(), Ok(AmbiguousWidth::Wide));
        assert_eq!(" Wide ".parse(), Ok(AmbiguousWidth::Wide));
        assert_eq!("double".parse(), Ok(AmbiguousWidth::Wide));
        assert_eq!("narrow".parse(), Ok(AmbiguousWidth::Narrow));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(
            "3".parse::<AmbiguousWidth>(),
            Err(ParseAmbiguousWidthError::OutOfRange(3))
        );
        assert_eq!(
            AmbiguousWidth::try_from(0),
            Err(ParseAmbiguousWidthError::OutOfRange(0))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "huge".parse::<AmbiguousWidth>().unwrap_err();
        assert_eq!(err, ParseAmbiguousWidthError::Unrecognized("huge".into()));
        assert!(err.to_string().contains("huge"));
    }

    #[test]
    fn env_empty_gives_default() {
        let env = map_env(&[]);
        assert_eq!(WidthConfig::from_env_with(get_env(&env)), WidthConfig::new());
    }

    #[test]
    fn env_explicit_width() {
        let env = map_env(&[(ENV_AMBIGUOUS_WIDTH, "2")]);
        let config = WidthConfig::from_env_with(get_env(&env));
        assert_eq!(config.ambiguous, AmbiguousWidth::Wide);
    }

    #[test]
    fn env_legacy_cjk_flag() {
        let env = map_env(&[(ENV_CJK_WIDTH, "yes")]);
        let config = WidthConfig::from_env_with(get_env(&env));
        assert_eq!(config.ambiguous, AmbiguousWidth::Wide);
    }

    #[test]
    fn env_explicit_width_wins_over_legacy() {
        let env = map_env(&[(ENV_AMBIGUOUS_WIDTH, "narrow"), (ENV_CJK_WIDTH, "1")]);
        let config = WidthConfig::from_env_with(get_env(&env));
        assert_eq!(config.ambiguous, AmbiguousWidth::Narrow);
    }

    #[test]
    fn env_invalid_width_falls_back_to_legacy() {
        let env = map_env(&[(ENV_AMBIGUOUS_WIDTH, "7"), (ENV_CJK_WIDTH, "on")]);
        let config = WidthConfig::from_env_with(get_env(&env));
        assert_eq!(config.ambiguous, AmbiguousWidth::Wide);
    }

    #[test]
    fn env_invalid_values_ignored() {
        let env = map_env(&[(ENV_AMBIGUOUS_WIDTH, "x"), (ENV_CJK_WIDTH, "maybe")]);
        let config = WidthConfig::from_env_with(get_env(&env));
        assert_eq!(config, WidthConfig::new());
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn env_invalid_width_is_logged() {
        let env = map_env(&[(ENV_AMBIGUOUS_WIDTH, "bogus")]);
        let _ = WidthConfig::from_env_with(get_env(&env));
        assert!(logs_contain("ignoring invalid ambiguous width"));
    }
}
