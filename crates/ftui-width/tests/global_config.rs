//! Tests for the process-wide ambiguous width.
//!
//! Everything here mutates shared state, so each test holds `LOCK` and
//! restores the narrow default before returning. Other test binaries run in
//! separate processes and are unaffected.

use std::sync::{Mutex, MutexGuard};

use ftui_width::{
    AmbiguousWidth, WidthCache, WidthConfig, ambiguous_width, char_width, clusters,
    init_from_env, rune_width, set_ambiguous_width, string_width,
};

static LOCK: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Restores the narrow default even if an assertion fails.
struct Restore;

impl Drop for Restore {
    fn drop(&mut self) {
        set_ambiguous_width(AmbiguousWidth::Narrow);
    }
}

#[test]
fn default_is_narrow() {
    let _lock = lock();
    assert_eq!(ambiguous_width(), AmbiguousWidth::Narrow);
    assert_eq!(WidthConfig::current(), WidthConfig::new());
    assert_eq!(string_width("\u{00A1}"), 1);
}

#[test]
fn set_returns_previous_value() {
    let _lock = lock();
    let _restore = Restore;

    assert_eq!(set_ambiguous_width(AmbiguousWidth::Wide), AmbiguousWidth::Narrow);
    assert_eq!(ambiguous_width(), AmbiguousWidth::Wide);
    assert_eq!(set_ambiguous_width(AmbiguousWidth::Wide), AmbiguousWidth::Wide);
    assert_eq!(set_ambiguous_width(AmbiguousWidth::Narrow), AmbiguousWidth::Wide);
    assert_eq!(ambiguous_width(), AmbiguousWidth::Narrow);
}

#[test]
fn free_functions_follow_global() {
    let _lock = lock();
    let _restore = Restore;

    let text = "\u{00A1}x\u{2460}";
    let before = string_width(text);
    assert_eq!(before, 3);

    set_ambiguous_width(AmbiguousWidth::Wide);
    assert_eq!(string_width(text), 5);
    assert_eq!(char_width('\u{00A1}'), 2);
    assert_eq!(
        rune_width('\u{2460}', ftui_width::grapheme_property('\u{2460}')),
        2
    );
    let widths: Vec<usize> = clusters(text).map(|(_, w)| w).collect();
    assert_eq!(widths, vec![2, 1, 2]);

    // Results computed before the change keep their value.
    assert_eq!(before, 3);
    // Non-ambiguous text is unaffected.
    assert_eq!(string_width("abc\u{4E2D}"), 5);
}

#[test]
fn explicit_config_ignores_global() {
    let _lock = lock();
    let _restore = Restore;

    set_ambiguous_width(AmbiguousWidth::Wide);
    assert_eq!(WidthConfig::new().string_width("\u{00A1}"), 1);
}

#[test]
fn cache_follows_global_unless_pinned() {
    let _lock = lock();
    let _restore = Restore;

    let mut following = WidthCache::new(16);
    let mut pinned = WidthCache::with_config(16, WidthConfig::new());

    assert_eq!(following.get_or_compute("\u{00B0}"), 1);
    assert_eq!(pinned.get_or_compute("\u{00B0}"), 1);

    set_ambiguous_width(AmbiguousWidth::Wide);
    assert_eq!(following.config().ambiguous, AmbiguousWidth::Wide);
    // A different key, so no stale narrow entry is returned.
    assert_eq!(following.get_or_compute("\u{00B0}"), 2);
    assert_eq!(following.stats().misses, 2);
    assert_eq!(pinned.get_or_compute("\u{00B0}"), 1);
    assert_eq!(pinned.stats().hits, 1);
}

#[test]
fn change_is_visible_to_other_threads() {
    let _lock = lock();
    let _restore = Restore;

    set_ambiguous_width(AmbiguousWidth::Wide);
    let width = std::thread::spawn(|| string_width("\u{2026}"))
        .join()
        .expect("worker thread panicked");
    assert_eq!(width, 2);
}

#[test]
fn init_from_env_installs_resolved_config() {
    let _lock = lock();
    let _restore = Restore;

    let config = init_from_env();
    assert_eq!(config, WidthConfig::from_env());
    assert_eq!(ambiguous_width(), config.ambiguous);
}
