//! Benchmarks for terminal width measurement.
//!
//! Each string group measures with `ftui_width` and, for reference, with
//! `unicode-width` (which does not segment into grapheme clusters).
//!
//! Run with: cargo bench -p ftui-width

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ftui_width::{WidthCache, WidthConfig, table};
use std::hint::black_box;
use unicode_width::UnicodeWidthStr;

const CONFIG: WidthConfig = WidthConfig::new();

// =============================================================================
// Test Data
// =============================================================================

fn cycled(pattern: &str, len: usize) -> String {
    pattern.chars().cycle().take(len).collect()
}

/// ASCII-only text of various lengths
fn ascii_text(len: usize) -> String {
    cycled("The quick brown fox jumps over the lazy dog. ", len)
}

/// CJK text (width 2 per char)
fn cjk_text(len: usize) -> String {
    cycled("\u{4E2D}\u{6587}\u{6D4B}\u{8BD5}\u{6587}\u{672C}", len)
}

/// Mixed ASCII and CJK
fn mixed_text(len: usize) -> String {
    cycled("Hello \u{4E16}\u{754C}! Test \u{6D4B}\u{8BD5}. ", len)
}

/// Emoji-heavy text
fn emoji_text(len: usize) -> String {
    cycled("\u{1F600}\u{1F389}\u{1F680}\u{1F4BB}\u{1F3E0}", len)
}

/// Text with combining characters
fn combining_text(len: usize) -> String {
    cycled("e\u{0301}a\u{0300}o\u{0302}u\u{0308}", len)
}

/// ZWJ sequences (complex graphemes)
fn zwj_text(count: usize) -> String {
    "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}".repeat(count)
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_group(c: &mut Criterion, name: &str, sizes: &[usize], make: fn(usize) -> String) {
    let mut group = c.benchmark_group(name);

    for &len in sizes {
        let text = make(len);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("ftui_width", len), &text, |b, text| {
            b.iter(|| black_box(CONFIG.string_width(text)))
        });
        group.bench_with_input(BenchmarkId::new("unicode_width", len), &text, |b, text| {
            b.iter(|| black_box(text.width()))
        });
    }

    group.finish();
}

fn bench_ascii_width(c: &mut Criterion) {
    bench_group(c, "width/ascii", &[10, 100, 1000, 10000], ascii_text);
}

fn bench_cjk_width(c: &mut Criterion) {
    bench_group(c, "width/cjk", &[10, 100, 1000, 10000], cjk_text);
}

fn bench_mixed_width(c: &mut Criterion) {
    bench_group(c, "width/mixed", &[10, 100, 1000, 10000], mixed_text);
}

fn bench_emoji_width(c: &mut Criterion) {
    bench_group(c, "width/emoji", &[10, 100, 1000], emoji_text);
}

fn bench_combining_width(c: &mut Criterion) {
    bench_group(c, "width/combining", &[10, 100, 1000], combining_text);
}

fn bench_zwj_width(c: &mut Criterion) {
    bench_group(c, "width/zwj", &[1, 10, 50], zwj_text);
}

fn bench_rune(c: &mut Criterion) {
    let mut group = c.benchmark_group("rune");

    let samples: Vec<char> = "aZ~\u{00E9}\u{0301}\u{2460}\u{4E2D}\u{AC00}\u{FF01}\u{1F600}\u{1F1FA}\u{2E3B}"
        .chars()
        .collect();

    group.bench_function("table_lookup", |b| {
        b.iter(|| {
            for &ch in &samples {
                black_box(table::lookup(ch as u32));
            }
        })
    });

    group.bench_function("char_width", |b| {
        b.iter(|| {
            for &ch in &samples {
                black_box(CONFIG.char_width(ch));
            }
        })
    });

    group.finish();
}

fn bench_cache_vs_direct(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_vs_direct");

    let test_strings: Vec<String> = (0..100)
        .map(|i| format!("string_{i} \u{4E2D}\u{6587}"))
        .collect();

    // Direct width calculation
    group.bench_function("direct", |b| {
        b.iter(|| {
            for s in &test_strings {
                black_box(CONFIG.string_width(s));
            }
        })
    });

    // Cached width calculation (cold cache)
    group.bench_function("cache_cold", |b| {
        b.iter(|| {
            let mut cache = WidthCache::with_config(1000, CONFIG);
            for s in &test_strings {
                black_box(cache.get_or_compute(s));
            }
        })
    });

    // Cached width calculation (warm cache)
    group.bench_function("cache_warm", |b| {
        let mut cache = WidthCache::with_config(1000, CONFIG);
        cache.preload_many(test_strings.iter().map(String::as_str));
        b.iter(|| {
            for s in &test_strings {
                black_box(cache.get_or_compute(s));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ascii_width,
    bench_cjk_width,
    bench_mixed_width,
    bench_emoji_width,
    bench_combining_width,
    bench_zwj_width,
    bench_rune,
    bench_cache_vs_direct,
);

criterion_main!(benches);
