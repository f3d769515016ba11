//! Row partitioning for exported time-profile tables.
//!
//! `xctrace export` emits one `<row>...</row>` element per sample. Rows can
//! span several lines. Matching is best-effort: anything that does not look
//! like a row is ignored, and rows without a numeric `<sample-time>` are
//! dropped.

use super::schema::TraceRow;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static ROW_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<row>.*?</row>").expect("row pattern is valid"));

static SAMPLE_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<sample-time[^>]*>(\d+)</sample-time>").expect("sample-time pattern is valid")
});

/// Split exported text into raw row fragments, in document order
pub fn split_rows(xml: &str) -> impl Iterator<Item = &str> {
    ROW_PATTERN.find_iter(xml).map(|m| m.as_str())
}

/// Sample time (ns) embedded in a row fragment, if any
///
/// Rows that only reference an earlier sample time (`<sample-time ref=".."/>`)
/// have no inline value and yield `None`, as do values that overflow `u64`.
pub fn sample_time(row: &str) -> Option<u64> {
    SAMPLE_TIME_PATTERN
        .captures(row)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Parse all rows carrying a sample time
///
/// **Public** - main entry point for row scanning
pub fn parse_rows(xml: &str) -> Vec<TraceRow<'_>> {
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for text in split_rows(xml) {
        match sample_time(text) {
            Some(sample_time) => rows.push(TraceRow { sample_time, text }),
            None => skipped += 1,
        }
    }

    debug!(
        "Scanned {} rows ({} skipped without sample time)",
        rows.len() + skipped,
        skipped
    );

    rows
}
