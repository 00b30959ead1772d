// src/extract/mod.rs
//! # Sheet extractors
//!
//! One module per sheet shape. Each extractor consumes tokenized rows and
//! produces typed records, and **never fails**: a malformed or short row is
//! skipped, a missing trailing column defaults, an unrecognized value maps
//! to a named fallback.
//!
//! ## Conventions
//! - Row 0 is the header and is always dropped.
//! - A record is emitted only when its identifying field (title/name) is
//!   non-empty and not a repeated header literal (case-insensitive).
//! - Column positions are fixed per sheet; there is no header-driven
//!   discovery. Reordering columns in the source sheet silently corrupts
//!   output — the `ColumnMap` check exists to make that visible in the log,
//!   never to reject data.
//! - Drive share links are rewritten to direct-content form (`links`).
//!
//! ## What does not live here
//! - Networking (`net`/`fetch`) and caching (`cache`) sit above.
//! - The theme sheet has its own multi-strategy resolver (`theme`); it does
//!   not fit the fixed-column pattern.

pub mod countdown;
pub mod events;
pub mod fanfics;
pub mod gallery;
pub mod team;

use log::warn;

/// Declarative field-name → column-index map for one sheet shape.
///
/// Checked once against the header row at fetch time; a mismatch is a
/// structural warning for operator eyes, not a failure.
pub struct ColumnMap {
    pub sheet: &'static str,
    pub fields: &'static [(&'static str, usize)],
}

impl ColumnMap {
    pub fn check(&self, rows: &[Vec<String>]) {
        let Some(header) = rows.first() else { return };
        for (name, ix) in self.fields {
            match header.get(*ix) {
                Some(got) if got.trim().eq_ignore_ascii_case(name) => {}
                Some(got) => warn!(
                    "{}: column {} header is '{}', expected '{}' — sheet layout may have shifted",
                    self.sheet, ix, got.trim(), name
                ),
                None => warn!(
                    "{}: header has no column {} (expected '{}')",
                    self.sheet, ix, name
                ),
            }
        }
    }
}

/// Cell at `i`, trimmed; missing trailing columns read as empty.
pub(crate) fn cell(row: &[String], i: usize) -> &str {
    row.get(i).map(String::as_str).unwrap_or("").trim()
}

/// Cell at `i` with a default for the empty/missing case.
pub(crate) fn cell_or(row: &[String], i: usize, default: &str) -> String {
    let v = cell(row, i);
    if v.is_empty() { s!(default) } else { s!(v) }
}
