// src/extract/countdown.rs
//
// Countdown sheet: Title, Date. Only the first data row matters; the site
// counts down to exactly one thing at a time.

use crate::csv::parse_rows;
use crate::dates::flexible_date;
use crate::records::CountdownEntry;

use super::{cell, ColumnMap};

pub const COLUMNS: ColumnMap = ColumnMap {
    sheet: "countdown",
    fields: &[("title", 0), ("date", 1)],
};

pub fn from_csv(text: &str) -> Option<CountdownEntry> {
    let rows = parse_rows(text);
    COLUMNS.check(&rows);
    extract(&rows)
}

pub fn extract(rows: &[Vec<String>]) -> Option<CountdownEntry> {
    let row = rows.get(1)?;
    if row.len() < 2 {
        return None;
    }

    let title = cell(row, 0);
    if title.is_empty() {
        return None;
    }

    Some(CountdownEntry {
        title: s!(title),
        date: flexible_date(cell(row, 1)),
    })
}
