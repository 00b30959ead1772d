// src/extract/fanfics.rs
//
// Fanfic sheet: author, title, description, genre (unused), doc link, cover.

use crate::csv::parse_rows;
use crate::links::fix_drive_link;
use crate::records::Fanfic;

use super::{cell, cell_or, ColumnMap};

const HEADER_LITERAL: &str = "title";

pub const COLUMNS: ColumnMap = ColumnMap {
    sheet: "fanfics",
    fields: &[("author", 0), ("title", 1), ("description", 2), ("link", 4), ("cover", 5)],
};

pub fn from_csv(text: &str) -> Vec<Fanfic> {
    let rows = parse_rows(text);
    COLUMNS.check(&rows);
    extract(&rows)
}

pub fn extract(rows: &[Vec<String>]) -> Vec<Fanfic> {
    if rows.len() < 2 {
        return Vec::new();
    }

    let mut fanfics = Vec::new();
    for row in &rows[1..] {
        if row.len() < 2 {
            continue;
        }

        let title = cell(row, 1);
        if title.is_empty() || title.eq_ignore_ascii_case(HEADER_LITERAL) {
            continue;
        }

        fanfics.push(Fanfic {
            author: cell_or(row, 0, "Anonymous"),
            title: s!(title),
            description: s!(cell(row, 2)),
            cover: fix_drive_link(cell(row, 5)),
            link: cell_or(row, 4, "#"),
        });
    }
    fanfics
}
