// src/extract/gallery.rs
//
// Gallery sheet: archive_name, archive_description, archive_phone_link.
// The link column is the image source; name doubles as alt text. Rows
// without a resolvable source are dropped outright.

use crate::csv::parse_rows;
use crate::links::fix_drive_link;
use crate::records::{GalleryItem, GallerySize};

use super::{cell, cell_or, ColumnMap};

pub const COLUMNS: ColumnMap = ColumnMap {
    sheet: "gallery",
    fields: &[
        ("archive_name", 0),
        ("archive_description", 1),
        ("archive_phone_link", 2),
    ],
};

pub fn from_csv(text: &str) -> Vec<GalleryItem> {
    let rows = parse_rows(text);
    COLUMNS.check(&rows);
    extract(&rows)
}

pub fn extract(rows: &[Vec<String>]) -> Vec<GalleryItem> {
    if rows.len() < 2 {
        return Vec::new();
    }

    let mut items = Vec::new();
    for row in &rows[1..] {
        if row.len() < 2 {
            continue;
        }

        let src = fix_drive_link(cell(row, 2));
        if src.is_empty() {
            continue;
        }

        items.push(GalleryItem {
            src,
            alt: cell_or(row, 0, "Gallery Image"),
            size: size_hint(cell(row, 3)),
        });
    }
    items
}

fn size_hint(raw: &str) -> GallerySize {
    match raw.to_ascii_lowercase().as_str() {
        "small" => GallerySize::Small,
        "large" => GallerySize::Large,
        _ => GallerySize::Medium,
    }
}
