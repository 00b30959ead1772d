// src/extract/team.rs
//
// Team sheet: Name, Role, Category, Image, LinkedIn, GitHub.
// Category is substring-matched ("faculty advisor", "FACULTY", ... all count);
// anything else lands in Core.

use crate::csv::parse_rows;
use crate::links::fix_drive_link;
use crate::records::{TeamCategory, TeamMember};

use super::{cell, ColumnMap};

const HEADER_LITERAL: &str = "name";

pub const COLUMNS: ColumnMap = ColumnMap {
    sheet: "team",
    fields: &[
        ("name", 0),
        ("role", 1),
        ("category", 2),
        ("image", 3),
        ("linkedin", 4),
        ("github", 5),
    ],
};

pub fn from_csv(text: &str) -> Vec<TeamMember> {
    let rows = parse_rows(text);
    COLUMNS.check(&rows);
    extract(&rows)
}

pub fn extract(rows: &[Vec<String>]) -> Vec<TeamMember> {
    if rows.len() < 2 {
        return Vec::new();
    }

    let mut members = Vec::new();
    for row in &rows[1..] {
        if row.len() < 2 {
            continue;
        }

        let name = cell(row, 0);
        if name.is_empty() || name.eq_ignore_ascii_case(HEADER_LITERAL) {
            continue;
        }

        let category = if cell(row, 2).to_ascii_lowercase().contains("faculty") {
            TeamCategory::Faculty
        } else {
            TeamCategory::Core
        };

        members.push(TeamMember {
            name: s!(name),
            role: s!(cell(row, 1)),
            category,
            image: non_empty(fix_drive_link(cell(row, 3))),
            linkedin: non_empty(s!(cell(row, 4))),
            github: non_empty(s!(cell(row, 5))),
        });
    }
    members
}

fn non_empty(v: String) -> Option<String> {
    if v.is_empty() { None } else { Some(v) }
}
