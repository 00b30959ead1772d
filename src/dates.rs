// src/dates.rs
//
// Date cells arrive in whatever shape the sheet editor last typed:
// "20 Feb", "20 Feb 2026", a pasted Google Calendar link, or free text.
// Everything here is best-effort string shaping; nothing fails.

use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

static DAY_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})\s+([a-zA-Z]+)$").unwrap());
static URL_IN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s"]+"#).unwrap());
static CALENDAR_DATES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"dates=(\d{8})/").unwrap());

/// Complete a partial date string for display.
///
/// "20 Feb" (day + month name, no year) gets the current year appended;
/// anything else passes through trimmed.
pub fn flexible_date(raw: &str) -> String {
    let clean = raw.trim();
    if clean.is_empty() {
        return s!();
    }

    if let Some(c) = DAY_MONTH.captures(clean) {
        return format!("{} {} {}", &c[1], &c[2], Local::now().year());
    }

    s!(clean)
}

/// Date plus optional link, pulled apart from one free-text cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmartDate {
    pub date: String,
    pub link: String,
}

/// Split a "chip" cell into a display date and an embedded link.
///
/// A Google Calendar URL with a `dates=YYYYMMDD/` parameter yields a
/// reformatted "Mon D, YYYY". A cell that is plain text (no URL at all)
/// is its own date. Everything else degrades to "TBA".
pub fn smart_date(raw: &str) -> SmartDate {
    let clean = raw.trim();
    if clean.is_empty() {
        return SmartDate { date: s!("TBA"), link: s!() };
    }

    let link = URL_IN_TEXT
        .find(clean)
        .map(|m| s!(m.as_str()))
        .unwrap_or_default();

    let mut date = s!("TBA");
    if !link.is_empty() && link.contains("google.com/calendar") {
        if let Some(c) = CALENDAR_DATES.captures(&link) {
            if let Ok(d) = NaiveDate::parse_from_str(&c[1], "%Y%m%d") {
                date = d.format("%b %-d, %Y").to_string();
            }
        }
    }

    if date == "TBA" && !clean.contains("http") {
        date = s!(clean);
    }

    SmartDate { date, link }
}
