// src/extract/events.rs
//
// Event sheet: event_name, type, description, image, registration link,
// registration status, chip (free text / calendar link), manual date.

use crate::csv::parse_rows;
use crate::dates::smart_date;
use crate::links::fix_drive_link;
use crate::records::{Event, EventCategory, RegistrationStatus};

use super::{cell, cell_or, ColumnMap};

const HEADER_LITERAL: &str = "event_name";

pub const COLUMNS: ColumnMap = ColumnMap {
    sheet: "events",
    fields: &[
        ("event_name", 0),
        ("type", 1),
        ("description", 2),
        ("image", 3),
        ("registration_link", 4),
        ("registration_status", 5),
    ],
};

pub fn from_csv(text: &str) -> Vec<Event> {
    let rows = parse_rows(text);
    COLUMNS.check(&rows);
    extract(&rows)
}

pub fn extract(rows: &[Vec<String>]) -> Vec<Event> {
    if rows.len() < 2 {
        return Vec::new();
    }

    let mut events = Vec::new();
    for row in &rows[1..] {
        let title = cell(row, 0);
        if title.is_empty() || title.eq_ignore_ascii_case(HEADER_LITERAL) {
            continue;
        }

        let category = if cell(row, 1).to_ascii_lowercase().contains("workshop") {
            EventCategory::Workshop
        } else {
            EventCategory::Program
        };

        let status_raw = cell(row, 5).to_ascii_uppercase();
        let status = if status_raw == "TRUE" || status_raw == "OPEN" {
            RegistrationStatus::Open
        } else {
            RegistrationStatus::Closed
        };

        let chip = smart_date(cell(row, 6));
        let manual = cell(row, 7);

        // Date priority: manual override column, then a date recovered from
        // the chip's calendar link, then the chip's plain text, then TBA.
        let date = if !manual.is_empty() {
            s!(manual)
        } else if chip.date != "TBA" && chip.date != title {
            chip.date.clone()
        } else if chip.date == title {
            s!("Date TBA")
        } else {
            s!("TBA")
        };

        events.push(Event {
            title: s!(title),
            category,
            description: cell_or(row, 2, "No description available."),
            image: fix_drive_link(cell(row, 3)),
            registration_link: cell_or(row, 4, "#"),
            registration_status: status,
            calendar_link: chip.link,
            date,
        });
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_two_column_row() {
        let events = from_csv("event_name,type\nFOO,Workshop X\n");
        assert_eq!(events.len(), 1);
        let ev = &events[0];
        assert_eq!(ev.title, "FOO");
        assert_eq!(ev.category, EventCategory::Workshop);
        assert_eq!(ev.description, "No description available.");
        assert_eq!(ev.registration_link, "#");
        assert_eq!(ev.registration_status, RegistrationStatus::Closed);
        assert_eq!(ev.date, "TBA");
    }

    #[test]
    fn mismatched_header_never_alters_extraction() {
        // The header check only warns; a renamed or shifted header row must
        // leave the extracted records identical.
        let data = "FOO,Workshop,desc,,https://reg.example,OPEN\n";
        let canonical = join!(
            "event_name,type,description,image,registration_link,registration_status\n",
            data
        );
        let scrambled = join!("totally,different,header,row,goes,here\n", data);
        let got = from_csv(&scrambled);
        assert_eq!(got, from_csv(&canonical));
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].registration_status, RegistrationStatus::Open);
    }

    #[test]
    fn header_only_document_is_empty() {
        assert!(from_csv("event_name,type\n").is_empty());
        assert!(from_csv("").is_empty());
    }

    #[test]
    fn repeated_header_row_is_skipped() {
        let events = from_csv("event_name,type\nEVENT_NAME,workshop\nBAR,program\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "BAR");
    }

    #[test]
    fn blank_title_rows_are_skipped() {
        let events = from_csv("event_name,type\n,workshop\nBAR,\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].category, EventCategory::Program);
    }

    #[test]
    fn status_true_and_open_both_open() {
        let text = "h\nA,,,,,TRUE\nB,,,,,open\nC,,,,,nope\nD\n";
        let events = from_csv(text);
        let statuses: Vec<_> = events.iter().map(|e| e.registration_status).collect();
        assert_eq!(statuses, vec![
            RegistrationStatus::Open,
            RegistrationStatus::Open,
            RegistrationStatus::Closed,
            RegistrationStatus::Closed,
        ]);
    }

    #[test]
    fn image_gets_drive_rewrite() {
        let text = "h\nA,,,https://drive.google.com/file/d/XYZ/view\n";
        let events = from_csv(text);
        assert_eq!(events[0].image, "https://lh3.googleusercontent.com/d/XYZ");
    }

    #[test]
    fn manual_date_column_wins() {
        let text = "h\nA,,,,,,https://calendar.google.com/calendar/render?dates=20260220/20260221,21 Feb 2026\n";
        let events = from_csv(text);
        assert_eq!(events[0].date, "21 Feb 2026");
        assert!(events[0].calendar_link.contains("calendar.google.com"));
    }

    #[test]
    fn calendar_link_date_used_when_no_manual() {
        let text = "h\nA,,,,,,\"https://calendar.google.com/calendar/render?dates=20260220/20260221\"\n";
        let events = from_csv(text);
        assert_eq!(events[0].date, "Feb 20, 2026");
    }

    #[test]
    fn chip_repeating_the_title_means_no_date() {
        let text = "h\nLAN PARTY,,,,,,LAN PARTY\n";
        let events = from_csv(text);
        assert_eq!(events[0].date, "Date TBA");
    }

    #[test]
    fn chip_plain_text_is_the_date() {
        let text = "h\nA,,,,,,Friday night\n";
        let events = from_csv(text);
        assert_eq!(events[0].date, "Friday night");
    }
}
