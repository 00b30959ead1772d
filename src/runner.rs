// src/runner.rs
//
// Top-level orchestration: fetch the selected sheets, each on its own
// thread (they are independent — no ordering, no shared state except the
// theme cache, which only the theme task touches), then write one output
// file per sheet.

use std::error::Error;
use std::path::PathBuf;
use std::thread;

use crate::cache::{init_theme, FileCache};
use crate::fetch;
use crate::file::{ensure_directory, sheet_path, write_rows, write_text};
use crate::params::{ExportFormat, Params, SheetKind};
use crate::progress::Progress;
use crate::records::{CountdownEntry, Event, Fanfic, GalleryItem, TeamMember, ThemePalette};

/// One fetched sheet, ready for export in either row or JSON form.
pub enum SheetData {
    Events(Vec<Event>),
    Fanfics(Vec<Fanfic>),
    Team(Vec<TeamMember>),
    Gallery(Vec<GalleryItem>),
    Countdown(Option<CountdownEntry>),
    Theme(ThemePalette),
}

impl SheetData {
    pub fn len(&self) -> usize {
        match self {
            SheetData::Events(v) => v.len(),
            SheetData::Fanfics(v) => v.len(),
            SheetData::Team(v) => v.len(),
            SheetData::Gallery(v) => v.len(),
            SheetData::Countdown(c) => c.iter().count(),
            SheetData::Theme(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn headers(&self) -> Vec<String> {
        match self {
            SheetData::Events(_) => Event::header(),
            SheetData::Fanfics(_) => Fanfic::header(),
            SheetData::Team(_) => TeamMember::header(),
            SheetData::Gallery(_) => GalleryItem::header(),
            SheetData::Countdown(_) => CountdownEntry::header(),
            SheetData::Theme(_) => ["Logo", "Colors"].map(String::from).to_vec(),
        }
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        match self {
            SheetData::Events(v) => v.iter().map(Event::to_row).collect(),
            SheetData::Fanfics(v) => v.iter().map(Fanfic::to_row).collect(),
            SheetData::Team(v) => v.iter().map(TeamMember::to_row).collect(),
            SheetData::Gallery(v) => v.iter().map(GalleryItem::to_row).collect(),
            SheetData::Countdown(c) => c.iter().map(CountdownEntry::to_row).collect(),
            SheetData::Theme(p) => {
                vec![vec![p.logo.clone(), p.colors.join(" ")]]
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        match self {
            SheetData::Events(v) => serde_json::to_string_pretty(v),
            SheetData::Fanfics(v) => serde_json::to_string_pretty(v),
            SheetData::Team(v) => serde_json::to_string_pretty(v),
            SheetData::Gallery(v) => serde_json::to_string_pretty(v),
            SheetData::Countdown(c) => serde_json::to_string_pretty(c),
            SheetData::Theme(p) => serde_json::to_string_pretty(p),
        }
    }
}

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Fetch one sheet. The theme goes through the cache; everything else is
/// a plain fetch-and-extract.
fn collect(kind: SheetKind, params: &Params) -> SheetData {
    match kind {
        SheetKind::Events => SheetData::Events(fetch::events(&params.urls)),
        SheetKind::Fanfics => SheetData::Fanfics(fetch::fanfics(&params.urls)),
        SheetKind::Team => SheetData::Team(fetch::team(&params.urls)),
        SheetKind::Gallery => SheetData::Gallery(fetch::gallery(&params.urls)),
        SheetKind::Countdown => SheetData::Countdown(fetch::countdown(&params.urls)),
        SheetKind::Theme => {
            let cache = FileCache::new(&params.cache_dir);
            SheetData::Theme(init_theme(&params.urls, &cache, params.theme_policy))
        }
    }
}

pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let sheets = params.selected_sheets();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(sheets.len());
    }

    // Independent fetches, one thread each; order of completion is
    // irrelevant, results are keyed by sheet kind.
    let mut results: Vec<(SheetKind, SheetData)> = Vec::with_capacity(sheets.len());
    thread::scope(|scope| {
        let handles: Vec<_> = sheets
            .iter()
            .map(|&kind| (kind, scope.spawn(move || collect(kind, params))))
            .collect();
        for (kind, handle) in handles {
            match handle.join() {
                Ok(data) => results.push((kind, data)),
                // A panicking fetch thread would be a bug; degrade like any
                // other failure and keep the remaining sheets.
                Err(_) => {
                    log::warn!("{}: fetch thread panicked, sheet skipped", kind.name());
                }
            }
        }
    });

    ensure_directory(&params.out)?;

    let mut written = Vec::with_capacity(results.len());
    for (kind, data) in &results {
        let path = match params.format {
            ExportFormat::Json => {
                let path = sheet_path(&params.out, kind.name(), "json");
                write_text(&path, &data.to_json()?)?;
                path
            }
            fmt => {
                let sep = fmt.delim().unwrap_or(',');
                let path = sheet_path(&params.out, kind.name(), fmt.ext());
                let headers = params.include_headers.then(|| data.headers());
                write_rows(&path, headers.as_deref(), &data.rows(), sep)?;
                path
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            p.sheet_done(kind.name(), data.len());
        }
        written.push(path);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary { files_written: written })
}
