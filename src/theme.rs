// src/theme.rs
//
// Theme sheet resolver. The sheet's shape has drifted repeatedly (one
// multi-line cell, four separate cells, stray header junk), so color
// resolution is an ordered chain of named strategies tried in sequence.
// First strategy that yields colors wins.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::csv::parse_rows;
use crate::records::ThemePalette;

/// Canonical palette, substituted whenever resolution comes up empty or
/// the sheet still carries the retired red scheme.
pub const FALLBACK_COLORS: [&str; 4] = ["#4E56C0", "#9B5DE0", "#D78FEE", "#FDCFFA"];

/// Distinguished logo token; its presence anywhere in the sheet switches
/// the site to the event branding.
pub const LOGO_TOKEN: &str = "VORTIX";

/// Logo used when the sheet mentions no recognized token.
pub const DEFAULT_LOGO: &str = "DZypher";

// Reds from the retired palette that a stale sheet may still publish.
// Seeing one of these first while the VORTIX branding is active means the
// colors row was never updated; the whole set gets replaced.
const LEGACY_REDS: [&str; 3] = ["#e62b1e", "#d32f2f", "#ff0000"];

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{6}").unwrap());

type ColorStrategy = fn(&str, &[Vec<String>]) -> Option<Vec<String>>;

// Tried in order; the order is the contract.
const COLOR_STRATEGIES: &[(&str, ColorStrategy)] = &[
    ("row-cells", colors_from_row_cells),
    ("raw-scan", colors_from_raw_text),
];

/// Resolve a palette from raw theme-sheet CSV text.
///
/// Returns `None` only when the text carries neither colors nor the
/// recognized logo token. Callers that need a palette unconditionally
/// layer `ThemePalette::fallback()` on top (see `cache::init_theme`).
pub fn resolve(text: &str) -> Option<ThemePalette> {
    let rows = parse_rows(text);
    let logo = detect_logo(text);

    let mut colors: Option<Vec<String>> = None;
    for (name, strategy) in COLOR_STRATEGIES {
        if let Some(found) = strategy(text, &rows) {
            debug!("theme: {} colors via '{}' strategy", found.len(), name);
            colors = Some(found);
            break;
        }
    }

    match colors {
        Some(colors) => Some(sanitize(ThemePalette { colors, logo })),
        None if logo == LOGO_TOKEN => Some(ThemePalette::fallback()),
        None => None,
    }
}

/// Replace a recognized-but-stale palette with the canonical one.
fn sanitize(palette: ThemePalette) -> ThemePalette {
    let stale = palette.logo == LOGO_TOKEN
        && palette
            .colors
            .first()
            .is_some_and(|c| LEGACY_REDS.contains(&c.to_ascii_lowercase().as_str()));

    if stale {
        debug!("theme: first color is a legacy red, substituting fallback palette");
        ThemePalette {
            colors: FALLBACK_COLORS.map(String::from).to_vec(),
            logo: palette.logo,
        }
    } else {
        palette
    }
}

fn detect_logo(text: &str) -> String {
    if text.to_ascii_lowercase().contains(&LOGO_TOKEN.to_ascii_lowercase()) {
        s!(LOGO_TOKEN)
    } else {
        s!(DEFAULT_LOGO)
    }
}

/* ---------------- color strategies ---------------- */

/// Structured pass: first row whose cells carry three or more hex colors
/// contributes its first four.
fn colors_from_row_cells(_text: &str, rows: &[Vec<String>]) -> Option<Vec<String>> {
    for row in rows {
        let found: Vec<String> = row
            .iter()
            .filter_map(|cell| HEX_COLOR.find(cell.trim()).map(|m| s!(m.as_str())))
            .collect();
        if found.len() >= 3 {
            return Some(found.into_iter().take(4).collect());
        }
    }
    None
}

/// Unstructured pass: every hex color anywhere in the raw text, first four.
/// Catches the multi-line single-cell layout that defeats the row scan.
fn colors_from_raw_text(text: &str, _rows: &[Vec<String>]) -> Option<Vec<String>> {
    let found: Vec<String> = HEX_COLOR
        .find_iter(text)
        .take(4)
        .map(|m| s!(m.as_str()))
        .collect();
    if found.is_empty() { None } else { Some(found) }
}
