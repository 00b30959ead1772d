// src/fetch.rs
//
// Thin fetch-then-extract wrappers, one per sheet. Every failure mode —
// transport error, empty body, malformed rows — degrades to an empty
// collection (or the fallback palette for the theme) with a warning in the
// log. Nothing here ever propagates an error to the caller.

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

use crate::extract;
use crate::net;
use crate::params::SheetUrls;
use crate::records::{CountdownEntry, Event, Fanfic, GalleryItem, TeamMember, ThemePalette};
use crate::theme;

fn sheet_text(url: &str, what: &str) -> Option<String> {
    match net::http_get(url) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("{what}: fetch failed, degrading to empty: {e}");
            None
        }
    }
}

pub fn events(urls: &SheetUrls) -> Vec<Event> {
    sheet_text(&urls.events, "events")
        .map(|t| extract::events::from_csv(&t))
        .unwrap_or_default()
}

pub fn fanfics(urls: &SheetUrls) -> Vec<Fanfic> {
    sheet_text(&urls.fanfics, "fanfics")
        .map(|t| extract::fanfics::from_csv(&t))
        .unwrap_or_default()
}

pub fn team(urls: &SheetUrls) -> Vec<TeamMember> {
    sheet_text(&urls.team, "team")
        .map(|t| extract::team::from_csv(&t))
        .unwrap_or_default()
}

pub fn gallery(urls: &SheetUrls) -> Vec<GalleryItem> {
    sheet_text(&urls.gallery, "gallery")
        .map(|t| extract::gallery::from_csv(&t))
        .unwrap_or_default()
}

pub fn countdown(urls: &SheetUrls) -> Option<CountdownEntry> {
    sheet_text(&urls.countdown, "countdown").and_then(|t| extract::countdown::from_csv(&t))
}

/// Raw theme CSV, with a cache-busting query param — Google serves the
/// publish-to-web export through an aggressive edge cache, and the theme is
/// the one sheet where a live override must show up promptly.
pub fn theme_text(urls: &SheetUrls) -> Result<String, Box<dyn Error>> {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    // The configured URL may or may not already carry a query string.
    let sep = if urls.theme.contains('?') { "&" } else { "?" };
    net::http_get(&join!(urls.theme.as_str(), sep, "t=", &millis.to_string()))
}

/// Live palette. Transport failure falls back to the canonical palette;
/// a reachable but unrecognizable sheet resolves to `None`.
pub fn theme(urls: &SheetUrls) -> Option<ThemePalette> {
    match theme_text(urls) {
        Ok(text) => theme::resolve(&text),
        Err(e) => {
            warn!("theme: fetch failed, using fallback palette: {e}");
            Some(ThemePalette::fallback())
        }
    }
}
