// src/cache.rs
//
// Persisted theme palette: the one piece of state that outlives a run.
// The cache is a port (trait) injected by the caller so tests and other
// frontends can supply their own storage; the file-backed impl stores
// JSON under the cache dir.
//
// Freshness is an explicit policy. The site's old behavior — any cached
// value suppresses the live fetch forever — is kept available as
// `PreferCached` but is no longer the default, since it meant a palette
// update never reached a returning visitor.

use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use log::warn;

use crate::fetch;
use crate::params::SheetUrls;
use crate::records::ThemePalette;
use crate::theme;

/// Fixed cache entry name under the cache dir.
pub const THEME_CACHE_FILE: &str = "theme.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CachePolicy {
    /// Any cached value wins, however old (legacy site behavior).
    PreferCached,
    /// Cached value wins while younger than the given age.
    Ttl(Duration),
    /// Always fetch live; cache is write-only.
    RefreshAlways,
}

/// Storage port for the persisted palette.
pub trait ThemeCache {
    /// Cached palette plus when it was written, if any.
    fn get(&self) -> Option<(ThemePalette, SystemTime)>;
    fn set(&self, palette: &ThemePalette) -> io::Result<()>;
}

/// JSON file under a cache directory.
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    pub fn new(cache_dir: &Path) -> Self {
        Self { path: cache_dir.join(THEME_CACHE_FILE) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeCache for FileCache {
    fn get(&self) -> Option<(ThemePalette, SystemTime)> {
        let text = fs::read_to_string(&self.path).ok()?;
        let palette: ThemePalette = match serde_json::from_str(&text) {
            Ok(p) => p,
            Err(e) => {
                warn!("theme cache at {} is unreadable, ignoring: {e}", self.path.display());
                return None;
            }
        };
        let written = fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        Some((palette, written))
    }

    fn set(&self, palette: &ThemePalette) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(palette)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}

/// Should the cached copy short-circuit the live fetch?
fn cache_is_fresh(policy: CachePolicy, written: SystemTime) -> bool {
    match policy {
        CachePolicy::PreferCached => true,
        CachePolicy::Ttl(ttl) => written.elapsed().map(|age| age < ttl).unwrap_or(false),
        CachePolicy::RefreshAlways => false,
    }
}

/// Produce the startup palette. Never returns an empty theme:
/// policy-admitted cache hit, else live fetch (written back on success —
/// last good value wins), else the stale cached copy, else the fallback.
pub fn init_theme(urls: &SheetUrls, cache: &dyn ThemeCache, policy: CachePolicy) -> ThemePalette {
    let cached = cache.get();

    if let Some((palette, written)) = &cached {
        if cache_is_fresh(policy, *written) {
            return palette.clone();
        }
    }

    match fetch::theme_text(urls) {
        Ok(text) => match theme::resolve(&text) {
            Some(palette) => {
                if let Err(e) = cache.set(&palette) {
                    warn!("theme cache write failed: {e}");
                }
                palette
            }
            None => stale_or_fallback(cached),
        },
        Err(e) => {
            warn!("theme: live fetch failed, reusing last known palette: {e}");
            stale_or_fallback(cached)
        }
    }
}

fn stale_or_fallback(cached: Option<(ThemePalette, SystemTime)>) -> ThemePalette {
    cached.map(|(p, _)| p).unwrap_or_else(ThemePalette::fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefer_cached_admits_any_age() {
        assert!(cache_is_fresh(CachePolicy::PreferCached, SystemTime::UNIX_EPOCH));
    }

    #[test]
    fn ttl_admits_young_rejects_old() {
        let now = SystemTime::now();
        assert!(cache_is_fresh(CachePolicy::Ttl(Duration::from_secs(60)), now));
        let old = now - Duration::from_secs(120);
        assert!(!cache_is_fresh(CachePolicy::Ttl(Duration::from_secs(60)), old));
    }

    #[test]
    fn refresh_always_rejects_everything() {
        assert!(!cache_is_fresh(CachePolicy::RefreshAlways, SystemTime::now()));
    }

    #[test]
    fn stale_or_fallback_prefers_cached() {
        let p = ThemePalette { colors: vec![s!("#111111")], logo: s!("DZypher") };
        let got = stale_or_fallback(Some((p.clone(), SystemTime::now())));
        assert_eq!(got, p);
        assert_eq!(stale_or_fallback(None), ThemePalette::fallback());
    }
}
