// src/links.rs
//
// Google Drive share links point at a viewer page, not at the file bytes.
// Anything the sheets hand us as an image/document source goes through
// `fix_drive_link` so the consumer gets a direct-content URL.

use std::sync::LazyLock;

use regex::Regex;

// Share links come in two shapes: ".../file/d/<ID>/view" and ".../open?id=<ID>".
static DRIVE_PATH_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]+)").unwrap());
static DRIVE_QUERY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]id=([a-zA-Z0-9_-]+)").unwrap());

/// Direct-content host for Drive files.
const DIRECT_HOST: &str = "https://lh3.googleusercontent.com/d/";

/// Rewrite a Drive share link to its direct-content form.
///
/// First capturing pattern wins; a URL matching neither passes through
/// unchanged. Empty input stays empty.
pub fn fix_drive_link(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return s!();
    }

    let id = DRIVE_PATH_ID
        .captures(url)
        .or_else(|| DRIVE_QUERY_ID.captures(url))
        .map(|c| c[1].to_string());

    match id {
        Some(id) => join!(DIRECT_HOST, &id),
        None => s!(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_file_d_view_links() {
        let out = fix_drive_link("https://drive.google.com/file/d/ABC123/view?usp=drivesdk");
        assert_eq!(out, "https://lh3.googleusercontent.com/d/ABC123");
    }

    #[test]
    fn rewrites_open_id_links() {
        let out = fix_drive_link("https://drive.google.com/open?id=12qDXDJDL0ikQEpkpTrYezhgb6zwo4_tU");
        assert_eq!(out, "https://lh3.googleusercontent.com/d/12qDXDJDL0ikQEpkpTrYezhgb6zwo4_tU");
    }

    #[test]
    fn path_form_takes_precedence_over_query_form() {
        let out = fix_drive_link("https://drive.google.com/file/d/AAA/view?id=BBB");
        assert!(out.ends_with("/AAA"));
    }

    #[test]
    fn unrelated_urls_pass_through() {
        let url = "https://example.com/pic.png";
        assert_eq!(fix_drive_link(url), url);
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(fix_drive_link(""), "");
        assert_eq!(fix_drive_link("   "), "");
    }
}
