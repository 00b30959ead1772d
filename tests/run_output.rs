// tests/run_output.rs
//
// Full run with an unreachable endpoint: every selected sheet degrades to
// empty but still produces its output file.

use std::path::PathBuf;

use dz_scrape::params::{Params, SheetKind, SheetUrls};
use dz_scrape::progress::NullProgress;
use dz_scrape::runner;

#[test]
fn dead_endpoint_run_still_writes_every_selected_sheet() {
    let out = tempfile::tempdir().unwrap();
    let base = "http://127.0.0.1:9";

    let mut params = Params::new();
    params.sheets = vec![SheetKind::Events, SheetKind::Countdown];
    params.urls = SheetUrls {
        events: format!("{base}/events"),
        fanfics: format!("{base}/fanfics"),
        team: format!("{base}/team"),
        gallery: format!("{base}/gallery"),
        countdown: format!("{base}/countdown"),
        theme: format!("{base}/theme"),
    };
    params.out = PathBuf::from(out.path());
    params.include_headers = true;

    let mut progress = NullProgress;
    let summary = runner::run(&params, Some(&mut progress)).unwrap();

    assert_eq!(summary.files_written.len(), 2);
    for path in &summary.files_written {
        assert!(path.exists(), "missing output file {}", path.display());
    }

    // Header row only: the fetch failed, so no data rows follow.
    let events_csv = std::fs::read_to_string(out.path().join("events.csv")).unwrap();
    assert!(events_csv.starts_with("Title,Category,"));
    assert_eq!(events_csv.lines().count(), 1);
}
