// benches/tokenize.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dz_scrape::csv;
use dz_scrape::extract::events;

// Synthetic sheet shaped like the published events export: quoted
// multi-line descriptions, drive links, a mix of blank cells.
fn build_sample(rows: usize) -> String {
    let mut out = String::from(
        "event_name,type,description,image,registration_link,registration_status,chip,date\n",
    );
    for i in 0..rows {
        out.push_str(&format!(
            "EVENT {i},Workshop,\"Line one.\nLine two, with a comma and \"\"quotes\"\".\",\
https://drive.google.com/file/d/IMG{i}/view,https://example.com/reg/{i},OPEN,,{} Jan 2026\n",
            (i % 28) + 1
        ));
    }
    out
}

fn bench_tokenize(c: &mut Criterion) {
    let doc = build_sample(500);

    c.bench_function("parse_rows_500", |b| {
        b.iter(|| {
            let rows = csv::parse_rows(black_box(&doc));
            black_box(rows.len())
        })
    });

    c.bench_function("events_from_csv_500", |b| {
        b.iter(|| {
            let evs = events::from_csv(black_box(&doc));
            black_box(evs.len())
        })
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
