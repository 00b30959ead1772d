// src/cli.rs
use std::{env, path::PathBuf, time::Duration};

use crate::cache::CachePolicy;
use crate::params::{ExportFormat, Params, SheetKind};
use crate::progress::Progress;
use crate::runner;

/// Prints per-sheet progress lines to stderr.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Fetching {total} sheet(s)…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn sheet_done(&mut self, sheet: &str, records: usize) {
        eprintln!("  {sheet}: {records} record(s)");
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut progress = StderrProgress;
    let summary = runner::run(&params, Some(&mut progress))?;
    for path in &summary.files_written {
        println!("{}", path.display());
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--sheet" | "-s" => {
                let v = args.next().ok_or("Missing value for --sheet")?;
                params.sheets = parse_sheet_list(&v)?;
            }
            "-o" | "--out" => {
                params.out = PathBuf::from(args.next().ok_or("Missing output directory")?);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    "json" => ExportFormat::Json,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => params.include_headers = true,
            "--cache-dir" => {
                params.cache_dir = PathBuf::from(args.next().ok_or("Missing cache directory")?);
            }
            "--theme-ttl" => {
                let secs: u64 = args.next().ok_or("Missing value for --theme-ttl")?.parse()?;
                params.theme_policy = CachePolicy::Ttl(Duration::from_secs(secs));
            }
            "--refresh-theme" => params.theme_policy = CachePolicy::RefreshAlways,
            "--prefer-cached-theme" => params.theme_policy = CachePolicy::PreferCached,
            "--list-sheets" => {
                for kind in SheetKind::ALL {
                    println!("{}", kind.name());
                }
                std::process::exit(0);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

fn parse_sheet_list(s: &str) -> Result<Vec<SheetKind>, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let kind = SheetKind::parse(part).ok_or_else(|| format!("Unknown sheet: {}", part))?;
        if !out.contains(&kind) {
            out.push(kind);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_list_parses_and_dedups() {
        let v = parse_sheet_list("events, theme,events").unwrap();
        assert_eq!(v, vec![SheetKind::Events, SheetKind::Theme]);
    }

    #[test]
    fn unknown_sheet_is_an_error() {
        assert!(parse_sheet_list("events,nope").is_err());
    }

    #[test]
    fn empty_parts_are_ignored() {
        assert!(parse_sheet_list(",,").unwrap().is_empty());
    }
}
