// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::csv::write_row;

/// Ensure `dir` exists and is a directory.
pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write one sheet as CSV/TSV: optional header row, then data rows.
pub fn write_rows(
    path: &Path,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    sep: char,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    if let Some(h) = headers {
        write_row(&mut out, h, sep)?;
    }
    for row in rows {
        write_row(&mut out, row, sep)?;
    }
    out.flush()?;
    Ok(())
}

/// Write pre-rendered text (JSON export path).
pub fn write_text(path: &Path, text: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, text)?;
    Ok(())
}

/// `<out_dir>/<sheet>.<ext>`
pub fn sheet_path(out_dir: &Path, sheet: &str, ext: &str) -> PathBuf {
    out_dir.join(join!(sheet, ".", ext))
}
