// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Tokenizing ---------------- */

/// Tokenize CSV text into rows of string fields.
///
/// Single left-to-right scan with one "inside quoted field" flag:
/// - `""` inside quotes is an escaped literal quote.
/// - Raw newlines inside quotes stay in the field (the theme sheet packs
///   four colors into one multi-line cell).
/// - An unterminated quote is treated as closed at end of input.
/// - A trailing partial row is flushed even without a final newline.
///
/// Empty input yields no rows. Blank lines yield a one-field empty row;
/// extractors drop those via the identifying-field rule.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    // Normalize line endings before scanning.
    let raw = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(ch),
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => row.push(take(&mut field)),
                '\n' => {
                    row.push(take(&mut field));
                    rows.push(take(&mut row));
                }
                _ => field.push(ch),
            }
        }
    }

    // Flush whatever is in progress (also covers unterminated quotes).
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify rows (optional header first) with the given separator.
pub fn rows_to_string(rows: &[Vec<String>], headers: Option<&[String]>, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(parse_rows("").is_empty());
    }

    #[test]
    fn plain_rows_and_trailing_newline() {
        let rows = parse_rows("a,b\nc,d\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn no_trailing_newline_flushes_last_row() {
        let rows = parse_rows("a,b\nc,d");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["c", "d"]);
    }

    #[test]
    fn quoted_comma_is_not_a_separator() {
        let rows = parse_rows("\"a,b\"\n");
        assert_eq!(rows, vec![vec!["a,b"]]);
    }

    #[test]
    fn escaped_quote_inside_quotes() {
        let rows = parse_rows("\"a\"\"b\"\n");
        assert_eq!(rows, vec![vec!["a\"b"]]);
    }

    #[test]
    fn multiline_cell_stays_one_field() {
        let rows = parse_rows("\"line1\nline2\",x\n");
        assert_eq!(rows, vec![vec![s!("line1\nline2"), s!("x")]]);
    }

    #[test]
    fn crlf_and_cr_are_normalized() {
        let rows = parse_rows("a,b\r\nc,d\re,f");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"], vec!["e", "f"]]);
    }

    #[test]
    fn trailing_comma_gives_empty_trailing_field() {
        let rows = parse_rows("a,\n");
        assert_eq!(rows, vec![vec![s!("a"), s!()]]);
    }

    #[test]
    fn unterminated_quote_is_tolerated() {
        let rows = parse_rows("\"abc");
        assert_eq!(rows, vec![vec!["abc"]]);
    }

    #[test]
    fn blank_line_is_a_single_empty_field_row() {
        let rows = parse_rows("a\n\nb\n");
        assert_eq!(rows, vec![vec![s!("a")], vec![s!()], vec![s!("b")]]);
    }

    #[test]
    fn round_trip_on_unquoted_content() {
        let rows = vec![
            vec![s!("alpha"), s!("beta 2"), s!("gamma")],
            vec![s!("1"), s!("2"), s!("3")],
        ];
        let text = rows_to_string(&rows, None, ',');
        assert_eq!(parse_rows(&text), rows);
    }

    #[test]
    fn round_trip_quotes_fields_that_need_it() {
        let rows = vec![vec![s!("a,b"), s!("c\"d"), s!("e\nf")]];
        let text = rows_to_string(&rows, None, ',');
        assert_eq!(parse_rows(&text), rows);
    }
}
