//! Zipf summary over saved reports.
//!
//! Reads `token count percentage` files written by a previous run and
//! compares the two highest counts. Under Zipf's law the most frequent word
//! occurs about twice as often as the second.
use crate::error::ReportError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// `token count percentage`; counts are positive, shares are plain decimals.
const LINE_PAT: &str = r"^\s*(\S+)\s+([1-9]\d*)\s+(\+?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*$";

fn line_regex() -> &'static fancy_regex::Regex {
    static RE: OnceLock<fancy_regex::Regex> = OnceLock::new();
    RE.get_or_init(|| fancy_regex::Regex::new(LINE_PAT).expect("invalid report line regex"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub token: String,
    pub count: u64,
    pub percentage: f64,
}

fn parse_line(line: &str) -> Option<ReportLine> {
    let caps = line_regex().captures(line).ok()??;
    let percentage: f64 = caps.get(3)?.as_str().parse().ok()?;
    if !percentage.is_finite() {
        return None;
    }
    Some(ReportLine {
        token: caps.get(1)?.as_str().to_string(),
        count: caps.get(2)?.as_str().parse().ok()?,
        percentage,
    })
}

/// Parse report text. Blank lines and lines starting with `#` are skipped.
pub fn parse_report(path: &Path, text: &str) -> Result<Vec<ReportLine>, ReportError> {
    let mut lines = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let parsed = parse_line(line).ok_or_else(|| ReportError::Malformed {
            path: path.to_path_buf(),
            line: i + 1,
            text: line.to_string(),
        })?;
        lines.push(parsed);
    }
    Ok(lines)
}

pub fn load_report(path: &Path) -> Result<Vec<ReportLine>, ReportError> {
    let text = fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_report(path, &text)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZipfRow {
    pub book: String,
    pub first: u64,
    pub second: u64,
}

impl ZipfRow {
    /// `first / second`. Parsed reports never carry a zero count.
    pub fn ratio(&self) -> f64 {
        self.first as f64 / self.second as f64
    }
}

/// Book name is the report path without its extension.
fn book_name(path: &Path) -> String {
    let stem: PathBuf = path.with_extension("");
    stem.display().to_string()
}

pub fn summarize_lines(path: &Path, lines: &[ReportLine]) -> Result<ZipfRow, ReportError> {
    match lines {
        [first, second, ..] => Ok(ZipfRow {
            book: book_name(path),
            first: first.count,
            second: second.count,
        }),
        _ => Err(ReportError::TooFewEntries {
            path: path.to_path_buf(),
            found: lines.len(),
        }),
    }
}

pub fn summarize(path: &Path) -> Result<ZipfRow, ReportError> {
    let lines = load_report(path)?;
    summarize_lines(path, &lines)
}

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Book\tFirst\tSecond\tRatio")
}

pub fn write_row<W: Write>(out: &mut W, row: &ZipfRow) -> io::Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}\t{:.2}",
        row.book,
        row.first,
        row.second,
        row.ratio()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use crate::report::{self, Precision};

    #[test]
    fn parses_report_lines() {
        let text = "# words\nthe 3 50.0\na 2 33.333333333333336\n\nb 1 16.67\n";
        let lines = parse_report(Path::new("r.txt"), text).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].token, "the");
        assert_eq!(lines[0].count, 3);
        assert_eq!(lines[0].percentage, 50.0);
        assert_eq!(lines[2].count, 1);
    }

    #[test]
    fn accepts_integer_and_exponent_shares() {
        assert!(parse_line("x 1 50").is_some());
        assert!(parse_line("x 1 1e-7").is_some());
    }

    #[test]
    fn zero_count_is_malformed() {
        let err = parse_report(Path::new("r.txt"), "a 5 100.0\nb 0 0.0\n").unwrap_err();
        match err {
            ReportError::Malformed { line, text, .. } => {
                assert_eq!(line, 2);
                assert_eq!(text, "b 0 0.0");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(parse_line("b 00 0.0").is_none());
    }

    #[test]
    fn non_finite_shares_are_malformed() {
        for share in ["NaN", "inf", "-inf", "+inf", "infinity", "1e999", "-5.0"] {
            let line = format!("x 1 {share}");
            assert!(parse_line(&line).is_none(), "{line:?} was accepted");
        }
    }

    #[test]
    fn rejects_malformed_lines() {
        let err = parse_report(Path::new("bad.txt"), "the 3 50.0\nnot a number\n").unwrap_err();
        match err {
            ReportError::Malformed { line, text, .. } => {
                assert_eq!(line, 2);
                assert_eq!(text, "not a number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn summary_uses_top_two_counts() {
        let lines = parse_report(Path::new("x"), "the 10 40.0\nof 5 20.0\nand 4 16.0\n").unwrap();
        let row = summarize_lines(Path::new("books/moby.txt"), &lines).unwrap();
        assert_eq!(row.book, Path::new("books/moby").display().to_string());
        assert_eq!((row.first, row.second), (10, 5));

        let mut buf = Vec::new();
        write_header(&mut buf).unwrap();
        write_row(&mut buf, &row).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("Book\tFirst\tSecond\tRatio\n"));
        assert!(out.ends_with("\t10\t5\t2.00\n"));
    }

    #[test]
    fn single_entry_report_is_an_error() {
        let lines = parse_report(Path::new("x"), "only 1 100.0\n").unwrap();
        assert!(matches!(
            summarize_lines(Path::new("x.txt"), &lines),
            Err(ReportError::TooFewEntries { found: 1, .. })
        ));
    }

    #[test]
    fn reads_back_a_written_report() {
        let ranking = report::rank(normalize::tokens("a a a b b c".split_whitespace()).collect());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        let mut file = fs::File::create(&path).unwrap();
        report::write_text(&mut file, &ranking, Precision::Shortest).unwrap();
        drop(file);

        let row = summarize(&path).unwrap();
        assert_eq!((row.first, row.second), (3, 2));
        assert_eq!(row.ratio(), 1.5);
        assert_eq!(row.book, dir.path().join("book").display().to_string());
    }

    #[test]
    fn missing_report_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            summarize(&dir.path().join("absent.txt")),
            Err(ReportError::Io { .. })
        ));
    }
}
