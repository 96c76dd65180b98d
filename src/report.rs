//! Rank reporting: order tokens by descending count and print each with its
//! share of all counted tokens.
use crate::error::Error;
use crate::frequency::FrequencyTable;
use serde::Serialize;
use std::cmp::Reverse;
use std::fmt;
use std::io::{self, Write};

/// `100 * count / total`, or `0.0` when nothing was counted.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * count as f64 / total as f64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub token: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
    total: u64,
}

/// Consume `table` and rank its tokens: highest count first, ties broken by
/// ascending token order so output is reproducible.
pub fn rank(table: FrequencyTable) -> Ranking {
    let total = table.total();
    let mut pairs: Vec<(String, u64)> = table.into_iter().collect();
    pairs.sort_unstable_by(|a, b| (Reverse(a.1), &a.0).cmp(&(Reverse(b.1), &b.0)));
    let entries = pairs
        .into_iter()
        .map(|(token, count)| RankedEntry {
            percentage: percentage(count, total),
            token,
            count,
        })
        .collect();
    Ranking { entries, total }
}

impl Ranking {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only the first `n` entries.
    pub fn truncate(&mut self, n: usize) {
        self.entries.truncate(n);
    }
}

/// How percentages are rendered in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Shortest round-trip form, always with a fractional part.
    #[default]
    Shortest,
    Fixed(usize),
}

struct Percent(f64, Precision);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.1 {
            Precision::Fixed(digits) => write!(f, "{:.*}", digits, self.0),
            Precision::Shortest if self.0.fract() == 0.0 => write!(f, "{:.1}", self.0),
            Precision::Shortest => write!(f, "{}", self.0),
        }
    }
}

/// Write `token count percentage` lines.
pub fn write_text<W: Write>(out: &mut W, ranking: &Ranking, precision: Precision) -> io::Result<()> {
    for e in &ranking.entries {
        writeln!(out, "{} {} {}", e.token, e.count, Percent(e.percentage, precision))?;
    }
    Ok(())
}

/// Write the ranking as a JSON array of entries.
pub fn write_json<W: Write>(out: &mut W, ranking: &Ranking) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut *out, &ranking.entries)?;
    writeln!(out).map_err(Error::Output)
}
