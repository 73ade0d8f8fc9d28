//! Dataset adapter: delimited text → timed pairs.
//!
//! # Format
//!
//! - First line is the header
//! - Cells are separated by any of `,` `;` or tab, and trimmed (surrounding
//!   double quotes included)
//! - A row is kept only when both selected cells parse as finite numbers,
//!   inter-arrival ≥ 0 and service > 0. Other rows are dropped and counted
//! - Blank lines are ignored; input with fewer than two lines is empty
//!
//! The adapter never touches the filesystem: callers hand it the text.
//!
//! # Example
//!
//! ```
//! use queue_simulator_core_rs::dataset::parse_dataset;
//! use queue_simulator_core_rs::TimedPair;
//!
//! let parsed = parse_dataset("iat;service\n2;3\n4;1\nx;2\n");
//! assert_eq!(parsed.pairs, vec![TimedPair::new(2.0, 3.0), TimedPair::new(4.0, 1.0)]);
//! assert_eq!(parsed.dropped_rows, 1);
//! ```

mod columns;

pub use columns::{
    detect_columns, ColumnSelection, ColumnStrategy, SubstringHeuristic, INTER_ARRIVAL_KEYS,
    SERVICE_KEYS,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::TimedPair;

/// Result of parsing a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDataset {
    /// Accepted rows in file order
    pub pairs: Vec<TimedPair>,

    /// Data rows rejected as unparseable or out of range
    pub dropped_rows: usize,

    /// Columns used; `None` when there was no data row to read
    pub columns: Option<ColumnSelection>,
}

impl ParsedDataset {
    fn empty() -> Self {
        Self {
            pairs: Vec::new(),
            dropped_rows: 0,
            columns: None,
        }
    }

    /// λ estimate for the parsed rows; see [`effective_arrival_rate`].
    pub fn effective_arrival_rate(&self) -> f64 {
        effective_arrival_rate(&self.pairs)
    }
}

/// Reciprocal of the mean inter-arrival time of `pairs`, as supplied
/// (before the first arrival is moved to time 0).
///
/// Falls back to 1 when the mean is 0 or there are no pairs.
pub fn effective_arrival_rate(pairs: &[TimedPair]) -> f64 {
    if pairs.is_empty() {
        return 1.0;
    }
    let mean = pairs.iter().map(|p| p.inter_arrival_time).sum::<f64>() / pairs.len() as f64;
    if mean == 0.0 {
        1.0
    } else {
        1.0 / mean
    }
}

/// Parse with the default [`SubstringHeuristic`] column detection.
pub fn parse_dataset(text: &str) -> ParsedDataset {
    parse_dataset_with(text, &SubstringHeuristic)
}

/// Parse with a caller-supplied column strategy.
pub fn parse_dataset_with<C>(text: &str, strategy: &C) -> ParsedDataset
where
    C: ColumnStrategy + ?Sized,
{
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = match lines.next() {
        Some(line) => split_cells(line),
        None => return ParsedDataset::empty(),
    };

    let mut rows = lines.peekable();
    if rows.peek().is_none() {
        return ParsedDataset::empty();
    }

    let columns = strategy.select(&header);
    debug!(
        inter_arrival_column = columns.inter_arrival,
        service_column = columns.service,
        inter_arrival_detected = columns.inter_arrival_detected,
        service_detected = columns.service_detected,
        "dataset columns selected"
    );

    let mut pairs = Vec::new();
    let mut dropped_rows = 0;

    for (line_no, line) in rows.enumerate() {
        match parse_row(&split_cells(line), &columns) {
            Some(pair) => pairs.push(pair),
            None => {
                dropped_rows += 1;
                debug!(row = line_no + 1, line, "dropping dataset row");
            }
        }
    }

    ParsedDataset {
        pairs,
        dropped_rows,
        columns: Some(columns),
    }
}

fn split_cells(line: &str) -> Vec<&str> {
    line.split(|c: char| matches!(c, ',' | ';' | '\t'))
        .map(|cell| cell.trim().trim_matches('"').trim())
        .collect()
}

fn parse_row(cells: &[&str], columns: &ColumnSelection) -> Option<TimedPair> {
    let inter_arrival_time = parse_number(cells.get(columns.inter_arrival)?)?;
    let service_time = parse_number(cells.get(columns.service)?)?;

    let pair = TimedPair::new(inter_arrival_time, service_time);
    pair.validate().ok()?;
    Some(pair)
}

fn parse_number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}
