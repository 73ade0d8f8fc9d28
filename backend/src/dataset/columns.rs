//! Header-driven column detection
//!
//! Detection is a pure function of the header cells, kept behind
//! [`ColumnStrategy`] so a different rule can be plugged into
//! [`parse_dataset_with`](super::parse_dataset_with) without touching the
//! row parser or the stepper.

use serde::{Deserialize, Serialize};

/// Substrings that mark an inter-arrival column (matched lowercase).
pub const INTER_ARRIVAL_KEYS: [&str; 4] = ["iat", "inter_arrival", "interarrival", "inter-arrival"];

/// Substrings that mark a service-time column (matched lowercase).
pub const SERVICE_KEYS: [&str; 3] = ["service", "st", "duration"];

/// Column indices chosen for a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    pub inter_arrival: usize,
    pub service: usize,
    /// False when `inter_arrival` is the positional fallback
    pub inter_arrival_detected: bool,
    /// False when `service` is the positional fallback
    pub service_detected: bool,
}

/// Picks the inter-arrival and service columns from a header row.
pub trait ColumnStrategy {
    /// `header` cells are already trimmed but keep their original case.
    fn select(&self, header: &[&str]) -> ColumnSelection;
}

/// Default rule: first header cell containing a known substring,
/// case-insensitive, falling back to positions 0 and 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringHeuristic;

impl ColumnStrategy for SubstringHeuristic {
    fn select(&self, header: &[&str]) -> ColumnSelection {
        detect_columns(header)
    }
}

/// Apply the substring heuristic to a header row.
///
/// Without a match the inter-arrival column is 0 and the service column is
/// 1, or the last column when the header has only one.
///
/// # Example
/// ```
/// use queue_simulator_core_rs::dataset::detect_columns;
///
/// let cols = detect_columns(&["id", "Service_Time", "IAT"]);
/// assert_eq!(cols.inter_arrival, 2);
/// assert_eq!(cols.service, 1);
/// ```
pub fn detect_columns(header: &[&str]) -> ColumnSelection {
    let lowered: Vec<String> = header.iter().map(|h| h.to_lowercase()).collect();
    let inter_arrival = first_containing(&lowered, &INTER_ARRIVAL_KEYS);
    let service = first_containing(&lowered, &SERVICE_KEYS);
    let service_fallback = if header.len() >= 2 {
        1
    } else {
        header.len().saturating_sub(1)
    };

    ColumnSelection {
        inter_arrival: inter_arrival.unwrap_or(0),
        service: service.unwrap_or(service_fallback),
        inter_arrival_detected: inter_arrival.is_some(),
        service_detected: service.is_some(),
    }
}

fn first_containing(cells: &[String], keys: &[&str]) -> Option<usize> {
    cells
        .iter()
        .position(|cell| keys.iter().any(|k| cell.contains(k)))
}
