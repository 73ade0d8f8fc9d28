//! Reduction of entity records into summary statistics
//!
//! # Rules
//!
//! - Empty record sequence → every field zero
//! - Utilization = total service time / (servers × duration) × 100, capped at
//!   100, and 0 when duration is 0
//! - Average queue length comes from Little's Law, `L_q = λ · W_q`. It is an
//!   estimate from the mean wait, not a time-weighted count of the queue.

use crate::models::{EntityRecord, RunSummary, ServerStats};

/// Summarize a finished run.
///
/// # Arguments
///
/// * `records` - Entity outcomes in arrival order
/// * `num_servers` - Servers in the pool
/// * `duration` - Horizon the utilization is measured against
/// * `arrival_rate` - λ for the queue-length estimate
///
/// # Example
///
/// ```rust
/// use queue_simulator_core_rs::stats::summarize;
///
/// let summary = summarize(&[], 2, 100.0, 1.0);
/// assert_eq!(summary.total_entities, 0);
/// assert_eq!(summary.utilization_pct, 0.0);
/// ```
pub fn summarize(
    records: &[EntityRecord],
    num_servers: usize,
    duration: f64,
    arrival_rate: f64,
) -> RunSummary {
    let servers = per_server(records, num_servers, duration);

    if records.is_empty() {
        return RunSummary {
            servers,
            ..RunSummary::default()
        };
    }

    let n = records.len() as f64;
    let total_wait: f64 = records.iter().map(|r| r.wait_time).sum();
    let max_wait = records.iter().map(|r| r.wait_time).fold(0.0, f64::max);
    let total_service: f64 = records.iter().map(|r| r.service_time).sum();
    let total_sojourn: f64 = records.iter().map(EntityRecord::sojourn_time).sum();
    let average_wait = total_wait / n;

    RunSummary {
        total_entities: records.len(),
        served_entities: records
            .iter()
            .filter(|r| r.end_service_time <= duration)
            .count(),
        waited_entities: records.iter().filter(|r| r.waited()).count(),
        average_wait,
        max_wait,
        average_time_in_system: total_sojourn / n,
        utilization_pct: utilization(total_service, num_servers as f64 * duration),
        average_queue_length: arrival_rate * average_wait,
        servers,
    }
}

/// Busy share of `capacity` as a percentage in `[0, 100]`.
fn utilization(busy_time: f64, capacity: f64) -> f64 {
    if capacity <= 0.0 {
        return 0.0;
    }
    (busy_time / capacity * 100.0).min(100.0)
}

fn per_server(records: &[EntityRecord], num_servers: usize, duration: f64) -> Vec<ServerStats> {
    let mut stats: Vec<ServerStats> = (1..=num_servers)
        .map(|server| ServerStats {
            server,
            ..ServerStats::default()
        })
        .collect();

    for record in records {
        if let Some(s) = stats.get_mut(record.server.wrapping_sub(1)) {
            s.entities_served += 1;
            s.busy_time += record.service_time;
        }
    }

    for s in &mut stats {
        s.utilization_pct = utilization(s.busy_time, duration);
    }

    stats
}
