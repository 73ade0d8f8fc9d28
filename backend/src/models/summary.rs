//! Run outputs
//!
//! [`RunSummary`] holds the aggregate statistics; [`SimulationRun`] bundles
//! it with the full entity sequence. Both are plain serializable values
//! handed back to the caller and never kept by the engine.

use serde::{Deserialize, Serialize};

use super::entity::EntityRecord;

/// Usage figures for one server
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerStats {
    /// 1-based server index
    pub server: usize,

    /// Entities assigned to this server
    pub entities_served: usize,

    /// Sum of service times handled by this server
    pub busy_time: f64,

    /// `busy_time / duration * 100`, clamped to 100 (0 when duration is 0)
    pub utilization_pct: f64,
}

/// Aggregate statistics for one run
///
/// All fields are zero for a run with no entities.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Entities that arrived inside the horizon
    pub total_entities: usize,

    /// Entities whose service completed by the end of the run
    /// (`end_service_time <= duration`).
    ///
    /// In a multi-server dataset replay the run ends at the *last* entity's
    /// end of service, so an earlier entity with a longer service can
    /// finish after it and fall outside the count even though every row
    /// was processed.
    pub served_entities: usize,

    /// Entities that found every server busy
    pub waited_entities: usize,

    pub average_wait: f64,

    pub max_wait: f64,

    /// Mean time from arrival to end of service
    pub average_time_in_system: f64,

    /// Share of total server capacity spent serving, in `[0, 100]`
    pub utilization_pct: f64,

    /// Little's Law estimate `λ · W_q`
    pub average_queue_length: f64,

    /// One entry per server, in server order
    pub servers: Vec<ServerStats>,
}

/// Everything a run hands back to its caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Entity outcomes in arrival order
    pub records: Vec<EntityRecord>,

    pub summary: RunSummary,

    /// Horizon used for utilization: the configured duration for random
    /// runs, the last entity's end of service for dataset runs
    pub duration: f64,

    /// Arrival rate used for the queue-length estimate
    pub arrival_rate: f64,

    /// Dataset rows that failed to parse or were out of range (0 for
    /// random runs)
    pub dropped_rows: usize,
}
