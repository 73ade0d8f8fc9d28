//! Per-entity inputs and outcomes
//!
//! A [`TimedPair`] is what the stepper consumes for one entity; an
//! [`EntityRecord`] is what it produces. Records are created once, in
//! arrival order, and never modified afterwards.

use serde::{Deserialize, Serialize};

use crate::orchestrator::SimulationError;

/// Inter-arrival and service time for one entity.
///
/// Produced either by sampling or by parsing a dataset row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedPair {
    /// Time since the previous arrival (≥ 0)
    pub inter_arrival_time: f64,
    /// Time the entity occupies its server (> 0)
    pub service_time: f64,
}

impl TimedPair {
    pub fn new(inter_arrival_time: f64, service_time: f64) -> Self {
        Self {
            inter_arrival_time,
            service_time,
        }
    }

    /// Check both times, reporting the first one out of range.
    ///
    /// Inter-arrival time must be finite and ≥ 0, service time finite
    /// and > 0.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let iat = self.inter_arrival_time;
        if !iat.is_finite() || iat < 0.0 {
            return Err(SimulationError::InvalidParameter {
                field: "inter_arrival_time",
                reason: format!("must be finite and >= 0, got {}", iat),
            });
        }
        let service = self.service_time;
        if !service.is_finite() || service <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                field: "service_time",
                reason: format!("must be finite and > 0, got {}", service),
            });
        }
        Ok(())
    }
}

/// Outcome for a single entity
///
/// # Invariants
///
/// - `wait_time = start_service_time - arrival_time >= 0`
/// - `end_service_time = start_service_time + service_time`
/// - `server` is 1-based
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Sequential id, 1-based, in arrival order
    pub id: usize,

    /// Uniform draw behind the inter-arrival time (0 for dataset runs)
    pub arrival_uniform: f64,

    /// Uniform draw behind the service time (0 for dataset runs)
    pub service_uniform: f64,

    pub inter_arrival_time: f64,

    /// Cumulative sum of inter-arrival times
    pub arrival_time: f64,

    pub service_time: f64,

    pub wait_time: f64,

    pub start_service_time: f64,

    pub end_service_time: f64,

    /// Server that handled the entity, 1-based
    pub server: usize,
}

impl EntityRecord {
    /// Time in system (queueing plus service)
    pub fn sojourn_time(&self) -> f64 {
        self.end_service_time - self.arrival_time
    }

    /// True when the entity had to queue
    pub fn waited(&self) -> bool {
        self.wait_time > 0.0
    }
}
