//! Random-draw run parameters
//!
//! Parameters may be built in code or loaded from JSON. Either way they are
//! validated before a run starts, so NaN or infinite statistics can never
//! come out of a bad rate or horizon.

use serde::{Deserialize, Serialize};

use crate::orchestrator::SimulationError;

/// Inputs to a random-draw run
///
/// # Example
/// ```
/// use queue_simulator_core_rs::SimulationParameters;
///
/// let params = SimulationParameters {
///     arrival_rate: 0.8,
///     service_rate: 0.5,
///     num_servers: 2,
///     duration: 480.0,
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Mean arrivals per unit time (λ)
    pub arrival_rate: f64,

    /// Mean service completions per unit time per server (μ)
    pub service_rate: f64,

    /// Number of identical parallel servers (c)
    pub num_servers: usize,

    /// Arrival horizon; entities arriving at or after it are discarded
    pub duration: f64,
}

impl SimulationParameters {
    /// Load parameters from a JSON object.
    ///
    /// Missing or mistyped fields surface as [`SimulationError::Config`].
    /// The result is not validated; call [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        serde_json::from_str(json).map_err(|e| SimulationError::Config(e.to_string()))
    }

    /// Check every field, reporting the first one out of range.
    pub fn validate(&self) -> Result<(), SimulationError> {
        require_positive("arrival_rate", self.arrival_rate)?;
        require_positive("service_rate", self.service_rate)?;
        validate_server_count(self.num_servers)?;
        require_positive("duration", self.duration)?;
        Ok(())
    }

    /// Offered load per server, `λ / (c·μ)`. Values ≥ 1 mean the queue
    /// grows without bound over a long horizon.
    pub fn traffic_intensity(&self) -> f64 {
        self.arrival_rate / (self.num_servers as f64 * self.service_rate)
    }
}

/// Reject a server count of zero.
pub(crate) fn validate_server_count(num_servers: usize) -> Result<(), SimulationError> {
    if num_servers == 0 {
        return Err(SimulationError::InvalidParameter {
            field: "num_servers",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn require_positive(field: &'static str, value: f64) -> Result<(), SimulationError> {
    if !value.is_finite() {
        return Err(SimulationError::InvalidParameter {
            field,
            reason: format!("must be finite, got {}", value),
        });
    }
    if value <= 0.0 {
        return Err(SimulationError::InvalidParameter {
            field,
            reason: format!("must be > 0, got {}", value),
        });
    }
    Ok(())
}
