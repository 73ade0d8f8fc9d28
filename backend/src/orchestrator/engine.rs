//! Orchestrator Engine
//!
//! Two entry modes share one pipeline:
//!
//! ```text
//! random:  params ──validate──► ArrivalGenerator ─┐
//!                                                ├─► ServerPool (stepper) ─► summarize ─► SimulationRun
//! dataset: text ──parse──► TimedPair sequence ───┘
//! ```
//!
//! | Mode    | Horizon for utilization      | λ for Little's Law          |
//! |---------|------------------------------|-----------------------------|
//! | random  | configured `duration`        | configured `arrival_rate`   |
//! | dataset | last entity's end of service | 1 / mean inter-arrival time |
//!
//! # Example
//!
//! ```rust
//! use queue_simulator_core_rs::orchestrator::{run_dataset, run_random};
//! use queue_simulator_core_rs::{RngManager, SimulationParameters};
//!
//! let params = SimulationParameters {
//!     arrival_rate: 0.9,
//!     service_rate: 0.5,
//!     num_servers: 2,
//!     duration: 240.0,
//! };
//! let run = run_random(&params, &mut RngManager::new(7)).unwrap();
//! assert!(run.summary.utilization_pct <= 100.0);
//!
//! let replay = run_dataset("iat,service\n2,3\n4,1", 1).unwrap();
//! assert_eq!(replay.records[1].end_service_time, 5.0);
//! ```

use thiserror::Error;
use tracing::info;

use crate::arrivals::ArrivalGenerator;
use crate::dataset::{
    effective_arrival_rate, parse_dataset_with, ColumnStrategy, SubstringHeuristic,
};
use crate::engine::{replay_pairs, ServerPool};
use crate::models::{SimulationParameters, SimulationRun, TimedPair};
use crate::rng::UniformSource;
use crate::stats::summarize;

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A parameter is out of range; raised before any computation
    #[error("Invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// Parameters could not be read from their serialized form
    #[error("Invalid config: {0}")]
    Config(String),
}

/// Random-draw run.
///
/// Parameters are validated first; the first offending field is reported
/// as [`SimulationError::InvalidParameter`].
pub fn run_random<S>(
    params: &SimulationParameters,
    source: &mut S,
) -> Result<SimulationRun, SimulationError>
where
    S: UniformSource + ?Sized,
{
    params.validate()?;

    info!(
        arrival_rate = params.arrival_rate,
        service_rate = params.service_rate,
        servers = params.num_servers,
        duration = params.duration,
        traffic_intensity = params.traffic_intensity(),
        "starting random-draw run"
    );

    let mut pool = ServerPool::new(params.num_servers)?;
    let records = ArrivalGenerator::new(params).generate(source, &mut pool);
    let summary = summarize(
        &records,
        params.num_servers,
        params.duration,
        params.arrival_rate,
    );

    info!(
        entities = summary.total_entities,
        average_wait = summary.average_wait,
        utilization_pct = summary.utilization_pct,
        "random-draw run complete"
    );

    Ok(SimulationRun {
        records,
        summary,
        duration: params.duration,
        arrival_rate: params.arrival_rate,
        dropped_rows: 0,
    })
}

/// Dataset-replay run using the default column detection.
pub fn run_dataset(text: &str, num_servers: usize) -> Result<SimulationRun, SimulationError> {
    run_dataset_with(text, num_servers, &SubstringHeuristic)
}

/// Dataset-replay run with a caller-supplied column strategy.
pub fn run_dataset_with<C>(
    text: &str,
    num_servers: usize,
    strategy: &C,
) -> Result<SimulationRun, SimulationError>
where
    C: ColumnStrategy + ?Sized,
{
    let mut pool = ServerPool::new(num_servers)?;
    let parsed = parse_dataset_with(text, strategy);

    info!(
        rows = parsed.pairs.len(),
        dropped_rows = parsed.dropped_rows,
        servers = num_servers,
        "starting dataset run"
    );

    let mut run = replay(&parsed.pairs, &mut pool, parsed.effective_arrival_rate());
    run.dropped_rows = parsed.dropped_rows;

    info!(
        entities = run.summary.total_entities,
        average_wait = run.summary.average_wait,
        utilization_pct = run.summary.utilization_pct,
        "dataset run complete"
    );

    Ok(run)
}

/// Replay an in-memory pair sequence, with dataset-run semantics.
///
/// Unlike a dataset, the pairs are not filtered: the first one out of
/// range fails the whole run with [`SimulationError::InvalidParameter`].
pub fn run_pairs(pairs: &[TimedPair], num_servers: usize) -> Result<SimulationRun, SimulationError> {
    let mut pool = ServerPool::new(num_servers)?;
    pairs.iter().try_for_each(TimedPair::validate)?;
    let arrival_rate = effective_arrival_rate(pairs);
    Ok(replay(pairs, &mut pool, arrival_rate))
}

fn replay(pairs: &[TimedPair], pool: &mut ServerPool, arrival_rate: f64) -> SimulationRun {
    let records = replay_pairs(pairs, pool);
    let duration = records.last().map_or(0.0, |r| r.end_service_time);
    let summary = summarize(&records, pool.num_servers(), duration, arrival_rate);

    SimulationRun {
        records,
        summary,
        duration,
        arrival_rate,
        dropped_rows: 0,
    }
}
