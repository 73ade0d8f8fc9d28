//! Queue Simulator Core - Rust Engine
//!
//! Discrete-event estimator for multi-server FCFS queues (M/M/c): waiting
//! time, server utilization and queue length, from either exponential
//! random draws or a replayed dataset of inter-arrival/service times.
//!
//! # Architecture
//!
//! - **rng**: Uniform sources (seeded xorshift64*, or any scripted closure)
//! - **sampling**: Inverse-transform exponential sampler
//! - **engine**: Event stepper (earliest-available server assignment)
//! - **stats**: Aggregation of entity records into a run summary
//! - **arrivals**: Random-draw entity generator
//! - **dataset**: Delimited-text adapter with header-driven column detection
//! - **orchestrator**: End-to-end runs for both modes
//!
//! # Critical Invariants
//!
//! 1. Entities are processed strictly in arrival order, ids `1..=N`
//! 2. `wait_time >= 0` and `end_service_time = start_service_time + service_time`
//! 3. The stepper itself is deterministic; randomness only enters through
//!    an explicit [`rng::UniformSource`]

// Module declarations
pub mod arrivals;
pub mod dataset;
pub mod engine;
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod sampling;
pub mod stats;

// Re-exports for convenience
pub use dataset::{parse_dataset, ParsedDataset};
pub use engine::{Assignment, ServerPool};
pub use models::{
    EntityRecord, RunSummary, ServerStats, SimulationParameters, SimulationRun, TimedPair,
};
pub use orchestrator::{run_dataset, run_pairs, run_random, SimulationError};
pub use rng::{RngManager, UniformSource};
