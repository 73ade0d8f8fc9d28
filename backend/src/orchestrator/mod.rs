//! Orchestrator - runs a simulation end to end
//!
//! Validates inputs, builds the server pool, drives one of the two entity
//! producers through the stepper and summarizes the result.
//!
//! See `engine.rs` for the implementation.

pub mod engine;

pub use engine::{run_dataset, run_dataset_with, run_pairs, run_random, SimulationError};
