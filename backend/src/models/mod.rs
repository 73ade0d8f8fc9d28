//! Domain models for the queue simulator

pub mod entity;
pub mod params;
pub mod summary;

// Re-exports
pub use entity::{EntityRecord, TimedPair};
pub use params::SimulationParameters;
pub use summary::{RunSummary, ServerStats, SimulationRun};
