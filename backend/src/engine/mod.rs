//! Event-stepping engine
//!
//! The stepper is shared by both run modes: sampled pairs and replayed
//! dataset pairs go through the same server-selection code.

pub mod stepper;

pub use stepper::{assign_server, replay_pairs, Assignment, ServerPool};
