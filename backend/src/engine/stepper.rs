//! Server assignment for a multi-server FCFS queue
//!
//! Entities are handled strictly in arrival order. Each one goes to the
//! server that frees up first (lowest index on ties), starts at
//! `max(arrival, server free time)` and holds the server for its service
//! time. Since arrivals are non-decreasing, the earliest-free server is
//! exactly the one a FCFS queue would hand the entity to.
//!
//! # Example
//!
//! ```rust
//! use queue_simulator_core_rs::engine::assign_server;
//!
//! let mut next_available = vec![5.0, 2.0, 2.0];
//! let a = assign_server(&mut next_available, 1.0, 4.0).unwrap();
//!
//! assert_eq!(a.server, 2); // first of the two servers free at 2.0
//! assert_eq!(a.wait_time, 1.0);
//! assert_eq!(a.end_service_time, 6.0);
//! assert_eq!(next_available, vec![5.0, 6.0, 2.0]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::params::validate_server_count;
use crate::models::{EntityRecord, TimedPair};
use crate::orchestrator::SimulationError;

/// Timing decided for one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Chosen server, 1-based
    pub server: usize,
    pub wait_time: f64,
    pub start_service_time: f64,
    pub end_service_time: f64,
}

/// Assign one entity to the earliest-available server.
///
/// `next_available[i]` is the time server `i + 1` becomes free; the chosen
/// slot is overwritten with the entity's end of service. Returns `None`
/// only when there are no servers.
pub fn assign_server(
    next_available: &mut [f64],
    arrival_time: f64,
    service_time: f64,
) -> Option<Assignment> {
    let (index, free_at) = earliest_free(next_available)?;

    let start_service_time = arrival_time.max(free_at);
    let end_service_time = start_service_time + service_time;
    next_available[index] = end_service_time;

    Some(Assignment {
        server: index + 1,
        wait_time: start_service_time - arrival_time,
        start_service_time,
        end_service_time,
    })
}

/// Index and value of the minimum, first occurrence winning ties.
fn earliest_free(next_available: &[f64]) -> Option<(usize, f64)> {
    let mut iter = next_available.iter().copied().enumerate();
    let first = iter.next()?;
    Some(iter.fold(first, |best, candidate| {
        if candidate.1 < best.1 {
            candidate
        } else {
            best
        }
    }))
}

/// Per-server availability for one run.
///
/// Always holds at least one server. Each run builds its own pool.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerPool {
    next_available: Vec<f64>,
}

impl ServerPool {
    /// Pool of `num_servers` servers, all free at time 0.
    pub fn new(num_servers: usize) -> Result<Self, SimulationError> {
        validate_server_count(num_servers)?;
        Ok(Self {
            next_available: vec![0.0; num_servers],
        })
    }

    pub fn num_servers(&self) -> usize {
        self.next_available.len()
    }

    /// Time each server becomes free, in server order.
    pub fn next_available(&self) -> &[f64] {
        &self.next_available
    }

    /// Assign an entity arriving at `arrival_time`.
    pub fn assign(&mut self, arrival_time: f64, service_time: f64) -> Assignment {
        match assign_server(&mut self.next_available, arrival_time, service_time) {
            Some(assignment) => assignment,
            None => unreachable!("ServerPool is constructed with at least one server"),
        }
    }

    /// Step one entity through the pool and build its record.
    ///
    /// `uniforms` are the (arrival, service) draws behind `pair`, or zeros
    /// when the pair did not come from sampling.
    pub fn admit(
        &mut self,
        id: usize,
        arrival_time: f64,
        pair: TimedPair,
        uniforms: (f64, f64),
    ) -> EntityRecord {
        let a = self.assign(arrival_time, pair.service_time);
        trace!(
            id,
            arrival_time,
            server = a.server,
            wait = a.wait_time,
            end = a.end_service_time,
            "entity assigned"
        );

        EntityRecord {
            id,
            arrival_uniform: uniforms.0,
            service_uniform: uniforms.1,
            inter_arrival_time: pair.inter_arrival_time,
            arrival_time,
            service_time: pair.service_time,
            wait_time: a.wait_time,
            start_service_time: a.start_service_time,
            end_service_time: a.end_service_time,
            server: a.server,
        }
    }
}

/// Run a fixed pair sequence through `pool`.
///
/// The first entity arrives at time 0 whatever its recorded inter-arrival
/// time; later arrivals accumulate. Uniform draws are recorded as 0.
/// Pairs are taken as already checked (see [`TimedPair::validate`]).
pub fn replay_pairs(pairs: &[TimedPair], pool: &mut ServerPool) -> Vec<EntityRecord> {
    let mut records = Vec::with_capacity(pairs.len());
    let mut current_time = 0.0;

    for (i, pair) in pairs.iter().enumerate() {
        let inter_arrival_time = if i == 0 { 0.0 } else { pair.inter_arrival_time };
        current_time += inter_arrival_time;

        let pair = TimedPair::new(inter_arrival_time, pair.service_time);
        records.push(pool.admit(i + 1, current_time, pair, (0.0, 0.0)));
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slice_has_no_assignment() {
        let mut none: Vec<f64> = Vec::new();
        assert_eq!(assign_server(&mut none, 0.0, 1.0), None);
    }

    #[test]
    fn test_idle_server_means_no_wait() {
        let mut servers = vec![3.0];
        let a = assign_server(&mut servers, 4.0, 1.0).unwrap();
        assert_eq!(a.wait_time, 0.0);
        assert_eq!(a.start_service_time, 4.0);
        assert_eq!(a.end_service_time, 5.0);
        assert_eq!(servers, vec![5.0]);
    }

    #[test]
    fn test_busy_server_means_wait() {
        let mut servers = vec![10.0];
        let a = assign_server(&mut servers, 4.0, 2.0).unwrap();
        assert_eq!(a.wait_time, 6.0);
        assert_eq!(a.start_service_time, 10.0);
        assert_eq!(a.end_service_time, 12.0);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let mut servers = vec![0.0; 3];
        assert_eq!(assign_server(&mut servers, 0.0, 1.0).unwrap().server, 1);
        assert_eq!(assign_server(&mut servers, 0.0, 1.0).unwrap().server, 2);
        assert_eq!(assign_server(&mut servers, 0.0, 1.0).unwrap().server, 3);
        // all free at 1.0 again
        assert_eq!(assign_server(&mut servers, 0.5, 1.0).unwrap().server, 1);
    }

    #[test]
    fn test_pool_rejects_zero_servers() {
        assert!(matches!(
            ServerPool::new(0),
            Err(SimulationError::InvalidParameter {
                field: "num_servers",
                ..
            })
        ));
    }

    #[test]
    fn test_replay_forces_first_arrival_to_zero() {
        let mut pool = ServerPool::new(1).unwrap();
        let pairs = [TimedPair::new(7.0, 1.0), TimedPair::new(2.0, 1.0)];
        let records = replay_pairs(&pairs, &mut pool);

        assert_eq!(records[0].inter_arrival_time, 0.0);
        assert_eq!(records[0].arrival_time, 0.0);
        assert_eq!(records[1].arrival_time, 2.0);
        assert_eq!(records[1].id, 2);
        assert_eq!(pool.next_available(), &[3.0]);
    }
}
