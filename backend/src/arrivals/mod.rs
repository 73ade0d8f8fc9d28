//! Random-draw entity generation.
//!
//! Draws exponential inter-arrival and service times and steps each entity
//! through the server pool until an arrival falls at or past the horizon.
//!
//! # Key Principles
//!
//! 1. **Horizon only**: the horizon check is the sole stopping rule; there
//!    is no cap on the entity count
//! 2. **First arrival at 0**: entity 1 arrives at time 0. Its inter-arrival
//!    draw still happens and its uniform is kept on the record
//! 3. **Discard, don't truncate**: the entity that crosses the horizon is
//!    dropped before its service time is drawn
//!
//! # Example
//!
//! ```
//! use queue_simulator_core_rs::arrivals::ArrivalGenerator;
//! use queue_simulator_core_rs::engine::ServerPool;
//! use queue_simulator_core_rs::{RngManager, SimulationParameters};
//!
//! let params = SimulationParameters {
//!     arrival_rate: 1.0,
//!     service_rate: 1.2,
//!     num_servers: 1,
//!     duration: 50.0,
//! };
//! let mut rng = RngManager::new(42);
//! let mut pool = ServerPool::new(params.num_servers).unwrap();
//!
//! let records = ArrivalGenerator::new(&params).generate(&mut rng, &mut pool);
//! assert!(records.iter().all(|r| r.arrival_time < 50.0));
//! ```

use tracing::debug;

use crate::engine::ServerPool;
use crate::models::{EntityRecord, SimulationParameters, TimedPair};
use crate::rng::UniformSource;
use crate::sampling::sample_exponential;

/// Generator for a random-draw entity sequence.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalGenerator {
    arrival_rate: f64,
    service_rate: f64,
    duration: f64,
}

impl ArrivalGenerator {
    /// Build from already validated parameters.
    pub fn new(params: &SimulationParameters) -> Self {
        Self {
            arrival_rate: params.arrival_rate,
            service_rate: params.service_rate,
            duration: params.duration,
        }
    }

    /// Generate and step entities until the horizon is reached.
    pub fn generate<S>(&self, source: &mut S, pool: &mut ServerPool) -> Vec<EntityRecord>
    where
        S: UniformSource + ?Sized,
    {
        let mut records = Vec::new();
        let mut current_time = 0.0;
        let mut id = 0;

        loop {
            id += 1;

            let arrival = sample_exponential(source, self.arrival_rate);
            let inter_arrival_time = if id == 1 { 0.0 } else { arrival.value };
            current_time += inter_arrival_time;

            if current_time >= self.duration {
                debug!(
                    discarded_id = id,
                    arrival_time = current_time,
                    horizon = self.duration,
                    "arrival past horizon, stopping"
                );
                break;
            }

            let service = sample_exponential(source, self.service_rate);
            let pair = TimedPair::new(inter_arrival_time, service.value);
            records.push(pool.admit(id, current_time, pair, (arrival.uniform, service.uniform)));
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(duration: f64) -> SimulationParameters {
        SimulationParameters {
            arrival_rate: 1.0,
            service_rate: 1.0,
            num_servers: 1,
            duration,
        }
    }

    /// Source that replays a fixed list of uniforms, then repeats the last.
    fn scripted(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i.min(values.len() - 1)];
            i += 1;
            v
        }
    }

    #[test]
    fn test_first_entity_arrives_at_zero_but_keeps_uniform() {
        // e^-1 ≈ 0.3679 gives a sample of 1.0 at rate 1
        let u = (-1.0f64).exp();
        let mut source = scripted(vec![0.9, u, 0.0]);
        let mut pool = ServerPool::new(1).unwrap();

        let records = ArrivalGenerator::new(&params(10.0)).generate(&mut source, &mut pool);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].arrival_uniform, 0.9);
        assert_eq!(records[0].inter_arrival_time, 0.0);
        assert_eq!(records[0].arrival_time, 0.0);
        assert!((records[0].service_time - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_horizon_entity_is_discarded() {
        // Every draw is e^-1 -> every sample is 1.0
        let u = (-1.0f64).exp();
        let mut source = scripted(vec![u]);
        let mut pool = ServerPool::new(1).unwrap();

        let records = ArrivalGenerator::new(&params(2.5)).generate(&mut source, &mut pool);

        // arrivals at 0, 1, 2; the one at 3.0 is past the horizon
        assert_eq!(records.len(), 3);
        let arrivals: Vec<f64> = records.iter().map(|r| r.arrival_time).collect();
        for (got, want) in arrivals.iter().zip([0.0, 1.0, 2.0]) {
            assert!((got - want).abs() < 1e-9);
        }
    }

    #[test]
    fn test_arrival_exactly_on_horizon_is_discarded() {
        // rate ln 2 with u = 0.5 samples exactly 1.0
        let rate = -(0.5f64).ln();
        let params = SimulationParameters {
            arrival_rate: rate,
            ..params(2.0)
        };
        let mut source = scripted(vec![0.5]);
        let mut pool = ServerPool::new(1).unwrap();

        let records = ArrivalGenerator::new(&params).generate(&mut source, &mut pool);

        // arrivals at 0 and 1 are kept; the one landing on 2.0 is not
        let arrivals: Vec<f64> = records.iter().map(|r| r.arrival_time).collect();
        assert_eq!(arrivals, vec![0.0, 1.0]);
    }

    #[test]
    fn test_discarded_entity_draws_no_service_time() {
        let u = (-1.0f64).exp();
        let mut draws = 0;
        let mut source = || {
            draws += 1;
            u
        };
        let mut pool = ServerPool::new(1).unwrap();
        ArrivalGenerator::new(&params(2.5)).generate(&mut source, &mut pool);

        // 3 kept entities x 2 draws + 1 arrival draw for the discarded one
        assert_eq!(draws, 7);
    }
}
