//! xorshift64* random number generator
//!
//! Fast, seedable PRNG used as the default [`UniformSource`] for random-draw
//! runs. It passes TestU01's BigCrush and keeps 64 bits of state, which
//! makes a run trivially reproducible from its seed.

use serde::{Deserialize, Serialize};

use super::UniformSource;

/// Seeded xorshift64* generator
///
/// # Example
/// ```
/// use queue_simulator_core_rs::RngManager;
/// use queue_simulator_core_rs::rng::UniformSource;
///
/// let mut rng = RngManager::new(12345);
/// let u = rng.next_f64();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is replaced by 1 (xorshift cannot leave the all-zero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the system clock, for runs where no seed was supplied.
    ///
    /// Returns the generator together with the seed it used so callers can
    /// report it and replay the run later.
    pub fn from_clock() -> (Self, u64) {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E37_79B9_7F4A_7C15);
        let rng = Self::new(seed);
        let seed = rng.state;
        (rng, seed)
    }

    /// Advance the state and return the next raw 64-bit value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Current internal state; `RngManager::new(state)` resumes the sequence.
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

impl UniformSource for RngManager {
    /// Uniform f64 in `[0.0, 1.0)` built from the top 53 bits.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_converted_to_nonzero() {
        let rng = RngManager::new(0);
        assert_ne!(rng.get_state(), 0, "Zero seed should be converted to 1");
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut rng = RngManager::new(12345);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!(
                (0.0..1.0).contains(&val),
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }

    #[test]
    fn test_clock_seed_is_replayable() {
        let (mut rng, seed) = RngManager::from_clock();
        let mut replay = RngManager::new(seed);
        for _ in 0..10 {
            assert_eq!(rng.next_u64(), replay.next_u64());
        }
    }
}
