//! Uniform random sources
//!
//! Every random draw in the simulator goes through a [`UniformSource`].
//! Runs take the source as an explicit `&mut` argument, so there is no
//! process-wide generator: tests can hand in a scripted source and get
//! exactly predictable records.

mod xorshift;

pub use xorshift::RngManager;

/// Capability to produce uniform values in `[0.0, 1.0)`.
///
/// # Example
/// ```
/// use queue_simulator_core_rs::rng::UniformSource;
///
/// let mut draws = vec![0.25, 0.75].into_iter();
/// let mut scripted = move || draws.next().unwrap_or(0.5);
/// assert_eq!(scripted.next_f64(), 0.25);
/// assert_eq!(scripted.next_f64(), 0.75);
/// assert_eq!(scripted.next_f64(), 0.5);
/// ```
pub trait UniformSource {
    /// Next value in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

impl<F> UniformSource for F
where
    F: FnMut() -> f64,
{
    fn next_f64(&mut self) -> f64 {
        self()
    }
}
