//! Inverse-transform sampling of exponential variates.
//!
//! `value = -ln(R) / rate` maps a uniform `R` onto an exponential sample
//! with mean `1 / rate`. The uniform is returned alongside the sample so
//! records can show which draw produced each time.

use serde::{Deserialize, Serialize};

use crate::rng::UniformSource;

/// Smallest uniform fed to the logarithm. A raw draw of exactly 0 is
/// clamped here, so the sample stays finite (about `708 / rate`).
pub const MIN_UNIFORM: f64 = f64::MIN_POSITIVE;

/// One exponential sample and the uniform draw it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentialDraw {
    /// Uniform draw after clamping, in `(0.0, 1.0)`
    pub uniform: f64,
    /// `-ln(uniform) / rate`
    pub value: f64,
}

/// Draw one exponential sample with the given rate.
///
/// Consumes exactly one value from `source`. The caller guarantees
/// `rate > 0`; parameter validation happens before a run starts.
///
/// # Example
/// ```
/// use queue_simulator_core_rs::sampling::sample_exponential;
///
/// let mut source = || 0.5;
/// let draw = sample_exponential(&mut source, 2.0);
/// assert_eq!(draw.uniform, 0.5);
/// assert!((draw.value - 0.5f64.ln().abs() / 2.0).abs() < 1e-12);
/// ```
pub fn sample_exponential<S>(source: &mut S, rate: f64) -> ExponentialDraw
where
    S: UniformSource + ?Sized,
{
    let uniform = source.next_f64().max(MIN_UNIFORM);
    ExponentialDraw {
        uniform,
        value: -uniform.ln() / rate,
    }
}
