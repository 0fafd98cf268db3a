//! The log-uniform distribution.
//!
//! A random variable is log-uniform on $[a, b]$ when its logarithm is uniform
//! on that interval. Sampling is thus a uniform draw $x \in [a, b]$ followed
//! by $e^x$, which gives values in $[e^a, e^b]$ that are denser near the lower
//! end.
//!
//! The mapping from raw engine words to floats is fixed, see [`Canonical`], so
//! that together with [`crate::mt::Mt19937`] a seed always reproduces the same
//! samples.
use num_traits::Float;
use rand::{distributions::Distribution, Rng, RngCore};
use tracing::{debug, info};

use crate::{
    error::{Bound, LoguniformError},
    mt::Mt19937,
};

const TWO_POW_32: f64 = 4_294_967_296.0;

/// A float type that can be built from the raw output of a 32-bit engine.
pub trait Canonical: Float + std::fmt::Display {
    /// draws a value uniformly in $[0, 1)$
    fn canonical<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}

impl Canonical for f32 {
    /// uses a single word $x$ and computes $x / 2^{32}$
    fn canonical<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let u = rng.next_u32() as f32 / TWO_POW_32 as f32;
        if u >= 1.0 {
            1.0 - f32::EPSILON / 2.0
        } else {
            u
        }
    }
}

impl Canonical for f64 {
    /// uses two consecutive words, low then high, and computes
    /// $(lo + hi \times 2^{32}) / 2^{64}$
    fn canonical<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let lo = rng.next_u32() as f64;
        let hi = rng.next_u32() as f64;
        let u = (lo + hi * TWO_POW_32) / (TWO_POW_32 * TWO_POW_32);
        if u >= 1.0 {
            1.0 - f64::EPSILON / 2.0
        } else {
            u
        }
    }
}

/// A validated log-uniform distribution.
///
/// `min` and `max` are the bounds _in log-space_, i.e. samples lie in
/// $[e^{min}, e^{max}]$.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogUniform<T> {
    min: T,
    max: T,
}

fn check_positive<T: Canonical>(bound: Bound, value: T) -> Result<(), LoguniformError> {
    let reason = if value.is_nan() || value <= T::zero() {
        "must be greater than zero (there is no value for zero-negative logarithms)"
    } else if value.is_infinite() {
        "must be finite"
    } else {
        return Ok(());
    };

    Err(LoguniformError::InvalidParameter {
        bound,
        reason,
        found: value.to_string(),
    })
}

impl<T: Canonical> LogUniform<T> {
    /// Builds the distribution, checking the minimum bound first.
    ///
    /// Both bounds have to be finite and strictly positive. A reversed range,
    /// i.e. `min > max`, is rejected as well, whereas `min == max` is allowed
    /// and always yields $e^{min}$.
    pub fn new(min: T, max: T) -> Result<Self, LoguniformError> {
        check_positive(Bound::Minimum, min)?;
        check_positive(Bound::Maximum, max)?;
        if min > max {
            return Err(LoguniformError::InvalidParameter {
                bound: Bound::Maximum,
                reason: "must not be less than the minimum value",
                found: format!("{} < {}", max, min),
            });
        }

        Ok(Self { min, max })
    }

    /// the lower bound, in log-space
    pub fn min(&self) -> T {
        self.min
    }

    /// the upper bound, in log-space
    pub fn max(&self) -> T {
        self.max
    }
}

impl<T: Canonical> Distribution<T> for LogUniform<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        // rounding may land one ulp past `max`
        (T::canonical(rng) * (self.max - self.min) + self.min)
            .min(self.max)
            .exp()
    }
}

/// Draws `count` log-uniform samples from an [`Mt19937`] seeded with `seed`.
///
/// Bounds are validated before anything is drawn, so either all `count`
/// samples are returned or none.
///
/// # Example
/// ```
/// use loguniform::generate_samples;
///
/// let samples = generate_samples(1.5, 20.06, 100, 42).unwrap();
/// assert_eq!(samples.len(), 100);
/// assert_eq!(samples, generate_samples(1.5, 20.06, 100, 42).unwrap());
/// ```
pub fn generate_samples<T: Canonical>(
    min: T,
    max: T,
    count: usize,
    seed: u32,
) -> Result<Vec<T>, LoguniformError> {
    let distribution = LogUniform::new(min, max)?;

    info!("drawing {} samples in [e^{}, e^{}]", count, min, max);
    debug!("seeding MT19937 with {}", seed);
    let mut rng = Mt19937::new(seed);

    Ok((0..count).map(|_| distribution.sample(&mut rng)).collect())
}
