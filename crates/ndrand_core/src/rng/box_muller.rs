//! Box-Muller standard-normal generator.
//!
//! Converts two uniform variates `u`, `v` in `(0, 1)` into one standard-normal
//! variate:
//!
//! ```text
//! z = sqrt(-2 ln u) * cos(2 pi v)
//! ```
//!
//! Zero draws are rejected and redrawn so that `ln(0)` is never evaluated.
//! The loop terminates almost surely for any genuine uniform source.

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::Distribution;

use super::source::UniformSource;

/// Draws one standard-normal variate (mean 0, variance 1) from `source`.
///
/// All `u` draws happen before any `v` draw; for a source that never yields
/// zero this consumes exactly two uniforms per call.
///
/// # Examples
///
/// ```rust
/// use ndrand_core::rng::standard_normal;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut a = StdRng::seed_from_u64(12345);
/// let mut b = StdRng::seed_from_u64(12345);
/// assert_eq!(standard_normal(&mut a), standard_normal(&mut b));
/// ```
#[inline]
pub fn standard_normal<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    let mut u = 0.0;
    while u == 0.0 {
        u = source.next_uniform();
    }
    let mut v = 0.0;
    while v == 0.0 {
        v = source.next_uniform();
    }
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}

/// Draws one standard-normal variate from the calling thread's RNG.
///
/// Safe to call concurrently from any number of threads; each thread uses its
/// own `rand::thread_rng()` instance.
#[inline]
pub fn randn_bm() -> f64 {
    standard_normal(&mut rand::thread_rng())
}

/// The Box-Muller generator as a `rand_distr` distribution.
///
/// Lets [`standard_normal`] be used wherever `rand` expects a
/// [`Distribution`], e.g. `rng.sample(BoxMuller)` or
/// `BoxMuller.sample_iter(rng)`.
///
/// # Examples
///
/// ```rust
/// use ndrand_core::rng::BoxMuller;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rand_distr::Distribution;
///
/// let rng = StdRng::seed_from_u64(1);
/// let samples: Vec<f64> = BoxMuller.sample_iter(rng).take(4).collect();
/// assert_eq!(samples.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoxMuller;

impl Distribution<f64> for BoxMuller {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        standard_normal(rng)
    }
}
