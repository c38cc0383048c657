//! Uniform random source abstraction.
//!
//! The scalar generator draws from a [`UniformSource`] borrowed for the
//! duration of one call. Every [`rand::RngCore`] implementor is a source, so
//! `thread_rng()`, `StdRng` and friends work unchanged; deterministic stubs
//! only need to implement [`UniformSource::next_uniform`].

use rand::{Rng, RngCore};

/// A stream of uniform variates in `[0, 1)`.
///
/// # Examples
///
/// ```rust
/// use ndrand_core::rng::UniformSource;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let u = rng.next_uniform();
/// assert!((0.0..1.0).contains(&u));
/// ```
pub trait UniformSource {
    /// Draws the next uniform variate in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> UniformSource for R {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}
