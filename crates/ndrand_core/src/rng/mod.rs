//! # Random Number Generation
//!
//! This module provides the scalar generator: standard-normal variates drawn
//! with the Box-Muller transform from an injectable uniform source.
//!
//! ## Module Structure
//!
//! - [`source`]: The [`UniformSource`] trait, implemented for every `rand` RNG
//! - [`box_muller`]: [`standard_normal`], [`randn_bm`] and the [`BoxMuller`] distribution
//!
//! ## Usage Example
//!
//! ```rust
//! use ndrand_core::rng::{randn_bm, standard_normal, BoxMuller};
//! use rand::rngs::StdRng;
//! use rand::{Rng, SeedableRng};
//!
//! // Thread-local source
//! let z = randn_bm();
//! assert!(z.is_finite());
//!
//! // Explicit source, passed by mutable reference
//! let mut rng = StdRng::seed_from_u64(7);
//! let a = standard_normal(&mut rng);
//!
//! // As a `rand_distr::Distribution`
//! let b: f64 = rng.sample(BoxMuller);
//! assert!(a.is_finite() && b.is_finite());
//! ```
//!
//! ## Statelessness
//!
//! Each call consumes two (or more) uniforms and returns one variate. The
//! sine-branch partner of the transform is discarded rather than cached, so a
//! call never depends on any previous call.

pub mod box_muller;
pub mod source;

pub use box_muller::{randn_bm, standard_normal, BoxMuller};
pub use source::UniformSource;

#[cfg(test)]
mod tests;
