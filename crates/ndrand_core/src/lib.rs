//! # ndrand_core: Standard-Normal Sampling and N-Dimensional Arrays
//!
//! ## Layer 1 (Foundation) Role
//!
//! ndrand_core is the bottom layer of the workspace, providing:
//! - Box-Muller standard-normal sampling over an injectable uniform source (`rng`)
//! - Recursive construction of nested vectors/matrices from a fill function (`ndarray`)
//! - A convenience entry point composing the two (`randn`)
//! - Container types `Vector`, `Matrix`, `NdArray` (`types::shape`)
//! - Error type `TensorError` (`types::error`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use ndrand_core::ndarray::build;
//! use ndrand_core::randn::{random_tensor, RandomTensor};
//!
//! // Scalar when no dimensions are given
//! let scalar = random_tensor(&[]).unwrap();
//! assert!(matches!(scalar, RandomTensor::Scalar(_)));
//!
//! // 2x3 matrix of standard-normal values
//! let tensor = random_tensor(&[2, 3]).unwrap();
//! assert_eq!(tensor.shape(), vec![2, 3]);
//!
//! // Any fill function works with the builder
//! let mut counter = 0;
//! let ones = build(&[2, 2], || {
//!     counter += 1;
//!     counter
//! })
//! .unwrap();
//! assert_eq!(ones.leaves().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//! ```
//!
//! ## Thread Safety
//!
//! No function in this crate holds state between calls. The default uniform
//! source is the calling thread's `rand::thread_rng()`, so the convenience
//! entry points can be called from many threads at once. Injected sources are
//! borrowed mutably for the duration of a single call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod ndarray;
pub mod randn;
pub mod rng;
pub mod types;

pub use ndarray::build;
pub use randn::{random_tensor, random_tensor_from_shape, RandomTensor};
pub use rng::{randn_bm, standard_normal, BoxMuller, UniformSource};
pub use types::{Matrix, NdArray, TensorError, Vector};
