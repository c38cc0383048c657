//! Container and error types.
//!
//! This module provides:
//! - `shape`: The `Vector`, `Matrix` and `NdArray` containers produced by the builder
//! - `error`: Structured error type for dimension validation and container construction
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Vector`], [`Matrix`], [`NdArray`] from `shape`
//! - [`TensorError`] from `error`

pub mod error;
pub mod shape;

// Re-export commonly used types at module level
pub use error::{Result, TensorError};
pub use shape::{Matrix, NdArray, Vector};
