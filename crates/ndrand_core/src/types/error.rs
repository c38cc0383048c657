//! Error types for structured error handling.
//!
//! This module provides:
//! - `TensorError`: Errors from dimension validation and container construction
//!
//! Errors are returned to the caller as-is; nothing in this crate logs or
//! swallows them.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, TensorError>;

/// Categorised tensor errors.
///
/// # Variants
/// - `InvalidDimension`: A requested dimension size is negative
/// - `NonIntegralDimension`: A requested dimension size is fractional or not finite
/// - `UnparsableDimension`: A textual dimension size is not a number
/// - `OutOfRangeDimension`: A whole-number size too large or too far below zero to represent
/// - `EmptyShape`: The builder was called without any dimension
/// - `InconsistentShape`: Matrix children do not share one shape
/// - `EmptyChildren`: A matrix was constructed from an empty child list
///
/// The first four variants are all the *invalid dimension* kind; use
/// [`TensorError::is_invalid_dimension`] to test for it regardless of cause.
///
/// # Examples
/// ```
/// use ndrand_core::types::TensorError;
///
/// let err = TensorError::InvalidDimension { axis: 1, size: -3 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid dimension at axis 1: size -3 is negative"
/// );
/// assert!(err.is_invalid_dimension());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TensorError {
    /// A dimension size is negative.
    #[error("Invalid dimension at axis {axis}: size {size} is negative")]
    InvalidDimension {
        /// Position of the offending size in the dimension list
        axis: usize,
        /// The rejected size
        size: i64,
    },

    /// A dimension size is not a finite whole number.
    #[error("Invalid dimension at axis {axis}: {value} is not a whole number")]
    NonIntegralDimension {
        /// Position of the offending size in the dimension list
        axis: usize,
        /// The rejected value
        value: f64,
    },

    /// A dimension size could not be parsed from text.
    #[error("Invalid dimension at axis {axis}: cannot parse {input:?}")]
    UnparsableDimension {
        /// Position of the offending size in the dimension list
        axis: usize,
        /// The rejected input
        input: String,
    },

    /// A whole-number size outside the representable range.
    ///
    /// Keeps the value as given, so `-1e300` is not reported as a saturated integer.
    #[error("Invalid dimension at axis {axis}: {value:e} is out of range")]
    OutOfRangeDimension {
        /// Position of the offending size in the dimension list
        axis: usize,
        /// The rejected value
        value: f64,
    },

    /// No dimension sizes were supplied to the builder.
    #[error("Dimension list is empty; at least one dimension is required")]
    EmptyShape,

    /// Matrix children have differing shapes.
    #[error("Inconsistent shape at child {index}: expected {expected:?}, found {found:?}")]
    InconsistentShape {
        /// Index of the first mismatching child
        index: usize,
        /// Shape of child 0
        expected: Vec<usize>,
        /// Shape of the mismatching child
        found: Vec<usize>,
    },

    /// A matrix needs at least one child to know its inner shape.
    #[error("Matrix requires at least one child")]
    EmptyChildren,
}

impl TensorError {
    /// Returns `true` if this error rejects a requested dimension size.
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(
            self,
            TensorError::InvalidDimension { .. }
                | TensorError::NonIntegralDimension { .. }
                | TensorError::UnparsableDimension { .. }
                | TensorError::OutOfRangeDimension { .. }
        )
    }
}
