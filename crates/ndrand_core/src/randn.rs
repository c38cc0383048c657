//! Convenience entry point composing the scalar generator and the builder.
//!
//! With no dimensions a bare scalar is returned, not a zero-dimensional
//! container; with dimensions the builder is driven by the Box-Muller
//! generator.

use std::fmt;

use crate::ndarray::{build_with_shape, validate_dimensions};
use crate::rng::{randn_bm, standard_normal, UniformSource};
use crate::types::{NdArray, Result};

/// Output of [`random_tensor`]: a scalar or an n-dimensional array.
#[derive(Debug, Clone, PartialEq)]
pub enum RandomTensor {
    /// Returned when no dimensions were requested.
    Scalar(f64),
    /// Returned for one or more dimensions.
    Array(NdArray<f64>),
}

impl RandomTensor {
    /// Shape of the output; empty for a scalar.
    pub fn shape(&self) -> Vec<usize> {
        match self {
            RandomTensor::Scalar(_) => Vec::new(),
            RandomTensor::Array(a) => a.shape(),
        }
    }

    /// The scalar value, if this is one.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            RandomTensor::Scalar(x) => Some(*x),
            RandomTensor::Array(_) => None,
        }
    }

    /// The array, if this is one.
    pub fn as_array(&self) -> Option<&NdArray<f64>> {
        match self {
            RandomTensor::Scalar(_) => None,
            RandomTensor::Array(a) => Some(a),
        }
    }

    /// Consumes the output, returning the array if this is one.
    pub fn into_array(self) -> Option<NdArray<f64>> {
        match self {
            RandomTensor::Scalar(_) => None,
            RandomTensor::Array(a) => Some(a),
        }
    }
}

impl fmt::Display for RandomTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomTensor::Scalar(x) => fmt::Display::fmt(x, f),
            RandomTensor::Array(a) => fmt::Display::fmt(a, f),
        }
    }
}

/// Generates standard-normal values in the requested shape.
///
/// Uses the calling thread's RNG.
///
/// # Errors
///
/// [`crate::types::TensorError::InvalidDimension`] if any size is negative.
///
/// # Examples
///
/// ```rust
/// use ndrand_core::randn::{random_tensor, RandomTensor};
///
/// assert!(matches!(random_tensor(&[]).unwrap(), RandomTensor::Scalar(_)));
///
/// let v = random_tensor(&[4]).unwrap();
/// assert_eq!(v.shape(), vec![4]);
/// ```
pub fn random_tensor(dimension_sizes: &[i64]) -> Result<RandomTensor> {
    random_tensor_from_shape(&validate_dimensions(dimension_sizes)?)
}

/// [`random_tensor`] for a shape that is already validated, such as one
/// returned by [`crate::ndarray::parse_dimensions`].
///
/// An empty `shape` yields a scalar.
pub fn random_tensor_from_shape(shape: &[usize]) -> Result<RandomTensor> {
    sample_shape(shape, randn_bm)
}

/// Same as [`random_tensor`], drawing uniforms from an explicit `source`.
///
/// # Examples
///
/// ```rust
/// use ndrand_core::randn::random_tensor_with;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let a = random_tensor_with(&mut StdRng::seed_from_u64(3), &[2, 2]).unwrap();
/// let b = random_tensor_with(&mut StdRng::seed_from_u64(3), &[2, 2]).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn random_tensor_with<S>(source: &mut S, dimension_sizes: &[i64]) -> Result<RandomTensor>
where
    S: UniformSource + ?Sized,
{
    random_tensor_from_shape_with(source, &validate_dimensions(dimension_sizes)?)
}

/// [`random_tensor_from_shape`] drawing uniforms from an explicit `source`.
pub fn random_tensor_from_shape_with<S>(source: &mut S, shape: &[usize]) -> Result<RandomTensor>
where
    S: UniformSource + ?Sized,
{
    sample_shape(shape, || standard_normal(source))
}

fn sample_shape<F>(shape: &[usize], mut sample: F) -> Result<RandomTensor>
where
    F: FnMut() -> f64,
{
    if shape.is_empty() {
        return Ok(RandomTensor::Scalar(sample()));
    }
    Ok(RandomTensor::Array(build_with_shape(shape, sample)?))
}
