//! # N-Dimensional Builder
//!
//! Builds nested [`Vector`]/[`Matrix`] containers of any depth, calling a fill
//! function once per leaf.
//!
//! ## Construction Order
//!
//! Recursion walks the dimension list by depth index. The last index yields a
//! [`Vector`] whose elements are `fill()` results; every earlier index yields a
//! [`Matrix`] whose children are built from the same dimension list one level
//! deeper. Siblings are built in index order, so leaves are produced in
//! row-major order: the outer index 0 subtree is complete before index 1
//! starts. This matters when `fill` wraps a stateful stream.
//!
//! ## Validation
//!
//! Sizes are validated up front. A rejected size means `fill` is never called,
//! even if the offending axis is not the first one.
//!
//! ## Usage Example
//!
//! ```rust
//! use ndrand_core::ndarray::{build, parse_dimensions};
//!
//! let mut next = 0;
//! let grid = build(&[2, 3], || {
//!     next += 1;
//!     next
//! })
//! .unwrap();
//! assert_eq!(grid.shape(), vec![2, 3]);
//! assert_eq!(grid.get(&[1, 0]), Some(&4));
//!
//! let dims = parse_dimensions(&["4", "2.0"]).unwrap();
//! assert_eq!(dims, vec![4, 2]);
//! ```

mod dimension;

pub use dimension::{dimension_from_f64, parse_dimensions, validate_dimensions};

use tracing::{debug, trace};

use crate::types::{Matrix, NdArray, Result, TensorError, Vector};

/// Builds an array of the given shape, filling each leaf with one `fill()` call.
///
/// # Arguments
///
/// * `dimension_sizes` - Length at each level, outermost first; must be non-empty
/// * `fill` - Called once per leaf, in row-major order
///
/// # Errors
///
/// - [`TensorError::EmptyShape`] if `dimension_sizes` is empty
/// - [`TensorError::InvalidDimension`] if any size is negative
///
/// In both cases `fill` is never called.
///
/// # Examples
///
/// ```rust
/// use ndrand_core::ndarray::build;
///
/// let zeros = build(&[0], || 1.0).unwrap();
/// assert!(zeros.is_empty());
///
/// let err = build(&[2, -1], || 1.0).unwrap_err();
/// assert!(err.is_invalid_dimension());
/// ```
pub fn build<T, F>(dimension_sizes: &[i64], fill: F) -> Result<NdArray<T>>
where
    F: FnMut() -> T,
{
    let shape = validate_dimensions(dimension_sizes)?;
    build_with_shape(&shape, fill)
}

/// Builds an array from an already validated shape.
///
/// # Errors
///
/// [`TensorError::EmptyShape`] if `shape` is empty.
pub fn build_with_shape<T, F>(shape: &[usize], mut fill: F) -> Result<NdArray<T>>
where
    F: FnMut() -> T,
{
    if shape.is_empty() {
        return Err(TensorError::EmptyShape);
    }

    debug!(
        shape = ?shape,
        leaves = shape.iter().product::<usize>(),
        "Building n-dimensional array"
    );

    Ok(build_level(shape, 0, &mut fill))
}

fn build_level<T, F>(shape: &[usize], depth: usize, fill: &mut F) -> NdArray<T>
where
    F: FnMut() -> T,
{
    let len = shape[depth];

    if depth == shape.len() - 1 {
        let elements: Vec<T> = (0..len).map(|_| fill()).collect();
        return NdArray::Vector(Vector::new(elements));
    }

    trace!(depth, len, "Building matrix level");
    let children: Vec<NdArray<T>> = (0..len)
        .map(|_| build_level(shape, depth + 1, fill))
        .collect();
    NdArray::Matrix(Matrix::from_uniform(children, shape[depth + 1..].to_vec()))
}
