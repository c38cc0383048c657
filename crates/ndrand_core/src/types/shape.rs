//! Fixed-length nested containers.
//!
//! - [`Vector`]: one-dimensional ordered sequence of leaves
//! - [`Matrix`]: ordered sequence of uniformly shaped children
//! - [`NdArray`]: either of the above, used when nesting depth is parametric
//!
//! Lengths never change after construction. A [`Matrix`] always knows the
//! shape of its children, including when it has none, so [`NdArray::shape`]
//! reports every dimension a zero-length level was built with.

use std::fmt;
use std::ops::Index;

use super::error::{Result, TensorError};

/// One-dimensional ordered container of leaves.
///
/// # Examples
/// ```
/// use ndrand_core::types::Vector;
///
/// let v = Vector::new(vec![1.0, 2.0, 3.0]);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v[1], 2.0);
/// assert_eq!(format!("{:.1}", v), "[1.0, 2.0, 3.0]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    elements: Vec<T>,
}

impl<T> Vector<T> {
    /// Creates a vector owning `elements` in the given order.
    pub fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Borrows the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the vector, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

/// Ordered container of uniformly shaped children.
///
/// Children are [`Vector`]s when one dimension remains below this level and
/// nested [`Matrix`]es otherwise. [`Matrix::new`] checks that every child has
/// the same shape; the builder in [`crate::ndarray`] produces uniform
/// children by construction and skips that check.
///
/// # Examples
/// ```
/// use ndrand_core::types::{Matrix, NdArray, Vector};
///
/// let m = Matrix::new(vec![
///     NdArray::from(Vector::new(vec![1, 2, 3])),
///     NdArray::from(Vector::new(vec![4, 5, 6])),
/// ])
/// .unwrap();
/// assert_eq!(m.shape(), vec![2, 3]);
///
/// let ragged = Matrix::new(vec![
///     NdArray::from(Vector::new(vec![1, 2, 3])),
///     NdArray::from(Vector::new(vec![4])),
/// ]);
/// assert!(ragged.is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    children: Vec<NdArray<T>>,
    inner_shape: Vec<usize>,
}

impl<T> Matrix<T> {
    /// Creates a matrix from children that must all share one shape.
    ///
    /// # Errors
    ///
    /// - [`TensorError::EmptyChildren`] if `children` is empty (use
    ///   [`Matrix::empty`] to build a zero-length level)
    /// - [`TensorError::InconsistentShape`] if any child's shape differs from
    ///   the first child's
    pub fn new(children: Vec<NdArray<T>>) -> Result<Self> {
        let expected = children
            .first()
            .map(NdArray::shape)
            .ok_or(TensorError::EmptyChildren)?;

        for (index, child) in children.iter().enumerate().skip(1) {
            let found = child.shape();
            if found != expected {
                return Err(TensorError::InconsistentShape {
                    index,
                    expected,
                    found,
                });
            }
        }

        Ok(Self {
            children,
            inner_shape: expected,
        })
    }

    /// Creates a zero-length matrix whose (absent) children have `inner_shape`.
    ///
    /// # Errors
    ///
    /// [`TensorError::EmptyShape`] if `inner_shape` is empty, since every
    /// child is at least a vector.
    pub fn empty(inner_shape: Vec<usize>) -> Result<Self> {
        if inner_shape.is_empty() {
            return Err(TensorError::EmptyShape);
        }
        Ok(Self {
            children: Vec::new(),
            inner_shape,
        })
    }

    /// Assembles a matrix whose children are uniform by construction.
    pub(crate) fn from_uniform(children: Vec<NdArray<T>>, inner_shape: Vec<usize>) -> Self {
        debug_assert!(children.iter().all(|c| c.shape() == inner_shape));
        Self {
            children,
            inner_shape,
        }
    }

    /// Number of children.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the matrix has no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child at `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&NdArray<T>> {
        self.children.get(index)
    }

    /// Iterates over the children in order.
    pub fn iter(&self) -> std::slice::Iter<'_, NdArray<T>> {
        self.children.iter()
    }

    /// Shape of every child.
    pub fn inner_shape(&self) -> &[usize] {
        &self.inner_shape
    }

    /// Full shape: this level's length followed by the children's shape.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = Vec::with_capacity(self.inner_shape.len() + 1);
        shape.push(self.children.len());
        shape.extend_from_slice(&self.inner_shape);
        shape
    }

    /// Consumes the matrix, returning its children.
    pub fn into_children(self) -> Vec<NdArray<T>> {
        self.children
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a NdArray<T>;
    type IntoIter = std::slice::Iter<'a, NdArray<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = NdArray<T>;

    fn index(&self, index: usize) -> &NdArray<T> {
        &self.children[index]
    }
}

/// A [`Vector`] or a [`Matrix`]: an n-dimensional container with `n >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub enum NdArray<T> {
    /// Innermost level holding leaves directly.
    Vector(Vector<T>),
    /// Outer level holding uniformly shaped children.
    Matrix(Matrix<T>),
}

impl<T> NdArray<T> {
    /// Length at every nesting level, outermost first.
    pub fn shape(&self) -> Vec<usize> {
        match self {
            NdArray::Vector(v) => vec![v.len()],
            NdArray::Matrix(m) => m.shape(),
        }
    }

    /// Nesting depth (number of dimensions).
    pub fn ndim(&self) -> usize {
        match self {
            NdArray::Vector(_) => 1,
            NdArray::Matrix(m) => m.inner_shape().len() + 1,
        }
    }

    /// Length of the outermost level.
    pub fn len(&self) -> usize {
        match self {
            NdArray::Vector(v) => v.len(),
            NdArray::Matrix(m) => m.len(),
        }
    }

    /// Returns `true` if the outermost level has length zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of leaves, the product of [`NdArray::shape`].
    pub fn leaf_count(&self) -> usize {
        self.shape().iter().product()
    }

    /// Iterates over the leaves in row-major order.
    pub fn leaves(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            NdArray::Vector(v) => Box::new(v.iter()),
            NdArray::Matrix(m) => Box::new(m.iter().flat_map(|child| child.leaves())),
        }
    }

    /// Consumes the array, returning its leaves in row-major order.
    pub fn into_leaves(self) -> Vec<T> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(self, out: &mut Vec<T>) {
        match self {
            NdArray::Vector(v) => out.extend(v.into_vec()),
            NdArray::Matrix(m) => {
                for child in m.into_children() {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Leaf at the multi-index `index`, outermost axis first.
    ///
    /// Returns `None` if `index` does not have exactly [`NdArray::ndim`]
    /// entries or any entry is out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        match (self, index) {
            (NdArray::Vector(v), [i]) => v.get(*i),
            (NdArray::Matrix(m), [i, rest @ ..]) => m.get(*i)?.get(rest),
            _ => None,
        }
    }

    /// Borrows the innermost vector, if this is one.
    pub fn as_vector(&self) -> Option<&Vector<T>> {
        match self {
            NdArray::Vector(v) => Some(v),
            NdArray::Matrix(_) => None,
        }
    }

    /// Borrows the matrix, if this is one.
    pub fn as_matrix(&self) -> Option<&Matrix<T>> {
        match self {
            NdArray::Vector(_) => None,
            NdArray::Matrix(m) => Some(m),
        }
    }
}

impl<T> From<Vector<T>> for NdArray<T> {
    fn from(v: Vector<T>) -> Self {
        NdArray::Vector(v)
    }
}

impl<T> From<Matrix<T>> for NdArray<T> {
    fn from(m: Matrix<T>) -> Self {
        NdArray::Matrix(m)
    }
}

// Display: nested brackets. Precision is forwarded to every leaf; the
// alternate flag (`{:#}`) breaks matrix rows onto separate lines.

impl<T: fmt::Display> Vector<T> {
    fn write_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Display> Matrix<T> {
    fn write_nested(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        f.write_str("[")?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                if f.alternate() {
                    write!(f, ",\n{:width$}", "", width = indent + 1)?;
                } else {
                    f.write_str(", ")?;
                }
            }
            child.write_nested(f, indent + 1)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Display> NdArray<T> {
    fn write_nested(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        match self {
            NdArray::Vector(v) => v.write_nested(f),
            NdArray::Matrix(m) => m.write_nested(f, indent),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_nested(f)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_nested(f, 0)
    }
}

impl<T: fmt::Display> fmt::Display for NdArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_nested(f, 0)
    }
}
