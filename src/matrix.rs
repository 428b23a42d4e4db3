//! Dense matrix and column vector value types
//!
//! [`Matrix`] is a square n×n array of reals and [`ColVector`] a length-n
//! column vector, both backed by `ndarray` storage. They are immutable
//! value objects: construction validates the shape, solver routines take
//! references and return new values, and nothing aliases across calls.
//!
//! Equality comes in two flavors: the derived exact `PartialEq` (adequate
//! for integer-valued fixtures) and the tolerant comparison exposed through
//! the `approx` traits and [`Matrix::approx_eq`] / [`ColVector::approx_eq`],
//! which callers should prefer once LU rounding is involved.

use crate::error::{LinAlgError, Result};
use crate::traits::RealField;
use approx::{AbsDiffEq, RelativeEq};
use ndarray::{Array1, Array2};
use std::ops::Index;

/// Square dense matrix of real values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: RealField> {
    data: Array2<T>,
}

/// Column vector of real values.
#[derive(Debug, Clone, PartialEq)]
pub struct ColVector<T: RealField> {
    data: Array1<T>,
}

/// Entrywise tolerant comparison: exact, then absolute, then relative.
#[inline]
fn entry_relative_eq<T: RealField>(a: T, b: T, epsilon: T, max_relative: T) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if diff <= epsilon {
        return true;
    }
    let largest = a.abs().max(b.abs());
    diff <= largest * max_relative
}

impl<T: RealField> Matrix<T> {
    /// Constructs a square matrix from a rectangular sequence of rows.
    ///
    /// Fails with [`LinAlgError::JaggedRows`] if rows have unequal lengths
    /// and [`LinAlgError::NotSquare`] if the row count differs from the
    /// row length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let n = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LinAlgError::JaggedRows {
                    row: i,
                    expected: width,
                    got: row.len(),
                });
            }
        }
        if width != n {
            return Err(LinAlgError::NotSquare { rows: n, cols: width });
        }
        let data = Array2::from_shape_fn((n, n), |(i, j)| rows[i][j]);
        Ok(Self { data })
    }

    /// Constructs a matrix from an existing `ndarray` array.
    ///
    /// Fails with [`LinAlgError::NotSquare`] for non-square input.
    pub fn from_array(data: Array2<T>) -> Result<Self> {
        if data.nrows() != data.ncols() {
            return Err(LinAlgError::NotSquare {
                rows: data.nrows(),
                cols: data.ncols(),
            });
        }
        Ok(Self { data })
    }

    /// Internal constructor for arrays already known to be square.
    pub(crate) fn from_square(data: Array2<T>) -> Self {
        debug_assert_eq!(data.nrows(), data.ncols());
        Self { data }
    }

    /// The n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        Self {
            data: Array2::eye(n),
        }
    }

    /// The n×n zero matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            data: Array2::zeros((n, n)),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns. Equals [`rows`](Self::rows) since the matrix is square.
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// Fails with [`LinAlgError::IndexOutOfBounds`] outside `[0, n)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let n = self.rows();
        if row >= n || col >= n {
            return Err(LinAlgError::IndexOutOfBounds { row, col, n });
        }
        Ok(self.data[[row, col]])
    }

    /// Borrows the underlying storage.
    pub fn as_array(&self) -> &Array2<T> {
        &self.data
    }

    /// Matrix-vector product `A · x`.
    ///
    /// Fails with [`LinAlgError::DimensionMismatch`] if `x` has the wrong length.
    pub fn matvec(&self, x: &ColVector<T>) -> Result<ColVector<T>> {
        let n = self.rows();
        if x.len() != n {
            return Err(LinAlgError::DimensionMismatch { n, got: x.len() });
        }
        Ok(ColVector {
            data: self.data.dot(&x.data),
        })
    }

    /// Matrix-matrix product `A · B`.
    ///
    /// Fails with [`LinAlgError::DimensionMismatch`] if dimensions differ.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        let n = self.rows();
        if other.rows() != n {
            return Err(LinAlgError::DimensionMismatch { n, got: other.rows() });
        }
        Ok(Self {
            data: self.data.dot(&other.data),
        })
    }

    /// Tolerant equality using the scalar's default epsilon.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.relative_eq(other, T::default_epsilon(), T::default_epsilon())
    }
}

impl<T: RealField> ColVector<T> {
    /// Constructs a vector by copying a slice.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: Array1::from_vec(values.to_vec()),
        }
    }

    /// Constructs a vector taking ownership of `values`.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            data: Array1::from_vec(values),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the entry at `index`.
    ///
    /// Fails with [`LinAlgError::VectorIndexOutOfBounds`] outside `[0, n)`.
    pub fn get(&self, index: usize) -> Result<T> {
        if index >= self.len() {
            return Err(LinAlgError::VectorIndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(self.data[index])
    }

    /// Sequence-of-reals view for collaborators.
    pub fn as_slice(&self) -> &[T] {
        self.data
            .as_slice()
            .expect("column vectors are stored contiguously")
    }

    /// Copies the entries into a plain `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Borrows the underlying storage.
    pub fn as_array(&self) -> &Array1<T> {
        &self.data
    }

    /// Tolerant equality using the scalar's default epsilon.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.relative_eq(other, T::default_epsilon(), T::default_epsilon())
    }
}

impl<T: RealField> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[[row, col]]
    }
}

impl<T: RealField> Index<usize> for ColVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: RealField> AbsDiffEq for Matrix<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.rows() == other.rows()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= epsilon)
    }
}

impl<T: RealField> RelativeEq for Matrix<T> {
    fn default_max_relative() -> T {
        T::default_epsilon()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.rows() == other.rows()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| entry_relative_eq(a, b, epsilon, max_relative))
    }
}

impl<T: RealField> AbsDiffEq for ColVector<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= epsilon)
    }
}

impl<T: RealField> RelativeEq for ColVector<T> {
    fn default_max_relative() -> T {
        T::default_epsilon()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| entry_relative_eq(a, b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_rows_and_get() {
        let m = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert_relative_eq!(m.get(0, 0).unwrap(), 1.0);
        assert_relative_eq!(m.get(0, 1).unwrap(), 2.0);
        assert_relative_eq!(m.get(1, 0).unwrap(), 3.0);
        assert_relative_eq!(m.get(1, 1).unwrap(), 4.0);
    }

    #[test]
    fn test_from_rows_jagged() {
        let err = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            LinAlgError::JaggedRows {
                row: 1,
                expected: 2,
                got: 1
            }
        );
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_from_rows_not_square() {
        let err =
            Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap_err();
        assert_eq!(err, LinAlgError::NotSquare { rows: 3, cols: 2 });
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0, 4.0]]).unwrap();
        let err = m.get(2, 0).unwrap_err();
        assert!(err.is_index_error());

        let v = ColVector::from_slice(&[1.0_f64, 2.0]);
        assert!(v.get(2).unwrap_err().is_index_error());
        assert_relative_eq!(v.get(1).unwrap(), 2.0);
    }

    #[test]
    fn test_identity_and_zeros() {
        let eye = Matrix::<f64>::identity(3);
        let zero = Matrix::<f64>::zeros(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(eye[(i, j)], expected);
                assert_relative_eq!(zero[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn test_matvec() {
        let m = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0, 4.0]]).unwrap();
        let x = ColVector::from_slice(&[1.0_f64, 1.0]);
        let y = m.matvec(&x).unwrap();
        assert_relative_eq!(y[0], 3.0);
        assert_relative_eq!(y[1], 7.0);

        let too_long = ColVector::from_slice(&[1.0_f64, 1.0, 1.0]);
        assert!(m.matvec(&too_long).unwrap_err().is_dimension_error());
    }

    #[test]
    fn test_matmul_identity() {
        let m = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0, 4.0]]).unwrap();
        let eye = Matrix::identity(2);
        let product = m.matmul(&eye).unwrap();
        assert_eq!(product, m);
    }

    #[test]
    fn test_exact_equality() {
        let a = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0, 4.0]]).unwrap();
        let c = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0, 5.0]]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_tolerant_equality() {
        let a = ColVector::from_slice(&[1.0_f64, 5.0]);
        let b = ColVector::from_slice(&[1.0 + 1e-12_f64, 5.0 - 1e-12]);
        let c = ColVector::from_slice(&[1.1_f64, 5.0]);
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&c));

        // Length mismatch is never equal, tolerantly or otherwise.
        let short = ColVector::from_slice(&[1.0_f64]);
        assert!(!a.approx_eq(&short));
    }

    #[test]
    fn test_collaborator_view() {
        let v = ColVector::from_vec(vec![6.0_f64, 2.0]);
        assert_eq!(v.as_slice(), &[6.0, 2.0]);
        assert_eq!(v.to_vec(), vec![6.0, 2.0]);
        assert_eq!(v.iter().count(), 2);
        assert!(!v.is_empty());
    }
}
