//! Triangular substitution
//!
//! Forward and backward substitution over lower- and upper-triangular
//! systems. Both routines accept a general non-zero diagonal (unit or
//! not), so they work for the unit-lower L produced by [`lu_decomp`] as
//! well as arbitrary triangular matrices supplied by callers.
//!
//! [`lu_decomp`]: crate::direct::lu_decomp

use crate::error::{LinAlgError, Result};
use crate::matrix::{ColVector, Matrix};
use crate::traits::RealField;

/// Solves `L · y = b` for `y`, where `L` is lower-triangular.
///
/// Unknowns are resolved in increasing index order, each step using the
/// previously solved values. Entries above the diagonal are ignored.
///
/// Fails with [`LinAlgError::DimensionMismatch`] if `b` has the wrong
/// length and [`LinAlgError::Singular`] if a diagonal entry is zero.
pub fn forward_sub<T: RealField>(l: &Matrix<T>, b: &ColVector<T>) -> Result<ColVector<T>> {
    let n = l.rows();
    if b.len() != n {
        return Err(LinAlgError::DimensionMismatch { n, got: b.len() });
    }

    let mut y = b.to_vec();
    for i in 0..n {
        let mut sum = y[i];
        for j in 0..i {
            sum = sum - l[(i, j)] * y[j];
        }
        let diag = l[(i, i)];
        if diag.abs() < T::singular_threshold() {
            return Err(LinAlgError::Singular { column: i });
        }
        y[i] = sum / diag;
    }

    Ok(ColVector::from_vec(y))
}

/// Solves `U · x = y` for `x`, where `U` is upper-triangular.
///
/// Unknowns are resolved in decreasing index order. Entries below the
/// diagonal are ignored.
///
/// Fails with [`LinAlgError::DimensionMismatch`] if `y` has the wrong
/// length and [`LinAlgError::Singular`] if a diagonal entry is zero.
pub fn backward_sub<T: RealField>(u: &Matrix<T>, y: &ColVector<T>) -> Result<ColVector<T>> {
    let n = u.rows();
    if y.len() != n {
        return Err(LinAlgError::DimensionMismatch { n, got: y.len() });
    }

    let mut x = y.to_vec();
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum = sum - u[(i, j)] * x[j];
        }
        let diag = u[(i, i)];
        if diag.abs() < T::singular_threshold() {
            return Err(LinAlgError::Singular { column: i });
        }
        x[i] = sum / diag;
    }

    Ok(ColVector::from_vec(x))
}
