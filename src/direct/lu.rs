//! LU decomposition
//!
//! Doolittle-form LU factorization with partial pivoting for dense square
//! systems. The factorization produces a unit-lower-triangular `L`, an
//! upper-triangular `U`, and the row permutation `P` such that
//! `L · U ≈ P · A`.

use crate::direct::substitution::{backward_sub, forward_sub};
use crate::error::{LinAlgError, Result};
use crate::matrix::{ColVector, Matrix};
use crate::traits::RealField;
use ndarray::Array2;

/// LU factorization result
///
/// Stores the triangular factors and the row permutation so that one
/// factorization can solve many right-hand sides.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: RealField> {
    /// Unit lower-triangular factor
    pub l: Matrix<T>,
    /// Upper-triangular factor
    pub u: Matrix<T>,
    /// Row permutation: `perm[i]` is the source row of `A` at row `i` of `P·A`
    pub perm: Vec<usize>,
}

impl<T: RealField> LuDecomposition<T> {
    /// Applies the row permutation `P` to a right-hand side.
    ///
    /// Fails with [`LinAlgError::DimensionMismatch`] if `b` has the wrong length.
    pub fn permute_rhs(&self, b: &ColVector<T>) -> Result<ColVector<T>> {
        if b.len() != self.perm.len() {
            return Err(LinAlgError::DimensionMismatch {
                n: self.perm.len(),
                got: b.len(),
            });
        }
        Ok(ColVector::from_vec(
            self.perm.iter().map(|&src| b[src]).collect(),
        ))
    }

    /// Solves `A · x = b` using the pre-computed factorization.
    pub fn solve(&self, b: &ColVector<T>) -> Result<ColVector<T>> {
        let pb = self.permute_rhs(b)?;
        let y = forward_sub(&self.l, &pb)?;
        backward_sub(&self.u, &y)
    }

    /// Returns `true` if no row swap occurred during factorization.
    pub fn is_identity_permutation(&self) -> bool {
        self.perm.iter().enumerate().all(|(i, &src)| i == src)
    }
}

/// Computes the LU factorization of `a` with partial pivoting.
///
/// Elimination proceeds column by column over a working copy; `a` is not
/// mutated. At each pivot column the largest-magnitude candidate on or
/// below the diagonal is swapped into the pivot position, ties broken by
/// lowest row index, so the factorization is deterministic.
///
/// Fails with [`LinAlgError::Singular`] when every candidate pivot in a
/// column is below the scalar's singular threshold.
pub fn lu_decomp<T: RealField>(a: &Matrix<T>) -> Result<LuDecomposition<T>> {
    let n = a.rows();
    let mut work = a.as_array().clone();
    let mut perm: Vec<usize> = (0..n).collect();

    for k in 0..n {
        // Scan for the largest-magnitude pivot candidate in column k.
        let mut max_val = work[[k, k]].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = work[[i, k]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val < T::singular_threshold() {
            return Err(LinAlgError::Singular { column: k });
        }

        if max_row != k {
            log::trace!("lu_decomp: swapping rows {} and {} for column {}", k, max_row, k);
            for j in 0..n {
                work.swap([k, j], [max_row, j]);
            }
            perm.swap(k, max_row);
        }

        // Record multipliers in the strictly-lower part, eliminate below.
        let pivot = work[[k, k]];
        for i in (k + 1)..n {
            let mult = work[[i, k]] / pivot;
            work[[i, k]] = mult;
            for j in (k + 1)..n {
                let update = mult * work[[k, j]];
                work[[i, j]] -= update;
            }
        }
    }

    // Split the packed working matrix into the two factors.
    let mut l = Array2::zeros((n, n));
    let mut u = Array2::zeros((n, n));
    for i in 0..n {
        l[[i, i]] = T::one();
        for j in 0..i {
            l[[i, j]] = work[[i, j]];
        }
        for j in i..n {
            u[[i, j]] = work[[i, j]];
        }
    }

    Ok(LuDecomposition {
        l: Matrix::from_square(l),
        u: Matrix::from_square(u),
        perm,
    })
}
