//! Linear system facade
//!
//! [`linsolve`] is the entry point most callers want: factor once, solve
//! once. Callers solving the same system for many right-hand sides should
//! use [`lu_decomp`] directly and reuse the returned factorization.
//!
//! [`lu_decomp`]: crate::direct::lu_decomp

use crate::direct::{backward_sub, forward_sub, lu_decomp};
use crate::error::{LinAlgError, Result};
use crate::matrix::{ColVector, Matrix};
use crate::traits::RealField;

/// Solves the dense linear system `A · x = b`.
///
/// Factors `A` with [`lu_decomp`], applies the row permutation to `b`,
/// then runs forward and backward substitution. The result satisfies
/// `A · x ≈ b` within the scalar's default tolerance. `A` being square is
/// guaranteed by [`Matrix`] construction; only `b`'s length is checked
/// here.
///
/// Fails with [`LinAlgError::DimensionMismatch`] if `b`'s length differs
/// from the matrix dimension; [`LinAlgError::Singular`] from the sub-steps
/// propagates unchanged.
///
/// [`lu_decomp`]: crate::direct::lu_decomp
pub fn linsolve<T: RealField>(a: &Matrix<T>, b: &ColVector<T>) -> Result<ColVector<T>> {
    let n = a.rows();
    if b.len() != n {
        return Err(LinAlgError::DimensionMismatch { n, got: b.len() });
    }

    let factors = lu_decomp(a)?;
    let pb = factors.permute_rhs(b)?;
    let y = forward_sub(&factors.l, &pb)?;
    let x = backward_sub(&factors.u, &y)?;

    log::debug!("linsolve: solved {}x{} system", n, n);
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_system() {
        let a = Matrix::from_rows(&[vec![1.0_f64, 1.0], vec![-3.0, 1.0]]).unwrap();
        let b = ColVector::from_slice(&[6.0_f64, 2.0]);

        let x = linsolve(&a, &b).unwrap();
        assert!(x.approx_eq(&ColVector::from_slice(&[1.0_f64, 5.0])));
    }

    #[test]
    fn test_identity_system() {
        let a = Matrix::<f64>::identity(2);
        let b = ColVector::from_slice(&[6.0_f64, 2.0]);

        let x = linsolve(&a, &b).unwrap();
        assert_eq!(x, b);
    }

    #[test]
    fn test_diagonal_system() {
        let a = Matrix::from_rows(&[vec![2.0_f64, 0.0], vec![0.0, 2.0]]).unwrap();
        let b = ColVector::from_slice(&[4.0_f64, 6.0]);

        let x = linsolve(&a, &b).unwrap();
        assert_relative_eq!(x[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rhs_length_mismatch() {
        let a = Matrix::from_rows(&[vec![1.0_f64, 1.0], vec![-3.0, 1.0]]).unwrap();
        let b = ColVector::from_slice(&[6.0_f64, 2.0, 1.0]);

        let err = linsolve(&a, &b).unwrap_err();
        assert_eq!(err, LinAlgError::DimensionMismatch { n: 2, got: 3 });
    }

    #[test]
    fn test_singular_propagates() {
        let a = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![2.0, 4.0]]).unwrap();
        let b = ColVector::from_slice(&[1.0_f64, 2.0]);

        assert!(linsolve(&a, &b).unwrap_err().is_singular());
    }
}
