//! Dense linear system solvers for isogeometric analysis
//!
//! This crate is the solver core of the isogeometric-analysis tooling: it
//! solves small dense square systems `A · x = b` via LU decomposition with
//! partial pivoting and triangular substitution. The surrounding curve and
//! plotting layers consume the computed coefficient vectors as plain
//! sequences of reals and never depend on the internals here.
//!
//! # Features
//!
//! - **Value types**: [`Matrix`] and [`ColVector`], immutable and
//!   shape-validated at construction
//! - **Direct solver**: [`lu_decomp`] with partial pivoting, plus
//!   standalone [`forward_sub`] / [`backward_sub`]
//! - **Facade**: [`linsolve`] for the common factor-and-solve path
//! - **Generic scalars**: works with `f64` and `f32` via [`RealField`]
//!
//! # Example
//!
//! ```
//! use iga_solvers::{linsolve, ColVector, Matrix};
//!
//! let a = Matrix::from_rows(&[vec![1.0, 1.0], vec![-3.0, 1.0]])?;
//! let b = ColVector::from_slice(&[6.0, 2.0]);
//!
//! let x = linsolve(&a, &b)?;
//! assert!(x.approx_eq(&ColVector::from_slice(&[1.0, 5.0])));
//! # Ok::<(), iga_solvers::LinAlgError>(())
//! ```

pub mod direct;
pub mod error;
pub mod linsystem;
pub mod matrix;
pub mod traits;

// Re-export the public API at the crate root.
pub use direct::{backward_sub, forward_sub, lu_decomp, LuDecomposition};
pub use error::{LinAlgError, Result};
pub use linsystem::linsolve;
pub use matrix::{ColVector, Matrix};
pub use traits::RealField;
