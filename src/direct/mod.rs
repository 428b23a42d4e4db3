//! Direct solvers for dense linear systems
//!
//! This module provides the direct (non-iterative) solver routines:
//! - [`lu_decomp`]: LU decomposition with partial pivoting
//! - [`forward_sub`] / [`backward_sub`]: triangular substitution

mod lu;
mod substitution;

pub use lu::{lu_decomp, LuDecomposition};
pub use substitution::{backward_sub, forward_sub};
