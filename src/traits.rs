//! Scalar abstraction for the solver routines
//!
//! This module defines [`RealField`], the trait bounding the scalar types
//! the solvers operate on. It abstracts over `f64` (the default for
//! isogeometric problems) and `f32` (for memory-constrained use), and
//! carries the per-type numerical constants the rest of the crate agrees
//! on: the default comparison epsilon and the singular-pivot threshold.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for real scalar types usable in the dense solvers.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for most applications)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Debug + Send + Sync + 'static
{
    /// Default relative tolerance for entrywise comparisons.
    fn default_epsilon() -> Self;

    /// Magnitude below which a pivot or diagonal entry is treated as zero.
    fn singular_threshold() -> Self;
}

impl RealField for f64 {
    #[inline]
    fn default_epsilon() -> Self {
        1e-9
    }

    #[inline]
    fn singular_threshold() -> Self {
        1e-30
    }
}

impl RealField for f32 {
    #[inline]
    fn default_epsilon() -> Self {
        1e-5
    }

    #[inline]
    fn singular_threshold() -> Self {
        1e-20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_constants() {
        assert!(f64::default_epsilon() > 0.0);
        assert!(f64::singular_threshold() > 0.0);
        assert!(f64::singular_threshold() < f64::default_epsilon());
    }

    #[test]
    fn test_f32_constants() {
        assert!(f32::default_epsilon() > 0.0);
        assert!(f32::singular_threshold() < f32::default_epsilon());
    }
}
