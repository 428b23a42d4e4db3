//! Error types for the dense solver core.
//!
//! All fallible operations in this crate return [`LinAlgError`] through the
//! crate-wide [`Result`] alias. Errors surface immediately to the caller of
//! the failing operation; no routine recovers locally or masks errors from
//! its sub-steps.

use thiserror::Error;

/// Errors that can occur while constructing or solving dense linear systems.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinAlgError {
    /// Matrix construction received rows of unequal lengths.
    #[error("jagged rows: row {row} has {got} entries, expected {expected}")]
    JaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        got: usize,
    },

    /// Matrix construction received a non-square shape.
    #[error("matrix must be square: got {rows} rows of length {cols}")]
    NotSquare {
        /// Number of rows supplied
        rows: usize,
        /// Length of each row
        cols: usize,
    },

    /// A vector's length does not match the matrix dimension.
    #[error("dimension mismatch: matrix is {n}x{n} but vector has {got} entries")]
    DimensionMismatch {
        /// Matrix dimension
        n: usize,
        /// Vector length supplied
        got: usize,
    },

    /// Element access outside the matrix bounds.
    #[error("index ({row}, {col}) out of bounds for {n}x{n} matrix")]
    IndexOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Matrix dimension
        n: usize,
    },

    /// Element access outside the vector bounds.
    #[error("index {index} out of bounds for vector of length {len}")]
    VectorIndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Vector length
        len: usize,
    },

    /// No usable pivot or diagonal entry: the system has no unique solution.
    #[error("no usable pivot in column {column}: matrix is singular or nearly singular")]
    Singular {
        /// Column in which every candidate pivot was below threshold
        column: usize,
    },
}

/// A specialized `Result` type for dense solver operations.
pub type Result<T> = std::result::Result<T, LinAlgError>;

impl LinAlgError {
    /// Returns `true` if this is a dimension error.
    ///
    /// This includes `JaggedRows`, `NotSquare`, and `DimensionMismatch`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            LinAlgError::JaggedRows { .. }
                | LinAlgError::NotSquare { .. }
                | LinAlgError::DimensionMismatch { .. }
        )
    }

    /// Returns `true` if this is an out-of-range element access.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            LinAlgError::IndexOutOfBounds { .. } | LinAlgError::VectorIndexOutOfBounds { .. }
        )
    }

    /// Returns `true` if decomposition or substitution hit a singular matrix.
    pub fn is_singular(&self) -> bool {
        matches!(self, LinAlgError::Singular { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LinAlgError::JaggedRows {
            row: 2,
            expected: 3,
            got: 1,
        };
        assert_eq!(
            err.to_string(),
            "jagged rows: row 2 has 1 entries, expected 3"
        );

        let err = LinAlgError::Singular { column: 0 };
        assert_eq!(
            err.to_string(),
            "no usable pivot in column 0: matrix is singular or nearly singular"
        );
    }

    #[test]
    fn test_is_dimension_error() {
        let dim_err = LinAlgError::DimensionMismatch { n: 2, got: 3 };
        let singular = LinAlgError::Singular { column: 1 };

        assert!(dim_err.is_dimension_error());
        assert!(!singular.is_dimension_error());
    }

    #[test]
    fn test_is_index_error() {
        let idx_err = LinAlgError::IndexOutOfBounds { row: 5, col: 0, n: 2 };
        let vec_err = LinAlgError::VectorIndexOutOfBounds { index: 9, len: 2 };

        assert!(idx_err.is_index_error());
        assert!(vec_err.is_index_error());
        assert!(!idx_err.is_singular());
    }
}
