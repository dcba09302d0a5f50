//! Error type shared by clustering, reordering and preprocessing.

use thiserror::Error;

// =#========================================================================#=
// HEATMAP ERROR
// =#========================================================================#=
/// Errors reported by this crate.
///
/// All errors are local and synchronous. No operation returns a partial
/// result alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeatmapError {
    /// Clustering was called without any element.
    #[error("Cannot cluster an empty set of elements")]
    EmptyInput,

    /// Two vectors (or cluster elements) have different lengths.
    #[error("Dimension mismatch: expected vector of length {expected}, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Matrix rows have unequal lengths.
    #[error("Irregular matrix: row {row} has {found} values, expected {expected}")]
    IrregularMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A value lies outside the declared bucketization domain (or is NaN).
    #[error("Value {value} at ({row}, {column}) is outside of domain [{min}, {max}]")]
    OutOfDomain {
        value: f64,
        row: usize,
        column: usize,
        min: f64,
        max: f64,
    },

    /// Domain bounds are not finite or not strictly increasing.
    #[error("Invalid domain [{min}, {max}] - bounds must be finite with min < max")]
    InvalidDomain { min: f64, max: f64 },

    /// Bucketization requested with zero buckets.
    #[error("Bucket count must be positive")]
    InvalidBucketCount,

    /// Number of labels does not match the number of rows or columns.
    #[error("Expected {expected} {axis} labels, got {found}")]
    LabelCountMismatch {
        axis: &'static str,
        expected: usize,
        found: usize,
    },

    /// An order is not a bijection over `0..n`.
    #[error("Invalid permutation - {0}")]
    InvalidPermutation(String),
}
