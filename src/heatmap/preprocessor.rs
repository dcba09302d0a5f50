//! Conversion of raw labels and values into records for rendering.
//!
//! * [index_features] - labels to [HeatmapFeature]s
//! * [bucketize] - values to a grid of [HeatmapCell]s with bucket assignment
//! * [build_bucket_index](crate::heatmap::build_bucket_index) - reverse
//!   index of a grid

use crate::error::HeatmapError;
use crate::heatmap::settings::{DomainPolicy, ValueDomain};
use serde::{Deserialize, Serialize};

/// A labelled row or column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapFeature {
    /// Label, possibly empty
    pub name: String,
    /// Original position of the row or column
    pub index: usize,
}

/// One matrix cell with its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    /// Raw value, not clamped
    pub value: f64,
    /// Original row of this cell
    pub row_index: usize,
    /// Original column of this cell
    pub column_index: usize,
    /// Bucket in `0..bucket_count`
    pub bucket: usize,
}

/// Assigns each label its position as index. Empty labels are kept.
pub fn index_features<S: AsRef<str>>(labels: &[S]) -> Vec<HeatmapFeature> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| HeatmapFeature {
            name: label.as_ref().to_string(),
            index,
        })
        .collect()
}

/// Checks that all rows have equally many values and returns
/// `(num_rows, num_columns)`.
///
/// An empty matrix has zero columns.
///
/// # Errors
/// [HeatmapError::IrregularMatrix] for the first row of deviating length.
pub fn matrix_shape(matrix: &[Vec<f64>]) -> Result<(usize, usize), HeatmapError> {
    let num_columns = matrix.first().map_or(0, |row| row.len());
    if let Some((row, values)) = matrix
        .iter()
        .enumerate()
        .find(|(_, values)| values.len() != num_columns)
    {
        return Err(HeatmapError::IrregularMatrix {
            row,
            expected: num_columns,
            found: values.len(),
        });
    }

    Ok((matrix.len(), num_columns))
}

/// Quantizes every matrix value into one of `bucket_count` buckets over `domain`.
///
/// The bucket is `floor((value - min) / (max - min) * bucket_count)`, clamped
/// to `0..bucket_count`, so `max` itself lands in the last bucket.
/// Values outside the domain are clamped into it under [DomainPolicy::Clamp];
/// the cell still records the raw value.
///
/// # Errors
/// * [HeatmapError::InvalidDomain] / [HeatmapError::InvalidBucketCount] for bad parameters
/// * [HeatmapError::IrregularMatrix] if rows have unequal lengths
/// * [HeatmapError::OutOfDomain] for NaN and infinite values, and for values outside the domain under
///   [DomainPolicy::Strict]
///
/// # Example
/// ```
/// use heatorder::heatmap::{DomainPolicy, ValueDomain, bucketize};
///
/// let grid = bucketize(&[vec![0.5, 1.0], vec![-0.1, 0.0]], ValueDomain::default(), 50, DomainPolicy::Clamp)?;
/// assert_eq!(grid[0][0].bucket, 25);
/// assert_eq!(grid[0][1].bucket, 49);
/// assert_eq!(grid[1][0].bucket, 0);
/// # Ok::<(), heatorder::HeatmapError>(())
/// ```
pub fn bucketize(
    matrix: &[Vec<f64>],
    domain: ValueDomain,
    bucket_count: usize,
    policy: DomainPolicy,
) -> Result<Vec<Vec<HeatmapCell>>, HeatmapError> {
    domain.validate()?;
    if bucket_count == 0 {
        return Err(HeatmapError::InvalidBucketCount);
    }
    matrix_shape(matrix)?;

    let mut grid = Vec::with_capacity(matrix.len());
    for (row_index, values) in matrix.iter().enumerate() {
        let mut cells = Vec::with_capacity(values.len());
        for (column_index, &value) in values.iter().enumerate() {
            let in_domain = domain.contains(value);
            if !value.is_finite() || (!in_domain && policy == DomainPolicy::Strict) {
                return Err(HeatmapError::OutOfDomain {
                    value,
                    row: row_index,
                    column: column_index,
                    min: domain.min,
                    max: domain.max,
                });
            }

            cells.push(HeatmapCell {
                value,
                row_index,
                column_index,
                bucket: bucket_of(value.clamp(domain.min, domain.max), domain, bucket_count),
            });
        }
        grid.push(cells);
    }

    Ok(grid)
}

/// Bucket of an in-domain value.
fn bucket_of(value: f64, domain: ValueDomain, bucket_count: usize) -> usize {
    let scaled = ((value - domain.min) / domain.width() * bucket_count as f64).floor();
    if scaled <= 0.0 {
        0
    } else {
        (scaled as usize).min(bucket_count - 1)
    }
}
