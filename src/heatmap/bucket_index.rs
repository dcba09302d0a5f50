//! Reverse index from bucket to grid positions.

use crate::heatmap::preprocessor::HeatmapCell;
use std::collections::BTreeMap;
use std::fmt;

/// Position `(row, column)` in a displayed grid.
pub type GridPosition = (usize, usize);

// =#========================================================================#=
// BUCKET INDEX
// =#========================================================================#=
/// Maps each bucket to the grid positions of the cells falling into it.
///
/// Renderers draw all cells of one bucket (one colour) in a batch. Positions
/// within a bucket are in row-major scan order. Buckets without any cell are
/// absent.
///
/// The index describes one particular row/column order of the grid; whenever
/// that order changes, build a new index with [build_bucket_index].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketIndex {
    buckets: BTreeMap<usize, Vec<GridPosition>>,
}

impl BucketIndex {
    /// Returns the positions in `bucket`, or `None` if the bucket is empty.
    pub fn get(&self, bucket: usize) -> Option<&[GridPosition]> {
        self.buckets.get(&bucket).map(|positions| positions.as_slice())
    }

    /// Returns an iterator over non-empty buckets and their positions, by ascending bucket.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[GridPosition])> {
        self.buckets
            .iter()
            .map(|(&bucket, positions)| (bucket, positions.as_slice()))
    }

    /// Returns the number of non-empty buckets.
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of indexed positions, i.e. the number of cells.
    pub fn num_positions(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Returns `true` if no cell is indexed.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl fmt::Display for BucketIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "BucketIndex ({} buckets):", self.buckets.len())?;
        for (bucket, positions) in &self.buckets {
            writeln!(f, "  [{}] {} cells", bucket, positions.len())?;
        }
        Ok(())
    }
}

/// Builds the reverse bucket index of `grid` in a single row-major pass.
///
/// Positions refer to the grid as given, i.e. to display positions if the
/// grid has been reordered.
pub fn build_bucket_index(grid: &[Vec<HeatmapCell>]) -> BucketIndex {
    let mut buckets: BTreeMap<usize, Vec<GridPosition>> = BTreeMap::new();
    for (row, cells) in grid.iter().enumerate() {
        for (column, cell) in cells.iter().enumerate() {
            buckets.entry(cell.bucket).or_default().push((row, column));
        }
    }

    BucketIndex { buckets }
}
