//! Heatorder is a library to order the rows and columns of a heatmap so that
//! similar rows and columns end up next to each other.
//!
//! This crate offers the clustering and ordering engine behind a heatmap
//! visualization, plus the preprocessing a renderer needs.
//! Core functionality provided:
//! - Clustering: UPGMA (average-linkage) agglomerative clustering of rows or
//!   columns into a [Dendrogram], see [crate::cluster].
//! - Metrics: Euclidean (default), Manhattan, cosine and correlation distance,
//!   or your own [DistanceMetric](metric::DistanceMetric) implementation.
//! - Reordering: refinement of the leaf order of a dendrogram by flipping
//!   subtrees, see [crate::reorder].
//! - Leaf order: [extract_order] returns the ids of the leaves left to right,
//!   which is the permutation to apply to the rows or columns.
//! - Preprocessing: values to bucketized cells and a reverse index from
//!   bucket to cell positions, see [crate::heatmap].
//! - Export: dendrograms as Newick strings, see [crate::newick].
//!
//! Limitations:
//! - The whole matrix has to fit into memory
//! - Clustering takes O(n²) memory and O(n³) time in the number of rows
//!   (or columns)
//! - No rendering; colours are assigned to buckets by the caller
//!
//! # Usage patterns
//! 1. The quick functions below cluster a matrix with default settings.
//! 2. Configure a [Heatmap](heatmap::Heatmap) via
//!    [HeatmapSettings](heatmap::HeatmapSettings) for the full pipeline, or
//!    combine [UpgmaClusterer](cluster::UpgmaClusterer) and a
//!    [Reorderer](reorder::Reorderer) yourself.
//!
//! ## Example Default Configuration
//! ```
//! use heatorder::cluster_rows;
//!
//! let matrix = vec![
//!     vec![1.0, 1.0],
//!     vec![1.0, 1.2],
//!     vec![2.5, 0.75],
//!     vec![3.0, 2.0],
//!     vec![3.0, 2.5],
//! ];
//! let order = cluster_rows(&matrix)?;
//! assert_eq!(order, vec![3, 4, 2, 0, 1]);
//! # Ok::<(), heatorder::HeatmapError>(())
//! ```
//!
//! ## Example Pipeline Configuration
//! ```
//! use heatorder::heatmap::{ClusterTarget, DomainPolicy, Heatmap, HeatmapSettings};
//! use heatorder::metric::MetricKind;
//!
//! let settings = HeatmapSettings::default()
//!     .with_bucket_count(10)
//!     .with_domain_policy(DomainPolicy::Strict)
//!     .with_metric(MetricKind::Manhattan);
//!
//! let values = vec![vec![0.1, 0.9], vec![0.8, 0.2], vec![0.15, 0.85]];
//! let mut heatmap = Heatmap::new(values, &["a", "b", "c"], &["x", "y"], settings)?;
//! heatmap.cluster(ClusterTarget::All)?;
//!
//! for (bucket, positions) in heatmap.bucket_index().iter() {
//!     println!("bucket {bucket}: {} cells", positions.len());
//! }
//! # Ok::<(), heatorder::HeatmapError>(())
//! ```

pub mod cluster;
pub mod error;
pub mod heatmap;
pub mod metric;
pub mod model;
pub mod newick;
pub mod reorder;

pub use crate::error::HeatmapError;
pub use crate::model::{Dendrogram, extract_order};

use crate::cluster::{Clusterer, UpgmaClusterer};
use crate::heatmap::{DEFAULT_BUCKET_COUNT, DomainPolicy, HeatmapCell, ValueDomain};
use crate::metric::Euclidean;
use crate::model::ClusterElement;
use crate::model::cluster_element::{elements_from_columns, elements_from_rows};
use crate::reorder::{MoloReorderer, Reorderer};

// ============================================================================
// Quick clustering API
// ============================================================================
/// Clusters the rows of a matrix with default settings (Euclidean distance,
/// UPGMA, Molo reordering) and returns the row order.
///
/// # Errors
/// * [HeatmapError::EmptyInput] if the matrix has no rows
/// * [HeatmapError::IrregularMatrix] if rows have unequal lengths
pub fn cluster_rows(matrix: &[Vec<f64>]) -> Result<Vec<usize>, HeatmapError> {
    heatmap::matrix_shape(matrix)?;
    cluster_default(elements_from_rows(matrix))
}

/// Clusters the columns of a matrix with default settings (Euclidean
/// distance, UPGMA, Molo reordering) and returns the column order.
///
/// # Errors
/// * [HeatmapError::EmptyInput] if the matrix has no columns
/// * [HeatmapError::IrregularMatrix] if rows have unequal lengths
pub fn cluster_columns(matrix: &[Vec<f64>]) -> Result<Vec<usize>, HeatmapError> {
    heatmap::matrix_shape(matrix)?;
    cluster_default(elements_from_columns(matrix))
}

fn cluster_default(elements: Vec<ClusterElement>) -> Result<Vec<usize>, HeatmapError> {
    let tree = UpgmaClusterer::new(Euclidean).cluster(elements)?;
    let tree = MoloReorderer::new(Euclidean).reorder(tree)?;
    Ok(extract_order(&tree))
}

// ============================================================================
// Quick preprocessing API
// ============================================================================
/// Bucketizes a matrix over domain `[0, 1]` into 50 buckets, clamping values
/// outside the domain.
///
/// See [`heatmap::bucketize`] for full documentation.
pub fn bucketize_default(matrix: &[Vec<f64>]) -> Result<Vec<Vec<HeatmapCell>>, HeatmapError> {
    heatmap::bucketize(
        matrix,
        ValueDomain::default(),
        DEFAULT_BUCKET_COUNT,
        DomainPolicy::Clamp,
    )
}
