//! Hierarchical clustering of matrix rows or columns.
//!
//! A [Clusterer] consumes [ClusterElement]s and produces a [Dendrogram]
//! recording the merge history. Rows and columns are clustered
//! independently and never share a dendrogram.
//!
//! Provided implementation:
//! * [UpgmaClusterer] - average linkage, generic over the
//!   [DistanceMetric](crate::metric::DistanceMetric)

mod distance_matrix;
mod upgma;

pub use upgma::UpgmaClusterer;

use crate::error::HeatmapError;
use crate::model::{ClusterElement, Dendrogram};

// =#========================================================================#=
// CLUSTERER (trait)
// =#========================================================================T=
/// Builds a dendrogram over a set of elements.
pub trait Clusterer {
    /// Clusters `elements` into a single dendrogram.
    ///
    /// # Errors
    /// * [HeatmapError::EmptyInput] if `elements` is empty
    /// * [HeatmapError::DimensionMismatch] if element lengths differ
    ///
    /// A single element results in a dendrogram with a single leaf.
    fn cluster(&self, elements: Vec<ClusterElement>) -> Result<Dendrogram, HeatmapError>;
}
