//! Leaf-order refinement of dendrograms.
//!
//! A dendrogram fixes which leaves are siblings but not which sibling comes
//! first; each internal node can be flipped without changing the clustering.
//! A [Reorderer] uses this freedom to place similar leaves next to each other.
//!
//! Provided implementations:
//! * [MoloReorderer] - greedy bottom-up flipping based on boundary leaves
//! * [IdentityReorderer] - keeps the order produced by the clusterer
//!
//! [ReorderKind] selects one of them at runtime.

mod molo;

pub use molo::MoloReorderer;

use crate::error::HeatmapError;
use crate::metric::DistanceMetric;
use crate::model::Dendrogram;
use serde::{Deserialize, Serialize};

// =#========================================================================#=
// REORDERER (trait)
// =#========================================================================T=
/// Heuristic (or algorithm) to reorder the leaves of a dendrogram.
///
/// # Implementing this trait
/// Implementations take ownership of the dendrogram and may swap the children
/// of any internal node, but must return a dendrogram over the identical set
/// of leaves. A dendrogram consisting of a single leaf is returned unchanged.
pub trait Reorderer {
    /// Reorders the given dendrogram.
    fn reorder(&self, tree: Dendrogram) -> Result<Dendrogram, HeatmapError>;
}

impl<R: Reorderer + ?Sized> Reorderer for Box<R> {
    fn reorder(&self, tree: Dendrogram) -> Result<Dendrogram, HeatmapError> {
        (**self).reorder(tree)
    }
}

/// Reorderer that keeps the leaf order as built by the clusterer.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityReorderer;

impl Reorderer for IdentityReorderer {
    fn reorder(&self, tree: Dendrogram) -> Result<Dendrogram, HeatmapError> {
        Ok(tree)
    }
}

// =#========================================================================#=
// REORDER KIND
// =#========================================================================#=
/// Runtime selection of a provided [Reorderer].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderKind {
    /// No reordering ([IdentityReorderer])
    None,
    /// [MoloReorderer]
    #[default]
    Molo,
}

impl ReorderKind {
    /// Creates the selected reorderer, using `metric` where one is needed.
    pub fn build<'a, M: DistanceMetric + 'a>(self, metric: M) -> Box<dyn Reorderer + 'a> {
        match self {
            ReorderKind::None => Box::new(IdentityReorderer),
            ReorderKind::Molo => Box::new(MoloReorderer::new(metric)),
        }
    }
}
