//! UPGMA (average-linkage) agglomerative clustering.

use crate::cluster::Clusterer;
use crate::cluster::distance_matrix::DistanceMatrix;
use crate::error::HeatmapError;
use crate::metric::{DistanceMetric, Euclidean};
use crate::model::{ClusterElement, Dendrogram, NodeIndex};
use tracing::{debug, trace};

/// A cluster in the working set
#[derive(Debug, Clone, Copy)]
struct Slot {
    /// Dendrogram node representing this cluster
    node: NodeIndex,
    /// Number of leaves
    weight: usize,
}

// =#========================================================================#=
// UPGMA CLUSTERER
// =#========================================================================#=
/// Agglomerative clustering with weighted average linkage (UPGMA).
///
/// Starts with one cluster per element and repeatedly merges the two closest
/// clusters. After merging clusters `i` and `j`, the distance to any other
/// cluster `k` becomes the size-weighted average
/// `(w_i·d(i,k) + w_j·d(j,k)) / (w_i + w_j)`.
///
/// # Determinism
/// - Clusters live in slots ordered like the input elements; a merged cluster
///   takes the lower slot of its two parts.
/// - Among equally close pairs, the one with the smallest first slot, then the
///   smallest second slot, is merged.
/// - The earlier created cluster becomes the left child.
///
/// # Heights
/// A merge at linkage distance `d` creates a node of height `d / 2`, the
/// distance from the node to each of its leaves in the resulting ultrametric
/// tree.
///
/// # Complexity
/// O(n²) memory for the distance matrix and O(n³) time.
///
/// # Example
/// ```
/// use heatorder::cluster::{Clusterer, UpgmaClusterer};
/// use heatorder::metric::Euclidean;
/// use heatorder::model::ClusterElement;
///
/// let elements = vec![
///     ClusterElement::new(vec![0.0, 0.0], 0),
///     ClusterElement::new(vec![5.0, 5.0], 1),
///     ClusterElement::new(vec![0.0, 1.0], 2),
/// ];
/// let tree = UpgmaClusterer::new(Euclidean).cluster(elements)?;
///
/// assert_eq!(tree.num_leaves(), 3);
/// assert_eq!(tree.leaf_order(), vec![1, 0, 2]);
/// # Ok::<(), heatorder::HeatmapError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct UpgmaClusterer<M = Euclidean> {
    metric: M,
}

impl<M: DistanceMetric> UpgmaClusterer<M> {
    /// Creates a clusterer using the given metric on element values.
    pub fn new(metric: M) -> Self {
        UpgmaClusterer { metric }
    }

    /// Returns the metric of this clusterer.
    pub fn metric(&self) -> &M {
        &self.metric
    }
}

impl<M: DistanceMetric> Clusterer for UpgmaClusterer<M> {
    fn cluster(&self, elements: Vec<ClusterElement>) -> Result<Dendrogram, HeatmapError> {
        let dimension = validate_elements(&elements)?;
        let num_elements = elements.len();
        debug!(num_elements, dimension, "UPGMA clustering");

        let mut distances = DistanceMatrix::from_elements(&elements, &self.metric)?;

        let mut tree = Dendrogram::new(num_elements);
        let mut slots: Vec<Option<Slot>> = elements
            .into_iter()
            .map(|element| {
                Some(Slot {
                    node: tree.add_leaf(element),
                    weight: 1,
                })
            })
            .collect();
        debug_assert_eq!(distances.size(), slots.len());

        let mut root = 0;
        for _ in 1..num_elements {
            let (i, j, distance) = closest_pair(&distances, &slots);
            let (slot_i, slot_j) = match (slots[i], slots[j]) {
                (Some(slot_i), Some(slot_j)) => (slot_i, slot_j),
                _ => unreachable!("closest pair is always active"),
            };

            // Earlier created cluster goes left
            let children = if slot_i.node < slot_j.node {
                (slot_i.node, slot_j.node)
            } else {
                (slot_j.node, slot_i.node)
            };
            let node = tree.add_internal(children, distance / 2.0);
            trace!(
                left = children.0,
                right = children.1,
                node,
                distance,
                "merged clusters"
            );

            // Weighted average linkage
            let (w_i, w_j) = (slot_i.weight as f64, slot_j.weight as f64);
            for k in 0..slots.len() {
                if k == i || k == j || slots[k].is_none() {
                    continue;
                }
                let merged = (w_i * distances.get(i, k) + w_j * distances.get(j, k)) / (w_i + w_j);
                distances.set(i, k, merged);
            }

            slots[i] = Some(Slot {
                node,
                weight: slot_i.weight + slot_j.weight,
            });
            slots[j] = None;
            root = node;
        }

        tree.set_root(root);
        debug!(height = tree.height(), "UPGMA clustering done");
        Ok(tree)
    }
}

/// Checks that there is at least one element and that all have the same
/// length, which gets returned.
fn validate_elements(elements: &[ClusterElement]) -> Result<usize, HeatmapError> {
    let first = elements.first().ok_or(HeatmapError::EmptyInput)?;
    let expected = first.len();
    match elements.iter().find(|element| element.len() != expected) {
        Some(element) => Err(HeatmapError::DimensionMismatch {
            expected,
            found: element.len(),
        }),
        None => Ok(expected),
    }
}

/// Finds the active pair `(i, j)`, `i < j`, with minimal distance.
///
/// Scans in slot order and only replaces the candidate on a strictly smaller
/// distance, so ties go to the smallest `i`, then the smallest `j`.
/// NaN distances only win if no other distance is left.
///
/// Requires at least two active slots.
fn closest_pair(distances: &DistanceMatrix, slots: &[Option<Slot>]) -> (usize, usize, f64) {
    let mut best: Option<(usize, usize, f64)> = None;
    for i in 0..slots.len() {
        if slots[i].is_none() {
            continue;
        }
        for j in (i + 1)..slots.len() {
            if slots[j].is_none() {
                continue;
            }
            let distance = distances.get(i, j);
            let better = match best {
                None => true,
                Some((_, _, best_distance)) => {
                    distance < best_distance || (best_distance.is_nan() && !distance.is_nan())
                }
            };
            if better {
                best = Some((i, j, distance));
            }
        }
    }

    match best {
        Some(pair) => pair,
        None => unreachable!("at least two clusters are active while merging"),
    }
}
