//! Greedy leaf reordering by comparing subtree boundaries.

use crate::error::HeatmapError;
use crate::metric::{DistanceMetric, Euclidean};
use crate::model::{Dendrogram, NodeIndex};
use crate::reorder::Reorderer;
use tracing::debug;

// =#========================================================================#=
// MOLO REORDERER
// =#========================================================================#=
/// Bottom-up reorderer that flips a node when that brings more similar leaves
/// together across the boundary between its two subtrees.
///
/// For every internal node, after both children have been handled, the two
/// possible boundaries are compared:
/// * kept: rightmost leaf of `left` next to leftmost leaf of `right`
/// * swapped: rightmost leaf of `right` next to leftmost leaf of `left`
///
/// The children are swapped only if the swapped boundary is strictly closer,
/// so ties keep the original orientation.
///
/// This is a local heuristic, not an optimal leaf ordering, but needs only
/// two metric evaluations per internal node.
#[derive(Debug, Clone, Default)]
pub struct MoloReorderer<M = Euclidean> {
    metric: M,
}

impl<M: DistanceMetric> MoloReorderer<M> {
    /// Creates a reorderer comparing leaves with the given metric.
    pub fn new(metric: M) -> Self {
        MoloReorderer { metric }
    }

    fn boundary_distance(
        &self,
        tree: &Dendrogram,
        left_leaf: NodeIndex,
        right_leaf: NodeIndex,
    ) -> Result<f64, HeatmapError> {
        match (tree[left_leaf].element(), tree[right_leaf].element()) {
            (Some(left), Some(right)) => self.metric.distance(left.values(), right.values()),
            _ => unreachable!("boundary nodes are leaves"),
        }
    }
}

impl<M: DistanceMetric> Reorderer for MoloReorderer<M> {
    fn reorder(&self, mut tree: Dendrogram) -> Result<Dendrogram, HeatmapError> {
        if !tree.is_root_set() || tree.root().is_leaf() {
            return Ok(tree);
        }

        let post_order: Vec<NodeIndex> = tree.post_order_iter().map(|node| node.index()).collect();

        // Outermost leaves of each processed subtree, as node indices
        let mut leftmost = vec![NodeIndex::MAX; tree.num_nodes()];
        let mut rightmost = vec![NodeIndex::MAX; tree.num_nodes()];
        let mut num_swaps = 0usize;

        for index in post_order {
            let Some((left, right)) = tree[index].children() else {
                leftmost[index] = index;
                rightmost[index] = index;
                continue;
            };

            let kept = self.boundary_distance(&tree, rightmost[left], leftmost[right])?;
            let swapped = self.boundary_distance(&tree, rightmost[right], leftmost[left])?;

            let (first, second) = if swapped < kept {
                tree.swap_children(index);
                num_swaps += 1;
                (right, left)
            } else {
                (left, right)
            };
            leftmost[index] = leftmost[first];
            rightmost[index] = rightmost[second];
        }

        debug!(num_swaps, "Molo reordering done");
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClusterElement;

    #[test]
    fn test_swaps_to_closer_boundary() {
        // ((a, b), c) with b far from c but a close to c
        let mut tree = Dendrogram::new(3);
        let a = tree.add_leaf(ClusterElement::new(vec![2.0], 0));
        let b = tree.add_leaf(ClusterElement::new(vec![0.0], 1));
        let c = tree.add_leaf(ClusterElement::new(vec![2.5], 2));
        let ab = tree.add_internal((a, b), 1.0);
        let root = tree.add_internal((ab, c), 1.5);
        tree.set_root(root);

        let tree = MoloReorderer::new(Euclidean).reorder(tree).unwrap();
        // Node (a, b) keeps its orientation: 2.0 to 0.0 either way.
        // Root: kept boundary b|c = 2.5, swapped boundary c|a = 0.5
        assert_eq!(tree.leaf_order(), vec![2, 0, 1]);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_single_leaf_unchanged() {
        let mut tree = Dendrogram::new(1);
        let leaf = tree.add_leaf(ClusterElement::new(vec![1.0], 7));
        tree.set_root(leaf);

        let tree = MoloReorderer::new(Euclidean).reorder(tree).unwrap();
        assert_eq!(tree.leaf_order(), vec![7]);
    }
}
