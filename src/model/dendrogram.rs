//! Dendrogram module: the merge history of agglomerative clustering.
//!
//! Provides:
//! * [Dendrogram] - Binary tree using the arena pattern over [TreeNode]s
//! * [NodeIndex] as type used to index nodes in a dendrogram
//! * [extract_order] to obtain the leaf order as a list of element ids

use crate::model::cluster_element::{ClusterElement, ElementId};
use crate::model::tree_node::TreeNode;
use std::collections::HashSet;

/// Float comparison tolerance
const EPSILON: f64 = 1e-9;

/// Index of a node in a dendrogram (arena).
pub type NodeIndex = usize;

/// *During construction only*, index for unset root.
const NO_ROOT_SET_INDEX: NodeIndex = usize::MAX;

// =$========================================================================$=
// DENDROGRAM
// =$========================================================================$=
/// A binary clustering tree represented using the arena pattern on [TreeNode].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex].
/// No node holds a reference to another node, only indices, so the whole tree
/// is owned by this struct and can be handed around by value.
///
/// # Structure
/// - Leaves wrap the original [ClusterElement]s; internal nodes carry the
///   merge height.
/// - When built by a [Clusterer](crate::cluster::Clusterer), indices `0..n`
///   are the leaves in input order and `n..2n-1` are the internal nodes in
///   merge order. Hence children always have smaller indices than parents.
/// - The leaves below a node, read left to right, are the leaves of the left
///   child followed by the leaves of the right child. This is the visual order.
///
/// # Construction
/// Add leaves first, then internal nodes bottom-up, and finally set the root.
/// Test validity with [`Dendrogram::is_valid()`].
///
/// # Example
/// ```
/// use heatorder::model::{ClusterElement, Dendrogram};
///
/// let mut tree = Dendrogram::new(3);
/// let a = tree.add_leaf(ClusterElement::new(vec![0.0], 0));
/// let b = tree.add_leaf(ClusterElement::new(vec![0.2], 1));
/// let c = tree.add_leaf(ClusterElement::new(vec![1.0], 2));
/// let ab = tree.add_internal((a, b), 0.1);
/// let root = tree.add_internal((c, ab), 0.45);
/// tree.set_root(root);
///
/// assert!(tree.is_valid());
/// assert_eq!(tree.leaf_order(), vec![2, 0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Dendrogram {
    /// Number of leaves the dendrogram was created for
    num_leaves_init: usize,

    /// Nodes of this dendrogram (arena pattern)
    nodes: Vec<TreeNode>,

    /// Index of the root of this dendrogram
    root_index: NodeIndex,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl Dendrogram {
    /// Creates a new dendrogram with capacity for `num_leaves` leaves.
    ///
    /// # Arguments
    /// `num_leaves` - number of leaves, implying `2 * num_leaves - 1` nodes; must be positive
    ///
    /// # Panics
    /// Panics if `num_leaves` is zero.
    pub fn new(num_leaves: usize) -> Self {
        assert!(num_leaves > 0);
        Dendrogram {
            num_leaves_init: num_leaves,
            nodes: Vec::with_capacity(2 * num_leaves - 1),
            root_index: NO_ROOT_SET_INDEX,
        }
    }

    /// Adds a leaf, assigning a unique index, which gets returned.
    pub fn add_leaf(&mut self, element: ClusterElement) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(TreeNode::new_leaf(index, element));
        index
    }

    /// Adds an internal node merging two existing nodes, assigning a unique
    /// index, which gets returned.
    ///
    /// # Arguments
    /// * `children` - Tuple of child indices, left first
    /// * `height` - Merge height (non-negative)
    ///
    /// # Panics
    /// Panics if a child index is out of bounds.
    pub fn add_internal(&mut self, children: (NodeIndex, NodeIndex), height: f64) -> NodeIndex {
        let index = self.nodes.len();
        let num_leaves = self[children.0].num_leaves() + self[children.1].num_leaves();
        self.nodes
            .push(TreeNode::new_internal(index, children, height, num_leaves));

        self[children.0].set_parent(index);
        self[children.1].set_parent(index);

        index
    }

    /// Marks the given node as root.
    pub fn set_root(&mut self, index: NodeIndex) {
        self.root_index = index;
    }

    /// Returns whether root of dendrogram has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index != NO_ROOT_SET_INDEX
    }

    /// Returns a reference to the root node.
    ///
    /// # Panics
    /// Panics if the root hasn't been set yet.
    pub fn root(&self) -> &TreeNode {
        &self[self.root_index]
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> NodeIndex {
        self.root_index
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &TreeNode {
        &self[index]
    }

    /// Returns the number of leaves the dendrogram was created for.
    pub fn num_leaves_init(&self) -> usize {
        self.num_leaves_init
    }

    /// Returns the number of leaves in this dendrogram.
    pub fn num_leaves(&self) -> usize {
        self.nodes.iter().filter(|&n| n.is_leaf()).count()
    }

    /// Returns the number of internal nodes in this dendrogram.
    pub fn num_internal(&self) -> usize {
        self.nodes.iter().filter(|&n| n.is_internal()).count()
    }

    /// Returns the number of nodes in this dendrogram.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the height of the root, `0` for a single leaf.
    ///
    /// # Panics
    /// Panics if the root hasn't been set yet.
    pub fn height(&self) -> f64 {
        self.root().height()
    }

    /// Swaps left and right child of the given node, which reverses the
    /// order of the leaves below it. No-op on leaves.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn swap_children(&mut self, index: NodeIndex) {
        self.nodes[index].swap_children();
    }

    /// Returns the leftmost leaf below (or at) the given node.
    pub fn leftmost_leaf(&self, index: NodeIndex) -> &ClusterElement {
        self.outermost_leaf(index, |(left, _)| left)
    }

    /// Returns the rightmost leaf below (or at) the given node.
    pub fn rightmost_leaf(&self, index: NodeIndex) -> &ClusterElement {
        self.outermost_leaf(index, |(_, right)| right)
    }

    fn outermost_leaf(
        &self,
        index: NodeIndex,
        side: impl Fn((NodeIndex, NodeIndex)) -> NodeIndex,
    ) -> &ClusterElement {
        let mut current = &self[index];
        loop {
            match current {
                TreeNode::Leaf { element, .. } => return element,
                TreeNode::Internal { children, .. } => current = &self[side(*children)],
            }
        }
    }

    /// Returns an iterator over the leaves below the given node, left to right.
    pub fn leaves_of(&self, index: NodeIndex) -> impl Iterator<Item = &ClusterElement> {
        PreOrderIter::starting_at(self, index).filter_map(|node| node.element())
    }

    /// Returns an iterator over all leaves, left to right.
    pub fn leaves(&self) -> impl Iterator<Item = &ClusterElement> {
        self.leaves_of(self.root_index)
    }

    /// Returns the ids of all leaves, left to right.
    ///
    /// This is the permutation to apply to the clustered rows or columns.
    pub fn leaf_order(&self) -> Vec<ElementId> {
        self.leaves().map(|element| element.id()).collect()
    }

    /// Checks that each internal node is at least as high as its children.
    pub fn has_monotone_heights(&self) -> bool {
        self.nodes.iter().all(|node| match node.children() {
            Some((left, right)) => {
                let height = node.height();
                height + EPSILON >= self[left].height() && height + EPSILON >= self[right].height()
            }
            None => true,
        })
    }

    /// Validates the dendrogram structure and all index references.
    ///
    /// Checks:
    /// - Root index is valid and root has no parent
    /// - All node indices match their position in the arena
    /// - All child indices are valid, smaller than the parent, and point back
    /// - All non-root nodes have a parent that includes them as child
    /// - `n` leaves and `n - 1` internal nodes, with unique element ids
    /// - Leaf counts of internal nodes add up
    ///
    /// # Returns
    /// `true` if dendrogram is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if self.root_index == NO_ROOT_SET_INDEX || self.root_index >= self.nodes.len() {
            return false;
        }

        if self.nodes[self.root_index].has_parent() {
            return false;
        }

        let mut ids = HashSet::with_capacity(self.num_leaves_init);
        for (index, node) in self.nodes.iter().enumerate() {
            if node.index() != index {
                return false;
            }

            match node {
                TreeNode::Leaf { element, .. } => {
                    // Element ids must be unique
                    if !ids.insert(element.id()) {
                        return false;
                    }
                }
                TreeNode::Internal {
                    children: (left, right),
                    num_leaves,
                    ..
                } => {
                    if *left >= index || *right >= index || left == right {
                        return false;
                    }
                    if self.nodes[*left].parent() != Some(index)
                        || self.nodes[*right].parent() != Some(index)
                    {
                        return false;
                    }
                    if *num_leaves != self.nodes[*left].num_leaves() + self.nodes[*right].num_leaves() {
                        return false;
                    }
                }
            }

            if index != self.root_index {
                match node.parent() {
                    None => return false,
                    Some(parent) => match self.nodes.get(parent).and_then(|p| p.children()) {
                        Some((left, right)) if left == index || right == index => {}
                        _ => return false,
                    },
                }
            }
        }

        // n leaves, n - 1 internal nodes
        ids.len() == self.num_leaves_init
            && self.nodes.len() == 2 * self.num_leaves_init - 1
            && self.root().num_leaves() == self.num_leaves_init
    }
}

impl std::ops::Index<NodeIndex> for Dendrogram {
    type Output = TreeNode;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

impl std::ops::IndexMut<NodeIndex> for Dendrogram {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}

/// Returns the ids of the leaves of `tree` in depth-first, left-to-right order.
///
/// Calling it twice on the same dendrogram yields the same sequence.
pub fn extract_order(tree: &Dendrogram) -> Vec<ElementId> {
    tree.leaf_order()
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl Dendrogram {
    /// Returns an iterator over the dendrogram in post-order (children before parents).
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }

    /// Returns an iterator over the dendrogram in pre-order (parents before children).
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::starting_at(self, self.root_index)
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// Stack-based, so chain-like dendrograms of any depth can be traversed.
pub struct PostOrderIter<'a> {
    tree: &'a Dendrogram,
    stack: Vec<(NodeIndex, bool)>, // (index, children_visited)
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a Dendrogram) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push((tree.root_index, false));
        }
        PostOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let node = &self.tree[index];

            if children_visited || node.is_leaf() {
                return Some(node);
            }

            self.stack.push((index, true));
            // Push right first, so left is processed first
            if let Some((left, right)) = node.children() {
                self.stack.push((right, false));
                self.stack.push((left, false));
            }
        }
        None
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// Leaves are visited left to right.
pub struct PreOrderIter<'a> {
    tree: &'a Dendrogram,
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn starting_at(tree: &'a Dendrogram, start: NodeIndex) -> Self {
        let mut stack = Vec::new();
        if start != NO_ROOT_SET_INDEX {
            stack.push(start);
        }
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];

        if let Some((left, right)) = node.children() {
            self.stack.push(right);
            self.stack.push(left);
        }

        Some(node)
    }
}
