//! Node module for dendrogram representation.

use crate::model::cluster_element::ClusterElement;
use crate::model::dendrogram::NodeIndex;

/// During construction, nodes might not have a parent set yet.
/// The root keeps this value.
const NO_PARENT_SET: NodeIndex = usize::MAX;

// =#========================================================================#=
// TREE NODE
// =#========================================================================#=
/// Represents a node in a [Dendrogram](crate::model::Dendrogram).
///
/// A node is either:
/// - **Leaf**: Wraps one original [ClusterElement], height `0`
/// - **Internal**: Merge of two subtrees at a given height
///
/// # Invariants
/// - `index` is the position in the dendrogram arena, which equals creation order
/// - Children of an internal node have smaller indices than the node itself
/// - `height` of an internal node is at least the height of each child
/// - `num_leaves` of an internal node is the sum over its children
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Original element (no children)
    Leaf {
        /// Index of this node in the dendrogram arena
        index: NodeIndex,
        /// The wrapped row or column
        element: ClusterElement,
        /// Index of the parent node
        parent: NodeIndex,
    },
    /// Merge of two clusters
    Internal {
        /// Index of this node in the dendrogram arena
        index: NodeIndex,
        /// Indices of the left and right child nodes
        children: (NodeIndex, NodeIndex),
        /// Height at which the two children were merged
        height: f64,
        /// Number of leaves in this subtree
        num_leaves: usize,
        /// Index of the parent node
        parent: NodeIndex,
    },
}

impl TreeNode {
    /// Creates a new leaf node.
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the dendrogram (arena)
    /// * `element` - The element represented by this leaf
    pub fn new_leaf(index: NodeIndex, element: ClusterElement) -> Self {
        TreeNode::Leaf {
            index,
            element,
            parent: NO_PARENT_SET,
        }
    }

    /// Creates a new internal node.
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the dendrogram (arena)
    /// * `children` - Tuple of child indices, left first
    /// * `height` - Merge height (non-negative)
    /// * `num_leaves` - Number of leaves below this node
    pub fn new_internal(
        index: NodeIndex,
        children: (NodeIndex, NodeIndex),
        height: f64,
        num_leaves: usize,
    ) -> Self {
        TreeNode::Internal {
            index,
            children,
            height,
            num_leaves,
            parent: NO_PARENT_SET,
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        match self {
            TreeNode::Leaf { index, .. } | TreeNode::Internal { index, .. } => *index,
        }
    }

    /// Returns the merge height; `0` for leaves.
    pub fn height(&self) -> f64 {
        match self {
            TreeNode::Leaf { .. } => 0.0,
            TreeNode::Internal { height, .. } => *height,
        }
    }

    /// Returns the number of leaves in the subtree of this node.
    pub fn num_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Internal { num_leaves, .. } => *num_leaves,
        }
    }

    /// Returns the element if this is a leaf, else `None`.
    pub fn element(&self) -> Option<&ClusterElement> {
        match self {
            TreeNode::Leaf { element, .. } => Some(element),
            TreeNode::Internal { .. } => None,
        }
    }

    /// Returns the children if this is an internal node, else `None`.
    pub fn children(&self) -> Option<(NodeIndex, NodeIndex)> {
        match self {
            TreeNode::Internal { children, .. } => Some(*children),
            TreeNode::Leaf { .. } => None,
        }
    }

    /// Returns `true` if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Returns `true` if this node is an internal node.
    pub fn is_internal(&self) -> bool {
        matches!(self, TreeNode::Internal { .. })
    }

    /// Swaps left and right child. No-op on leaves.
    pub fn swap_children(&mut self) {
        if let TreeNode::Internal { children, .. } = self {
            *children = (children.1, children.0);
        }
    }

    /// Sets the parent of this node.
    pub(crate) fn set_parent(&mut self, parent: NodeIndex) {
        match self {
            TreeNode::Leaf { parent: p, .. } | TreeNode::Internal { parent: p, .. } => *p = parent,
        }
    }

    /// Returns the index of the parent, or `None` for the root
    /// (or while still under construction).
    pub fn parent(&self) -> Option<NodeIndex> {
        match self {
            TreeNode::Leaf { parent, .. } | TreeNode::Internal { parent, .. } => {
                if *parent == NO_PARENT_SET {
                    None
                } else {
                    Some(*parent)
                }
            }
        }
    }

    /// Returns `true` if this node has a parent set.
    pub fn has_parent(&self) -> bool {
        self.parent().is_some()
    }
}
