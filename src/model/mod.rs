//! Data model for clustering: elements, dendrograms and permutations.
//!
//! # Dendrogram representation
//! A [Dendrogram] uses the arena pattern to store [TreeNode]s. Each node is
//! either a `Leaf`, wrapping one [ClusterElement], or an `Internal` node,
//! merging two subtrees at some height. Nodes are referenced by [NodeIndex].
//!
//! # Leaf order
//! Reading the leaves of a dendrogram left to right (depth-first) gives the
//! order in which rows or columns are displayed. [extract_order] returns the
//! ids of those leaves, which [Permutation::from_order] turns into a
//! validated permutation.

pub mod cluster_element;
pub mod dendrogram;
pub mod permutation;
pub mod tree_node;

pub use cluster_element::ClusterElement;
pub use cluster_element::ElementId;
pub use dendrogram::Dendrogram;
pub use dendrogram::NodeIndex;
pub use dendrogram::extract_order;
pub use permutation::Permutation;
pub use tree_node::TreeNode;
