//! Newick format writing for dendrograms

use crate::model::{Dendrogram, NodeIndex};
use crate::newick::escape_label;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Extra buffer in Newick string length/capacity estimate
const BUFFER_CHARS: usize = 10;

/// Style for serializing a dendrogram to Newick format,
/// controlling how leaves are represented in the output string.
#[derive(Debug, Clone, Copy)]
pub enum NewickStyle {
    /// Use the label at the leaf's element id, escaped if necessary
    Label,
    /// Use 0-based element ids (0, 1, 2, ...)
    ZeroIndexed,
    /// Use 1-based element ids (1, 2, 3, ...)
    OneIndexed,
}

/// Writes given dendrograms to a file in Newick format, one per line.
///
/// # Arguments
/// * `file` - The file to write to
/// * `trees` - Dendrograms to write
/// * `style` - The [NewickStyle] used for leaves
/// * `labels` - Labels indexed by element id, required for [NewickStyle::Label]
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_newick_file(
    file: File,
    trees: &[Dendrogram],
    style: &NewickStyle,
    labels: Option<&[String]>,
) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    for tree in trees {
        writer.write_all(to_newick(style, tree, labels).as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Returns the Newick representation of a dendrogram with closing semicolon.
///
/// Branch lengths are height differences between a node and its parent, so
/// the result is ultrametric whenever the dendrogram is. The root has no
/// branch length.
///
/// # Arguments
/// * `style` - The [NewickStyle] used for leaves
/// * `tree` - The dendrogram to convert
/// * `labels` - Labels indexed by element id, required for [NewickStyle::Label];
///   ids without a label fall back to the id itself
///
/// # Returns
/// A Newick format string terminated with `;`. Returns an empty string if
/// [NewickStyle::Label] is used without providing labels, or if the
/// dendrogram has no root yet.
///
/// # Example
/// ```
/// use heatorder::model::{ClusterElement, Dendrogram};
/// use heatorder::newick::{NewickStyle, to_newick};
///
/// let mut tree = Dendrogram::new(2);
/// let a = tree.add_leaf(ClusterElement::new(vec![0.0], 0));
/// let b = tree.add_leaf(ClusterElement::new(vec![2.0], 1));
/// let root = tree.add_internal((a, b), 1.0);
/// tree.set_root(root);
///
/// let labels = vec!["Kea".to_string(), "Kaka".to_string()];
/// assert_eq!(to_newick(&NewickStyle::Label, &tree, Some(labels.as_slice())), "(Kea:1,Kaka:1);");
/// assert_eq!(to_newick(&NewickStyle::OneIndexed, &tree, None), "(1:1,2:1);");
/// ```
pub fn to_newick(style: &NewickStyle, tree: &Dendrogram, labels: Option<&[String]>) -> String {
    // Abort right away if arguments don't match
    if (matches!(style, NewickStyle::Label) && labels.is_none()) || !tree.is_root_set() {
        return String::new();
    }

    fn push_leaf(newick: &mut String, id: usize, style: &NewickStyle, labels: Option<&[String]>) {
        match style {
            NewickStyle::Label => match labels.and_then(|labels| labels.get(id)) {
                Some(label) => newick.push_str(&escape_label(label)),
                None => newick.push_str(&id.to_string()),
            },
            NewickStyle::ZeroIndexed => newick.push_str(&id.to_string()),
            NewickStyle::OneIndexed => newick.push_str(&(id + 1).to_string()),
        }
    }

    fn push_branch_length(newick: &mut String, tree: &Dendrogram, index: NodeIndex) {
        if let Some(parent) = tree[index].parent() {
            let length = (tree[parent].height() - tree[index].height()).max(0.0);
            newick.push(':');
            newick.push_str(&length.to_string());
        }
    }

    // Explicit stack instead of recursion; `Close` finishes an internal node
    enum Step {
        Visit(NodeIndex),
        Comma,
        Close(NodeIndex),
    }

    let mut newick = String::with_capacity(estimate_newick_len(tree));
    let mut stack = vec![Step::Visit(tree.root_index())];
    while let Some(step) = stack.pop() {
        match step {
            Step::Visit(index) => match tree[index].children() {
                None => {
                    if let Some(element) = tree[index].element() {
                        push_leaf(&mut newick, element.id(), style, labels);
                    }
                    push_branch_length(&mut newick, tree, index);
                }
                Some((left, right)) => {
                    newick.push('(');
                    stack.push(Step::Close(index));
                    stack.push(Step::Visit(right));
                    stack.push(Step::Comma);
                    stack.push(Step::Visit(left));
                }
            },
            Step::Comma => newick.push(','),
            Step::Close(index) => {
                newick.push(')');
                push_branch_length(&mut newick, tree, index);
            }
        }
    }
    newick.push(';');

    newick
}

/// Estimates the length of the Newick string of a dendrogram.
fn estimate_newick_len(tree: &Dendrogram) -> usize {
    // Per node: label or "(,)" plus ":" and a branch length of ~20 chars
    const NODE_CHARS: usize = 24;
    tree.num_nodes() * NODE_CHARS + BUFFER_CHARS
}
