//! Cluster element module: one row or column of a matrix with its identity.

/// Identity of a [ClusterElement], typically the original row or column index.
pub type ElementId = usize;

// =#========================================================================#=
// CLUSTER ELEMENT
// =#========================================================================#=
/// A numeric vector (one row or column of a matrix) with a stable id.
///
/// # Invariants
/// - Immutable once created.
/// - `id` is unique within one clustering call.
/// - All elements passed to one clustering call have equally long `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterElement {
    values: Vec<f64>,
    id: ElementId,
}

impl ClusterElement {
    /// Creates a new element.
    ///
    /// # Arguments
    /// * `values` - The numeric vector to cluster on
    /// * `id` - Stable identity, used as output of leaf order extraction
    pub fn new(values: Vec<f64>, id: ElementId) -> Self {
        ClusterElement { values, id }
    }

    /// Returns the values of this element.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the id of this element.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if this element has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Creates one element per matrix row, with the row index as id.
///
/// Row lengths are not checked here; the clusterer rejects mixed lengths.
pub fn elements_from_rows(matrix: &[Vec<f64>]) -> Vec<ClusterElement> {
    matrix
        .iter()
        .enumerate()
        .map(|(id, row)| ClusterElement::new(row.clone(), id))
        .collect()
}

/// Creates one element per matrix column, with the column index as id.
///
/// The column count is taken from the first row. Rows too short for a column
/// are skipped, which the clusterer then reports as a dimension mismatch.
pub fn elements_from_columns(matrix: &[Vec<f64>]) -> Vec<ClusterElement> {
    let num_columns = matrix.first().map_or(0, |row| row.len());
    (0..num_columns)
        .map(|column| {
            let values = matrix.iter().filter_map(|row| row.get(column).copied()).collect();
            ClusterElement::new(values, column)
        })
        .collect()
}
