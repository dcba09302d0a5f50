//! Heatmap pipeline: preprocessing, clustering and ordering of one matrix.

use crate::cluster::{Clusterer, UpgmaClusterer};
use crate::error::HeatmapError;
use crate::heatmap::bucket_index::{BucketIndex, build_bucket_index};
use crate::heatmap::preprocessor::{HeatmapCell, HeatmapFeature, bucketize, index_features};
use crate::heatmap::settings::HeatmapSettings;
use crate::model::cluster_element::{elements_from_columns, elements_from_rows};
use crate::model::{ClusterElement, Dendrogram, Permutation};
use serde::{Deserialize, Serialize};
use tracing::debug;

// =#========================================================================#=
// CLUSTER TARGET
// =#========================================================================#=
/// Which axes of the matrix to cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterTarget {
    /// Rows and columns
    #[default]
    All,
    /// Rows only
    Rows,
    /// Columns only
    Columns,
    /// Neither; both axes get the identity order
    None,
}

impl ClusterTarget {
    /// Returns whether rows get clustered.
    pub fn includes_rows(&self) -> bool {
        matches!(self, ClusterTarget::All | ClusterTarget::Rows)
    }

    /// Returns whether columns get clustered.
    pub fn includes_columns(&self) -> bool {
        matches!(self, ClusterTarget::All | ClusterTarget::Columns)
    }
}

/// Display order of rows and columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapOrder {
    /// Entry `p` is the original row displayed at position `p`
    pub rows: Permutation,
    /// Entry `q` is the original column displayed at position `q`
    pub columns: Permutation,
}

impl HeatmapOrder {
    /// Identity order over the given number of rows and columns.
    pub fn identity(num_rows: usize, num_columns: usize) -> Self {
        HeatmapOrder {
            rows: Permutation::identity(num_rows),
            columns: Permutation::identity(num_columns),
        }
    }
}

// =#========================================================================#=
// HEATMAP
// =#========================================================================#=
/// A preprocessed matrix with labels and a current display order.
///
/// Holds everything a rendering layer needs: the cells in display order, the
/// reverse bucket index for that order, the ordered labels, and the
/// permutations (whose inverses tell where each original row or column
/// moved to).
///
/// # Example
/// ```
/// use heatorder::heatmap::{ClusterTarget, Heatmap, HeatmapSettings};
///
/// let values = vec![
///     vec![0.9, 0.1, 0.8],
///     vec![0.1, 0.9, 0.2],
///     vec![0.8, 0.2, 0.9],
/// ];
/// let mut heatmap = Heatmap::new(values, &["r0", "r1", "r2"], &["c0", "c1", "c2"], HeatmapSettings::default())?;
/// let order = heatmap.cluster(ClusterTarget::Rows)?;
///
/// // Rows 0 and 2 are similar and end up next to each other
/// let rows = order.rows.as_slice();
/// let position_0 = rows.iter().position(|&r| r == 0).unwrap();
/// let position_2 = rows.iter().position(|&r| r == 2).unwrap();
/// assert_eq!(position_0.abs_diff(position_2), 1);
/// assert!(order.columns.is_identity());
/// # Ok::<(), heatorder::HeatmapError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Heatmap {
    settings: HeatmapSettings,
    values: Vec<Vec<f64>>,
    rows: Vec<HeatmapFeature>,
    columns: Vec<HeatmapFeature>,
    /// Cells in original order
    cells: Vec<Vec<HeatmapCell>>,
    order: HeatmapOrder,
    /// Cells in display order
    ordered_cells: Vec<Vec<HeatmapCell>>,
    bucket_index: BucketIndex,
    row_dendrogram: Option<Dendrogram>,
    column_dendrogram: Option<Dendrogram>,
}

impl Heatmap {
    /// Preprocesses a matrix and its labels, starting in original order.
    ///
    /// # Arguments
    /// * `values` - Rectangular matrix, rows × columns
    /// * `row_labels` - One label per row (may be empty strings)
    /// * `column_labels` - One label per column (may be empty strings)
    /// * `settings` - Bucketization and ordering settings
    ///
    /// # Errors
    /// * [HeatmapError::LabelCountMismatch] if label counts don't match the matrix
    /// * Any error of [bucketize]
    pub fn new<S: AsRef<str>>(
        values: Vec<Vec<f64>>,
        row_labels: &[S],
        column_labels: &[S],
        settings: HeatmapSettings,
    ) -> Result<Self, HeatmapError> {
        let cells = bucketize(
            &values,
            settings.domain,
            settings.bucket_count,
            settings.domain_policy,
        )?;

        let num_rows = values.len();
        let num_columns = values.first().map_or(column_labels.len(), |row| row.len());
        check_label_count("row", num_rows, row_labels.len())?;
        check_label_count("column", num_columns, column_labels.len())?;

        let order = HeatmapOrder::identity(num_rows, num_columns);
        let bucket_index = build_bucket_index(&cells);
        debug!(
            num_rows,
            num_columns,
            num_buckets = bucket_index.num_buckets(),
            "Heatmap preprocessed"
        );

        Ok(Heatmap {
            settings,
            values,
            rows: index_features(row_labels),
            columns: index_features(column_labels),
            ordered_cells: cells.clone(),
            cells,
            order,
            bucket_index,
            row_dendrogram: None,
            column_dendrogram: None,
        })
    }

    /// Clusters the selected axes and switches to the resulting order.
    ///
    /// Each selected axis is clustered with UPGMA under the configured metric
    /// and then refined with the configured reorderer. Axes not selected, and
    /// axes of a matrix without any row or column, get the identity order.
    /// On error, the heatmap is left unchanged.
    pub fn cluster(&mut self, target: ClusterTarget) -> Result<&HeatmapOrder, HeatmapError> {
        let num_rows = self.rows.len();
        let num_columns = self.columns.len();

        let (row_dendrogram, rows) = if target.includes_rows() && num_rows > 0 {
            self.cluster_axis(elements_from_rows(&self.values))?
        } else {
            (None, Permutation::identity(num_rows))
        };
        // Columns of a matrix without rows have no values to compare
        let cluster_columns = target.includes_columns() && num_rows > 0 && num_columns > 0;
        let (column_dendrogram, columns) = if cluster_columns {
            self.cluster_axis(elements_from_columns(&self.values))?
        } else {
            (None, Permutation::identity(num_columns))
        };

        debug!(?target, "Heatmap clustered");
        self.row_dendrogram = row_dendrogram;
        self.column_dendrogram = column_dendrogram;
        self.apply_order(HeatmapOrder { rows, columns });
        Ok(&self.order)
    }

    fn cluster_axis(
        &self,
        elements: Vec<ClusterElement>,
    ) -> Result<(Option<Dendrogram>, Permutation), HeatmapError> {
        let metric = self.settings.metric;
        let tree = UpgmaClusterer::new(metric).cluster(elements)?;
        let tree = self.settings.reordering.build(metric).reorder(tree)?;
        let order = Permutation::from_order(tree.leaf_order())?;
        Ok((Some(tree), order))
    }

    /// Switches to a given order, e.g. one computed elsewhere.
    ///
    /// Dendrograms of a previous clustering are dropped.
    ///
    /// # Errors
    /// [HeatmapError::DimensionMismatch] if a permutation has the wrong length.
    pub fn set_order(&mut self, order: HeatmapOrder) -> Result<(), HeatmapError> {
        for (expected, found) in [
            (self.rows.len(), order.rows.len()),
            (self.columns.len(), order.columns.len()),
        ] {
            if expected != found {
                return Err(HeatmapError::DimensionMismatch { expected, found });
            }
        }

        self.row_dendrogram = None;
        self.column_dendrogram = None;
        self.apply_order(order);
        Ok(())
    }

    /// Returns to the original order.
    pub fn reset(&mut self) {
        self.row_dendrogram = None;
        self.column_dendrogram = None;
        self.apply_order(HeatmapOrder::identity(self.rows.len(), self.columns.len()));
    }

    /// Rebuilds the ordered grid and its bucket index; lengths must match.
    fn apply_order(&mut self, order: HeatmapOrder) {
        self.ordered_cells = order
            .rows
            .as_slice()
            .iter()
            .map(|&row| {
                order
                    .columns
                    .as_slice()
                    .iter()
                    .map(|&column| self.cells[row][column])
                    .collect()
            })
            .collect();
        self.bucket_index = build_bucket_index(&self.ordered_cells);
        self.order = order;
    }
}

// ============================================================================
// Getters / Accessors (pub)
// ============================================================================
impl Heatmap {
    /// Returns the settings.
    pub fn settings(&self) -> &HeatmapSettings {
        &self.settings
    }

    /// Returns the raw matrix in original order.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Returns the number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns the rows in original order.
    pub fn rows(&self) -> &[HeatmapFeature] {
        &self.rows
    }

    /// Returns the columns in original order.
    pub fn columns(&self) -> &[HeatmapFeature] {
        &self.columns
    }

    /// Returns the rows in display order.
    pub fn ordered_rows(&self) -> Vec<&HeatmapFeature> {
        self.order.rows.as_slice().iter().map(|&i| &self.rows[i]).collect()
    }

    /// Returns the columns in display order.
    pub fn ordered_columns(&self) -> Vec<&HeatmapFeature> {
        self.order.columns.as_slice().iter().map(|&i| &self.columns[i]).collect()
    }

    /// Returns the cells in original order.
    pub fn cells(&self) -> &[Vec<HeatmapCell>] {
        &self.cells
    }

    /// Returns the cells in display order.
    pub fn ordered_grid(&self) -> &[Vec<HeatmapCell>] {
        &self.ordered_cells
    }

    /// Returns the bucket index of the grid in display order.
    pub fn bucket_index(&self) -> &BucketIndex {
        &self.bucket_index
    }

    /// Returns the current display order.
    pub fn order(&self) -> &HeatmapOrder {
        &self.order
    }

    /// Returns the dendrogram of the last row clustering, if any.
    pub fn row_dendrogram(&self) -> Option<&Dendrogram> {
        self.row_dendrogram.as_ref()
    }

    /// Returns the dendrogram of the last column clustering, if any.
    pub fn column_dendrogram(&self) -> Option<&Dendrogram> {
        self.column_dendrogram.as_ref()
    }
}

fn check_label_count(axis: &'static str, expected: usize, found: usize) -> Result<(), HeatmapError> {
    if expected != found {
        return Err(HeatmapError::LabelCountMismatch {
            axis,
            expected,
            found,
        });
    }
    Ok(())
}
