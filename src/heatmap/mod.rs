//! Heatmap preprocessing and ordering.
//!
//! This module turns a raw matrix with labels into what a rendering layer
//! consumes: bucketized cells in display order, a reverse index from bucket
//! to cell positions, and row/column permutations.
//!
//! # Quick API
//! * [index_features] - labels to [HeatmapFeature]s
//! * [bucketize] - values to a grid of [HeatmapCell]s
//! * [build_bucket_index] - grid to [BucketIndex]
//!
//! # Full API
//! [Heatmap] runs the whole pipeline, configured via [HeatmapSettings]:
//! * [`Heatmap::new`] - preprocess matrix and labels
//! * [`Heatmap::cluster`] - cluster rows and/or columns ([ClusterTarget])
//!   and switch to the resulting [HeatmapOrder]
//! * [`Heatmap::reset`] - back to original order
//!
//! The bucket index is rebuilt from scratch every time the order changes.

mod bucket_index;
mod pipeline;
mod preprocessor;
mod settings;

pub use bucket_index::{BucketIndex, GridPosition, build_bucket_index};
pub use pipeline::{ClusterTarget, Heatmap, HeatmapOrder};
pub use preprocessor::{HeatmapCell, HeatmapFeature, bucketize, index_features, matrix_shape};
pub use settings::{DEFAULT_BUCKET_COUNT, DomainPolicy, HeatmapSettings, ValueDomain};
