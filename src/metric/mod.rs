//! Dissimilarity measures between numeric vectors.
//!
//! The clusterer and the reorderer are generic over [DistanceMetric], so any
//! measure can be plugged in without touching them. Provided are:
//! * [Euclidean] - `sqrt(Σ (aᵢ-bᵢ)²)`, the default
//! * [Manhattan] - `Σ |aᵢ-bᵢ|`
//! * [Cosine] - one minus cosine similarity
//! * [Correlation] - one minus Pearson correlation
//!
//! [MetricKind] selects one of them at runtime, e.g. from
//! [HeatmapSettings](crate::heatmap::HeatmapSettings).

mod angular;
mod minkowski;

pub use angular::{Correlation, Cosine};
pub use minkowski::{Euclidean, Manhattan};

use crate::error::HeatmapError;
use serde::{Deserialize, Serialize};

// =#========================================================================#=
// DISTANCE METRIC (trait)
// =#========================================================================T=
/// Dissimilarity between two equally long numeric vectors.
///
/// # Implementing this trait
/// Implementations must be symmetric (`distance(a, b) == distance(b, a)`)
/// and non-negative, and must fail with [HeatmapError::DimensionMismatch]
/// if the vectors differ in length (see [check_dimensions]).
pub trait DistanceMetric {
    /// Returns the distance between `a` and `b`.
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, HeatmapError>;
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, HeatmapError> {
        (**self).distance(a, b)
    }
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for Box<M> {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, HeatmapError> {
        (**self).distance(a, b)
    }
}

/// Fails with [HeatmapError::DimensionMismatch] unless `a` and `b` are equally long.
pub fn check_dimensions(a: &[f64], b: &[f64]) -> Result<(), HeatmapError> {
    if a.len() != b.len() {
        return Err(HeatmapError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(())
}

// =#========================================================================#=
// METRIC KIND
// =#========================================================================#=
/// Runtime selection of a provided [DistanceMetric].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    #[default]
    Euclidean,
    Manhattan,
    Cosine,
    Correlation,
}

impl DistanceMetric for MetricKind {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, HeatmapError> {
        match self {
            MetricKind::Euclidean => Euclidean.distance(a, b),
            MetricKind::Manhattan => Manhattan.distance(a, b),
            MetricKind::Cosine => Cosine.distance(a, b),
            MetricKind::Correlation => Correlation.distance(a, b),
        }
    }
}
