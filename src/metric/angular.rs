//! Shape-based metrics: cosine and correlation distance.
//!
//! Both compare the direction (or shape) of two vectors rather than their
//! magnitude and range within `[0, 2]`.

use crate::error::HeatmapError;
use crate::metric::{DistanceMetric, check_dimensions};

/// Norms below this are treated as zero
const ZERO_NORM: f64 = 1e-12;

/// Cosine distance `1 - a·b / (|a||b|)`.
///
/// Two zero vectors have distance `0`; a zero vector and a non-zero vector
/// have distance `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cosine;

impl DistanceMetric for Cosine {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, HeatmapError> {
        check_dimensions(a, b)?;
        Ok(one_minus_similarity(a.iter().copied(), b.iter().copied()))
    }
}

/// Correlation distance `1 - r`, with `r` the Pearson correlation.
///
/// Two constant vectors have distance `0`; a constant vector and a
/// non-constant vector have distance `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Correlation;

impl DistanceMetric for Correlation {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, HeatmapError> {
        check_dimensions(a, b)?;
        if a.is_empty() {
            return Ok(0.0);
        }
        let mean_a = a.iter().sum::<f64>() / a.len() as f64;
        let mean_b = b.iter().sum::<f64>() / b.len() as f64;
        Ok(one_minus_similarity(
            a.iter().map(|x| x - mean_a),
            b.iter().map(|y| y - mean_b),
        ))
    }
}

/// Cosine similarity subtracted from one, clamped into `[0, 2]`.
fn one_minus_similarity(
    a: impl Iterator<Item = f64>,
    b: impl Iterator<Item = f64>,
) -> f64 {
    let (dot, norm_a, norm_b) = a
        .zip(b)
        .fold((0.0, 0.0, 0.0), |(dot, na, nb), (x, y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });
    let norm_a = norm_a.sqrt();
    let norm_b = norm_b.sqrt();

    match (norm_a < ZERO_NORM, norm_b < ZERO_NORM) {
        (true, true) => 0.0,
        (true, false) | (false, true) => 1.0,
        (false, false) => (1.0 - dot / (norm_a * norm_b)).clamp(0.0, 2.0),
    }
}
