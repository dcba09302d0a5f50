//! Coordinate-wise metrics.

use crate::error::HeatmapError;
use crate::metric::{DistanceMetric, check_dimensions};

/// Euclidean distance `sqrt(Σ (aᵢ-bᵢ)²)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, HeatmapError> {
        check_dimensions(a, b)?;
        let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
        Ok(sum.sqrt())
    }
}

/// Manhattan (city block) distance `Σ |aᵢ-bᵢ|`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl DistanceMetric for Manhattan {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, HeatmapError> {
        check_dimensions(a, b)?;
        Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        let d = Euclidean.distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
        assert!((d - 5.0).abs() < 1e-12);
        assert_eq!(Euclidean.distance(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_manhattan() {
        let d = Manhattan.distance(&[1.0, -1.0], &[3.0, 4.0]).unwrap();
        assert!((d - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_dimension_mismatch() {
        assert_eq!(
            Euclidean.distance(&[1.0, 2.0], &[1.0]),
            Err(HeatmapError::DimensionMismatch { expected: 2, found: 1 })
        );
        assert!(Manhattan.distance(&[1.0], &[1.0, 2.0]).is_err());
    }
}
