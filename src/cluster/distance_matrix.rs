//! Condensed symmetric distance matrix over cluster slots.

use crate::error::HeatmapError;
use crate::metric::DistanceMetric;
use crate::model::ClusterElement;

/// Symmetric matrix with zero diagonal, storing only the strict lower triangle.
///
/// Entry `(i, j)` with `i > j` lives at `i * (i - 1) / 2 + j`, so `n`
/// slots need `n * (n - 1) / 2` values.
#[derive(Debug, Clone)]
pub(crate) struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Seeds the matrix with pairwise distances between all elements.
    pub(crate) fn from_elements<M: DistanceMetric>(
        elements: &[ClusterElement],
        metric: &M,
    ) -> Result<Self, HeatmapError> {
        let size = elements.len();
        let mut values = Vec::with_capacity(size * size.saturating_sub(1) / 2);
        for i in 1..size {
            for j in 0..i {
                values.push(metric.distance(elements[i].values(), elements[j].values())?);
            }
        }

        Ok(DistanceMatrix { size, values })
    }

    /// Returns the number of slots.
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Returns the distance between slots `i` and `j`.
    pub(crate) fn get(&self, i: usize, j: usize) -> f64 {
        if i == j {
            0.0
        } else {
            self.values[Self::offset(i, j)]
        }
    }

    /// Sets the distance between slots `i` and `j` (`i != j`).
    pub(crate) fn set(&mut self, i: usize, j: usize, distance: f64) {
        debug_assert_ne!(i, j);
        let offset = Self::offset(i, j);
        self.values[offset] = distance;
    }

    fn offset(i: usize, j: usize) -> usize {
        let (high, low) = if i > j { (i, j) } else { (j, i) };
        high * (high - 1) / 2 + low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::Manhattan;

    #[test]
    fn test_seeding_and_symmetry() {
        let elements = vec![
            ClusterElement::new(vec![0.0], 0),
            ClusterElement::new(vec![1.0], 1),
            ClusterElement::new(vec![3.0], 2),
        ];
        let mut matrix = DistanceMatrix::from_elements(&elements, &Manhattan).unwrap();

        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix.get(0, 0), 0.0);
        assert_eq!(matrix.get(0, 1), 1.0);
        assert_eq!(matrix.get(2, 0), 3.0);
        assert_eq!(matrix.get(1, 2), matrix.get(2, 1));

        matrix.set(0, 2, 7.5);
        assert_eq!(matrix.get(2, 0), 7.5);
    }
}
