//! Permutation of row or column indices.

use crate::error::HeatmapError;
use serde::{Deserialize, Serialize};

// =#========================================================================#=
// PERMUTATION
// =#========================================================================#=
/// A bijection over `0..n`, read as "position `p` shows original index `order[p]`".
///
/// Both clustered and unclustered axes are described by this type; an
/// unclustered axis simply uses [Permutation::identity].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Permutation {
    order: Vec<usize>,
}

impl Permutation {
    /// Creates the identity permutation over `0..len`.
    pub fn identity(len: usize) -> Self {
        Permutation {
            order: (0..len).collect(),
        }
    }

    /// Creates a permutation from an order of original indices.
    ///
    /// # Errors
    /// [HeatmapError::InvalidPermutation] if `order` is not a bijection over `0..order.len()`.
    pub fn from_order(order: Vec<usize>) -> Result<Self, HeatmapError> {
        let mut seen = vec![false; order.len()];
        for &index in &order {
            match seen.get_mut(index) {
                None => {
                    return Err(HeatmapError::InvalidPermutation(format!(
                        "index {index} out of range for length {}",
                        order.len()
                    )));
                }
                Some(true) => {
                    return Err(HeatmapError::InvalidPermutation(format!(
                        "index {index} appears twice"
                    )));
                }
                Some(flag) => *flag = true,
            }
        }

        Ok(Permutation { order })
    }

    /// Returns the order as slice: entry `p` is the original index shown at position `p`.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Returns the number of indices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the permutation is over no index.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if every index maps to itself.
    pub fn is_identity(&self) -> bool {
        self.order.iter().enumerate().all(|(position, &index)| position == index)
    }

    /// Returns the original index shown at `position`, if in range.
    pub fn get(&self, position: usize) -> Option<usize> {
        self.order.get(position).copied()
    }

    /// Returns the inverse: entry `i` is the new position of original index `i`.
    pub fn inverse(&self) -> Permutation {
        let mut inverse = vec![0; self.order.len()];
        for (position, &index) in self.order.iter().enumerate() {
            inverse[index] = position;
        }
        Permutation { order: inverse }
    }

    /// Returns the items rearranged into this order.
    ///
    /// # Errors
    /// [HeatmapError::DimensionMismatch] if `items` has a different length.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Result<Vec<T>, HeatmapError> {
        if items.len() != self.order.len() {
            return Err(HeatmapError::DimensionMismatch {
                expected: self.order.len(),
                found: items.len(),
            });
        }
        Ok(self.order.iter().map(|&index| items[index].clone()).collect())
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = HeatmapError;

    fn try_from(order: Vec<usize>) -> Result<Self, Self::Error> {
        Permutation::from_order(order)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(permutation: Permutation) -> Self {
        permutation.order
    }
}
