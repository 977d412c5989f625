//! Priority vector derivation via column-sum normalization.

use serde::{Deserialize, Serialize};

use super::{AnalysisError, ComparisonMatrix};

/// Normalized priority weights, one per criterion, summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityVector {
    weights: Vec<f64>,
}

impl PriorityVector {
    /// Wraps precomputed weights. Callers are trusted to supply weights
    /// consistent with the matrix they were derived from.
    pub fn from_weights(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    /// Returns the weight for criterion `index`, if in range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.weights.get(index).copied()
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if there are no weights.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the weights in criterion order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the index of the highest-weighted criterion.
    /// Returns `None` when empty or when the maximum is tied.
    pub fn top_criterion(&self) -> Option<usize> {
        let (mut best, mut best_weight, mut tied) = (0, f64::MIN, false);
        for (index, &weight) in self.weights.iter().enumerate() {
            if weight > best_weight {
                best = index;
                best_weight = weight;
                tied = false;
            } else if weight == best_weight {
                tied = true;
            }
        }
        if self.weights.is_empty() || tied {
            None
        } else {
            Some(best)
        }
    }
}

/// Priority weight derivation - the standard AHP column-sum approximation.
pub struct PriorityCalculator;

impl PriorityCalculator {
    /// Derives the priority vector of a fully-populated matrix.
    ///
    /// # Algorithm
    /// 1. Sum each column.
    /// 2. Normalize each entry by its column sum.
    /// 3. Weight for criterion i = mean of normalized row i.
    ///
    /// For a strictly positive matrix the weights are non-negative and sum
    /// to 1 within floating tolerance.
    ///
    /// # Errors
    /// `IncompleteMatrix` when any off-diagonal cell is unset.
    pub fn compute(matrix: &ComparisonMatrix) -> Result<PriorityVector, AnalysisError> {
        if !matrix.is_complete() {
            return Err(AnalysisError::IncompleteMatrix);
        }

        let n = matrix.dimension();
        let mut column_sums = vec![0.0; n];
        for j in 0..n {
            for i in 0..n {
                column_sums[j] += matrix.get(i, j).unwrap_or(0.0);
            }
        }

        let mut weights = Vec::with_capacity(n);
        for i in 0..n {
            let mut row_total = 0.0;
            for j in 0..n {
                row_total += matrix.get(i, j).unwrap_or(0.0) / column_sums[j];
            }
            weights.push(row_total / n as f64);
        }

        Ok(PriorityVector::from_weights(weights))
    }
}
