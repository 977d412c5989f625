//! Consistency evaluation - principal eigenvalue estimate, CI and CR.

use serde::{Deserialize, Serialize};

use super::{AnalysisError, ComparisonMatrix, PriorityCalculator, PriorityVector};

/// Saaty's Random Index table, indexed by dimension - 1 (N = 1..=10).
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// A matrix is acceptably consistent when CR falls below this threshold.
pub const CR_ACCEPTANCE_THRESHOLD: f64 = 0.10;

/// Returns the Random Index for dimension `n`.
///
/// # Errors
/// - `InvalidDimension` for `n < 2` (CI is undefined below 2).
/// - `UnsupportedDimension` beyond the tabulated range.
pub fn random_index(n: usize) -> Result<f64, AnalysisError> {
    if n < 2 {
        return Err(AnalysisError::InvalidDimension { dimension: n });
    }
    RANDOM_INDEX
        .get(n - 1)
        .copied()
        .ok_or(AnalysisError::UnsupportedDimension { dimension: n })
}

/// Consistency metrics of a comparison matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyMetrics {
    /// Principal eigenvalue estimate (lambda max).
    pub lambda_max: f64,
    /// Consistency Index: (lambda_max - N) / (N - 1).
    pub ci: f64,
    /// Consistency Ratio: CI / RI(N).
    pub cr: f64,
}

impl ConsistencyMetrics {
    /// Returns true if the matrix is acceptably consistent (CR < 0.10).
    pub fn is_acceptable(&self) -> bool {
        self.cr < CR_ACCEPTANCE_THRESHOLD
    }
}

/// Consistency evaluation over fully-populated matrices.
pub struct ConsistencyEvaluator;

impl ConsistencyEvaluator {
    /// Evaluates a matrix, deriving its priority vector first.
    pub fn evaluate(matrix: &ComparisonMatrix) -> Result<ConsistencyMetrics, AnalysisError> {
        let priorities = PriorityCalculator::compute(matrix)?;
        Self::evaluate_with_priorities(matrix, &priorities)
    }

    /// Evaluates a matrix against a precomputed priority vector.
    ///
    /// # Algorithm
    /// 1. Weighted row sums: ws[i] = sum_j M[i][j] * priority[j].
    /// 2. lambda_max = mean of ws[i] / priority[i].
    /// 3. CI = (lambda_max - N) / (N - 1), CR = CI / RI(N).
    ///
    /// The Random Index is selected by the true dimension N; RI(5) = 1.12
    /// applies only to 5-criterion matrices.
    ///
    /// # Errors
    /// - `InvalidDimension` for N < 2.
    /// - `UnsupportedDimension` when N exceeds the RI table.
    /// - `DegeneratePriority` when any priority weight is zero.
    /// - `IncompleteMatrix` when the matrix has unset cells.
    pub fn evaluate_with_priorities(
        matrix: &ComparisonMatrix,
        priorities: &PriorityVector,
    ) -> Result<ConsistencyMetrics, AnalysisError> {
        let n = matrix.dimension();
        let ri = random_index(n)?;
        if !matrix.is_complete() {
            return Err(AnalysisError::IncompleteMatrix);
        }

        let mut lambda_sum = 0.0;
        for i in 0..n {
            let weight = priorities
                .get(i)
                .ok_or(AnalysisError::DegeneratePriority { index: i })?;
            if weight == 0.0 {
                return Err(AnalysisError::DegeneratePriority { index: i });
            }

            let mut weighted_row = 0.0;
            for j in 0..n {
                let column_weight = priorities
                    .get(j)
                    .ok_or(AnalysisError::DegeneratePriority { index: j })?;
                weighted_row += matrix.get(i, j).unwrap_or(0.0) * column_weight;
            }
            lambda_sum += weighted_row / weight;
        }

        let lambda_max = lambda_sum / n as f64;
        let ci = (lambda_max - n as f64) / (n as f64 - 1.0);
        let cr = if ri == 0.0 { 0.0 } else { ci / ri };

        Ok(ConsistencyMetrics { lambda_max, ci, cr })
    }
}
