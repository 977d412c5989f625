//! Comparison matrix - reciprocal pairwise judgments with a unit diagonal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::JudgmentValue;

use super::AnalysisError;

/// A square matrix of pairwise judgments.
///
/// # Invariants
/// - Diagonal cells are always exactly 1.
/// - Off-diagonal cells set through [`set_judgment`](Self::set_judgment)
///   hold scale members, and the mirror cell holds the scale-snapped
///   reciprocal; the two are never independently chosen.
/// - Cells not yet judged are explicitly unset, distinct from any value.
///
/// Matrices built with [`from_rows`](Self::from_rows) carry externally
/// supplied values and are not snapped to the judgment scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    dimension: usize,
    cells: Vec<Option<f64>>,
}

impl ComparisonMatrix {
    /// Creates an `n`x`n` matrix with a unit diagonal and every
    /// off-diagonal cell unset.
    pub fn new(n: usize) -> Self {
        let mut cells = vec![None; n * n];
        for i in 0..n {
            cells[i * n + i] = Some(1.0);
        }
        Self { dimension: n, cells }
    }

    /// Creates a fully-populated matrix from externally supplied rows.
    ///
    /// Rows must form a square matrix of strictly positive entries. No
    /// scale snapping is applied; reference matrices may hold arbitrary
    /// reciprocal floating values.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AnalysisError> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AnalysisError::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                if !(value > 0.0) {
                    return Err(AnalysisError::NonPositiveEntry { row: i, col: j, value });
                }
                cells.push(Some(value));
            }
        }

        Ok(Self { dimension: n, cells })
    }

    /// Returns the matrix dimension N.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the value at (`i`, `j`), or `None` if unset or out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.dimension || j >= self.dimension {
            return None;
        }
        self.cells[self.index(i, j)]
    }

    /// Records a pairwise judgment.
    ///
    /// `raw` is snapped to the nearest scale member `v`; cell (`i`, `j`)
    /// receives `v` and the mirror cell (`j`, `i`) receives the
    /// scale-snapped reciprocal of `v`.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `i` or `j` is outside the matrix.
    /// - `InvalidDiagonalEdit` when `i == j`; the diagonal is fixed at 1.
    pub fn set_judgment(&mut self, i: usize, j: usize, raw: f64) -> Result<(), AnalysisError> {
        self.check_bounds(i)?;
        self.check_bounds(j)?;
        if i == j {
            return Err(AnalysisError::InvalidDiagonalEdit { index: i });
        }

        let judgment = JudgmentValue::nearest(raw);
        let forward = self.index(i, j);
        let mirror = self.index(j, i);
        self.cells[forward] = Some(judgment.value());
        self.cells[mirror] = Some(judgment.reciprocal().value());
        Ok(())
    }

    /// Returns true if no off-diagonal cell is unset.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Writes a blended value into (`i`, `j`) and the snapped reciprocal
    /// into the mirror cell. Used by the synthesizer; bounds are the
    /// caller's responsibility.
    pub(crate) fn set_blended(&mut self, i: usize, j: usize, value: f64) {
        let forward = self.index(i, j);
        let mirror = self.index(j, i);
        self.cells[forward] = Some(value);
        self.cells[mirror] = Some(JudgmentValue::nearest(1.0 / value).value());
    }

    fn index(&self, i: usize, j: usize) -> usize {
        i * self.dimension + j
    }

    fn check_bounds(&self, index: usize) -> Result<(), AnalysisError> {
        if index >= self.dimension {
            return Err(AnalysisError::IndexOutOfRange {
                index,
                dimension: self.dimension,
            });
        }
        Ok(())
    }
}
