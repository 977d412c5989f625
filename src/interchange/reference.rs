//! Reference matrix payload - the `GET /api/matrix/` response body.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::analysis::{AnalysisError, ComparisonMatrix};
use crate::domain::foundation::CriterionSet;

/// Errors raised while converting a payload into a comparison matrix.
#[derive(Debug, Clone, Error)]
pub enum InterchangeError {
    #[error("Payload has no row for criterion '{label}'")]
    MissingCriterion { label: String },

    #[error("Payload row '{row}' has no value for criterion '{col}'")]
    MissingComparison { row: String, col: String },

    #[error(transparent)]
    InvalidMatrix(#[from] AnalysisError),
}

/// Precomputed consistency figures shipped alongside the reference matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    #[serde(rename = "IC")]
    pub ic: f64,
}

/// The externally supplied reference matrix, keyed by criterion label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMatrixPayload {
    pub matrix: HashMap<String, HashMap<String, f64>>,
    pub consistency: ConsistencyReport,
}

impl ReferenceMatrixPayload {
    /// Converts the label-keyed payload into a matrix ordered by `criteria`.
    ///
    /// The payload must carry a value for every ordered label pair; values
    /// are taken as-is, without scale snapping.
    pub fn to_matrix(&self, criteria: &CriterionSet) -> Result<ComparisonMatrix, InterchangeError> {
        let mut rows = Vec::with_capacity(criteria.len());

        for row_label in criteria.iter() {
            let row_values =
                self.matrix
                    .get(row_label)
                    .ok_or_else(|| InterchangeError::MissingCriterion {
                        label: row_label.to_string(),
                    })?;

            let mut row = Vec::with_capacity(criteria.len());
            for col_label in criteria.iter() {
                let value = row_values.get(col_label).copied().ok_or_else(|| {
                    InterchangeError::MissingComparison {
                        row: row_label.to_string(),
                        col: col_label.to_string(),
                    }
                })?;
                row.push(value);
            }
            rows.push(row);
        }

        Ok(ComparisonMatrix::from_rows(rows)?)
    }
}
