//! Error types for pairwise-comparison analysis.

use thiserror::Error;

use super::ComparisonMatrix;

/// Errors that can occur during matrix construction and analysis.
///
/// All variants are local validation failures on malformed input or unmet
/// algorithmic preconditions; none are transient or retryable.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error("Index {index} is out of range for a {dimension}x{dimension} matrix")]
    IndexOutOfRange { index: usize, dimension: usize },

    #[error("Diagonal cell ({index}, {index}) is fixed at 1 and cannot be judged")]
    InvalidDiagonalEdit { index: usize },

    #[error("Matrix still has unjudged cells; every off-diagonal comparison is required")]
    IncompleteMatrix,

    #[error("Priority weight {index} is zero; eigenvalue estimate is undefined")]
    DegeneratePriority { index: usize },

    #[error("Dimension {dimension} is too small; consistency requires at least 2 criteria")]
    InvalidDimension { dimension: usize },

    #[error("No random index is tabulated for dimension {dimension}")]
    UnsupportedDimension { dimension: usize },

    #[error("Matrix rows and columns differ: {rows} rows of width {cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Entry ({row}, {col}) must be strictly positive, got {value}")]
    NonPositiveEntry { row: usize, col: usize, value: f64 },

    #[error("Matrices differ in dimension: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error(
        "No candidate reached consistency ratio {threshold} within {attempts} attempts; \
         best candidate scored {best_cr}"
    )]
    ConsistencyUnattainable {
        /// Lowest-CR candidate found, kept as diagnostic payload.
        best: Box<ComparisonMatrix>,
        best_cr: f64,
        threshold: f64,
        attempts: u32,
    },
}
