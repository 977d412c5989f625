//! Error types for value object construction.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Criterion label at position {position} cannot be empty")]
    EmptyLabel { position: usize },

    #[error("Criterion label '{label}' appears more than once")]
    DuplicateLabel { label: String },

    #[error("At least {min} criteria are required, got {actual}")]
    TooFewCriteria { min: usize, actual: usize },
}

impl ValidationError {
    /// Creates an empty label validation error.
    pub fn empty_label(position: usize) -> Self {
        ValidationError::EmptyLabel { position }
    }

    /// Creates a duplicate label validation error.
    pub fn duplicate_label(label: impl Into<String>) -> Self {
        ValidationError::DuplicateLabel { label: label.into() }
    }

    /// Creates a too-few-criteria validation error.
    pub fn too_few_criteria(min: usize, actual: usize) -> Self {
        ValidationError::TooFewCriteria { min, actual }
    }
}
