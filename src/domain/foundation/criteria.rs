//! Criterion set value object - the ordered labels a comparison matrix ranges over.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Minimum number of criteria for a meaningful pairwise comparison.
pub const MIN_CRITERIA: usize = 2;

/// An ordered sequence of distinct criterion labels, fixed for the lifetime
/// of an analysis session. Defines the dimension and row/column semantics of
/// every matrix built against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CriterionSet {
    labels: Vec<String>,
}

impl CriterionSet {
    /// Creates a criterion set from ordered labels.
    ///
    /// Labels must be non-empty and distinct, and at least [`MIN_CRITERIA`]
    /// are required.
    pub fn new(labels: Vec<impl Into<String>>) -> Result<Self, ValidationError> {
        let labels: Vec<String> = labels.into_iter().map(|l| l.into()).collect();

        if labels.len() < MIN_CRITERIA {
            return Err(ValidationError::too_few_criteria(MIN_CRITERIA, labels.len()));
        }

        for (position, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(ValidationError::empty_label(position));
            }
            if labels[..position].contains(label) {
                return Err(ValidationError::duplicate_label(label.clone()));
            }
        }

        Ok(Self { labels })
    }

    /// Returns the number of criteria (the matrix dimension N).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; construction requires at least two criteria.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the label at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Returns the position of `label`, if present.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Iterates the labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for CriterionSet {
    type Error = ValidationError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<CriterionSet> for Vec<String> {
    fn from(criteria: CriterionSet) -> Self {
        criteria.labels
    }
}
