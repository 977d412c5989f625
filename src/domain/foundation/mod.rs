//! Foundation module - shared domain primitives.
//!
//! Value objects used across the analysis services: the fundamental
//! judgment scale, the criterion set, and construction errors.

mod criteria;
mod errors;
mod judgment;

pub use criteria::{CriterionSet, MIN_CRITERIA};
pub use errors::ValidationError;
pub use judgment::JudgmentValue;
