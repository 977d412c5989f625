//! Analysis Module - Pure domain services for pairwise-comparison analysis.
//!
//! # Components
//!
//! - `ComparisonMatrix` - Reciprocal judgment matrix with a unit diagonal
//! - `PriorityCalculator` - Priority weights via column-sum normalization
//! - `ConsistencyEvaluator` - Principal eigenvalue estimate, CI and CR
//! - `MatrixSynthesizer` - Bounded search blending user and reference judgments
//!
//! # Design Philosophy
//!
//! All services are pure and stateless. They take domain objects as input
//! and return computed results; the only randomness is the generator
//! injected into the synthesizer.

mod comparison_matrix;
mod consistency;
mod errors;
mod priority;
mod synthesizer;

pub use comparison_matrix::ComparisonMatrix;
pub use consistency::{
    random_index, ConsistencyEvaluator, ConsistencyMetrics, CR_ACCEPTANCE_THRESHOLD, RANDOM_INDEX,
};
pub use errors::AnalysisError;
pub use priority::{PriorityCalculator, PriorityVector};
pub use synthesizer::{
    MatrixSynthesizer, SynthesisOutcome, SynthesisPolicy, DEFAULT_MAX_ATTEMPTS,
};
