//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (judgment scale, criterion set, errors)
//! - `analysis` - Pure domain services for pairwise-comparison analysis

pub mod analysis;
pub mod foundation;
