//! AHP Engine - Pairwise-comparison consistency engine.
//!
//! This crate implements the numerical core of the Analytic Hierarchy
//! Process: reciprocal comparison matrices built from a fixed judgment
//! scale, priority weight derivation, consistency index/ratio evaluation,
//! and a bounded search that blends a user-edited matrix with an external
//! reference matrix until the result is acceptably consistent.

pub mod domain;
pub mod interchange;
