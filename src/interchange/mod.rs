//! Interchange module - wire-format types for the collaborating service.
//!
//! The engine itself performs no network communication; these types decode
//! payloads the surrounding application has already fetched.

mod reference;

pub use reference::{ConsistencyReport, InterchangeError, ReferenceMatrixPayload};
