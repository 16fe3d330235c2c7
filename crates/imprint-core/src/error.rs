//! Error types for the Imprint core.
//!
//! The computation stages are total over any well-typed bag, so the only
//! error surface is the advisory kind-conformance check.

use thiserror::Error;

use crate::schema::Kind;

/// Validation errors for attribute bags.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("attribute {key} does not conform to expected kind {expected:?}")]
    KindMismatch { key: String, expected: Kind },
}
