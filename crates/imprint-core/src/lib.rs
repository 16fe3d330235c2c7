//! # Imprint Core
//!
//! Pure primitives for Imprint: attribute bags, canonicalization, digests,
//! and confidence estimation.
//!
//! This crate contains no I/O, no async, no environment access. It is pure
//! computation over an assembled [`AttributeBag`].
//!
//! ## Key Types
//!
//! - [`AttributeBag`] - The immutable set of signals for one call
//! - [`AttributeValue`] - One typed signal, or the explicit absent marker
//! - [`VisitorId`] - Digest of the bag's canonical form
//! - [`Fingerprint`] - The result: id, components, confidence
//!
//! ## Invariant
//!
//! Equal attribute values produce an identical visitor id regardless of
//! key insertion order or sequence discovery order. See [`canonical`].

pub mod attribute;
pub mod canonical;
pub mod confidence;
pub mod digest;
pub mod error;
pub mod fingerprint;
pub mod schema;
pub mod validation;

pub use attribute::{
    AttributeBag, AttributeValue, BagBuilder, MathPrecision, ScreenResolution, TouchCapabilities,
};
pub use canonical::canonical_form;
pub use confidence::confidence;
pub use digest::VisitorId;
pub use error::ValidationError;
pub use fingerprint::{compute_fingerprint, Fingerprint};
pub use schema::{expected_keys, is_schema_key, spec_for, AttributeSpec, Kind, Timing, SCHEMA};
pub use validation::{conforms, validate_bag};
