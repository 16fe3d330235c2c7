//! # Imprint Testkit
//!
//! Testing utilities for Imprint.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: fully and partially populated bags with fixed values
//! - **Generators**: proptest strategies for property-based testing
//! - **Golden vectors**: exact canonical forms for regression testing
//!
//! ## Fixtures
//!
//! ```rust
//! use imprint_core::compute_fingerprint;
//! use imprint_testkit::fixtures::full_bag;
//!
//! let result = compute_fingerprint(full_bag());
//! assert_eq!(result.confidence, 1.0);
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use imprint_testkit::generators::{bag_from_params, BagParams};
//!
//! proptest! {
//!     #[test]
//!     fn fingerprint_is_deterministic(params: BagParams) {
//!         let a = imprint_core::compute_fingerprint(bag_from_params(&params));
//!         let b = imprint_core::compute_fingerprint(bag_from_params(&params));
//!         prop_assert_eq!(a.visitor_id, b.visitor_id);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{absent_bag, full_bag, mutated_value, sample_value, sparse_bag};
pub use generators::{bag_from_params, entries_from_params, value_for, BagParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
