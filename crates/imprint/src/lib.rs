//! # Imprint
//!
//! Deterministic visitor fingerprints from environment probes.
//!
//! ## Overview
//!
//! Imprint derives a stable pseudo-identifier for a client environment:
//!
//! - **Probes** sample independent environment signals, each settling
//!   with a typed value or an explicit absent marker
//! - **The bag** holds one call's signals, immutable once assembled
//! - **Canonicalization** turns the bag into a byte-stable string,
//!   independent of key or sequence ordering
//! - **The visitor id** is the digest of that canonical form, paired with
//!   a confidence score for how completely the schema was populated
//!
//! ## Key Guarantees
//!
//! - The same environment always produces the same visitor id, regardless
//!   of probe completion order or transient collection failures
//! - Probe failures never surface as errors; they lower confidence
//! - `compute_fingerprint` is pure and total, usable without any
//!   collection step
//!
//! ## Usage
//!
//! ```rust,no_run
//! use imprint::{Fingerprinter, FingerprinterConfig};
//!
//! async fn example() {
//!     let fingerprinter = Fingerprinter::new(FingerprinterConfig::default())
//!         .with_host_probes("Mozilla/5.0 ... Chrome/120.0.0.0 Safari/537.36");
//!
//!     let result = fingerprinter.get_fingerprint().await;
//!     println!("{} ({:.2})", result.visitor_id, result.confidence);
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `imprint::core` - Pure primitives (bag, canonical form, digest)
//! - `imprint::collect` - Probe seam and session assembly

pub mod fingerprinter;

// Re-export component crates
pub use imprint_collect as collect;
pub use imprint_core as core;

// Re-export main types for convenience
pub use fingerprinter::{Fingerprinter, FingerprinterConfig};

// Re-export commonly used component types
pub use imprint_collect::{host_probes, Collector, CollectorConfig, Probe, StaticProbe};
pub use imprint_core::{
    compute_fingerprint, AttributeBag, AttributeValue, Fingerprint, MathPrecision,
    ScreenResolution, TouchCapabilities, VisitorId,
};
