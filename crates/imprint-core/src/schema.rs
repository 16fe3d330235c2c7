//! The attribute schema registry.
//!
//! One declarative table drives both sides of the system: the collector
//! iterates it to know which probes exist and how long they may run, and
//! the confidence estimator derives its denominator from it. Keys outside
//! this table are still canonicalized but never enter the confidence ratio.

use serde::{Deserialize, Serialize};

/// Semantic kind of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    Bool,
    Number,
    Text,
    TextList,
    /// String, number, or boolean. Used where probes report either a
    /// measurement or a literal sentinel such as "unknown".
    Scalar,
    Resolution,
    Touch,
    MathMarks,
}

/// When a probe settles relative to the collection call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timing {
    /// A plain environment read; settles promptly by contract.
    Immediate,
    /// Performs measurement or an external check; must be bounded.
    Deferred,
}

/// Registry entry: one expected attribute and its collection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub key: &'static str,
    pub kind: Kind,
    pub timing: Timing,
    /// Explicit bound in milliseconds for probes performing external
    /// checks. `None` means the collector's default bound applies.
    pub timeout_ms: Option<u64>,
}

const fn immediate(key: &'static str, kind: Kind) -> AttributeSpec {
    AttributeSpec {
        key,
        kind,
        timing: Timing::Immediate,
        timeout_ms: None,
    }
}

const fn deferred(key: &'static str, kind: Kind, timeout_ms: Option<u64>) -> AttributeSpec {
    AttributeSpec {
        key,
        kind,
        timing: Timing::Deferred,
        timeout_ms,
    }
}

/// The fixed set of expected attributes.
pub const SCHEMA: &[AttributeSpec] = &[
    immediate("userAgent", Kind::Text),
    immediate("userAgentVersion", Kind::Text),
    immediate("screenResolution", Kind::Resolution),
    immediate("screenOrientation", Kind::Text),
    immediate("timezone", Kind::Text),
    immediate("colorDepth", Kind::Number),
    immediate("deviceMemory", Kind::Scalar),
    immediate("hardwareConcurrency", Kind::Number),
    immediate("language", Kind::Text),
    immediate("canvasFingerprint", Kind::Text),
    immediate("webglFingerprint", Kind::Text),
    immediate("webglExtensions", Kind::TextList),
    immediate("audioFingerprint", Kind::Number),
    deferred("installedFonts", Kind::TextList, None),
    immediate("touchSupport", Kind::Touch),
    immediate("platform", Kind::Text),
    immediate("cookiesEnabled", Kind::Bool),
    immediate("localStorage", Kind::Bool),
    immediate("sessionStorage", Kind::Bool),
    immediate("navigatorLanguages", Kind::TextList),
    immediate("doNotTrack", Kind::Scalar),
    immediate("plugins", Kind::TextList),
    immediate("mimeTypes", Kind::TextList),
    // Network reachability check; bounded tighter than the default.
    deferred("adBlockDetected", Kind::Bool, Some(2_000)),
    immediate("mathPrecision", Kind::MathMarks),
    immediate("gpuRenderer", Kind::Text),
    immediate("jsEngine", Kind::Text),
];

/// Number of expected attributes (the confidence denominator).
pub fn expected_keys() -> usize {
    SCHEMA.len()
}

/// Look up the registry entry for a key.
pub fn spec_for(key: &str) -> Option<&'static AttributeSpec> {
    SCHEMA.iter().find(|spec| spec.key == key)
}

/// Whether a key belongs to the expected schema.
pub fn is_schema_key(key: &str) -> bool {
    spec_for(key).is_some()
}
