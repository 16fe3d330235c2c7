//! Probe: the seam between the environment and the core.
//!
//! A probe samples exactly one attribute. Failure is a value, not an
//! error: a probe that cannot determine its signal settles with
//! [`AttributeValue::Absent`] instead of propagating anything upward.

use async_trait::async_trait;

use imprint_core::AttributeValue;

/// A single environment signal source.
///
/// Contract: `sample` settles with a typed value conforming to the probe's
/// schema key, or with the absent marker. It must not panic past its own
/// boundary and must not remain pending forever; probes performing
/// external checks are declared deferred in the schema and bounded by the
/// collector.
#[async_trait]
pub trait Probe: Send + Sync {
    /// The attribute key this probe populates.
    fn key(&self) -> &str;

    /// Sample the environment once.
    async fn sample(&self) -> AttributeValue;
}

/// A probe returning a fixed value.
///
/// Used in tests and by callers that source a signal elsewhere (for
/// example, a user agent captured from a request header).
pub struct StaticProbe {
    key: String,
    value: AttributeValue,
}

impl StaticProbe {
    pub fn new(key: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

#[async_trait]
impl Probe for StaticProbe {
    fn key(&self) -> &str {
        &self.key
    }

    async fn sample(&self) -> AttributeValue {
        self.value.clone()
    }
}
