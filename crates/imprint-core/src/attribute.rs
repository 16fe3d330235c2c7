//! Attribute values and the attribute bag.
//!
//! An attribute is one named, typed signal describing the client
//! environment. A bag is the complete set collected for one fingerprinting
//! call. Once assembled, a bag is never mutated: build it through
//! [`BagBuilder`] and hand it to the computation stages, which only read.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A screen resolution pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenResolution {
    pub width: u32,
    pub height: u32,
}

/// Touch capability triple reported by the environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchCapabilities {
    pub max_touch_points: u32,
    pub touch_event: bool,
    pub pointer_event: bool,
}

/// Trigonometric precision marks: tan/sin/cos evaluated at 1.0.
///
/// Floating point libraries differ in their last-bit behavior, which makes
/// these three values a cheap hardware/runtime signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MathPrecision {
    pub tan: f64,
    pub sin: f64,
    pub cos: f64,
}

/// One typed environment signal, or the explicit absent marker.
///
/// `Absent` means "this attribute could not be determined". It is distinct
/// from the key being missing from the bag at the API level, but the two
/// canonicalize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Absent,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Ordered sequence of strings. Discovery order is irrelevant; the
    /// canonicalizer sorts before serialization.
    List(Vec<String>),
    Resolution(ScreenResolution),
    Touch(TouchCapabilities),
    MathMarks(MathPrecision),
}

impl AttributeValue {
    /// Whether this value counts as populated for confidence purposes.
    pub fn is_present(&self) -> bool {
        !matches!(self, AttributeValue::Absent)
    }

    /// Convenience constructor for text values.
    pub fn text(s: impl Into<String>) -> Self {
        AttributeValue::Text(s.into())
    }

    /// Convenience constructor for string lists.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AttributeValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

/// The complete set of attributes collected for one fingerprinting call.
///
/// Keys map to values or the explicit absent marker. Internal key ordering
/// carries no meaning: the canonicalizer imposes its own total order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeBag {
    entries: BTreeMap<String, AttributeValue>,
}

impl AttributeBag {
    /// Start assembling a bag.
    pub fn builder() -> BagBuilder {
        BagBuilder::default()
    }

    /// Get the value for a key, if the key was recorded at all.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    /// Whether the key carries a present (non-absent) value.
    pub fn is_populated(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(AttributeValue::is_present)
    }

    /// Number of recorded keys, absent markers included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over recorded keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over recorded entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, AttributeValue)> for AttributeBag {
    fn from_iter<I: IntoIterator<Item = (String, AttributeValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Builder for [`AttributeBag`]. The only way to construct a non-empty bag.
#[derive(Debug, Default)]
pub struct BagBuilder {
    entries: BTreeMap<String, AttributeValue>,
}

impl BagBuilder {
    /// Record a value for a key. Recording the same key twice keeps the
    /// last value.
    pub fn set(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    /// Finalize the bag.
    pub fn build(self) -> AttributeBag {
        AttributeBag {
            entries: self.entries,
        }
    }
}
