//! Probes derivable on a native host.
//!
//! These cover the schema keys that need no rendering or media stack:
//! core count, platform, locale-ish signals from the environment, math
//! precision marks, and the user-agent-derived attributes. Everything
//! else is environment I/O owned by the embedding application, which can
//! register its own [`Probe`] implementations alongside these.

use std::sync::Arc;

use async_trait::async_trait;

use imprint_core::{AttributeValue, MathPrecision};

use crate::probe::Probe;
use crate::ua;

/// Logical core count, floored at 1.
pub struct HardwareConcurrencyProbe;

#[async_trait]
impl Probe for HardwareConcurrencyProbe {
    fn key(&self) -> &str {
        "hardwareConcurrency"
    }

    async fn sample(&self) -> AttributeValue {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .max(1);
        AttributeValue::Number(cores as f64)
    }
}

/// Operating system identifier.
pub struct PlatformProbe;

#[async_trait]
impl Probe for PlatformProbe {
    fn key(&self) -> &str {
        "platform"
    }

    async fn sample(&self) -> AttributeValue {
        AttributeValue::text(std::env::consts::OS)
    }
}

/// IANA timezone name from the TZ environment variable, absent when unset.
pub struct TimezoneProbe;

#[async_trait]
impl Probe for TimezoneProbe {
    fn key(&self) -> &str {
        "timezone"
    }

    async fn sample(&self) -> AttributeValue {
        match std::env::var("TZ") {
            Ok(tz) if !tz.is_empty() => AttributeValue::Text(tz),
            _ => AttributeValue::Absent,
        }
    }
}

/// UI language tag normalized from the LANG environment variable.
pub struct LanguageProbe;

#[async_trait]
impl Probe for LanguageProbe {
    fn key(&self) -> &str {
        "language"
    }

    async fn sample(&self) -> AttributeValue {
        std::env::var("LANG")
            .ok()
            .as_deref()
            .and_then(language_tag)
            .map_or(AttributeValue::Absent, AttributeValue::Text)
    }
}

/// Normalize a POSIX locale to a BCP-47-style tag: strip codeset and
/// modifier, swap the underscore. `C` and `POSIX` carry no language.
fn language_tag(lang: &str) -> Option<String> {
    let base = lang.split(['.', '@']).next().unwrap_or("");
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

/// Trigonometric precision marks evaluated at 1.0.
pub struct MathPrecisionProbe;

#[async_trait]
impl Probe for MathPrecisionProbe {
    fn key(&self) -> &str {
        "mathPrecision"
    }

    async fn sample(&self) -> AttributeValue {
        AttributeValue::MathMarks(MathPrecision {
            tan: f64::tan(1.0),
            sin: f64::sin(1.0),
            cos: f64::cos(1.0),
        })
    }
}

/// The raw user-agent string, supplied by the caller.
pub struct UserAgentProbe {
    ua: String,
}

impl UserAgentProbe {
    pub fn new(ua: impl Into<String>) -> Self {
        Self { ua: ua.into() }
    }
}

#[async_trait]
impl Probe for UserAgentProbe {
    fn key(&self) -> &str {
        "userAgent"
    }

    async fn sample(&self) -> AttributeValue {
        AttributeValue::Text(self.ua.clone())
    }
}

/// Engine tag parsed from a caller-supplied user agent.
pub struct EngineVersionProbe {
    ua: String,
}

impl EngineVersionProbe {
    pub fn new(ua: impl Into<String>) -> Self {
        Self { ua: ua.into() }
    }
}

#[async_trait]
impl Probe for EngineVersionProbe {
    fn key(&self) -> &str {
        "userAgentVersion"
    }

    async fn sample(&self) -> AttributeValue {
        AttributeValue::Text(ua::engine_version_tag(&self.ua))
    }
}

/// Script engine detected from a caller-supplied user agent.
pub struct ScriptEngineProbe {
    ua: String,
}

impl ScriptEngineProbe {
    pub fn new(ua: impl Into<String>) -> Self {
        Self { ua: ua.into() }
    }
}

#[async_trait]
impl Probe for ScriptEngineProbe {
    fn key(&self) -> &str {
        "jsEngine"
    }

    async fn sample(&self) -> AttributeValue {
        AttributeValue::text(ua::script_engine(&self.ua))
    }
}

/// The probe set derivable on this host, seeded with the caller's user
/// agent string.
pub fn host_probes(user_agent: &str) -> Vec<Arc<dyn Probe>> {
    vec![
        Arc::new(HardwareConcurrencyProbe),
        Arc::new(PlatformProbe),
        Arc::new(TimezoneProbe),
        Arc::new(LanguageProbe),
        Arc::new(MathPrecisionProbe),
        Arc::new(UserAgentProbe::new(user_agent)),
        Arc::new(EngineVersionProbe::new(user_agent)),
        Arc::new(ScriptEngineProbe::new(user_agent)),
    ]
}
