//! Session assembly: run every probe once and build the bag.
//!
//! Probes run concurrently; each writes a disjoint key, so the only
//! synchronization is the completion barrier. Canonicalization never sees
//! a bag before all probes have settled. A probe that times out or panics
//! contributes the absent marker, matching the contract that collection
//! failures never reach the core.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::debug;

use imprint_core::schema::{spec_for, Timing};
use imprint_core::{AttributeBag, AttributeValue};

use crate::probe::Probe;

/// Configuration for a collection session.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Bound applied to deferred probes without an explicit schema
    /// timeout, and to probes for keys outside the schema.
    pub default_timeout: Duration,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            default_timeout: Duration::from_secs(5),
        }
    }
}

/// Runs a set of probes once per call and assembles the attribute bag.
pub struct Collector {
    probes: Vec<Arc<dyn Probe>>,
    config: CollectorConfig,
}

impl Collector {
    pub fn new(config: CollectorConfig) -> Self {
        Self {
            probes: Vec::new(),
            config,
        }
    }

    /// Register a probe.
    pub fn with_probe(mut self, probe: impl Probe + 'static) -> Self {
        self.probes.push(Arc::new(probe));
        self
    }

    /// Register a batch of probes.
    pub fn with_probes(mut self, probes: impl IntoIterator<Item = Arc<dyn Probe>>) -> Self {
        self.probes.extend(probes);
        self
    }

    /// Number of registered probes.
    pub fn probe_count(&self) -> usize {
        self.probes.len()
    }

    /// Run every registered probe exactly once and assemble the bag.
    ///
    /// This is the join barrier: the future completes only when all probes
    /// have settled. Dropping it cancels outstanding probes; their keys
    /// end up absent.
    pub async fn collect(&self) -> AttributeBag {
        let mut set = JoinSet::new();
        for probe in &self.probes {
            let probe = Arc::clone(probe);
            let bound = self.bound_for(probe.key());
            set.spawn(async move {
                let key = probe.key().to_string();
                let value = match bound {
                    Some(limit) => match timeout(limit, probe.sample()).await {
                        Ok(value) => value,
                        Err(_) => {
                            debug!(
                                key = %key,
                                timeout_ms = limit.as_millis() as u64,
                                "probe timed out, marking absent"
                            );
                            AttributeValue::Absent
                        }
                    },
                    None => probe.sample().await,
                };
                (key, value)
            });
        }

        let mut sampled: BTreeMap<String, AttributeValue> = BTreeMap::new();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((key, value)) => {
                    sampled.insert(key, value);
                }
                Err(err) => {
                    debug!(error = %err, "probe task failed, marking absent");
                }
            }
        }

        let mut builder = AttributeBag::builder();
        for probe in &self.probes {
            let value = sampled
                .remove(probe.key())
                .unwrap_or(AttributeValue::Absent);
            builder = builder.set(probe.key(), value);
        }
        builder.build()
    }

    /// Timeout policy for one key: an explicit schema bound wins, deferred
    /// probes and unknown keys fall back to the config default, immediate
    /// probes are plain reads and run unbounded.
    fn bound_for(&self, key: &str) -> Option<Duration> {
        match spec_for(key) {
            Some(spec) => match (spec.timeout_ms, spec.timing) {
                (Some(ms), _) => Some(Duration::from_millis(ms)),
                (None, Timing::Deferred) => Some(self.config.default_timeout),
                (None, Timing::Immediate) => None,
            },
            None => Some(self.config.default_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::StaticProbe;
    use async_trait::async_trait;

    struct SlowProbe {
        key: &'static str,
        delay: Duration,
    }

    #[async_trait]
    impl Probe for SlowProbe {
        fn key(&self) -> &str {
            self.key
        }

        async fn sample(&self) -> AttributeValue {
            tokio::time::sleep(self.delay).await;
            AttributeValue::Bool(true)
        }
    }

    struct PanickingProbe;

    #[async_trait]
    impl Probe for PanickingProbe {
        fn key(&self) -> &str {
            "gpuRenderer"
        }

        async fn sample(&self) -> AttributeValue {
            panic!("probe blew up");
        }
    }

    #[tokio::test]
    async fn test_collect_assembles_all_probes() {
        let bag = Collector::new(CollectorConfig::default())
            .with_probe(StaticProbe::new("jsEngine", AttributeValue::text("V8")))
            .with_probe(StaticProbe::new("cookiesEnabled", AttributeValue::Bool(true)))
            .collect()
            .await;

        assert_eq!(bag.len(), 2);
        assert_eq!(bag.get("jsEngine"), Some(&AttributeValue::text("V8")));
        assert!(bag.is_populated("cookiesEnabled"));
    }

    #[tokio::test]
    async fn test_deferred_probe_times_out_to_absent() {
        // installedFonts is deferred with no explicit bound, so the config
        // default applies.
        let config = CollectorConfig {
            default_timeout: Duration::from_millis(20),
        };
        let bag = Collector::new(config)
            .with_probe(SlowProbe {
                key: "installedFonts",
                delay: Duration::from_secs(10),
            })
            .collect()
            .await;

        assert_eq!(bag.get("installedFonts"), Some(&AttributeValue::Absent));
    }

    #[tokio::test]
    async fn test_unknown_key_probe_gets_default_bound() {
        let config = CollectorConfig {
            default_timeout: Duration::from_millis(20),
        };
        let bag = Collector::new(config)
            .with_probe(SlowProbe {
                key: "experimentalSignal",
                delay: Duration::from_secs(10),
            })
            .collect()
            .await;

        assert_eq!(bag.get("experimentalSignal"), Some(&AttributeValue::Absent));
    }

    #[tokio::test]
    async fn test_panicking_probe_becomes_absent() {
        let bag = Collector::new(CollectorConfig::default())
            .with_probe(PanickingProbe)
            .with_probe(StaticProbe::new("jsEngine", AttributeValue::text("V8")))
            .collect()
            .await;

        assert_eq!(bag.get("gpuRenderer"), Some(&AttributeValue::Absent));
        assert!(bag.is_populated("jsEngine"));
    }

    #[tokio::test]
    async fn test_collect_is_deterministic_across_calls() {
        let collector = Collector::new(CollectorConfig::default())
            .with_probe(StaticProbe::new("platform", AttributeValue::text("Linux x86_64")))
            .with_probe(StaticProbe::new("timezone", AttributeValue::text("Europe/Berlin")))
            .with_probe(StaticProbe::new("audioFingerprint", AttributeValue::Absent));

        let first = collector.collect().await;
        let second = collector.collect().await;
        assert_eq!(first, second);
    }

    #[test]
    fn test_bound_policy() {
        let collector = Collector::new(CollectorConfig {
            default_timeout: Duration::from_secs(3),
        });

        // Explicit schema bound wins.
        assert_eq!(
            collector.bound_for("adBlockDetected"),
            Some(Duration::from_millis(2_000))
        );
        // Deferred without explicit bound gets the default.
        assert_eq!(
            collector.bound_for("installedFonts"),
            Some(Duration::from_secs(3))
        );
        // Immediate reads run unbounded.
        assert_eq!(collector.bound_for("userAgent"), None);
        // Unknown keys get the default bound.
        assert_eq!(
            collector.bound_for("experimentalSignal"),
            Some(Duration::from_secs(3))
        );
    }
}
