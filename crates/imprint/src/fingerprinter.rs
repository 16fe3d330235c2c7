//! The Fingerprinter: collection plus computation in one call.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use imprint_collect::{host_probes, Collector, CollectorConfig, Probe};
use imprint_core::{compute_fingerprint, Fingerprint};

/// Configuration for the fingerprinter.
#[derive(Debug, Clone)]
pub struct FingerprinterConfig {
    /// Default bound for deferred probes without an explicit schema
    /// timeout.
    pub probe_timeout: Duration,
}

impl Default for FingerprinterConfig {
    fn default() -> Self {
        Self {
            probe_timeout: Duration::from_secs(5),
        }
    }
}

/// Collects environment signals and derives the visitor fingerprint.
///
/// Probes are registered up front; every `get_fingerprint` call runs each
/// of them exactly once, waits for all to settle, and computes over the
/// finished bag. The bag is assembled fresh per call and discarded with
/// the result; callers wanting caching cache the result.
pub struct Fingerprinter {
    collector: Collector,
}

impl Fingerprinter {
    pub fn new(config: FingerprinterConfig) -> Self {
        Self {
            collector: Collector::new(CollectorConfig {
                default_timeout: config.probe_timeout,
            }),
        }
    }

    /// Register a probe.
    pub fn with_probe(mut self, probe: impl Probe + 'static) -> Self {
        self.collector = self.collector.with_probe(probe);
        self
    }

    /// Register a batch of probes.
    pub fn with_probes(mut self, probes: impl IntoIterator<Item = Arc<dyn Probe>>) -> Self {
        self.collector = self.collector.with_probes(probes);
        self
    }

    /// Register the host-derivable probe set, seeded with the caller's
    /// user agent.
    pub fn with_host_probes(self, user_agent: &str) -> Self {
        self.with_probes(host_probes(user_agent))
    }

    /// Perform one fingerprinting call.
    ///
    /// All probes settle before canonicalization begins; the computation
    /// itself is synchronous and pure. Never fails: probe failures become
    /// absent attributes and lower the confidence instead.
    pub async fn get_fingerprint(&self) -> Fingerprint {
        let bag = self.collector.collect().await;
        let fingerprint = compute_fingerprint(bag);
        debug!(
            visitor_id = %fingerprint.visitor_id,
            confidence = fingerprint.confidence,
            "fingerprint computed"
        );
        fingerprint
    }
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self::new(FingerprinterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imprint_collect::StaticProbe;
    use imprint_core::AttributeValue;

    #[tokio::test]
    async fn test_get_fingerprint_is_deterministic() {
        let fingerprinter = Fingerprinter::default()
            .with_probe(StaticProbe::new("jsEngine", AttributeValue::text("V8")))
            .with_probe(StaticProbe::new("cookiesEnabled", AttributeValue::Bool(true)));

        let first = fingerprinter.get_fingerprint().await;
        let second = fingerprinter.get_fingerprint().await;

        assert_eq!(first.visitor_id, second.visitor_id);
        assert_eq!(first.confidence, second.confidence);
    }

    #[tokio::test]
    async fn test_no_probes_yields_empty_components() {
        let result = Fingerprinter::default().get_fingerprint().await;

        assert!(result.components.is_empty());
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.visitor_id.to_hex().len(), 64);
    }

    #[tokio::test]
    async fn test_host_probes_populate_attributes() {
        let result = Fingerprinter::default()
            .with_host_probes("Node.js/20")
            .get_fingerprint()
            .await;

        assert!(result.components.is_populated("platform"));
        assert!(result.components.is_populated("hardwareConcurrency"));
        assert_eq!(
            result.components.get("jsEngine"),
            Some(&AttributeValue::text("V8"))
        );
        assert!(result.confidence > 0.0);
    }
}
