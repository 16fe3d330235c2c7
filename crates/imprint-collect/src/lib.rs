//! # Imprint Collect
//!
//! The collaborator boundary of Imprint: probes sample environment
//! signals, the collector joins them into an immutable attribute bag.
//!
//! Probes are independent and side-effect-free; each writes one key. The
//! collector is the only synchronization point: a completion barrier
//! before the bag is built. Failures never cross this crate's boundary as
//! errors; they become the absent marker.

pub mod host;
pub mod probe;
pub mod session;
pub mod ua;

pub use host::host_probes;
pub use probe::{Probe, StaticProbe};
pub use session::{Collector, CollectorConfig};
pub use ua::{engine_version_tag, script_engine};
