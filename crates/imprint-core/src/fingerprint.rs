//! Fingerprint result and the core computation.

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeBag;
use crate::canonical::canonical_form;
use crate::confidence::confidence;
use crate::digest::VisitorId;

/// The outcome of one fingerprinting call. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Digest of the bag's canonical form.
    pub visitor_id: VisitorId,
    /// The bag exactly as it was assembled.
    pub components: AttributeBag,
    /// Fraction of expected attributes populated, rounded to two decimals.
    pub confidence: f64,
}

/// Compute a fingerprint from an assembled attribute bag.
///
/// Pure, synchronous, and total: any bag meeting the type contract yields
/// a well-formed result, including the empty bag. The bag is consumed and
/// returned unchanged as the result's components.
pub fn compute_fingerprint(bag: AttributeBag) -> Fingerprint {
    let canonical = canonical_form(&bag);
    let visitor_id = VisitorId::digest(&canonical);
    let confidence = confidence(&bag);

    Fingerprint {
        visitor_id,
        components: bag,
        confidence,
    }
}
