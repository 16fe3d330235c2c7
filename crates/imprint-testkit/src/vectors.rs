//! Golden vectors: exact canonical forms pinned for regression testing.
//!
//! The canonical form is the contract: every byte of it feeds the digest,
//! so any drift in key ordering, escaping, or number formatting shows up
//! here first. Digests themselves are pinned by format and by relational
//! properties (identical canonical forms agree, distinct ones diverge)
//! rather than by hardcoded hashes.

use imprint_core::{
    canonical_form, AttributeBag, AttributeValue, ScreenResolution, TouchCapabilities, VisitorId,
};

/// A single golden vector.
pub struct GoldenVector {
    pub name: &'static str,
    pub description: &'static str,
    pub bag: AttributeBag,
    pub canonical: &'static str,
}

const EMPTY_CANONICAL: &str = r#"{"adBlockDetected":null,"audioFingerprint":null,"canvasFingerprint":null,"colorDepth":null,"cookiesEnabled":null,"deviceMemory":null,"doNotTrack":null,"gpuRenderer":null,"hardwareConcurrency":null,"installedFonts":null,"jsEngine":null,"language":null,"localStorage":null,"mathPrecision":null,"mimeTypes":null,"navigatorLanguages":null,"platform":null,"plugins":null,"screenOrientation":null,"screenResolution":null,"sessionStorage":null,"timezone":null,"touchSupport":null,"userAgent":null,"userAgentVersion":null,"webglExtensions":null,"webglFingerprint":null}"#;

const ENGINE_ONLY_CANONICAL: &str = r#"{"adBlockDetected":null,"audioFingerprint":null,"canvasFingerprint":null,"colorDepth":null,"cookiesEnabled":null,"deviceMemory":null,"doNotTrack":null,"gpuRenderer":null,"hardwareConcurrency":null,"installedFonts":null,"jsEngine":"V8","language":null,"localStorage":null,"mathPrecision":null,"mimeTypes":null,"navigatorLanguages":null,"platform":null,"plugins":null,"screenOrientation":null,"screenResolution":null,"sessionStorage":null,"timezone":null,"touchSupport":null,"userAgent":null,"userAgentVersion":null,"webglExtensions":null,"webglFingerprint":null}"#;

const PARTIAL_SESSION_CANONICAL: &str = r#"{"adBlockDetected":null,"audioFingerprint":null,"canvasFingerprint":null,"colorDepth":24,"cookiesEnabled":true,"deviceMemory":null,"doNotTrack":null,"gpuRenderer":null,"hardwareConcurrency":null,"installedFonts":["Arial","Verdana"],"jsEngine":"V8","language":null,"localStorage":null,"mathPrecision":null,"mimeTypes":null,"navigatorLanguages":null,"platform":null,"plugins":null,"screenOrientation":null,"screenResolution":{"height":1080,"width":1920},"sessionStorage":null,"timezone":null,"touchSupport":{"maxTouchPoints":0,"pointerEvent":true,"touchEvent":false},"userAgent":null,"userAgentVersion":null,"webglExtensions":null,"webglFingerprint":null}"#;

const UNKNOWN_KEY_CANONICAL: &str = r#"{"adBlockDetected":null,"audioFingerprint":null,"canvasFingerprint":null,"colorDepth":null,"cookiesEnabled":null,"deviceMemory":null,"doNotTrack":null,"gpuRenderer":null,"hardwareConcurrency":null,"installedFonts":null,"jsEngine":null,"language":null,"localStorage":null,"mathPrecision":null,"mimeTypes":null,"navigatorLanguages":null,"platform":null,"plugins":null,"screenOrientation":null,"screenResolution":null,"sessionNonce":"n-1","sessionStorage":null,"timezone":null,"touchSupport":null,"userAgent":null,"userAgentVersion":null,"webglExtensions":null,"webglFingerprint":null}"#;

/// All golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty-bag",
            description: "no keys recorded; every schema key emits null",
            bag: AttributeBag::builder().build(),
            canonical: EMPTY_CANONICAL,
        },
        GoldenVector {
            name: "all-absent",
            description: "every schema key marked absent; identical to empty-bag",
            bag: {
                let mut builder = AttributeBag::builder();
                for spec in imprint_core::SCHEMA {
                    builder = builder.set(spec.key, AttributeValue::Absent);
                }
                builder.build()
            },
            canonical: EMPTY_CANONICAL,
        },
        GoldenVector {
            name: "engine-only",
            description: "single populated text attribute",
            bag: AttributeBag::builder()
                .set("jsEngine", AttributeValue::text("V8"))
                .build(),
            canonical: ENGINE_ONLY_CANONICAL,
        },
        GoldenVector {
            name: "partial-session",
            description: "mixed kinds; fonts recorded out of order",
            bag: AttributeBag::builder()
                .set("cookiesEnabled", AttributeValue::Bool(true))
                .set("colorDepth", AttributeValue::Number(24.0))
                .set("installedFonts", AttributeValue::list(["Verdana", "Arial"]))
                .set("jsEngine", AttributeValue::text("V8"))
                .set(
                    "screenResolution",
                    AttributeValue::Resolution(ScreenResolution {
                        width: 1920,
                        height: 1080,
                    }),
                )
                .set(
                    "touchSupport",
                    AttributeValue::Touch(TouchCapabilities {
                        max_touch_points: 0,
                        touch_event: false,
                        pointer_event: true,
                    }),
                )
                .build(),
            canonical: PARTIAL_SESSION_CANONICAL,
        },
        GoldenVector {
            name: "unknown-key",
            description: "a key outside the schema is canonicalized in order",
            bag: AttributeBag::builder()
                .set("sessionNonce", AttributeValue::text("n-1"))
                .build(),
            canonical: UNKNOWN_KEY_CANONICAL,
        },
    ]
}

/// Assert every vector's canonical form and the digest layer's contract.
pub fn verify_all_vectors() {
    let vectors = all_vectors();

    for vector in &vectors {
        let form = canonical_form(&vector.bag);
        assert_eq!(form, vector.canonical, "vector {}", vector.name);

        let id = VisitorId::digest(&form);
        let hex = id.to_hex();
        assert_eq!(hex.len(), 64, "vector {}", vector.name);
        assert!(
            hex.chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "vector {}",
            vector.name
        );
        assert_eq!(id, VisitorId::digest(&form), "vector {}", vector.name);
    }

    // Identical canonical forms agree on the id, distinct ones diverge.
    for a in &vectors {
        for b in &vectors {
            let id_a = VisitorId::digest(a.canonical);
            let id_b = VisitorId::digest(b.canonical);
            if a.canonical == b.canonical {
                assert_eq!(id_a, id_b, "vectors {} vs {}", a.name, b.name);
            } else {
                assert_ne!(id_a, id_b, "vectors {} vs {}", a.name, b.name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_verify() {
        verify_all_vectors();
    }

    #[test]
    fn test_vector_names_unique() {
        let vectors = all_vectors();
        let names: std::collections::BTreeSet<&str> =
            vectors.iter().map(|v| v.name).collect();
        assert_eq!(names.len(), vectors.len());
    }
}
