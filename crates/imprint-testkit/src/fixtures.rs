//! Bag fixtures: fully and partially populated bags with fixed values.

use imprint_core::schema::SCHEMA;
use imprint_core::{
    AttributeBag, AttributeValue, Kind, MathPrecision, ScreenResolution, TouchCapabilities,
};

/// A user agent used across fixtures.
pub const FIXTURE_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// A bag with every schema key populated with a fixed plausible value.
pub fn full_bag() -> AttributeBag {
    AttributeBag::builder()
        .set("userAgent", AttributeValue::text(FIXTURE_UA))
        .set("userAgentVersion", AttributeValue::text("Chrome-120"))
        .set(
            "screenResolution",
            AttributeValue::Resolution(ScreenResolution {
                width: 1920,
                height: 1080,
            }),
        )
        .set("screenOrientation", AttributeValue::text("landscape-primary"))
        .set("timezone", AttributeValue::text("Europe/Berlin"))
        .set("colorDepth", AttributeValue::Number(4.0))
        .set("deviceMemory", AttributeValue::Number(8.0))
        .set("hardwareConcurrency", AttributeValue::Number(8.0))
        .set("language", AttributeValue::text("en-US"))
        .set("canvasFingerprint", AttributeValue::text("9b2c6bdc0f1a4f0e"))
        .set("webglFingerprint", AttributeValue::text("77aa00c3d1f25c1b"))
        .set(
            "webglExtensions",
            AttributeValue::list([
                "ANGLE_instanced_arrays",
                "EXT_blend_minmax",
                "OES_texture_float",
            ]),
        )
        .set("audioFingerprint", AttributeValue::Number(44100.0))
        .set(
            "installedFonts",
            AttributeValue::list(["Arial", "Georgia", "Verdana"]),
        )
        .set(
            "touchSupport",
            AttributeValue::Touch(TouchCapabilities {
                max_touch_points: 0,
                touch_event: false,
                pointer_event: true,
            }),
        )
        .set("platform", AttributeValue::text("Linux x86_64"))
        .set("cookiesEnabled", AttributeValue::Bool(true))
        .set("localStorage", AttributeValue::Bool(true))
        .set("sessionStorage", AttributeValue::Bool(true))
        .set(
            "navigatorLanguages",
            AttributeValue::list(["de-DE", "en-US"]),
        )
        .set("doNotTrack", AttributeValue::text("unknown"))
        .set("plugins", AttributeValue::list(["PDF Viewer"]))
        .set("mimeTypes", AttributeValue::list(["application/pdf"]))
        .set("adBlockDetected", AttributeValue::Bool(false))
        .set(
            "mathPrecision",
            AttributeValue::MathMarks(MathPrecision {
                tan: 1.5574077246549023,
                sin: 0.8414709848078965,
                cos: 0.5403023058681398,
            }),
        )
        .set(
            "gpuRenderer",
            AttributeValue::text("ANGLE (Intel, Mesa Intel(R) Xe Graphics, OpenGL 4.6)"),
        )
        .set("jsEngine", AttributeValue::text("V8"))
        .build()
}

/// A bag with the first `populated` schema keys (in schema order) carrying
/// fixture values and the rest omitted.
pub fn sparse_bag(populated: usize) -> AttributeBag {
    let reference = full_bag();
    let mut builder = AttributeBag::builder();
    for spec in SCHEMA.iter().take(populated) {
        let value = reference.get(spec.key).expect("fixture covers schema").clone();
        builder = builder.set(spec.key, value);
    }
    builder.build()
}

/// Every schema key mapped to the explicit absent marker.
pub fn absent_bag() -> AttributeBag {
    let mut builder = AttributeBag::builder();
    for spec in SCHEMA {
        builder = builder.set(spec.key, AttributeValue::Absent);
    }
    builder.build()
}

/// A plausible fixed value for a schema kind.
pub fn sample_value(kind: Kind) -> AttributeValue {
    match kind {
        Kind::Bool => AttributeValue::Bool(true),
        Kind::Number => AttributeValue::Number(42.0),
        Kind::Text => AttributeValue::text("sample"),
        Kind::TextList => AttributeValue::list(["alpha", "beta"]),
        Kind::Scalar => AttributeValue::text("unknown"),
        Kind::Resolution => AttributeValue::Resolution(ScreenResolution {
            width: 1280,
            height: 720,
        }),
        Kind::Touch => AttributeValue::Touch(TouchCapabilities {
            max_touch_points: 0,
            touch_event: false,
            pointer_event: false,
        }),
        Kind::MathMarks => AttributeValue::MathMarks(MathPrecision {
            tan: 1.0,
            sin: 0.5,
            cos: 0.25,
        }),
    }
}

/// A value of the same kind that differs from the input, for sensitivity
/// corpora. Absent mutates to a present value.
pub fn mutated_value(value: &AttributeValue) -> AttributeValue {
    match value {
        AttributeValue::Absent => AttributeValue::Bool(true),
        AttributeValue::Bool(b) => AttributeValue::Bool(!b),
        AttributeValue::Number(n) => AttributeValue::Number(n + 1.0),
        AttributeValue::Text(s) => AttributeValue::Text(format!("{s}-mutated")),
        AttributeValue::List(items) => {
            let mut items = items.clone();
            items.push("mutation".to_string());
            AttributeValue::List(items)
        }
        AttributeValue::Resolution(r) => AttributeValue::Resolution(ScreenResolution {
            width: r.width + 1,
            height: r.height,
        }),
        AttributeValue::Touch(t) => AttributeValue::Touch(TouchCapabilities {
            max_touch_points: t.max_touch_points + 1,
            touch_event: t.touch_event,
            pointer_event: t.pointer_event,
        }),
        AttributeValue::MathMarks(m) => AttributeValue::MathMarks(MathPrecision {
            tan: m.tan + 0.5,
            sin: m.sin,
            cos: m.cos,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imprint_core::{confidence, validate_bag};

    #[test]
    fn test_full_bag_covers_schema() {
        let bag = full_bag();
        assert_eq!(bag.len(), SCHEMA.len());
        for spec in SCHEMA {
            assert!(bag.is_populated(spec.key), "key {}", spec.key);
        }
        assert!(validate_bag(&bag).is_ok());
        assert_eq!(confidence(&bag), 1.0);
    }

    #[test]
    fn test_sparse_bag_counts() {
        assert_eq!(sparse_bag(0).len(), 0);
        assert_eq!(sparse_bag(14).len(), 14);
        assert_eq!(sparse_bag(27), full_bag());
    }

    #[test]
    fn test_absent_bag_scores_zero() {
        let bag = absent_bag();
        assert_eq!(bag.len(), SCHEMA.len());
        assert_eq!(confidence(&bag), 0.0);
    }

    #[test]
    fn test_sample_values_conform() {
        for spec in SCHEMA {
            assert!(
                imprint_core::conforms(spec.kind, &sample_value(spec.kind)),
                "kind {:?}",
                spec.kind
            );
        }
    }

    #[test]
    fn test_mutation_changes_value_but_not_kind() {
        for spec in SCHEMA {
            let original = sample_value(spec.kind);
            let mutated = mutated_value(&original);
            assert_ne!(original, mutated, "kind {:?}", spec.kind);
            assert!(
                imprint_core::conforms(spec.kind, &mutated),
                "kind {:?}",
                spec.kind
            );
        }
    }
}
