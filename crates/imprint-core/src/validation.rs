//! Advisory kind-conformance checks for assembled bags.
//!
//! `compute_fingerprint` is total and never needs this; callers ingesting
//! bags from an untrusted assembler can check the §3-style type contract
//! explicitly before trusting the confidence score.

use crate::attribute::{AttributeBag, AttributeValue};
use crate::error::ValidationError;
use crate::schema::{spec_for, Kind};

/// Whether a value conforms to a schema kind.
///
/// The absent marker conforms to every kind; `Scalar` accepts strings,
/// numbers, and booleans.
pub fn conforms(kind: Kind, value: &AttributeValue) -> bool {
    use AttributeValue as V;
    match (kind, value) {
        (_, V::Absent) => true,
        (Kind::Bool, V::Bool(_)) => true,
        (Kind::Number, V::Number(_)) => true,
        (Kind::Text, V::Text(_)) => true,
        (Kind::TextList, V::List(_)) => true,
        (Kind::Scalar, V::Bool(_) | V::Number(_) | V::Text(_)) => true,
        (Kind::Resolution, V::Resolution(_)) => true,
        (Kind::Touch, V::Touch(_)) => true,
        (Kind::MathMarks, V::MathMarks(_)) => true,
        _ => false,
    }
}

/// Check every schema-known key in the bag against its registered kind.
///
/// Keys outside the schema always pass: they are canonicalized as-is and
/// excluded from confidence, so no kind is expected of them.
pub fn validate_bag(bag: &AttributeBag) -> Result<(), ValidationError> {
    for (key, value) in bag.iter() {
        if let Some(spec) = spec_for(key) {
            if !conforms(spec.kind, value) {
                return Err(ValidationError::KindMismatch {
                    key: key.to_string(),
                    expected: spec.kind,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::ScreenResolution;

    #[test]
    fn test_absent_conforms_to_every_kind() {
        for kind in [
            Kind::Bool,
            Kind::Number,
            Kind::Text,
            Kind::TextList,
            Kind::Scalar,
            Kind::Resolution,
            Kind::Touch,
            Kind::MathMarks,
        ] {
            assert!(conforms(kind, &AttributeValue::Absent));
        }
    }

    #[test]
    fn test_scalar_accepts_sentinel_forms() {
        assert!(conforms(Kind::Scalar, &AttributeValue::text("unknown")));
        assert!(conforms(Kind::Scalar, &AttributeValue::Number(8.0)));
        assert!(conforms(Kind::Scalar, &AttributeValue::Bool(false)));
        assert!(!conforms(Kind::Scalar, &AttributeValue::list(["x"])));
    }

    #[test]
    fn test_valid_bag_passes() {
        let bag = AttributeBag::builder()
            .set("jsEngine", AttributeValue::text("V8"))
            .set("deviceMemory", AttributeValue::text("unknown"))
            .set(
                "screenResolution",
                AttributeValue::Resolution(ScreenResolution {
                    width: 1920,
                    height: 1080,
                }),
            )
            .build();

        assert!(validate_bag(&bag).is_ok());
    }

    #[test]
    fn test_kind_mismatch_reported() {
        let bag = AttributeBag::builder()
            .set("cookiesEnabled", AttributeValue::text("yes"))
            .build();

        let err = validate_bag(&bag).unwrap_err();
        assert_eq!(
            err,
            ValidationError::KindMismatch {
                key: "cookiesEnabled".to_string(),
                expected: Kind::Bool,
            }
        );
    }

    #[test]
    fn test_unknown_keys_pass() {
        let bag = AttributeBag::builder()
            .set("experimentalSignal", AttributeValue::Number(1.0))
            .build();

        assert!(validate_bag(&bag).is_ok());
    }
}
