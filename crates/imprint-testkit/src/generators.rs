//! Proptest generators for property-based testing.

use proptest::prelude::*;

use imprint_core::schema::SCHEMA;
use imprint_core::{
    AttributeBag, AttributeValue, Kind, MathPrecision, ScreenResolution, TouchCapabilities,
};

/// Generate a value conforming to a schema kind.
pub fn value_for(kind: Kind) -> BoxedStrategy<AttributeValue> {
    match kind {
        Kind::Bool => any::<bool>().prop_map(AttributeValue::Bool).boxed(),
        Kind::Number => finite_number().prop_map(AttributeValue::Number).boxed(),
        Kind::Text => text().prop_map(AttributeValue::Text).boxed(),
        Kind::TextList => prop::collection::vec(text(), 0..6)
            .prop_map(AttributeValue::List)
            .boxed(),
        Kind::Scalar => prop_oneof![
            any::<bool>().prop_map(AttributeValue::Bool),
            finite_number().prop_map(AttributeValue::Number),
            Just(AttributeValue::text("unknown")),
        ]
        .boxed(),
        Kind::Resolution => (320u32..8192, 240u32..4320)
            .prop_map(|(width, height)| {
                AttributeValue::Resolution(ScreenResolution { width, height })
            })
            .boxed(),
        Kind::Touch => (0u32..11, any::<bool>(), any::<bool>())
            .prop_map(|(max_touch_points, touch_event, pointer_event)| {
                AttributeValue::Touch(TouchCapabilities {
                    max_touch_points,
                    touch_event,
                    pointer_event,
                })
            })
            .boxed(),
        Kind::MathMarks => (finite_number(), finite_number(), finite_number())
            .prop_map(|(tan, sin, cos)| {
                AttributeValue::MathMarks(MathPrecision { tan, sin, cos })
            })
            .boxed(),
    }
}

/// Printable-ASCII text of bounded length.
pub fn text() -> impl Strategy<Value = String> {
    "[ -~]{0,24}".prop_map(String::from)
}

/// Finite numbers with an exact binary representation at quarter steps, so
/// equality assertions stay exact.
pub fn finite_number() -> impl Strategy<Value = f64> {
    (-40_000i64..40_000).prop_map(|n| n as f64 / 4.0)
}

/// Parameters for generating a bag: which schema keys are populated and a
/// seed stream for their values.
#[derive(Debug, Clone)]
pub struct BagParams {
    /// Indices into [`SCHEMA`]; duplicates are ignored.
    pub populated: Vec<usize>,
    pub seed: u64,
}

impl Arbitrary for BagParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            prop::collection::vec(0..SCHEMA.len(), 0..=SCHEMA.len()),
            any::<u64>(),
        )
            .prop_map(|(populated, seed)| BagParams { populated, seed })
            .boxed()
    }
}

/// The entries a params value describes, in schema order.
pub fn entries_from_params(params: &BagParams) -> Vec<(String, AttributeValue)> {
    let mut indices: Vec<usize> = params.populated.clone();
    indices.sort_unstable();
    indices.dedup();

    indices
        .into_iter()
        .map(|i| {
            let spec = &SCHEMA[i];
            let value = value_from_seed(spec.kind, params.seed.wrapping_add(i as u64));
            (spec.key.to_string(), value)
        })
        .collect()
}

/// Build a bag from parameters.
pub fn bag_from_params(params: &BagParams) -> AttributeBag {
    entries_from_params(params).into_iter().collect()
}

/// Deterministic pseudo-value for a kind, derived from a seed.
pub fn value_from_seed(kind: Kind, seed: u64) -> AttributeValue {
    let x = mix(seed);
    match kind {
        Kind::Bool => AttributeValue::Bool(x & 1 == 0),
        Kind::Number => AttributeValue::Number((x % 40_000) as f64 / 4.0),
        Kind::Text => AttributeValue::Text(format!("sig-{x:016x}")),
        Kind::TextList => {
            let len = (x % 4) as usize;
            AttributeValue::List(
                (0..len)
                    .map(|i| format!("item-{:08x}-{i}", x as u32))
                    .collect(),
            )
        }
        Kind::Scalar => match x % 3 {
            0 => AttributeValue::Bool(x & 4 == 0),
            1 => AttributeValue::Number((x % 64) as f64),
            _ => AttributeValue::text("unknown"),
        },
        Kind::Resolution => AttributeValue::Resolution(ScreenResolution {
            width: 320 + (x % 1600) as u32,
            height: 240 + (x % 900) as u32,
        }),
        Kind::Touch => AttributeValue::Touch(TouchCapabilities {
            max_touch_points: (x % 5) as u32,
            touch_event: x & 2 == 0,
            pointer_event: x & 8 == 0,
        }),
        Kind::MathMarks => AttributeValue::MathMarks(MathPrecision {
            tan: (x % 997) as f64 / 4.0,
            sin: (x % 499) as f64 / 8.0,
            cos: (x % 251) as f64 / 16.0,
        }),
    }
}

/// splitmix64-style bit mixer.
fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imprint_core::{compute_fingerprint, validate_bag};

    proptest! {
        #[test]
        fn test_fingerprint_deterministic(params: BagParams) {
            let a = compute_fingerprint(bag_from_params(&params));
            let b = compute_fingerprint(bag_from_params(&params));

            prop_assert_eq!(a.visitor_id, b.visitor_id);
            prop_assert_eq!(a.confidence, b.confidence);
        }

        #[test]
        fn test_insertion_order_irrelevant(params: BagParams) {
            let entries = entries_from_params(&params);
            let forward: AttributeBag = entries.clone().into_iter().collect();
            let reversed: AttributeBag = entries.into_iter().rev().collect();

            prop_assert_eq!(
                compute_fingerprint(forward).visitor_id,
                compute_fingerprint(reversed).visitor_id
            );
        }

        #[test]
        fn test_sequence_order_irrelevant(params: BagParams) {
            let entries = entries_from_params(&params);
            let shuffled: Vec<(String, AttributeValue)> = entries
                .clone()
                .into_iter()
                .map(|(key, value)| match value {
                    AttributeValue::List(mut items) => {
                        items.reverse();
                        (key, AttributeValue::List(items))
                    }
                    other => (key, other),
                })
                .collect();

            let a: AttributeBag = entries.into_iter().collect();
            let b: AttributeBag = shuffled.into_iter().collect();

            prop_assert_eq!(
                compute_fingerprint(a).visitor_id,
                compute_fingerprint(b).visitor_id
            );
        }

        #[test]
        fn test_absent_padding_is_equivalent(params: BagParams) {
            let bare = bag_from_params(&params);

            // Same bag with every unpopulated schema key spelled out as
            // an explicit absent marker.
            let mut builder = AttributeBag::builder();
            for (key, value) in bare.iter() {
                builder = builder.set(key, value.clone());
            }
            for spec in SCHEMA {
                if bare.get(spec.key).is_none() {
                    builder = builder.set(spec.key, AttributeValue::Absent);
                }
            }
            let padded = builder.build();

            let a = compute_fingerprint(bare);
            let b = compute_fingerprint(padded);
            prop_assert_eq!(a.visitor_id, b.visitor_id);
            prop_assert_eq!(a.confidence, b.confidence);
        }

        #[test]
        fn test_confidence_bounds(params: BagParams) {
            let result = compute_fingerprint(bag_from_params(&params));
            prop_assert!(result.confidence >= 0.0);
            prop_assert!(result.confidence <= 1.0);
        }

        #[test]
        fn test_generated_bags_conform(params: BagParams) {
            prop_assert!(validate_bag(&bag_from_params(&params)).is_ok());
        }
    }
}
