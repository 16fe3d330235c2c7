//! Canonical textual form of an attribute bag.
//!
//! Two bags holding equal attribute values produce byte-identical output
//! regardless of key insertion order or the discovery order of any
//! sequence-valued attribute. The rules:
//!
//! - Keys are the union of the schema and the bag, sorted by byte order.
//! - A key that is missing, or mapped to the absent marker, emits `null`.
//! - Sequences are sorted case-sensitively by byte order before emission.
//! - Strings are escaped (`"`, `\`, and control characters), numbers use
//!   the shortest round-trip decimal form, records nest as canonical
//!   objects with sorted field names.
//!
//! The output is a JSON-shaped object text. The digest is computed over
//! exactly these bytes, so any change here changes every visitor id.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::attribute::{AttributeBag, AttributeValue};
use crate::schema::SCHEMA;

/// Intermediate value tree, normalized and ready for ordered emission.
enum Node<'a> {
    Null,
    Bool(bool),
    Number(f64),
    Text(&'a str),
    Array(Vec<Node<'a>>),
    Map(Vec<(&'a str, Node<'a>)>),
}

/// Serialize a bag into its canonical form.
pub fn canonical_form(bag: &AttributeBag) -> String {
    let mut keys: BTreeSet<&str> = SCHEMA.iter().map(|spec| spec.key).collect();
    keys.extend(bag.keys());

    let mut out = String::new();
    out.push('{');
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        encode_text(&mut out, key);
        out.push(':');
        let node = bag.get(key).map_or(Node::Null, normalize);
        encode_node(&mut out, &node);
    }
    out.push('}');
    out
}

/// Convert a value into a [`Node`], sorting sequences and flattening
/// records into field maps.
fn normalize(value: &AttributeValue) -> Node<'_> {
    match value {
        AttributeValue::Absent => Node::Null,
        AttributeValue::Bool(b) => Node::Bool(*b),
        AttributeValue::Number(n) => Node::Number(*n),
        AttributeValue::Text(s) => Node::Text(s),
        AttributeValue::List(items) => {
            let mut sorted: Vec<&str> = items.iter().map(String::as_str).collect();
            sorted.sort_unstable();
            Node::Array(sorted.into_iter().map(Node::Text).collect())
        }
        AttributeValue::Resolution(r) => Node::Map(vec![
            ("height", Node::Number(f64::from(r.height))),
            ("width", Node::Number(f64::from(r.width))),
        ]),
        AttributeValue::Touch(t) => Node::Map(vec![
            ("maxTouchPoints", Node::Number(f64::from(t.max_touch_points))),
            ("pointerEvent", Node::Bool(t.pointer_event)),
            ("touchEvent", Node::Bool(t.touch_event)),
        ]),
        AttributeValue::MathMarks(m) => Node::Map(vec![
            ("cos", Node::Number(m.cos)),
            ("sin", Node::Number(m.sin)),
            ("tan", Node::Number(m.tan)),
        ]),
    }
}

fn encode_node(out: &mut String, node: &Node<'_>) {
    match node {
        Node::Null => out.push_str("null"),
        Node::Bool(true) => out.push_str("true"),
        Node::Bool(false) => out.push_str("false"),
        Node::Number(n) => encode_number(out, *n),
        Node::Text(s) => encode_text(out, s),
        Node::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode_node(out, item);
            }
            out.push(']');
        }
        Node::Map(entries) => encode_map(out, entries),
    }
}

/// Emit a map with its keys in sorted order.
fn encode_map(out: &mut String, entries: &[(&str, Node<'_>)]) {
    let mut sorted: Vec<&(&str, Node<'_>)> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.0);

    out.push('{');
    for (i, (key, value)) in sorted.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        encode_text(out, key);
        out.push(':');
        encode_node(out, value);
    }
    out.push('}');
}

/// Shortest round-trip decimal form. Negative zero normalizes to zero;
/// non-finite values emit `null`.
fn encode_number(out: &mut String, n: f64) {
    if !n.is_finite() {
        out.push_str("null");
        return;
    }
    let n = if n == 0.0 { 0.0 } else { n };
    let _ = write!(out, "{n}");
}

/// Emit a quoted string with `"`, `\`, and control characters escaped.
fn encode_text(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
