//! Property-based round-trip coverage (§8: `decode(encode(v, d), d) == v`).
//!
//! Strings of exactly one UTF-8 byte are excluded from the generator: under
//! Draft-9 they encode via the `Char` promotion and decode back as
//! [`Value::Char`], not [`Value::String`] — a documented lossy conversion
//! (see `DESIGN.md`), not a round-trip failure.

use alloc::{format, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use crate::{Draft, ObjectMap, Value};

use super::roundtrip;

#[derive(Clone, Debug)]
struct SmallValue(Value);

impl Arbitrary for SmallValue {
    fn arbitrary(g: &mut Gen) -> Self {
        SmallValue(arbitrary_value(g, 3))
    }
}

fn arbitrary_value(g: &mut Gen, depth: u8) -> Value {
    if depth == 0 {
        return leaf(g);
    }
    match u8::arbitrary(g) % 4 {
        0 | 1 => leaf(g),
        2 => array(g, depth),
        _ => object(g, depth),
    }
}

fn leaf(g: &mut Gen) -> Value {
    match u8::arbitrary(g) % 6 {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => Value::Int(i64::arbitrary(g)),
        3 => Value::Float64(finite_f64(g)),
        4 => Value::String(arbitrary_string(g)),
        _ => Value::Huge(format!("{}", i64::arbitrary(g))),
    }
}

fn finite_f64(g: &mut Gen) -> f64 {
    let v = f64::arbitrary(g);
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// A string guaranteed not to be exactly one UTF-8 byte long.
fn arbitrary_string(g: &mut Gen) -> String {
    let mut len = usize::arbitrary(g) % 5;
    if len == 1 {
        len = 2;
    }
    (0..len).map(|_| char::arbitrary(g)).collect()
}

fn array(g: &mut Gen, depth: u8) -> Value {
    let len = usize::arbitrary(g) % 4;
    Value::Array((0..len).map(|_| arbitrary_value(g, depth - 1)).collect())
}

fn object(g: &mut Gen, depth: u8) -> Value {
    let len = usize::arbitrary(g) % 4;
    let mut map = ObjectMap::with_capacity(len);
    for _ in 0..len {
        map.push(arbitrary_string(g), arbitrary_value(g, depth - 1));
    }
    Value::Object(map)
}

#[quickcheck]
fn round_trip_draft8(value: SmallValue) -> bool {
    roundtrip(&value.0, Draft::Draft8) == value.0
}

#[quickcheck]
fn round_trip_draft9(value: SmallValue) -> bool {
    roundtrip(&value.0, Draft::Draft9) == value.0
}

#[quickcheck]
fn canonical_integer_width_draft8(n: i64) -> bool {
    let mut out = Vec::new();
    crate::encode(&Value::Int(n), &mut out, Draft::Draft8, &crate::CodecOptions::default()).unwrap();
    let expected_marker = if (0..=127).contains(&n) {
        b'B'
    } else if (i64::from(i16::MIN)..=i64::from(i16::MAX)).contains(&n) {
        b'i'
    } else if (i64::from(i32::MIN)..=i64::from(i32::MAX)).contains(&n) {
        b'I'
    } else {
        b'l'
    };
    out[0] == expected_marker
}

#[quickcheck]
fn canonical_integer_width_draft9(n: i64) -> bool {
    let mut out = Vec::new();
    crate::encode(&Value::Int(n), &mut out, Draft::Draft9, &crate::CodecOptions::default()).unwrap();
    let expected_marker = if (-128..=127).contains(&n) {
        b'i'
    } else if (0..=255).contains(&n) {
        b'U'
    } else if (i64::from(i16::MIN)..=i64::from(i16::MAX)).contains(&n) {
        b'I'
    } else if (i64::from(i32::MIN)..=i64::from(i32::MAX)).contains(&n) {
        b'l'
    } else {
        b'L'
    };
    out[0] == expected_marker
}
