//! Pretty-printer tests (§8: determinism and pretty-print-over-decode
//! idempotence).
//!
//! The idempotence check is scoped to sized containers: decoding a streamed
//! container materializes it into a plain `Value::Array`/`Value::Object`,
//! which has no way to remember that its wire form omitted a length —
//! `pprint_value` on the decoded tree necessarily renders a concrete count.
//! Literal text equality with `pprint` on the original bytes therefore only
//! holds when the source was sized to begin with; see `DESIGN.md`.

use alloc::{string::String, vec, vec::Vec};

use crate::{decode, encode, encode_streamed, pprint, pprint_value, CodecOptions, Draft, ObjectMap, SliceSource, Value};

#[test]
fn pprint_sized_array_draft8() {
    let value = Value::Array(vec![Value::Int(1), Value::Int(2)]);
    let mut bytes = Vec::new();
    encode(&value, &mut bytes, Draft::Draft8, &CodecOptions::default()).unwrap();

    let mut rendered = Vec::new();
    pprint(SliceSource::new(&bytes), &mut rendered, Draft::Draft8, &CodecOptions::default()).unwrap();

    assert_eq!(
        String::from_utf8(rendered).unwrap(),
        "array 2\n    1\n    2\nend\n"
    );
}

#[test]
fn pprint_streamed_array_bytes_draft9() {
    let mut bytes = Vec::new();
    encode_streamed(
        [1i64, 2].into_iter().map(Value::Int),
        &mut bytes,
        Draft::Draft9,
        &CodecOptions::default(),
    )
    .unwrap();

    insta::assert_debug_snapshot!(bytes, @"[91, 105, 1, 105, 2, 93]");

    let mut rendered = Vec::new();
    pprint(SliceSource::new(&bytes), &mut rendered, Draft::Draft9, &CodecOptions::default()).unwrap();
    assert_eq!(
        String::from_utf8(rendered).unwrap(),
        "array streamed\n    1\n    2\nend\n"
    );
}

#[test]
fn pprint_is_deterministic() {
    let value = Value::Array(vec![Value::String(String::from("a")), Value::Null]);
    let mut bytes = Vec::new();
    encode(&value, &mut bytes, Draft::Draft9, &CodecOptions::default()).unwrap();

    let mut first = Vec::new();
    pprint(SliceSource::new(&bytes), &mut first, Draft::Draft9, &CodecOptions::default()).unwrap();
    let mut second = Vec::new();
    pprint(SliceSource::new(&bytes), &mut second, Draft::Draft9, &CodecOptions::default()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn pprint_over_decode_matches_pprint_for_sized_containers() {
    let mut object = ObjectMap::new();
    object.push(String::from("a"), Value::Int(1));
    object.push(String::from("b"), Value::Array(vec![Value::Bool(true)]));
    let value = Value::Object(object);

    let mut bytes = Vec::new();
    encode(&value, &mut bytes, Draft::Draft9, &CodecOptions::default()).unwrap();

    let mut from_tokens = Vec::new();
    pprint(SliceSource::new(&bytes), &mut from_tokens, Draft::Draft9, &CodecOptions::default()).unwrap();

    let decoded = decode(SliceSource::new(&bytes), Draft::Draft9, &CodecOptions::default()).unwrap();
    let mut from_value = Vec::new();
    pprint_value(&decoded, &mut from_value).unwrap();

    assert_eq!(from_tokens, from_value);
}
