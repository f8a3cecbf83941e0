//! Boundary cases named in §8: empty containers, max-width integers, string
//! length-marker thresholds, deep nesting, and a zero-child streamed
//! container.

use alloc::{string::String, vec, vec::Vec};

use crate::{decode, encode, CodecError, CodecOptions, Draft, ObjectMap, SliceSource, Value};

use super::roundtrip;

#[test]
fn empty_array_round_trips_both_drafts() {
    let empty = Value::Array(vec![]);
    assert_eq!(roundtrip(&empty, Draft::Draft8), empty);
    assert_eq!(roundtrip(&empty, Draft::Draft9), empty);
}

#[test]
fn empty_object_round_trips_both_drafts() {
    let empty = Value::Object(ObjectMap::new());
    assert_eq!(roundtrip(&empty, Draft::Draft8), empty);
    assert_eq!(roundtrip(&empty, Draft::Draft9), empty);
}

#[test]
fn empty_string_round_trips_both_drafts() {
    let value = Value::String(String::new());
    assert_eq!(roundtrip(&value, Draft::Draft8), value);
    // A zero-byte string can't be promoted to Char (promotion needs exactly
    // one byte), so it stays a String under Draft-9 too.
    assert_eq!(roundtrip(&value, Draft::Draft9), value);
}

#[test]
fn max_width_integers_round_trip() {
    for &n in &[i64::MIN, i64::MAX, i64::from(i32::MIN), i64::from(i32::MAX), 0] {
        assert_eq!(roundtrip(&Value::Int(n), Draft::Draft8), Value::Int(n));
        assert_eq!(roundtrip(&Value::Int(n), Draft::Draft9), Value::Int(n));
    }
}

#[test]
fn draft8_string_length_marker_switches_at_256_bytes() {
    // The short-form length byte holds the full 0..=255 range (unlike a
    // container header's short form, which reserves 0xFF to mean
    // "streamed"), so a 255-byte string still takes the narrower `s` marker
    // and only 256 bytes forces the long `S` form.
    for &len in &[254usize, 255, 256] {
        let s = "a".repeat(len);
        let mut out = Vec::new();
        encode(
            &Value::String(s.clone()),
            &mut out,
            Draft::Draft8,
            &CodecOptions::default(),
        )
        .unwrap();
        assert_eq!(out[0], if len <= 255 { b's' } else { b'S' });

        let decoded = decode(SliceSource::new(&out), Draft::Draft8, &CodecOptions::default()).unwrap();
        assert_eq!(decoded, Value::String(s));
    }
}

#[test]
fn draft8_array_length_marker_switches_at_255_items() {
    // A sized container header's short form reserves 0xFF for the streamed
    // sentinel, so its cutoff is one lower than String/Huge's.
    for &len in &[254usize, 255] {
        let value = Value::Array((0..len).map(|_| Value::Null).collect());
        let mut out = Vec::new();
        encode(&value, &mut out, Draft::Draft8, &CodecOptions::default()).unwrap();
        assert_eq!(out[0], if len < 255 { b'a' } else { b'A' });

        let decoded = decode(SliceSource::new(&out), Draft::Draft8, &CodecOptions::default()).unwrap();
        assert_eq!(decoded, value);
    }
}

#[test]
fn deeply_nested_array_round_trips() {
    let mut value = Value::Array(vec![Value::Int(0)]);
    for _ in 0..64 {
        value = Value::Array(vec![value]);
    }
    let options = CodecOptions {
        max_depth: 200,
        ..CodecOptions::default()
    };
    let mut bytes = Vec::new();
    encode(&value, &mut bytes, Draft::Draft9, &options).unwrap();
    let decoded = decode(SliceSource::new(&bytes), Draft::Draft9, &options).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn nesting_beyond_max_depth_is_rejected_on_encode() {
    let mut value = Value::Int(0);
    for _ in 0..10 {
        value = Value::Array(vec![value]);
    }
    let options = CodecOptions {
        max_depth: 3,
        ..CodecOptions::default()
    };
    let mut out = Vec::new();
    let err = encode(&value, &mut out, Draft::Draft9, &options).unwrap_err();
    assert!(matches!(err, CodecError::EncodeError { .. }));
}

#[test]
fn nesting_beyond_max_depth_is_rejected_on_decode() {
    // 10 levels deep, encoded with a generous depth limit, then decoded
    // against a strict one.
    let mut value = Value::Int(0);
    for _ in 0..10 {
        value = Value::Array(vec![value]);
    }
    let generous = CodecOptions::default();
    let mut bytes = Vec::new();
    encode(&value, &mut bytes, Draft::Draft9, &generous).unwrap();

    let strict = CodecOptions {
        max_depth: 3,
        ..CodecOptions::default()
    };
    let err = decode(SliceSource::new(&bytes), Draft::Draft9, &strict).unwrap_err();
    assert!(matches!(err, CodecError::DepthExceeded { .. }));
}

#[test]
fn draft8_object_key_over_255_bytes_is_rejected() {
    let mut object = ObjectMap::new();
    object.push("a".repeat(256), Value::Null);
    let value = Value::Object(object);

    let mut out = Vec::new();
    let err = encode(&value, &mut out, Draft::Draft8, &CodecOptions::default()).unwrap_err();
    assert!(matches!(err, CodecError::EncodeError { .. }));
}

#[test]
fn draft9_object_key_over_255_bytes_round_trips() {
    // Draft-9 keys carry a variable-width length token, so they aren't
    // bound by Draft-8's single-byte key-length limit.
    let mut object = ObjectMap::new();
    object.push("a".repeat(256), Value::Null);
    let value = Value::Object(object);
    assert_eq!(roundtrip(&value, Draft::Draft9), value);
}

#[test]
fn streamed_container_with_zero_children_round_trips() {
    let mut out = Vec::new();
    crate::encode_streamed(
        core::iter::empty::<Value>(),
        &mut out,
        Draft::Draft9,
        &CodecOptions::default(),
    )
    .unwrap();
    assert_eq!(out, b"[]");

    let decoded = decode(SliceSource::new(&out), Draft::Draft9, &CodecOptions::default()).unwrap();
    assert_eq!(decoded, Value::Array(vec![]));
}
