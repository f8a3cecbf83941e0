//! Walks a [`Value`] tree (or a lazy iterator, for [`encode_streamed`]) and
//! writes UBJSON bytes through a [`ByteSink`].

use alloc::{format, string::String, vec::Vec};

use crate::{
    draft::Draft,
    draft8, draft9,
    error::{CodecError, Result},
    options::{ByteStringMode, CodecOptions},
    sink::ByteSink,
    token::Container,
    value::Value,
};

/// Bytes buffered locally before flushing to the sink. Keeps peak memory
/// bounded by nesting depth rather than total output size (§5), without
/// threading the sink through every leaf-level `push_*` call.
const FLUSH_THRESHOLD: usize = 64 * 1024;

fn flush_if_large<W: ByteSink>(buf: &mut Vec<u8>, sink: &mut W) -> Result<()> {
    if buf.len() >= FLUSH_THRESHOLD {
        sink.write(buf)?;
        buf.clear();
    }
    Ok(())
}

/// Encodes `value` under `draft` and writes it to `sink`.
pub fn encode<W: ByteSink>(value: &Value, sink: &mut W, draft: Draft, options: &CodecOptions) -> Result<()> {
    let mut buf = Vec::new();
    encode_value(&mut buf, draft, options, value, 0)?;
    sink.write(&buf)
}

/// Encodes `values` as a streamed array: the framing §4.3 reserves for a
/// lazy, length-unknown source, rather than the sized form [`encode`] picks
/// for a materialized [`Value::Array`].
pub fn encode_streamed<W: ByteSink>(
    values: impl Iterator<Item = Value>,
    sink: &mut W,
    draft: Draft,
    options: &CodecOptions,
) -> Result<()> {
    let mut buf = Vec::new();
    match draft {
        Draft::Draft8 => draft8::push_streamed_open(&mut buf, Container::Array),
        Draft::Draft9 => draft9::push_streamed_open(&mut buf, Container::Array),
    }
    for value in values {
        encode_value(&mut buf, draft, options, &value, 1)?;
        flush_if_large(&mut buf, sink)?;
    }
    match draft {
        Draft::Draft8 => draft8::push_close(&mut buf),
        Draft::Draft9 => draft9::push_close(&mut buf, Container::Array),
    }
    sink.write(&buf)
}

fn encode_value(
    out: &mut Vec<u8>,
    draft: Draft,
    options: &CodecOptions,
    value: &Value,
    depth: usize,
) -> Result<()> {
    if depth > options.max_depth {
        return Err(CodecError::EncodeError {
            reason: format!("nesting exceeds max_depth {}", options.max_depth),
        });
    }
    match value {
        Value::Null => out.push(null_marker(draft)),
        Value::NoOp => out.push(noop_marker(draft)),
        Value::Bool(b) => out.push(bool_marker(draft, *b)),
        Value::Int(v) => match draft {
            Draft::Draft8 => draft8::push_int(out, *v),
            Draft::Draft9 => draft9::push_int(out, *v),
        },
        Value::Huge(digits) => match draft {
            Draft::Draft8 => draft8::push_huge(out, digits),
            Draft::Draft9 => draft9::push_huge(out, digits),
        },
        Value::Float32(f) => push_float(out, draft, f64::from(*f)),
        Value::Float64(f) => push_float(out, draft, *f),
        Value::Char(c) => encode_char(out, draft, *c)?,
        Value::String(s) => encode_text(out, draft, s),
        Value::Bytes(bytes) => encode_bytes(out, draft, options, bytes)?,
        Value::Array(items) => {
            encode_container_header(out, draft, Container::Array, items.len());
            for item in items {
                encode_value(out, draft, options, item, depth + 1)?;
            }
        }
        Value::Object(map) => {
            encode_container_header(out, draft, Container::Object, map.len());
            for (key, item) in map.iter() {
                push_key(out, draft, key)?;
                encode_value(out, draft, options, item, depth + 1)?;
            }
        }
    }
    Ok(())
}

fn null_marker(draft: Draft) -> u8 {
    match draft {
        Draft::Draft8 => draft8::NULL,
        Draft::Draft9 => draft9::NULL,
    }
}

fn noop_marker(draft: Draft) -> u8 {
    match draft {
        Draft::Draft8 => draft8::NOOP,
        Draft::Draft9 => draft9::NOOP,
    }
}

fn bool_marker(draft: Draft, b: bool) -> u8 {
    match (draft, b) {
        (Draft::Draft8, true) => draft8::TRUE,
        (Draft::Draft8, false) => draft8::FALSE,
        (Draft::Draft9, true) => draft9::TRUE,
        (Draft::Draft9, false) => draft9::FALSE,
    }
}

fn push_float(out: &mut Vec<u8>, draft: Draft, v: f64) {
    if !v.is_finite() {
        out.push(null_marker(draft));
        return;
    }
    match draft {
        Draft::Draft8 => draft8::push_float(out, v),
        Draft::Draft9 => draft9::push_float(out, v),
    }
}

/// Encodes `c` via Draft-9's one-byte `Char` marker. Draft-8 has no `Char`
/// type at all; a code point that doesn't fit a single byte has no `Char`
/// representation in either draft.
fn encode_char(out: &mut Vec<u8>, draft: Draft, c: char) -> Result<()> {
    match draft {
        Draft::Draft8 => Err(CodecError::EncodeError {
            reason: format!("Char {c:?} has no representation under Draft-8"),
        }),
        Draft::Draft9 => {
            if c.is_ascii() {
                draft9::push_char(out, c);
                Ok(())
            } else {
                Err(CodecError::EncodeError {
                    reason: format!("Char {c:?} does not fit a single byte"),
                })
            }
        }
    }
}

/// Encodes `s` as text, applying Draft-9's single-byte `Char` promotion
/// (§4.3: "a single-code-point string whose UTF-8 is exactly one byte MAY be
/// encoded as `C`"). A one-*byte* UTF-8 string is necessarily a one-*char*
/// ASCII string, so the byte-length check alone decides it.
fn encode_text(out: &mut Vec<u8>, draft: Draft, s: &str) {
    match draft {
        Draft::Draft8 => draft8::push_string(out, s),
        Draft::Draft9 => {
            if s.len() == 1 {
                draft9::push_char(out, s.chars().next().expect("len() == 1 implies one char"));
            } else {
                draft9::push_string(out, s);
            }
        }
    }
}

/// Encodes a byte string per `options.byte_string_mode` (§9's resolution of
/// the Draft-9 byte-string/text-string ambiguity). Draft-8 has always
/// routed byte strings through the text path, so the mode only changes
/// Draft-9's behavior.
fn encode_bytes(out: &mut Vec<u8>, draft: Draft, options: &CodecOptions, bytes: &[u8]) -> Result<()> {
    let as_text = match draft {
        Draft::Draft8 => draft8::encode_byte_string_as_text(options.byte_string_mode),
        Draft::Draft9 => options.byte_string_mode == ByteStringMode::AsText,
    };
    if !as_text {
        return Err(CodecError::EncodeError {
            reason: String::from("byte string rejected by ByteStringMode::Reject"),
        });
    }
    let s = core::str::from_utf8(bytes).map_err(|e| CodecError::EncodeError {
        reason: format!("byte string is not valid UTF-8: {e}"),
    })?;
    encode_text(out, draft, s);
    Ok(())
}

fn encode_container_header(out: &mut Vec<u8>, draft: Draft, container: Container, len: usize) {
    match draft {
        Draft::Draft8 => draft8::push_sized_header(out, container, len),
        Draft::Draft9 => draft9::push_sized_header(out, container, len),
    }
}

fn push_key(out: &mut Vec<u8>, draft: Draft, key: &str) -> Result<()> {
    match draft {
        Draft::Draft8 => draft8::push_key(out, key),
        Draft::Draft9 => {
            draft9::push_key(out, key);
            Ok(())
        }
    }
}
