//! Draft-8 marker table (§6, §4.2, §4.3).
//!
//! Four integer widths (`B` uint8, `i` int16, `I` int32, `l` int64), no
//! `Char` type, and length-width pairs of markers for strings/Huge/arrays
//! /objects rather than Draft-9's single marker plus nested length token.

use alloc::{string::String, vec::Vec};

use crate::{
    error::{CodecError, Result},
    options::ByteStringMode,
    source::ByteSource,
    token::{Container, MarkerAction, Scalar},
    wire,
};

pub(crate) const NULL: u8 = b'Z';
pub(crate) const NOOP: u8 = b'N';
pub(crate) const TRUE: u8 = b'T';
pub(crate) const FALSE: u8 = b'F';
pub(crate) const UINT8: u8 = b'B';
pub(crate) const INT16: u8 = b'i';
pub(crate) const INT32: u8 = b'I';
pub(crate) const INT64: u8 = b'l';
pub(crate) const FLOAT32: u8 = b'd';
pub(crate) const FLOAT64: u8 = b'D';
pub(crate) const HUGE_SHORT: u8 = b'h';
pub(crate) const HUGE_LONG: u8 = b'H';
pub(crate) const STR_SHORT: u8 = b's';
pub(crate) const STR_LONG: u8 = b'S';
pub(crate) const ARRAY_SHORT: u8 = b'a';
pub(crate) const ARRAY_LONG: u8 = b'A';
pub(crate) const OBJECT_SHORT: u8 = b'o';
pub(crate) const OBJECT_LONG: u8 = b'O';
pub(crate) const STREAM_SENTINEL: u8 = 0xFF;
pub(crate) const CLOSE: u8 = b'E';

fn read_short_len<S: ByteSource>(src: &mut S, context: &'static str) -> Result<usize> {
    Ok(src.read(1, context)?[0] as usize)
}

fn read_long_len<S: ByteSource>(src: &mut S, context: &'static str) -> Result<usize> {
    let bytes = src.read(4, context)?;
    Ok(wire::be_u32(&bytes) as usize)
}

fn read_huge<S: ByteSource>(src: &mut S, len: usize) -> Result<String> {
    let offset = src.offset();
    let bytes = src.read(len, "Huge payload")?;
    let text = String::from_utf8(bytes).map_err(|e| CodecError::DecodeError {
        offset,
        reason: alloc::format!("Huge payload is not valid UTF-8: {e}"),
    })?;
    if !wire::is_decimal_numeral(&text) {
        return Err(CodecError::DecodeError {
            offset,
            reason: alloc::format!("Huge payload {text:?} is not ASCII decimal text"),
        });
    }
    Ok(text)
}

fn read_string<S: ByteSource>(src: &mut S, len: usize) -> Result<String> {
    let bytes = src.read(len, "String payload")?;
    String::from_utf8(bytes).map_err(|e| CodecError::DecodeError {
        offset: src.offset(),
        reason: alloc::format!("String payload is not valid UTF-8: {e}"),
    })
}

/// Reads a bare (marker-less) length-prefixed string, used for object keys,
/// which carry no `s`/`S` type marker since their type is always string.
pub(crate) fn decode_key<S: ByteSource>(src: &mut S) -> Result<String> {
    let len = read_short_len(src, "object key length")?;
    read_string(src, len)
}

pub(crate) fn decode_marker<S: ByteSource>(marker: u8, src: &mut S) -> Result<MarkerAction> {
    let action = match marker {
        NULL => MarkerAction::Scalar(Scalar::Null),
        NOOP => MarkerAction::Scalar(Scalar::NoOp),
        TRUE => MarkerAction::Scalar(Scalar::Bool(true)),
        FALSE => MarkerAction::Scalar(Scalar::Bool(false)),
        UINT8 => {
            let b = src.read(1, "uint8 payload")?[0];
            MarkerAction::Scalar(Scalar::Int(i64::from(b)))
        }
        INT16 => {
            let b = src.read(2, "int16 payload")?;
            MarkerAction::Scalar(Scalar::Int(i64::from(wire::be_i16(&b))))
        }
        INT32 => {
            let b = src.read(4, "int32 payload")?;
            MarkerAction::Scalar(Scalar::Int(i64::from(wire::be_i32(&b))))
        }
        INT64 => {
            let b = src.read(8, "int64 payload")?;
            MarkerAction::Scalar(Scalar::Int(wire::be_i64(&b)))
        }
        FLOAT32 => {
            let b = src.read(4, "float32 payload")?;
            MarkerAction::Scalar(Scalar::Float32(wire::be_f32(&b)))
        }
        FLOAT64 => {
            let b = src.read(8, "float64 payload")?;
            MarkerAction::Scalar(Scalar::Float64(wire::be_f64(&b)))
        }
        HUGE_SHORT => {
            let len = read_short_len(src, "Huge short length")?;
            MarkerAction::Scalar(Scalar::Huge(read_huge(src, len)?))
        }
        HUGE_LONG => {
            let len = read_long_len(src, "Huge long length")?;
            MarkerAction::Scalar(Scalar::Huge(read_huge(src, len)?))
        }
        STR_SHORT => {
            let len = read_short_len(src, "String short length")?;
            MarkerAction::Scalar(Scalar::Str(read_string(src, len)?))
        }
        STR_LONG => {
            let len = read_long_len(src, "String long length")?;
            MarkerAction::Scalar(Scalar::Str(read_string(src, len)?))
        }
        ARRAY_SHORT => {
            let len_byte = src.read(1, "array short length")?[0];
            if len_byte == STREAM_SENTINEL {
                MarkerAction::ArrayOpen(None)
            } else {
                MarkerAction::ArrayOpen(Some(u64::from(len_byte)))
            }
        }
        ARRAY_LONG => {
            let len = read_long_len(src, "array long length")?;
            MarkerAction::ArrayOpen(Some(len as u64))
        }
        OBJECT_SHORT => {
            let len_byte = src.read(1, "object short length")?[0];
            if len_byte == STREAM_SENTINEL {
                MarkerAction::ObjectOpen(None)
            } else {
                MarkerAction::ObjectOpen(Some(u64::from(len_byte)))
            }
        }
        OBJECT_LONG => {
            let len = read_long_len(src, "object long length")?;
            MarkerAction::ObjectOpen(Some(len as u64))
        }
        CLOSE => MarkerAction::Close,
        _ => {
            return Err(CodecError::MarkerError {
                marker,
                offset: src.offset(),
                reason: "not a valid Draft-8 marker",
            });
        }
    };
    Ok(action)
}

/// Encodes an integer with the narrowest Draft-8 marker that admits it.
///
/// `B` is emitted only for `0..=127`: although its wire width could hold any
/// byte `0..=255`, canonical encoding restricts it to the nonnegative range
/// that also fits signed 7-bit, so that a byte with its high bit set is
/// never ambiguous between "this crate's `B`" and a signed `int8` a
/// different decoder might assume. See `DESIGN.md`.
pub(crate) fn push_int(out: &mut Vec<u8>, v: i64) {
    if (0..=127).contains(&v) {
        out.push(UINT8);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        out.push(v as u8);
    } else if (i64::from(i16::MIN)..=i64::from(i16::MAX)).contains(&v) {
        out.push(INT16);
        #[allow(clippy::cast_possible_truncation)]
        wire::push_i16(out, v as i16);
    } else if (i64::from(i32::MIN)..=i64::from(i32::MAX)).contains(&v) {
        out.push(INT32);
        #[allow(clippy::cast_possible_truncation)]
        wire::push_i32(out, v as i32);
    } else {
        out.push(INT64);
        wire::push_i64(out, v);
    }
}

pub(crate) fn push_float(out: &mut Vec<u8>, v: f64) {
    if wire::fits_f32_exactly(v) {
        out.push(FLOAT32);
        #[allow(clippy::cast_possible_truncation)]
        wire::push_f32(out, v as f32);
    } else {
        out.push(FLOAT64);
        wire::push_f64(out, v);
    }
}

/// Narrowest short/long length encoding for String/Huge, whose short-form
/// decode (`read_short_len`) reads a plain byte with no reserved value — the
/// full `0..=255` range fits the short marker.
fn push_len(out: &mut Vec<u8>, short: u8, long: u8, len: usize) {
    if len <= 255 {
        out.push(short);
        #[allow(clippy::cast_possible_truncation)]
        out.push(len as u8);
    } else {
        out.push(long);
        #[allow(clippy::cast_possible_truncation)]
        wire::push_u32(out, len as u32);
    }
}

/// Narrowest short/long length encoding for array/object headers, whose
/// short-form decode reserves `0xFF` (`STREAM_SENTINEL`) to mean "streamed,
/// no count" — so the short marker can only hold `0..=254`.
fn push_container_len(out: &mut Vec<u8>, short: u8, long: u8, len: usize) {
    if len < 255 {
        out.push(short);
        #[allow(clippy::cast_possible_truncation)]
        out.push(len as u8);
    } else {
        out.push(long);
        #[allow(clippy::cast_possible_truncation)]
        wire::push_u32(out, len as u32);
    }
}

pub(crate) fn push_huge(out: &mut Vec<u8>, digits: &str) {
    push_len(out, HUGE_SHORT, HUGE_LONG, digits.len());
    out.extend_from_slice(digits.as_bytes());
}

pub(crate) fn push_string(out: &mut Vec<u8>, s: &str) {
    push_len(out, STR_SHORT, STR_LONG, s.len());
    out.extend_from_slice(s.as_bytes());
}

/// Encodes a bare object key (no `s`/`S` marker; see [`decode_key`]).
///
/// Draft-8 object keys carry a single-byte length, the same width
/// [`decode_key`] reads, so keys longer than 255 bytes have no wire
/// representation — rejected rather than silently truncated.
pub(crate) fn push_key(out: &mut Vec<u8>, s: &str) -> Result<()> {
    if s.len() > 255 {
        return Err(CodecError::EncodeError {
            reason: alloc::format!("object key {} bytes long has no Draft-8 representation (max 255)", s.len()),
        });
    }
    #[allow(clippy::cast_possible_truncation)]
    out.push(s.len() as u8);
    out.extend_from_slice(s.as_bytes());
    Ok(())
}

pub(crate) fn push_sized_header(out: &mut Vec<u8>, container: Container, len: usize) {
    let (short, long) = match container {
        Container::Array => (ARRAY_SHORT, ARRAY_LONG),
        Container::Object => (OBJECT_SHORT, OBJECT_LONG),
    };
    push_container_len(out, short, long, len);
}

pub(crate) fn push_streamed_open(out: &mut Vec<u8>, container: Container) {
    match container {
        Container::Array => out.push(ARRAY_SHORT),
        Container::Object => out.push(OBJECT_SHORT),
    }
    out.push(STREAM_SENTINEL);
}

pub(crate) fn push_close(out: &mut Vec<u8>) {
    out.push(CLOSE);
}

/// Resolves the Draft-9 byte-string open question for Draft-8: byte strings
/// always went through the text path here, so `options` only matters for
/// Draft-9; this function exists so callers don't need draft-specific
/// branching at the call site.
pub(crate) fn encode_byte_string_as_text(_mode: ByteStringMode) -> bool {
    true
}
