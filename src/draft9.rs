//! Draft-9 marker table (§6, §4.2, §4.3).
//!
//! Unified container markers (`[`/`{`), five integer widths including
//! unsigned 8-bit (`U`), a one-byte `Char` type, and a single `String`/`Huge`
//! marker whose length is itself a nested, marker-tagged integer token.
//!
//! Resolution of the container sized/streamed ambiguity (§9's discussion of
//! `[`/`{` framing): this crate reserves `#` as an internal count marker
//! that, if present immediately after `[`/`{`, introduces a nested integer
//! token giving the sized count; its absence means the container is
//! streamed and runs until the matching close marker. See `DESIGN.md`.

use alloc::{string::String, vec::Vec};

use crate::{
    error::{CodecError, Result},
    source::ByteSource,
    token::{Container, MarkerAction, Scalar},
    wire,
};

pub(crate) const NULL: u8 = b'Z';
pub(crate) const NOOP: u8 = b'N';
pub(crate) const TRUE: u8 = b'T';
pub(crate) const FALSE: u8 = b'F';
pub(crate) const UINT8: u8 = b'U';
pub(crate) const INT8: u8 = b'i';
pub(crate) const INT16: u8 = b'I';
pub(crate) const INT32: u8 = b'l';
pub(crate) const INT64: u8 = b'L';
pub(crate) const FLOAT32: u8 = b'd';
pub(crate) const FLOAT64: u8 = b'D';
pub(crate) const HUGE: u8 = b'H';
pub(crate) const STRING: u8 = b'S';
pub(crate) const CHAR: u8 = b'C';
pub(crate) const ARRAY_OPEN: u8 = b'[';
pub(crate) const OBJECT_OPEN: u8 = b'{';
pub(crate) const ARRAY_CLOSE: u8 = b']';
pub(crate) const OBJECT_CLOSE: u8 = b'}';
/// Internal sized-count marker; not part of the `VALUE`/`TYPE` letters
/// listed in §6, but required to disambiguate a sized container header from
/// a streamed one whose first element happens to start with an integer
/// marker (see the module-level docs).
pub(crate) const COUNT: u8 = b'#';

/// Reads one integer-marker token and returns its value as `u64`, failing if
/// the marker isn't an integer marker or the value is negative. Used both
/// for container counts and for String/Huge length prefixes, which in
/// Draft-9 are always a full nested integer token rather than a fixed-width
/// field (contrast Draft-8's dedicated short/long markers).
pub(crate) fn read_length_token<S: ByteSource>(src: &mut S) -> Result<u64> {
    let offset = src.offset();
    let marker = src.read_marker()?.ok_or(CodecError::EndOfStream {
        context: "length token marker",
        offset,
    })?;
    let value = match marker {
        UINT8 => i64::from(src.read(1, "uint8 length")?[0]),
        INT8 => i64::from(src.read(1, "int8 length")?[0] as i8),
        INT16 => i64::from(wire::be_i16(&src.read(2, "int16 length")?)),
        INT32 => i64::from(wire::be_i32(&src.read(4, "int32 length")?)),
        INT64 => wire::be_i64(&src.read(8, "int64 length")?),
        _ => {
            return Err(CodecError::MarkerError {
                marker,
                offset,
                reason: "expected an integer marker for a length",
            });
        }
    };
    u64::try_from(value).map_err(|_| CodecError::DecodeError {
        offset,
        reason: alloc::format!("negative length prefix: {value}"),
    })
}

fn read_string<S: ByteSource>(src: &mut S) -> Result<String> {
    let len = read_length_token(src)?;
    let bytes = src.read(len as usize, "String payload")?;
    String::from_utf8(bytes).map_err(|e| CodecError::DecodeError {
        offset: src.offset(),
        reason: alloc::format!("String payload is not valid UTF-8: {e}"),
    })
}

fn read_huge<S: ByteSource>(src: &mut S) -> Result<String> {
    let len = read_length_token(src)?;
    let offset = src.offset();
    let bytes = src.read(len as usize, "Huge payload")?;
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

/// Reads a bare (marker-less) length-prefixed string, used for object keys.
pub(crate) fn decode_key<S: ByteSource>(src: &mut S) -> Result<String> {
    let len = read_length_token(src)?;
    let bytes = src.read(len as usize, "object key payload")?;
    String::from_utf8(bytes).map_err(|e| CodecError::DecodeError {
        offset: src.offset(),
        reason: alloc::format!("object key is not valid UTF-8: {e}"),
    })
}

/// Reads an optional sized-count header right after `[`/`{`. Uses
/// `peek_marker` so that, when no `#` is present, the byte that was peeked
/// (the first element's marker, or a close marker for an empty streamed
/// container) is left unconsumed for the next `next_token` call.
pub(crate) fn decode_open_peeking<S: ByteSource>(src: &mut S) -> Result<Option<u64>> {
    if src.peek_marker()? == Some(COUNT) {
        src.read_marker()?;
        Ok(Some(read_length_token(src)?))
    } else {
        Ok(None)
    }
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
        INT8 => {
            let b = src.read(1, "int8 payload")?[0] as i8;
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
        HUGE => MarkerAction::Scalar(Scalar::Huge(read_huge(src)?)),
        STRING => MarkerAction::Scalar(Scalar::Str(read_string(src)?)),
        CHAR => {
            let offset = src.offset();
            let b = src.read(1, "char payload")?[0];
            if b >= 0x80 {
                return Err(CodecError::DecodeError {
                    offset,
                    reason: alloc::format!("Char payload 0x{b:02X} is not a single ASCII byte"),
                });
            }
            MarkerAction::Scalar(Scalar::Char(char::from(b)))
        }
        ARRAY_OPEN => MarkerAction::ArrayOpen(decode_open_peeking(src)?),
        OBJECT_OPEN => MarkerAction::ObjectOpen(decode_open_peeking(src)?),
        ARRAY_CLOSE | OBJECT_CLOSE => MarkerAction::Close,
        _ => {
            return Err(CodecError::MarkerError {
                marker,
                offset: src.offset(),
                reason: "not a valid Draft-9 marker",
            });
        }
    };
    Ok(action)
}

/// Encodes an integer with the narrowest Draft-9 marker. `i` (int8) is
/// checked before `U` (uint8) so ties in `0..=127` resolve to the signed
/// marker; `U` then catches `128..=255`, matching §4.3's "Draft-9 adds
/// uint8 before int16 for nonnegative small values".
pub(crate) fn push_int(out: &mut Vec<u8>, v: i64) {
    if (-128..=127).contains(&v) {
        out.push(INT8);
        #[allow(clippy::cast_possible_truncation)]
        out.push(v as i8 as u8);
    } else if (0..=255).contains(&v) {
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

fn push_length_token(out: &mut Vec<u8>, len: usize) {
    #[allow(clippy::cast_possible_wrap)]
    push_int(out, len as i64);
}

pub(crate) fn push_string(out: &mut Vec<u8>, s: &str) {
    out.push(STRING);
    push_length_token(out, s.len());
    out.extend_from_slice(s.as_bytes());
}

pub(crate) fn push_huge(out: &mut Vec<u8>, digits: &str) {
    out.push(HUGE);
    push_length_token(out, digits.len());
    out.extend_from_slice(digits.as_bytes());
}

/// Encodes a bare object key (no `S` marker; see [`decode_key`]).
pub(crate) fn push_key(out: &mut Vec<u8>, s: &str) {
    push_length_token(out, s.len());
    out.extend_from_slice(s.as_bytes());
}

/// Encodes `c` via the one-byte `Char` marker. Only valid for code points
/// whose UTF-8 encoding is exactly one byte (`c.is_ascii()`); callers must
/// check this first, as Draft-9's `Char` has no wider form.
pub(crate) fn push_char(out: &mut Vec<u8>, c: char) {
    debug_assert!(c.is_ascii());
    out.push(CHAR);
    #[allow(clippy::cast_possible_truncation)]
    out.push(c as u8);
}

fn open_marker(container: Container) -> u8 {
    match container {
        Container::Array => ARRAY_OPEN,
        Container::Object => OBJECT_OPEN,
    }
}

fn close_marker(container: Container) -> u8 {
    match container {
        Container::Array => ARRAY_CLOSE,
        Container::Object => OBJECT_CLOSE,
    }
}

pub(crate) fn push_sized_header(out: &mut Vec<u8>, container: Container, len: usize) {
    out.push(open_marker(container));
    out.push(COUNT);
    push_length_token(out, len);
}

pub(crate) fn push_streamed_open(out: &mut Vec<u8>, container: Container) {
    out.push(open_marker(container));
}

pub(crate) fn push_close(out: &mut Vec<u8>, container: Container) {
    out.push(close_marker(container));
}
