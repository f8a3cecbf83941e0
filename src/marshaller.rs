//! Builds a [`Value`] tree from a decoder's flat token stream.
//!
//! The decoder itself tracks no nesting (§4.2); this module is where that
//! structure gets recovered, by counting down sized containers' declared
//! lengths and matching streamed containers to their close marker.

use alloc::vec::Vec;

use crate::{
    decoder::Decoder,
    draft::Draft,
    error::{CodecError, Result},
    options::CodecOptions,
    source::ByteSource,
    token::{Container, Scalar, Token},
    value::{ObjectMap, Value},
};

/// Decodes exactly one top-level value from `source`.
///
/// Trailing bytes after the value are not inspected; a caller that expects
/// the source to be exhausted afterward can check `decoder.offset()`
/// against the source's known length, or simply trust well-formed input.
pub fn decode<S: ByteSource>(source: S, draft: Draft, options: &CodecOptions) -> Result<Value> {
    let mut decoder = Decoder::new(source, draft);
    decode_value(&mut decoder, options, 0)
}

/// A generous cap on how much capacity a declared container length is
/// allowed to pre-reserve, so a hostile length prefix can't force a large
/// allocation before any payload has actually been read.
const MAX_PREALLOCATE: u64 = 1 << 20;

pub(crate) fn decode_value<S: ByteSource>(
    decoder: &mut Decoder<S>,
    options: &CodecOptions,
    depth: usize,
) -> Result<Value> {
    if depth > options.max_depth {
        return Err(CodecError::DepthExceeded {
            max_depth: options.max_depth,
            offset: decoder.offset(),
        });
    }
    match next_significant(decoder, options, "value")? {
        Token::Scalar(scalar) => Ok(scalar_to_value(scalar)),
        Token::Open {
            container: Container::Array,
            length,
        } => Ok(Value::Array(decode_array(decoder, options, depth + 1, length)?)),
        Token::Open {
            container: Container::Object,
            length,
        } => Ok(Value::Object(decode_object(decoder, options, depth + 1, length)?)),
        Token::Close => Err(CodecError::DecodeError {
            offset: decoder.offset(),
            reason: "unexpected container close".into(),
        }),
    }
}

/// Reads the next token, transparently discarding `NoOp` scalars unless
/// `options.allow_noop` opts them into the value tree.
fn next_significant<S: ByteSource>(
    decoder: &mut Decoder<S>,
    options: &CodecOptions,
    context: &'static str,
) -> Result<Token> {
    loop {
        let token = decoder
            .next_token()?
            .ok_or(CodecError::EndOfStream { context, offset: decoder.offset() })?;
        if matches!(token, Token::Scalar(Scalar::NoOp)) && !options.allow_noop {
            continue;
        }
        return Ok(token);
    }
}

fn scalar_to_value(scalar: Scalar) -> Value {
    match scalar {
        Scalar::Null => Value::Null,
        Scalar::NoOp => Value::NoOp,
        Scalar::Bool(b) => Value::Bool(b),
        Scalar::Int(i) => Value::Int(i),
        Scalar::Huge(s) => Value::Huge(s),
        Scalar::Float32(f) => Value::Float32(f),
        Scalar::Float64(f) => Value::Float64(f),
        Scalar::Char(c) => Value::Char(c),
        Scalar::Str(s) => Value::String(s),
    }
}

fn decode_array<S: ByteSource>(
    decoder: &mut Decoder<S>,
    options: &CodecOptions,
    depth: usize,
    length: Option<u64>,
) -> Result<Vec<Value>> {
    match length {
        Some(n) => {
            let mut out = Vec::with_capacity(n.min(MAX_PREALLOCATE) as usize);
            for _ in 0..n {
                out.push(decode_value(decoder, options, depth)?);
            }
            Ok(out)
        }
        None => {
            let mut out = Vec::new();
            loop {
                if decoder.peek_is_close(Container::Array)? {
                    decoder.consume_close()?;
                    return Ok(out);
                }
                out.push(decode_value(decoder, options, depth)?);
            }
        }
    }
}

fn decode_object<S: ByteSource>(
    decoder: &mut Decoder<S>,
    options: &CodecOptions,
    depth: usize,
    length: Option<u64>,
) -> Result<ObjectMap> {
    match length {
        Some(n) => {
            let mut out = ObjectMap::with_capacity(n.min(MAX_PREALLOCATE) as usize);
            for _ in 0..n {
                let key = decoder.next_key()?;
                let value = decode_value(decoder, options, depth)?;
                out.push(key, value);
            }
            Ok(out)
        }
        None => {
            let mut out = ObjectMap::new();
            loop {
                match decoder.next_object_key_or_close()? {
                    None => return Ok(out),
                    Some(key) => {
                        let value = decode_value(decoder, options, depth)?;
                        out.push(key, value);
                    }
                }
            }
        }
    }
}
