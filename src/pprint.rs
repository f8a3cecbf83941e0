//! Pretty printer (§4.4): renders a decoder's token stream, or an already
//! marshalled [`Value`] tree, as indented bracketed text.
//!
//! [`pprint`] consumes tokens directly and never materializes a [`Value`],
//! matching the "without materializing values" requirement; [`pprint_value`]
//! covers the case where the caller already has a tree in hand and doesn't
//! want to re-encode it just to pretty-print it. The two share line formats
//! so that `pprint_value(decode(b)) == pprint(b)` for any `b` that decodes
//! successfully (§8's pretty-print idempotence property).

use alloc::{format, string::String, vec::Vec};

use crate::{
    decoder::Decoder,
    draft::Draft,
    error::{CodecError, Result},
    options::CodecOptions,
    sink::ByteSink,
    source::ByteSource,
    token::{Container, Scalar, Token},
    value::Value,
};

const INDENT: &str = "    ";

fn write_line(buf: &mut Vec<u8>, depth: usize, text: &str) {
    for _ in 0..depth {
        buf.extend_from_slice(INDENT.as_bytes());
    }
    buf.extend_from_slice(text.as_bytes());
    buf.push(b'\n');
}

fn render_scalar(scalar: &Scalar) -> String {
    match scalar {
        Scalar::Null => String::from("null"),
        Scalar::NoOp => String::from("noop"),
        Scalar::Bool(b) => format!("{b}"),
        Scalar::Int(v) => format!("{v}"),
        Scalar::Huge(digits) => format!("huge {digits}"),
        Scalar::Float32(v) => format!("float32 {v}"),
        Scalar::Float64(v) => format!("float64 {v}"),
        Scalar::Char(c) => format!("char {c:?}"),
        Scalar::Str(s) => format!("string {} {:?}", s.len(), s),
    }
}

/// Pretty-prints the token stream decoded from `source` to `sink`.
pub fn pprint<S: ByteSource, W: ByteSink>(
    source: S,
    sink: &mut W,
    draft: Draft,
    options: &CodecOptions,
) -> Result<()> {
    let mut decoder = Decoder::new(source, draft);
    let mut buf = Vec::new();
    print_node(&mut decoder, &mut buf, options, 0)?;
    sink.write(&buf)
}

fn next_significant<S: ByteSource>(
    decoder: &mut Decoder<S>,
    options: &CodecOptions,
) -> Result<Token> {
    loop {
        let token = decoder.next_token()?.ok_or(CodecError::EndOfStream {
            context: "value",
            offset: decoder.offset(),
        })?;
        if matches!(token, Token::Scalar(Scalar::NoOp)) && !options.allow_noop {
            continue;
        }
        return Ok(token);
    }
}

fn print_node<S: ByteSource>(
    decoder: &mut Decoder<S>,
    buf: &mut Vec<u8>,
    options: &CodecOptions,
    depth: usize,
) -> Result<()> {
    match next_significant(decoder, options)? {
        Token::Scalar(scalar) => {
            write_line(buf, depth, &render_scalar(&scalar));
            Ok(())
        }
        Token::Open {
            container: Container::Array,
            length,
        } => {
            write_line(buf, depth, &format!("array {}", render_length(length)));
            print_array_body(decoder, buf, options, depth, length)?;
            write_line(buf, depth, "end");
            Ok(())
        }
        Token::Open {
            container: Container::Object,
            length,
        } => {
            write_line(buf, depth, &format!("object {}", render_length(length)));
            print_object_body(decoder, buf, options, depth, length)?;
            write_line(buf, depth, "end");
            Ok(())
        }
        Token::Close => Err(CodecError::DecodeError {
            offset: decoder.offset(),
            reason: "unexpected container close".into(),
        }),
    }
}

fn render_length(length: Option<u64>) -> String {
    match length {
        Some(n) => format!("{n}"),
        None => String::from("streamed"),
    }
}

fn print_array_body<S: ByteSource>(
    decoder: &mut Decoder<S>,
    buf: &mut Vec<u8>,
    options: &CodecOptions,
    depth: usize,
    length: Option<u64>,
) -> Result<()> {
    match length {
        Some(n) => {
            for _ in 0..n {
                print_node(decoder, buf, options, depth + 1)?;
            }
            Ok(())
        }
        None => loop {
            if decoder.peek_is_close(Container::Array)? {
                decoder.consume_close()?;
                return Ok(());
            }
            print_node(decoder, buf, options, depth + 1)?;
        },
    }
}

fn print_object_body<S: ByteSource>(
    decoder: &mut Decoder<S>,
    buf: &mut Vec<u8>,
    options: &CodecOptions,
    depth: usize,
    length: Option<u64>,
) -> Result<()> {
    match length {
        Some(n) => {
            for _ in 0..n {
                let key = decoder.next_key()?;
                write_line(buf, depth + 1, &format!("key {key:?}"));
                print_node(decoder, buf, options, depth + 1)?;
            }
            Ok(())
        }
        None => loop {
            match decoder.next_object_key_or_close()? {
                None => return Ok(()),
                Some(key) => {
                    write_line(buf, depth + 1, &format!("key {key:?}"));
                    print_node(decoder, buf, options, depth + 1)?;
                }
            }
        },
    }
}

/// Pretty-prints an already marshalled [`Value`] tree, without re-encoding
/// it first. The rendered text is independent of draft: a [`Value`] carries
/// no marker bytes, only the semantic category each marker was widened into
/// during decoding.
pub fn pprint_value<W: ByteSink>(value: &Value, sink: &mut W) -> Result<()> {
    let mut buf = Vec::new();
    write_value(&mut buf, value, 0);
    sink.write(&buf)
}

fn write_value(buf: &mut Vec<u8>, value: &Value, depth: usize) {
    match value {
        Value::Null => write_line(buf, depth, "null"),
        Value::NoOp => write_line(buf, depth, "noop"),
        Value::Bool(b) => write_line(buf, depth, &format!("{b}")),
        Value::Int(v) => write_line(buf, depth, &format!("{v}")),
        Value::Huge(digits) => write_line(buf, depth, &format!("huge {digits}")),
        Value::Float32(v) => write_line(buf, depth, &format!("float32 {v}")),
        Value::Float64(v) => write_line(buf, depth, &format!("float64 {v}")),
        Value::Char(c) => write_line(buf, depth, &format!("char {c:?}")),
        Value::String(s) => write_line(buf, depth, &format!("string {} {:?}", s.len(), s)),
        Value::Bytes(b) => write_line(buf, depth, &format!("bytes {}", b.len())),
        Value::Array(items) => {
            write_line(buf, depth, &format!("array {}", items.len()));
            for item in items {
                write_value(buf, item, depth + 1);
            }
            write_line(buf, depth, "end");
        }
        Value::Object(map) => {
            write_line(buf, depth, &format!("object {}", map.len()));
            for (key, item) in map.iter() {
                write_line(buf, depth + 1, &format!("key {key:?}"));
                write_value(buf, item, depth + 1);
            }
            write_line(buf, depth, "end");
        }
    }
}
