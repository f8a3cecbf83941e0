//! Error types shared by the decoder, encoder, and pretty printer.

use alloc::string::String;

use thiserror::Error;

/// The result type returned by every public entry point in this crate.
pub type Result<T> = core::result::Result<T, CodecError>;

/// A position in the byte stream, in bytes from the start of the call.
///
/// Recorded on a best-effort basis: errors raised before any bytes have been
/// consumed (e.g. an unknown [`crate::Draft`]) carry offset `0`.
pub type Offset = u64;

/// Errors produced while encoding, decoding, or pretty-printing UBJSON.
///
/// Variant names mirror the error kinds named by the wire format: each is
/// fatal to the call that raised it and no partial value is returned, though
/// a sink may already have received bytes on an [`CodecError::EncodeError`].
#[derive(Debug, Error, PartialEq)]
pub enum CodecError {
    /// The byte source was exhausted in the middle of a token.
    #[error("end of stream at offset {offset} while reading {context}")]
    EndOfStream {
        /// What the decoder was trying to read when the source ran dry.
        context: &'static str,
        /// Byte offset at which the read was attempted.
        offset: Offset,
    },

    /// A marker byte was unrecognized, or legal in the wire format but
    /// illegal in its context (e.g. a non-integer marker where a length was
    /// expected, or a non-string marker for an object key).
    #[error("invalid marker 0x{marker:02X} at offset {offset}: {reason}")]
    MarkerError {
        /// The offending marker byte.
        marker: u8,
        /// Byte offset of the marker.
        offset: Offset,
        /// Why the marker was rejected.
        reason: &'static str,
    },

    /// A host value has no wire representation under the selected draft.
    #[error("cannot encode value: {reason}")]
    EncodeError {
        /// Why the value could not be encoded.
        reason: String,
    },

    /// A payload was malformed: invalid UTF-8 in a string, non-decimal bytes
    /// in a Huge number, or a negative length prefix.
    #[error("malformed payload at offset {offset}: {reason}")]
    DecodeError {
        /// Byte offset at which the payload begins.
        offset: Offset,
        /// Why the payload could not be decoded.
        reason: String,
    },

    /// The caller asked for a draft this crate does not implement.
    ///
    /// Unreachable from safe Rust callers going through [`crate::Draft`]
    /// directly, since that enum is closed; retained for API symmetry with
    /// callers that select a draft dynamically (e.g. across an FFI
    /// boundary).
    #[error("unknown draft {0:?}")]
    DraftError(String),

    /// A container nested deeper than `CodecOptions::max_depth` was
    /// encountered.
    #[error("nesting depth exceeded {max_depth} at offset {offset}")]
    DepthExceeded {
        /// The configured limit that was exceeded.
        max_depth: usize,
        /// Byte offset at which the limit was hit.
        offset: Offset,
    },
}
