//! Configuration shared by the decoder, encoder, and marshaller.

/// How to handle a byte string (as opposed to a Unicode text string) under
/// Draft-9.
///
/// Draft-9 defines no distinct marker for byte strings (see the design
/// notes in `DESIGN.md`); this is the documented configuration point that
/// resolves the resulting ambiguity rather than silently guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteStringMode {
    /// Reuse the `String` marker and assume the bytes are UTF-8, matching
    /// the legacy Draft-8 behavior of routing byte strings through the text
    /// path.
    #[default]
    AsText,
    /// Fail encoding or decoding a byte string under Draft-9 with
    /// [`crate::CodecError::EncodeError`]/[`crate::CodecError::DecodeError`]
    /// instead of silently assuming UTF-8.
    Reject,
}

/// Configuration options for the encoder, decoder, and marshaller.
///
/// # Default
///
/// All options default to values that accept the widest range of inputs:
/// `NoOp` tokens are discarded, byte strings are treated as text, and
/// nesting is capped at a generous but finite depth.
///
/// # Examples
///
/// ```rust
/// use ubjson_codec::CodecOptions;
///
/// let options = CodecOptions {
///     allow_noop: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Whether to surface `NoOp` tokens to the marshaller as a distinct
    /// sentinel value, instead of discarding them silently.
    ///
    /// The encoder never emits `NoOp` regardless of this setting; it only
    /// affects decoding.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_noop: bool,

    /// How to handle byte strings under Draft-9.
    ///
    /// # Default
    ///
    /// [`ByteStringMode::AsText`]
    pub byte_string_mode: ByteStringMode,

    /// Maximum container nesting depth accepted by the decoder and
    /// marshaller. Guards against unbounded recursion on hostile input.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            allow_noop: false,
            byte_string_mode: ByteStringMode::AsText,
            max_depth: 128,
        }
    }
}
