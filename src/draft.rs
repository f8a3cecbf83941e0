//! Draft selection.
//!
//! The two UBJSON revisions this crate implements share architecture but
//! disagree on every marker byte and on container framing (see the
//! `draft8`/`draft9` modules for the per-draft tables). Components take a
//! [`Draft`] by value; there is no global state selecting one draft over the
//! other.

/// Which UBJSON wire format revision to encode or decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Draft {
    /// The legacy revision: distinct sized/streamed container markers,
    /// four integer widths (`B`, `i`, `I`, `l`), no `Char` type.
    Draft8,
    /// The current revision: unified container markers (`[`/`{`), five
    /// integer widths including unsigned 8-bit (`U`), and a one-byte
    /// `Char` type.
    Draft9,
}
