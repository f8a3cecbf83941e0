//! The decoder's token type (§4.2): a flat, lazy sequence of markers.
//!
//! Nesting is not tracked here — the marshaller and pretty printer each
//! recover structure from a flat stream of [`Token`]s by counting sized
//! containers' declared lengths and matching streamed opens to closes.

use alloc::string::String;

/// Which kind of container a container open/close token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// An ordered sequence.
    Array,
    /// An ordered string-keyed mapping.
    Object,
}

/// A scalar payload decoded from a fixed-width or length-prefixed marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// `Z`
    Null,
    /// `N`, surfaced only when `CodecOptions::allow_noop` is set.
    NoOp,
    /// `T` / `F`
    Bool(bool),
    /// Any integer marker, widened to `i64`. Draft-9's unsigned `U` marker
    /// is included here since `0..=255` always fits.
    Int(i64),
    /// `h`/`H` (Draft-8) or `H` (Draft-9): a canonical decimal string.
    Huge(String),
    /// `d`: IEEE-754 single precision.
    Float32(f32),
    /// `D`: IEEE-754 double precision.
    Float64(f64),
    /// `C` (Draft-9 only): a single Unicode code point.
    Char(char),
    /// `s`/`S` (Draft-8) or `S` (Draft-9): UTF-8 text.
    Str(String),
}

/// One item produced by the decoder's pull loop.
///
/// Mirrors §4.2's triple `(tag, length, value)`: scalar markers carry a
/// `Scalar` payload and no length; container opens carry a declared length
/// for sized containers or `None` for streamed ones; container closes
/// (streamed only) carry neither.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A scalar value.
    Scalar(Scalar),
    /// The start of a container. `length` is `Some(n)` for a sized
    /// container — the declared item count for an array, or the declared
    /// key/value *pair* count for an object — and `None` for a streamed
    /// one.
    Open { container: Container, length: Option<u64> },
    /// The end of a streamed container.
    ///
    /// Carries no container kind: Draft-8 closes both array and object
    /// streams with the same `E` marker, so the decoder cannot tell which
    /// kind is ending without tracking nesting itself, which §4.2 says it
    /// must not do. The consumer already knows what it pushed when it saw
    /// the matching `Open` and pops that, regardless of which marker closed
    /// it.
    Close,
}

/// What a decoded marker turns into, shared by both draft modules before the
/// generic decoder wraps it into a [`Token`].
pub(crate) enum MarkerAction {
    Scalar(Scalar),
    ArrayOpen(Option<u64>),
    ObjectOpen(Option<u64>),
    Close,
}
