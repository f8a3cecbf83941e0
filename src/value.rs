//! The UBJSON value domain exchanged at the marshaller boundary.

use alloc::{string::String, vec::Vec};

/// An ordered string-keyed mapping, preserving insertion order on decode.
///
/// UBJSON objects are ordered (§3.1), unlike a sorted `BTreeMap`, so this is
/// a thin association-vector wrapper rather than a tree. Lookups are linear,
/// which is appropriate for the small, write-once objects a decoder builds.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectMap(Vec<(String, Value)>);

impl ObjectMap {
    /// Creates an empty, order-preserving object.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an empty object with room for `capacity` entries without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Appends a key/value pair, preserving insertion order even if `key`
    /// duplicates an existing entry (last write wins on lookup via
    /// [`ObjectMap::get`], but both entries remain in iteration order,
    /// matching a flat decode with no dedup pass).
    pub fn push(&mut self, key: String, value: Value) {
        self.0.push((key, value));
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the object has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up the last value inserted under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for ObjectMap {
    type Item = (String, Value);
    type IntoIter = alloc::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for ObjectMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A UBJSON value as defined by §3.1 of the format's data model.
///
/// Covers every category the marshaller can build from a decoded token
/// stream or walk to produce one: `Null`, `NoOp`, `Bool`, integers of
/// several widths, an opaque arbitrary-precision `Huge` decimal, IEEE-754
/// floats, a Draft-9-only `Char`, UTF-8 `String`s, `Array`s, and order
/// preserving `Object`s.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A protocol-level padding marker, semantically absent from the value
    /// tree unless the caller opts in via `CodecOptions::allow_noop`.
    NoOp,
    /// A boolean.
    Bool(bool),
    /// A signed integer. The encoder picks the narrowest marker that admits
    /// the value; the decoder widens every integer marker (including
    /// Draft-9's unsigned `U`) into this single variant.
    Int(i64),
    /// An arbitrary-precision decimal, carried as its canonical decimal
    /// string form. The codec never parses or performs arithmetic on it.
    Huge(String),
    /// A single-precision float.
    Float32(f32),
    /// A double-precision float.
    Float64(f64),
    /// A single Unicode code point (Draft-9 only).
    Char(char),
    /// Unicode text.
    String(String),
    /// A byte string: a host value that is conceptually text but not
    /// guaranteed valid UTF-8. The wire format has no distinct byte-string
    /// marker (see `CodecOptions::byte_string_mode`); this variant only
    /// ever appears as encoder *input*. Decoding never produces it — wire
    /// strings always decode to [`Value::String`].
    Bytes(Vec<u8>),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// An ordered string-keyed mapping.
    Object(ObjectMap),
}

impl Value {
    /// Returns `true` if the value is [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Value::NoOp`].
    #[must_use]
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    /// Returns `true` if the value is [`Value::Array`].
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Value::Object`].
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<ObjectMap> for Value {
    fn from(v: ObjectMap) -> Self {
        Self::Object(v)
    }
}
