mod boundaries;
mod pprint;
mod roundtrip;
mod scenarios;

use alloc::vec::Vec;

use crate::{decode, encode, CodecOptions, Draft, SliceSource, Value};

/// Encodes then decodes `value` under `draft` with default options, for
/// tests that only care about the round trip.
pub(crate) fn roundtrip(value: &Value, draft: Draft) -> Value {
    let mut bytes = Vec::new();
    encode(value, &mut bytes, draft, &CodecOptions::default()).expect("encode");
    decode(SliceSource::new(&bytes), draft, &CodecOptions::default()).expect("decode")
}
