//! A streaming codec for Universal Binary JSON (UBJSON), covering both the
//! Draft-8 and Draft-9 wire revisions behind a shared [`Draft`] switch.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod decoder;
mod draft;
mod draft8;
mod draft9;
mod encoder;
mod marshaller;
mod pprint;
mod sink;
mod source;
mod token;
mod wire;

mod error;
mod options;
mod value;

#[cfg(test)]
mod tests;

pub use decoder::Decoder;
pub use draft::Draft;
pub use encoder::{encode, encode_streamed};
pub use error::{CodecError, Offset, Result};
pub use marshaller::decode;
pub use options::{ByteStringMode, CodecOptions};
pub use pprint::{pprint, pprint_value};
pub use sink::{ByteSink, CallbackSink};
pub use source::{ByteSource, ChunkProducer, ChunkedSource, IterChunks, SliceSource};
#[cfg(feature = "std")]
pub use sink::IoSink;
#[cfg(feature = "std")]
pub use source::IoSource;
pub use token::{Container, Scalar, Token};
pub use value::{ObjectMap, Value};
