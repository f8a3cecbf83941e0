//! Byte sink: the write-through counterpart of [`crate::source::ByteSource`].
//!
//! The encoder and pretty printer write through this trait rather than
//! materializing a buffer themselves, matching §4.3's "writes bytes to a
//! sink" contract and keeping the core usable with any byte-consuming
//! callable.

use alloc::vec::Vec;

use crate::error::Result;

/// A consumer of bytes, written to incrementally.
///
/// If `write` raises, the error propagates unchanged and the caller owns
/// truncation of whatever was already written (§7).
pub trait ByteSink {
    /// Writes `bytes` to the sink.
    fn write(&mut self, bytes: &[u8]) -> Result<()>;
}

impl ByteSink for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Adapts an `FnMut(&[u8]) -> Result<()>` callable into a [`ByteSink`].
pub struct CallbackSink<F>(F);

impl<F> CallbackSink<F>
where
    F: FnMut(&[u8]) -> Result<()>,
{
    /// Wraps a byte-consuming callable as a sink.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> ByteSink for CallbackSink<F>
where
    F: FnMut(&[u8]) -> Result<()>,
{
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        (self.0)(bytes)
    }
}

/// Writes to any [`std::io::Write`]. Only available with the `std` feature.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    /// Wraps a writer as a sink.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwraps the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> ByteSink for IoSink<W> {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner
            .write_all(bytes)
            .map_err(|e| crate::error::CodecError::EncodeError {
                reason: alloc::format!("io write failed: {e}"),
            })
    }
}
