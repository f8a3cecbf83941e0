//! Byte source adaptor (§4.1): a uniform pull interface over any of a byte
//! buffer, a chunk-producing callable, or an iterator of byte chunks.

use alloc::vec::Vec;

use crate::error::{CodecError, Result};

/// A producer of byte chunks, pulled on demand.
///
/// Implemented for `FnMut() -> Option<Vec<u8>>` closures and for any
/// `Iterator<Item = Vec<u8>>`, so [`ByteSource::from_callback`] and
/// [`ByteSource::from_chunks`] cover both construction styles named in
/// §4.1.
pub trait ChunkProducer {
    /// Returns the next chunk, or `None` once the producer is exhausted.
    fn next_chunk(&mut self) -> Option<Vec<u8>>;
}

impl<F: FnMut() -> Option<Vec<u8>>> ChunkProducer for F {
    fn next_chunk(&mut self) -> Option<Vec<u8>> {
        self()
    }
}

/// A wrapper adapting any `Iterator<Item = Vec<u8>>` into a [`ChunkProducer`].
pub struct IterChunks<I>(I);

impl<I: Iterator<Item = Vec<u8>>> ChunkProducer for IterChunks<I> {
    fn next_chunk(&mut self) -> Option<Vec<u8>> {
        self.0.next()
    }
}

/// `read(n)` pulled on demand by the decoder, satisfied from a byte buffer,
/// a chunk-producing callable, or an iterator of chunks.
///
/// A short read before end-of-stream is an error (`CodecError::EndOfStream`);
/// a clean end-of-stream exactly at a token boundary is normal termination,
/// surfaced to the decoder as `Ok(None)` from its next-token step rather
/// than from this trait directly.
pub trait ByteSource {
    /// Reads exactly `n` bytes, or fails with `CodecError::EndOfStream` if
    /// fewer than `n` bytes remain.
    fn read(&mut self, n: usize, context: &'static str) -> Result<Vec<u8>>;

    /// Reads a single byte, or returns `Ok(None)` at a clean end-of-stream.
    ///
    /// Distinct from [`ByteSource::read`] because the decoder's outermost
    /// loop (one marker byte per token) needs to distinguish "nothing left"
    /// from "a token started but the source ran dry mid-payload".
    fn read_marker(&mut self) -> Result<Option<u8>>;

    /// Looks at the next byte without consuming it, or returns `Ok(None)`
    /// at a clean end-of-stream. Draft-9's container framing (§4.2) needs
    /// one byte of lookahead to tell a sized header's count marker apart
    /// from a streamed container's first element.
    fn peek_marker(&mut self) -> Result<Option<u8>>;

    /// Current byte offset from the start of the source, for error context.
    fn offset(&self) -> u64;
}

/// Reads directly from an in-memory byte buffer by slicing.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Wraps a byte slice as a source.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl ByteSource for SliceSource<'_> {
    fn read(&mut self, n: usize, context: &'static str) -> Result<Vec<u8>> {
        if self.pos + n > self.data.len() {
            return Err(CodecError::EndOfStream {
                context,
                offset: self.pos as u64,
            });
        }
        let bytes = self.data[self.pos..self.pos + n].to_vec();
        self.pos += n;
        Ok(bytes)
    }

    fn read_marker(&mut self) -> Result<Option<u8>> {
        if self.pos >= self.data.len() {
            return Ok(None);
        }
        let b = self.data[self.pos];
        self.pos += 1;
        Ok(Some(b))
    }

    fn peek_marker(&mut self) -> Result<Option<u8>> {
        Ok(self.data.get(self.pos).copied())
    }

    fn offset(&self) -> u64 {
        self.pos as u64
    }
}

/// Reads from a [`ChunkProducer`], buffering chunks until enough bytes are
/// available to satisfy a read.
#[derive(Debug)]
pub struct ChunkedSource<P> {
    producer: P,
    buf: Vec<u8>,
    /// Index of the next unread byte within `buf`.
    cursor: usize,
    exhausted: bool,
    consumed: u64,
}

impl<P: ChunkProducer> ChunkedSource<P> {
    /// Wraps a chunk producer (callable or iterator adaptor) as a source.
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            buf: Vec::new(),
            cursor: 0,
            exhausted: false,
            consumed: 0,
        }
    }

    fn available(&self) -> usize {
        self.buf.len() - self.cursor
    }

    fn fill_until(&mut self, n: usize) {
        while self.available() < n && !self.exhausted {
            match self.producer.next_chunk() {
                Some(chunk) => self.buf.extend_from_slice(&chunk),
                None => self.exhausted = true,
            }
        }
        // Compact occasionally so the buffer doesn't grow unbounded across a
        // long stream of small reads.
        if self.cursor > 4096 && self.cursor > self.buf.len() / 2 {
            self.buf.drain(..self.cursor);
            self.cursor = 0;
        }
    }
}

impl<P: ChunkProducer> ByteSource for ChunkedSource<P> {
    fn read(&mut self, n: usize, context: &'static str) -> Result<Vec<u8>> {
        self.fill_until(n);
        if self.available() < n {
            return Err(CodecError::EndOfStream {
                context,
                offset: self.consumed,
            });
        }
        let bytes = self.buf[self.cursor..self.cursor + n].to_vec();
        self.cursor += n;
        self.consumed += n as u64;
        Ok(bytes)
    }

    fn read_marker(&mut self) -> Result<Option<u8>> {
        self.fill_until(1);
        if self.available() == 0 {
            return Ok(None);
        }
        let b = self.buf[self.cursor];
        self.cursor += 1;
        self.consumed += 1;
        Ok(Some(b))
    }

    fn peek_marker(&mut self) -> Result<Option<u8>> {
        self.fill_until(1);
        if self.available() == 0 {
            return Ok(None);
        }
        Ok(Some(self.buf[self.cursor]))
    }

    fn offset(&self) -> u64 {
        self.consumed
    }
}

impl<I: Iterator<Item = Vec<u8>>> ChunkedSource<IterChunks<I>> {
    /// Builds a source that pulls chunks from an iterator.
    pub fn from_iter(iter: I) -> Self {
        Self::new(IterChunks(iter))
    }
}

/// Reads from any [`std::io::Read`], buffering the same way as
/// [`ChunkedSource`]. Only available with the `std` feature.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
    buf: Vec<u8>,
    cursor: usize,
    exhausted: bool,
    consumed: u64,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> IoSource<R> {
    /// Wraps a reader as a source.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            cursor: 0,
            exhausted: false,
            consumed: 0,
        }
    }

    fn available(&self) -> usize {
        self.buf.len() - self.cursor
    }

    fn fill_until(&mut self, n: usize, context: &'static str) -> Result<()> {
        let mut chunk = [0u8; 4096];
        while self.available() < n && !self.exhausted {
            let read = self
                .inner
                .read(&mut chunk)
                .map_err(|e| CodecError::DecodeError {
                    offset: self.consumed,
                    reason: alloc::format!("{context}: {e}"),
                })?;
            if read == 0 {
                self.exhausted = true;
            } else {
                self.buf.extend_from_slice(&chunk[..read]);
            }
        }
        if self.cursor > 4096 && self.cursor > self.buf.len() / 2 {
            self.buf.drain(..self.cursor);
            self.cursor = 0;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
    fn read(&mut self, n: usize, context: &'static str) -> Result<Vec<u8>> {
        self.fill_until(n, context)?;
        if self.available() < n {
            return Err(CodecError::EndOfStream {
                context,
                offset: self.consumed,
            });
        }
        let bytes = self.buf[self.cursor..self.cursor + n].to_vec();
        self.cursor += n;
        self.consumed += n as u64;
        Ok(bytes)
    }

    fn read_marker(&mut self) -> Result<Option<u8>> {
        self.fill_until(1, "marker")?;
        if self.available() == 0 {
            return Ok(None);
        }
        let b = self.buf[self.cursor];
        self.cursor += 1;
        self.consumed += 1;
        Ok(Some(b))
    }

    fn peek_marker(&mut self) -> Result<Option<u8>> {
        self.fill_until(1, "marker")?;
        if self.available() == 0 {
            return Ok(None);
        }
        Ok(Some(self.buf[self.cursor]))
    }

    fn offset(&self) -> u64 {
        self.consumed
    }
}
