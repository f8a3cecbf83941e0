//! The streaming decoder (§4.2): turns a byte source into a flat, lazy
//! sequence of tokens without tracking container nesting itself.

use alloc::string::String;

use crate::{
    draft::Draft,
    draft8, draft9,
    error::Result,
    source::ByteSource,
    token::{Container, MarkerAction, Token},
};

/// Pulls one [`Token`] at a time from a [`ByteSource`], dispatching to the
/// marker table of whichever [`Draft`] it was constructed with.
///
/// Container nesting is not tracked here: `Open`/`Close` tokens are handed
/// back as they're read, and it is up to the consumer (the marshaller, or a
/// hand-rolled caller walking the stream directly) to match them up. This
/// mirrors §4.2's "flat, stateless token stream" requirement, and is what
/// lets the same decoder serve both the eager `Value`-tree marshaller and
/// the pretty printer, which never materializes a tree at all.
#[derive(Debug)]
pub struct Decoder<S> {
    source: S,
    draft: Draft,
}

impl<S: ByteSource> Decoder<S> {
    /// Wraps `source`, decoding it according to `draft`.
    pub fn new(source: S, draft: Draft) -> Self {
        Self { source, draft }
    }

    /// The draft this decoder was constructed with.
    #[must_use]
    pub fn draft(&self) -> Draft {
        self.draft
    }

    /// Current byte offset, useful for error context in a caller that wraps
    /// this decoder in its own validation.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.source.offset()
    }

    /// Reads the next object key.
    ///
    /// Object keys carry no type marker in either draft: their type is
    /// always string, so the length-prefixed payload is read directly
    /// rather than through [`Decoder::next_token`], which expects a leading
    /// marker byte. Callers decoding an object must call this once per
    /// key, immediately followed by a `next_token` call for its value.
    pub fn next_key(&mut self) -> Result<String> {
        match self.draft {
            Draft::Draft8 => draft8::decode_key(&mut self.source),
            Draft::Draft9 => draft9::decode_key(&mut self.source),
        }
    }

    /// Checks whether the next byte is the close marker for `container`,
    /// without consuming it on a miss.
    ///
    /// Needed by the marshaller to decide, one streamed-container element at
    /// a time, whether to read another key/value or stop: a streamed
    /// object's entries are bare (marker-less) keys, so the generic
    /// [`Decoder::next_token`] cannot be used to look for the close marker
    /// the way it can inside a streamed array.
    pub fn peek_is_close(&mut self, container: Container) -> Result<bool> {
        let close = match (self.draft, container) {
            (Draft::Draft8, _) => draft8::CLOSE,
            (Draft::Draft9, Container::Array) => draft9::ARRAY_CLOSE,
            (Draft::Draft9, Container::Object) => draft9::OBJECT_CLOSE,
        };
        Ok(self.source.peek_marker()? == Some(close))
    }

    /// Consumes the close marker already confirmed present by
    /// [`Decoder::peek_is_close`].
    pub fn consume_close(&mut self) -> Result<()> {
        self.source.read_marker()?;
        Ok(())
    }

    /// Reads the next entry of a streamed object: either a key (the value
    /// token still needs to be read separately) or, if the close marker
    /// comes first, `None` after consuming it.
    pub fn next_object_key_or_close(&mut self) -> Result<Option<String>> {
        if self.peek_is_close(Container::Object)? {
            self.consume_close()?;
            return Ok(None);
        }
        Ok(Some(self.next_key()?))
    }

    /// Reads the next token, or `Ok(None)` at a clean end of stream.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let Some(marker) = self.source.read_marker()? else {
            return Ok(None);
        };
        let action = match self.draft {
            Draft::Draft8 => draft8::decode_marker(marker, &mut self.source)?,
            Draft::Draft9 => draft9::decode_marker(marker, &mut self.source)?,
        };
        Ok(Some(match action {
            MarkerAction::Scalar(scalar) => Token::Scalar(scalar),
            MarkerAction::ArrayOpen(length) => Token::Open {
                container: Container::Array,
                length,
            },
            MarkerAction::ObjectOpen(length) => Token::Open {
                container: Container::Object,
                length,
            },
            MarkerAction::Close => Token::Close,
        }))
    }
}

impl<S: ByteSource> Iterator for Decoder<S> {
    type Item = Result<Token>;

    /// Yields tokens until a clean end of stream, after which the iterator
    /// is exhausted. A decode error ends iteration too: the next call
    /// returns `None` rather than repeating the error, since the source's
    /// position after a failed read is not meaningful to resume from.
    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
