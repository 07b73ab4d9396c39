//! Read-only view over template source.
//!
//! The buffer never copies the source: every [`Token`](crate::Token) the
//! tokenizer emits borrows from the same `&'a str` the buffer was built on.
//! Any text is accepted, including malformed markup and interior null bytes;
//! the tokenizer degrades gracefully instead of validating up front.

use crate::Cursor;

/// Immutable, byte-addressable view over template source.
///
/// Cheap to copy. The only mutable state in the lexer lives in the
/// [`Cursor`] handed out by [`cursor()`](Self::cursor), which is owned
/// exclusively by the tokenizer that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceBuffer<'a> {
    source: &'a str,
}

/// Size assertion: `SourceBuffer` is a single fat pointer.
const _: () = assert!(std::mem::size_of::<SourceBuffer<'static>>() <= 16);

impl<'a> SourceBuffer<'a> {
    /// Create a view over `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Returns the source text.
    pub fn as_str(&self) -> &'a str {
        self.source
    }

    /// Returns the source bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.source.as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor::new(self.source)
    }

    /// Length of the source in bytes.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

impl<'a> From<&'a str> for SourceBuffer<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}
