//! Byte cursor over template source.
//!
//! The cursor advances through the source byte-by-byte. Reads past the end
//! return `0x00`, but EOF is decided by comparing the position against the
//! source length, so interior null bytes are ordinary content.
//!
//! Delimiter searches (`{`, `%}`, `\n`) go through `memchr`, which keeps long
//! runs of plain text off the byte-at-a-time path.

use memchr::memmem;

/// Delimiter bytes that may follow `{` to start a markup region.
///
/// `{}` is included: text scanning stops in front of it even though it does
/// not open a region of its own.
#[inline]
fn opens_markup(byte: u8) -> bool {
    matches!(byte, b'{' | b'%' | b'}')
}

/// Byte cursor over template source.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking.
///
/// # Invariant
///
/// `pos <= source.len()`, and `pos` only ever lands on a UTF-8 character
/// boundary when a slice is taken. All delimiters are ASCII, so positions
/// produced by delimiter searches always satisfy this.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte offset into `source`).
    pos: usize,
}

/// Size assertion: fat pointer + offset.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Byte at `pos`, or `0x00` past EOF.
    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.source.as_bytes().get(pos).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        debug_assert!(
            self.pos + n <= self.source.len(),
            "advance to {} past source length {}",
            self.pos + n,
            self.source.len()
        );
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` if the unread input starts with `prefix`.
    #[inline]
    pub fn at(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Unread bytes from the current position to EOF.
    pub(crate) fn rest(&self) -> &'a [u8] {
        self.source.as_bytes().get(self.pos..).unwrap_or_default()
    }

    /// Extract a source substring.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source and on character boundaries.
    /// This holds for every boundary the tokenizer produces, since they sit
    /// either at the ends of the source or next to an ASCII delimiter.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.source.len(),
            "slice end {end} exceeds source length {}",
            self.source.len()
        );
        &self.source[start..end]
    }

    /// Extract a source substring from `start` to the current position.
    ///
    /// Equivalent to `self.slice(start, self.pos())`.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance to the next `{` that is followed by `{`, `%`, or `}`.
    ///
    /// Returns `true` with the cursor on that `{`, which is not consumed.
    /// Returns `false` with the cursor at EOF when no such pair remains.
    pub fn skip_to_markup_start(&mut self) -> bool {
        let bytes = self.source.as_bytes();
        let mut from = self.pos;
        while let Some(offset) = memchr::memchr(b'{', bytes.get(from..).unwrap_or_default()) {
            let brace = from + offset;
            if opens_markup(self.byte_at(brace + 1)) {
                self.pos = brace;
                return true;
            }
            from = brace + 1;
        }
        self.pos = bytes.len();
        false
    }

    /// Advance past the next occurrence of `needle`.
    ///
    /// Returns `false` and leaves the cursor untouched when `needle` does not
    /// occur in the unread input.
    pub fn eat_past(&mut self, needle: &[u8]) -> bool {
        match memmem::find(self.rest(), needle) {
            Some(offset) => {
                self.pos += offset + needle.len();
                true
            }
            None => false,
        }
    }

    /// Advance to the next `\n` byte or EOF.
    ///
    /// The newline itself is not consumed.
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }
}

#[cfg(test)]
mod tests;
