//! Line-mode scanning for inline tag bodies.
//!
//! Each token is one source line without its trailing `\n`. A `\r` before
//! the newline stays in the token. The counter moves by exactly one line per
//! token, whatever the token contains.

use std::iter::FusedIterator;

use tracing::trace;

use super::{LineCounter, Mode};
use crate::{Cursor, SourceBuffer, Span, SyntaxError, Token};

/// Tokenizer that yields one token per line.
#[derive(Clone, Debug)]
pub struct LineTokenizer<'a> {
    cursor: Cursor<'a>,
    line: LineCounter,
}

impl<'a> LineTokenizer<'a> {
    /// Create a tokenizer at the start of `source`; `line` is the starting
    /// line, or `None` to disable line tracking.
    pub fn new(source: &'a str, line: Option<u32>) -> Self {
        Self {
            cursor: SourceBuffer::new(source).cursor(),
            line: LineCounter::new(line),
        }
    }

    /// Produce the next line, or `None` once the source is exhausted.
    ///
    /// A trailing `\n` at the very end of the source does not produce an
    /// empty final token.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.cursor.is_eof() {
            return None;
        }

        let start = self.cursor.pos();
        self.cursor.eat_until_newline_or_eof();
        let token = Token::new(
            self.cursor.slice_from(start),
            Span::new(start, self.cursor.pos()),
        );
        if !self.cursor.is_eof() {
            self.cursor.advance(); // '\n'
        }

        self.line.advance_by(1);
        trace!(span = %token.span(), line = ?self.line.get(), "line token");
        Some(token)
    }

    pub fn line_number(&self) -> Option<u32> {
        self.line.get()
    }

    pub fn mode(&self) -> Mode {
        Mode::Line
    }

    /// Fail the current parse with a [`SyntaxError`] at the current line.
    pub fn raise_syntax_error<T>(&self, message: impl Into<String>) -> Result<T, SyntaxError> {
        self.line.syntax_error(message)
    }
}

impl<'a> Iterator for LineTokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.next_token()
    }
}

impl FusedIterator for LineTokenizer<'_> {}
