//! Markup-mode scanning: text, `{{ ... }}` variables, `{% ... %}` tags.
//!
//! # Design
//!
//! Dispatch peeks at the two bytes under the cursor. `{%` scans a tag, `{{`
//! scans a variable, anything else scans text up to the next `{{`, `{%`,
//! or `{}`.
//!
//! `{{` does not guarantee a variable: a tag opener can show up before the
//! variable closer (`{{ {% if a %}`). The variable scan therefore walks the
//! region one byte pair at a time and redirects to a tag scan from the
//! original `{{` as soon as it sees `{%`.
//!
//! # Degenerate tokens
//!
//! - Unterminated tag: the token is just the two-byte opener and scanning
//!   resumes right after it, so the rest is re-tokenized as ordinary input.
//! - Unterminated variable: the token is the two-byte `{{` opener and the
//!   cursor jumps to EOF. Everything scanned after the opener is dropped from
//!   the stream. Callers that need full coverage must check for this.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::{LineCounter, Mode};
use crate::token::{scan_variable_body, VariableScan, TAG_CLOSE, TAG_OPEN, VARIABLE_OPEN};
use crate::{Cursor, SourceBuffer, Span, SyntaxError, Token};

/// Tokenizer for general template source.
#[derive(Clone, Debug)]
pub struct MarkupTokenizer<'a> {
    cursor: Cursor<'a>,
    line: LineCounter,
}

impl<'a> MarkupTokenizer<'a> {
    /// Create a tokenizer at the start of `source`; `line` is the starting
    /// line, or `None` to disable line tracking.
    pub fn new(source: &'a str, line: Option<u32>) -> Self {
        Self {
            cursor: SourceBuffer::new(source).cursor(),
            line: LineCounter::new(line),
        }
    }

    /// Produce the next token, or `None` once the source is exhausted.
    ///
    /// The line counter advances by the number of `\n` bytes in the emitted
    /// token.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.cursor.is_eof() {
            return None;
        }

        let token = if self.cursor.at(TAG_OPEN.as_bytes()) {
            let opener = self.cursor;
            self.cursor.advance_n(TAG_OPEN.len());
            self.tag(opener)
        } else if self.cursor.at(VARIABLE_OPEN.as_bytes()) {
            self.variable()
        } else {
            self.text()
        };

        self.line.advance_by(token.newline_count());
        trace!(
            kind = %token.kind(),
            span = %token.span(),
            line = ?self.line.get(),
            "markup token"
        );
        Some(token)
    }

    pub fn line_number(&self) -> Option<u32> {
        self.line.get()
    }

    pub fn mode(&self) -> Mode {
        Mode::Markup
    }

    /// Fail the current parse with a [`SyntaxError`] at the current line.
    pub fn raise_syntax_error<T>(&self, message: impl Into<String>) -> Result<T, SyntaxError> {
        self.line.syntax_error(message)
    }

    /// Token from `start` to the cursor.
    fn token_from(&self, start: usize) -> Token<'a> {
        Token::new(
            self.cursor.slice_from(start),
            Span::new(start, self.cursor.pos()),
        )
    }

    // ─── Text ─────────────────────────────────────────────────────

    fn text(&mut self) -> Token<'a> {
        let start = self.cursor.pos();
        // The first byte always belongs to the text token, even when it is
        // the `{` of a `{}` pair, so every call makes progress.
        self.cursor.advance();
        self.cursor.skip_to_markup_start();
        self.token_from(start)
    }

    // ─── Tags ─────────────────────────────────────────────────────

    /// Finish a tag whose region began at `opener`.
    ///
    /// The cursor must already be past the `{%` that makes this a tag. For a
    /// plain tag that is the opener itself; after a variable redirect it is
    /// the `{%` found inside the would-be variable.
    fn tag(&mut self, opener: Cursor<'a>) -> Token<'a> {
        let start = opener.pos();
        if self.cursor.eat_past(TAG_CLOSE.as_bytes()) {
            return self.token_from(start);
        }

        // Unterminated: emit the two-byte opener and rescan what follows.
        self.cursor = opener;
        self.cursor.advance_n(TAG_OPEN.len());
        debug!(start, "unterminated tag");
        self.token_from(start)
    }

    // ─── Variables ────────────────────────────────────────────────

    fn variable(&mut self) -> Token<'a> {
        let opener = self.cursor;
        let start = opener.pos();
        self.cursor.advance_n(VARIABLE_OPEN.len());

        let body = self.cursor.rest();
        match scan_variable_body(body) {
            VariableScan::Closed(len) => {
                self.cursor.advance_n(len);
                self.token_from(start)
            }
            VariableScan::Redirected(len) => {
                self.cursor.advance_n(len);
                self.tag(opener)
            }
            VariableScan::Unterminated => {
                // The scanned bytes are dropped and the cursor stays at EOF.
                // Only the opener is emitted.
                self.cursor.advance_n(body.len());
                debug!(start, dropped = body.len(), "unterminated variable");
                Token::new(
                    opener.slice(start, start + VARIABLE_OPEN.len()),
                    Span::new(start, start + VARIABLE_OPEN.len()),
                )
            }
        }
    }
}

impl<'a> Iterator for MarkupTokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.next_token()
    }
}

impl FusedIterator for MarkupTokenizer<'_> {}
