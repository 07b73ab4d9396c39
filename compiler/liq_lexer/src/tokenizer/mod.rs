//! Pull-based tokenizer over template source.
//!
//! Two scanning modes exist, each its own type:
//!
//! - [`MarkupTokenizer`]: splits general template source into text,
//!   `{{ ... }}` variable, and `{% ... %}` tag tokens.
//! - [`LineTokenizer`]: splits the inline body of a single tag into one
//!   token per source line.
//!
//! [`Tokenizer`] wraps exactly one of them, chosen once at construction from
//! [`TokenizerOptions`]. Neither mode ever fails: malformed markup produces
//! degenerate tokens and scanning carries on.
//!
//! # Concurrency
//!
//! A tokenizer is a single-consumer cursor. `next_token` takes `&mut self`,
//! so sharing one instance across threads needs external serialization.
//! Independent instances over the same source share nothing mutable.

mod line;
mod markup;

pub use line::LineTokenizer;
pub use markup::MarkupTokenizer;

use std::iter::FusedIterator;

use crate::{SyntaxError, Token};

/// Scanning mode, fixed for the lifetime of a tokenizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// General template source: text, variables, and tags.
    #[default]
    Markup,
    /// Inline tag body: one token per line, newline excluded.
    Line,
}

/// Construction options for [`Tokenizer`].
///
/// ```
/// use liq_lexer::{Mode, Tokenizer, TokenizerOptions};
///
/// let options = TokenizerOptions::new().start_line(3).mode(Mode::Line);
/// let mut tokens = Tokenizer::with_options("echo a\necho b", options);
/// assert_eq!(tokens.next_token().map(|t| t.text()), Some("echo a"));
/// assert_eq!(tokens.line_number(), Some(4));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    line_numbers: bool,
    start_line: Option<u32>,
    mode: Mode,
}

impl TokenizerOptions {
    /// Markup mode, no line tracking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track line numbers, starting at 1 unless [`start_line`](Self::start_line)
    /// says otherwise.
    #[must_use]
    pub fn line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    /// Start counting at `line`. Enables line tracking on its own.
    #[must_use]
    pub fn start_line(mut self, line: u32) -> Self {
        self.start_line = Some(line);
        self
    }

    /// Scan markup (the default) or one line per token.
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Line the counter starts at, or `None` when tracking is off.
    pub fn initial_line(&self) -> Option<u32> {
        self.start_line.or(self.line_numbers.then_some(1))
    }
}

/// Optional line counter shared by both scanning modes.
///
/// Only moves forward, and only when a token is emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct LineCounter(Option<u32>);

impl LineCounter {
    pub(crate) fn new(start: Option<u32>) -> Self {
        Self(start)
    }

    #[inline]
    pub(crate) fn get(self) -> Option<u32> {
        self.0
    }

    /// Saturates at `u32::MAX`.
    #[inline]
    pub(crate) fn advance_by(&mut self, lines: usize) {
        if let Some(line) = &mut self.0 {
            let lines = u32::try_from(lines).unwrap_or(u32::MAX);
            *line = line.saturating_add(lines);
        }
    }

    pub(crate) fn syntax_error<T>(self, message: impl Into<String>) -> Result<T, SyntaxError> {
        let err = SyntaxError::new(message, self.0);
        tracing::debug!(line = ?err.line, message = %err.message, "syntax error raised");
        Err(err)
    }
}

/// Tokenizer over a complete template source, in one of two modes.
///
/// Driven to exhaustion by [`next_token`](Self::next_token) (or by iterating).
/// Once it returns `None` it keeps returning `None`.
///
/// ```
/// use liq_lexer::{TokenKind, Tokenizer};
///
/// let kinds: Vec<_> = Tokenizer::new("Hi {{ name }}!{% if a %}")
///     .map(|t| t.kind())
///     .collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Text, TokenKind::Variable, TokenKind::Text, TokenKind::Tag]
/// );
/// ```
#[derive(Clone, Debug)]
pub enum Tokenizer<'a> {
    Markup(MarkupTokenizer<'a>),
    Line(LineTokenizer<'a>),
}

impl<'a> Tokenizer<'a> {
    /// Markup mode, no line tracking.
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, TokenizerOptions::default())
    }

    /// Build the scanner `options.mode` selects, with the line counter at
    /// [`TokenizerOptions::initial_line`].
    pub fn with_options(source: &'a str, options: TokenizerOptions) -> Self {
        let line = options.initial_line();
        match options.mode {
            Mode::Markup => Tokenizer::Markup(MarkupTokenizer::new(source, line)),
            Mode::Line => Tokenizer::Line(LineTokenizer::new(source, line)),
        }
    }

    /// Produce the next token, or `None` once the source is exhausted.
    #[inline]
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        match self {
            Tokenizer::Markup(tokenizer) => tokenizer.next_token(),
            Tokenizer::Line(tokenizer) => tokenizer.next_token(),
        }
    }

    /// Current line, or `None` when line tracking is off.
    pub fn line_number(&self) -> Option<u32> {
        match self {
            Tokenizer::Markup(tokenizer) => tokenizer.line_number(),
            Tokenizer::Line(tokenizer) => tokenizer.line_number(),
        }
    }

    /// Mode this tokenizer was built in.
    pub fn mode(&self) -> Mode {
        match self {
            Tokenizer::Markup(_) => Mode::Markup,
            Tokenizer::Line(_) => Mode::Line,
        }
    }

    /// Fail the current parse with a [`SyntaxError`] at the current line.
    ///
    /// For the parser's use; the tokenizer never calls this itself.
    pub fn raise_syntax_error<T>(&self, message: impl Into<String>) -> Result<T, SyntaxError> {
        match self {
            Tokenizer::Markup(tokenizer) => tokenizer.raise_syntax_error(message),
            Tokenizer::Line(tokenizer) => tokenizer.raise_syntax_error(message),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.next_token()
    }
}

impl FusedIterator for Tokenizer<'_> {}

impl<'a> From<MarkupTokenizer<'a>> for Tokenizer<'a> {
    fn from(tokenizer: MarkupTokenizer<'a>) -> Self {
        Tokenizer::Markup(tokenizer)
    }
}

impl<'a> From<LineTokenizer<'a>> for Tokenizer<'a> {
    fn from(tokenizer: LineTokenizer<'a>) -> Self {
        Tokenizer::Line(tokenizer)
    }
}
