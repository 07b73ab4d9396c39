//! Borrowed tokens and their shape classification.
//!
//! A [`Token`] is an exact byte range of the template source. The tokenizer
//! never tags what it emits; [`TokenKind::classify`] lets the parser decide
//! from the token's delimiters, the same way it would by hand.

use std::fmt;

/// Opener of a tag region.
pub const TAG_OPEN: &str = "{%";
/// Closer of a tag region.
pub const TAG_CLOSE: &str = "%}";
/// Opener of a variable region.
pub const VARIABLE_OPEN: &str = "{{";
/// Closer of a variable region.
pub const VARIABLE_CLOSE: &str = "}}";

/// Half-open byte range `[start, end)` into the template source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Shape of a token, judged by its delimiters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Literal template text.
    Text,
    /// Starts with `{{`.
    Variable,
    /// Starts with `{%`, or is a tag reached from inside a `{{` region.
    Tag,
}

impl TokenKind {
    /// Classify a token's text.
    ///
    /// A tag that begins inside a variable region (`{{ {% if a %}`) keeps the
    /// `{{` opener. Such a token is told apart by replaying the variable
    /// walk over it: if the walk reaches a tag opener, the token is a `Tag`.
    /// Neither the suffix nor a search for `{%` decides this alone, since
    /// `{{ }%}` is a variable and `{{ {}% a %}` is a tag.
    ///
    /// Degenerate tokens classify by shape too: a lone `{%` from an
    /// unterminated tag is a `Tag`, a lone `{{` is a `Variable`. Telling
    /// them apart from well-formed regions is the parser's job.
    pub fn classify(text: &str) -> Self {
        if text.starts_with(TAG_OPEN) {
            TokenKind::Tag
        } else if let Some(body) = text.strip_prefix(VARIABLE_OPEN) {
            match scan_variable_body(body.as_bytes()) {
                VariableScan::Redirected(_) => TokenKind::Tag,
                VariableScan::Closed(_) | VariableScan::Unterminated => TokenKind::Variable,
            }
        } else {
            TokenKind::Text
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::Variable => "Variable",
            TokenKind::Tag => "Tag",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the walk over a variable body stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum VariableScan {
    /// `}}` closed the variable. Holds the body length through the closer.
    Closed(usize),
    /// A tag opener turned up first. Holds the body length through its `%`.
    Redirected(usize),
    Unterminated,
}

/// Walk the bytes after a `{{` over (previous, current) pairs.
///
/// The opener's own bytes are not part of the walk, so `{{%` does not
/// redirect. A brace followed by an unmatched `}` or `%` stays the previous
/// byte: `{{ }%}}` closes at `}%}`, and `{{ {}}` never closes.
pub(crate) fn scan_variable_body(body: &[u8]) -> VariableScan {
    let mut prev = 0u8;
    for (i, &byte) in body.iter().enumerate() {
        match (prev, byte) {
            (a, b) if VARIABLE_CLOSE.as_bytes() == [a, b] => return VariableScan::Closed(i + 1),
            (b'{', b'%') => return VariableScan::Redirected(i + 1),
            (b'{' | b'}', b'}' | b'%') => {}
            _ => prev = byte,
        }
    }
    VariableScan::Unterminated
}

/// A view into the template source produced by the tokenizer.
///
/// `text` is always `&source[span.start..span.end]`; nothing is copied or
/// normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    text: &'a str,
    span: Span,
}

impl<'a> Token<'a> {
    pub(crate) fn new(text: &'a str, span: Span) -> Self {
        debug_assert_eq!(text.len(), span.len(), "token text does not match span {span}");
        Self { text, span }
    }

    /// The exact source bytes of this token.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Where this token sits in the source.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Classify this token by its delimiters.
    pub fn kind(&self) -> TokenKind {
        TokenKind::classify(self.text)
    }

    /// Number of `\n` bytes inside the token.
    pub fn newline_count(&self) -> usize {
        memchr::memchr_iter(b'\n', self.text.as_bytes()).count()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl AsRef<str> for Token<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

#[cfg(test)]
mod tests;
