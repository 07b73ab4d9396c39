//! Syntax errors raised by the parser on top of the token stream.
//!
//! The tokenizer itself never fails: malformed markup becomes a degenerate
//! token instead. A parser that rejects a token stamps its error with the
//! tokenizer's current line through
//! [`Tokenizer::raise_syntax_error`](crate::Tokenizer::raise_syntax_error).

use thiserror::Error;

/// Fatal syntax error for the current parse.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error("Liquid syntax error{}: {message}", line_suffix(.line))]
pub struct SyntaxError {
    /// What the parser rejected.
    pub message: String,
    /// Tokenizer line at the point of error, when line tracking is on.
    pub line: Option<u32>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

#[allow(
    clippy::ref_option,
    reason = "thiserror hands format arguments the field by reference"
)]
fn line_suffix(line: &Option<u32>) -> String {
    match line {
        Some(line) => format!(" (line {line})"),
        None => String::new(),
    }
}
