//! Lexical scanner for Liquid templates.
//!
//! Splits template source into a flat, lossless stream of borrowed tokens:
//! literal text, `{{ ... }}` variable regions, and `{% ... %}` tag regions.
//! Parsing what is inside a region is left to the parser, which pulls one
//! token at a time and classifies each by its delimiters.
//!
//! # Architecture
//!
//! - [`SourceBuffer`]: read-only view over the template source
//! - [`Cursor`]: `Copy` byte cursor with `memchr`-backed delimiter search
//! - [`Tokenizer`]: markup-mode or line-mode scanner, fixed at construction
//! - [`Token`]: `&str` slice plus [`Span`]; [`TokenKind`] classifies it
//! - [`SyntaxError`]: raised by the parser, stamped with the current line
//!
//! Concatenating every token reproduces the source exactly, except after an
//! unterminated `{{`, which emits the bare opener and drops the rest.
//!
//! ```
//! use liq_lexer::Tokenizer;
//!
//! let tokens: Vec<_> = Tokenizer::new("Hello {{ name }}!").map(|t| t.text()).collect();
//! assert_eq!(tokens, ["Hello ", "{{ name }}", "!"]);
//! ```

mod cursor;
mod error;
mod source_buffer;
mod token;
mod tokenizer;

pub use cursor::Cursor;
pub use error::SyntaxError;
pub use source_buffer::SourceBuffer;
pub use token::{Span, Token, TokenKind, TAG_CLOSE, TAG_OPEN, VARIABLE_CLOSE, VARIABLE_OPEN};
pub use tokenizer::{LineTokenizer, MarkupTokenizer, Mode, Tokenizer, TokenizerOptions};
