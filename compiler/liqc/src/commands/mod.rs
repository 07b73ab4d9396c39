//! Commands behind the `liq` binary.

mod lex;

pub use lex::{lex_file, read_template, write_tokens};

use liq_lexer::{Mode, TokenizerOptions};

/// Options accepted by `liq lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub path: String,
    pub tokenizer: TokenizerOptions,
}

/// Parse the arguments following `liq lex`.
///
/// Accepts exactly one file path plus any of `--line-mode`,
/// `--line-numbers`, and `--start-line=N`.
pub fn parse_lex_args(args: &[String]) -> Result<LexOptions, String> {
    let mut path = None;
    let mut tokenizer = TokenizerOptions::new();

    for arg in args {
        if arg == "--line-mode" || arg == "-l" {
            tokenizer = tokenizer.mode(Mode::Line);
        } else if arg == "--line-numbers" || arg == "-n" {
            tokenizer = tokenizer.line_numbers(true);
        } else if let Some(value) = arg.strip_prefix("--start-line=") {
            let line = value
                .parse::<u32>()
                .map_err(|e| format!("invalid --start-line value '{value}': {e}"))?;
            tokenizer = tokenizer.start_line(line);
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok(LexOptions { path, tokenizer })
}

/// Failures of `liq lex` after its arguments parsed.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("error writing tokens: {0}")]
    Write(#[source] std::io::Error),
}
