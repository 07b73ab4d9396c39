//! `liq lex`: dump the token stream of a template.

use std::io::{self, Write};

use liq_lexer::Tokenizer;

use super::{LexError, LexOptions};

/// Lex a file and print the token stream to stdout.
///
/// # Errors
///
/// Fails when the file cannot be read as UTF-8 or stdout cannot be written.
pub fn lex_file(options: &LexOptions) -> Result<(), LexError> {
    let content = read_template(&options.path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tokens(&mut out, &content, options).map_err(LexError::Write)
}

/// Read a template, naming the common failures in terms of the path.
///
/// # Errors
///
/// [`LexError::NotFound`], [`LexError::PermissionDenied`] and
/// [`LexError::InvalidUtf8`] for the usual causes, [`LexError::Read`] otherwise.
pub fn read_template(path: &str) -> Result<String, LexError> {
    std::fs::read_to_string(path).map_err(|source| {
        let path = path.to_string();
        match source.kind() {
            io::ErrorKind::NotFound => LexError::NotFound { path },
            io::ErrorKind::PermissionDenied => LexError::PermissionDenied { path },
            io::ErrorKind::InvalidData => LexError::InvalidUtf8 { path },
            _ => LexError::Read { path, source },
        }
    })
}

/// Write one line per token: `Kind "text" @ start..end`, followed by
/// `(line N)` when line tracking is on.
pub fn write_tokens(out: &mut impl Write, source: &str, options: &LexOptions) -> io::Result<()> {
    let mut tokenizer = Tokenizer::with_options(source, options.tokenizer);
    let mut lines = Vec::new();
    loop {
        let line = tokenizer.line_number();
        let Some(token) = tokenizer.next_token() else {
            break;
        };
        let mut entry = format!("  {} {:?} @ {}", token.kind(), token.text(), token.span());
        if let Some(line) = line {
            entry.push_str(&format!(" (line {line})"));
        }
        lines.push(entry);
    }

    writeln!(out, "Tokens for '{}' ({} tokens):", options.path, lines.len())?;
    for entry in lines {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}
