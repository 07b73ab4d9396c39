//! Liquid lexer CLI
//!
//! Inspects how templates split into tokens.

use liqc::commands::{lex_file, parse_lex_args};

fn main() {
    liqc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => match parse_lex_args(&args[2..]) {
            Ok(options) => {
                if let Err(e) = lex_file(&options) {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!("Usage: liq lex <file> [--line-mode] [--line-numbers] [--start-line=N]");
                std::process::exit(1);
            }
        },
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage_to_stderr();
            std::process::exit(1);
        }
    }
}

const USAGE: &str = "\
Liquid lexer

Usage: liq <command> [options]

Commands:
  lex <file>    Print the token stream of a template
  help          Show this message

Options for lex:
  -l, --line-mode       One token per line (inline tag body)
  -n, --line-numbers    Report the line each token starts on
  --start-line=N        Start counting at line N (implies --line-numbers)

Set RUST_LOG=liq_lexer=trace to log every emitted token.";

fn print_usage() {
    println!("{USAGE}");
}

fn print_usage_to_stderr() {
    eprintln!("{USAGE}");
}
