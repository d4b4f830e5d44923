use clap::{Parser, Subcommand};
use promit_compiler::config::DEFAULT_MAX_SOURCE_LEN;
use promit_compiler::{CompileError, Configuration, Diagnostic};
use promit_lexer::{Scanner, Token, TokenKind};
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "promit")]
#[command(about = "Promit programming language front-end")]
#[command(version)]
struct Cli {
    /// Log front-end progress to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Refuse sources larger than this many bytes
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_SOURCE_LEN)]
    max_source_bytes: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a source file
    Tokens {
        /// Input source file
        path: String,
    },

    /// Check a source file for lexical errors
    Check {
        /// Input source file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Tokens { path } => cmd_tokens(&path, cli.max_source_bytes),
        Command::Check { path } => cmd_check(&path, cli.max_source_bytes),
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn read_source(path: &str, limit: usize) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::metadata(p) {
        Ok(meta) if meta.len() > limit as u64 => {
            eprintln!("Error: {path} is {} bytes, limit is {limit}", meta.len());
            std::process::exit(1);
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
    match std::fs::read_to_string(p) {
        Ok(source) => {
            tracing::debug!(path, bytes = source.len(), "read source");
            source
        }
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_tokens(path: &str, limit: usize) {
    let source = read_source(path, limit);

    let mut line = 0;
    for token in Scanner::new(&source) {
        if token.line() != line {
            print!("{:4} ", token.line());
            line = token.line();
        } else {
            print!("   | ");
        }
        println!("{}", format_token(&token));
    }
}

fn format_token(token: &Token<'_>) -> String {
    match token.kind {
        TokenKind::Eof => "Eof".to_string(),
        TokenKind::Error => format!("{:<20} {}", "Error", token.lexeme),
        TokenKind::Number => format!(
            "{:<20} '{}' = {}",
            "Number",
            token.lexeme,
            token.as_number().unwrap_or_default()
        ),
        kind => format!("{:<20} '{}'", format!("{kind:?}"), token.lexeme.escape_debug()),
    }
}

fn cmd_check(path: &str, limit: usize) {
    let source = read_source(path, limit);

    let mut config = Configuration::new()
        .with_module(path)
        .with_max_source_len(limit)
        .with_error_sink(|d: &Diagnostic<'_>| eprintln!("{d}\n"));

    match promit_compiler::compile(&source, &mut config) {
        Ok(report) => {
            eprintln!("OK: {path} ({} tokens, {} lines)", report.tokens, report.lines);
        }
        Err(CompileError::Lexical { errors, .. }) => {
            eprintln!("Error: {path}: {errors} lexical error(s)");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
