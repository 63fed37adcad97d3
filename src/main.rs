use std::{
    fs::{self, File},
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use cminus_lexer::{
    display_error,
    lexer::{
        lexer::{Lexer, LexerOptions},
        report::{write_report, ReportError},
    },
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cminus-lex", version, about = "Tokenize a C-minus source file")]
struct Cli {
    /// Source file to tokenize
    file: PathBuf,

    /// Fail on a block comment that is still open at end of input
    #[arg(long)]
    strict_comments: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "cminus_lexer=debug"
    } else {
        "cminus_lexer=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let file = File::open(&cli.file)
        .with_context(|| format!("Failed to open file: {}", cli.file.display()))?;

    let mut lexer = Lexer::for_reader(
        file,
        LexerOptions {
            strict_comments: cli.strict_comments,
            file: Some(cli.file.display().to_string()),
        },
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match write_report(&mut lexer, &mut out) {
        Ok(count) => {
            out.flush()?;
            info!(tokens = count, "tokenized {}", cli.file.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(ReportError::Lex(error)) => {
            out.flush()?;
            let content = fs::read(&cli.file)
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .unwrap_or_default();
            display_error(&error, &content);
            Ok(ExitCode::FAILURE)
        }
        Err(ReportError::Write(error)) => Err(error).context("Failed to write token report"),
    }
}
