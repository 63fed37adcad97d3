//! Line-per-token report, the format the reference CLI prints.

use std::io::Write;

use crate::errors::errors::Error;

use super::{lexer::Lexer, source::CharSource, tokens::Token};

/// Width the kind column is padded to.
pub const KIND_WIDTH: usize = 10;

pub fn format_token(token: &Token) -> String {
    format!(
        "Token: {:<width$} | Lexeme: {}",
        token.kind.display_name(),
        token.value,
        width = KIND_WIDTH
    )
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("{0}")]
    Lex(#[from] Error),
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

/// Writes one line per token until end of input, which is not written.
/// Returns how many lines were written.
pub fn write_report<S: CharSource, W: Write>(
    lexer: &mut Lexer<S>,
    out: &mut W,
) -> Result<usize, ReportError> {
    let mut written = 0;

    for token in lexer.tokens() {
        let token = token?;
        if token.is_eof() {
            break;
        }

        writeln!(out, "{}", format_token(&token))?;
        written += 1;
    }

    Ok(written)
}
