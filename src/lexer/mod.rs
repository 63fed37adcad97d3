//! Lexical analysis for C-minus.
//!
//! This module turns a stream of characters into tokens for a parser. It
//! handles:
//!
//! - Keywords, identifiers and integer literals
//! - Operators, with one character of lookahead for `<=`, `>=`, `==`, `!=`
//! - Block comments and whitespace, which never produce tokens
//! - Unrecognised characters, reported as `TokenKind::Error` tokens

pub mod lexer;
pub mod report;
pub mod source;
pub mod tokens;
