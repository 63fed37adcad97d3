//! Error types for the lexer.
//!
//! Lexical anomalies (unrecognised characters, a bare `!`) are not errors
//! here: they are reported in-band as `TokenKind::Error` tokens. This module
//! only covers the failures that stop a scan:
//!
//! - The character source could not be read
//! - A block comment ran to end of input while strict comments are enabled

pub mod errors;
