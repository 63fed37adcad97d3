use std::{io::Read, iter::FusedIterator, rc::Rc};

use tracing::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::{
    source::{CharSource, ReadSource, StrSource},
    tokens::{Token, TokenKind, EOF_LEXEME, RESERVED_LOOKUP},
};

#[derive(Debug, Clone, Default)]
pub struct LexerOptions {
    /// Report a block comment still open at end of input as an error
    /// instead of silently ending the scan.
    pub strict_comments: bool,
    /// Name used in spans and diagnostics, `shell` when absent.
    pub file: Option<String>,
}

pub struct Lexer<S: CharSource> {
    source: S,
    file: Rc<String>,
    strict_comments: bool,
}

impl<'a> Lexer<StrSource<'a>> {
    pub fn for_str(source: &'a str, options: LexerOptions) -> Self {
        Lexer::new(StrSource::new(source), options)
    }
}

impl<R: Read> Lexer<ReadSource<R>> {
    pub fn for_reader(reader: R, options: LexerOptions) -> Self {
        let file = file_name(&options);
        Lexer {
            source: ReadSource::new(reader, Rc::clone(&file)),
            file,
            strict_comments: options.strict_comments,
        }
    }
}

fn file_name(options: &LexerOptions) -> Rc<String> {
    match &options.file {
        Some(file) => Rc::new(file.clone()),
        None => Rc::new(String::from("shell")),
    }
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

impl<S: CharSource> Lexer<S> {
    pub fn new(source: S, options: LexerOptions) -> Self {
        Lexer {
            source,
            file: file_name(&options),
            strict_comments: options.strict_comments,
        }
    }

    /// Scans the next token. Once the source is exhausted every call
    /// returns an `EOF` token.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            self.skip_whitespace()?;

            let start = self.source.offset();
            let Some(c) = self.source.bump()? else {
                debug!(file = %self.file, offset = start, "end of input");
                return Ok(MK_TOKEN!(
                    TokenKind::EOF,
                    String::from(EOF_LEXEME),
                    MK_SPAN!(start, start, self.file)
                ));
            };

            let (kind, value) = match c {
                c if c.is_ascii_alphabetic() => self.scan_word(c)?,
                c if c.is_ascii_digit() => (TokenKind::Number, self.scan_number(c)?),
                '/' => {
                    if self.source.peek()? == Some('*') {
                        self.source.bump()?;
                        self.skip_comment(start)?;
                        continue;
                    }
                    (TokenKind::Divide, String::from("/"))
                }
                '<' => self.scan_with_equals(c, TokenKind::Less, TokenKind::LessEquals)?,
                '>' => self.scan_with_equals(c, TokenKind::Greater, TokenKind::GreaterEquals)?,
                '=' => self.scan_with_equals(c, TokenKind::Assignment, TokenKind::Equals)?,
                // A bare `!` is not part of the language
                '!' => self.scan_with_equals(c, TokenKind::Error, TokenKind::NotEquals)?,
                _ => match TokenKind::from_symbol(c) {
                    Some(kind) => (kind, c.to_string()),
                    None => (TokenKind::Error, c.to_string()),
                },
            };

            let token = MK_TOKEN!(kind, value, MK_SPAN!(start, self.source.offset(), self.file));
            trace!(kind = %token.kind, lexeme = %token.value, offset = start, "token");
            return Ok(token);
        }
    }

    /// Lazily yields every remaining token, ending after `EOF` or the
    /// first error.
    pub fn tokens(&mut self) -> Tokens<'_, S> {
        Tokens {
            lexer: self,
            done: false,
        }
    }

    fn skip_whitespace(&mut self) -> Result<(), Error> {
        while let Some(c) = self.source.peek()? {
            if !is_space(c) {
                break;
            }
            self.source.bump()?;
        }

        Ok(())
    }

    fn skip_comment(&mut self, start: u32) -> Result<(), Error> {
        let mut prev = None;

        loop {
            match self.source.bump()? {
                Some('/') if prev == Some('*') => break,
                Some(c) => prev = Some(c),
                None if self.strict_comments => {
                    return Err(Error::new(
                        ErrorImpl::UnterminatedComment,
                        Position(start, Rc::clone(&self.file)),
                    ));
                }
                None => {
                    warn!(file = %self.file, offset = start, "unterminated block comment");
                    return Ok(());
                }
            }
        }

        debug!(
            file = %self.file,
            start,
            end = self.source.offset(),
            "skipped block comment"
        );
        Ok(())
    }

    fn scan_word(&mut self, first: char) -> Result<(TokenKind, String), Error> {
        let mut value = String::from(first);
        while let Some(c) = self.source.peek()? {
            if !c.is_ascii_alphanumeric() {
                break;
            }
            value.push(c);
            self.source.bump()?;
        }

        let kind = match RESERVED_LOOKUP.get(value.as_str()) {
            Some(kind) => *kind,
            None => TokenKind::Identifier,
        };

        Ok((kind, value))
    }

    fn scan_number(&mut self, first: char) -> Result<String, Error> {
        let mut value = String::from(first);
        while let Some(c) = self.source.peek()? {
            if !c.is_ascii_digit() {
                break;
            }
            value.push(c);
            self.source.bump()?;
        }

        Ok(value)
    }

    fn scan_with_equals(
        &mut self,
        first: char,
        single: TokenKind,
        double: TokenKind,
    ) -> Result<(TokenKind, String), Error> {
        if self.source.peek()? == Some('=') {
            self.source.bump()?;
            return Ok((double, format!("{}=", first)));
        }

        Ok((single, first.to_string()))
    }
}

pub struct Tokens<'l, S: CharSource> {
    lexer: &'l mut Lexer<S>,
    done: bool,
}

impl<S: CharSource> Iterator for Tokens<'_, S> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let next = self.lexer.next_token();
        self.done = match &next {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };

        Some(next)
    }
}

impl<S: CharSource> FusedIterator for Tokens<'_, S> {}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::for_str(
        &source,
        LexerOptions {
            file,
            ..LexerOptions::default()
        },
    );

    lex.tokens().collect()
}
