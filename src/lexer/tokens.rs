use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map.insert("int", TokenKind::Int);
        map.insert("void", TokenKind::Void);
        map
    };

    /// Names used by the token report, one per kind.
    pub static ref DISPLAY_LOOKUP: HashMap<TokenKind, &'static str> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::If, "IF");
        map.insert(TokenKind::Else, "ELSE");
        map.insert(TokenKind::While, "WHILE");
        map.insert(TokenKind::Return, "RETURN");
        map.insert(TokenKind::Int, "INT");
        map.insert(TokenKind::Void, "VOID");
        map.insert(TokenKind::Identifier, "ID");
        map.insert(TokenKind::Number, "NUM");
        map.insert(TokenKind::Plus, "PLUS");
        map.insert(TokenKind::Minus, "MINUS");
        map.insert(TokenKind::Times, "TIMES");
        map.insert(TokenKind::Divide, "OVER");
        map.insert(TokenKind::Less, "LT");
        map.insert(TokenKind::LessEquals, "LE");
        map.insert(TokenKind::Greater, "GT");
        map.insert(TokenKind::GreaterEquals, "GE");
        map.insert(TokenKind::Equals, "EQ");
        map.insert(TokenKind::NotEquals, "NE");
        map.insert(TokenKind::Assignment, "ASSIGN");
        map.insert(TokenKind::Semicolon, "SEMI");
        map.insert(TokenKind::Comma, "COMMA");
        map.insert(TokenKind::OpenParen, "LPAREN");
        map.insert(TokenKind::CloseParen, "RPAREN");
        map.insert(TokenKind::OpenBracket, "LBRACKET");
        map.insert(TokenKind::CloseBracket, "RBRACKET");
        map.insert(TokenKind::OpenCurly, "LBRACE");
        map.insert(TokenKind::CloseCurly, "RBRACE");
        map.insert(TokenKind::EOF, "ENDFILE");
        map.insert(TokenKind::Error, "ERROR");
        map
    };
}

/// Lexeme carried by the end-of-input token.
pub const EOF_LEXEME: &str = "EOF";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Reserved
    If,
    Else,
    While,
    Return,
    Int,
    Void,

    Identifier,
    Number,

    Plus,
    Minus,
    Times,
    Divide,

    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,     // ==
    NotEquals,  // !=
    Assignment, // =

    Semicolon,
    Comma,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    EOF,
    Error,
}

impl TokenKind {
    pub fn display_name(&self) -> &'static str {
        DISPLAY_LOOKUP.get(self).copied().unwrap_or("UNKNOWN")
    }

    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Return
                | TokenKind::Int
                | TokenKind::Void
        )
    }

    /// Kind of a single-character symbol that never needs lookahead.
    pub fn from_symbol(c: char) -> Option<TokenKind> {
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Times,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            '{' => TokenKind::OpenCurly,
            '}' => TokenKind::CloseCurly,
            _ => return None,
        };

        Some(kind)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}
