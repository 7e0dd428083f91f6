use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("mut", TokenKind::Mut);
        map.insert("loop", TokenKind::Loop);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("or", TokenKind::Or);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::Bool);
        map.insert("false", TokenKind::Bool);
        for type_name in ["i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "f32", "f64", "bool", "char", "str"] {
            map.insert(type_name, TokenKind::Type);
        }
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Bool,
    Char,
    Str,
    Identifier,

    UnaryOperator,  // !
    BinaryOperator, // + - * / && ||

    Assign, // =
    Colon,
    Semicolon,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    Type,
    Let,
    Mut,
    Loop,
    While,
    For,
    Or,
    Break,
    Continue,
    If,
    Else,
}

impl TokenKind {
    /// The upper-case tag token producers and diagnostics agree on.
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Number => "NUMBER",
            TokenKind::Bool => "BOOL",
            TokenKind::Char => "CHAR",
            TokenKind::Str => "STR",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::UnaryOperator => "UNARY_OPERATOR",
            TokenKind::BinaryOperator => "BINARY_OPERATOR",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::OpenCurly => "OPEN_CURLY",
            TokenKind::CloseCurly => "CLOSE_CURLY",
            TokenKind::Type => "TYPE",
            TokenKind::Let => "LET",
            TokenKind::Mut => "MUT",
            TokenKind::Loop => "LOOP",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::Or => "OR",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.value)
    }
}

impl Token {
    /// Builds a token without source information, for token streams that do
    /// not come from text.
    pub fn new(kind: TokenKind, value: &str) -> Self {
        Token {
            kind,
            value: String::from(value),
            span: Span::null(),
        }
    }

    /// Whether this is a binary operator token spelling one of `symbols`.
    pub fn is_binary_operator(&self, symbols: &[&str]) -> bool {
        self.kind == TokenKind::BinaryOperator && symbols.contains(&self.value.as_str())
    }
}
