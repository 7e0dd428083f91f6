//! Token model and reference token source.
//!
//! The parser consumes any ordered `Vec<Token>`; this module defines the token
//! kinds it understands and ships a regex-driven tokenizer producing them:
//!
//! - Keywords, type names and boolean literals through a reserved-word table
//! - Number, char and string literals (char/string lexemes keep their quotes)
//! - Operators and punctuation
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
