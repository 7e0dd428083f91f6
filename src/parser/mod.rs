//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into statements. Productions are registered by name in a
//! table, and each level of the precedence cascade falls through to the next
//! one by looking it up:
//!
//! - Statements: conditionals, loops, `break`/`continue`, declarations and
//!   assignations
//! - Binary levels: logical, additive, multiplicative (right-associative)
//! - Unary `!` and negation, then primaries: parenthesis, string, char,
//!   boolean, identifier, number
//!
//! Expressions are folded as they are built, and declarations/assignations
//! are validated against the symbol table before they are returned.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
