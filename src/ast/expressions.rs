use super::ast::{indentation, Expression};

// LITERALS

/// Identifier
/// A name looked up in the symbol table. Owns no children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: &str) -> Self {
        Identifier {
            name: String::from(name),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn repr(&self, indent: usize) -> String {
        indentation(indent) + &self.name
    }
}

/// Number Expression
/// Every numeric literal, whatever the declared width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberExpression {
    pub value: f64,
}

impl NumberExpression {
    pub fn repr(&self, indent: usize) -> String {
        format!("{}{}", indentation(indent), self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanExpression {
    pub value: bool,
}

impl BooleanExpression {
    pub fn repr(&self, indent: usize) -> String {
        format!("{}{}", indentation(indent), self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharExpression {
    pub value: char,
}

impl CharExpression {
    pub fn repr(&self, indent: usize) -> String {
        format!("{}'{}'", indentation(indent), self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrExpression {
    pub value: String,
}

impl StrExpression {
    pub fn repr(&self, indent: usize) -> String {
        format!("{}\"{}\"", indentation(indent), self.value)
    }
}

// CONTAINERS

/// Unary Expression
/// Only the logical NOT survives as a node; negation is rewritten by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub term: Box<Expression>,
    pub operator_symbol: String,
}

impl UnaryExpression {
    pub fn repr(&self, indent: usize) -> String {
        format!(
            "{tabs}(\n{inner}{operator}\n{term}\n{tabs})",
            tabs = indentation(indent),
            inner = indentation(indent + 1),
            operator = self.operator_symbol,
            term = self.term.repr(indent + 1),
        )
    }
}

/// Binary Expression
/// Arithmetic (`+ - * /`) and logical (`&& ||`) operations.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator_symbol: String,
    pub right: Box<Expression>,
}

impl BinaryExpression {
    pub fn repr(&self, indent: usize) -> String {
        format!(
            "{tabs}(\n{left}\n{inner}{operator}\n{right}\n{tabs})",
            tabs = indentation(indent),
            left = self.left.repr(indent + 1),
            inner = indentation(indent + 1),
            operator = self.operator_symbol,
            right = self.right.repr(indent + 1),
        )
    }
}
