use std::fmt::Display;

use super::{
    expressions::{
        BinaryExpression, BooleanExpression, CharExpression, Identifier, NumberExpression,
        StrExpression, UnaryExpression,
    },
    statements::{
        AssignationExpression, BreakExpression, ConditionnalStructure, ContinueExpression,
        DeclarationExpression, ForExpression, LoopExpression, WhileExpression,
    },
};

/// Node Types
///
/// One tag per node kind; no two kinds share a tag.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum NodeType {
    Identifier,
    NumberExpression,
    BooleanExpression,
    CharExpression,
    StrExpression,
    UnaryExpression,
    BinaryExpression,
    AssignationExpression,
    DeclarationExpression,
    OrExpression,
    LoopExpression,
    WhileExpression,
    ForExpression,
    BreakExpression,
    ContinueExpression,
    ConditionnalExpression,
    ConditionnalStructure,
}

impl NodeType {
    pub const ALL: [NodeType; 17] = [
        NodeType::Identifier,
        NodeType::NumberExpression,
        NodeType::BooleanExpression,
        NodeType::CharExpression,
        NodeType::StrExpression,
        NodeType::UnaryExpression,
        NodeType::BinaryExpression,
        NodeType::AssignationExpression,
        NodeType::DeclarationExpression,
        NodeType::OrExpression,
        NodeType::LoopExpression,
        NodeType::WhileExpression,
        NodeType::ForExpression,
        NodeType::BreakExpression,
        NodeType::ContinueExpression,
        NodeType::ConditionnalExpression,
        NodeType::ConditionnalStructure,
    ];
}

impl Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Indentation prefix used by every `repr`.
pub fn indentation(indent: usize) -> String {
    "\t".repeat(indent)
}

/// Expression
///
/// Every node kind that can appear where a value is expected.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Number(NumberExpression),
    Boolean(BooleanExpression),
    Char(CharExpression),
    Str(StrExpression),
    Unary(UnaryExpression),
    Binary(BinaryExpression),
    Loop(LoopExpression),
    While(WhileExpression),
    For(ForExpression),
    Break(BreakExpression),
    Continue(ContinueExpression),
    Conditionnal(ConditionnalStructure),
}

impl Expression {
    pub fn identifier(name: &str) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn number(value: f64) -> Self {
        Expression::Number(NumberExpression { value })
    }

    pub fn boolean(value: bool) -> Self {
        Expression::Boolean(BooleanExpression { value })
    }

    pub fn char(value: char) -> Self {
        Expression::Char(CharExpression { value })
    }

    pub fn str(value: &str) -> Self {
        Expression::Str(StrExpression {
            value: String::from(value),
        })
    }

    pub fn unary(term: Expression, operator_symbol: &str) -> Self {
        Expression::Unary(UnaryExpression {
            term: Box::new(term),
            operator_symbol: String::from(operator_symbol),
        })
    }

    pub fn binary(left: Expression, operator_symbol: &str, right: Expression) -> Self {
        Expression::Binary(BinaryExpression {
            left: Box::new(left),
            operator_symbol: String::from(operator_symbol),
            right: Box::new(right),
        })
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Expression::Identifier(_) => NodeType::Identifier,
            Expression::Number(_) => NodeType::NumberExpression,
            Expression::Boolean(_) => NodeType::BooleanExpression,
            Expression::Char(_) => NodeType::CharExpression,
            Expression::Str(_) => NodeType::StrExpression,
            Expression::Unary(_) => NodeType::UnaryExpression,
            Expression::Binary(_) => NodeType::BinaryExpression,
            Expression::Loop(_) => NodeType::LoopExpression,
            Expression::While(_) => NodeType::WhileExpression,
            Expression::For(_) => NodeType::ForExpression,
            Expression::Break(_) => NodeType::BreakExpression,
            Expression::Continue(_) => NodeType::ContinueExpression,
            Expression::Conditionnal(_) => NodeType::ConditionnalStructure,
        }
    }

    pub fn repr(&self, indent: usize) -> String {
        match self {
            Expression::Identifier(identifier) => identifier.repr(indent),
            Expression::Number(number) => number.repr(indent),
            Expression::Boolean(boolean) => boolean.repr(indent),
            Expression::Char(character) => character.repr(indent),
            Expression::Str(string) => string.repr(indent),
            Expression::Unary(unary) => unary.repr(indent),
            Expression::Binary(binary) => binary.repr(indent),
            Expression::Loop(loop_expression) => loop_expression.repr(indent),
            Expression::While(while_expression) => while_expression.repr(indent),
            Expression::For(for_expression) => for_expression.repr(indent),
            Expression::Break(break_expression) => break_expression.repr(indent),
            Expression::Continue(continue_expression) => continue_expression.repr(indent),
            Expression::Conditionnal(structure) => structure.repr(indent),
        }
    }

    /// Whether the node is a self-folding literal.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Expression::Number(_) | Expression::Boolean(_) | Expression::Char(_) | Expression::Str(_)
        )
    }

    /// C-style truthiness of number and boolean literals.
    pub fn truthiness(&self) -> Option<bool> {
        match self {
            Expression::Number(number) => Some(number.value != 0.0),
            Expression::Boolean(boolean) => Some(boolean.value),
            _ => None,
        }
    }
}

impl From<Expression> for Statement {
    fn from(expression: Expression) -> Self {
        Statement::Expression(expression)
    }
}

/// Statement
///
/// Generalizes expressions and the declaration forms that only make sense
/// at statement level.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(Expression),
    Assignation(AssignationExpression),
    Declaration(DeclarationExpression),
}

impl Statement {
    pub fn node_type(&self) -> NodeType {
        match self {
            Statement::Expression(expression) => expression.node_type(),
            Statement::Assignation(_) => NodeType::AssignationExpression,
            Statement::Declaration(_) => NodeType::DeclarationExpression,
        }
    }

    pub fn repr(&self, indent: usize) -> String {
        match self {
            Statement::Expression(expression) => expression.repr(indent),
            Statement::Assignation(assignation) => assignation.repr(indent),
            Statement::Declaration(declaration) => declaration.repr(indent),
        }
    }

    /// Returns the inner expression, or gives the statement back when it is a
    /// declaration form.
    pub fn into_expression(self) -> Result<Expression, Statement> {
        match self {
            Statement::Expression(expression) => Ok(expression),
            other => Err(other),
        }
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Statement::Expression(expression) => Some(expression),
            _ => None,
        }
    }
}

/// Ordered sequence of statements shared by loops, `or` clauses and
/// conditional branches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scope {
    pub body: Vec<Statement>,
}

impl Scope {
    pub fn new(body: Vec<Statement>) -> Self {
        Scope { body }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.body.iter()
    }

    /// `{`, one statement per line at `indent + 1`, `}`.
    pub fn repr_block(&self, indent: usize) -> String {
        let mut pretty = String::from("{\n");

        for statement in &self.body {
            pretty += &statement.repr(indent + 1);
            pretty += "\n";
        }

        pretty += &indentation(indent);
        pretty += "}";
        pretty
    }
}
