use std::{collections::HashMap, fmt::Display};

use crate::{ast::ast::Statement, errors::errors::Error};

use super::{expr::*, parser::Parser, stmt::*};

/// Productions of the cascade, named after the node they build.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Production {
    Conditionnal,
    For,
    While,
    Loop,
    Break,
    Continue,
    Declaration,
    Assignation,
    Binary,
    Logical,
    Additive,
    Multiplicative,
    Unary,
    Primary,
    Parenthesis,
    Str,
    Char,
    Boolean,
    Identifier,
    Number,
}

impl Production {
    pub fn node_name(&self) -> &'static str {
        match self {
            Production::Conditionnal => "ConditionnalStructure",
            Production::For => "ForExpression",
            Production::While => "WhileExpression",
            Production::Loop => "LoopExpression",
            Production::Break => "BreakExpression",
            Production::Continue => "ContinueExpression",
            Production::Declaration => "DeclarationExpression",
            Production::Assignation => "AssignationExpression",
            Production::Binary => "BinaryExpression",
            Production::Logical => "LogicalExpression",
            Production::Additive => "AdditiveExpression",
            Production::Multiplicative => "MultiplicativeExpression",
            Production::Unary => "UnaryExpression",
            Production::Primary => "PrimaryExpression",
            Production::Parenthesis => "ParenthesisExpression",
            Production::Str => "StrExpression",
            Production::Char => "CharExpression",
            Production::Boolean => "BooleanExpression",
            Production::Identifier => "Identifier",
            Production::Number => "NumberExpression",
        }
    }
}

impl Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.node_name())
    }
}

/// Grammars the parser can be assembled with.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Dialect {
    /// Number literals only.
    Core,
    /// Declarations, assignations and operators over numbers, booleans and
    /// identifiers. No strings, chars, parentheses or control flow.
    Tlang,
    /// Declarations, expressions and control flow on top of `Core`.
    #[default]
    Entropia,
}

pub type ProductionHandler = fn(&mut Parser) -> Result<Statement, Error>;

// Lookup table inside parser struct, so it's easier
pub type ProductionLookup = HashMap<Production, ProductionHandler>;

pub fn create_core_lookups(parser: &mut Parser) {
    parser.register(Production::Number, parse_number_expression, true);
}

/// Registers the operator levels shared by every dialect above `Core`.
/// Operands of `!` and `-` are read from `Production::Primary`, which each
/// dialect points at the head of its own primary chain.
fn create_operator_lookups(parser: &mut Parser) {
    parser.register(Production::Unary, parse_unary_expression, false);
    parser.register(Production::Multiplicative, parse_multiplicative_expression, false);
    parser.register(Production::Additive, parse_additive_expression, false);
    parser.register(Production::Logical, parse_logical_expression, false);
    parser.register(Production::Binary, parse_binary_expression, false);
}

pub fn create_tlang_lookups(parser: &mut Parser) {
    create_core_lookups(parser);

    parser.register(Production::Identifier, parse_identifier, false);
    parser.register(Production::Boolean, parse_boolean_expression, false);
    parser.register(Production::Primary, parse_boolean_expression, false);

    create_operator_lookups(parser);

    parser.register(Production::Assignation, parse_assignation_expression, false);
    parser.register(Production::Declaration, parse_declaration_expression, true);

    parser.demote(Production::Number);
}

pub fn create_entropia_lookups(parser: &mut Parser) {
    create_core_lookups(parser);

    // Primaries
    parser.register(Production::Identifier, parse_identifier, false);
    parser.register(Production::Boolean, parse_boolean_expression, false);
    parser.register(Production::Char, parse_char_expression, false);
    parser.register(Production::Str, parse_str_expression, false);
    parser.register(Production::Parenthesis, parse_parenthesis_expression, false);
    parser.register(Production::Primary, parse_parenthesis_expression, false);

    // Operators
    create_operator_lookups(parser);

    // Statements
    parser.register(Production::Assignation, parse_assignation_expression, false);
    parser.register(Production::Declaration, parse_declaration_expression, true);
    parser.register(Production::Continue, parse_continue_expression, false);
    parser.register(Production::Break, parse_break_expression, false);
    parser.register(Production::Loop, parse_loop_expression, false);
    parser.register(Production::While, parse_while_expression, false);
    parser.register(Production::For, parse_for_expression, false);
    parser.register(Production::Conditionnal, parse_conditionnal_structure, true);

    parser.demote(Production::Number);
}

pub fn create_lookups(parser: &mut Parser, dialect: Dialect) {
    match dialect {
        Dialect::Core => create_core_lookups(parser),
        Dialect::Tlang => create_tlang_lookups(parser),
        Dialect::Entropia => create_entropia_lookups(parser),
    }
}
