//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry points.
//! Productions are looked up by name in a registration table, so a dialect
//! can override any level of the cascade or add new root statements without
//! touching the levels that fall through to it.

use std::{collections::HashMap, rc::Rc};

use log::trace;

use crate::{
    ast::ast::{Expression, Statement},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    validator::validator::SymbolTable,
    Position, Span,
};

use super::lookups::{create_lookups, Dialect, Production, ProductionHandler, ProductionLookup};

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream, the production table of the active grammar and
/// the symbol table of the compilation unit being parsed.
pub struct Parser {
    /// The list of tokens to parse, always terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Registered productions
    production_lookup: ProductionLookup,
    /// Root candidates in registration order; the last one wins
    root_order: Vec<Production>,
    /// Declared identifiers and their types
    symbols: SymbolTable,
}

impl Parser {
    /// Creates a parser with an empty grammar.
    ///
    /// An EOF token is appended when the stream does not end with one.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, file));

            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            production_lookup: HashMap::new(),
            root_order: vec![],
            symbols: SymbolTable::new(),
        }
    }

    /// Creates a parser with the productions of `dialect` registered.
    pub fn with_dialect(tokens: Vec<Token>, file: Rc<String>, dialect: Dialect) -> Self {
        let mut parser = Parser::new(tokens, file);
        create_lookups(&mut parser, dialect);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous one. The cursor
    /// never moves past EOF.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// Consumes a token of `expected_kind`, or fails with a syntax error
    /// describing what was `expected`.
    pub fn expect(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.error(ErrorImpl::SyntaxError {
                expected: String::from(expected),
                found: self.current_token().value.clone(),
            }));
        }
        Ok(self.advance())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Registers `handler` for `production`, replacing any previous handler.
    /// Root candidates registered later take precedence.
    pub fn register(&mut self, production: Production, handler: ProductionHandler, root: bool) {
        self.production_lookup.insert(production, handler);
        self.root_order.retain(|candidate| *candidate != production);

        if root {
            self.root_order.push(production);
        }
    }

    /// Removes `production` from root candidacy, keeping its handler.
    pub fn demote(&mut self, production: Production) {
        self.root_order.retain(|candidate| *candidate != production);
    }

    pub fn is_registered(&self, production: Production) -> bool {
        self.production_lookup.contains_key(&production)
    }

    /// The production `parse_statement` starts from.
    pub fn root_production(&self) -> Result<Production, Error> {
        self.root_order
            .last()
            .copied()
            .ok_or_else(|| self.error(ErrorImpl::NoRootProduction))
    }

    /// Runs the handler registered for `production`.
    pub fn parse_production(&mut self, production: Production) -> Result<Statement, Error> {
        let handler = match self.production_lookup.get(&production) {
            Some(handler) => *handler,
            None => {
                return Err(self.error(ErrorImpl::UnregisteredProduction {
                    production: production.to_string(),
                }))
            }
        };

        trace!("{} at {}", production, self.current_token());
        handler(self)
    }

    /// Runs `production` where only an expression is acceptable.
    pub fn parse_expression(&mut self, production: Production) -> Result<Expression, Error> {
        self.parse_production(production)?
            .into_expression()
            .map_err(|statement| {
                self.error(ErrorImpl::InvalidParenthesis {
                    statement: statement.repr(0),
                })
            })
    }

    /// Folds `expression`, locating any folding error at the cursor.
    pub fn fold(&self, expression: Expression) -> Result<Expression, Error> {
        expression.get_constexpr().map_err(|error| self.error(error))
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Wraps `error_impl` with the current position.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.get_position())
    }
}

/// Parses one statement, starting from the root production.
pub fn parse_statement(parser: &mut Parser) -> Result<Statement, Error> {
    let root = parser.root_production()?;
    parser.parse_production(root)
}

/// Parses statements until EOF.
pub fn parse_program(parser: &mut Parser) -> Result<Vec<Statement>, Error> {
    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_statement(parser)?);
    }

    Ok(body)
}

/// Parses a stream of tokens with the full `Entropia` grammar.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing, symbol table included)
/// - Result containing either the parsed statements or an Error
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<Vec<Statement>, Error>) {
    parse_with_dialect(tokens, file, Dialect::Entropia)
}

pub fn parse_with_dialect(
    tokens: Vec<Token>,
    file: Rc<String>,
    dialect: Dialect,
) -> (Parser, Result<Vec<Statement>, Error>) {
    let mut parser = Parser::with_dialect(tokens, file, dialect);
    let body = parse_program(&mut parser);

    (parser, body)
}
