use std::str::FromStr;

use crate::{
    ast::{
        ast::{Expression, Scope, Statement},
        expressions::Identifier,
        statements::{
            AssignationExpression, BreakExpression, ConditionnalStructure, ContinueExpression,
            DeclarationExpression, ForExpression, LoopExpression, OrExpression, WhileExpression,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    validator::{
        types::ValueType,
        validator::{validate_assignation, validate_declaration},
    },
};

use super::{
    lookups::Production,
    parser::{parse_statement, Parser},
};

/// `{` statements `}`
pub fn parse_scope(parser: &mut Parser) -> Result<Scope, Error> {
    parser.expect(TokenKind::OpenCurly, "opening curly brace")?;

    let mut body = vec![];
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        body.push(parse_statement(parser)?);
    }

    parser.expect(TokenKind::CloseCurly, "closing curly brace")?;
    Ok(Scope::new(body))
}

/// A `;`, or the `)` closing an enclosing parenthesis, which is left for the
/// caller to consume.
pub fn expect_terminator(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::Semicolon => {
            parser.advance();
            Ok(())
        }
        TokenKind::CloseParen => Ok(()),
        _ => Err(parser.error(ErrorImpl::SyntaxError {
            expected: String::from("semicolon"),
            found: parser.current_token().value.clone(),
        })),
    }
}

fn parse_condition(parser: &mut Parser) -> Result<Expression, Error> {
    let condition = parser.parse_expression(Production::Binary)?;
    parser.fold(condition)
}

/// Loop body and its optional `or` fallback.
fn parse_loop_body(parser: &mut Parser) -> Result<LoopExpression, Error> {
    let scope = parse_scope(parser)?;

    let or_expression = if parser.current_token_kind() == TokenKind::Or {
        parser.advance();
        Some(OrExpression {
            scope: parse_scope(parser)?,
        })
    } else {
        None
    };

    Ok(LoopExpression {
        scope,
        or_expression,
    })
}

pub fn parse_conditionnal_structure(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.current_token_kind() != TokenKind::If {
        return parser.parse_production(Production::For);
    }
    parser.advance();

    let mut structure = ConditionnalStructure::default();

    let condition = parse_condition(parser)?;
    let scope = parse_scope(parser)?;
    structure.push(scope, Some(condition));

    while parser.current_token_kind() == TokenKind::Else {
        parser.advance();

        if parser.current_token_kind() != TokenKind::If {
            let scope = parse_scope(parser)?;
            structure.push(scope, None);
            break;
        }
        parser.advance();

        let condition = parse_condition(parser)?;
        let scope = parse_scope(parser)?;
        structure.push(scope, Some(condition));
    }

    Ok(Expression::Conditionnal(structure).into())
}

pub fn parse_for_expression(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.current_token_kind() != TokenKind::For {
        return parser.parse_production(Production::While);
    }
    parser.advance();

    parser.expect(TokenKind::OpenParen, "opening parenthesis")?;
    let initial_expression = parser.parse_production(Production::Declaration)?;
    let condition = parse_condition(parser)?;
    parser.expect(TokenKind::Semicolon, "semicolon")?;
    let update_expression = parser.parse_production(Production::Assignation)?;
    parser.expect(TokenKind::CloseParen, "closing parenthesis")?;

    let base = parse_loop_body(parser)?;

    Ok(Expression::For(ForExpression {
        base: WhileExpression {
            base,
            condition: Box::new(condition),
        },
        initial_expression: Box::new(initial_expression),
        update_expression: Box::new(update_expression),
    })
    .into())
}

pub fn parse_while_expression(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.current_token_kind() != TokenKind::While {
        return parser.parse_production(Production::Loop);
    }
    parser.advance();

    let condition = parse_condition(parser)?;
    let base = parse_loop_body(parser)?;

    Ok(Expression::While(WhileExpression {
        base,
        condition: Box::new(condition),
    })
    .into())
}

pub fn parse_loop_expression(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.current_token_kind() != TokenKind::Loop {
        return parser.parse_production(Production::Break);
    }
    parser.advance();

    Ok(Expression::Loop(parse_loop_body(parser)?).into())
}

pub fn parse_break_expression(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.current_token_kind() != TokenKind::Break {
        return parser.parse_production(Production::Continue);
    }
    parser.advance();
    parser.expect(TokenKind::Semicolon, "semicolon")?;

    Ok(Expression::Break(BreakExpression).into())
}

pub fn parse_continue_expression(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.current_token_kind() != TokenKind::Continue {
        return parser.parse_production(Production::Declaration);
    }
    parser.advance();
    parser.expect(TokenKind::Semicolon, "semicolon")?;

    Ok(Expression::Continue(ContinueExpression).into())
}

pub fn parse_declaration_expression(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.current_token_kind() != TokenKind::Let {
        return parser.parse_production(Production::Assignation);
    }
    parser.advance();

    let is_mutable = parser.current_token_kind() == TokenKind::Mut;
    if is_mutable {
        parser.advance();
    }

    let identifier = parser.expect(TokenKind::Identifier, "identifier")?;
    parser.expect(TokenKind::Colon, "colon")?;

    let type_token = parser.expect(TokenKind::Type, "type")?;
    let value_type = ValueType::from_str(&type_token.value)
        .map_err(|error| Error::new(error, type_token.span.start.clone()))?;

    parser.expect(TokenKind::Assign, "assignment symbol")?;

    let value_position = parser.get_position();
    let value = parser.parse_expression(Production::Binary)?;
    let value = parser.fold(value)?;

    let mut declaration = DeclarationExpression {
        assignation: AssignationExpression {
            identifier: Identifier::new(&identifier.value),
            value,
        },
        value_type,
        is_mutable,
    };

    validate_declaration(parser.symbols(), &mut declaration)
        .map_err(|error| Error::new(error, value_position))?;
    parser.expect(TokenKind::Semicolon, "semicolon")?;

    parser.symbols_mut().declare(&identifier.value, value_type);

    Ok(Statement::Declaration(declaration))
}

/// `identifier = value;`, or an expression statement when the left-hand side
/// is not a bare identifier followed by `=`.
pub fn parse_assignation_expression(parser: &mut Parser) -> Result<Statement, Error> {
    let target = parser.parse_expression(Production::Binary)?;

    let identifier = match target {
        Expression::Identifier(identifier) if parser.current_token_kind() == TokenKind::Assign => {
            identifier
        }
        expression => {
            expect_terminator(parser)?;
            return Ok(expression.into());
        }
    };
    parser.advance();

    let value_position = parser.get_position();
    let value = parser.parse_expression(Production::Binary)?;
    let value = parser.fold(value)?;

    let mut assignation = AssignationExpression { identifier, value };
    validate_assignation(parser.symbols(), &mut assignation)
        .map_err(|error| Error::new(error, value_position))?;
    expect_terminator(parser)?;

    Ok(Statement::Assignation(assignation))
}
