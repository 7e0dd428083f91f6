use crate::{
    ast::ast::{Expression, Statement},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::Production,
    parser::{parse_statement, Parser},
};

pub fn parse_binary_expression(parser: &mut Parser) -> Result<Statement, Error> {
    parser.parse_production(Production::Logical)
}

pub fn parse_logical_expression(parser: &mut Parser) -> Result<Statement, Error> {
    parse_binary_level(parser, Production::Logical, Production::Additive, &["&&", "||"])
}

pub fn parse_additive_expression(parser: &mut Parser) -> Result<Statement, Error> {
    parse_binary_level(parser, Production::Additive, Production::Multiplicative, &["+", "-"])
}

pub fn parse_multiplicative_expression(parser: &mut Parser) -> Result<Statement, Error> {
    parse_binary_level(parser, Production::Multiplicative, Production::Unary, &["*", "/"])
}

/// `operand (operator level)?`, grouping to the right. The built node is
/// folded straight away.
fn parse_binary_level(
    parser: &mut Parser,
    level: Production,
    operand: Production,
    operators: &[&str],
) -> Result<Statement, Error> {
    let left = parser.parse_expression(operand)?;

    if !parser.current_token().is_binary_operator(operators) {
        return Ok(left.into());
    }

    let operator = parser.advance().value;
    let right = parser.parse_expression(level)?;

    Ok(parser.fold(Expression::binary(left, &operator, right))?.into())
}

pub fn parse_unary_expression(parser: &mut Parser) -> Result<Statement, Error> {
    match parser.current_token_kind() {
        TokenKind::UnaryOperator => {
            let operator = parser.advance().value;
            if operator != "!" {
                return Err(parser.error(ErrorImpl::InvalidUnaryOperator { operator }));
            }

            let term = parser.parse_expression(Production::Primary)?;
            Ok(parser.fold(Expression::unary(term, &operator))?.into())
        }
        TokenKind::BinaryOperator if parser.current_token().value == "-" => {
            parser.advance();

            let term = parser.parse_expression(Production::Primary)?;
            let term = parser.fold(term)?;

            match term {
                Expression::Number(number) => Ok(Expression::number(-number.value).into()),
                term @ (Expression::Identifier(_) | Expression::Unary(_) | Expression::Binary(_)) => {
                    Ok(Expression::binary(Expression::number(0.0), "-", term).into())
                }
                other => Err(parser.error(ErrorImpl::InvalidNegativeTerm {
                    term: other.repr(0),
                })),
            }
        }
        _ => parser.parse_production(Production::Primary),
    }
}

pub fn parse_parenthesis_expression(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.current_token_kind() != TokenKind::OpenParen {
        return parser.parse_production(Production::Str);
    }
    parser.advance();

    let statement = parse_statement(parser)?;
    parser.expect(TokenKind::CloseParen, "closing parenthesis")?;

    match statement.into_expression() {
        Ok(expression) => Ok(expression.into()),
        Err(statement) => Err(parser.error(ErrorImpl::InvalidParenthesis {
            statement: statement.repr(0),
        })),
    }
}

pub fn parse_str_expression(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.current_token_kind() != TokenKind::Str {
        return parser.parse_production(Production::Char);
    }

    let token = parser.advance();
    let value = strip_quotes(&token.value, '"')
        .ok_or_else(|| parser.error(quoted_literal_error(&token.value)))
        .and_then(|inner| decode_escapes(inner).map_err(|error| parser.error(error)))?;

    Ok(Expression::str(&value).into())
}

pub fn parse_char_expression(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.current_token_kind() != TokenKind::Char {
        return parser.parse_production(Production::Boolean);
    }

    let token = parser.advance();
    let value = strip_quotes(&token.value, '\'')
        .ok_or_else(|| parser.error(quoted_literal_error(&token.value)))
        .and_then(|inner| decode_escapes(inner).map_err(|error| parser.error(error)))?;

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(character), None) => Ok(Expression::char(character).into()),
        _ => Err(parser.error(ErrorImpl::SyntaxError {
            expected: String::from("single character"),
            found: token.value,
        })),
    }
}

pub fn parse_boolean_expression(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.current_token_kind() != TokenKind::Bool {
        return parser.parse_production(Production::Identifier);
    }

    let token = parser.advance();
    Ok(Expression::boolean(token.value == "true").into())
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.current_token_kind() != TokenKind::Identifier {
        return parser.parse_production(Production::Number);
    }

    let token = parser.advance();
    Ok(Expression::identifier(&token.value).into())
}

pub fn parse_number_expression(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.current_token_kind() != TokenKind::Number {
        return Err(parser.error(ErrorImpl::UnexpectedToken {
            token: parser.current_token().value.clone(),
        }));
    }

    let value = parser.current_token().value.parse::<f64>().map_err(|_| {
        parser.error(ErrorImpl::NumberParseError {
            token: parser.current_token().value.clone(),
        })
    })?;
    parser.advance();

    Ok(Expression::number(value).into())
}

fn strip_quotes(value: &str, quote: char) -> Option<&str> {
    value.strip_prefix(quote)?.strip_suffix(quote)
}

fn quoted_literal_error(value: &str) -> ErrorImpl {
    ErrorImpl::SyntaxError {
        expected: String::from("quoted literal"),
        found: String::from(value),
    }
}

/// Decodes `\n \t \r \' \" \\` in the body of a char or string literal.
pub fn decode_escapes(raw: &str) -> Result<String, ErrorImpl> {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(character) = chars.next() {
        if character != '\\' {
            decoded.push(character);
            continue;
        }

        let escaped = match chars.next() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('\'') => '\'',
            Some('"') => '"',
            Some('\\') => '\\',
            Some(other) => {
                return Err(ErrorImpl::InvalidEscapeSequence {
                    sequence: format!("\\{}", other),
                })
            }
            None => {
                return Err(ErrorImpl::InvalidEscapeSequence {
                    sequence: String::from("\\"),
                })
            }
        };
        decoded.push(escaped);
    }

    Ok(decoded)
}
