use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidEscapeSequence { .. } => "InvalidEscapeSequence",
            ErrorImpl::InvalidUnaryOperator { .. } => "InvalidUnaryOperator",
            ErrorImpl::InvalidNegativeTerm { .. } => "InvalidNegativeTerm",
            ErrorImpl::InvalidParenthesis { .. } => "InvalidParenthesis",
            ErrorImpl::DivisionByZero { .. } => "DivisionByZero",
            ErrorImpl::InvalidOperator { .. } => "InvalidOperator",
            ErrorImpl::InvalidOperands { .. } => "InvalidOperands",
            ErrorImpl::OutOfRange { .. } => "OutOfRange",
            ErrorImpl::KindMismatch { .. } => "KindMismatch",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::UnregisteredProduction { .. } => "UnregisteredProduction",
            ErrorImpl::NoRootProduction => "NoRootProduction",
        }
    }

    /// Coarse category of the error, matching the families a driver reports on.
    pub fn get_category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::SyntaxError { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::InvalidEscapeSequence { .. }
            | ErrorImpl::InvalidUnaryOperator { .. }
            | ErrorImpl::InvalidNegativeTerm { .. }
            | ErrorImpl::InvalidParenthesis { .. }
            | ErrorImpl::UnregisteredProduction { .. }
            | ErrorImpl::NoRootProduction => ErrorCategory::Syntax,
            ErrorImpl::DivisionByZero { .. } => ErrorCategory::Arithmetic,
            ErrorImpl::InvalidOperator { .. } | ErrorImpl::InvalidOperands { .. } => {
                ErrorCategory::OperandKind
            }
            ErrorImpl::OutOfRange { .. } => ErrorCategory::Range,
            ErrorImpl::KindMismatch { .. }
            | ErrorImpl::TypeMismatch { .. }
            | ErrorImpl::UnknownType { .. }
            | ErrorImpl::VariableNotDeclared { .. } => ErrorCategory::KindMismatch,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected an expression",
                token
            )),
            ErrorImpl::SyntaxError { expected, found } => {
                ErrorTip::Suggestion(format!("Expected {}, found `{}`", expected, found))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::InvalidEscapeSequence { sequence } => ErrorTip::Suggestion(format!(
                "Invalid escape sequence `{}`, expected one of \\n \\t \\r \\' \\\" \\\\",
                sequence
            )),
            ErrorImpl::InvalidUnaryOperator { operator } => ErrorTip::Suggestion(format!(
                "Unary operator `{}` is not supported, only `!` is",
                operator
            )),
            ErrorImpl::InvalidNegativeTerm { term } => {
                ErrorTip::Suggestion(format!("Cannot negate `{}`", term))
            }
            ErrorImpl::InvalidParenthesis { statement } => ErrorTip::Suggestion(format!(
                "`{}` cannot be used as a parenthesized expression",
                statement
            )),
            ErrorImpl::DivisionByZero { dividend } => {
                ErrorTip::Suggestion(format!("Trying to divide `{}` by zero", dividend))
            }
            ErrorImpl::InvalidOperator { operator, left, right } => ErrorTip::Suggestion(
                format!("Invalid operator `{}` for {} and {}", operator, left, right),
            ),
            ErrorImpl::InvalidOperands { operator, left, right } => ErrorTip::Suggestion(
                format!("Invalid operands `{}` {} `{}`", left, operator, right),
            ),
            ErrorImpl::OutOfRange { .. } | ErrorImpl::KindMismatch { .. } => {
                ErrorTip::Suggestion(self.internal_error.to_string())
            }
            ErrorImpl::TypeMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::UnknownType { type_ } => {
                ErrorTip::Suggestion(format!("Unknown type `{}` found", type_))
            }
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::UnregisteredProduction { production } => ErrorTip::Suggestion(format!(
                "No handler registered for `{}`",
                production
            )),
            ErrorImpl::NoRootProduction => ErrorTip::Suggestion(String::from(
                "The grammar has no root production, register one before parsing",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} ({}:{})",
            self.get_error_name(),
            self.internal_error,
            self.position.1,
            self.position.0
        )
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
    Arithmetic,
    OperandKind,
    Range,
    KindMismatch,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected {expected}, found {found:?}")]
    SyntaxError { expected: String, found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("invalid escape sequence {sequence:?}")]
    InvalidEscapeSequence { sequence: String },
    #[error("invalid unary operator {operator:?}")]
    InvalidUnaryOperator { operator: String },
    #[error("invalid or not supported negative term: {term}")]
    InvalidNegativeTerm { term: String },
    #[error("invalid parenthesis expression: {statement}")]
    InvalidParenthesis { statement: String },
    #[error("trying to divide {dividend} by zero")]
    DivisionByZero { dividend: String },
    #[error("invalid operator {operator:?} for {left} and {right}")]
    InvalidOperator { operator: String, left: String, right: String },
    #[error("invalid operands {left} {operator} {right}")]
    InvalidOperands { operator: String, left: String, right: String },
    #[error("expected valid {value_type} value in [{min}, {max}], got {value}")]
    OutOfRange { value_type: String, min: f64, max: f64, value: f64 },
    #[error("expected valid {expected} value, got {received}")]
    KindMismatch { expected: String, received: String },
    #[error("types do not match: expected {expected:?}, received {received:?}")]
    TypeMismatch { expected: String, received: String },
    #[error("unknown type {type_} found")]
    UnknownType { type_: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("no handler registered for production {production}")]
    UnregisteredProduction { production: String },
    #[error("no root production registered")]
    NoRootProduction,
}
