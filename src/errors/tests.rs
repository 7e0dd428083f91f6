//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorCategory, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at_start(error_impl: ErrorImpl) -> Error {
    Error::new(error_impl, Position(0, Rc::new("test.ent".to_string())))
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.ent".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_out_of_range_message_cites_bound() {
    let error = at_start(ErrorImpl::OutOfRange {
        value_type: "i8".to_string(),
        min: -128.0,
        max: 127.0,
        value: 128.0,
    });

    assert_eq!(
        error.get_internal_error().to_string(),
        "expected valid i8 value in [-128, 127], got 128"
    );
    assert_eq!(error.get_category(), ErrorCategory::Range);
}

#[test]
fn test_division_by_zero_category() {
    let error = at_start(ErrorImpl::DivisionByZero {
        dividend: "5".to_string(),
    });

    assert_eq!(error.get_error_name(), "DivisionByZero");
    assert_eq!(error.get_category(), ErrorCategory::Arithmetic);
}

#[test]
fn test_operand_kind_category() {
    let error = at_start(ErrorImpl::InvalidOperands {
        operator: "+".to_string(),
        left: "\"a\"".to_string(),
        right: "\"b\"".to_string(),
    });

    assert_eq!(error.get_category(), ErrorCategory::OperandKind);
    assert_eq!(
        error.get_internal_error().to_string(),
        "invalid operands \"a\" + \"b\""
    );
}

#[test]
fn test_kind_mismatch_category() {
    let error = at_start(ErrorImpl::KindMismatch {
        expected: "boolean (true / false)".to_string(),
        received: "\"x\"".to_string(),
    });

    assert_eq!(error.get_category(), ErrorCategory::KindMismatch);
    assert!(error.to_string().contains("boolean"));
}

#[test]
fn test_syntax_category() {
    let error = at_start(ErrorImpl::SyntaxError {
        expected: "colon".to_string(),
        found: "i32".to_string(),
    });

    assert_eq!(error.get_category(), ErrorCategory::Syntax);
    assert_eq!(error.to_string(), "SyntaxError: expected colon, found \"i32\" (test.ent:0)");
}

#[test]
fn test_error_tip_none() {
    let error = at_start(ErrorImpl::UnrecognisedToken {
        token: "@".to_string(),
    });

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = at_start(ErrorImpl::VariableNotDeclared {
        variable: "x".to_string(),
    });

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Variable `x` not declared"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
