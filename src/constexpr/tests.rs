//! Unit tests for constant folding.

use crate::{
    ast::{
        ast::{Expression, NodeType, Statement},
        expressions::Identifier,
        statements::AssignationExpression,
    },
    errors::errors::ErrorImpl,
};

#[test]
fn test_literals_fold_to_themselves() {
    for literal in [
        Expression::number(4.5),
        Expression::boolean(true),
        Expression::char('c'),
        Expression::str("text"),
    ] {
        let folded = literal.clone().get_constexpr().unwrap();
        assert_eq!(folded, literal);
        assert_eq!(folded.clone().get_constexpr().unwrap(), folded);
    }
}

#[test]
fn test_fold_arithmetic() {
    let expression = Expression::binary(
        Expression::number(2.0),
        "*",
        Expression::binary(Expression::number(3.0), "+", Expression::number(4.0)),
    );

    assert_eq!(expression.get_constexpr().unwrap(), Expression::number(14.0));
}

#[test]
fn test_fold_division() {
    let expression = Expression::binary(Expression::number(7.0), "/", Expression::number(2.0));
    assert_eq!(expression.get_constexpr().unwrap(), Expression::number(3.5));
}

#[test]
fn test_division_by_zero_is_fatal() {
    let expression = Expression::binary(Expression::number(5.0), "/", Expression::number(0.0));

    assert_eq!(
        expression.get_constexpr().unwrap_err(),
        ErrorImpl::DivisionByZero {
            dividend: String::from("5")
        }
    );
}

#[test]
fn test_division_by_zero_nested_in_unresolved_expression() {
    let expression = Expression::binary(
        Expression::identifier("x"),
        "+",
        Expression::binary(Expression::number(5.0), "/", Expression::number(0.0)),
    );

    assert!(matches!(
        expression.get_constexpr(),
        Err(ErrorImpl::DivisionByZero { .. })
    ));
}

#[test]
fn test_number_truthiness_in_logical_operators() {
    let and = Expression::binary(Expression::number(2.0), "&&", Expression::number(0.0));
    let or = Expression::binary(Expression::number(2.0), "||", Expression::number(0.0));

    assert_eq!(and.get_constexpr().unwrap(), Expression::boolean(false));
    assert_eq!(or.get_constexpr().unwrap(), Expression::boolean(true));
}

#[test]
fn test_mixed_boolean_and_number_operands() {
    let left_number = Expression::binary(Expression::number(1.0), "&&", Expression::boolean(true));
    let right_number = Expression::binary(Expression::boolean(false), "||", Expression::number(0.0));
    let booleans = Expression::binary(Expression::boolean(true), "&&", Expression::boolean(false));

    assert_eq!(left_number.get_constexpr().unwrap(), Expression::boolean(true));
    assert_eq!(right_number.get_constexpr().unwrap(), Expression::boolean(false));
    assert_eq!(booleans.get_constexpr().unwrap(), Expression::boolean(false));
}

#[test]
fn test_arithmetic_on_booleans_is_rejected() {
    let expression = Expression::binary(Expression::boolean(true), "+", Expression::number(1.0));

    assert_eq!(
        expression.get_constexpr().unwrap_err(),
        ErrorImpl::InvalidOperator {
            operator: String::from("+"),
            left: String::from("BooleanExpression"),
            right: String::from("NumberExpression"),
        }
    );
}

#[test]
fn test_strings_are_invalid_operands() {
    let expression = Expression::binary(Expression::str("a"), "+", Expression::str("b"));

    assert_eq!(
        expression.get_constexpr().unwrap_err(),
        ErrorImpl::InvalidOperands {
            operator: String::from("+"),
            left: String::from("\"a\""),
            right: String::from("\"b\""),
        }
    );
}

#[test]
fn test_identifier_operand_is_left_unreduced() {
    let expression = Expression::binary(
        Expression::identifier("y"),
        "+",
        Expression::binary(Expression::number(1.0), "+", Expression::number(2.0)),
    );

    assert_eq!(
        expression.get_constexpr().unwrap(),
        Expression::binary(Expression::identifier("y"), "+", Expression::number(3.0))
    );
}

#[test]
fn test_not_folds_boolean_literal() {
    let expression = Expression::unary(Expression::boolean(true), "!");
    assert_eq!(expression.get_constexpr().unwrap(), Expression::boolean(false));
}

#[test]
fn test_not_on_identifier_is_preserved() {
    let expression = Expression::unary(Expression::identifier("x"), "!");
    let folded = expression.clone().get_constexpr().unwrap();

    assert_eq!(folded, expression);
    assert_eq!(folded.node_type(), NodeType::UnaryExpression);
}

#[test]
fn test_not_folds_nested_logical_expression() {
    let expression = Expression::unary(
        Expression::binary(Expression::boolean(true), "&&", Expression::number(0.0)),
        "!",
    );

    assert_eq!(expression.get_constexpr().unwrap(), Expression::boolean(true));
}

#[test]
fn test_folding_is_idempotent_on_residuals() {
    let expression = Expression::binary(
        Expression::unary(Expression::identifier("flag"), "!"),
        "||",
        Expression::boolean(false),
    );

    let once = expression.get_constexpr().unwrap();
    let twice = once.clone().get_constexpr().unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_inner_identifier_searches_left_first() {
    let mut expression = Expression::binary(
        Expression::binary(Expression::number(1.0), "*", Expression::identifier("a")),
        "+",
        Expression::identifier("b"),
    );

    let container = expression.as_container_mut().unwrap();
    let identifier = container.get_inner_identifier().unwrap().unwrap();

    assert_eq!(identifier.get_name(), "a");
}

#[test]
fn test_inner_identifier_folds_children_in_place() {
    let mut expression = Expression::binary(
        Expression::binary(Expression::number(1.0), "+", Expression::number(2.0)),
        "-",
        Expression::unary(Expression::identifier("z"), "!"),
    );

    let identifier = expression
        .as_container_mut()
        .unwrap()
        .get_inner_identifier()
        .unwrap();

    assert_eq!(identifier.unwrap().get_name(), "z");
    assert_eq!(
        expression,
        Expression::binary(
            Expression::number(3.0),
            "-",
            Expression::unary(Expression::identifier("z"), "!"),
        )
    );
}

#[test]
fn test_inner_identifier_of_fully_literal_container() {
    let mut expression = Expression::unary(
        Expression::binary(Expression::boolean(true), "||", Expression::boolean(false)),
        "!",
    );

    let identifier = expression
        .as_container_mut()
        .unwrap()
        .get_inner_identifier()
        .unwrap();

    assert!(identifier.is_none());
}

#[test]
fn test_literals_are_not_containers() {
    assert!(Expression::number(1.0).as_container_mut().is_none());
    assert!(Expression::identifier("x").as_container_mut().is_none());
}

#[test]
fn test_statement_folds_carried_value() {
    let statement = Statement::Assignation(AssignationExpression {
        identifier: Identifier::new("x"),
        value: Expression::binary(Expression::number(6.0), "/", Expression::number(4.0)),
    });

    assert_eq!(
        statement.get_constexpr().unwrap(),
        Statement::Assignation(AssignationExpression {
            identifier: Identifier::new("x"),
            value: Expression::number(1.5),
        })
    );
}
