use log::trace;

use crate::{
    ast::{
        ast::{Expression, Statement},
        expressions::{BinaryExpression, Identifier, UnaryExpression},
        statements::{AssignationExpression, DeclarationExpression},
    },
    errors::errors::ErrorImpl,
};

pub type FoldResult = Result<Expression, ErrorImpl>;

/// Container Expression
///
/// Nodes that may still conceal an unresolved identifier once folded.
pub trait ContainerExpression {
    /// Folds the node's children in place, then returns the first identifier
    /// left inside them, searching left before right.
    fn get_inner_identifier(&mut self) -> Result<Option<Identifier>, ErrorImpl>;
}

impl Expression {
    /// Reduces the expression to a literal, or to the smallest residual that
    /// still depends on an identifier. Loop and conditional shells are
    /// returned unchanged.
    pub fn get_constexpr(self) -> FoldResult {
        match self {
            Expression::Unary(unary) => unary.get_constexpr(),
            Expression::Binary(binary) => binary.get_constexpr(),
            other => Ok(other),
        }
    }

    /// Identifiers and containers, the operands a fold cannot evaluate.
    pub fn is_unresolved(&self) -> bool {
        matches!(
            self,
            Expression::Identifier(_) | Expression::Unary(_) | Expression::Binary(_)
        )
    }

    pub fn as_container_mut(&mut self) -> Option<&mut dyn ContainerExpression> {
        match self {
            Expression::Unary(unary) => Some(unary as &mut dyn ContainerExpression),
            Expression::Binary(binary) => Some(binary as &mut dyn ContainerExpression),
            _ => None,
        }
    }
}

impl Statement {
    /// Folds the value carried by the statement.
    pub fn get_constexpr(self) -> Result<Statement, ErrorImpl> {
        match self {
            Statement::Expression(expression) => Ok(Statement::Expression(expression.get_constexpr()?)),
            Statement::Assignation(assignation) => Ok(Statement::Assignation(AssignationExpression {
                identifier: assignation.identifier,
                value: assignation.value.get_constexpr()?,
            })),
            Statement::Declaration(declaration) => Ok(Statement::Declaration(DeclarationExpression {
                assignation: AssignationExpression {
                    identifier: declaration.assignation.identifier,
                    value: declaration.assignation.value.get_constexpr()?,
                },
                value_type: declaration.value_type,
                is_mutable: declaration.is_mutable,
            })),
        }
    }
}

impl UnaryExpression {
    pub fn get_constexpr(self) -> FoldResult {
        let UnaryExpression { term, operator_symbol } = self;

        match (*term).get_constexpr()? {
            Expression::Boolean(boolean) if operator_symbol == "!" => Ok(Expression::boolean(!boolean.value)),
            term => Ok(Expression::Unary(UnaryExpression {
                term: Box::new(term),
                operator_symbol,
            })),
        }
    }
}

impl BinaryExpression {
    pub fn get_constexpr(self) -> FoldResult {
        let BinaryExpression { left, operator_symbol, right } = self;

        let left = (*left).get_constexpr()?;
        let right = (*right).get_constexpr()?;
        let operator = operator_symbol.as_str();

        if let (Expression::Number(left), Expression::Number(right)) = (&left, &right) {
            return fold_numbers(left.value, operator, right.value);
        }

        if let (Some(left_value), Some(right_value)) = (left.truthiness(), right.truthiness()) {
            return match operator {
                "&&" => Ok(Expression::boolean(left_value && right_value)),
                "||" => Ok(Expression::boolean(left_value || right_value)),
                _ => Err(ErrorImpl::InvalidOperator {
                    operator: operator_symbol.clone(),
                    left: left.node_type().to_string(),
                    right: right.node_type().to_string(),
                }),
            };
        }

        if left.is_unresolved() || right.is_unresolved() {
            return Ok(Expression::Binary(BinaryExpression {
                left: Box::new(left),
                operator_symbol,
                right: Box::new(right),
            }));
        }

        Err(ErrorImpl::InvalidOperands {
            operator: operator_symbol,
            left: left.repr(0),
            right: right.repr(0),
        })
    }
}

fn fold_numbers(left: f64, operator: &str, right: f64) -> FoldResult {
    let folded = match operator {
        "+" => Expression::number(left + right),
        "-" => Expression::number(left - right),
        "*" => Expression::number(left * right),
        "/" => {
            if right == 0.0 {
                return Err(ErrorImpl::DivisionByZero {
                    dividend: left.to_string(),
                });
            }
            Expression::number(left / right)
        }
        "&&" => Expression::boolean(left != 0.0 && right != 0.0),
        "||" => Expression::boolean(left != 0.0 || right != 0.0),
        _ => {
            return Err(ErrorImpl::InvalidOperator {
                operator: String::from(operator),
                left: String::from("NumberExpression"),
                right: String::from("NumberExpression"),
            })
        }
    };

    trace!("folded {} {} {} into {}", left, operator, right, folded.repr(0));
    Ok(folded)
}

fn inner_identifier_of(expression: &mut Expression) -> Result<Option<Identifier>, ErrorImpl> {
    match expression {
        Expression::Identifier(identifier) => Ok(Some(identifier.clone())),
        Expression::Unary(unary) => unary.get_inner_identifier(),
        Expression::Binary(binary) => binary.get_inner_identifier(),
        _ => Ok(None),
    }
}

fn fold_in_place(expression: &mut Box<Expression>) -> Result<(), ErrorImpl> {
    let folded = (**expression).clone().get_constexpr()?;
    **expression = folded;
    Ok(())
}

impl ContainerExpression for UnaryExpression {
    fn get_inner_identifier(&mut self) -> Result<Option<Identifier>, ErrorImpl> {
        fold_in_place(&mut self.term)?;
        inner_identifier_of(&mut self.term)
    }
}

impl ContainerExpression for BinaryExpression {
    fn get_inner_identifier(&mut self) -> Result<Option<Identifier>, ErrorImpl> {
        fold_in_place(&mut self.left)?;
        fold_in_place(&mut self.right)?;

        if let Some(identifier) = inner_identifier_of(&mut self.left)? {
            return Ok(Some(identifier));
        }
        inner_identifier_of(&mut self.right)
    }
}
