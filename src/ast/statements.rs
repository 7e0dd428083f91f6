use crate::validator::types::ValueType;

use super::{
    ast::{indentation, Expression, Scope, Statement},
    expressions::Identifier,
};

/// Assignation Expression
/// `identifier = value;` for an identifier declared earlier.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignationExpression {
    pub identifier: Identifier,
    pub value: Expression,
}

impl AssignationExpression {
    pub fn repr(&self, indent: usize) -> String {
        format!(
            "{}\n{}=\n{}",
            self.identifier.repr(indent),
            indentation(indent),
            self.value.repr(indent + 1)
        )
    }
}

/// Declaration Expression
/// An assignation that also fixes the identifier's type and mutability.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationExpression {
    pub assignation: AssignationExpression,
    pub value_type: ValueType,
    pub is_mutable: bool,
}

impl DeclarationExpression {
    pub fn get_identifier(&self) -> &Identifier {
        &self.assignation.identifier
    }

    pub fn get_value(&self) -> &Expression {
        &self.assignation.value
    }

    pub fn repr(&self, indent: usize) -> String {
        format!(
            "{tabs}{keyword}\n{identifier}\n{inner}: {value_type}\n{value}",
            tabs = indentation(indent),
            keyword = if self.is_mutable { "let mut" } else { "let" },
            identifier = self.assignation.identifier.repr(indent + 1),
            inner = indentation(indent + 1),
            value_type = self.value_type,
            value = self.assignation.value.repr(indent + 1),
        )
    }
}

/// Or Expression
/// Fallback body of a loop, run when the loop body never runs to a `break`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrExpression {
    pub scope: Scope,
}

impl OrExpression {
    pub fn repr(&self, indent: usize) -> String {
        format!("{}or {}", indentation(indent), self.scope.repr_block(indent))
    }
}

fn or_suffix(or_expression: &Option<OrExpression>, indent: usize) -> String {
    match or_expression {
        Some(or_expression) => format!(" or {}", or_expression.scope.repr_block(indent)),
        None => String::new(),
    }
}

/// Loop Expression
/// `loop { .. } [or { .. }]`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoopExpression {
    pub scope: Scope,
    pub or_expression: Option<OrExpression>,
}

impl LoopExpression {
    pub fn repr(&self, indent: usize) -> String {
        format!(
            "{}loop {}{}",
            indentation(indent),
            self.scope.repr_block(indent),
            or_suffix(&self.or_expression, indent)
        )
    }
}

/// While Expression
/// A loop guarded by a condition evaluated before each iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileExpression {
    pub base: LoopExpression,
    pub condition: Box<Expression>,
}

impl WhileExpression {
    pub fn get_scope(&self) -> &Scope {
        &self.base.scope
    }

    pub fn get_or_expression(&self) -> Option<&OrExpression> {
        self.base.or_expression.as_ref()
    }

    pub fn repr(&self, indent: usize) -> String {
        format!(
            "{tabs}while (\n{condition}\n{tabs}) {body}{or}",
            tabs = indentation(indent),
            condition = self.condition.repr(indent + 1),
            body = self.base.scope.repr_block(indent),
            or = or_suffix(&self.base.or_expression, indent),
        )
    }
}

/// For Expression
/// A while loop with an initial statement and an update statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ForExpression {
    pub base: WhileExpression,
    pub initial_expression: Box<Statement>,
    pub update_expression: Box<Statement>,
}

impl ForExpression {
    pub fn get_condition(&self) -> &Expression {
        &self.base.condition
    }

    pub fn get_scope(&self) -> &Scope {
        self.base.get_scope()
    }

    pub fn get_or_expression(&self) -> Option<&OrExpression> {
        self.base.get_or_expression()
    }

    pub fn repr(&self, indent: usize) -> String {
        format!(
            "{tabs}for (\n{initial}\n{inner};\n{condition}\n{inner};\n{update}\n{tabs}) {body}{or}",
            tabs = indentation(indent),
            inner = indentation(indent + 1),
            initial = self.initial_expression.repr(indent + 1),
            condition = self.base.condition.repr(indent + 1),
            update = self.update_expression.repr(indent + 1),
            body = self.base.base.scope.repr_block(indent),
            or = or_suffix(&self.base.base.or_expression, indent),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreakExpression;

impl BreakExpression {
    pub fn repr(&self, indent: usize) -> String {
        indentation(indent) + "break;"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContinueExpression;

impl ContinueExpression {
    pub fn repr(&self, indent: usize) -> String {
        indentation(indent) + "continue;"
    }
}

/// Conditionnal Expression
/// One branch of an if / else-if / else chain. `before` is the index of the
/// previous branch inside the owning `ConditionnalStructure`; the `else`
/// branch is the one without condition.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionnalExpression {
    pub scope: Scope,
    pub condition: Option<Expression>,
    pub before: Option<usize>,
}

impl ConditionnalExpression {
    pub fn repr(&self, indent: usize) -> String {
        let tabs = indentation(indent);
        let head = match (&self.before, &self.condition) {
            (None, Some(condition)) => format!("if (\n{}\n{})", condition.repr(indent + 1), tabs),
            (_, None) => String::from("else"),
            (Some(_), Some(condition)) => {
                format!("else if (\n{}\n{})", condition.repr(indent + 1), tabs)
            }
        };

        format!("{}{} {}", tabs, head, self.scope.repr_block(indent))
    }
}

/// Conditionnal Structure
/// Parse-order record of one if / else-if* / else? chain.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionnalStructure {
    pub expressions: Vec<ConditionnalExpression>,
}

impl ConditionnalStructure {
    pub fn get_expressions(&self) -> &[ConditionnalExpression] {
        &self.expressions
    }

    /// The branch preceding branch `index` in the chain.
    pub fn before(&self, index: usize) -> Option<&ConditionnalExpression> {
        self.expressions
            .get(index)
            .and_then(|expression| expression.before)
            .and_then(|before| self.expressions.get(before))
    }

    /// Appends a branch linked to the current last one.
    pub fn push(&mut self, scope: Scope, condition: Option<Expression>) {
        let before = self.expressions.len().checked_sub(1);
        self.expressions.push(ConditionnalExpression {
            scope,
            condition,
            before,
        });
    }

    pub fn has_else(&self) -> bool {
        self.expressions
            .last()
            .map(|expression| expression.condition.is_none())
            .unwrap_or(false)
    }

    pub fn repr(&self, indent: usize) -> String {
        self.expressions
            .iter()
            .map(|expression| expression.repr(indent))
            .collect::<Vec<String>>()
            .join("\n")
    }
}
