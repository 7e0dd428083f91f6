use std::collections::HashMap;

use log::debug;

use crate::{
    ast::{
        ast::Expression,
        expressions::Identifier,
        statements::{AssignationExpression, DeclarationExpression},
    },
    errors::errors::ErrorImpl,
};

use super::types::ValueType;

/// Identifier to declared type, for one compilation unit.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, ValueType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            symbols: HashMap::new(),
        }
    }

    /// Records `name -> value_type`, overwriting any earlier declaration.
    pub fn declare(&mut self, name: &str, value_type: ValueType) {
        debug!("declared {}: {}", name, value_type);
        self.symbols.insert(String::from(name), value_type);
    }

    pub fn lookup(&self, name: &str) -> Option<ValueType> {
        self.symbols.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    fn lookup_declared(&self, identifier: &Identifier) -> Result<ValueType, ErrorImpl> {
        self.lookup(identifier.get_name())
            .ok_or_else(|| ErrorImpl::VariableNotDeclared {
                variable: identifier.name.clone(),
            })
    }
}

/// Checks a folded declaration against its written type. Recording the
/// identifier is left to the caller once the statement is complete.
pub fn validate_declaration(
    symbols: &SymbolTable,
    declaration: &mut DeclarationExpression,
) -> Result<(), ErrorImpl> {
    let value_type = declaration.value_type;
    validate_value(symbols, value_type, &mut declaration.assignation.value)
}

/// Checks a folded assignation against the type recorded for its target.
pub fn validate_assignation(
    symbols: &SymbolTable,
    assignation: &mut AssignationExpression,
) -> Result<ValueType, ErrorImpl> {
    let value_type = symbols.lookup_declared(&assignation.identifier)?;
    validate_value(symbols, value_type, &mut assignation.value)?;
    Ok(value_type)
}

/// Accepts `value` for `value_type`.
///
/// A value that still depends on an identifier is not range checked: the
/// identifier must be declared with a type compatible with `value_type`.
/// Anything else must be a literal of the matching kind, and numbers must lie
/// within the closed bounds of the type.
pub fn validate_value(
    symbols: &SymbolTable,
    value_type: ValueType,
    value: &mut Expression,
) -> Result<(), ErrorImpl> {
    if let Some(identifier) = concealed_identifier(value)? {
        let source_type = symbols.lookup_declared(&identifier)?;

        if !source_type.family().is_compatible_with(&value_type.family()) {
            return Err(ErrorImpl::TypeMismatch {
                expected: value_type.to_string(),
                received: source_type.to_string(),
            });
        }
        return Ok(());
    }

    validate_literal(value_type, value)
}

fn concealed_identifier(value: &mut Expression) -> Result<Option<Identifier>, ErrorImpl> {
    if let Expression::Identifier(identifier) = value {
        return Ok(Some(identifier.clone()));
    }

    match value.as_container_mut() {
        Some(container) => container.get_inner_identifier(),
        None => Ok(None),
    }
}

fn validate_literal(value_type: ValueType, value: &Expression) -> Result<(), ErrorImpl> {
    let kind_mismatch = || ErrorImpl::KindMismatch {
        expected: value_type.describe(),
        received: value.repr(0),
    };

    if let Some((min, max)) = value_type.bounds() {
        let Expression::Number(number) = value else {
            return Err(kind_mismatch());
        };

        if number.value < min || number.value > max {
            return Err(ErrorImpl::OutOfRange {
                value_type: value_type.to_string(),
                min,
                max,
                value: number.value,
            });
        }
        return Ok(());
    }

    let matches_kind = matches!(
        (value_type, value),
        (ValueType::Bool, Expression::Boolean(_))
            | (ValueType::Char, Expression::Char(_))
            | (ValueType::Str, Expression::Str(_))
    );

    if matches_kind {
        Ok(())
    } else {
        Err(kind_mismatch())
    }
}
