//! Declared value types.
//!
//! The type names a `TYPE` token may carry, with the closed numeric bounds
//! each fixed-width family accepts.

use std::{fmt::Display, str::FromStr};

use crate::errors::errors::ErrorImpl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    Char,
    Str,
}

/// Groups of value types a literal kind can satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFamily {
    Signed,
    Unsigned,
    Float,
    Bool,
    Char,
    Str,
}

impl TypeFamily {
    /// Numbers and booleans convert through truthiness; chars and strings
    /// only match themselves.
    pub fn is_compatible_with(&self, other: &TypeFamily) -> bool {
        match (self, other) {
            (TypeFamily::Char, TypeFamily::Char) | (TypeFamily::Str, TypeFamily::Str) => true,
            (TypeFamily::Char | TypeFamily::Str, _) | (_, TypeFamily::Char | TypeFamily::Str) => false,
            _ => true,
        }
    }
}

impl ValueType {
    pub const ALL: [ValueType; 13] = [
        ValueType::I8,
        ValueType::I16,
        ValueType::I32,
        ValueType::I64,
        ValueType::U8,
        ValueType::U16,
        ValueType::U32,
        ValueType::U64,
        ValueType::F32,
        ValueType::F64,
        ValueType::Bool,
        ValueType::Char,
        ValueType::Str,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ValueType::I8 => "i8",
            ValueType::I16 => "i16",
            ValueType::I32 => "i32",
            ValueType::I64 => "i64",
            ValueType::U8 => "u8",
            ValueType::U16 => "u16",
            ValueType::U32 => "u32",
            ValueType::U64 => "u64",
            ValueType::F32 => "f32",
            ValueType::F64 => "f64",
            ValueType::Bool => "bool",
            ValueType::Char => "char",
            ValueType::Str => "str",
        }
    }

    pub fn family(&self) -> TypeFamily {
        match self {
            ValueType::I8 | ValueType::I16 | ValueType::I32 | ValueType::I64 => TypeFamily::Signed,
            ValueType::U8 | ValueType::U16 | ValueType::U32 | ValueType::U64 => TypeFamily::Unsigned,
            ValueType::F32 | ValueType::F64 => TypeFamily::Float,
            ValueType::Bool => TypeFamily::Bool,
            ValueType::Char => TypeFamily::Char,
            ValueType::Str => TypeFamily::Str,
        }
    }

    /// Closed inclusive bounds of the numeric types.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            ValueType::I8 => Some((i8::MIN as f64, i8::MAX as f64)),
            ValueType::I16 => Some((i16::MIN as f64, i16::MAX as f64)),
            ValueType::I32 => Some((i32::MIN as f64, i32::MAX as f64)),
            ValueType::I64 => Some((i64::MIN as f64, i64::MAX as f64)),
            ValueType::U8 => Some((0.0, u8::MAX as f64)),
            ValueType::U16 => Some((0.0, u16::MAX as f64)),
            ValueType::U32 => Some((0.0, u32::MAX as f64)),
            ValueType::U64 => Some((0.0, u64::MAX as f64)),
            ValueType::F32 => Some((-(f32::MAX as f64), f32::MAX as f64)),
            ValueType::F64 => Some((-f64::MAX, f64::MAX)),
            ValueType::Bool | ValueType::Char | ValueType::Str => None,
        }
    }

    /// What a literal must look like to satisfy this type, for diagnostics.
    pub fn describe(&self) -> String {
        match self.bounds() {
            Some((min, max)) => format!("{} in [{}, {}]", self.name(), min, max),
            None => match self {
                ValueType::Bool => String::from("boolean (true / false)"),
                ValueType::Char => String::from("char"),
                _ => String::from("string"),
            },
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ValueType {
    type Err = ErrorImpl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueType::ALL
            .iter()
            .find(|value_type| value_type.name() == s)
            .copied()
            .ok_or_else(|| ErrorImpl::UnknownType {
                type_: String::from(s),
            })
    }
}
