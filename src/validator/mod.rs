//! Declaration and assignation validation.
//!
//! Range and kind checks of folded right-hand sides against declared types,
//! backed by the symbol table the parser threads through a compilation unit.

pub mod types;
pub mod validator;
