//! Error types and error handling for the front end.
//!
//! Every failure is fatal to the statement being parsed and is surfaced to
//! the caller as an `Error` carrying the token position:
//!
//! - Syntax errors (missing or unexpected tokens)
//! - Arithmetic errors raised while folding constants
//! - Operand-kind errors for operators without a folding rule
//! - Range and kind-mismatch errors from declaration validation

pub mod errors;

#[cfg(test)]
mod tests;
