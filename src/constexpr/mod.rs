//! Constant folding.
//!
//! Reduces expressions bottom-up to literals, or to the minimal residual that
//! still depends on an identifier, and lets containers report the first
//! identifier they hide once folded.

pub mod constexpr;

#[cfg(test)]
mod tests;
