//! Error types and diagnostics for the front end.
//!
//! This module defines two families of errors:
//!
//! - Fatal lexer/parser errors carrying a source position, with
//!   formatting helpers and suggestions (`errors`)
//! - Non-fatal semantic diagnostics collected by the analyzer, grouped by
//!   rule family (`diagnostics`)

pub mod diagnostics;
pub mod errors;

#[cfg(test)]
mod tests;
