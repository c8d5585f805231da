//! Semantic analysis module.
//!
//! This module walks a parsed [`Program`](crate::ast::ast::Program) once, in
//! source order, and collects every rule violation as a
//! [`Diagnostic`](crate::errors::diagnostics::Diagnostic) instead of stopping
//! at the first one. Along the way it:
//!
//! - Builds the global variable table and the function table
//! - Checks declarations, assignments, calls and returns against declared types
//! - Flags recursive functions and records their control structures
//! - Validates the rules around `main`
//!
//! Function headers are registered up front, so a call may refer to a
//! function defined later in the file.

pub mod environment;
pub mod expr;
pub mod stmt;
pub mod type_checker;
