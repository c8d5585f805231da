//! Plain-text reports of an analysis run.
//!
//! Each function renders one artefact (token list, globals, functions or
//! diagnostics) to a `String`. Writing them to disk is left to the caller.

pub mod report;
