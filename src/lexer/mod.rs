//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts MiniLang source
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, type names, identifiers, literals and operators
//! - Line tracking for diagnostics
//! - Comments and whitespace handling
//! - Flagging malformed fragments as error tokens instead of aborting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
