//! Type parsing implementation.
//!
//! MiniLang only has the primitive types, each spelled by a keyword, so a
//! type annotation is a single token dispatched through the type lookup
//! table. A bare identifier in type position is reported as an unknown type.

use std::collections::HashMap;

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<Type, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Initializes the type parsing lookup table.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::IntType, parse_primitive_type);
    parser.type_nud(TokenKind::FloatType, parse_primitive_type);
    parser.type_nud(TokenKind::DoubleType, parse_primitive_type);
    parser.type_nud(TokenKind::StringType, parse_primitive_type);
    parser.type_nud(TokenKind::BoolType, parse_primitive_type);
    parser.type_nud(TokenKind::VoidType, parse_primitive_type);
}

pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let token_kind = parser.current_token_kind();

    match parser.get_type_nud_lookup().get(&token_kind) {
        Some(nud) => {
            let nud = *nud;
            nud(parser)
        }
        None if token_kind == TokenKind::Identifier => Err(Error::new(
            ErrorImpl::UnknownType {
                type_: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
        None => Err(parser.unexpected_detailed("expected a type")),
    }
}

pub fn parse_primitive_type(parser: &mut Parser) -> Result<Type, Error> {
    let ty = match parser.current_token_kind() {
        TokenKind::IntType => Type::Int,
        TokenKind::FloatType => Type::Float,
        TokenKind::DoubleType => Type::Double,
        TokenKind::StringType => Type::String,
        TokenKind::BoolType => Type::Bool,
        TokenKind::VoidType => Type::Void,
        _ => return Err(parser.unexpected_detailed("expected a type")),
    };

    parser.advance();
    Ok(ty)
}
