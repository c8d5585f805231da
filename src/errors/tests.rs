//! Unit tests for error handling.
//!
//! This module contains tests for fatal error types and semantic
//! diagnostic formatting.

use crate::ast::types::Type;
use crate::errors::diagnostics::{Diagnostic, DiagnosticKind, SemanticError};
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.minilang".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().line(), 10);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position(3, Rc::new("test.minilang".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.to_string(), "unexpected token: \"}\" (L3)");
    let boxed: Box<dyn std::error::Error> = Box::new(error.clone());
    assert_eq!(boxed.to_string(), error.to_string());
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("semicolon")),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_unknown_type_error() {
    let error = Error::new(
        ErrorImpl::UnknownType {
            type_: "Point".to_string(),
        },
        Position(1, Rc::new("test.minilang".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnknownType");
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnknownType {
            type_: "Point".to_string()
        }
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostic_format() {
    let diagnostic = Diagnostic::new(
        7,
        SemanticError::ConstAssignment {
            name: "y".to_string(),
        },
    );

    assert_eq!(
        diagnostic.to_string(),
        "Eroare Semantica (L7): Nu se poate modifica variabila constanta 'y'"
    );
    assert_eq!(diagnostic.kind(), DiagnosticKind::ConstViolation);
}

#[test]
fn test_diagnostic_messages_name_types() {
    let diagnostic = Diagnostic::new(
        4,
        SemanticError::ArgumentTypeMismatch {
            function: "f".to_string(),
            position: 2,
            expected: Type::Int,
            received: Type::String,
        },
    );

    assert_eq!(
        diagnostic.to_string(),
        "Eroare Semantica (L4): Argumentul 2 al functiei 'f' este incompatibil. Asteptat: 'int', Primit: 'string'."
    );

    let missing = SemanticError::MissingReturn {
        function: "f".to_string(),
        return_type: Type::Int,
    };
    assert_eq!(
        missing.to_string(),
        "Functia 'f' (tip int) nu se incheie cu o instructiune return."
    );
}

#[test]
fn test_semantic_error_kinds() {
    assert_eq!(
        SemanticError::DuplicateParameter { name: "a".to_string() }.kind(),
        DiagnosticKind::DuplicateDeclaration
    );
    assert_eq!(
        SemanticError::UndefinedFunction { name: "g".to_string() }.kind(),
        DiagnosticKind::UndeclaredReference
    );
    assert_eq!(SemanticError::NumberInitializer.kind(), DiagnosticKind::TypeMismatch);
    assert_eq!(
        SemanticError::ArgumentCountMismatch {
            function: "f".to_string(),
            expected: 2,
            received: 1
        }
        .kind(),
        DiagnosticKind::ArityMismatch
    );
    assert_eq!(SemanticError::MissingMain.kind(), DiagnosticKind::StructuralViolation);
    assert_eq!(SemanticError::MainCalled.kind(), DiagnosticKind::StructuralViolation);
    assert_eq!(
        SemanticError::VoidReturnsValue { function: "g".to_string() }.kind(),
        DiagnosticKind::StructuralViolation
    );
}
