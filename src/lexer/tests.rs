//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, type names and identifiers
//! - Numeric literals (integers, decimals, exponents)
//! - String literals with escape sequences
//! - Operators and punctuation
//! - Comments and line tracking
//! - Error tokens for malformed fragments

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let source = "const if else while for return true false".to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Const);
    assert_eq!(tokens[1].kind, TokenKind::If);
    assert_eq!(tokens[2].kind, TokenKind::Else);
    assert_eq!(tokens[3].kind, TokenKind::While);
    assert_eq!(tokens[4].kind, TokenKind::For);
    assert_eq!(tokens[5].kind, TokenKind::Return);
    assert_eq!(tokens[6].kind, TokenKind::True);
    assert_eq!(tokens[7].kind, TokenKind::False);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_type_keywords() {
    let source = "int float double string bool void".to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::IntType);
    assert_eq!(tokens[1].kind, TokenKind::FloatType);
    assert_eq!(tokens[2].kind, TokenKind::DoubleType);
    assert_eq!(tokens[3].kind, TokenKind::StringType);
    assert_eq!(tokens[4].kind, TokenKind::BoolType);
    assert_eq!(tokens[5].kind, TokenKind::VoidType);
    assert!(tokens[..6].iter().all(|token| token.kind.is_type_keyword()));
    assert!(!TokenKind::Identifier.is_type_keyword());
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore integer".to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "integer");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 1e5 2.5E-3".to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(values, vec!["42", "3.14", "0", "1e5", "2.5E-3", "EOF"]);
    assert!(tokens[..5].iter().all(|token| token.kind == TokenKind::Number));
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words" """#.to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""hello\nworld" "tab\there" "quote\"test" "backslash\\""#.to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "quote\"test");
    assert_eq!(tokens[3].value, "backslash\\");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % == != < > <= >= = && || !".to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_compound_operators() {
    let source = "++ -- += -= *= /= %=".to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::PlusPlus);
    assert_eq!(tokens[1].kind, TokenKind::MinusMinus);
    assert_eq!(tokens[2].kind, TokenKind::PlusEquals);
    assert_eq!(tokens[3].kind, TokenKind::MinusEquals);
    assert_eq!(tokens[4].kind, TokenKind::StarEquals);
    assert_eq!(tokens[5].kind, TokenKind::SlashEquals);
    assert_eq!(tokens[6].kind, TokenKind::PercentEquals);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } , ;".to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_comments() {
    let source = "int x = 5; // trailing\n/* block\ncomment */ int y = 10;".to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::IntType);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[3].value, "5");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::IntType);
    assert_eq!(tokens[6].value, "y");
    assert_eq!(tokens[6].span.line(), 3);
    assert_eq!(tokens[9].kind, TokenKind::Semicolon);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_tracks_lines() {
    let source = "int x;\n\nvoid main() {\n  x = 1;\n}\n".to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    assert_eq!(tokens[0].span.line(), 1);
    assert_eq!(tokens[3].kind, TokenKind::VoidType);
    assert_eq!(tokens[3].span.line(), 3);
    assert_eq!(tokens[8].value, "x");
    assert_eq!(tokens[8].span.line(), 4);
    assert_eq!(tokens[12].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[12].span.line(), 5);
}

#[test]
fn test_tokenize_unrecognized_character() {
    let source = "int x = @;".to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    assert_eq!(tokens[3].kind, TokenKind::Error);
    assert_eq!(tokens[3].value, "@");
    assert!(tokens[3].is_error());
    // Tokenization carries on after the malformed fragment.
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_malformed_number() {
    let source = "12abc 7".to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].value, "12abc");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "7");
}

#[test]
fn test_tokenize_unterminated_string() {
    let source = "string s = \"open;\nint y;".to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    assert_eq!(tokens[3].kind, TokenKind::Error);
    assert_eq!(tokens[3].value, "\"open;");
    assert_eq!(tokens[4].kind, TokenKind::IntType);
    assert_eq!(tokens[4].span.line(), 2);
}

#[test]
fn test_token_display() {
    let source = "int x\n = \"hi\";".to_string();
    let tokens = tokenize(source, Some("test.minilang".to_string()));

    assert_eq!(tokens[0].to_string(), "<INTTYPE, \"int\", 1>");
    assert_eq!(tokens[1].to_string(), "<IDENTIFIER, \"x\", 1>");
    assert_eq!(tokens[3].to_string(), "<STRING, \"hi\", 2>");
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize(String::new(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}
