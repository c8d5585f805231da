use std::rc::Rc;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Receives the text matched by its pattern at the lexer's current position.
pub type RegexHandler = fn(&mut Lexer, String);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).unwrap(),
        handler,
    }
}

lazy_static! {
    // Order matters: the first pattern matching at the current position wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern("^[0-9]+(\\.[0-9]+)?([eE][+-]?[0-9]+)?", number_handler),
        pattern("^\\s+", skip_handler),
        pattern("^\"([^\"\\\\\\n]|\\\\.)*\"", string_handler),
        pattern("^\"([^\"\\\\\\n]|\\\\.)*", error_handler),
        pattern("^//[^\\n]*", skip_handler),
        pattern("^/\\*(?s:.*?)\\*/", skip_handler),
        pattern("^/\\*(?s:.*)", error_handler),
        pattern("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        pattern("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        pattern("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals)),
        pattern("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals)),
        pattern("^!", MK_DEFAULT_HANDLER!(TokenKind::Not)),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment)),
        pattern("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals)),
        pattern("^<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        pattern("^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals)),
        pattern("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        pattern("^\\|\\|", MK_DEFAULT_HANDLER!(TokenKind::Or)),
        pattern("^&&", MK_DEFAULT_HANDLER!(TokenKind::And)),
        pattern("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        pattern("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        pattern("^\\+\\+", MK_DEFAULT_HANDLER!(TokenKind::PlusPlus)),
        pattern("^--", MK_DEFAULT_HANDLER!(TokenKind::MinusMinus)),
        pattern("^\\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusEquals)),
        pattern("^-=", MK_DEFAULT_HANDLER!(TokenKind::MinusEquals)),
        pattern("^\\*=", MK_DEFAULT_HANDLER!(TokenKind::StarEquals)),
        pattern("^/=", MK_DEFAULT_HANDLER!(TokenKind::SlashEquals)),
        pattern("^%=", MK_DEFAULT_HANDLER!(TokenKind::PercentEquals)),
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash)),
        pattern("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
        pattern("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star)),
        pattern("^%", MK_DEFAULT_HANDLER!(TokenKind::Percent)),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            line: 1,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    /// Moves past `n` bytes of source, counting any newlines crossed.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        self.line += self.source[self.pos..end].matches('\n').count() as u32;
        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// A span covering the current line only, for single-line tokens.
    pub fn span_here(&self) -> Span {
        Span {
            start: Position(self.line, Rc::clone(&self.file)),
            end: Position(self.line, Rc::clone(&self.file)),
        }
    }
}

fn number_handler(lexer: &mut Lexer, matched: String) {
    let span = lexer.span_here();

    // `12abc` is one malformed fragment, not a number followed by a name.
    let trailing = lexer.remainder()[matched.len()..]
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(lexer.remainder().len() - matched.len());

    if trailing > 0 {
        let fragment = lexer.remainder()[..matched.len() + trailing].to_string();
        lexer.advance_n(fragment.len());
        lexer.push(MK_TOKEN!(TokenKind::Error, fragment, span));
        return;
    }

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched, span));
}

fn skip_handler(lexer: &mut Lexer, matched: String) {
    lexer.advance_n(matched.len());
}

fn error_handler(lexer: &mut Lexer, matched: String) {
    let span = lexer.span_here();
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Error, matched, span));
}

fn string_handler(lexer: &mut Lexer, matched: String) {
    let span = lexer.span_here();
    lexer.advance_n(matched.len());

    let string_literal = &matched[1..matched.len() - 1];
    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next_ch) = chars.peek() {
                match next_ch {
                    'n' => {
                        result.push('\n');
                        chars.next();
                    }
                    't' => {
                        result.push('\t');
                        chars.next();
                    }
                    '\\' => {
                        result.push('\\');
                        chars.next();
                    }
                    'r' => {
                        result.push('\r');
                        chars.next();
                    }
                    '"' => {
                        result.push('"');
                        chars.next();
                    }
                    '0' => {
                        result.push('\0');
                        chars.next();
                    }
                    _ => {
                        result.push(ch); // Keep the backslash
                    }
                }
            } else {
                result.push(ch); // Keep the lone backslash
            }
        } else {
            result.push(ch);
        }
    }

    lexer.push(MK_TOKEN!(TokenKind::String, result, span));
}

fn symbol_handler(lexer: &mut Lexer, matched: String) {
    let span = lexer.span_here();
    lexer.advance_n(matched.len());

    if let Some(kind) = RESERVED_LOOKUP.get(matched.as_str()) {
        lexer.push(MK_TOKEN!(*kind, matched, span));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, matched, span));
    }
}

/// Splits `source` into tokens, always ending with `EOF`.
///
/// Tokenization never fails: characters no pattern accepts, unterminated
/// strings or comments and malformed numbers become `TokenKind::Error`
/// tokens, which the parser rejects.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(lex.remainder()) {
                let text = found.as_str().to_string();
                (pattern.handler)(&mut lex, text);
                matched = true;
                break;
            }
        }

        if !matched {
            let unknown = lex.remainder().chars().next().map(String::from).unwrap_or_default();
            error_handler(&mut lex, unknown);
        }
    }

    let span = lex.span_here();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));

    debug!(
        "tokenized {} into {} tokens",
        lex.file,
        lex.tokens.len()
    );

    lex.tokens
}
