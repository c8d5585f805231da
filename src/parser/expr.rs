use crate::{
    ast::expressions::{
        BinaryExpr, BinaryOp, CallExpr, Expr, GroupingExpr, Literal, LiteralExpr, SymbolExpr,
        UnaryExpr, UnaryOp,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected()),
    };

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => return Err(parser.unexpected()),
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier if parser.peek_kind(1) == TokenKind::OpenParen => {
            Ok(Expr::Call(parse_call(parser)?))
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expr::Symbol(SymbolExpr {
                name: token.value.clone(),
                span: token.span.clone(),
            }))
        }
        TokenKind::Number | TokenKind::String | TokenKind::True | TokenKind::False => {
            let span = parser.current_token().span.clone();
            Ok(Expr::Literal(LiteralExpr {
                value: parse_literal(parser)?,
                span,
            }))
        }
        _ => Err(parser.unexpected()),
    }
}

/// Parses a single literal token. Shared with global initializers, which
/// only accept literals.
pub fn parse_literal(parser: &mut Parser) -> Result<Literal, Error> {
    let literal = match parser.current_token_kind() {
        TokenKind::Number => Literal::Number(parser.current_token().value.clone()),
        TokenKind::String => Literal::String(parser.current_token().value.clone()),
        TokenKind::True => Literal::Bool(true),
        TokenKind::False => Literal::Bool(false),
        _ => return Err(parser.unexpected_detailed("expected a literal value")),
    };

    parser.advance();
    Ok(literal)
}

fn binary_operator(kind: TokenKind) -> Option<BinaryOp> {
    let operator = match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Dash => BinaryOp::Subtract,
        TokenKind::Star => BinaryOp::Multiply,
        TokenKind::Slash => BinaryOp::Divide,
        TokenKind::Percent => BinaryOp::Modulo,
        TokenKind::Less => BinaryOp::Less,
        TokenKind::LessEquals => BinaryOp::LessEquals,
        TokenKind::Greater => BinaryOp::Greater,
        TokenKind::GreaterEquals => BinaryOp::GreaterEquals,
        TokenKind::Equals => BinaryOp::Equals,
        TokenKind::NotEquals => BinaryOp::NotEquals,
        TokenKind::And => BinaryOp::And,
        TokenKind::Or => BinaryOp::Or,
        _ => return None,
    };

    Some(operator)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = match binary_operator(parser.current_token_kind()) {
        Some(operator) => operator,
        None => return Err(parser.unexpected()),
    };
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let operator = match operator_token.kind {
        TokenKind::Not => UnaryOp::Not,
        TokenKind::Dash => UnaryOp::Negate,
        TokenKind::PlusPlus => UnaryOp::PreIncrement,
        _ => UnaryOp::PreDecrement,
    };

    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary(UnaryExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: operand.get_span().end.clone(),
        },
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_postfix_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let operator = if operator_token.kind == TokenKind::PlusPlus {
        UnaryOp::PostIncrement
    } else {
        UnaryOp::PostDecrement
    };

    Ok(Expr::Unary(UnaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: operator_token.span.end.clone(),
        },
        operator,
        operand: Box::new(left),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenParen)?.span.start;
    let inner = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::CloseParen)?.span.end;

    Ok(Expr::Grouping(GroupingExpr {
        inner: Box::new(inner),
        span: Span { start, end },
    }))
}

/// Parses `name(arg, ...)`, used both for call expressions and call
/// statements.
pub fn parse_call(parser: &mut Parser) -> Result<CallExpr, Error> {
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Default)?);
        }
    }

    let end = parser.expect(TokenKind::CloseParen)?.span.end;

    Ok(CallExpr {
        callee: name.value,
        arguments,
        span: Span {
            start: name.span.start,
            end,
        },
    })
}
