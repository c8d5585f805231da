use crate::{
    ast::{
        ast::{FnDeclStmt, GlobalDeclStmt, Item, Parameter},
        expressions::Literal,
        statements::{
            AssignOp, AssignmentStmt, BlockStmt, ForStmt, IfStmt, ReturnStmt, Stmt, VarDeclStmt,
            WhileStmt,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{
    expr::{parse_call, parse_literal},
    parser::Parser,
    types::parse_type,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        Some(handler) => {
            let handler = *handler;
            handler(parser)
        }
        None => Err(parser.unexpected()),
    }
}

/// Parses a global declaration or a function definition. Both start with
/// a type and a name; a following `(` selects the function form.
pub fn parse_item(parser: &mut Parser) -> Result<Item, Error> {
    let start = parser.get_position();
    let is_constant = parser.current_token_kind() == TokenKind::Const;
    if is_constant {
        parser.advance();
    }

    let var_type = parse_type(parser)?;

    let error = parser.unexpected_detailed("expected identifier after type");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    if parser.current_token_kind() == TokenKind::OpenParen {
        if is_constant {
            return Err(parser.unexpected_detailed("functions cannot be declared const"));
        }

        let parameters = parse_parameters(parser)?;
        let body = parse_block(parser)?;

        return Ok(Item::Function(FnDeclStmt {
            span: Span {
                start,
                end: body.span.end.clone(),
            },
            identifier,
            return_type: var_type,
            parameters,
            body,
        }));
    }

    let assigned_value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_global_initializer(parser)?)
    } else {
        None
    };

    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Item::Global(GlobalDeclStmt {
        identifier,
        var_type,
        is_constant,
        assigned_value,
        span: Span { start, end },
    }))
}

/// Global initializers are literals, optionally a negated number.
fn parse_global_initializer(parser: &mut Parser) -> Result<Literal, Error> {
    if parser.current_token_kind() == TokenKind::Dash && parser.peek_kind(1) == TokenKind::Number {
        parser.advance();
        let number = parser.advance().value.clone();
        return Ok(Literal::Number(format!("-{}", number)));
    }

    parse_literal(parser)
}

fn parse_parameters(parser: &mut Parser) -> Result<Vec<Parameter>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        parameters.push(parse_parameter(parser)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            parameters.push(parse_parameter(parser)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(parameters)
}

fn parse_parameter(parser: &mut Parser) -> Result<Parameter, Error> {
    let start = parser.get_position();
    let param_type = parse_type(parser)?;

    let error = parser.unexpected_detailed("expected parameter name");
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?;

    Ok(Parameter {
        name: name.value,
        param_type,
        span: Span {
            start,
            end: name.span.end,
        },
    })
}

pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut body = vec![];

    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(parser.unexpected_detailed("expected `}` to close the block"));
        }
        body.push(parse_stmt(parser)?);
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span.end;

    Ok(BlockStmt {
        body,
        span: Span { start, end },
    })
}

/// `const int x = e` without the terminating semicolon, so `for` headers
/// can reuse it.
fn parse_var_decl(parser: &mut Parser) -> Result<VarDeclStmt, Error> {
    let start = parser.get_position();
    let is_constant = parser.current_token_kind() == TokenKind::Const;
    if is_constant {
        parser.advance();
    }

    let var_type = parse_type(parser)?;

    let error = parser.unexpected_detailed("expected identifier during variable declaration");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let assigned_value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(VarDeclStmt {
        identifier,
        var_type,
        is_constant,
        assigned_value,
        span: Span {
            start,
            end: parser.previous_position(),
        },
    })
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let decl = parse_var_decl(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::VarDecl(decl))
}

/// `x = e`, `x op= e`, `x++` or `x--`, without the terminating semicolon.
fn parse_assignment(parser: &mut Parser) -> Result<AssignmentStmt, Error> {
    let target = parser.expect(TokenKind::Identifier)?;

    let operator = match parser.current_token_kind() {
        TokenKind::Assignment => AssignOp::Assign,
        TokenKind::PlusEquals => AssignOp::AddAssign,
        TokenKind::MinusEquals => AssignOp::SubtractAssign,
        TokenKind::StarEquals => AssignOp::MultiplyAssign,
        TokenKind::SlashEquals => AssignOp::DivideAssign,
        TokenKind::PercentEquals => AssignOp::ModuloAssign,
        TokenKind::PlusPlus => AssignOp::Increment,
        TokenKind::MinusMinus => AssignOp::Decrement,
        _ => return Err(parser.unexpected_detailed("expected an assignment or a call")),
    };
    parser.advance();

    let value = match operator {
        AssignOp::Increment | AssignOp::Decrement => None,
        _ => Some(parse_expr(parser, BindingPower::Default)?),
    };

    Ok(AssignmentStmt {
        target: target.value,
        operator,
        value,
        span: Span {
            start: target.span.start,
            end: parser.previous_position(),
        },
    })
}

/// Statements starting with a name are either calls or assignments.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let stmt = if parser.peek_kind(1) == TokenKind::OpenParen {
        Stmt::Call(parse_call(parser)?)
    } else {
        Stmt::Assignment(parse_assignment(parser)?)
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(stmt)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_body = parse_block(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        if parser.current_token_kind() == TokenKind::If {
            // `else if` becomes an else block holding the nested `if`.
            let nested = parse_if_stmt(parser)?;
            Some(BlockStmt {
                span: nested.get_span().clone(),
                body: vec![nested],
            })
        } else {
            Some(parse_block(parser)?)
        }
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        span: Span {
            start,
            end: parser.previous_position(),
        },
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        span: Span {
            start,
            end: body.span.end.clone(),
        },
        body,
    }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();
    parser.expect(TokenKind::OpenParen)?;

    let init = match parser.current_token_kind() {
        TokenKind::Semicolon => None,
        kind if kind == TokenKind::Const || kind.is_type_keyword() => {
            Some(Box::new(Stmt::VarDecl(parse_var_decl(parser)?)))
        }
        _ => Some(Box::new(Stmt::Assignment(parse_assignment(parser)?))),
    };
    parser.expect(TokenKind::Semicolon)?;

    let condition = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };
    parser.expect(TokenKind::Semicolon)?;

    let update = if parser.current_token_kind() != TokenKind::CloseParen {
        Some(Box::new(Stmt::Assignment(parse_assignment(parser)?)))
    } else {
        None
    };
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(Stmt::For(ForStmt {
        init,
        condition,
        update,
        span: Span {
            start,
            end: body.span.end.clone(),
        },
        body,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span { start, end },
    }))
}
