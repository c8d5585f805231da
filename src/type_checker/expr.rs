use crate::{
    ast::{
        expressions::{CallExpr, Expr, Literal, UnaryOp},
        types::{compatible, Type},
    },
    errors::diagnostics::SemanticError,
};

use super::{
    environment::Scope,
    type_checker::{Frame, TypeChecker},
};

/// Resolves the static type of an expression without reporting anything.
///
/// Comparisons and logical operators always yield `bool`. Arithmetic picks
/// the widest operand type (`string` > `double` > `float` > `int`) and
/// falls back to `float`, also when an operand is unresolved. A name or
/// call that cannot be resolved is [`Type::Unknown`].
pub fn resolve_type(scope: &Scope, expr: &Expr) -> Type {
    match expr {
        Expr::Binary(binary) if binary.operator.is_boolean() => Type::Bool,
        Expr::Binary(binary) => arithmetic_type(
            resolve_type(scope, &binary.left),
            resolve_type(scope, &binary.right),
        ),
        Expr::Unary(unary) => match unary.operator {
            UnaryOp::Not => Type::Bool,
            _ => resolve_type(scope, &unary.operand),
        },
        Expr::Literal(literal) => literal_type(&literal.value),
        Expr::Symbol(symbol) => scope
            .lookup(&symbol.name)
            .map(|entry| entry.var_type)
            .unwrap_or(Type::Unknown),
        Expr::Call(call) => scope
            .lookup_function(&call.callee)
            .map(|function| function.return_type)
            .unwrap_or(Type::Unknown),
        Expr::Grouping(grouping) => resolve_type(scope, &grouping.inner),
    }
}

fn arithmetic_type(left: Type, right: Type) -> Type {
    let either = |ty: Type| left == ty || right == ty;

    if either(Type::String) {
        Type::String
    } else if either(Type::Double) {
        Type::Double
    } else if either(Type::Float) {
        Type::Float
    } else if left == Type::Int && right == Type::Int {
        Type::Int
    } else {
        Type::Float
    }
}

pub fn literal_type(literal: &Literal) -> Type {
    match literal {
        Literal::String(_) => Type::String,
        Literal::Bool(_) => Type::Bool,
        Literal::Number(text) if text.contains(&['.', 'e', 'E'][..]) => Type::Float,
        Literal::Number(_) => Type::Int,
    }
}

/// Walks an expression in pre-order, reporting undeclared variables and
/// checking every call it contains.
pub fn check_expr(type_checker: &mut TypeChecker, mut frame: Option<&mut Frame>, expr: &Expr) {
    match expr {
        Expr::Binary(binary) => {
            check_expr(type_checker, frame.as_deref_mut(), &binary.left);
            check_expr(type_checker, frame, &binary.right);
        }
        Expr::Unary(unary) => check_expr(type_checker, frame, &unary.operand),
        Expr::Literal(_) => {}
        Expr::Symbol(symbol) => {
            let declared = type_checker
                .scope(frame.as_deref())
                .lookup(&symbol.name)
                .is_some();

            if !declared {
                type_checker.report(
                    symbol.span.line(),
                    SemanticError::UndeclaredVariable {
                        name: symbol.name.clone(),
                    },
                );
            }
        }
        Expr::Call(call) => check_call(type_checker, frame, call),
        Expr::Grouping(grouping) => check_expr(type_checker, frame, &grouping.inner),
    }
}

/// Checks a call, whether it stands alone as a statement or sits inside an
/// expression. Argument types are only compared when the arity matches.
pub fn check_call(type_checker: &mut TypeChecker, mut frame: Option<&mut Frame>, call: &CallExpr) {
    let line = call.span.line();

    if call.callee == "main" {
        type_checker.report(line, SemanticError::MainCalled);
    } else {
        let expected: Option<Vec<Type>> = type_checker
            .tables
            .lookup_function(&call.callee)
            .map(|function| function.parameter_types().collect());

        match expected {
            None => type_checker.report(
                line,
                SemanticError::UndefinedFunction {
                    name: call.callee.clone(),
                },
            ),
            Some(expected) if expected.len() != call.arguments.len() => type_checker.report(
                line,
                SemanticError::ArgumentCountMismatch {
                    function: call.callee.clone(),
                    expected: expected.len(),
                    received: call.arguments.len(),
                },
            ),
            Some(expected) => {
                let scope = type_checker.scope(frame.as_deref());
                let mismatches: Vec<SemanticError> = expected
                    .iter()
                    .zip(&call.arguments)
                    .enumerate()
                    .filter_map(|(index, (expected, argument))| {
                        let received = resolve_type(&scope, argument);
                        (!compatible(*expected, received)).then(|| {
                            SemanticError::ArgumentTypeMismatch {
                                function: call.callee.clone(),
                                position: index + 1,
                                expected: *expected,
                                received,
                            }
                        })
                    })
                    .collect();

                for mismatch in mismatches {
                    type_checker.report(line, mismatch);
                }
            }
        }

        if let Some(frame) = frame.as_deref_mut() {
            if frame.signature.name == call.callee {
                frame.signature.is_recursive = true;
            }
        }
    }

    for argument in &call.arguments {
        check_expr(type_checker, frame.as_deref_mut(), argument);
    }
}
