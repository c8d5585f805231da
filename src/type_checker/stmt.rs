use crate::{
    ast::{
        statements::{AssignOp, AssignmentStmt, BlockStmt, ReturnStmt, Stmt, VarDeclStmt},
        types::compatible,
    },
    errors::diagnostics::SemanticError,
};

use super::{
    environment::{DuplicateName, SymbolTables, VariableEntry},
    expr::{check_call, check_expr, resolve_type},
    type_checker::{Frame, TypeChecker},
};

pub fn check_block(type_checker: &mut TypeChecker, mut frame: Option<&mut Frame>, block: &BlockStmt) {
    for stmt in block.iter() {
        check_stmt(type_checker, frame.as_deref_mut(), stmt);
    }
}

/// Checks one statement. `frame` is the function whose body is being
/// walked; without one, declarations are ignored and returns are reported.
pub fn check_stmt(type_checker: &mut TypeChecker, mut frame: Option<&mut Frame>, stmt: &Stmt) {
    match stmt {
        Stmt::VarDecl(decl) => {
            if let Some(frame) = frame {
                check_var_decl(type_checker, frame, decl);
            }
        }
        Stmt::Assignment(assignment) => check_assignment(type_checker, frame, assignment),
        Stmt::Call(call) => check_call(type_checker, frame, call),
        Stmt::If(if_stmt) => {
            push_control_structure(frame.as_deref_mut(), "if", if_stmt.span.line());

            check_expr(type_checker, frame.as_deref_mut(), &if_stmt.condition);
            check_block(type_checker, frame.as_deref_mut(), &if_stmt.then_body);
            if let Some(else_body) = &if_stmt.else_body {
                check_block(type_checker, frame, else_body);
            }
        }
        Stmt::While(while_stmt) => {
            push_control_structure(frame.as_deref_mut(), "while", while_stmt.span.line());

            check_expr(type_checker, frame.as_deref_mut(), &while_stmt.condition);
            check_block(type_checker, frame, &while_stmt.body);
        }
        Stmt::For(for_stmt) => {
            push_control_structure(frame.as_deref_mut(), "for", for_stmt.span.line());

            if let Some(init) = &for_stmt.init {
                check_stmt(type_checker, frame.as_deref_mut(), init);
            }
            if let Some(condition) = &for_stmt.condition {
                check_expr(type_checker, frame.as_deref_mut(), condition);
            }
            if let Some(update) = &for_stmt.update {
                check_stmt(type_checker, frame.as_deref_mut(), update);
            }
            check_block(type_checker, frame, &for_stmt.body);
        }
        Stmt::Return(ret) => check_return(type_checker, frame, ret),
    }
}

fn push_control_structure(frame: Option<&mut Frame>, kind: &str, line: u32) {
    if let Some(frame) = frame {
        frame
            .signature
            .control_structures
            .push(format!("{} (linia {})", kind, line));
    }
}

fn check_var_decl(type_checker: &mut TypeChecker, frame: &mut Frame, decl: &VarDeclStmt) {
    let line = decl.span.line();
    let entry = VariableEntry::new(
        &decl.identifier,
        decl.var_type,
        decl.assigned_value.as_ref().map(|value| value.to_string()),
        decl.is_constant,
    );

    match SymbolTables::declare_local(&mut frame.locals, entry.clone()) {
        Ok(()) => frame.signature.local_variables.push(entry),
        Err(DuplicateName(name)) => {
            type_checker.report(line, SemanticError::DuplicateLocal { name })
        }
    }

    // A redeclaration still has its initializer checked.
    if let Some(value) = &decl.assigned_value {
        let received = resolve_type(&type_checker.scope(Some(&*frame)), value);
        if !compatible(decl.var_type, received) {
            type_checker.report(
                line,
                SemanticError::InitializerMismatch {
                    name: decl.identifier.clone(),
                    expected: decl.var_type,
                    received,
                },
            );
        }

        check_expr(type_checker, Some(frame), value);
    }
}

fn check_assignment(
    type_checker: &mut TypeChecker,
    frame: Option<&mut Frame>,
    assignment: &AssignmentStmt,
) {
    let line = assignment.span.line();
    let target = type_checker
        .scope(frame.as_deref())
        .lookup(&assignment.target)
        .cloned();

    match target {
        None => type_checker.report(
            line,
            SemanticError::UndeclaredVariable {
                name: assignment.target.clone(),
            },
        ),
        Some(target) => {
            if target.is_constant {
                type_checker.report(
                    line,
                    SemanticError::ConstAssignment {
                        name: target.name.clone(),
                    },
                );
            }

            let checks_value = !matches!(
                assignment.operator,
                AssignOp::Increment | AssignOp::Decrement
            );
            if let (true, Some(value)) = (checks_value, &assignment.value) {
                let received = resolve_type(&type_checker.scope(frame.as_deref()), value);
                if !compatible(target.var_type, received) {
                    type_checker.report(
                        line,
                        SemanticError::AssignmentMismatch {
                            name: target.name,
                            expected: target.var_type,
                            received,
                        },
                    );
                }
            }
        }
    }

    if let Some(value) = &assignment.value {
        check_expr(type_checker, frame, value);
    }
}

fn check_return(type_checker: &mut TypeChecker, frame: Option<&mut Frame>, ret: &ReturnStmt) {
    let line = ret.span.line();
    let frame = match frame {
        Some(frame) => frame,
        None => {
            type_checker.report(line, SemanticError::ReturnOutsideFunction);
            return;
        }
    };

    let function = frame.signature.name.clone();
    let return_type = frame.signature.return_type;

    match &ret.value {
        Some(_) if return_type.is_void() => {
            type_checker.report(line, SemanticError::VoidReturnsValue { function })
        }
        None if !return_type.is_void() => type_checker.report(
            line,
            SemanticError::MissingReturnValue {
                function,
                return_type,
            },
        ),
        Some(value) => {
            let received = resolve_type(&type_checker.scope(Some(&*frame)), value);
            if !compatible(return_type, received) {
                type_checker.report(
                    line,
                    SemanticError::ReturnTypeMismatch {
                        expected: return_type,
                        received,
                    },
                );
            }
        }
        None => {}
    }

    if let Some(value) = &ret.value {
        check_expr(type_checker, Some(frame), value);
    }
}
