use std::slice::Iter;

use crate::Span;

use super::{
    expressions::{CallExpr, Expr},
    types::Type,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn last(&self) -> Option<&Stmt> {
        self.body.last()
    }
}

/// A local declaration, `const int x = e;`.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub var_type: Type,
    pub is_constant: bool,
    pub assigned_value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
    Increment,
    Decrement,
}

/// `x = e`, `x += e` and friends, or `x++` / `x--` (which carry no value).
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: String,
    pub operator: AssignOp,
    pub value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: BlockStmt,
    pub else_body: Option<BlockStmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    /// Either a declaration or an assignment.
    pub init: Option<Box<Stmt>>,
    pub condition: Option<Expr>,
    /// Always an assignment.
    pub update: Option<Box<Stmt>>,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
    Call(CallExpr),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Return(ReturnStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::VarDecl(decl) => &decl.span,
            Stmt::Assignment(assignment) => &assignment.span,
            Stmt::Call(call) => &call.span,
            Stmt::If(if_stmt) => &if_stmt.span,
            Stmt::While(while_stmt) => &while_stmt.span,
            Stmt::For(for_stmt) => &for_stmt.span,
            Stmt::Return(return_stmt) => &return_stmt.span,
        }
    }
}
