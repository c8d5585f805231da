use crate::Span;

use super::{expressions::Literal, statements::BlockStmt, types::Type};

/// A parsed MiniLang source file: global declarations and function
/// definitions, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub items: Vec<Item>,
    pub span: Span,
}

impl Program {
    pub fn functions(&self) -> impl Iterator<Item = &FnDeclStmt> {
        self.items.iter().filter_map(|item| match item {
            Item::Function(function) => Some(function),
            Item::Global(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Global(GlobalDeclStmt),
    Function(FnDeclStmt),
}

/// A global declaration. Its initializer, if any, is a bare literal.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalDeclStmt {
    pub identifier: String,
    pub var_type: Type,
    pub is_constant: bool,
    pub assigned_value: Option<Literal>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub param_type: Type,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub return_type: Type,
    pub parameters: Vec<Parameter>,
    pub body: BlockStmt,
    /// From the return type to the closing brace.
    pub span: Span,
}
