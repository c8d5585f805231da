use std::fmt::Display;

use crate::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,
    NotEquals,
    And,
    Or,
}

impl BinaryOp {
    /// Relational, equality and logical operators, which always yield `bool`.
    pub fn is_boolean(&self) -> bool {
        matches!(
            self,
            BinaryOp::Less
                | BinaryOp::LessEquals
                | BinaryOp::Greater
                | BinaryOp::GreaterEquals
                | BinaryOp::Equals
                | BinaryOp::NotEquals
                | BinaryOp::And
                | BinaryOp::Or
        )
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Less => "<",
            BinaryOp::LessEquals => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEquals => ">=",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Negate,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Numeric text exactly as written, e.g. `3.14` or `1e5`.
    Number(String),
    /// Decoded string contents, without the quotes.
    String(String),
    Bool(bool),
}

impl Literal {
    pub fn is_string(&self) -> bool {
        matches!(self, Literal::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Literal::Number(_))
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(text) => write!(f, "{}", text),
            Literal::String(text) => write!(f, "{:?}", text),
            Literal::Bool(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOp,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOp,
    pub operand: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub name: String,
    pub span: Span,
}

/// A call by name. The language has no indirect calls, so the callee is
/// always an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Literal(LiteralExpr),
    Symbol(SymbolExpr),
    Call(CallExpr),
    Grouping(GroupingExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Binary(binary) => &binary.span,
            Expr::Unary(unary) => &unary.span,
            Expr::Literal(literal) => &literal.span,
            Expr::Symbol(symbol) => &symbol.span,
            Expr::Call(call) => &call.span,
            Expr::Grouping(grouping) => &grouping.span,
        }
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.callee)?;
        for (index, argument) in self.arguments.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", argument)?;
        }
        write!(f, ")")
    }
}

/// Source-like rendering, used as the recorded value of initialized variables.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Binary(binary) => write!(
                f,
                "{} {} {}",
                binary.left,
                binary.operator.symbol(),
                binary.right
            ),
            Expr::Unary(unary) => match unary.operator {
                UnaryOp::Not => write!(f, "!{}", unary.operand),
                UnaryOp::Negate => write!(f, "-{}", unary.operand),
                UnaryOp::PreIncrement => write!(f, "++{}", unary.operand),
                UnaryOp::PreDecrement => write!(f, "--{}", unary.operand),
                UnaryOp::PostIncrement => write!(f, "{}++", unary.operand),
                UnaryOp::PostDecrement => write!(f, "{}--", unary.operand),
            },
            Expr::Literal(literal) => write!(f, "{}", literal.value),
            Expr::Symbol(symbol) => write!(f, "{}", symbol.name),
            Expr::Call(call) => write!(f, "{}", call),
            Expr::Grouping(grouping) => write!(f, "({})", grouping.inner),
        }
    }
}
