use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

use super::ast::Expr;

/// Infix operators, in the order of their source spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    Mul,
    Div,
    Add,
    Sub,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
}

impl InfixOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<InfixOp> {
        match kind {
            TokenKind::Star => Some(InfixOp::Mul),
            TokenKind::Slash => Some(InfixOp::Div),
            TokenKind::Plus => Some(InfixOp::Add),
            TokenKind::Dash => Some(InfixOp::Sub),
            TokenKind::Less => Some(InfixOp::Lt),
            TokenKind::LessEquals => Some(InfixOp::Le),
            TokenKind::Greater => Some(InfixOp::Gt),
            TokenKind::GreaterEquals => Some(InfixOp::Ge),
            TokenKind::Equals => Some(InfixOp::Eq),
            _ => None,
        }
    }
}

impl Display for InfixOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let spelling = match self {
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Lt => "<",
            InfixOp::Le => "<=",
            InfixOp::Gt => ">",
            InfixOp::Ge => ">=",
            InfixOp::Eq => "==",
        };
        write!(f, "{}", spelling)
    }
}

/// Prefix operators. Unary minus is the only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    Neg,
}

impl Display for PrefixOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefixOp::Neg => write!(f, "-"),
        }
    }
}

// LITERALS

/// Integer Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: i64,
    pub span: Span,
}

/// Boolean Expression
/// Represents a `True` or `False` literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

/// Symbol Expression
/// Represents an identifier in the AST. This includes functions.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub name: String,
    pub span: Span,
}

// COMPLEX

/// Infix Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub op: InfixOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Prefix Expression
/// Represents a prefix operation on an expression in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub op: PrefixOp,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// Binding
/// Represents a named definition `name param* = rhs`, either at the top
/// level or inside a `let`. Zero parameters bind a plain value.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingExpr {
    pub name: String,
    pub params: Vec<String>,
    pub rhs: Box<Expr>,
    pub span: Span,
}

/// Let Expression
/// Represents `let b1, b2, ... in body`. The binding list is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LetExpr {
    pub bindings: Vec<BindingExpr>,
    pub body: Box<Expr>,
    pub span: Span,
}

/// Lambda Expression
/// Represents `\param* -> body`.
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaExpr {
    pub params: Vec<String>,
    pub body: Box<Expr>,
    pub span: Span,
}

/// Call Expression
/// Represents an application `receiver(arg, ...)` in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// Conditional Expression
/// Represents `if pred then a else b` in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct CondExpr {
    pub condition: Box<Expr>,
    pub then_branch: Box<Expr>,
    pub else_branch: Box<Expr>,
    pub span: Span,
}
