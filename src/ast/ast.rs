use crate::Span;

use super::expressions::{
    BindingExpr, BooleanExpr, CallExpr, CondExpr, InfixExpr, IntegerExpr, LambdaExpr, LetExpr,
    PrefixExpr, SymbolExpr,
};

/// The expression tree.
///
/// One variant per syntactic form, so downstream consumers (an evaluator
/// or type checker) can match exhaustively. Nodes exclusively own their
/// children and are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Symbol(SymbolExpr),
    Infix(InfixExpr),
    Prefix(PrefixExpr),
    Binding(BindingExpr),
    Let(LetExpr),
    Lambda(LambdaExpr),
    Call(CallExpr),
    Cond(CondExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Integer(expr) => &expr.span,
            Expr::Boolean(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Infix(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Binding(expr) => &expr.span,
            Expr::Let(expr) => &expr.span,
            Expr::Lambda(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Cond(expr) => &expr.span,
        }
    }
}

/// The top-level parse result: terminator-separated expressions, in
/// source order. May be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub nodes: Vec<Expr>,
    pub span: Span,
}
