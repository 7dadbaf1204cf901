use std::borrow::Cow;

use serde::Serialize;

use crate::position::{HasSpan, Span, Spanned};

pub mod dump;

/// An arithmetic expression: a strict tree whose nodes exclusively own
/// their children and are immutable once constructed.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    Int(IntLit),
    Group(Group),
    BinOp(BinOpExpr),
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct IntLit(pub Spanned<i64>);

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct Group {
    pub inner: Box<Expr>,
    pub span: Span,
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct BinOpExpr {
    pub op: BinOpKind,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    pub span: Span,
}

#[derive(Serialize, Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOpKind {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The source character for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// The operator name used by the canonical serialization.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }
}

impl HasSpan for Expr {
    fn span(&self) -> Cow<'_, Span> {
        match self {
            Self::Int(lit) => lit.span(),
            Self::Group(group) => group.span(),
            Self::BinOp(expr) => expr.span(),
        }
    }
}

impl HasSpan for IntLit {
    fn span(&self) -> Cow<'_, Span> {
        Cow::Borrowed(&self.0.span)
    }
}

impl HasSpan for Group {
    fn span(&self) -> Cow<'_, Span> {
        Cow::Borrowed(&self.span)
    }
}

impl HasSpan for BinOpExpr {
    fn span(&self) -> Cow<'_, Span> {
        Cow::Borrowed(&self.span)
    }
}
