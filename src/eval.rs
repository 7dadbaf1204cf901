use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Display};

use serde::Serialize;

use crate::ast::{BinOpKind, Expr};
use crate::position::{HasSpan, Span};

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub enum EvalError {
    DivisionByZero { span: Span },
}

impl Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero { .. } => write!(f, "division by zero"),
        }
    }
}

impl Error for EvalError {}

impl HasSpan for EvalError {
    fn span(&self) -> Cow<'_, Span> {
        match self {
            Self::DivisionByZero { span } => Cow::Borrowed(span),
        }
    }
}

/// Reduces `expr` to a numeric value.
///
/// Literals are integers, but arithmetic is carried out in `f64` and
/// division is floating-point division: `8/2` is `4` and `1/3` is a
/// fraction rather than truncating to zero. Dividing by a right operand
/// that evaluates to exactly zero fails with the span of the offending
/// division; the failure aborts the whole evaluation.
pub fn evaluate(expr: &Expr) -> Result<f64, EvalError> {
    match expr {
        Expr::Int(lit) => Ok(lit.0.value as f64),

        Expr::Group(group) => evaluate(&group.inner),

        Expr::BinOp(bin_op) => {
            let lhs = evaluate(&bin_op.lhs)?;
            let rhs = evaluate(&bin_op.rhs)?;

            match bin_op.op {
                BinOpKind::Add => Ok(lhs + rhs),
                BinOpKind::Sub => Ok(lhs - rhs),
                BinOpKind::Mul => Ok(lhs * rhs),

                BinOpKind::Div if rhs == 0.0 => Err(EvalError::DivisionByZero {
                    span: bin_op.span.clone(),
                }),

                BinOpKind::Div => Ok(lhs / rhs),
            }
        }
    }
}
