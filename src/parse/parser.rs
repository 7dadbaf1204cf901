use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Display};

use serde::Serialize;
use tracing::instrument;

use crate::ast::{BinOpExpr, BinOpKind, Expr, Group, IntLit};
use crate::parse::cursor::{Cursor, EmptyTokenError, Scanned};
use crate::position::{HasSpan, Position, Span, Spanned};

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    ExpectedDigitOrGroup { actual: Scanned, pos: Position },

    UnmatchedParenthesis { actual: Scanned, pos: Position },

    TrailingInput { actual: Scanned, pos: Position },

    NumberTooLarge { span: Span },

    EmptyToken(EmptyTokenError),
}

impl From<EmptyTokenError> for ParseError {
    fn from(e: EmptyTokenError) -> Self {
        Self::EmptyToken(e)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedDigitOrGroup { actual, .. } => {
                write!(f, "expected a digit or '(' but found {}", actual)
            }

            Self::UnmatchedParenthesis { actual, .. } => {
                write!(f, "expected ')' but found {}", actual)
            }

            Self::TrailingInput { actual, .. } => {
                write!(f, "found {} after a complete expression", actual)
            }

            Self::NumberTooLarge { .. } => {
                write!(f, "the number literal is too large")
            }

            Self::EmptyToken(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyToken(e) => Some(e),
            _ => None,
        }
    }
}

impl HasSpan for ParseError {
    fn span(&self) -> Cow<'_, Span> {
        match self {
            Self::ExpectedDigitOrGroup { pos, .. }
            | Self::UnmatchedParenthesis { pos, .. }
            | Self::TrailingInput { pos, .. } => Cow::Owned(Span {
                start: *pos,
                end: *pos,
            }),

            Self::NumberTooLarge { span } => Cow::Borrowed(span),

            Self::EmptyToken(e) => Cow::Owned(Span {
                start: e.pos,
                end: e.pos,
            }),
        }
    }
}

/// Parses `input` as a single arithmetic expression.
///
/// The grammar takes no whitespace and no unary sign:
///
/// ```text
/// expression      := additive
/// additive        := multiplicative ( ("+" | "-") multiplicative )*
/// multiplicative  := primary ( ("*" | "/") primary )*
/// primary         := "(" expression ")" | integer-literal
/// integer-literal := digit+
/// ```
///
/// Recursion depth grows with parenthesis nesting depth, so pathologically
/// deep nesting exhausts the call stack; this boundary condition is not
/// caught.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    Parser::new(Cursor::new(input)).parse()
}

pub struct Parser<'buf> {
    cursor: Cursor<'buf>,
}

impl<'buf> Parser<'buf> {
    pub fn new(cursor: Cursor<'buf>) -> Self {
        Self { cursor }
    }

    #[instrument(level = "trace", skip(self), ret)]
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;

        match self.cursor.peek() {
            Scanned::Eof => Ok(expr),

            actual => Err(ParseError::TrailingInput {
                actual,
                pos: self.cursor.pos(),
            }),
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_additive()
    }

    fn accept_bin_op(&mut self, ops: &'static [char; 2]) -> Result<Option<BinOpKind>, ParseError> {
        if !self.cursor.accept(ops) {
            return Ok(None);
        }

        let sym = self.cursor.emit()?;
        let op = BinOpKind::from_char(sym.chars().next().unwrap()).unwrap();

        Ok(Some(op))
    }

    // The previously built node becomes the left operand of each fold, so
    // chains of same-precedence operators group to the left.
    #[inline(always)]
    fn parse_bin_op_lassoc<D>(
        &mut self,
        ops: &'static [char; 2],
        mut descend: D,
    ) -> Result<Expr, ParseError>
    where
        D: FnMut(&mut Self) -> Result<Expr, ParseError>,
    {
        let mut lhs = descend(self)?;

        while let Some(op) = self.accept_bin_op(ops)? {
            let rhs = descend(self)?;
            let span = lhs.span().convex_hull(&rhs.span());

            lhs = Expr::BinOp(BinOpExpr {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            });
        }

        Ok(lhs)
    }

    #[instrument(level = "trace", skip(self), ret)]
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.parse_bin_op_lassoc(&['+', '-'], Self::parse_multiplicative)
    }

    #[instrument(level = "trace", skip(self), ret)]
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.parse_bin_op_lassoc(&['*', '/'], Self::parse_primary)
    }

    #[instrument(level = "trace", skip(self), ret)]
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.peek() {
            Scanned::Char('(') => self.parse_group(),
            Scanned::Char(c) if c.is_ascii_digit() => self.parse_int_lit(),

            actual => Err(ParseError::ExpectedDigitOrGroup {
                actual,
                pos: self.cursor.pos(),
            }),
        }
    }

    #[instrument(level = "trace", skip(self), ret)]
    fn parse_group(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.pos();

        // parse_primary has already seen the opening parenthesis
        self.cursor.accept('(');
        self.cursor.emit()?;

        let inner = self.parse_expr()?;

        if !self.cursor.accept(')') {
            return Err(ParseError::UnmatchedParenthesis {
                actual: self.cursor.peek(),
                pos: self.cursor.pos(),
            });
        }

        self.cursor.emit()?;

        Ok(Expr::Group(Group {
            inner: Box::new(inner),
            span: Span {
                start,
                end: self.cursor.pos(),
            },
        }))
    }

    #[instrument(level = "trace", skip(self), ret)]
    fn parse_int_lit(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.pos();

        while self.cursor.accept('0'..='9') {}

        let digits = self.cursor.emit()?;
        let span = Span {
            start,
            end: self.cursor.pos(),
        };

        let value = digits
            .parse::<i64>()
            .map_err(|_| ParseError::NumberTooLarge { span: span.clone() })?;

        Ok(Expr::Int(IntLit(Spanned { value, span })))
    }
}
