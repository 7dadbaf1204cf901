use std::borrow::Cow;

use serde::Serialize;

/// A byte offset plus a 1-based character column in the input.
///
/// Columns count Unicode scalar values, not bytes, so they stay meaningful
/// for caller-facing diagnostics even when the input contains multi-byte
/// characters.
#[derive(Serialize, Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Position {
    pub byte: usize,
    pub col: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { byte: 0, col: 1 }
    }
}

/// A half-open span `[start, end)` between two positions.
#[derive(Serialize, Debug, Clone, Hash, Eq, PartialEq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Returns the smallest span covering both `self` and `other`.
    pub fn convex_hull(&self, other: &Span) -> Span {
        Span {
            start: if self.start.byte <= other.start.byte {
                self.start
            } else {
                other.start
            },
            end: if self.end.byte >= other.end.byte {
                self.end
            } else {
                other.end
            },
        }
    }
}

#[derive(Serialize, Debug, Clone, Hash, Eq, PartialEq, Default)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

pub trait HasSpan {
    fn span(&self) -> Cow<'_, Span>;
}
