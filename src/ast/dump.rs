use std::fmt;
use std::io::{self, Write};

use crate::ast::Expr;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum AstDumpFormat {
    Sexpr,
    Ron,
    Debug,
}

/// Renders the canonical s-expression form of `expr`: `(add 1 (mul 2 3))`.
///
/// This form is a canonicalization for inspection and testing, not a
/// re-parseable surface syntax.
pub fn to_sexpr(expr: &Expr) -> String {
    let mut out = String::new();
    write_sexpr(expr, &mut out).unwrap();

    out
}

pub fn write_sexpr(expr: &Expr, out: &mut impl fmt::Write) -> fmt::Result {
    match expr {
        Expr::Int(lit) => write!(out, "{}", lit.0.value),

        Expr::Group(group) => {
            out.write_str("(group ")?;
            write_sexpr(&group.inner, out)?;
            out.write_char(')')
        }

        Expr::BinOp(bin_op) => {
            write!(out, "({} ", bin_op.op.name())?;
            write_sexpr(&bin_op.lhs, out)?;
            out.write_char(' ')?;
            write_sexpr(&bin_op.rhs, out)?;
            out.write_char(')')
        }
    }
}

pub fn dump_expr(expr: &Expr, format: AstDumpFormat, out: &mut impl Write) -> io::Result<()> {
    match format {
        AstDumpFormat::Sexpr => writeln!(out, "{}", to_sexpr(expr)),

        AstDumpFormat::Ron => {
            let ron = ron::ser::to_string_pretty(expr, ron::ser::PrettyConfig::default())
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

            writeln!(out, "{}", ron)
        }

        AstDumpFormat::Debug => writeln!(out, "{:#?}", expr),
    }
}
