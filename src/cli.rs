use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::{Parser as ClapParser, ValueEnum};
use color_eyre::eyre::Report;
use owo_colors::{OwoColorize, Stream};

use calx::ast::dump::{dump_expr, AstDumpFormat};
use calx::eval::evaluate;
use calx::parse::parse;
use calx::position::HasSpan;

#[derive(ClapParser, Debug, Clone)]
#[command(version)]
pub struct CalxCli {
    /// Expression to process; read from stdin when omitted
    pub expr: Option<String>,

    /// What to print for a successfully parsed expression
    #[arg(short, long, value_enum, default_value = "value")]
    pub output: OutputKind,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Value,
    Sexpr,
    Ron,
    Debug,
}

impl CalxCli {
    pub fn run(self) -> Result<ExitCode, Report> {
        let input = match self.expr {
            Some(expr) => expr,

            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;

                buf.trim_end_matches(['\n', '\r']).to_owned()
            }
        };

        let expr = match parse(&input) {
            Ok(expr) => expr,

            Err(e) => {
                print_error(&input, &e);

                return Ok(ExitCode::FAILURE);
            }
        };

        let mut stdout = io::stdout().lock();

        match self.output {
            OutputKind::Value => match evaluate(&expr) {
                Ok(value) => writeln!(stdout, "{}", value)?,

                Err(e) => {
                    print_error(&input, &e);

                    return Ok(ExitCode::FAILURE);
                }
            },

            OutputKind::Sexpr => dump_expr(&expr, AstDumpFormat::Sexpr, &mut stdout)?,
            OutputKind::Ron => dump_expr(&expr, AstDumpFormat::Ron, &mut stdout)?,
            OutputKind::Debug => dump_expr(&expr, AstDumpFormat::Debug, &mut stdout)?,
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn print_error(input: &str, err: &(impl std::error::Error + HasSpan)) {
    let start = err.span().start;

    eprintln!(
        "{} at column {}: {}",
        "ERROR".if_supports_color(Stream::Stderr, |text| text.bright_red()),
        start.col,
        err
    );
    eprintln!("  {}", input);
    eprintln!("  {}^", " ".repeat(start.col - 1));
}
