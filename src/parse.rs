mod cursor;
mod parser;

pub use cursor::{CharSet, Cursor, EmptyTokenError, Scanned};
pub use parser::{parse, ParseError, Parser};
