#![no_main]

use libfuzzer_sys::fuzz_target;

use calx::ast::dump::to_sexpr;
use calx::eval::evaluate;
use calx::parse::parse;

fuzz_target!(|input: &str| {
    let Ok(expr) = parse(input) else { return };

    // neither fold may panic on a parser-accepted tree
    let _ = to_sexpr(&expr);
    let _ = evaluate(&expr);
});
