use paste::paste;

use calx::eval::{evaluate, EvalError};
use calx::parse::parse;
use calx::position::HasSpan;

fn eval_str(input: &str) -> Result<f64, EvalError> {
    evaluate(&parse(input).expect("expected the input to parse"))
}

macro_rules! eval_tests {
    ($( $name:ident: $input:expr => $expected:expr; )+) => {
        $(
            paste! {
                #[test]
                fn [< test_ $name >]() {
                    assert_eq!(eval_str($input).unwrap(), $expected);
                }
            }
        )+
    };
}

eval_tests! {
    literal: "42" => 42.0;
    add: "1+2" => 3.0;
    precedence: "1+2*3" => 7.0;
    grouping: "(1+2)*3" => 9.0;
    left_assoc_sub: "1-2+3" => 2.0;
    left_assoc_div: "8/2/2" => 2.0;
    mixed_chain: "3*4/(1*2)" => 6.0;
    division: "8/2" => 4.0;
    zero_numerator: "0/5" => 0.0;
    nested_groups: "((2))*((3))" => 6.0;
}

#[test]
fn test_division_is_floating_point() {
    let third = eval_str("1/3").expect("expected the evaluation to succeed");

    assert_ne!(third.fract(), 0.0);
    assert!((third - 1.0 / 3.0).abs() < 1e-15);
}

#[test]
fn test_division_by_zero() {
    for input in ["1/0", "1/(2-2)", "5/(0*3)"] {
        let err = eval_str(input).expect_err("expected a division-by-zero error");

        assert!(matches!(err, EvalError::DivisionByZero { .. }), "got {:?}", err);
    }
}

#[test]
fn test_division_by_zero_aborts_the_whole_evaluation() {
    let err = eval_str("1/0+5").expect_err("expected a division-by-zero error");

    assert!(matches!(err, EvalError::DivisionByZero { .. }), "got {:?}", err);
}

#[test]
fn test_division_by_zero_span_points_at_the_division() {
    let err = eval_str("1/0").expect_err("expected a division-by-zero error");
    let span = err.span();

    assert_eq!(span.start.col, 1);
    assert_eq!(span.end.col, 4);
}
