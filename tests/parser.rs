use paste::paste;
use pretty_assertions::assert_str_eq;

use calx::ast::dump::to_sexpr;
use calx::ast::Expr;
use calx::parse::{parse, ParseError, Scanned};
use calx::position::Position;

macro_rules! sexpr_tests {
    ($( $name:ident: $input:expr => $expected:expr; )+) => {
        $(
            paste! {
                #[test]
                fn [< test_ $name >]() {
                    let expr = parse($input).expect("expected the input to parse");

                    assert_str_eq!(to_sexpr(&expr), $expected);
                }
            }
        )+
    };
}

sexpr_tests! {
    single_literal: "7" => "7";
    literal_zero: "0" => "0";
    leading_zeros: "007" => "7";
    add: "1+2" => "(add 1 2)";
    left_assoc_addsub: "1+2-3+4" => "(add (sub (add 1 2) 3) 4)";
    left_assoc_div: "8/2/2" => "(div (div 8 2) 2)";
    precedence: "1+2*3" => "(add 1 (mul 2 3))";
    precedence_symmetric: "2*3+1" => "(add (mul 2 3) 1)";
    grouping: "(1+2)*3" => "(mul (group (add 1 2)) 3)";
    mixed_chain: "3*4/(1*2)" => "(div (mul 3 4) (group (mul 1 2)))";
    group_only: "(5)" => "(group 5)";
    nested_groups: "((42))" => "(group (group 42))";
}

macro_rules! error_tests {
    ($( $name:ident: $input:expr => $expected:pat ),+ $(,)?) => {
        $(
            paste! {
                #[test]
                fn [< test_ $name >]() {
                    let err = parse($input).expect_err("expected the parse to fail");

                    assert!(matches!(err, $expected), "got {:?}", err);
                }
            }
        )+
    };
}

error_tests! {
    unmatched_paren:
        "(1+2" => ParseError::UnmatchedParenthesis { actual: Scanned::Eof, .. },
    unmatched_paren_nested:
        "1*(2+3" => ParseError::UnmatchedParenthesis { actual: Scanned::Eof, .. },
    dangling_operator:
        "1+" => ParseError::ExpectedDigitOrGroup { actual: Scanned::Eof, .. },
    empty_input:
        "" => ParseError::ExpectedDigitOrGroup { actual: Scanned::Eof, .. },
    empty_group:
        "()" => ParseError::ExpectedDigitOrGroup { actual: Scanned::Char(')'), .. },
    trailing_paren:
        "12)3" => ParseError::TrailingInput {
            actual: Scanned::Char(')'),
            pos: Position { byte: 2, col: 3 },
        },
    extra_closing_paren:
        "(1))" => ParseError::TrailingInput { actual: Scanned::Char(')'), .. },
    no_whitespace_inside:
        "1 + 2" => ParseError::TrailingInput { actual: Scanned::Char(' '), .. },
    no_leading_whitespace:
        " 1" => ParseError::ExpectedDigitOrGroup { actual: Scanned::Char(' '), .. },
    no_unary_minus:
        "-1" => ParseError::ExpectedDigitOrGroup { actual: Scanned::Char('-'), .. },
    no_unary_plus:
        "+1" => ParseError::ExpectedDigitOrGroup { actual: Scanned::Char('+'), .. },
    number_too_large:
        "99999999999999999999" => ParseError::NumberTooLarge { .. },
    stray_letter:
        "1+x" => ParseError::ExpectedDigitOrGroup { actual: Scanned::Char('x'), .. },
}

#[test]
fn test_literal_values() {
    for (input, expected) in [("0", 0), ("1", 1), ("42", 42)] {
        match parse(input) {
            Ok(Expr::Int(lit)) => assert_eq!(lit.0.value, expected),
            other => panic!("expected an integer literal for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_error_position_counts_characters() {
    // 'é' is two bytes but one column wide
    let err = parse("1+é").expect_err("expected the parse to fail");

    assert!(
        matches!(
            err,
            ParseError::ExpectedDigitOrGroup {
                actual: Scanned::Char('é'),
                pos: Position { byte: 2, col: 3 },
            }
        ),
        "got {:?}",
        err
    );
}

#[test]
fn test_parse_is_deterministic() {
    let first = parse("3*4/(1*2)").expect("expected the input to parse");
    let second = parse("3*4/(1*2)").expect("expected the input to parse");

    assert_str_eq!(to_sexpr(&first), to_sexpr(&second));
    assert_eq!(first, second);
}
