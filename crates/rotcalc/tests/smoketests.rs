use rotcalc::{calculate, evaluate, lexer::Token, parse_input, Expr, SyntaxError};

macro_rules! define_tests {
    ($($name:ident: $input:expr => $expected:expr,)*) => {$(
        #[test]
        fn $name() {
            let parsed = parse_input($input).unwrap();
            assert_eq!(evaluate(&parsed), $expected, "input = {:?}, tree = {}", $input, parsed);
        }
    )*};
}

define_tests! {
    bare_number: "42" => 42.0,
    decimal_number: "3.75" => 3.75,
    trailing_point: "5." => 5.0,
    mul_after_add: "2+3*4" => 14.0,
    add_after_mul: "2*3+4" => 10.0,
    sub_chain: "10-2-3" => 5.0,
    div_chain: "100/10/5" => 2.0,
    mixed_chain: "1+2*3-4/2" => 5.0,
    leading_minus: "-5+3" => -2.0,
    leading_plus: "+5-3" => 2.0,
    negative_factor: "2*-3" => -6.0,
    double_negative: "1 - -2" => 3.0,
    spaced: " 1 +\t2 *  3 " => 7.0,
    two_products: "2*3+4*5" => 26.0,
    product_run: "1+2*3*4" => 25.0,
    quotient_after_sub: "9-8/4*2" => 5.0,
    sub_then_add_then_mul: "1-2+3*4" => 11.0,
    long_mixed: "1+2*3+4*5-6/3" => 25.0,
}

#[test]
fn single_operand_is_a_leaf() {
    assert_eq!(parse_input("42"), Ok(Expr::Operand(42.0)));
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_eq!(calculate("1/0"), Ok(f64::INFINITY));
    assert_eq!(calculate("1-2/0"), Ok(f64::NEG_INFINITY));
    assert!(calculate("0/0").unwrap().is_nan());
}

#[test]
fn syntax_errors() {
    assert!(matches!(
        calculate("+*3"),
        Err(SyntaxError::OperandExpected { found: Token::Star, .. })
    ));
    assert!(matches!(
        calculate("3 3"),
        Err(SyntaxError::OperatorExpected { found: Token::Number(..), .. })
    ));
    assert!(matches!(
        calculate("4 *"),
        Err(SyntaxError::OperandExpected { found: Token::EndOfInput, .. })
    ));
    assert!(matches!(
        calculate("(1+2)"),
        Err(SyntaxError::OperandExpected { found: Token::Illegal('('), .. })
    ));
}

#[test]
fn long_chains() {
    let input = vec!["1"; 1000].join(" + ");
    assert_eq!(calculate(&input), Ok(1000.0));

    let input = vec!["2"; 10].join("*");
    assert_eq!(calculate(&format!("1+{}", input)), Ok(1025.0));
}
