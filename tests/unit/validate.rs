use super::*;
use proptest::prelude::*;

fn pair(a: f64, b: f64) -> OperandPair {
    OperandPair::new(a, b)
}

#[test]
fn accepts_every_countable_digit_pair() {
    for a in 0..=9u8 {
        for b in 0..=9u8 {
            let res = validate(&OperandPair::digits(a, b));
            let sum = a + b;
            if sum > 0 && sum < 10 {
                let ops = res.unwrap();
                assert_eq!((ops.a(), ops.b(), ops.sum()), (a, b, sum));
            } else {
                assert!(res.is_err(), "{a} + {b} should be rejected");
            }
        }
    }
}

#[test]
fn spec_examples_from_text() {
    assert_eq!(check_expression("3 + 3").unwrap().sum(), 6);
    assert_eq!(check_expression("0 + 0"), Err(Rejection::DegenerateZeroCase));
    assert_eq!(check_expression("7 + 3"), Err(Rejection::SumTooLarge));
    assert_eq!(check_expression("15 + 2"), Err(Rejection::UnparsedExpression));
    assert_eq!(check_expression("hello"), Err(Rejection::UnparsedExpression));
}

#[test]
fn absent_operand_is_unparsed() {
    assert_eq!(
        validate(&OperandPair::UNPARSED),
        Err(Rejection::UnparsedExpression)
    );
    let half = OperandPair {
        a: Some(3.0),
        b: None,
    };
    assert_eq!(validate(&half), Err(Rejection::UnparsedExpression));
    // Absence wins over every other problem on the present side.
    let half_bad = OperandPair {
        a: None,
        b: Some(-2.5),
    };
    assert_eq!(validate(&half_bad), Err(Rejection::UnparsedExpression));
}

#[test]
fn non_integer_beats_sign_size_and_sum() {
    assert_eq!(validate(&pair(1.5, 2.0)), Err(Rejection::NonIntegerOperand));
    assert_eq!(validate(&pair(-1.5, 2.0)), Err(Rejection::NonIntegerOperand));
    assert_eq!(validate(&pair(2.0, 12.5)), Err(Rejection::NonIntegerOperand));
    assert_eq!(validate(&pair(9.5, 9.0)), Err(Rejection::NonIntegerOperand));
    assert_eq!(validate(&pair(f64::NAN, 1.0)), Err(Rejection::NonIntegerOperand));
    assert_eq!(
        validate(&pair(1.0, f64::INFINITY)),
        Err(Rejection::NonIntegerOperand)
    );
}

#[test]
fn negative_beats_size_and_sum() {
    assert_eq!(validate(&pair(-1.0, 2.0)), Err(Rejection::NegativeOperand));
    assert_eq!(validate(&pair(-1.0, 15.0)), Err(Rejection::NegativeOperand));
    assert_eq!(validate(&pair(15.0, -1.0)), Err(Rejection::NegativeOperand));
    // Sums to zero, but the sign check comes first.
    assert_eq!(validate(&pair(-5.0, 5.0)), Err(Rejection::NegativeOperand));
}

#[test]
fn operand_size_beats_sum() {
    assert_eq!(validate(&pair(15.0, 2.0)), Err(Rejection::OperandTooLarge));
    assert_eq!(validate(&pair(2.0, 10.0)), Err(Rejection::OperandTooLarge));
    assert_eq!(validate(&pair(10.0, 0.0)), Err(Rejection::OperandTooLarge));
}

#[test]
fn sum_boundary_is_exclusive() {
    assert_eq!(validate(&pair(7.0, 3.0)), Err(Rejection::SumTooLarge));
    assert_eq!(validate(&pair(9.0, 9.0)), Err(Rejection::SumTooLarge));
    assert!(validate(&pair(9.0, 0.0)).is_ok());
    assert!(validate(&pair(4.0, 5.0)).is_ok());
}

#[test]
fn zero_plus_zero_is_degenerate() {
    assert_eq!(validate(&pair(0.0, 0.0)), Err(Rejection::DegenerateZeroCase));
    assert_eq!(validate(&pair(-0.0, 0.0)), Err(Rejection::DegenerateZeroCase));
    assert!(validate(&pair(0.0, 1.0)).is_ok());
}

#[test]
fn operands_new_routes_through_validation() {
    assert_eq!(Operands::new(5, 0).unwrap().sum(), 5);
    assert_eq!(Operands::new(0, 0), Err(Rejection::DegenerateZeroCase));
    assert_eq!(Operands::new(12, 0), Err(Rejection::OperandTooLarge));
}

#[test]
fn messages_and_codes_are_stable() {
    assert_eq!(
        Rejection::SumTooLarge.to_string(),
        "sum must be below 10".to_owned()
    );
    assert!(Rejection::OperandTooLarge.to_string().contains("(0–9)"));
    assert_eq!(Rejection::DegenerateZeroCase.code(), "degenerate_zero_case");
    assert_eq!(
        serde_json::to_string(&Rejection::NegativeOperand).unwrap(),
        "\"negative_operand\""
    );
}

#[test]
fn pair_from_json_reaches_the_defensive_checks() {
    let p: OperandPair = serde_json::from_str(r#"{"a": 2.5, "b": 1}"#).unwrap();
    assert_eq!(validate(&p), Err(Rejection::NonIntegerOperand));
    let p: OperandPair = serde_json::from_str(r#"{"a": null, "b": 1}"#).unwrap();
    assert_eq!(validate(&p), Err(Rejection::UnparsedExpression));
}

proptest! {
    #[test]
    fn validation_never_panics_and_accepts_only_countable_pairs(
        a in proptest::option::of(-20.0f64..20.0),
        b in proptest::option::of(-20.0f64..20.0),
    ) {
        let p = OperandPair { a, b };
        if let Ok(ops) = validate(&p) {
            prop_assert!(ops.sum() > 0 && ops.sum() < 10);
            prop_assert_eq!(Some(f64::from(ops.a())), a);
            prop_assert_eq!(Some(f64::from(ops.b())), b);
        }
    }
}
