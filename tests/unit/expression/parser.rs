use super::*;
use proptest::prelude::*;

#[test]
fn accepts_digit_plus_digit_with_optional_whitespace() {
    assert_eq!(parse_expression("3+4"), Ok((3, 4)));
    assert_eq!(parse_expression("  3 +  4 "), Ok((3, 4)));
    assert_eq!(parse_expression("\t0\n+\n9\t"), Ok((0, 9)));
    assert_eq!(parse_operands("7 + 3"), OperandPair::digits(7, 3));
}

#[test]
fn rejects_wrong_shapes() {
    for src in [
        "", " ", "3", "3+", "+4", "3 4", "3++4", "3+4+5", "3 + 4 5", "a + b", "3 - 4", "-3+4",
        "3+-4", "3.0 + 4", "15 + 2", "3 + 12", "03 + 4", "3 * 4", "3 + 4 =",
    ] {
        assert!(parse_expression(src).is_err(), "accepted {src:?}");
        assert_eq!(parse_operands(src), OperandPair::UNPARSED, "input {src:?}");
    }
}

#[test]
fn diagnostics_point_at_the_offending_token() {
    let err = parse_expression("15 + 2").unwrap_err();
    assert_eq!(err.offset, 0);
    assert!(err.message.contains("single digit"));

    let err = parse_expression("3 4").unwrap_err();
    assert_eq!(err.offset, 2);
    assert!(err.message.contains("'+'"));

    let err = parse_expression("3 + 4 5").unwrap_err();
    assert_eq!(err.offset, 6);
    assert!(err.message.contains("end of input"));

    let err = parse_expression("3 +").unwrap_err();
    assert_eq!(err.offset, 3);
    assert!(err.message.contains("expected a digit"));
}

#[test]
fn every_digit_pair_round_trips_through_text() {
    for a in 0..=9u8 {
        for b in 0..=9u8 {
            let src = format!("{a} + {b}");
            assert_eq!(parse_expression(&src), Ok((a, b)));
        }
    }
}

proptest! {
    #[test]
    fn arbitrary_text_parses_iff_it_matches_the_grammar(src in "\\PC{0,12}") {
        let trimmed: String = src.chars().filter(|c| !c.is_whitespace()).collect();
        let b = trimmed.as_bytes();
        let matches_grammar = b.len() == 3
            && b[0].is_ascii_digit()
            && b[1] == b'+'
            && b[2].is_ascii_digit();
        if matches_grammar {
            let (a, b) = (b[0] - b'0', b[2] - b'0');
            prop_assert_eq!(parse_operands(&src), OperandPair::digits(a, b));
        } else {
            prop_assert_eq!(parse_operands(&src), OperandPair::UNPARSED);
        }
    }

    #[test]
    fn grammar_text_always_parses(
        a in 0u8..=9,
        b in 0u8..=9,
        pre in "[ \t\n]{0,3}",
        mid1 in "[ \t]{0,3}",
        mid2 in "[ \t]{0,3}",
        post in "[ \t\n]{0,3}",
    ) {
        let src = format!("{pre}{a}{mid1}+{mid2}{b}{post}");
        prop_assert_eq!(parse_expression(&src), Ok((a, b)));
    }
}
