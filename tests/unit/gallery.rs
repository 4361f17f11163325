use super::*;

#[test]
fn entries_follow_example_order() {
    let entries = gallery();
    let exprs: Vec<&str> = entries.iter().map(|e| e.expression).collect();
    assert_eq!(exprs, EXAMPLES.to_vec());
}

#[test]
fn outcomes_match_parser_and_validator() {
    let entries = gallery();
    let outcome = |expr: &str| {
        entries
            .iter()
            .find(|e| e.expression == expr)
            .map(|e| e.outcome)
            .unwrap()
    };
    assert_eq!(outcome("2 + 3"), Operands::new(2, 3));
    assert_eq!(outcome("7 + 3"), Err(Rejection::SumTooLarge));
    assert_eq!(outcome("0 + 0"), Err(Rejection::DegenerateZeroCase));
    assert_eq!(outcome("12 + 1"), Err(Rejection::UnparsedExpression));
    assert_eq!(outcome("2 * 3"), Err(Rejection::UnparsedExpression));
}

#[test]
fn gallery_has_both_valid_and_rejected_examples() {
    let entries = gallery();
    assert!(entries.iter().any(GalleryEntry::is_valid));
    assert!(entries.iter().any(|e| !e.is_valid()));
}
