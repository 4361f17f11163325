use super::*;

#[test]
fn pops_in_due_order_then_schedule_order() {
    let mut tl = Timeline::new();
    tl.schedule(30, "c");
    tl.schedule(10, "a");
    tl.schedule(30, "d");
    tl.schedule(10, "b");
    assert_eq!(tl.len(), 4);
    assert_eq!(tl.next_due(), Some(Millis(10)));

    let mut out = Vec::new();
    while let Some(item) = tl.pop_due(Millis(100)) {
        out.push((tl.now(), item));
    }
    assert_eq!(
        out,
        vec![
            (Millis(10), "a"),
            (Millis(10), "b"),
            (Millis(30), "c"),
            (Millis(30), "d"),
        ]
    );
}

#[test]
fn pop_respects_the_limit() {
    let mut tl = Timeline::new();
    tl.schedule(50, 1);
    assert_eq!(tl.pop_due(Millis(49)), None);
    assert_eq!(tl.now(), Millis(0));
    assert_eq!(tl.pop_due(Millis(50)), Some(1));
    assert_eq!(tl.now(), Millis(50));
    assert_eq!(tl.pop_due(Millis(1_000)), None);
}

#[test]
fn delays_are_relative_to_the_current_instant() {
    let mut tl = Timeline::new();
    tl.settle_at(Millis(100));
    tl.schedule(5, ());
    assert_eq!(tl.next_due(), Some(Millis(105)));

    tl.settle_at(Millis(20));
    assert_eq!(tl.now(), Millis(100), "clock never runs backwards");
}
