use super::*;
use crate::sequencer::state::LabelKind;

fn ops(a: u8, b: u8) -> Operands {
    Operands::new(a, b).unwrap()
}

#[test]
fn steps_follow_phase_order_with_their_pauses() {
    let t = Timings::default();
    let steps = choreograph(ops(2, 1), &t);
    let phases: Vec<Phase> = steps.iter().map(|s| s.phase).collect();
    assert_eq!(
        phases,
        vec![
            Phase::CountingA,
            Phase::CountingA,
            Phase::CountingB,
            Phase::RelabelingB,
            Phase::Settling,
            Phase::Done,
        ]
    );
    let pauses: Vec<u64> = steps.iter().map(|s| s.pause_ms).collect();
    assert_eq!(pauses, vec![480, 480, 480, 380, 200, 0]);
}

#[test]
fn relabel_revisits_exactly_the_provisional_slots() {
    let steps = choreograph(ops(3, 3), &Timings::default());
    let marks = |phase: Phase| -> Vec<(usize, Label)> {
        steps
            .iter()
            .filter(|s| s.phase == phase)
            .filter_map(|s| match s.action {
                Action::Mark { slot, label } => Some((slot.index(), label)),
                _ => None,
            })
            .collect()
    };

    let provisional = marks(Phase::CountingB);
    let relabeled = marks(Phase::RelabelingB);
    assert_eq!(
        provisional,
        vec![
            (3, Label::transient(1)),
            (4, Label::transient(2)),
            (5, Label::transient(3)),
        ]
    );
    assert_eq!(
        relabeled,
        vec![
            (3, Label::final_count(4)),
            (4, Label::final_count(5)),
            (5, Label::final_count(6)),
        ]
    );
    assert!(
        marks(Phase::CountingA)
            .iter()
            .all(|(_, l)| l.kind == LabelKind::Final)
    );
}

#[test]
fn zero_operands_skip_their_phases() {
    let steps = choreograph(ops(0, 4), &Timings::default());
    assert!(steps.iter().all(|s| s.phase != Phase::CountingA));
    assert_eq!(steps.len(), 4 + 4 + 2);

    let steps = choreograph(ops(5, 0), &Timings::default());
    assert!(
        steps
            .iter()
            .all(|s| !matches!(s.phase, Phase::CountingB | Phase::RelabelingB))
    );
    assert_eq!(steps.len(), 5 + 2);
}

#[test]
fn total_duration_matches_step_pauses() {
    let t = Timings {
        count_ms: 10,
        relabel_ms: 7,
        settle_ms: 3,
    };
    for (a, b) in [(3, 3), (0, 9), (9, 0), (1, 1)] {
        let o = ops(a, b);
        let sum: u64 = choreograph(o, &t).iter().map(|s| s.pause_ms).sum();
        assert_eq!(t.total_duration(o), sum);
    }
    assert_eq!(Timings::default().total_duration(ops(3, 3)), 4220);
}
