use crate::operands::Operands;
use crate::sequencer::state::{Label, Phase, Slot};

/// Pauses between steps of a run, in virtual milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timings {
    /// Pause after each counting step (phases 1 and 2).
    pub count_ms: u64,
    /// Pause after each relabel step (phase 3).
    pub relabel_ms: u64,
    /// Pause between clearing the highlight and revealing the result.
    pub settle_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            count_ms: 480,
            relabel_ms: 380,
            settle_ms: 200,
        }
    }
}

impl Timings {
    /// Longest pause [`AppConfig::validate`](crate::AppConfig::validate) accepts for any step.
    pub const MAX_PAUSE_MS: u64 = 60_000;

    /// Virtual time from trigger to reveal for `ops`. Saturates instead of overflowing.
    pub fn total_duration(&self, ops: Operands) -> u64 {
        let a = u64::from(ops.a());
        let b = u64::from(ops.b());
        a.saturating_mul(self.count_ms)
            .saturating_add(b.saturating_mul(self.count_ms))
            .saturating_add(b.saturating_mul(self.relabel_ms))
            .saturating_add(self.settle_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    /// Highlight `slot` and write `label` onto it.
    Mark { slot: Slot, label: Label },
    ClearHighlight,
    /// Show the result and release the sequencer.
    Reveal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Step {
    pub(crate) phase: Phase,
    pub(crate) action: Action,
    /// Suspension after the action, before the next step.
    pub(crate) pause_ms: u64,
}

/// Expand a run into its ordered steps.
pub(crate) fn choreograph(ops: Operands, timings: &Timings) -> Vec<Step> {
    let a = usize::from(ops.a());
    let b = usize::from(ops.b());
    let mut steps = Vec::with_capacity(a + 2 * b + 2);

    let mark = |phase, index: usize, label, pause_ms| Step {
        phase,
        action: Action::Mark {
            slot: Slot::at(index),
            label,
        },
        pause_ms,
    };

    for i in 0..a {
        steps.push(mark(
            Phase::CountingA,
            i,
            Label::final_count(i as u8 + 1),
            timings.count_ms,
        ));
    }
    for j in 0..b {
        steps.push(mark(
            Phase::CountingB,
            a + j,
            Label::transient(j as u8 + 1),
            timings.count_ms,
        ));
    }
    for j in 0..b {
        steps.push(mark(
            Phase::RelabelingB,
            a + j,
            Label::final_count((a + j) as u8 + 1),
            timings.relabel_ms,
        ));
    }
    steps.push(Step {
        phase: Phase::Settling,
        action: Action::ClearHighlight,
        pause_ms: timings.settle_ms,
    });
    steps.push(Step {
        phase: Phase::Done,
        action: Action::Reveal,
        pause_ms: 0,
    });
    steps
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/choreography.rs"]
mod tests;
