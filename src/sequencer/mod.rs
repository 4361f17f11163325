//! Timed finger-counting state machine.
//!
//! A run walks a fixed choreography (count `a`, provisionally count `b`, relabel `b` with
//! running totals, settle, reveal) on a virtual clock. Runs are identified by a generation
//! counter: every write a run makes is dropped unless that run is still the latest one, so a
//! superseded run goes inert where it stands instead of being torn down.

mod choreography;
mod clock;
mod state;

pub use choreography::Timings;
pub use state::{
    Finger, FingerSlots, FingerSnapshot, Hand, Label, LabelKind, Phase, SLOT_COUNT, Slot,
};

use crate::foundation::core::Millis;
use crate::operands::Operands;
use choreography::{Action, Step, choreograph};
use clock::Timeline;

/// Generation id of a run. Larger ids supersede smaller ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct RunId(pub u64);

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "run#{}", self.0)
    }
}

/// A run suspended between two steps.
struct RunTask {
    run: RunId,
    steps: Vec<Step>,
    cursor: usize,
}

/// Owns the finger labels, the highlight and the result flag, and drives them through time.
pub struct Sequencer {
    timings: Timings,
    timeline: Timeline<RunTask>,
    latest: RunId,
    slots: FingerSlots,
    highlight: Option<Slot>,
    phase: Phase,
    running: bool,
    result_visible: bool,
    operands: Option<Operands>,
    revision: u64,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

impl std::fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer")
            .field("now", &self.timeline.now())
            .field("run", &self.latest)
            .field("phase", &self.phase)
            .field("slots", &format_args!("{}", self.slots))
            .field("highlight", &self.highlight)
            .field("pending", &self.timeline.len())
            .finish()
    }
}

impl Sequencer {
    /// Idle sequencer at virtual time zero.
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            timeline: Timeline::new(),
            latest: RunId(0),
            slots: FingerSlots::empty(),
            highlight: None,
            phase: Phase::Idle,
            running: false,
            result_visible: false,
            operands: None,
            revision: 0,
        }
    }

    /// Begin a run for `ops`.
    ///
    /// Returns `None` and changes nothing while another run is in progress. Otherwise the new
    /// run's id is returned and its first step has already been applied.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn start(&mut self, ops: Operands) -> Option<RunId> {
        if self.running {
            tracing::debug!(current = %self.latest, "start ignored, run in progress");
            return None;
        }

        let run = self.bump_generation();
        self.running = true;
        self.result_visible = false;
        self.slots.clear();
        self.highlight = None;
        self.phase = Phase::Idle;
        self.operands = Some(ops);
        self.revision += 1;
        tracing::debug!(%run, now = %self.timeline.now(), "run started");

        let task = RunTask {
            run,
            steps: choreograph(ops, &self.timings),
            cursor: 0,
        };
        self.resume(task);
        Some(run)
    }

    /// Supersede whatever is in flight and return to a blank idle state.
    ///
    /// Pending wake-ups of the old run still fire, but none of their writes land.
    pub fn invalidate(&mut self) -> RunId {
        let run = self.bump_generation();
        self.running = false;
        self.result_visible = false;
        self.slots.clear();
        self.highlight = None;
        self.phase = Phase::Idle;
        self.operands = None;
        self.revision += 1;
        tracing::debug!(%run, "sequencer invalidated");
        run
    }

    /// Hide the result without touching the fingers.
    pub fn hide_result(&mut self) {
        if self.result_visible {
            self.result_visible = false;
            self.revision += 1;
        }
    }

    /// Resume every wake-up due at or before `t`, in order, then move the clock to `t`.
    ///
    /// Returns the number of wake-ups processed (stale ones included).
    pub fn advance_to(&mut self, t: Millis) -> usize {
        let mut woken = 0;
        while let Some(task) = self.timeline.pop_due(t) {
            woken += 1;
            self.resume(task);
        }
        self.timeline.settle_at(t);
        woken
    }

    /// [`Sequencer::advance_to`] relative to the current instant.
    pub fn advance_by(&mut self, dt_ms: u64) -> usize {
        self.advance_to(self.timeline.now().after(dt_ms))
    }

    /// Drain every pending wake-up, returning the final virtual time.
    pub fn run_until_idle(&mut self) -> Millis {
        while let Some(due) = self.timeline.next_due() {
            self.advance_to(due);
        }
        self.timeline.now()
    }

    fn resume(&mut self, mut task: RunTask) {
        while let Some(step) = task.steps.get(task.cursor).copied() {
            task.cursor += 1;
            self.apply(task.run, step);
            if task.cursor < task.steps.len() && step.pause_ms > 0 {
                self.timeline.schedule(step.pause_ms, task);
                return;
            }
        }
    }

    /// Apply one step if `run` is still current. A step's writes happen without yielding, so
    /// one check covers all of them.
    fn apply(&mut self, run: RunId, step: Step) {
        if run != self.latest {
            tracing::trace!(%run, current = %self.latest, ?step, "discarding stale write");
            return;
        }
        self.phase = step.phase;
        match step.action {
            Action::Mark { slot, label } => {
                self.highlight = Some(slot);
                self.slots.set(slot, label);
            }
            Action::ClearHighlight => {
                self.highlight = None;
            }
            Action::Reveal => {
                self.result_visible = true;
                self.running = false;
                tracing::debug!(%run, now = %self.timeline.now(), "result revealed");
            }
        }
        self.revision += 1;
    }

    fn bump_generation(&mut self) -> RunId {
        self.latest = RunId(self.latest.0 + 1);
        self.latest
    }

    /// Current virtual time.
    pub fn now(&self) -> Millis {
        self.timeline.now()
    }

    /// Due time of the earliest pending wake-up.
    pub fn next_wake(&self) -> Option<Millis> {
        self.timeline.next_due()
    }

    /// Number of pending wake-ups, stale runs included.
    pub fn pending_wakes(&self) -> usize {
        self.timeline.len()
    }

    /// Latest allocated run id.
    pub fn current_run(&self) -> RunId {
        self.latest
    }

    /// Whether a run holds the sequencer.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the last run completed and its result is showing.
    pub fn result_visible(&self) -> bool {
        self.result_visible
    }

    /// Current phase of the latest run.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Operands of the latest run, `None` after an invalidation.
    pub fn operands(&self) -> Option<Operands> {
        self.operands
    }

    /// Finger labels.
    pub fn slots(&self) -> &FingerSlots {
        &self.slots
    }

    /// Highlighted finger.
    pub fn highlight(&self) -> Option<Slot> {
        self.highlight
    }

    /// Count of applied mutations; changes whenever observable state changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Timings used for new runs.
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Copy of the state renderers consume.
    pub fn snapshot(&self) -> FingerSnapshot {
        FingerSnapshot {
            slots: self.slots,
            highlight: self.highlight,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/sequencer.rs"]
mod tests;
