use std::fmt;

/// Number of finger slots across both hands.
pub const SLOT_COUNT: usize = 10;

/// Which hand a slot belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    /// Slots 0-4.
    Left,
    /// Slots 5-9.
    Right,
}

impl Hand {
    /// Both hands, left first.
    pub const ALL: [Hand; 2] = [Hand::Left, Hand::Right];

    /// Lowercase name, as used in captions and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }

    /// The five slots of this hand, thumb first.
    pub fn slots(self) -> impl Iterator<Item = Slot> {
        let base = match self {
            Hand::Left => 0u8,
            Hand::Right => 5u8,
        };
        (base..base + 5).map(Slot)
    }
}

/// Finger within a hand, thumb to pinky.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Finger {
    /// Position 0 within a hand.
    Thumb,
    /// Position 1.
    Index,
    /// Position 2.
    Middle,
    /// Position 3.
    Ring,
    /// Position 4.
    Pinky,
}

impl Finger {
    /// Position within the hand, 0 for the thumb.
    pub fn position(self) -> usize {
        self as usize
    }
}

/// One of the ten fixed finger positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(u8);

impl Slot {
    /// Checked constructor; `None` for indices outside `0..10`.
    pub fn new(index: usize) -> Option<Self> {
        (index < SLOT_COUNT).then(|| Self(index as u8))
    }

    pub(crate) fn at(index: usize) -> Self {
        debug_assert!(index < SLOT_COUNT);
        Self(index as u8)
    }

    /// All ten slots in index order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOT_COUNT as u8).map(Slot)
    }

    /// Array index of this slot.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Hand the slot belongs to.
    pub fn hand(self) -> Hand {
        if self.0 < 5 { Hand::Left } else { Hand::Right }
    }

    /// Finger within its hand.
    pub fn finger(self) -> Finger {
        match self.0 % 5 {
            0 => Finger::Thumb,
            1 => Finger::Index,
            2 => Finger::Middle,
            3 => Finger::Ring,
            _ => Finger::Pinky,
        }
    }
}

/// Whether a label is the provisional count of `b` or a final running total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelKind {
    /// Written while counting `b` from one; replaced before the run ends.
    Transient,
    /// Cumulative count, the value shown when the run settles.
    Final,
}

/// Count token written onto a finger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Label {
    /// Count shown on the finger, 1..=9.
    pub value: u8,
    /// Provisional or final.
    pub kind: LabelKind,
}

impl Label {
    /// Final token.
    pub fn final_count(value: u8) -> Self {
        Self {
            value,
            kind: LabelKind::Final,
        }
    }

    /// Transient token.
    pub fn transient(value: u8) -> Self {
        Self {
            value,
            kind: LabelKind::Transient,
        }
    }

    /// Display text of the token.
    pub fn text(self) -> String {
        self.value.to_string()
    }
}

/// Fixed array of ten finger labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FingerSlots([Option<Label>; SLOT_COUNT]);

impl FingerSlots {
    /// All slots unlabeled.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Label at `slot`.
    pub fn get(&self, slot: Slot) -> Option<Label> {
        self.0[slot.index()]
    }

    pub(crate) fn set(&mut self, slot: Slot, label: Label) {
        self.0[slot.index()] = Some(label);
    }

    pub(crate) fn clear(&mut self) {
        self.0 = [None; SLOT_COUNT];
    }

    /// Labels in slot order.
    pub fn labels(&self) -> &[Option<Label>; SLOT_COUNT] {
        &self.0
    }

    /// Display text per slot, empty string when unlabeled.
    pub fn texts(&self) -> [String; SLOT_COUNT] {
        std::array::from_fn(|i| self.0[i].map(Label::text).unwrap_or_default())
    }

    /// Number of labeled slots.
    pub fn labeled_count(&self) -> usize {
        self.0.iter().filter(|l| l.is_some()).count()
    }
}

impl fmt::Display for FingerSlots {
    /// `[1][2][ ][ ][ ] | [ ][ ][ ][ ][ ]`, transient labels in parentheses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.0.iter().enumerate() {
            if i == 5 {
                f.write_str(" | ")?;
            }
            match label {
                None => f.write_str("[ ]")?,
                Some(Label {
                    value,
                    kind: LabelKind::Final,
                }) => write!(f, "[{value}]")?,
                Some(Label {
                    value,
                    kind: LabelKind::Transient,
                }) => write!(f, "({value})")?,
            }
        }
        Ok(())
    }
}

/// Read-only view handed to renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FingerSnapshot {
    /// Current labels.
    pub slots: FingerSlots,
    /// Currently active finger, if any.
    pub highlight: Option<Slot>,
}

/// Position of the sequencer in its choreography.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing has run since the last reset.
    #[default]
    Idle,
    /// Labeling `1..=a` on the first `a` fingers.
    CountingA,
    /// Labeling `1..=b` provisionally on the next `b` fingers.
    CountingB,
    /// Rewriting those `b` fingers with running totals.
    RelabelingB,
    /// Highlight cleared, waiting to reveal the result.
    Settling,
    /// Result revealed.
    Done,
}

impl Phase {
    /// Whether a run occupies the sequencer in this phase.
    pub fn is_active(self) -> bool {
        !matches!(self, Phase::Idle | Phase::Done)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Idle => "idle",
            Phase::CountingA => "counting a",
            Phase::CountingB => "counting b",
            Phase::RelabelingB => "relabeling b",
            Phase::Settling => "settling",
            Phase::Done => "done",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/state.rs"]
mod tests;
