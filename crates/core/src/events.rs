use crate::{Card, Slot};
use serde::{Deserialize, Serialize};

/// Observation stream emitted while a game plays out. Consumers (an
/// interactive board view, a debugger) drain it; the engine makes the same
/// moves whether or not anything listens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    CardDealt {
        index: usize,
        card: Card,
    },
    /// A merge settled: the pile under test at `checked` landed on
    /// `merged_into`. The snapshot is the compacted board after the move.
    MergeStep {
        checked: usize,
        merged_into: usize,
        snapshot: Vec<Slot>,
    },
    /// Once-in-a-lifetime elimination: `width` piles dropped at `start`.
    SpanRemoved {
        start: usize,
        width: usize,
        snapshot: Vec<Slot>,
    },
    RunFinished {
        snapshot: Vec<Slot>,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
    capture: bool,
}

impl EventBus {
    /// A bus that actually records. The default bus discards everything, so
    /// batch runs never pay for snapshots.
    pub fn capturing() -> Self {
        Self {
            queue: Vec::new(),
            capture: true,
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.capture
    }

    pub fn push(&mut self, event: Event) {
        if self.capture {
            self.queue.push(event);
        }
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
