use crate::{Card, DECK_SIZE};
use serde::{Deserialize, Serialize};

/// One pile on the table: the visible card and how many cards sit under it
/// (depth counts the top card itself).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    pub top: Card,
    pub depth: u32,
}

/// The single row of piles. Occupied slots are always the contiguous prefix
/// `[0, active)`; everything at or past `active` is empty.
#[derive(Debug, Clone)]
pub struct Table {
    slots: [Option<Slot>; DECK_SIZE],
    active: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            slots: [None; DECK_SIZE],
            active: 0,
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Occupied slot at `index`, or `None` past the active prefix.
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        if index < self.active {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    /// Places `card` as a new single-card pile right after the active prefix
    /// and returns its index.
    pub fn deal(&mut self, card: Card) -> usize {
        debug_assert!(self.active < DECK_SIZE);
        let index = self.active;
        self.slots[index] = Some(Slot { top: card, depth: 1 });
        self.active += 1;
        index
    }

    pub fn rank_match(&self, a: usize, b: usize) -> bool {
        match (self.slot(a), self.slot(b)) {
            (Some(x), Some(y)) => x.top.rank == y.top.rank,
            _ => false,
        }
    }

    pub fn suit_match(&self, a: usize, b: usize) -> bool {
        match (self.slot(a), self.slot(b)) {
            (Some(x), Some(y)) => x.top.suit == y.top.suit,
            _ => false,
        }
    }

    pub fn matches(&self, a: usize, b: usize) -> bool {
        self.rank_match(a, b) || self.suit_match(a, b)
    }

    /// Moves the whole pile at `src` onto the pile at `dst`. The incoming
    /// pile's face stays visible and the depths sum; `src` is left empty and
    /// still counted until [`Table::compact_gap`] closes it.
    pub fn merge(&mut self, dst: usize, src: usize) {
        debug_assert!(dst < src && src < self.active);
        let Some(moved) = self.slots[src].take() else {
            return;
        };
        let Some(receiver) = self.slots[dst].as_mut() else {
            return;
        };
        receiver.top = moved.top;
        receiver.depth += moved.depth;
    }

    /// Closes a `width`-wide run of emptied slots starting at `start` by
    /// shifting every occupied slot above it left, then drops `active`.
    pub fn compact_gap(&mut self, start: usize, width: usize) {
        debug_assert!(width > 0 && start + width <= self.active);
        for index in start..self.active - width {
            self.slots[index] = self.slots[index + width].take();
        }
        for index in self.active - width..self.active {
            self.slots[index] = None;
        }
        self.active -= width;
    }

    /// Removes the piles `start..start + width` from play entirely and
    /// compacts the gap. Used by the once-in-a-lifetime elimination rule.
    pub fn discard_span(&mut self, start: usize, width: usize) {
        debug_assert!(start + width <= self.active);
        for index in start..start + width {
            self.slots[index] = None;
        }
        self.compact_gap(start, width);
    }

    /// Conservation sum: total cards across all piles.
    pub fn cards_on_table(&self) -> u32 {
        self.slots[..self.active]
            .iter()
            .flatten()
            .map(|slot| slot.depth)
            .sum()
    }

    pub fn pile_sizes(&self) -> Vec<u32> {
        self.slots[..self.active]
            .iter()
            .flatten()
            .map(|slot| slot.depth)
            .collect()
    }

    /// Copy of the occupied prefix, for observation events.
    pub fn snapshot(&self) -> Vec<Slot> {
        self.slots[..self.active].iter().flatten().copied().collect()
    }
}
