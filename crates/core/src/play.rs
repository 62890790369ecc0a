use crate::{eliminate, settle, Deck, Event, EventBus, Table, Variant, DECK_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine-bug surface: these mean the table broke an invariant mid-run, not
/// that the caller did anything wrong. Never swallowed, never a panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("deck holds {0} cards, table capacity is {DECK_SIZE}")]
    OversizedDeck(usize),
    #[error("card conservation broken: dealt {dealt}, table holds {on_table}")]
    Conservation { dealt: u32, on_table: u32 },
    #[error("table not settled: piles {a} and {b} still match")]
    Unsettled { a: usize, b: usize },
}

/// Terminal state of one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunResult {
    pub final_active_count: usize,
    pub final_pile_sizes: Vec<u32>,
}

impl RunResult {
    /// Depth of the leftmost pile, the classic game's payout measure.
    pub fn first_pile(&self) -> u32 {
        self.final_pile_sizes.first().copied().unwrap_or(0)
    }

    /// Cards still on the table across every pile.
    pub fn cards_remaining(&self) -> u32 {
        self.final_pile_sizes.iter().sum()
    }

    /// The measure a batch aggregates for `variant`.
    pub fn counted_cards(&self, variant: Variant) -> u32 {
        match variant {
            Variant::Accordion => self.first_pile(),
            Variant::OnceInALifetime => self.cards_remaining(),
        }
    }
}

/// Plays one classic Accordion game. Pure: same deck, same result.
pub fn play(deck: &Deck) -> Result<RunResult, GameError> {
    play_variant(Variant::Accordion, deck, &mut EventBus::default())
}

/// Plays one Once in a Lifetime game. Pure: same deck, same result.
pub fn play_once_in_a_lifetime(deck: &Deck) -> Result<RunResult, GameError> {
    play_variant(Variant::OnceInALifetime, deck, &mut EventBus::default())
}

pub fn play_variant(
    variant: Variant,
    deck: &Deck,
    events: &mut EventBus,
) -> Result<RunResult, GameError> {
    if deck.len() > DECK_SIZE {
        return Err(GameError::OversizedDeck(deck.len()));
    }
    let mut table = Table::new();
    match variant {
        Variant::Accordion => {
            for (dealt, &card) in deck.cards.iter().enumerate() {
                let index = table.deal(card);
                events.push(Event::CardDealt { index, card });
                settle(&mut table, index, events);

                let dealt = dealt as u32 + 1;
                let on_table = table.cards_on_table();
                if on_table != dealt {
                    return Err(GameError::Conservation { dealt, on_table });
                }
            }
            if let Some((a, b)) = unsettled_pair(&table) {
                return Err(GameError::Unsettled { a, b });
            }
        }
        Variant::OnceInALifetime => {
            // The whole deck is laid out before any elimination happens.
            for &card in &deck.cards {
                let index = table.deal(card);
                events.push(Event::CardDealt { index, card });
            }
            eliminate(&mut table, events);
        }
    }
    if events.is_capturing() {
        events.push(Event::RunFinished {
            snapshot: table.snapshot(),
        });
    }
    Ok(RunResult {
        final_active_count: table.active(),
        final_pile_sizes: table.pile_sizes(),
    })
}

/// The settled post-condition of a classic game: no occupied pair at
/// distance 1 or 3 still matches. Diagnostic; `play` already enforces it.
pub fn is_settled(table: &Table) -> bool {
    unsettled_pair(table).is_none()
}

fn unsettled_pair(table: &Table) -> Option<(usize, usize)> {
    for index in (0..table.active()).rev() {
        if index >= 1 && table.matches(index, index - 1) {
            return Some((index - 1, index));
        }
        if index >= 3 && table.matches(index, index - 3) {
            return Some((index - 3, index));
        }
    }
    None
}
