use ruccordion_core::{Deck, Variant};
use serde::{Deserialize, Serialize};

/// Cost model for the "does the casino win" projection: a fee per deck
/// played, an amount earned per counted card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Economics {
    pub cost_per_deck: f64,
    pub earned_per_card: f64,
}

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub runs: u64,
    pub variant: Variant,
    /// Run `i` plays with a generator seeded `seed + i`, so a batch is
    /// reproducible and each run stays independent of its neighbors.
    pub seed: u64,
    pub economics: Option<Economics>,
    /// Externally supplied deck for exactly one designated run (run 0),
    /// for deterministic replay.
    pub fixture: Option<Deck>,
}

impl SimConfig {
    /// Installs a run-0 fixture from the deck persistence format.
    pub fn with_fixture(mut self, input: &str) -> Result<Self, crate::SimError> {
        self.fixture = Some(Deck::parse(input)?);
        Ok(self)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 10,
            variant: Variant::Accordion,
            seed: 0xACC0,
            economics: None,
            fixture: None,
        }
    }
}
