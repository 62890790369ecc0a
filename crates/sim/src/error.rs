use ruccordion_core::{DeckError, GameError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
    #[error("game error: {0}")]
    Game(#[from] GameError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}
