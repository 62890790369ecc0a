//! Core accordion engine. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod deck;
pub mod engine;
pub mod events;
pub mod play;
pub mod rng;
pub mod table;

pub use cards::*;
pub use deck::*;
pub use engine::*;
pub use events::*;
pub use play::*;
pub use rng::*;
pub use table::*;
