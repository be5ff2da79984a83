//! Core value types: cards, deck generation, RNG, configuration.
//!
//! Nothing in here knows the rules of Klondike. The rules live in
//! `rules`; the pile types live in `zones`.

pub mod card;
pub mod deck;
pub mod rng;
pub mod config;

pub use card::{Card, Color, ParseCardError, Rank, Suit};
pub use deck::{Deck, DeckError, DECK_SIZE};
pub use rng::GameRng;
pub use config::{ConfigError, DrawMode, KlondikeConfig};
