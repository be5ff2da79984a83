//! # klondike-engine
//!
//! Rules engine for Klondike solitaire, with a terminal front end and
//! automatic playouts.
//!
//! ## Design Principles
//!
//! 1. **Illegal Moves Are Not Errors**: Every move operation validates
//!    first and returns `false` without touching state when it fails.
//!
//! 2. **Typed Indices**: Pile indices are `TableauId` / `FoundationId`,
//!    so an out-of-range zone cannot reach the engine.
//!
//! 3. **Reproducible Deals**: A seed fully determines the shuffle.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles are `im::Vector`s, so cloning
//!   an `Engine` for lookahead or playouts is O(1).
//!
//! - **Log Facade**: The library emits `log` records; the binary decides
//!   where they go.
//!
//! ## Modules
//!
//! - `core`: Cards, deck, RNG, configuration
//! - `zones`: Pile indices and the tableau column
//! - `rules`: Placement predicates, the `Engine`, and `Move`
//! - `playout`: Move policies and automatic play
//! - `render`: Text renderings of a game
//! - `cli`: Command parsing and the interactive session
//! - `logging`: Stderr logger used by the binary

pub mod core;
pub mod zones;
pub mod rules;
pub mod playout;
pub mod render;
pub mod cli;
pub mod logging;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, Rank, Suit, ParseCardError,
    Deck, DeckError, DECK_SIZE,
    GameRng,
    ConfigError, DrawMode, KlondikeConfig,
};

pub use crate::zones::{FoundationId, TableauId, Tableau, FOUNDATION_COUNT, TABLEAU_COUNT};

pub use crate::rules::{Engine, Move, StockAction, StackMode};

pub use crate::playout::{
    GreedyPolicy, MovePolicy, RandomPolicy,
    Playout, PlayoutConfig, PlayoutOutcome, PlayoutResult,
};

pub use crate::cli::{Command, CommandError, Outcome, Session};
