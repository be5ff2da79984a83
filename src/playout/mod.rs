//! Automatic play.
//!
//! A `Playout` repeatedly asks a `MovePolicy` for one of the engine's
//! legal moves and applies it, stopping when the game is cleared, nothing
//! is playable, a move limit is hit, or a card layout keeps repeating.
//!
//! ```
//! use klondike_engine::core::{GameRng, KlondikeConfig};
//! use klondike_engine::playout::{GreedyPolicy, Playout, PlayoutConfig};
//! use klondike_engine::rules::Engine;
//!
//! let mut engine = Engine::from_config(&KlondikeConfig::new().with_seed(42));
//! let playout = Playout::new(PlayoutConfig::default().with_max_moves(500));
//! let result = playout.run(&mut engine, &GreedyPolicy, &mut GameRng::new(42));
//! assert!(result.moves_played <= 500);
//! ```

pub mod policy;
pub mod runner;

pub use policy::{GreedyPolicy, MovePolicy, RandomPolicy};
pub use runner::{Playout, PlayoutConfig, PlayoutOutcome, PlayoutResult};
