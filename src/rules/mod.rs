//! Klondike rules.
//!
//! - `matching`: the two card-placement predicates (tableau, foundation)
//! - `engine`: the `Engine` aggregate owning every zone of a game
//! - `moves`: the `Move` vocabulary, dispatch and legal-move enumeration
//!
//! Illegal moves are ordinary outcomes: every operation returns `false`
//! and leaves the game untouched instead of failing.

pub mod matching;
pub mod engine;
pub mod moves;

pub use engine::{
    Engine, StockAction, FOUNDATION_POINTS, FOUNDATION_TO_TABLEAU_POINTS, MAX_WASTE_VISIBLE,
    RECYCLE_POINTS, REVEAL_POINTS, STOCK_SIZE, WASTE_TO_TABLEAU_POINTS,
};
pub use matching::{can_place, ranks_match, suits_match, StackMode};
pub use moves::Move;
