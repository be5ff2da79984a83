//! Move-selection policies for automatic play.
//!
//! - `RandomPolicy`: uniform over legal moves
//! - `GreedyPolicy`: foundation first, then reveals, then everything else

use crate::core::GameRng;
use crate::rules::{Engine, Move};
use crate::zones::TableauId;

/// Chooses the next move from the legal set.
pub trait MovePolicy {
    /// Pick one of `legal`, or `None` to stop.
    fn choose(&self, engine: &Engine, legal: &[Move], rng: &mut GameRng) -> Option<Move>;
}

/// Uniform random choice.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(&self, _engine: &Engine, legal: &[Move], rng: &mut GameRng) -> Option<Move> {
        rng.choose(legal).copied()
    }
}

/// Priority-based choice, random among equal priorities.
///
/// Never takes a card back off a foundation and never moves a whole
/// column into an empty one.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    /// Higher is better; `None` means never play it.
    fn priority(engine: &Engine, mv: Move) -> Option<u8> {
        match mv {
            Move::TableauToFoundation { .. } | Move::WasteToFoundation { .. } => Some(4),
            Move::TableauRun { from, depth, to } => Self::run_priority(engine, from, depth, to),
            Move::WholeTableau { from, to } => {
                Self::run_priority(engine, from, engine.tableau(from).face_up_count(), to)
            }
            Move::WasteToTableau { .. } => Some(2),
            Move::Draw => Some(0),
            Move::FoundationToTableau { .. } => None,
        }
    }

    fn run_priority(engine: &Engine, from: TableauId, depth: usize, to: TableauId) -> Option<u8> {
        let src = engine.tableau(from);
        if depth == src.face_up_count() && src.hidden_depth() > 0 {
            Some(3)
        } else if depth == src.len() && engine.tableau(to).is_empty() {
            // Moving a whole column into an empty one gains nothing.
            None
        } else {
            Some(1)
        }
    }
}

impl MovePolicy for GreedyPolicy {
    fn choose(&self, engine: &Engine, legal: &[Move], rng: &mut GameRng) -> Option<Move> {
        let best = legal
            .iter()
            .filter_map(|&mv| Self::priority(engine, mv))
            .max()?;

        let candidates: Vec<Move> = legal
            .iter()
            .copied()
            .filter(|&mv| Self::priority(engine, mv) == Some(best))
            .collect();
        rng.choose(&candidates).copied()
    }
}
