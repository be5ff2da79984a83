//! Bounded automatic playout.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::rules::Engine;

use super::policy::MovePolicy;

/// Playout limits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutConfig {
    /// Stop after this many moves (0 = unlimited).
    pub max_moves: u32,

    /// Stop once any card layout has been seen this many times.
    pub max_repeats: u32,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_moves: 2_000,
            max_repeats: 3,
        }
    }
}

impl PlayoutConfig {
    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = max_moves;
        self
    }

    pub fn with_max_repeats(mut self, max_repeats: u32) -> Self {
        self.max_repeats = max_repeats.max(1);
        self
    }
}

/// Why a playout stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayoutOutcome {
    /// All four foundations complete.
    Cleared,
    /// No legal move, or the policy declined every legal move.
    Stuck,
    /// `max_moves` reached.
    MoveLimit,
    /// A layout repeated `max_repeats` times.
    Loop,
}

/// Summary of a finished playout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub moves_played: u32,
    pub points: i32,
}

/// Plays moves chosen by a policy until the game ends or a limit trips.
#[derive(Clone, Debug, Default)]
pub struct Playout {
    config: PlayoutConfig,
}

impl Playout {
    #[must_use]
    pub fn new(config: PlayoutConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PlayoutConfig {
        &self.config
    }

    /// Run `policy` on `engine` in place.
    pub fn run<P: MovePolicy + ?Sized>(
        &self,
        engine: &mut Engine,
        policy: &P,
        rng: &mut GameRng,
    ) -> PlayoutResult {
        let mut seen: FxHashMap<u64, u32> = FxHashMap::default();
        let mut moves_played = 0u32;

        let outcome = loop {
            if engine.is_cleared() {
                break PlayoutOutcome::Cleared;
            }
            if self.config.max_moves > 0 && moves_played >= self.config.max_moves {
                break PlayoutOutcome::MoveLimit;
            }

            let visits = seen.entry(engine.fingerprint()).or_insert(0);
            *visits += 1;
            if *visits >= self.config.max_repeats {
                break PlayoutOutcome::Loop;
            }

            let legal = engine.legal_moves();
            let Some(mv) = policy.choose(engine, &legal, rng) else {
                break PlayoutOutcome::Stuck;
            };

            log::trace!("playout step {}: {}", moves_played + 1, mv);
            if !engine.apply(mv) {
                // A policy returned a move outside the legal set.
                log::warn!("playout policy chose illegal move {}", mv);
                break PlayoutOutcome::Stuck;
            }
            moves_played += 1;
        };

        log::debug!(
            "playout finished: {:?} after {} moves, {} points",
            outcome,
            moves_played,
            engine.points()
        );

        PlayoutResult {
            outcome,
            moves_played,
            points: engine.points(),
        }
    }
}
