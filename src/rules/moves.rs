//! Move vocabulary and legal-move enumeration.
//!
//! A `Move` names one engine operation together with its arguments, so
//! callers that pick moves programmatically (playouts, bindings, the CLI)
//! can hold, compare, log and serialize them.
//!
//! ```
//! use klondike_engine::core::KlondikeConfig;
//! use klondike_engine::rules::{Engine, Move};
//!
//! let mut engine = Engine::from_config(&KlondikeConfig::new().with_seed(42));
//! let moves = engine.legal_moves();
//! assert!(moves.contains(&Move::Draw));
//!
//! for mv in moves {
//!     assert!(engine.can_apply(mv));
//! }
//! assert!(engine.apply(Move::Draw));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::zones::{FoundationId, TableauId};

use super::engine::{Engine, StockAction};

/// A single engine operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Draw from stock, or recycle the waste.
    Draw,
    /// Move the top `depth` cards between tableaus.
    TableauRun {
        from: TableauId,
        depth: usize,
        to: TableauId,
    },
    /// Move every face-up card between tableaus.
    WholeTableau { from: TableauId, to: TableauId },
    /// Move a tableau's top card to a foundation.
    TableauToFoundation { from: TableauId, to: FoundationId },
    /// Move the front waste card to a tableau.
    WasteToTableau { to: TableauId },
    /// Move the front waste card to a foundation.
    WasteToFoundation { to: FoundationId },
    /// Move a foundation's top card back to a tableau.
    FoundationToTableau { from: FoundationId, to: TableauId },
}

impl Move {
    /// Whether the move puts a card onto a foundation.
    #[must_use]
    pub fn is_to_foundation(self) -> bool {
        matches!(self, Move::TableauToFoundation { .. } | Move::WasteToFoundation { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Draw => write!(f, "draw"),
            Move::TableauRun { from, depth, to } => write!(f, "{from} x{depth} -> {to}"),
            Move::WholeTableau { from, to } => write!(f, "{from} -> {to}"),
            Move::TableauToFoundation { from, to } => write!(f, "{from} -> {to}"),
            Move::WasteToTableau { to } => write!(f, "W -> {to}"),
            Move::WasteToFoundation { to } => write!(f, "W -> {to}"),
            Move::FoundationToTableau { from, to } => write!(f, "{from} -> {to}"),
        }
    }
}

impl Engine {
    /// Whether `mv` would succeed. Never mutates.
    #[must_use]
    pub fn can_apply(&self, mv: Move) -> bool {
        match mv {
            Move::Draw => !self.stock().is_empty() || !self.waste().is_empty(),
            Move::TableauRun { from, depth, to } => self.can_move_tableau_run(from, depth, to),
            Move::WholeTableau { from, to } => self.can_move_whole_tableau_run(from, to),
            Move::TableauToFoundation { from, to } => self.can_move_tableau_to_foundation(from, to),
            Move::WasteToTableau { to } => self.can_move_waste_to_tableau(to),
            Move::WasteToFoundation { to } => self.can_move_waste_to_foundation(to),
            Move::FoundationToTableau { from, to } => self.can_move_foundation_to_tableau(from, to),
        }
    }

    /// Perform `mv`. Returns `false`, leaving the game untouched, when the
    /// move is illegal.
    pub fn apply(&mut self, mv: Move) -> bool {
        match mv {
            Move::Draw => self.draw_from_stock() != StockAction::Empty,
            Move::TableauRun { from, depth, to } => self.move_tableau_run(from, depth, to),
            Move::WholeTableau { from, to } => self.move_whole_tableau_run(from, to),
            Move::TableauToFoundation { from, to } => self.move_tableau_to_foundation(from, to),
            Move::WasteToTableau { to } => self.move_waste_to_tableau(to),
            Move::WasteToFoundation { to } => self.move_waste_to_foundation(to),
            Move::FoundationToTableau { from, to } => self.move_foundation_to_tableau(from, to),
        }
    }

    /// Every move `apply` would accept right now.
    ///
    /// `WholeTableau` is not listed separately since it always equals one
    /// of the listed `TableauRun` moves.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        for to in FoundationId::ALL {
            for from in TableauId::ALL {
                let mv = Move::TableauToFoundation { from, to };
                if self.can_apply(mv) {
                    moves.push(mv);
                }
            }
            let mv = Move::WasteToFoundation { to };
            if self.can_apply(mv) {
                moves.push(mv);
            }
        }

        for from in TableauId::ALL {
            for depth in 1..=self.tableau(from).face_up_count() {
                for to in TableauId::ALL {
                    let mv = Move::TableauRun { from, depth, to };
                    if self.can_apply(mv) {
                        moves.push(mv);
                    }
                }
            }
        }

        for to in TableauId::ALL {
            let mv = Move::WasteToTableau { to };
            if self.can_apply(mv) {
                moves.push(mv);
            }
            for from in FoundationId::ALL {
                let mv = Move::FoundationToTableau { from, to };
                if self.can_apply(mv) {
                    moves.push(mv);
                }
            }
        }

        if self.can_apply(Move::Draw) {
            moves.push(Move::Draw);
        }

        moves
    }

    /// Whether any move is available.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        !self.legal_moves().is_empty()
    }
}
