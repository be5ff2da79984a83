//! The Klondike engine.
//!
//! `Engine` owns every zone of one game (7 tableaus, 4 foundations, stock
//! and waste) together with the score and win flag. Callers see the zones
//! only through read-only accessors; every mutation goes through a move
//! operation that validates first and mutates only on success.
//!
//! ## Scoring
//!
//! | Event | Points |
//! |---|---|
//! | Hidden tableau card revealed | +5 |
//! | Card placed on a foundation | +10 |
//! | Waste card placed on a tableau | +5 |
//! | Foundation card moved back to a tableau | -15 |
//! | Stock recycled in draw-one mode | -100 |
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::core::KlondikeConfig;
//! use klondike_engine::rules::{Engine, StockAction};
//!
//! let mut engine = Engine::from_config(&KlondikeConfig::new().with_seed(42));
//! assert_eq!(engine.stock().len(), 24);
//!
//! assert_eq!(engine.draw_from_stock(), StockAction::Drawn(1));
//! assert_eq!(engine.waste().len(), 1);
//! assert_eq!(engine.waste_visible(), 1);
//! ```

use std::hash::{Hash, Hasher};

use im::Vector;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{Card, Rank};
use crate::core::config::{DrawMode, KlondikeConfig};
use crate::core::deck::{Deck, DeckError};
use crate::core::rng::GameRng;
use crate::zones::{FoundationId, Tableau, TableauId, FOUNDATION_COUNT, TABLEAU_COUNT};

use super::matching::{can_place, StackMode};

/// Points for exposing a face-down tableau card.
pub const REVEAL_POINTS: i32 = 5;
/// Points for any card placed on a foundation.
pub const FOUNDATION_POINTS: i32 = 10;
/// Points for moving the waste card onto a tableau.
pub const WASTE_TO_TABLEAU_POINTS: i32 = 5;
/// Points for taking a card back off a foundation.
pub const FOUNDATION_TO_TABLEAU_POINTS: i32 = -15;
/// Points for recycling the waste in draw-one mode.
pub const RECYCLE_POINTS: i32 = -100;

/// Most recent draws that stay inspectable in the waste.
pub const MAX_WASTE_VISIBLE: usize = 3;

/// Number of cards dealt into the stock.
pub const STOCK_SIZE: usize = 24;

/// What a stock draw did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockAction {
    /// This many cards moved from stock to waste.
    Drawn(usize),
    /// Stock was empty; this many waste cards were turned back over.
    Recycled(usize),
    /// Stock and waste were both empty.
    Empty,
}

/// One game of Klondike.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    tableaus: [Tableau; TABLEAU_COUNT],
    foundations: [Vector<Card>; FOUNDATION_COUNT],
    /// Face down, drawn from the front.
    stock: Vector<Card>,
    /// Face up, most recent draw at the front.
    waste: Vector<Card>,
    waste_visible: usize,
    points: i32,
    draw: DrawMode,
    cleared: bool,
    move_count: u32,
    seed: Option<u64>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// New draw-one game from an entropy-seeded shuffle.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&KlondikeConfig::default())
    }

    /// New game with the given draw mode from an entropy-seeded shuffle.
    #[must_use]
    pub fn with_draw(draw: DrawMode) -> Self {
        Self::from_config(&KlondikeConfig::new().with_draw(draw))
    }

    /// New game from a configuration.
    ///
    /// With a fixed seed the deal is reproducible.
    #[must_use]
    pub fn from_config(config: &KlondikeConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let cards = Deck::shuffled_with(&mut rng);
        Self::deal(config.draw, cards, Some(rng.seed()))
    }

    /// New game dealt from an explicit 52-card ordering.
    ///
    /// `cards[0]` goes to tableau 0, `cards[1..=2]` to tableau 1, and so on;
    /// `cards[28..]` become the stock with `cards[28]` drawn first.
    pub fn with_deck(draw: DrawMode, cards: Vec<Card>) -> Result<Self, DeckError> {
        Deck::validate(&cards)?;
        Ok(Self::deal(draw, cards, None))
    }

    fn deal(draw: DrawMode, cards: Vec<Card>, seed: Option<u64>) -> Self {
        let mut deck = cards.into_iter();

        let tableaus: [Tableau; TABLEAU_COUNT] = std::array::from_fn(|i| {
            let mut tableau = Tableau::new(i);
            for card in deck.by_ref().take(i + 1) {
                tableau.insert(card);
            }
            tableau
        });
        let stock: Vector<Card> = deck.collect();

        log::debug!(
            "dealt new game: draw={}, seed={:?}, stock={}",
            draw.count(),
            seed,
            stock.len()
        );

        Self {
            tableaus,
            foundations: Default::default(),
            stock,
            waste: Vector::new(),
            waste_visible: 0,
            points: 0,
            draw,
            cleared: false,
            move_count: 0,
            seed,
        }
    }

    // === Stock ===

    /// Turn cards from stock to waste, or recycle the waste when the stock
    /// is empty.
    ///
    /// Drawing moves up to `draw_mode().count()` cards from the front of the
    /// stock to the front of the waste, raising the visible count once per
    /// card (capped at 3). Recycling turns the whole waste back into the
    /// stock in its original order and resets the visible count; in
    /// draw-one mode it costs 100 points.
    pub fn draw_from_stock(&mut self) -> StockAction {
        if self.stock.is_empty() {
            if self.waste.is_empty() {
                log::debug!("draw: stock and waste both empty");
                return StockAction::Empty;
            }

            let recycled = self.waste.len();
            while let Some(card) = self.waste.pop_back() {
                self.stock.push_back(card);
            }
            self.waste_visible = 0;
            if self.draw == DrawMode::One {
                self.points += RECYCLE_POINTS;
            }
            self.move_count += 1;

            log::debug!("draw: recycled {} waste cards into stock", recycled);
            return StockAction::Recycled(recycled);
        }

        let mut drawn: SmallVec<[Card; 3]> = SmallVec::new();
        while drawn.len() < self.draw.count() {
            let Some(card) = self.stock.pop_front() else {
                break;
            };
            self.waste.push_front(card);
            self.waste_visible = (self.waste_visible + 1).min(MAX_WASTE_VISIBLE);
            drawn.push(card);
        }
        self.move_count += 1;

        log::debug!("draw: {:?} to waste", drawn.as_slice());
        StockAction::Drawn(drawn.len())
    }

    // === Tableau to tableau ===

    /// Whether the top `depth` cards of `from` may move onto `to`.
    #[must_use]
    pub fn can_move_tableau_run(&self, from: TableauId, depth: usize, to: TableauId) -> bool {
        if from == to || depth == 0 {
            return false;
        }

        let src = &self.tableaus[from.index()];
        if src.hidden_depth() + depth > src.len() {
            return false;
        }

        let Some(&bottom) = src.cards().get(src.len() - depth) else {
            return false;
        };
        can_place(bottom, self.tableaus[to.index()].top(), StackMode::Tableau)
    }

    /// Move the top `depth` cards of `from` onto `to`.
    ///
    /// The run may not reach into the face-down region. Its bottom card must
    /// be a King when `to` is empty, or stack onto the top of `to`
    /// otherwise. Revealing a hidden card in `from` scores 5 points.
    pub fn move_tableau_run(&mut self, from: TableauId, depth: usize, to: TableauId) -> bool {
        if !self.can_move_tableau_run(from, depth, to) {
            log::debug!("rejected: {} cards {} -> {}", depth, from, to);
            return false;
        }

        let (run, revealed) = self.tableaus[from.index()].take_top(depth);
        self.tableaus[to.index()].extend(run);
        if revealed {
            self.points += REVEAL_POINTS;
        }
        self.move_count += 1;

        log::debug!("moved {} cards {} -> {} (revealed: {})", depth, from, to, revealed);
        true
    }

    /// Whether every face-up card of `from` may move onto `to`.
    #[must_use]
    pub fn can_move_whole_tableau_run(&self, from: TableauId, to: TableauId) -> bool {
        let depth = self.tableaus[from.index()].face_up_count();
        self.can_move_tableau_run(from, depth, to)
    }

    /// Move every face-up card of `from` onto `to`.
    pub fn move_whole_tableau_run(&mut self, from: TableauId, to: TableauId) -> bool {
        let depth = self.tableaus[from.index()].face_up_count();
        self.move_tableau_run(from, depth, to)
    }

    // === Foundations ===

    /// Whether the top card of `from` may go onto foundation `to`.
    #[must_use]
    pub fn can_move_tableau_to_foundation(&self, from: TableauId, to: FoundationId) -> bool {
        self.tableaus[from.index()]
            .top()
            .is_some_and(|card| can_place(card, self.foundation_top(to), StackMode::Foundation))
    }

    /// Move the top card of `from` onto foundation `to`.
    ///
    /// Scores 10 points, plus 5 if a hidden card is revealed.
    pub fn move_tableau_to_foundation(&mut self, from: TableauId, to: FoundationId) -> bool {
        if !self.can_move_tableau_to_foundation(from, to) {
            log::debug!("rejected: {} -> {}", from, to);
            return false;
        }

        let (run, revealed) = self.tableaus[from.index()].take_top(1);
        if revealed {
            self.points += REVEAL_POINTS;
        }
        for card in run {
            self.add_to_foundation(card, to);
        }
        self.points += FOUNDATION_POINTS;
        self.move_count += 1;

        log::debug!("moved {} -> {} (revealed: {})", from, to, revealed);
        true
    }

    /// Whether the front waste card may go onto tableau `to`.
    #[must_use]
    pub fn can_move_waste_to_tableau(&self, to: TableauId) -> bool {
        self.playable_waste_card()
            .is_some_and(|card| can_place(card, self.tableaus[to.index()].top(), StackMode::Tableau))
    }

    /// Move the front waste card onto tableau `to`. Scores 5 points.
    pub fn move_waste_to_tableau(&mut self, to: TableauId) -> bool {
        if !self.can_move_waste_to_tableau(to) {
            log::debug!("rejected: waste -> {}", to);
            return false;
        }

        let Some(card) = self.take_waste_front() else {
            return false;
        };
        self.tableaus[to.index()].insert(card);
        self.points += WASTE_TO_TABLEAU_POINTS;
        self.move_count += 1;

        log::debug!("moved {} waste -> {}", card, to);
        true
    }

    /// Whether the front waste card may go onto foundation `to`.
    #[must_use]
    pub fn can_move_waste_to_foundation(&self, to: FoundationId) -> bool {
        self.waste
            .front()
            .is_some_and(|&card| can_place(card, self.foundation_top(to), StackMode::Foundation))
    }

    /// Move the front waste card onto foundation `to`. Scores 10 points.
    pub fn move_waste_to_foundation(&mut self, to: FoundationId) -> bool {
        if !self.can_move_waste_to_foundation(to) {
            log::debug!("rejected: waste -> {}", to);
            return false;
        }

        let Some(card) = self.take_waste_front() else {
            return false;
        };
        self.add_to_foundation(card, to);
        self.points += FOUNDATION_POINTS;
        self.move_count += 1;

        log::debug!("moved {} waste -> {}", card, to);
        true
    }

    /// Whether the top of foundation `from` may go back onto tableau `to`.
    #[must_use]
    pub fn can_move_foundation_to_tableau(&self, from: FoundationId, to: TableauId) -> bool {
        self.foundation_top(from)
            .is_some_and(|card| can_place(card, self.tableaus[to.index()].top(), StackMode::Tableau))
    }

    /// Move the top of foundation `from` back onto tableau `to`.
    /// Costs 15 points.
    pub fn move_foundation_to_tableau(&mut self, from: FoundationId, to: TableauId) -> bool {
        if !self.can_move_foundation_to_tableau(from, to) {
            log::debug!("rejected: {} -> {}", from, to);
            return false;
        }

        let Some(card) = self.foundations[from.index()].pop_back() else {
            return false;
        };
        self.tableaus[to.index()].insert(card);
        self.points += FOUNDATION_TO_TABLEAU_POINTS;
        self.move_count += 1;

        log::debug!("moved {} {} -> {}", card, from, to);
        true
    }

    fn take_waste_front(&mut self) -> Option<Card> {
        let card = self.waste.pop_front()?;
        self.waste_visible = self.waste_visible.saturating_sub(1);
        Some(card)
    }

    /// Place a card on a foundation and re-check the win condition.
    ///
    /// This is the only path onto a foundation, so the win check runs
    /// exactly once per placed card.
    fn add_to_foundation(&mut self, card: Card, to: FoundationId) {
        self.foundations[to.index()].push_back(card);

        let full = self
            .foundations
            .iter()
            .filter(|pile| pile.len() == Rank::KING.value() as usize)
            .count();
        if full == FOUNDATION_COUNT && !self.cleared {
            self.cleared = true;
            log::info!("game cleared with {} points in {} moves", self.points, self.move_count + 1);
        }
    }

    // === Queries ===

    /// Tableau column by id.
    #[must_use]
    pub fn tableau(&self, id: TableauId) -> &Tableau {
        &self.tableaus[id.index()]
    }

    /// All tableau columns, left to right.
    #[must_use]
    pub fn tableaus(&self) -> &[Tableau; TABLEAU_COUNT] {
        &self.tableaus
    }

    /// Foundation pile by id, Ace first.
    #[must_use]
    pub fn foundation(&self, id: FoundationId) -> &Vector<Card> {
        &self.foundations[id.index()]
    }

    /// Exposed (highest) card of a foundation.
    #[must_use]
    pub fn foundation_top(&self, id: FoundationId) -> Option<Card> {
        self.foundations[id.index()].back().copied()
    }

    /// Stock, next card to draw first.
    #[must_use]
    pub fn stock(&self) -> &Vector<Card> {
        &self.stock
    }

    /// Waste, most recent draw first.
    #[must_use]
    pub fn waste(&self) -> &Vector<Card> {
        &self.waste
    }

    /// How many of the most recent waste cards are inspectable (0..=3).
    #[must_use]
    pub fn waste_visible(&self) -> usize {
        self.waste_visible
    }

    /// The inspectable waste cards, most recent first.
    pub fn visible_waste(&self) -> impl Iterator<Item = Card> + '_ {
        self.waste.iter().take(self.waste_visible).copied()
    }

    /// The waste card that can be played onto a tableau, if any.
    #[must_use]
    pub fn playable_waste_card(&self) -> Option<Card> {
        if self.waste_visible > 0 {
            self.waste.front().copied()
        } else {
            None
        }
    }

    /// Current score. May be negative.
    #[must_use]
    pub fn points(&self) -> i32 {
        self.points
    }

    /// Stock draw size for this game.
    #[must_use]
    pub fn draw_mode(&self) -> DrawMode {
        self.draw
    }

    /// True once all four foundations hold 13 cards.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    /// Number of successful moves, draws included.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Deal seed, when the game was dealt from a seeded shuffle.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Every card in the game, zone by zone.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.tableaus
            .iter()
            .flat_map(|t| t.cards().iter())
            .chain(self.foundations.iter().flat_map(|f| f.iter()))
            .chain(self.stock.iter())
            .chain(self.waste.iter())
            .copied()
    }

    /// Hash of the card layout, ignoring score and move count.
    ///
    /// Every pile is hashed with its length, so layouts that only differ in
    /// where one pile ends and the next begins still hash apart.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        fn pile(cards: &Vector<Card>, hasher: &mut FxHasher) {
            // Length first: piles are hashed back to back.
            cards.len().hash(hasher);
            for card in cards {
                card.hash(hasher);
            }
        }

        let mut hasher = FxHasher::default();
        for tableau in &self.tableaus {
            tableau.hidden_depth().hash(&mut hasher);
            pile(tableau.cards(), &mut hasher);
        }
        for foundation in &self.foundations {
            pile(foundation, &mut hasher);
        }
        pile(&self.stock, &mut hasher);
        pile(&self.waste, &mut hasher);
        self.waste_visible.hash(&mut hasher);
        hasher.finish()
    }
}
