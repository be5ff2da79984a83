//! Tableau column with a face-down prefix.
//!
//! Cards are stored bottom to top (index 0 is the oldest card). The first
//! `hidden_depth` cards are face down. The boundary only ever moves down,
//! one card at a time, when a removal exposes the top hidden card.

use im::Vector;

use crate::core::card::Card;

/// A single tableau column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tableau {
    cards: Vector<Card>,
    hidden_depth: usize,
}

impl Tableau {
    /// Create an empty column whose first `hidden_depth` inserted cards
    /// will be face down.
    #[must_use]
    pub fn new(hidden_depth: usize) -> Self {
        Self {
            cards: Vector::new(),
            hidden_depth,
        }
    }

    /// Append a card on top. Legality is the engine's concern.
    pub fn insert(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// The top `depth` cards, bottom to top, without removing them.
    ///
    /// Returns an empty vector when `depth` exceeds the column length.
    #[must_use]
    pub fn peek_range(&self, depth: usize) -> Vector<Card> {
        if depth > self.cards.len() {
            return Vector::new();
        }
        self.cards.skip(self.cards.len() - depth)
    }

    /// Remove the top `depth` cards.
    ///
    /// Returns `true` if the removal exposed a face-down card, which is
    /// turned face up.
    ///
    /// # Panics
    ///
    /// Panics if `depth` exceeds the column length.
    pub fn remove_top(&mut self, depth: usize) -> bool {
        assert!(
            depth <= self.cards.len(),
            "cannot remove {} cards from a tableau of {}",
            depth,
            self.cards.len()
        );
        self.cards.truncate(self.cards.len() - depth);

        if self.hidden_depth > 0 && self.cards.len() == self.hidden_depth {
            self.hidden_depth -= 1;
            true
        } else {
            false
        }
    }

    /// Split off the top `depth` cards, applying the same reveal rule as
    /// `remove_top`.
    pub(crate) fn take_top(&mut self, depth: usize) -> (Vector<Card>, bool) {
        let run = self.peek_range(depth);
        let revealed = self.remove_top(depth);
        (run, revealed)
    }

    /// Append a run of cards, preserving their order.
    pub(crate) fn extend(&mut self, run: Vector<Card>) {
        self.cards.append(run);
    }

    /// All cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Number of face-down cards at the bottom.
    #[must_use]
    pub fn hidden_depth(&self) -> usize {
        self.hidden_depth
    }

    /// Number of face-up cards on top.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.cards.len().saturating_sub(self.hidden_depth)
    }

    /// The face-up cards, bottom to top.
    #[must_use]
    pub fn face_up(&self) -> Vector<Card> {
        self.peek_range(self.face_up_count())
    }

    /// Top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// Whether the card at `index` (from the bottom) is face down.
    #[must_use]
    pub fn is_hidden(&self, index: usize) -> bool {
        index < self.hidden_depth
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
