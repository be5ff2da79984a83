//! Standard 52-card deck generation.

use std::fmt;

use rustc_hash::FxHashSet;

use super::card::{Card, Rank, Suit};
use super::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Deck construction helpers.
pub struct Deck;

impl Deck {
    /// All 52 cards: suits in enumeration order, Ace to King within each.
    ///
    /// When `shuffled` is true the order is a uniform random permutation
    /// seeded from OS entropy.
    #[must_use]
    pub fn generate(shuffled: bool) -> Vec<Card> {
        let mut cards = Self::ordered();
        if shuffled {
            GameRng::from_entropy().shuffle(&mut cards);
        }
        cards
    }

    /// A deterministic shuffle driven by `rng`.
    #[must_use]
    pub fn shuffled_with(rng: &mut GameRng) -> Vec<Card> {
        let mut cards = Self::ordered();
        rng.shuffle(&mut cards);
        cards
    }

    fn ordered() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            cards.extend(Rank::all().map(|rank| Card::new(suit, rank)));
        }
        cards
    }

    /// Check that `cards` is a permutation of the standard deck.
    pub fn validate(cards: &[Card]) -> Result<(), DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize(cards.len()));
        }
        let mut seen = FxHashSet::default();
        for &card in cards {
            if !seen.insert(card) {
                return Err(DeckError::Duplicate(card));
            }
        }
        Ok(())
    }
}

/// A caller-supplied card ordering that is not a standard deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckError {
    WrongSize(usize),
    Duplicate(Card),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::WrongSize(n) => write!(f, "deck must hold {DECK_SIZE} cards, got {n}"),
            DeckError::Duplicate(card) => write!(f, "duplicate card in deck: {card}"),
        }
    }
}

impl std::error::Error for DeckError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unshuffled_order() {
        let deck = Deck::generate(false);
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck[0], Card::new(Suit::Heart, Rank::ACE));
        assert_eq!(deck[12], Card::new(Suit::Heart, Rank::KING));
        assert_eq!(deck[13], Card::new(Suit::Diamond, Rank::ACE));
        assert_eq!(deck[51], Card::new(Suit::Spade, Rank::KING));
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let deck = Deck::generate(true);
        assert!(Deck::validate(&deck).is_ok());
    }

    #[test]
    fn test_seeded_shuffle_is_deterministic() {
        let a = Deck::shuffled_with(&mut GameRng::new(99));
        let b = Deck::shuffled_with(&mut GameRng::new(99));
        let c = Deck::shuffled_with(&mut GameRng::new(100));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Deck::generate(false));
    }

    #[test]
    fn test_validate_rejects_bad_decks() {
        let mut deck = Deck::generate(false);
        deck.pop();
        assert_eq!(Deck::validate(&deck), Err(DeckError::WrongSize(51)));

        deck.push(deck[0]);
        assert_eq!(Deck::validate(&deck), Err(DeckError::Duplicate(deck[0])));
    }
}
