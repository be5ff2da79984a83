//! Playing card values.
//!
//! A `Card` is an immutable `(Suit, Rank)` pair. Cards are `Copy` and are
//! moved between piles by value; no pile ever aliases another.
//!
//! ## Text Form
//!
//! ```
//! use klondike_engine::core::{Card, Rank, Suit};
//!
//! let card: Card = "10H".parse().unwrap();
//! assert_eq!(card, Card::new(Suit::Heart, Rank::new(10).unwrap()));
//! assert_eq!(card.to_string(), "10♥");
//!
//! let king: Card = "k♠".parse().unwrap();
//! assert_eq!(king.rank(), Rank::KING);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card suit, in deck enumeration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

/// Suit color. Tableau stacking requires alternating colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    /// All suits in deck enumeration order.
    pub const ALL: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

    /// Color derived from the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Heart | Suit::Diamond => Color::Red,
            Suit::Club | Suit::Spade => Color::Black,
        }
    }

    /// Display glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'H' | '♥' => Some(Suit::Heart),
            'D' | '♦' => Some(Suit::Diamond),
            'C' | '♣' => Some(Suit::Club),
            'S' | '♠' => Some(Suit::Spade),
            _ => None,
        }
    }
}

/// Card rank in `1..=13` (Ace = 1, Jack = 11, Queen = 12, King = 13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, returning `None` outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value in `1..=13`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All ranks, Ace to King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    fn label(self) -> &'static str {
        const LABELS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[(self.0 - 1) as usize]
    }

    fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_uppercase().as_str() {
            "A" => Some(Rank::ACE),
            "J" => Some(Rank::JACK),
            "Q" => Some(Rank::QUEEN),
            "K" => Some(Rank::KING),
            "T" => Some(Rank(10)),
            digits => digits
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=10).contains(v))
                .map(Rank),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank out of range: {value}"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub fn is_ace(self) -> bool {
        self.rank == Rank::ACE
    }

    #[must_use]
    pub fn is_king(self) -> bool {
        self.rank == Rank::KING
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{}{}", self.rank.label(), self.suit.glyph());
        f.pad(&text)
    }
}

/// Error parsing a card from text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCardError(String);

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid card: {:?}", self.0)
    }
}

impl std::error::Error for ParseCardError {}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let err = || ParseCardError(s.to_string());

        let suit_char = text.chars().last().ok_or_else(err)?;
        let suit = Suit::from_char(suit_char).ok_or_else(err)?;
        let rank_text = &text[..text.len() - suit_char.len_utf8()];
        let rank = Rank::from_label(rank_text).ok_or_else(err)?;

        Ok(Card::new(suit, rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Heart.color(), Color::Red);
        assert_eq!(Suit::Diamond.color(), Color::Red);
        assert_eq!(Suit::Club.color(), Color::Black);
        assert_eq!(Suit::Spade.color(), Color::Black);
    }

    #[test]
    fn test_rank_bounds() {
        assert_eq!(Rank::new(0), None);
        assert_eq!(Rank::new(1), Some(Rank::ACE));
        assert_eq!(Rank::new(13), Some(Rank::KING));
        assert_eq!(Rank::new(14), None);
        assert_eq!(Rank::all().count(), 13);
    }

    #[test]
    fn test_display() {
        let ace = Card::new(Suit::Spade, Rank::ACE);
        let ten = Card::new(Suit::Diamond, Rank::new(10).unwrap());
        assert_eq!(ace.to_string(), "A♠");
        assert_eq!(ten.to_string(), "10♦");
        assert_eq!(format!("{ace:>3}"), " A♠");
    }

    #[test]
    fn test_parse() {
        assert_eq!("qc".parse::<Card>().unwrap(), Card::new(Suit::Club, Rank::QUEEN));
        assert_eq!("TH".parse::<Card>().unwrap().rank().value(), 10);
        assert_eq!("7♦".parse::<Card>().unwrap(), Card::new(Suit::Diamond, Rank::new(7).unwrap()));

        assert!("".parse::<Card>().is_err());
        assert!("1H".parse::<Card>().is_err());
        assert!("14S".parse::<Card>().is_err());
        assert!("KX".parse::<Card>().is_err());
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(Suit::Heart, Rank::QUEEN);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);

        assert!(serde_json::from_str::<Rank>("14").is_err());
    }
}
