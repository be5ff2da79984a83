//! Card-matching predicates.
//!
//! Every move in Klondike reduces to one of two placements:
//! - **Stacking** onto a tableau: opposite color, one rank lower
//! - **Building** onto a foundation: same suit, one rank higher
//!
//! Both are expressed here as pure functions of a `StackMode` so each
//! rule has exactly one definition.

use crate::core::card::Card;

/// Which placement rule applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackMode {
    /// Onto a tableau column.
    Tableau,
    /// Onto a foundation pile.
    Foundation,
}

/// Suit compatibility between a moving card and the card it lands on.
#[must_use]
pub fn suits_match(src: Card, dest: Card, mode: StackMode) -> bool {
    match mode {
        StackMode::Tableau => src.color() != dest.color(),
        StackMode::Foundation => src.suit() == dest.suit(),
    }
}

/// Rank compatibility between a moving card and the card it lands on.
#[must_use]
pub fn ranks_match(src: Card, dest: Card, mode: StackMode) -> bool {
    let src = src.rank().value();
    let dest = dest.rank().value();
    match mode {
        StackMode::Tableau => src + 1 == dest,
        StackMode::Foundation => src == dest + 1,
    }
}

/// Whether `src` may be placed on a pile whose top card is `dest`.
///
/// An empty tableau accepts only a King; an empty foundation accepts only
/// an Ace.
#[must_use]
pub fn can_place(src: Card, dest: Option<Card>, mode: StackMode) -> bool {
    match (dest, mode) {
        (None, StackMode::Tableau) => src.is_king(),
        (None, StackMode::Foundation) => src.is_ace(),
        (Some(dest), mode) => suits_match(src, dest, mode) && ranks_match(src, dest, mode),
    }
}
