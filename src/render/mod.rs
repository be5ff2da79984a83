//! Text renderings of a game.
//!
//! - `plain`: one line per pile, tableaus listed top card first
//! - `board`: the column layout shown by the interactive front end
//!
//! Both read the engine through its query accessors only.

use crate::rules::Engine;
use crate::zones::{FoundationId, TableauId};

/// Placeholder for a face-down card.
const HIDDEN: &str = "XX";

/// Column width in `board`.
const CELL: usize = 6;

/// Inspectable waste cards, most recent first, joined by `, `.
#[must_use]
pub fn waste_line(engine: &Engine) -> String {
    engine
        .visible_waste()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Right-align each cell to the board column width and concatenate.
fn cells<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    items
        .into_iter()
        .map(|item| format!("{:>w$}", item.to_string(), w = CELL))
        .collect()
}

/// Join lines, each terminated by a newline.
fn finish(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

/// One line per pile.
#[must_use]
pub fn plain(engine: &Engine) -> String {
    let mut lines = vec![
        format!("Stock Count: {}", engine.stock().len()),
        format!("Waste: {}", waste_line(engine)),
    ];

    for id in TableauId::ALL {
        let tableau = engine.tableau(id);
        let cards: Vec<String> = tableau
            .cards()
            .iter()
            .enumerate()
            .rev()
            .map(|(i, card)| {
                if tableau.is_hidden(i) {
                    HIDDEN.to_string()
                } else {
                    card.to_string()
                }
            })
            .collect();
        lines.push(format!("Tableau {}: {}", id.index() + 1, cards.join(" ")));
    }

    for id in FoundationId::ALL {
        let top = engine
            .foundation_top(id)
            .map_or_else(|| "Empty".to_string(), |card| card.to_string());
        lines.push(format!("Foundation {}: {}", id.index() + 1, top));
    }

    finish(lines)
}

/// Column layout: stock, waste and foundations on top, then the seven
/// tableau columns drawn bottom card first.
#[must_use]
pub fn board(engine: &Engine) -> String {
    let mut lines = vec![
        format!(
            "(S)tock - {:>2}    Points: {:>5}{}",
            engine.stock().len(),
            engine.points(),
            if engine.is_cleared() { "    CLEARED!" } else { "" }
        ),
        format!("(W)aste - {}", waste_line(engine)),
        format!(
            "(F)oundations {}",
            cells(FoundationId::ALL.iter().map(|id| format!("[{}]", id.index() + 1)))
        ),
        format!(
            "{:14}{}",
            "",
            cells(FoundationId::ALL.iter().map(|&id| {
                engine
                    .foundation_top(id)
                    .map_or_else(|| "Emp".to_string(), |card| card.to_string())
            }))
        ),
        String::new(),
        "Tableaus".to_string(),
        cells(TableauId::ALL.iter().map(|id| format!("[{}]", id.index() + 1))),
    ];

    let rows = engine.tableaus().iter().map(|t| t.len()).max().unwrap_or(0);
    for row in 0..rows {
        lines.push(cells(TableauId::ALL.iter().map(|&id| {
            let tableau = engine.tableau(id);
            match tableau.cards().get(row) {
                Some(_) if tableau.is_hidden(row) => HIDDEN.to_string(),
                Some(card) => card.to_string(),
                None => String::new(),
            }
        })));
    }

    finish(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, DrawMode};

    fn ordered_game() -> Engine {
        Engine::with_deck(DrawMode::One, Deck::generate(false)).unwrap()
    }

    #[test]
    fn test_plain_layout() {
        let text = plain(&ordered_game());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Stock Count: 24");
        assert_eq!(lines[1], "Waste: ");
        assert_eq!(lines[2], "Tableau 1: A♥");
        assert_eq!(lines[3], "Tableau 2: 3♥ XX");
        assert_eq!(lines[9], "Foundation 1: Empty");
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn test_waste_line_shows_visible_only() {
        let mut engine = ordered_game();
        engine.draw_from_stock();
        engine.draw_from_stock();
        // Stock starts at card 28: 3♣ then 4♣.
        assert_eq!(waste_line(&engine), "4♣, 3♣");
    }

    #[test]
    fn test_board_hides_face_down_cards() {
        let text = board(&ordered_game());
        assert!(text.contains("(S)tock - 24"));
        assert!(text.contains("Emp"));
        assert!(text.contains(HIDDEN));
        assert!(text.contains("A♥"));
        // Hidden cards are never printed face up: 2♥ is face down in column 2.
        assert!(!text.contains("2♥"));
    }

    #[test]
    fn test_board_layout() {
        let text = board(&ordered_game());
        assert!(text.ends_with('\n'));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "(S)tock - 24    Points:     0");
        assert_eq!(lines[2], "(F)oundations    [1]   [2]   [3]   [4]");
        assert_eq!(lines[3], format!("{}{}", " ".repeat(14), "   Emp".repeat(4)));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Tableaus");
        assert_eq!(lines[6], "   [1]   [2]   [3]   [4]   [5]   [6]   [7]");
        assert_eq!(lines[7], format!("    A♥{}", "    XX".repeat(6)));
        assert_eq!(lines[8], format!("{}    3♥{}", " ".repeat(6), "    XX".repeat(5)));
        // Seven rows for the deepest column.
        assert_eq!(lines.len(), 14);
    }
}
