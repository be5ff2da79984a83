//! Command parsing for the interactive front end.
//!
//! Input is case-insensitive and whitespace-separated. Pile numbers are
//! 1-based as printed on the board. Every failure is a `CommandError`;
//! parsing never panics.
//!
//! ```
//! use klondike_engine::cli::{Command, Target};
//! use klondike_engine::zones::{FoundationId, TableauId};
//!
//! let cmd = Command::parse("3 f2").unwrap();
//! assert_eq!(
//!     cmd,
//!     Command::FromTableau {
//!         from: TableauId::ALL[2],
//!         to: Target::Foundation(FoundationId::ALL[1]),
//!         depth: None,
//!     }
//! );
//! assert!(Command::parse("9 1").is_err());
//! ```

use std::fmt;

use crate::core::{ConfigError, DrawMode};
use crate::zones::{FoundationId, TableauId, FOUNDATION_COUNT, TABLEAU_COUNT};

/// Where a card or run is going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Tableau(TableauId),
    Foundation(FoundationId),
}

/// A parsed user command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    /// Start over, optionally switching draw mode.
    NewGame(Option<DrawMode>),
    /// Draw from the stock.
    Draw,
    /// Let the greedy policy play until it stops.
    Autoplay,
    /// Move from a tableau. `depth` of `None` moves every face-up card
    /// (tableau targets) or the top card (foundation targets).
    FromTableau {
        from: TableauId,
        to: Target,
        depth: Option<usize>,
    },
    /// Move the front waste card.
    FromWaste(Target),
    /// Move a foundation's top card back to a tableau.
    FromFoundation { from: FoundationId, to: TableauId },
}

/// Why a line of input is not a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Blank line.
    Empty,
    /// First word is not a command.
    Unknown(String),
    /// A required argument is absent.
    MissingArgument(&'static str),
    /// An argument that should be a number is not.
    BadNumber(String),
    /// A pile number outside the board.
    OutOfRange { what: &'static str, value: usize },
    /// New-game draw count other than 1 or 3.
    BadDrawCount(ConfigError),
    /// Extra words after a complete command.
    Trailing(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "enter a command (H for help)"),
            CommandError::Unknown(word) => write!(f, "unknown command {word:?} (H for help)"),
            CommandError::MissingArgument(what) => write!(f, "missing {what}"),
            CommandError::BadNumber(word) => write!(f, "expected a number, got {word:?}"),
            CommandError::OutOfRange { what, value } => write!(f, "no {what} {value}"),
            CommandError::BadDrawCount(err) => write!(f, "{err}"),
            CommandError::Trailing(word) => write!(f, "unexpected {word:?}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::BadDrawCount(err) => Some(err),
            _ => None,
        }
    }
}

/// Uppercased word cursor. `F2` is read as `F` followed by `2`.
struct Words {
    words: Vec<String>,
    pos: usize,
}

impl Words {
    fn new(line: &str) -> Self {
        let mut words = Vec::new();
        for word in line.split_whitespace() {
            let word = word.to_ascii_uppercase();
            match word.strip_prefix(|c: char| c == 'F' || c == 'X') {
                Some(rest) if !rest.is_empty() => {
                    words.push(word[..1].to_string());
                    words.push(rest.to_string());
                }
                _ => words.push(word),
            }
        }
        Self { words, pos: 0 }
    }

    fn next(&mut self) -> Option<&str> {
        let word = self.words.get(self.pos)?;
        self.pos += 1;
        Some(word.as_str())
    }

    fn peek(&self) -> Option<&str> {
        self.words.get(self.pos).map(String::as_str)
    }

    fn number(&mut self, what: &'static str) -> Result<usize, CommandError> {
        let word = self.next().ok_or(CommandError::MissingArgument(what))?;
        word.parse().map_err(|_| CommandError::BadNumber(word.to_string()))
    }

    fn tableau(&mut self) -> Result<TableauId, CommandError> {
        let value = self.number("tableau")?;
        one_based(value, TABLEAU_COUNT)
            .and_then(TableauId::new)
            .ok_or(CommandError::OutOfRange { what: "tableau", value })
    }

    fn foundation(&mut self) -> Result<FoundationId, CommandError> {
        let value = self.number("foundation")?;
        one_based(value, FOUNDATION_COUNT)
            .and_then(FoundationId::new)
            .ok_or(CommandError::OutOfRange { what: "foundation", value })
    }

    fn target(&mut self) -> Result<Target, CommandError> {
        match self.peek() {
            None => Err(CommandError::MissingArgument("destination")),
            Some("F") => {
                self.next();
                Ok(Target::Foundation(self.foundation()?))
            }
            Some(_) => Ok(Target::Tableau(self.tableau()?)),
        }
    }

    fn finish(&mut self) -> Result<(), CommandError> {
        match self.next() {
            None => Ok(()),
            Some(word) => Err(CommandError::Trailing(word.to_string())),
        }
    }
}

fn one_based(value: usize, count: usize) -> Option<usize> {
    (1..=count).contains(&value).then(|| value - 1)
}

impl Command {
    /// Parse one line of input.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = Words::new(line);
        let first = words.peek().ok_or(CommandError::Empty)?.to_string();

        let command = match first.as_str() {
            "H" | "HELP" | "?" => {
                words.next();
                Command::Help
            }
            "Q" | "QUIT" => {
                words.next();
                Command::Quit
            }
            "S" => {
                words.next();
                Command::Draw
            }
            "A" => {
                words.next();
                Command::Autoplay
            }
            "N" => {
                words.next();
                match words.peek() {
                    None => Command::NewGame(None),
                    Some(_) => {
                        let count = words.number("draw count")?;
                        let draw = DrawMode::from_count(count).map_err(CommandError::BadDrawCount)?;
                        Command::NewGame(Some(draw))
                    }
                }
            }
            "W" => {
                words.next();
                Command::FromWaste(words.target()?)
            }
            "F" => {
                words.next();
                let from = words.foundation()?;
                let to = words.tableau()?;
                Command::FromFoundation { from, to }
            }
            word if word.chars().all(|c| c.is_ascii_digit()) => {
                let from = words.tableau()?;
                let to = words.target()?;
                let depth = if words.peek() == Some("X") {
                    words.next();
                    match words.number("run depth")? {
                        0 => return Err(CommandError::OutOfRange { what: "run depth", value: 0 }),
                        n => Some(n),
                    }
                } else {
                    None
                };
                Command::FromTableau { from, to, depth }
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        words.finish()?;
        Ok(command)
    }
}

/// Help screen.
pub const HELP: &str = "\
RULES FOR KLONDIKE SOLITAIRE

Move every card onto the four foundations, one suit per foundation,
Ace up to King. On the tableaus, cards stack in descending rank with
alternating colors: a red 9 goes on a black 10. Only a King may fill
an empty tableau.

COMMANDS
  H            this help
  Q            quit
  N [1|3]      new game, optionally drawing 1 or 3 cards at a time
  S            draw from the stock (recycles the waste when empty)
  <t> <u>      move all face-up cards from tableau t onto tableau u
  <t> <u> x<n> move the top n cards from tableau t onto tableau u
  <t> F<k>     move the top card of tableau t onto foundation k
  W <u>        move the top waste card onto tableau u
  W F<k>       move the top waste card onto foundation k
  F<k> <u>     move the top card of foundation k back onto tableau u
  A            play automatically until no useful move remains
";

#[cfg(test)]
mod tests {
    use super::*;

    fn t(i: usize) -> TableauId {
        TableauId::ALL[i]
    }

    fn f(i: usize) -> FoundationId {
        FoundationId::ALL[i]
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(Command::parse("h"), Ok(Command::Help));
        assert_eq!(Command::parse(" Q "), Ok(Command::Quit));
        assert_eq!(Command::parse("s"), Ok(Command::Draw));
        assert_eq!(Command::parse("a"), Ok(Command::Autoplay));
    }

    #[test]
    fn test_new_game() {
        assert_eq!(Command::parse("n"), Ok(Command::NewGame(None)));
        assert_eq!(Command::parse("N 3"), Ok(Command::NewGame(Some(DrawMode::Three))));
        assert_eq!(
            Command::parse("n 2"),
            Err(CommandError::BadDrawCount(ConfigError::InvalidDrawCount(2)))
        );
        assert_eq!(
            Command::parse("n three"),
            Err(CommandError::BadNumber("THREE".to_string()))
        );
    }

    #[test]
    fn test_tableau_moves() {
        assert_eq!(
            Command::parse("1 7"),
            Ok(Command::FromTableau { from: t(0), to: Target::Tableau(t(6)), depth: None })
        );
        assert_eq!(
            Command::parse("3 5 x2"),
            Ok(Command::FromTableau { from: t(2), to: Target::Tableau(t(4)), depth: Some(2) })
        );
        assert_eq!(
            Command::parse("3 5 X 2"),
            Ok(Command::FromTableau { from: t(2), to: Target::Tableau(t(4)), depth: Some(2) })
        );
        assert_eq!(
            Command::parse("2 F 4"),
            Ok(Command::FromTableau { from: t(1), to: Target::Foundation(f(3)), depth: None })
        );
    }

    #[test]
    fn test_waste_and_foundation_moves() {
        assert_eq!(Command::parse("w 4"), Ok(Command::FromWaste(Target::Tableau(t(3)))));
        assert_eq!(Command::parse("W f1"), Ok(Command::FromWaste(Target::Foundation(f(0)))));
        assert_eq!(
            Command::parse("f2 6"),
            Ok(Command::FromFoundation { from: f(1), to: t(5) })
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(Command::parse("jump"), Err(CommandError::Unknown("JUMP".to_string())));
        assert_eq!(Command::parse("w"), Err(CommandError::MissingArgument("destination")));
        assert_eq!(Command::parse("f1"), Err(CommandError::MissingArgument("tableau")));
        assert_eq!(
            Command::parse("8 1"),
            Err(CommandError::OutOfRange { what: "tableau", value: 8 })
        );
        assert_eq!(
            Command::parse("0 1"),
            Err(CommandError::OutOfRange { what: "tableau", value: 0 })
        );
        assert_eq!(
            Command::parse("1 f5"),
            Err(CommandError::OutOfRange { what: "foundation", value: 5 })
        );
        assert_eq!(
            Command::parse("1 2 x0"),
            Err(CommandError::OutOfRange { what: "run depth", value: 0 })
        );
        assert_eq!(Command::parse("s now"), Err(CommandError::Trailing("NOW".to_string())));
        assert_eq!(
            Command::parse("1 x"),
            Err(CommandError::BadNumber("X".to_string()))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = Command::parse("9 1").unwrap_err();
        assert_eq!(err.to_string(), "no tableau 9");

        let err = Command::parse("n 5").unwrap_err();
        assert!(std::error::Error::source(&err).is_some());

        // Counts past u8 are reported as typed, not clamped.
        let err = Command::parse("n 300").unwrap_err();
        assert_eq!(err, CommandError::BadDrawCount(ConfigError::InvalidDrawCount(300)));
        assert_eq!(err.to_string(), "draw count must be 1 or 3, got 300");
    }
}
