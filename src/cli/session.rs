//! Interactive session: one engine plus the command loop state.

use crate::core::{DrawMode, GameRng, KlondikeConfig};
use crate::playout::{GreedyPolicy, Playout, PlayoutConfig};
use crate::rules::{Engine, Move, StockAction};

use super::command::{Command, Target, HELP};

/// Result of executing one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep going, optionally telling the player something.
    Continue { message: Option<String> },
    /// Leave the session.
    Quit,
}

impl Outcome {
    fn message(text: impl Into<String>) -> Self {
        Outcome::Continue {
            message: Some(text.into()),
        }
    }

    fn silent() -> Self {
        Outcome::Continue { message: None }
    }
}

/// A sequence of games played at one terminal.
///
/// Each new game is seeded from the session RNG, so a session started
/// with a fixed seed replays identically.
pub struct Session {
    engine: Engine,
    rng: GameRng,
    playout: Playout,
}

impl Session {
    /// Start a session and deal its first game.
    #[must_use]
    pub fn new(config: &KlondikeConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let engine = Self::deal(config.draw, &mut rng);
        Self {
            engine,
            rng,
            playout: Playout::new(PlayoutConfig::default()),
        }
    }

    /// Start a session on an already dealt game. Later games are seeded
    /// from `config` as in [`Session::new`].
    #[must_use]
    pub fn with_engine(engine: Engine, config: &KlondikeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            engine,
            rng,
            playout: Playout::new(PlayoutConfig::default()),
        }
    }

    fn deal(draw: DrawMode, rng: &mut GameRng) -> Engine {
        let seed = rng.next_seed();
        log::info!("new game: draw {} seed {}", draw.count(), seed);
        Engine::from_config(&KlondikeConfig::new().with_draw(draw).with_seed(seed))
    }

    /// The current game.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Parse and execute one line of input.
    pub fn execute_line(&mut self, line: &str) -> Outcome {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(err) => Outcome::message(err.to_string()),
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Help => Outcome::message(HELP),
            Command::Quit => Outcome::Quit,
            Command::NewGame(draw) => {
                let draw = draw.unwrap_or(self.engine.draw_mode());
                self.engine = Self::deal(draw, &mut self.rng);
                Outcome::silent()
            }
            Command::Draw => match self.engine.draw_from_stock() {
                StockAction::Empty => Outcome::message("stock and waste are empty"),
                StockAction::Recycled(_) => Outcome::message("waste turned back into stock"),
                StockAction::Drawn(_) => Outcome::silent(),
            },
            Command::Autoplay => {
                let mut rng = self.rng.fork();
                let result = self.playout.run(&mut self.engine, &GreedyPolicy, &mut rng);
                Outcome::message(format!(
                    "autoplay: {:?} after {} moves",
                    result.outcome, result.moves_played
                ))
            }
            Command::FromTableau { from, to, depth } => {
                let mv = match (to, depth) {
                    (Target::Tableau(to), None) => Move::WholeTableau { from, to },
                    (Target::Tableau(to), Some(depth)) => Move::TableauRun { from, depth, to },
                    (Target::Foundation(to), None | Some(1)) => {
                        Move::TableauToFoundation { from, to }
                    }
                    (Target::Foundation(_), Some(_)) => {
                        return Outcome::message("only one card at a time goes to a foundation");
                    }
                };
                self.play(mv)
            }
            Command::FromWaste(Target::Tableau(to)) => self.play(Move::WasteToTableau { to }),
            Command::FromWaste(Target::Foundation(to)) => {
                self.play(Move::WasteToFoundation { to })
            }
            Command::FromFoundation { from, to } => {
                self.play(Move::FoundationToTableau { from, to })
            }
        }
    }

    fn play(&mut self, mv: Move) -> Outcome {
        if !self.engine.apply(mv) {
            return Outcome::message(format!("illegal move: {mv}"));
        }
        if self.engine.is_cleared() {
            return Outcome::message(format!(
                "Congratulations, game cleared with {} points!",
                self.engine.points()
            ));
        }
        if !self.engine.has_legal_move() {
            log::info!("no legal moves after {mv}");
            return Outcome::message("no legal moves left; N for a new game");
        }
        Outcome::silent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> Session {
        Session::new(&KlondikeConfig::new().with_seed(seed))
    }

    #[test]
    fn test_seeded_sessions_match() {
        assert_eq!(session(4).engine(), session(4).engine());
    }

    #[test]
    fn test_quit_and_help() {
        let mut s = session(1);
        assert_eq!(s.execute_line("q"), Outcome::Quit);
        assert!(matches!(
            s.execute_line("h"),
            Outcome::Continue { message: Some(text) } if text.contains("COMMANDS")
        ));
    }

    #[test]
    fn test_bad_input_reports_error() {
        let mut s = session(1);
        let before = s.engine().clone();
        assert_eq!(
            s.execute_line("9 1"),
            Outcome::Continue { message: Some("no tableau 9".to_string()) }
        );
        assert_eq!(s.engine(), &before);
    }

    #[test]
    fn test_draw_and_new_game() {
        let mut s = session(2);
        assert_eq!(s.execute_line("s"), Outcome::Continue { message: None });
        assert_eq!(s.engine().waste().len(), 1);

        s.execute_line("n 3");
        assert_eq!(s.engine().draw_mode(), DrawMode::Three);
        assert!(s.engine().waste().is_empty());

        s.execute_line("n");
        assert_eq!(s.engine().draw_mode(), DrawMode::Three);
    }

    #[test]
    fn test_with_engine_keeps_the_given_game() {
        let engine = Engine::with_draw(DrawMode::Three);
        let config = KlondikeConfig::new().with_draw(DrawMode::Three).with_seed(8);
        let mut s = Session::with_engine(engine.clone(), &config);
        assert_eq!(s.engine(), &engine);

        // The next deal comes from the session seed, as in a fresh session.
        s.execute_line("n");
        assert_eq!(s.engine(), Session::new(&config).engine());
    }

    #[test]
    fn test_multi_card_to_foundation_rejected() {
        let mut s = session(3);
        let before = s.engine().clone();
        let outcome = s.execute_line("1 f1 x2");
        assert!(matches!(outcome, Outcome::Continue { message: Some(_) }));
        assert_eq!(s.engine(), &before);
    }
}
