//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{DrawMode, GameRng, KlondikeConfig};
use crate::playout::{GreedyPolicy, Playout, PlayoutConfig, RandomPolicy};
use crate::render;
use crate::rules::{Engine, StockAction};

use super::py_core::{foundation_id, tableau_id, PyCard, PyMove};

/// Python wrapper for a Klondike game.
#[pyclass(name = "KlondikeGame")]
pub struct PyKlondikeGame {
    engine: Engine,
}

#[pymethods]
impl PyKlondikeGame {
    /// Deal a new game.
    ///
    /// # Arguments
    /// - draw: Cards turned per stock draw (1 or 3)
    /// - seed: RNG seed for a reproducible deal; random when omitted
    #[new]
    #[pyo3(signature = (draw = 1, seed = None))]
    fn new(draw: u8, seed: Option<u64>) -> PyResult<Self> {
        let draw = DrawMode::try_from(draw).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let mut config = KlondikeConfig::new().with_draw(draw);
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        Ok(Self {
            engine: Engine::from_config(&config),
        })
    }

    /// Draw from the stock. Returns the number of cards drawn or recycled;
    /// 0 when stock and waste are both empty.
    fn draw(&mut self) -> usize {
        match self.engine.draw_from_stock() {
            StockAction::Drawn(n) | StockAction::Recycled(n) => n,
            StockAction::Empty => 0,
        }
    }

    /// Apply a move. Returns False, leaving the game unchanged, if illegal.
    fn apply(&mut self, mv: &PyMove) -> bool {
        self.engine.apply(mv.0)
    }

    fn can_apply(&self, mv: &PyMove) -> bool {
        self.engine.can_apply(mv.0)
    }

    fn legal_moves(&self) -> Vec<PyMove> {
        self.engine.legal_moves().into_iter().map(PyMove).collect()
    }

    /// False once the game is stuck: nothing to draw and no card can move.
    fn has_legal_move(&self) -> bool {
        self.engine.has_legal_move()
    }

    /// Play automatically with the "greedy" or "random" policy.
    ///
    /// Returns the outcome name: "Cleared", "Stuck", "MoveLimit" or "Loop".
    #[pyo3(signature = (policy = "greedy", seed = 0, max_moves = 2000))]
    fn playout(&mut self, policy: &str, seed: u64, max_moves: u32) -> PyResult<String> {
        let playout = Playout::new(PlayoutConfig::default().with_max_moves(max_moves));
        let mut rng = GameRng::new(seed);
        let result = match policy {
            "greedy" => playout.run(&mut self.engine, &GreedyPolicy, &mut rng),
            "random" => playout.run(&mut self.engine, &RandomPolicy, &mut rng),
            other => {
                return Err(PyValueError::new_err(format!("unknown policy {other:?}")));
            }
        };
        Ok(format!("{:?}", result.outcome))
    }

    #[getter]
    fn points(&self) -> i32 {
        self.engine.points()
    }

    #[getter]
    fn cleared(&self) -> bool {
        self.engine.is_cleared()
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.engine.move_count()
    }

    #[getter]
    fn stock_count(&self) -> usize {
        self.engine.stock().len()
    }

    /// Inspectable waste cards, most recent first.
    fn visible_waste(&self) -> Vec<PyCard> {
        self.engine.visible_waste().map(PyCard).collect()
    }

    /// The waste card a tableau move would take, if any.
    fn playable_waste(&self) -> Option<PyCard> {
        self.engine.playable_waste_card().map(PyCard)
    }

    /// Face-up cards of a tableau, bottom first.
    fn tableau(&self, index: usize) -> PyResult<Vec<PyCard>> {
        let tableau = self.engine.tableau(tableau_id(index)?);
        Ok(tableau.face_up().iter().copied().map(PyCard).collect())
    }

    /// Number of face-down cards in a tableau.
    fn hidden_count(&self, index: usize) -> PyResult<usize> {
        Ok(self.engine.tableau(tableau_id(index)?).hidden_depth())
    }

    fn foundation_top(&self, index: usize) -> PyResult<Option<PyCard>> {
        Ok(self.engine.foundation_top(foundation_id(index)?).map(PyCard))
    }

    /// Copy the game for lookahead. O(1).
    fn copy(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }

    /// Render the board; `fancy=False` gives one line per pile.
    #[pyo3(signature = (fancy = true))]
    fn render(&self, fancy: bool) -> String {
        if fancy {
            render::board(&self.engine)
        } else {
            render::plain(&self.engine)
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "KlondikeGame(draw={}, points={}, moves={}, cleared={})",
            self.engine.draw_mode().count(),
            self.engine.points(),
            self.engine.move_count(),
            self.engine.is_cleared()
        )
    }
}
