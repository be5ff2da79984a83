//! Python bindings for the Klondike engine.
//!
//! # Quick Start
//!
//! ```python
//! import klondike_engine as kl
//!
//! game = kl.KlondikeGame(draw=1, seed=42)
//! for mv in game.legal_moves():
//!     print(mv)
//!
//! game.apply(kl.Move.draw())
//! print(game.render())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// klondike_engine: Klondike solitaire rules and playouts.
#[pymodule]
fn klondike_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyMove>()?;
    m.add_class::<PyKlondikeGame>()?;

    Ok(())
}
