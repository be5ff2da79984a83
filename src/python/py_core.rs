//! Card and move bindings for Python.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::Card;
use crate::rules::Move;
use crate::zones::{FoundationId, TableauId};

pub(crate) fn tableau_id(index: usize) -> PyResult<TableauId> {
    TableauId::new(index).ok_or_else(|| PyValueError::new_err(format!("no tableau {index}")))
}

pub(crate) fn foundation_id(index: usize) -> PyResult<FoundationId> {
    FoundationId::new(index).ok_or_else(|| PyValueError::new_err(format!("no foundation {index}")))
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Parse a card such as "10♦", "QS" or "th".
    #[new]
    fn new(text: &str) -> PyResult<Self> {
        Card::from_str(text)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Rank in 1..=13.
    #[getter]
    fn rank(&self) -> u8 {
        self.0.rank().value()
    }

    /// Suit name, e.g. "Heart".
    #[getter]
    fn suit(&self) -> String {
        format!("{:?}", self.0.suit())
    }

    #[getter]
    fn is_red(&self) -> bool {
        self.0.color() == crate::core::Color::Red
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        hash_of(&self.0)
    }
}

/// Python wrapper for Move.
///
/// Pile indices are 0-based.
#[pyclass(name = "Move")]
#[derive(Clone, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    #[staticmethod]
    fn draw() -> Self {
        Self(Move::Draw)
    }

    #[staticmethod]
    fn tableau_run(from: usize, depth: usize, to: usize) -> PyResult<Self> {
        Ok(Self(Move::TableauRun {
            from: tableau_id(from)?,
            depth,
            to: tableau_id(to)?,
        }))
    }

    #[staticmethod]
    fn whole_tableau(from: usize, to: usize) -> PyResult<Self> {
        Ok(Self(Move::WholeTableau {
            from: tableau_id(from)?,
            to: tableau_id(to)?,
        }))
    }

    #[staticmethod]
    fn tableau_to_foundation(from: usize, to: usize) -> PyResult<Self> {
        Ok(Self(Move::TableauToFoundation {
            from: tableau_id(from)?,
            to: foundation_id(to)?,
        }))
    }

    #[staticmethod]
    fn waste_to_tableau(to: usize) -> PyResult<Self> {
        Ok(Self(Move::WasteToTableau { to: tableau_id(to)? }))
    }

    #[staticmethod]
    fn waste_to_foundation(to: usize) -> PyResult<Self> {
        Ok(Self(Move::WasteToFoundation { to: foundation_id(to)? }))
    }

    #[staticmethod]
    fn foundation_to_tableau(from: usize, to: usize) -> PyResult<Self> {
        Ok(Self(Move::FoundationToTableau {
            from: foundation_id(from)?,
            to: tableau_id(to)?,
        }))
    }

    fn is_to_foundation(&self) -> bool {
        self.0.is_to_foundation()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Move({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        hash_of(&self.0)
    }
}
