//! Typed pile indices.
//!
//! Engine operations take `TableauId` / `FoundationId` rather than raw
//! integers. The constructors are the only range check; once a caller
//! holds an id, every engine operation can index with it directly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Tableau column index in `0..7`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TableauId(u8);

impl TableauId {
    /// All tableau ids, left to right.
    pub const ALL: [TableauId; TABLEAU_COUNT] = [
        TableauId(0),
        TableauId(1),
        TableauId(2),
        TableauId(3),
        TableauId(4),
        TableauId(5),
        TableauId(6),
    ];

    /// Create a tableau id, returning `None` outside `0..7`.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < TABLEAU_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Zero-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TableauId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0 + 1)
    }
}

impl TryFrom<u8> for TableauId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as usize).ok_or_else(|| format!("tableau index out of range: {value}"))
    }
}

impl From<TableauId> for u8 {
    fn from(id: TableauId) -> u8 {
        id.0
    }
}

/// Foundation pile index in `0..4`.
///
/// Foundations are slots, not suits: any foundation accepts any Ace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FoundationId(u8);

impl FoundationId {
    /// All foundation ids, left to right.
    pub const ALL: [FoundationId; FOUNDATION_COUNT] =
        [FoundationId(0), FoundationId(1), FoundationId(2), FoundationId(3)];

    /// Create a foundation id, returning `None` outside `0..4`.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < FOUNDATION_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Zero-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FoundationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0 + 1)
    }
}

impl TryFrom<u8> for FoundationId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as usize).ok_or_else(|| format!("foundation index out of range: {value}"))
    }
}

impl From<FoundationId> for u8 {
    fn from(id: FoundationId) -> u8 {
        id.0
    }
}
