//! Card piles.
//!
//! ## Key Types
//!
//! - `TableauId`, `FoundationId`: range-checked pile indices
//! - `Tableau`: a column with a face-down prefix
//!
//! Stock, waste and foundations are plain ordered sequences owned by the
//! engine; only the tableau carries enough behavior to need its own type.

pub mod pile;
pub mod tableau;

pub use pile::{FoundationId, TableauId, FOUNDATION_COUNT, TABLEAU_COUNT};
pub use tableau::Tableau;
