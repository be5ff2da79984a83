//! Terminal front end.
//!
//! - `command`: parse a line of input into a `Command`
//! - `session`: execute commands against an `Engine`
//!
//! The engine never sees user input; pile numbers are range-checked here
//! and converted to `TableauId` / `FoundationId` before any move is made.

pub mod command;
pub mod session;

pub use command::{Command, CommandError, Target, HELP};
pub use session::{Outcome, Session};
