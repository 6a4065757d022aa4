//! Command parsing and dispatch.
//!
//! One input line becomes a validated [`Command`], and [`execute`] maps
//! each command to its operation against the address book.

pub mod dispatch;
pub mod parser;

pub use dispatch::{execute, Outcome};
pub use parser::{help_text, parse, Command};
