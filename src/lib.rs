//! Search and cup-bracket core of the football league back-office.
//!
//! Two independent, pure components:
//!
//! - [`filter`]: free-text and date-range filtering over any collection of
//!   [`Fields`] (JSON-shaped [`Record`]s or your own structs);
//! - [`summarize`]: per-round played/total counts of a cup bracket, plus
//!   [`winner_of`] for the winner stored on a played match.
//!
//! [`AdminConsole`] wraps both behind an explicit [`Session`].

pub use console::AdminConsole;
pub use error::{LeagueError, Result};
pub use league::bracket::{champion, summarize, summarize_rounds, winner_of, winners};
pub use league::search::{count, filter, filter_cloned, Matcher};
pub use model::*;

mod console;
mod error;
mod league;
pub mod model;
