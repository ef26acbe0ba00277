//! # neon-arcade-core
//!
//! This crate contains the framework independent parts of the arcade web UI:
//! the page data model, the tournament schedule logic and the swap panel
//! state machine. The presentation layer lives in `neon-arcade-web`.
//!
//! Important types:
//! - [`Game`]: a game page entry as supplied by the host page.
//! - [`RawTournament`]: a tournament with unparsed timestamp strings.
//! - [`Tournament`]: the parsed form of a [`RawTournament`].
//! - [`Category`]: the Live/Upcoming/Past grouping of tournaments.
//! - [`Schedule`]: the category selection over a tournament list.
//! - [`SwapPanel`]: the state machine behind the floating swap widget.

#![recursion_limit = "256"]

pub mod game;
pub mod schedule;
pub mod swap;

pub use game::{Game, PlayLink, RawTournament, Tournament};
pub use schedule::{classify, Buckets, Category, Schedule};
pub use swap::{PanelState, SwapConfig, SwapPanel};

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A tournament timestamp failed to parse. The tournament carrying it is
    /// excluded from the schedule; the rest of the page is unaffected.
    #[error("invalid {field} timestamp: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
