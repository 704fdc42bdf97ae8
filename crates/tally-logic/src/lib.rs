//! Tally Logic
//!
//! Scoring engine for a tile-game score tracker: players register for a
//! match, every round records a winner and the tiles left in each loser's
//! rack, and the engine keeps zero-sum running totals, a leaderboard and the
//! round history. This crate is compiled to:
//! - Native (for tests and embedding)
//! - WASM (for the browser scoreboard)

mod clock;
mod config;
mod error;
mod history;
mod identity;
mod leaderboard;
mod palette;
mod roster;
mod scoring;
mod state;
mod tiles;

#[cfg(feature = "wasm")]
mod wasm;

pub use clock::{Clock, FixedClock, SteppingClock, SystemClock};
pub use config::{MatchConfig, MIN_PLAYERS};
pub use error::{Result, TallyError};
pub use history::{history, history_newest_first, RoundView, ScoreLine};
pub use identity::{IdSource, PlayerId, RandomIds, RoundId, SequentialIds};
pub use leaderboard::{rank, rank_with_window, Leaderboard, RecentResult, Standing};
pub use palette::{Accent, PALETTE};
pub use roster::{register, Player, PlayerDraft};
pub use scoring::{compute_round, RoundScore};
pub use state::{MatchState, MatchStatus, Round};
pub use tiles::{parse_tile_counts, parse_winner, TileCounts, TileInput};

/// Points a loser gives up for the tiles left in their rack
pub fn tile_penalty(tile_count: u32) -> i64 {
    -i64::from(tile_count)
}
