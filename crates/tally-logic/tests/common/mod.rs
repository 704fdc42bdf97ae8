//! Shared helpers for integration tests

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use tally_logic::{MatchConfig, MatchState, PlayerId, SequentialIds, TileCounts, TileInput};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, else `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Start a match with reproducible identities
pub fn start(names: &[&str]) -> (MatchState, SequentialIds) {
    let mut ids = SequentialIds::new();
    let state = MatchState::new()
        .start_match_with(names.iter().copied(), &MatchConfig::standard(), &mut ids)
        .expect("valid roster");
    (state, ids)
}

pub fn ids(state: &MatchState) -> Vec<PlayerId> {
    state.players().iter().map(|p| p.id).collect()
}

pub fn tiles(entries: &[(PlayerId, u32)]) -> TileCounts {
    entries
        .iter()
        .map(|(id, n)| (*id, TileInput::from(*n)))
        .collect()
}

pub fn totals(state: &MatchState) -> Vec<i64> {
    state.players().iter().map(|p| p.total_score).collect()
}
