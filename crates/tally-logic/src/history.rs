//! Round-by-round history of a match

use serde::Serialize;

use crate::error::{Result, TallyError};
use crate::identity::{PlayerId, RoundId};
use crate::palette::Accent;
use crate::state::{MatchState, Round};

/// A player's line in a round, with the name resolved from the roster
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreLine {
    pub player_id: PlayerId,
    pub name: String,
    pub accent: Accent,
    pub tile_count: u32,
    pub score_change: i64,
    pub is_winner: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub id: RoundId,
    pub number: u32,
    pub timestamp: i64,
    pub lines: Vec<ScoreLine>,
}

/// Rounds in the order they were played
pub fn history(state: &MatchState) -> Result<Vec<RoundView>> {
    state.rounds().iter().map(|round| view(state, round)).collect()
}

/// Rounds with the most recent first
pub fn history_newest_first(state: &MatchState) -> Result<Vec<RoundView>> {
    state
        .rounds()
        .iter()
        .rev()
        .map(|round| view(state, round))
        .collect()
}

fn view(state: &MatchState, round: &Round) -> Result<RoundView> {
    let lines = round
        .scores
        .iter()
        .map(|score| -> Result<ScoreLine> {
            let player = state
                .player(score.player_id)
                .ok_or_else(|| TallyError::UnknownPlayer(score.player_id.to_string()))?;
            Ok(ScoreLine {
                player_id: score.player_id,
                name: player.name.clone(),
                accent: player.accent,
                tile_count: score.tile_count,
                score_change: score.score_change,
                is_winner: score.is_winner,
            })
        })
        .collect::<Result<Vec<ScoreLine>>>()?;

    Ok(RoundView {
        id: round.id,
        number: round.number,
        timestamp: round.timestamp,
        lines,
    })
}
