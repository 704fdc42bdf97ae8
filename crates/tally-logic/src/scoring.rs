//! Round scoring rule
//!
//! Losers pay one point per tile left in their rack; the winner collects
//! everything the losers paid. A round is therefore always zero-sum.

use serde::{Deserialize, Serialize};

use crate::config::MIN_PLAYERS;
use crate::error::{Result, TallyError};
use crate::identity::PlayerId;
use crate::roster::Player;
use crate::tiles::TileCounts;
use crate::tile_penalty;

/// One player's line in a round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundScore {
    pub player_id: PlayerId,
    /// Tiles left at the end of the round (always 0 for the winner)
    pub tile_count: u32,
    pub score_change: i64,
    pub is_winner: bool,
}

/// Score a finished round
///
/// # Arguments
/// * `roster` - Every player in the match, in registration order
/// * `winner` - The player who went out
/// * `tile_counts` - Tiles left per loser; a loser without an entry had none
///
/// # Returns
/// One score per loser in roster order, followed by the winner's score
pub fn compute_round(
    roster: &[Player],
    winner: PlayerId,
    tile_counts: &TileCounts,
) -> Result<Vec<RoundScore>> {
    if roster.len() < MIN_PLAYERS {
        return Err(TallyError::InsufficientPlayers {
            required: MIN_PLAYERS,
            found: roster.len(),
        });
    }

    if !roster.iter().any(|p| p.id == winner) {
        return Err(TallyError::InvalidWinner(winner.to_string()));
    }

    if let Some(stray) = tile_counts
        .keys()
        .find(|id| !roster.iter().any(|p| p.id == **id))
    {
        return Err(TallyError::UnknownPlayer(stray.to_string()));
    }

    // The winner's entry is not scored, but it still has to be well-formed.
    if let Some((id, input)) = tile_counts
        .iter()
        .find(|(_, input)| input.magnitude().is_none())
    {
        return Err(TallyError::InvalidTileCount {
            player: id.to_string(),
            input: input.to_string(),
        });
    }

    let mut scores = Vec::with_capacity(roster.len());
    let mut winner_gain = 0i64;

    for player in roster.iter().filter(|p| p.id != winner) {
        let tile_count = match tile_counts.get(&player.id) {
            Some(input) => input.magnitude().ok_or_else(|| TallyError::InvalidTileCount {
                player: player.id.to_string(),
                input: input.to_string(),
            })?,
            None => 0,
        };

        let penalty = tile_penalty(tile_count);
        winner_gain += penalty.abs();

        scores.push(RoundScore {
            player_id: player.id,
            tile_count,
            score_change: penalty,
            is_winner: false,
        });
    }

    scores.push(RoundScore {
        player_id: winner,
        tile_count: 0,
        score_change: winner_gain,
        is_winner: true,
    });

    Ok(scores)
}
