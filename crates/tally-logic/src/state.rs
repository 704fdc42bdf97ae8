//! Match state and its transitions
//!
//! A `MatchState` is a value. Every transition borrows the current state and
//! returns the next one, so a rejected transition leaves the caller holding
//! exactly what it had before.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::MatchConfig;
use crate::error::{Result, TallyError};
use crate::identity::{IdSource, PlayerId, RandomIds, RoundId};
use crate::roster::{register, Player, PlayerDraft};
use crate::scoring::{compute_round, RoundScore};
use crate::tiles::TileCounts;

const START_MATCH: &str = "start a match";
const RECORD_ROUND: &str = "record a round";
const FINISH_MATCH: &str = "finish the match";

/// Match lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchStatus {
    #[default]
    Setup,
    Playing,
    Finished,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchStatus::Setup => "setup",
            MatchStatus::Playing => "playing",
            MatchStatus::Finished => "finished",
        })
    }
}

/// A recorded round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: RoundId,
    /// 1-based sequence number
    pub number: u32,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub scores: Vec<RoundScore>,
}

impl Round {
    pub fn score_for(&self, player: PlayerId) -> Option<&RoundScore> {
        self.scores.iter().find(|s| s.player_id == player)
    }

    pub fn winner(&self) -> Option<&RoundScore> {
        self.scores.iter().find(|s| s.is_winner)
    }
}

/// Roster, recorded rounds and running totals of one match
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    players: Vec<Player>,
    rounds: Vec<Round>,
    status: MatchStatus,
}

impl MatchState {
    /// An empty match waiting for players
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Register players and start playing with the standard rules
    pub fn start_match<D>(&self, drafts: D) -> Result<Self>
    where
        D: IntoIterator,
        D::Item: Into<PlayerDraft>,
    {
        self.start_match_with(drafts, &MatchConfig::standard(), &mut RandomIds)
    }

    pub fn start_match_with<D>(
        &self,
        drafts: D,
        config: &MatchConfig,
        ids: &mut impl IdSource,
    ) -> Result<Self>
    where
        D: IntoIterator,
        D::Item: Into<PlayerDraft>,
    {
        self.require_status(MatchStatus::Setup, START_MATCH)?;
        let players = register(drafts, config, ids).map_err(|err| rejected(START_MATCH, err))?;

        info!(players = players.len(), "match started");

        Ok(Self {
            players,
            rounds: Vec::new(),
            status: MatchStatus::Playing,
        })
    }

    /// Score a round and append it, stamped with the system clock
    pub fn apply_round(&self, winner: PlayerId, tile_counts: &TileCounts) -> Result<Self> {
        self.apply_round_with(winner, tile_counts, &mut RandomIds, &SystemClock)
    }

    /// Score a round and append it
    ///
    /// The only way running totals change. Each player's total moves by
    /// exactly their delta in the new round.
    pub fn apply_round_with(
        &self,
        winner: PlayerId,
        tile_counts: &TileCounts,
        ids: &mut impl IdSource,
        clock: &impl Clock,
    ) -> Result<Self> {
        self.require_status(MatchStatus::Playing, RECORD_ROUND)?;

        let scores = compute_round(&self.players, winner, tile_counts)
            .map_err(|err| rejected(RECORD_ROUND, err))?;

        let number = u32::try_from(self.rounds.len() + 1).map_err(|_| TallyError::Overflow)?;

        // Timestamps never run backwards, even if the wall clock does.
        let now = clock.now_millis();
        let timestamp = self
            .rounds
            .last()
            .map_or(now, |last| now.max(last.timestamp));

        let mut players = self.players.clone();
        for player in &mut players {
            if let Some(score) = scores.iter().find(|s| s.player_id == player.id) {
                player.total_score = player
                    .total_score
                    .checked_add(score.score_change)
                    .ok_or(TallyError::Overflow)?;
            }
        }

        let gain = scores.iter().find(|s| s.is_winner).map_or(0, |s| s.score_change);
        debug!(round = number, %winner, gain, "round recorded");

        let mut rounds = self.rounds.clone();
        rounds.push(Round {
            id: ids.round_id(),
            number,
            timestamp,
            scores,
        });

        Ok(Self {
            players,
            rounds,
            status: self.status,
        })
    }

    /// `apply_round` guarded by the number of rounds the caller last saw
    ///
    /// Rejects with `StaleRound` if another round was recorded in between.
    pub fn apply_round_expecting(
        &self,
        expected_rounds: usize,
        winner: PlayerId,
        tile_counts: &TileCounts,
    ) -> Result<Self> {
        self.apply_round_expecting_with(
            expected_rounds,
            winner,
            tile_counts,
            &mut RandomIds,
            &SystemClock,
        )
    }

    pub fn apply_round_expecting_with(
        &self,
        expected_rounds: usize,
        winner: PlayerId,
        tile_counts: &TileCounts,
        ids: &mut impl IdSource,
        clock: &impl Clock,
    ) -> Result<Self> {
        if self.rounds.len() != expected_rounds {
            return Err(rejected(
                RECORD_ROUND,
                TallyError::StaleRound {
                    expected: expected_rounds,
                    found: self.rounds.len(),
                },
            ));
        }
        self.apply_round_with(winner, tile_counts, ids, clock)
    }

    /// Close the match. No further rounds can be recorded.
    pub fn finish(&self) -> Result<Self> {
        self.require_status(MatchStatus::Playing, FINISH_MATCH)?;
        info!(rounds = self.rounds.len(), "match finished");
        Ok(Self {
            status: MatchStatus::Finished,
            ..self.clone()
        })
    }

    /// Discard players and rounds, back to an empty setup
    pub fn reset(&self) -> Self {
        info!(
            players = self.players.len(),
            rounds = self.rounds.len(),
            "match reset"
        );
        Self::new()
    }

    fn require_status(&self, expected: MatchStatus, action: &'static str) -> Result<()> {
        if self.status == expected {
            return Ok(());
        }
        Err(rejected(
            action,
            TallyError::InvalidMatchStatus {
                action,
                status: self.status,
            },
        ))
    }

    #[cfg(test)]
    pub(crate) fn from_parts(players: Vec<Player>, rounds: Vec<Round>, status: MatchStatus) -> Self {
        Self {
            players,
            rounds,
            status,
        }
    }
}

fn rejected(action: &str, err: TallyError) -> TallyError {
    warn!(action, error = %err, "transition rejected");
    err
}
