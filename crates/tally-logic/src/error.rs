//! Error type shared by every scoring operation

use thiserror::Error;

use crate::state::MatchStatus;

/// Validation failures raised by the scoring engine.
///
/// Every variant is recoverable by the caller: the operation that produced it
/// was rejected as a whole and the match it was invoked on is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    #[error("winner `{0}` is not part of this match")]
    InvalidWinner(String),

    #[error("tile count {input:?} for player {player} is not a whole number of tiles")]
    InvalidTileCount { player: String, input: String },

    #[error("a match needs at least {required} players, got {found}")]
    InsufficientPlayers { required: usize, found: usize },

    #[error("a match allows at most {allowed} players, got {found}")]
    TooManyPlayers { allowed: usize, found: usize },

    #[error("cannot {action} while the match is {status}")]
    InvalidMatchStatus {
        action: &'static str,
        status: MatchStatus,
    },

    #[error("player `{0}` is not part of this match")]
    UnknownPlayer(String),

    #[error("expected {expected} recorded rounds but the match has {found}")]
    StaleRound { expected: usize, found: usize },

    #[error("score arithmetic overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = TallyError::InvalidTileCount {
            player: "p-1".to_string(),
            input: "ten".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "tile count \"ten\" for player p-1 is not a whole number of tiles"
        );

        let err = TallyError::InvalidMatchStatus {
            action: "record a round",
            status: MatchStatus::Setup,
        };
        assert_eq!(err.to_string(), "cannot record a round while the match is setup");
    }
}
