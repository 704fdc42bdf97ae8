//! Match rules configuration

/// Hard floor on roster size: a round needs a winner and at least one loser.
pub const MIN_PLAYERS: usize = 2;

/// Configuration for roster limits and derived views
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    pub min_players: usize,
    pub max_players: usize,
    /// Number of most recent rounds shown per player on the leaderboard
    pub recent_window: usize,
}

impl MatchConfig {
    /// Table rules: 2 to 6 players, last 5 rounds of form
    pub fn standard() -> Self {
        Self {
            min_players: 2,
            max_players: 6,
            recent_window: 5,
        }
    }

    /// Minimum roster size, never below [`MIN_PLAYERS`]
    pub fn required_players(&self) -> usize {
        self.min_players.max(MIN_PLAYERS)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_limits() {
        let config = MatchConfig::standard();
        assert_eq!(config.required_players(), 2);
        assert_eq!(config.max_players, 6);
        assert_eq!(config.recent_window, 5);
    }

    #[test]
    fn test_required_players_has_floor() {
        let config = MatchConfig {
            min_players: 0,
            ..MatchConfig::standard()
        };
        assert_eq!(config.required_players(), MIN_PLAYERS);
    }
}
