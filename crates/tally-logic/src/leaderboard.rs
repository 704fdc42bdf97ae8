//! Ranked view of a match

use serde::Serialize;

use crate::config::MatchConfig;
use crate::roster::Player;
use crate::state::MatchState;

/// A player's result in one recent round
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentResult {
    pub round: u32,
    pub score_change: i64,
    pub is_winner: bool,
}

/// One row of the leaderboard
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub player: Player,
    /// 1-based position
    pub rank: usize,
    pub is_leader: bool,
    /// Oldest first
    pub recent: Vec<RecentResult>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub standings: Vec<Standing>,
}

impl Leaderboard {
    pub fn leader(&self) -> Option<&Standing> {
        self.standings.first().filter(|s| s.is_leader)
    }
}

/// Rank players with the standard recent-form window
pub fn rank(state: &MatchState) -> Leaderboard {
    rank_with_window(state, MatchConfig::standard().recent_window)
}

/// Rank players by running total, highest first.
///
/// Equal totals keep registration order. The top player is only marked as
/// leader while their total is above zero.
pub fn rank_with_window(state: &MatchState, window: usize) -> Leaderboard {
    let mut ordered: Vec<&Player> = state.players().iter().collect();
    // `sort_by` is stable; ties stay in roster order.
    ordered.sort_by(|a, b| b.total_score.cmp(&a.total_score));

    let rounds = state.rounds();
    let recent_rounds = &rounds[rounds.len().saturating_sub(window)..];

    let standings = ordered
        .into_iter()
        .enumerate()
        .map(|(index, player)| Standing {
            player: player.clone(),
            rank: index + 1,
            is_leader: index == 0 && player.total_score > 0,
            recent: recent_rounds
                .iter()
                .filter_map(|round| {
                    round.score_for(player.id).map(|score| RecentResult {
                        round: round.number,
                        score_change: score.score_change,
                        is_winner: score.is_winner,
                    })
                })
                .collect(),
        })
        .collect();

    Leaderboard { standings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::identity::{IdSource, PlayerId, SequentialIds};
    use crate::scoring::RoundScore;
    use crate::state::{MatchStatus, Round};
    use crate::tiles::{TileCounts, TileInput};

    struct Table {
        state: MatchState,
        ids: SequentialIds,
    }

    impl Table {
        fn new(names: &[&str]) -> Self {
            let mut ids = SequentialIds::new();
            let state = MatchState::new()
                .start_match_with(names.iter().copied(), &MatchConfig::standard(), &mut ids)
                .unwrap();
            Self { state, ids }
        }

        fn id(&self, index: usize) -> PlayerId {
            self.state.players()[index].id
        }

        fn play(&mut self, winner: usize, losers: &[(usize, u32)]) {
            let tiles: TileCounts = losers
                .iter()
                .map(|(i, n)| (self.id(*i), TileInput::from(*n)))
                .collect();
            let winner = self.id(winner);
            self.state = self
                .state
                .apply_round_with(winner, &tiles, &mut self.ids, &FixedClock(0))
                .unwrap();
        }
    }

    fn order(board: &Leaderboard) -> Vec<&str> {
        board.standings.iter().map(|s| s.player.name.as_str()).collect()
    }

    #[test]
    fn test_no_leader_before_first_round() {
        let table = Table::new(&["A", "B", "C"]);
        let board = rank(&table.state);

        assert_eq!(order(&board), vec!["A", "B", "C"]);
        assert!(board.standings.iter().all(|s| !s.is_leader));
        assert!(board.leader().is_none());
        assert!(board.standings.iter().all(|s| s.recent.is_empty()));
    }

    #[test]
    fn test_sorted_descending() {
        let mut table = Table::new(&["A", "B", "C"]);
        table.play(0, &[(1, 10), (2, 5)]);
        table.play(1, &[(0, 0), (2, 2)]);

        let board = rank(&table.state);
        assert_eq!(order(&board), vec!["A", "B", "C"]);
        let ranks: Vec<_> = board.standings.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(board.leader().unwrap().player.name, "A");
    }

    #[test]
    fn test_winner_moves_to_top() {
        let mut table = Table::new(&["A", "B", "C"]);
        table.play(2, &[(0, 4), (1, 1)]);

        let board = rank(&table.state);
        assert_eq!(order(&board), vec!["C", "B", "A"]);
        assert!(board.standings[0].is_leader);
    }

    #[test]
    fn test_ties_keep_registration_order() {
        let mut table = Table::new(&["A", "B", "C", "D"]);
        // D wins; A, B and C all lose 3
        table.play(3, &[(0, 3), (1, 3), (2, 3)]);

        let board = rank(&table.state);
        assert_eq!(order(&board), vec!["D", "A", "B", "C"]);
    }

    #[test]
    fn test_zero_sum_tie_at_top_has_no_leader() {
        let mut table = Table::new(&["A", "B"]);
        table.play(0, &[(1, 5)]);
        table.play(1, &[(0, 5)]);

        let board = rank(&table.state);
        assert_eq!(order(&board), vec!["A", "B"]);
        assert!(board.leader().is_none());
    }

    #[test]
    fn test_recent_window_keeps_last_five() {
        let mut table = Table::new(&["A", "B"]);
        for n in 1..=7u32 {
            table.play(0, &[(1, n)]);
        }

        let board = rank(&table.state);
        let loser = board.standings.iter().find(|s| s.player.name == "B").unwrap();
        let rounds: Vec<_> = loser.recent.iter().map(|r| r.round).collect();
        let deltas: Vec<_> = loser.recent.iter().map(|r| r.score_change).collect();

        assert_eq!(rounds, vec![3, 4, 5, 6, 7]);
        assert_eq!(deltas, vec![-3, -4, -5, -6, -7]);
        assert!(loser.recent.iter().all(|r| !r.is_winner));

        let winner = &board.standings[0];
        assert!(winner.recent.iter().all(|r| r.is_winner));
    }

    #[test]
    fn test_custom_window() {
        let mut table = Table::new(&["A", "B"]);
        table.play(0, &[(1, 1)]);
        table.play(1, &[(0, 2)]);
        table.play(0, &[(1, 3)]);

        let board = rank_with_window(&table.state, 2);
        assert!(board.standings.iter().all(|s| s.recent.len() == 2));
        assert_eq!(board.standings[0].recent[0].round, 2);

        let board = rank_with_window(&table.state, 0);
        assert!(board.standings.iter().all(|s| s.recent.is_empty()));
    }

    #[test]
    fn test_round_without_player_skipped_in_window() {
        let table = Table::new(&["A", "B", "C"]);
        let players = table.state.players().to_vec();
        let mut ids = SequentialIds::starting_at(100);
        let partial = Round {
            id: ids.round_id(),
            number: 1,
            timestamp: 0,
            scores: vec![
                RoundScore {
                    player_id: players[1].id,
                    tile_count: 2,
                    score_change: -2,
                    is_winner: false,
                },
                RoundScore {
                    player_id: players[0].id,
                    tile_count: 0,
                    score_change: 2,
                    is_winner: true,
                },
            ],
        };
        let state = MatchState::from_parts(players, vec![partial], MatchStatus::Playing);

        let board = rank(&state);
        let c = board.standings.iter().find(|s| s.player.name == "C").unwrap();
        assert!(c.recent.is_empty());
    }

    #[test]
    fn test_all_negative_has_no_leader() {
        let table = Table::new(&["A", "B"]);
        let mut players = table.state.players().to_vec();
        players[0].total_score = -3;
        players[1].total_score = -1;
        let state = MatchState::from_parts(players, Vec::new(), MatchStatus::Playing);

        let board = rank(&state);
        assert_eq!(order(&board), vec!["B", "A"]);
        assert!(!board.standings[0].is_leader);
    }
}
