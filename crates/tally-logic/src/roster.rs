//! Player registration

use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::error::{Result, TallyError};
use crate::identity::{IdSource, PlayerId};
use crate::palette::Accent;

/// A seat on the setup screen, editable until the match starts
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub name: String,
}

impl PlayerDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl From<&str> for PlayerDraft {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PlayerDraft {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A registered player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub accent: Accent,
    pub total_score: i64,
}

/// Turn setup drafts into a roster.
///
/// Names are trimmed and blank seats dropped before the size limits are
/// checked; survivors keep their relative order, which fixes both their
/// accent and their tie-break position on the leaderboard.
pub fn register<D>(drafts: D, config: &MatchConfig, ids: &mut impl IdSource) -> Result<Vec<Player>>
where
    D: IntoIterator,
    D::Item: Into<PlayerDraft>,
{
    let names: Vec<String> = drafts
        .into_iter()
        .map(Into::<PlayerDraft>::into)
        .filter_map(|draft| {
            let name = draft.name.trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect();

    let required = config.required_players();
    if names.len() < required {
        return Err(TallyError::InsufficientPlayers {
            required,
            found: names.len(),
        });
    }
    if names.len() > config.max_players {
        return Err(TallyError::TooManyPlayers {
            allowed: config.max_players,
            found: names.len(),
        });
    }

    Ok(names
        .into_iter()
        .enumerate()
        .map(|(position, name)| Player {
            id: ids.player_id(),
            name,
            accent: Accent::for_position(position),
            total_score: 0,
        })
        .collect())
}
