//! Raw tile-count input as typed by the user
//!
//! The score form submits whatever the field holds: a JSON number, a numeric
//! string, or an empty string for an untouched field. Text that is not a
//! whole number is rejected here rather than quietly scored as zero.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};
use crate::identity::PlayerId;

/// Tile counts keyed by the losing player's identity
pub type TileCounts = HashMap<PlayerId, TileInput>;

/// One tile-count field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TileInput {
    Count(i64),
    Number(f64),
    Text(String),
}

impl TileInput {
    /// Number of tiles left, as a non-negative magnitude.
    ///
    /// Negative entries are folded to their absolute value. Blank text counts
    /// as zero. Returns `None` for anything that is not a whole number or does
    /// not fit in a `u32`.
    pub fn magnitude(&self) -> Option<u32> {
        match self {
            TileInput::Count(n) => u32::try_from(n.unsigned_abs()).ok(),
            TileInput::Number(x) => {
                if !x.is_finite() || x.fract() != 0.0 || x.abs() > f64::from(u32::MAX) {
                    return None;
                }
                Some(x.abs() as u32)
            }
            TileInput::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Some(0);
                }
                let n: i64 = text.parse().ok()?;
                u32::try_from(n.unsigned_abs()).ok()
            }
        }
    }
}

impl fmt::Display for TileInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileInput::Count(n) => write!(f, "{}", n),
            TileInput::Number(x) => write!(f, "{}", x),
            TileInput::Text(text) => f.write_str(text),
        }
    }
}

impl From<u32> for TileInput {
    fn from(count: u32) -> Self {
        TileInput::Count(i64::from(count))
    }
}

impl From<i64> for TileInput {
    fn from(count: i64) -> Self {
        TileInput::Count(count)
    }
}

impl From<&str> for TileInput {
    fn from(text: &str) -> Self {
        TileInput::Text(text.to_string())
    }
}

impl From<String> for TileInput {
    fn from(text: String) -> Self {
        TileInput::Text(text)
    }
}

/// Resolve tile counts keyed by identity text (as they arrive from a form)
///
/// A key that is not a valid identity fails with `UnknownPlayer`.
pub fn parse_tile_counts<K, I>(raw: I) -> Result<TileCounts>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, TileInput)>,
{
    raw.into_iter()
        .map(|(key, input)| -> Result<(PlayerId, TileInput)> {
            let key = key.as_ref();
            let id = key
                .parse::<PlayerId>()
                .map_err(|_| TallyError::UnknownPlayer(key.to_string()))?;
            Ok((id, input))
        })
        .collect()
}

/// Resolve the winner's identity text
pub fn parse_winner(raw: &str) -> Result<PlayerId> {
    raw.parse()
        .map_err(|_| TallyError::InvalidWinner(raw.to_string()))
}
