//! WASM bindings for the browser scoreboard

#![cfg(feature = "wasm")]

use std::collections::HashMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    compute_round, history, history_newest_first, parse_tile_counts, parse_winner, rank,
    MatchState, Player, TallyError, TileCounts, TileInput, PALETTE,
};

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn js_error(err: TallyError) -> JsError {
    JsError::new(&err.to_string())
}

/// Tile counts arrive as `{ [playerId]: number | string }`; `undefined` means none.
fn tile_counts_from_js(value: JsValue) -> Result<TileCounts, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(TileCounts::new());
    }
    let raw: HashMap<String, TileInput> = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Invalid tile counts: {}", e)))?;
    parse_tile_counts(raw).map_err(js_error)
}

/// The live match for one scoreboard
///
/// Each call either replaces the held state with the next one or fails and
/// leaves it as it was.
#[wasm_bindgen]
pub struct Scorekeeper {
    state: MatchState,
}

#[wasm_bindgen]
impl Scorekeeper {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Scorekeeper {
        Scorekeeper {
            state: MatchState::new(),
        }
    }

    /// Start a match from the setup form's names. Returns the new state.
    #[wasm_bindgen(js_name = startMatch)]
    pub fn start_match(&mut self, names: JsValue) -> Result<JsValue, JsError> {
        let names: Vec<String> = serde_wasm_bindgen::from_value(names)
            .map_err(|e| JsError::new(&format!("Invalid player names: {}", e)))?;
        self.state = self.state.start_match(names).map_err(js_error)?;
        to_js(&self.state)
    }

    /// Record a round. Returns the new state.
    #[wasm_bindgen(js_name = applyRound)]
    pub fn apply_round(&mut self, winner_id: &str, tile_counts: JsValue) -> Result<JsValue, JsError> {
        let winner = parse_winner(winner_id).map_err(js_error)?;
        let tile_counts = tile_counts_from_js(tile_counts)?;
        self.state = self.state.apply_round(winner, &tile_counts).map_err(js_error)?;
        to_js(&self.state)
    }

    #[wasm_bindgen(js_name = resetMatch)]
    pub fn reset_match(&mut self) -> Result<JsValue, JsError> {
        self.state = self.state.reset();
        to_js(&self.state)
    }

    #[wasm_bindgen(js_name = finishMatch)]
    pub fn finish_match(&mut self) -> Result<JsValue, JsError> {
        self.state = self.state.finish().map_err(js_error)?;
        to_js(&self.state)
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.state)
    }

    pub fn leaderboard(&self) -> Result<JsValue, JsError> {
        to_js(&rank(&self.state))
    }

    pub fn history(&self) -> Result<JsValue, JsError> {
        to_js(&history(&self.state).map_err(js_error)?)
    }

    #[wasm_bindgen(js_name = historyNewestFirst)]
    pub fn history_newest_first(&self) -> Result<JsValue, JsError> {
        to_js(&history_newest_first(&self.state).map_err(js_error)?)
    }
}

impl Default for Scorekeeper {
    fn default() -> Self {
        Self::new()
    }
}

/// Preview a round's scores without recording it
///
/// # Arguments
/// * `roster_json` - JSON serialized array of players
/// * `winner_id` - Identity of the player who went out
/// * `tile_counts_json` - JSON object mapping player identity to tiles left
///
/// # Returns
/// Array of round scores, losers first
#[wasm_bindgen(js_name = computeRound)]
pub fn compute_round_preview(
    roster_json: &str,
    winner_id: &str,
    tile_counts_json: &str,
) -> Result<JsValue, JsError> {
    let roster: Vec<Player> = serde_json::from_str(roster_json)
        .map_err(|e| JsError::new(&format!("Invalid roster: {}", e)))?;
    let raw: HashMap<String, TileInput> = serde_json::from_str(tile_counts_json)
        .map_err(|e| JsError::new(&format!("Invalid tile counts: {}", e)))?;

    let winner = parse_winner(winner_id).map_err(js_error)?;
    let tile_counts = parse_tile_counts(raw).map_err(js_error)?;
    let scores = compute_round(&roster, winner, &tile_counts).map_err(js_error)?;

    to_js(&scores)
}

#[derive(Serialize)]
struct AccentInfo {
    id: crate::Accent,
    name: &'static str,
    hex: &'static str,
}

/// Accents in the order they are handed out
#[wasm_bindgen(js_name = accentPalette)]
pub fn accent_palette() -> Result<JsValue, JsError> {
    let accents: Vec<AccentInfo> = PALETTE
        .iter()
        .map(|&accent| AccentInfo {
            id: accent,
            name: accent.name(),
            hex: accent.hex(),
        })
        .collect();
    to_js(&accents)
}
