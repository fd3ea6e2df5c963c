// src/record.rs
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::board::{Player, Position};
use crate::error::SaveLoadError;
use crate::game::GameState;

pub const DEFAULT_RECORD_FILENAME: &str = "shogi_record.json";

// --- Game Record Export ---

#[derive(Debug, Serialize)]
pub struct GameRecord {
    pub winner: Option<Player>,
    pub total_moves: usize,
    pub moves: Vec<MoveStat>,
    pub final_board: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MoveStat {
    pub number: usize,
    pub player: Player,
    pub from: Position,
    pub to: Position,
    pub captured: Option<char>, // Letter of the captured piece, owner by case
    pub promoted: bool,
    pub summary: String,
}

impl GameRecord {
    pub fn from_state(state: &GameState) -> Self {
        let moves = state
            .history()
            .iter()
            .enumerate()
            .map(|(i, mv)| MoveStat {
                number: i + 1,
                player: mv.player,
                from: mv.from,
                to: mv.to,
                captured: mv.captured.map(|p| p.to_char()),
                promoted: mv.promoted,
                summary: mv.to_string(),
            })
            .collect();

        GameRecord {
            winner: state.winner(),
            total_moves: state.history().len(),
            moves,
            final_board: state.board().rows(),
        }
    }
}

/// Writes the record of `state` as pretty-printed JSON to `path`.
pub fn save_record(state: &GameState, path: &Path) -> Result<(), SaveLoadError> {
    let record = GameRecord::from_state(state);

    let json_data = serde_json::to_string_pretty(&record)
        .map_err(SaveLoadError::Serialization)?;

    fs::write(path, json_data)
        .map_err(|e| SaveLoadError::Io(path.display().to_string(), e))?;

    Ok(())
}
