// src/error.rs
use std::error::Error;
use std::fmt;
use std::io;

use crate::board::{Player, Position};

// --- Custom Error Types ---

/// Reasons a click is rejected. A rejected click never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds(i8, i8),
    NoSelection,
    NotYourPiece(Position),
    IllegalDestination(Position),
    GameOver(Player),
}
impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds(row, col) => write!(f, "({}, {}) is outside the board", row, col),
            MoveError::NoSelection => write!(f, "No piece is selected."),
            MoveError::NotYourPiece(pos) => write!(f, "The piece at {} does not belong to the player to move.", pos),
            MoveError::IllegalDestination(pos) => write!(f, "The selected piece cannot move to {}.", pos),
            MoveError::GameOver(winner) => write!(f, "The game is over ({} won). Reset to play again.", winner),
        }
    }
}
impl Error for MoveError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    RowCount(usize),
    RowLength { row: usize, len: usize },
    UnknownPiece { row: usize, col: usize, symbol: char },
}
impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::RowCount(n) => write!(f, "expected 9 rows, found {}", n),
            ParseBoardError::RowLength { row, len } => write!(f, "row {} has {} cells, expected 9", row, len),
            ParseBoardError::UnknownPiece { row, col, symbol } => {
                write!(f, "unknown piece letter '{}' at ({}, {})", symbol, row, col)
            }
        }
    }
}
impl Error for ParseBoardError {}

#[derive(Debug)]
pub enum CommandError {
    UnknownCommand(String),
    InvalidArgument(String),
    SaveLoadError(SaveLoadError),
    IoError(io::Error),
}
impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand(cmd) => write!(f, "Unknown command: '{}'. Type 'help' for commands.", cmd),
            CommandError::InvalidArgument(arg) => write!(f, "Invalid argument: '{}'", arg),
            CommandError::SaveLoadError(e) => write!(f, "Record Save Error: {}", e),
            CommandError::IoError(e) => write!(f, "Input/Output error: {}", e),
        }
    }
}
impl Error for CommandError {}

impl From<SaveLoadError> for CommandError {
    fn from(e: SaveLoadError) -> Self { CommandError::SaveLoadError(e) }
}
impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self { CommandError::IoError(e) }
}

#[derive(Debug)]
pub enum SaveLoadError {
    Serialization(serde_json::Error),
    Io(String, io::Error),
}
impl fmt::Display for SaveLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveLoadError::Serialization(e) => write!(f, "Serialization error: {}", e),
            SaveLoadError::Io(file, e) => write!(f, "I/O error with file '{}': {}", file, e),
        }
    }
}
impl Error for SaveLoadError {}
