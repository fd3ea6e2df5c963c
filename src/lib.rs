// src/lib.rs
//! Rules engine for a simplified two-player Shogi variant: a 9x9 board,
//! per-piece move generation, automatic promotion and a king-capture
//! game-over check. Captured pieces are never dropped back in.

pub mod board;
pub mod describe;
pub mod error;
pub mod game;
pub mod input;
pub mod movegen;
pub mod promotion;
pub mod record;

pub use board::{Board, Kind, Piece, Player, Position, BOARD_SIZE};
pub use describe::{describe, PieceInfo};
pub use error::{CommandError, MoveError, ParseBoardError, SaveLoadError};
pub use game::{new_game, reset, select_or_move, GameState, Move, Outcome, Phase};
pub use movegen::generate;
pub use promotion::{is_promotion_zone, promote};
pub use record::{save_record, GameRecord, DEFAULT_RECORD_FILENAME};
