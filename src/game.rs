// src/game.rs
//! Turn controller: selection, move application and the king-capture check.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::board::{Board, Piece, Player, Position};
use crate::describe::{describe, PieceInfo};
use crate::error::MoveError;
use crate::movegen::generate;
use crate::promotion::{is_promotion_zone, promote};

// --- Move Representation ---
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub player: Player,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "From {} to {}", self.from, self.to)?;
        if let Some(piece) = self.captured {
            write!(f, " - captured: {}", piece)?;
        }
        if self.promoted {
            write!(f, " (promoted)")?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Phase { AwaitingSelection, PieceSelected, GameOver }

/// What an accepted click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Selected(Position),
    Deselected,
    Moved(Move),
    Won(Player),
}

// --- Game State ---
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Player,
    winner: Option<Player>,
    selected: Option<Position>,
    /// Cached destinations of the selected piece; empty when nothing is selected.
    destinations: Vec<Position>,
    history: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self { GameState::new() }
}

impl GameState {
    /// Initial layout, player 1 to move, empty history.
    pub fn new() -> Self {
        GameState::from_board(Board::initial(), Player::One)
    }

    /// Starts a game from an arbitrary position.
    pub fn from_board(board: Board, turn: Player) -> Self {
        GameState { board, turn, winner: None, selected: None, destinations: Vec::new(), history: Vec::new() }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn turn(&self) -> Player { self.turn }
    pub fn winner(&self) -> Option<Player> { self.winner }
    pub fn selected(&self) -> Option<Position> { self.selected }
    pub fn destinations(&self) -> &[Position] { &self.destinations }
    pub fn history(&self) -> &[Move] { &self.history }

    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::GameOver
        } else if self.selected.is_some() {
            Phase::PieceSelected
        } else {
            Phase::AwaitingSelection
        }
    }

    /// Description of the selected piece for the info panel.
    pub fn selected_info(&self) -> Option<&'static PieceInfo> {
        self.selected
            .and_then(|pos| self.board.get(pos))
            .and_then(|piece| describe(piece.kind))
    }

    pub fn status_line(&self) -> String {
        match self.winner {
            Some(winner) => format!("{} won!", winner),
            None => format!("{}'s turn", self.turn),
        }
    }

    /// Handles a click on (`row`, `col`). On `Err` the receiver is the
    /// unchanged state; on `Ok` the returned state replaces it.
    pub fn play(&self, row: i8, col: i8) -> Result<(GameState, Outcome), MoveError> {
        if let Some(winner) = self.winner {
            return Err(MoveError::GameOver(winner));
        }
        let pos = Position::new(row, col).ok_or(MoveError::OutOfBounds(row, col))?;
        match (self.board.get(pos), self.selected) {
            (Some(piece), _) => self.click_piece(pos, piece),
            (None, Some(from)) => self.move_to_empty(from, pos),
            (None, None) => Err(MoveError::NoSelection),
        }
    }

    fn click_piece(&self, pos: Position, piece: Piece) -> Result<(GameState, Outcome), MoveError> {
        if self.selected == Some(pos) {
            return Ok((self.with_selection(None), Outcome::Deselected));
        }
        if piece.owner == self.turn {
            return Ok((self.with_selection(Some(pos)), Outcome::Selected(pos)));
        }
        match self.selected {
            Some(from) if self.destinations.contains(&pos) => self.capture(from, pos),
            Some(_) => Err(MoveError::IllegalDestination(pos)),
            None => Err(MoveError::NotYourPiece(pos)),
        }
    }

    fn move_to_empty(&self, from: Position, to: Position) -> Result<(GameState, Outcome), MoveError> {
        if !self.destinations.contains(&to) {
            return Err(MoveError::IllegalDestination(to));
        }
        self.commit(from, to)
    }

    /// Capturing move. If the opponent's king is among the mover's current
    /// destinations the mover wins on the spot and the capture itself is
    /// not committed.
    fn capture(&self, from: Position, to: Position) -> Result<(GameState, Outcome), MoveError> {
        let king_attacked = self
            .board
            .find_king(self.turn.opponent())
            .map_or(false, |king| self.destinations.contains(&king));
        if king_attacked {
            info!(winner = %self.turn, from = %from, to = %to, "king capture available, game over");
            let mut next = self.with_selection(None);
            next.winner = Some(self.turn);
            return Ok((next, Outcome::Won(self.turn)));
        }
        self.commit(from, to)
    }

    fn commit(&self, from: Position, to: Position) -> Result<(GameState, Outcome), MoveError> {
        let piece = self.board.get(from).ok_or(MoveError::NoSelection)?;
        let captured = self.board.get(to);
        let landed = if is_promotion_zone(to.row, self.turn) { promote(piece, self.turn) } else { piece };
        let promoted = landed != piece;

        let board = self.board.relocate(from, to).with_piece(to, Some(landed));
        let turn = self.turn.opponent();
        let mv = Move { from, to, player: self.turn, captured, promoted };
        info!(player = %self.turn, mv = %mv, "move committed");

        let mut history = self.history.clone();
        history.push(mv);
        let next = GameState { board, turn, winner: None, selected: None, destinations: Vec::new(), history };
        Ok((next, Outcome::Moved(mv)))
    }

    fn with_selection(&self, selected: Option<Position>) -> GameState {
        let destinations = selected
            .and_then(|pos| self.board.get(pos).map(|piece| generate(pos, piece, self.turn, &self.board)))
            .unwrap_or_default();
        GameState { selected, destinations, ..self.clone() }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.status_line())?;
        writeln!(f, "   0  1  2  3  4  5  6  7  8")?;
        for (r, line) in self.board.rows().iter().enumerate() {
            write!(f, "{} ", r)?;
            for (c, ch) in line.chars().enumerate() {
                let here = Position { row: r as u8, col: c as u8 };
                if self.selected == Some(here) {
                    write!(f, "[{}]", ch)?;
                } else if self.destinations.contains(&here) {
                    write!(f, "<{}>", if ch == '.' { '*' } else { ch })?;
                } else {
                    write!(f, " {} ", ch)?;
                }
            }
            writeln!(f)?;
        }
        if let Some(info) = self.selected_info() {
            writeln!(f, "{}: {}", info.name, info.description)?;
        }
        Ok(())
    }
}

// --- Public Entry Points ---

pub fn new_game() -> GameState {
    GameState::new()
}

/// Single entry point for clicks. Rejected input returns an identical copy of `state`.
pub fn select_or_move(state: &GameState, row: i8, col: i8) -> GameState {
    match state.play(row, col) {
        Ok((next, _)) => next,
        Err(e) => {
            debug!(row, col, error = %e, "input rejected");
            state.clone()
        }
    }
}

pub fn reset() -> GameState {
    new_game()
}
