// src/board.rs
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ParseBoardError;

// --- Constants ---
pub const BOARD_SIZE: usize = 9;
const EMPTY_CELL: char = '.';

/// Starting position, row 0 first. Uppercase pieces belong to player 1.
pub const INITIAL_LAYOUT: [&str; BOARD_SIZE] = [
    "LCAOROACL",
    ".F.....T.",
    "PPPPPPPPP",
    ".........",
    ".........",
    ".........",
    "ppppppppp",
    ".t.....f.",
    "lcaoroacl",
];

lazy_static! {
    static ref INITIAL_BOARD: Board =
        Board::from_rows(&INITIAL_LAYOUT).expect("initial layout literal is well-formed");
}

// --- Players and Pieces ---
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Player { One, Two }

impl Player {
    pub fn opponent(&self) -> Player {
        match self { Player::One => Player::Two, Player::Two => Player::One }
    }

    /// Forward row step: player 1 moves toward row 8, player 2 toward row 0.
    pub fn direction(&self) -> i8 {
        match self { Player::One => 1, Player::Two => -1 }
    }

    pub fn number(&self) -> u8 {
        match self { Player::One => 1, Player::Two => 2 }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    King, Rook, Pawn, Lance, Knight, SilverGeneral, GoldGeneral, Bishop,
    PromotedRook, PromotedBishop,
}

impl Kind {
    pub const ALL: [Kind; 10] = [
        Kind::King, Kind::Rook, Kind::Pawn, Kind::Lance, Kind::Knight,
        Kind::SilverGeneral, Kind::GoldGeneral, Kind::Bishop,
        Kind::PromotedRook, Kind::PromotedBishop,
    ];

    /// Player 1 letter for this kind.
    pub fn symbol(&self) -> char {
        match self {
            Kind::King => 'R', Kind::Rook => 'T', Kind::Pawn => 'P', Kind::Lance => 'L',
            Kind::Knight => 'C', Kind::SilverGeneral => 'A', Kind::GoldGeneral => 'O',
            Kind::Bishop => 'F', Kind::PromotedRook => 'D', Kind::PromotedBishop => 'H',
        }
    }

    fn from_symbol(c: char) -> Option<Kind> {
        let kind = match c.to_ascii_uppercase() {
            'R' => Kind::King, 'T' => Kind::Rook, 'P' => Kind::Pawn, 'L' => Kind::Lance,
            'C' => Kind::Knight, 'A' => Kind::SilverGeneral, 'O' => Kind::GoldGeneral,
            'F' => Kind::Bishop, 'D' => Kind::PromotedRook, 'H' => Kind::PromotedBishop,
            _ => return None,
        };
        Some(kind)
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: Kind,
    pub owner: Player,
}

impl Piece {
    pub fn new(kind: Kind, owner: Player) -> Self { Piece { kind, owner } }

    pub fn from_char(c: char) -> Option<Self> {
        if !c.is_ascii_alphabetic() { return None; }
        let owner = if c.is_ascii_uppercase() { Player::One } else { Player::Two };
        Kind::from_symbol(c).map(|kind| Piece::new(kind, owner))
    }

    pub fn to_char(&self) -> char {
        let symbol = self.kind.symbol();
        match self.owner {
            Player::One => symbol,
            Player::Two => symbol.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// --- Positions ---
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Returns `None` for coordinates outside the 9x9 grid.
    pub fn new(row: i8, col: i8) -> Option<Self> {
        let in_range = |v: i8| (0..BOARD_SIZE as i8).contains(&v);
        if in_range(row) && in_range(col) {
            Some(Position { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    pub fn offset(&self, dr: i8, dc: i8) -> Option<Position> {
        Position::new(self.row as i8 + dr, self.col as i8 + dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// --- Board ---
/// A 9x9 grid of optional pieces. Boards are values: every mutation returns
/// a fresh copy and leaves the receiver untouched.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self { Board::empty() }
}

impl Board {
    pub fn empty() -> Self {
        Board { cells: [[None; BOARD_SIZE]; BOARD_SIZE] }
    }

    pub fn initial() -> Self {
        *INITIAL_BOARD
    }

    /// Parses nine rows of nine letters, `.` marking an empty cell.
    pub fn from_rows(rows: &[&str]) -> Result<Self, ParseBoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount(rows.len()));
        }
        let mut board = Board::empty();
        for (r, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength { row: r, len: chars.len() });
            }
            for (c, ch) in chars.into_iter().enumerate() {
                if ch == EMPTY_CELL { continue; }
                let piece = Piece::from_char(ch)
                    .ok_or(ParseBoardError::UnknownPiece { row: r, col: c, symbol: ch })?;
                board.cells[r][c] = Some(piece);
            }
        }
        Ok(board)
    }

    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Copy of this board with `pos` set to `piece`.
    pub fn with_piece(&self, pos: Position, piece: Option<Piece>) -> Board {
        let mut next = *self;
        next.cells[pos.row as usize][pos.col as usize] = piece;
        next
    }

    /// Copy of this board with the occupant of `from` moved onto `to`.
    /// Whatever stood on `to` is overwritten; `from` is cleared.
    pub fn relocate(&self, from: Position, to: Position) -> Board {
        let mut next = *self;
        next.cells[to.row as usize][to.col as usize] = self.get(from);
        next.cells[from.row as usize][from.col as usize] = None;
        next
    }

    pub fn find_king(&self, player: Player) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.kind == Kind::King && piece.owner == player)
            .map(|(pos, _)| pos)
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| {
                cell.map(|piece| (Position { row: r as u8, col: c as u8 }, piece))
            })
        })
    }

    /// Letter grid, the inverse of `from_rows`.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.map_or(EMPTY_CELL, |p| p.to_char())).collect())
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    0 1 2 3 4 5 6 7 8")?;
        writeln!(f, "  +-------------------+")?;
        for (r, line) in self.rows().iter().enumerate() {
            write!(f, "{} | ", r)?;
            for ch in line.chars() { write!(f, "{} ", ch)?; }
            writeln!(f, "|")?;
        }
        write!(f, "  +-------------------+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position { Position { row, col } }

    #[test]
    fn letter_case_encodes_owner() {
        assert_eq!(Piece::from_char('T'), Some(Piece::new(Kind::Rook, Player::One)));
        assert_eq!(Piece::from_char('t'), Some(Piece::new(Kind::Rook, Player::Two)));
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('.'), None);
        for kind in Kind::ALL {
            for owner in [Player::One, Player::Two] {
                let piece = Piece::new(kind, owner);
                assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
            }
        }
    }

    #[test]
    fn position_rejects_off_board_coordinates() {
        assert_eq!(Position::new(0, 0), Some(pos(0, 0)));
        assert_eq!(Position::new(8, 8), Some(pos(8, 8)));
        assert_eq!(Position::new(-1, 4), None);
        assert_eq!(Position::new(4, 9), None);
        assert_eq!(pos(8, 4).offset(1, 0), None);
        assert_eq!(pos(4, 4).offset(-1, 1), Some(pos(3, 5)));
    }

    #[test]
    fn initial_layout_is_point_symmetric() {
        let board = Board::initial();
        assert_eq!(board.pieces().count(), 40);
        assert_eq!(board.find_king(Player::One), Some(pos(0, 4)));
        assert_eq!(board.find_king(Player::Two), Some(pos(8, 4)));
        for (p, piece) in board.pieces() {
            let mirror = board.get(pos(8 - p.row, 8 - p.col)).expect("mirrored piece");
            assert_eq!(mirror.kind, piece.kind);
            assert_eq!(mirror.owner, piece.owner.opponent());
        }
        assert_eq!(board.rows(), INITIAL_LAYOUT.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn relocate_leaves_original_untouched() {
        let board = Board::initial();
        let moved = board.relocate(pos(2, 0), pos(3, 0));
        assert_eq!(board.get(pos(2, 0)), Some(Piece::new(Kind::Pawn, Player::One)));
        assert_eq!(board.get(pos(3, 0)), None);
        assert_eq!(moved.get(pos(2, 0)), None);
        assert_eq!(moved.get(pos(3, 0)), Some(Piece::new(Kind::Pawn, Player::One)));
    }

    #[test]
    fn from_rows_reports_malformed_input() {
        assert!(matches!(Board::from_rows(&["........."]), Err(ParseBoardError::RowCount(1))));
        let mut rows = INITIAL_LAYOUT;
        rows[3] = "....";
        assert!(matches!(Board::from_rows(&rows), Err(ParseBoardError::RowLength { row: 3, len: 4 })));
        rows[3] = "....z....";
        assert!(matches!(
            Board::from_rows(&rows),
            Err(ParseBoardError::UnknownPiece { row: 3, col: 4, symbol: 'z' })
        ));
    }
}
