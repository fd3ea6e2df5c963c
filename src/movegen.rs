// src/movegen.rs
//! Destination generation for a single piece.
//!
//! Offsets are written from player 1's point of view and mirrored through
//! [`Player::direction`], so one table serves both sides.

use crate::board::{Board, Kind, Piece, Player, Position, BOARD_SIZE};

// (dr, dc) offsets; forward-relative tables have dr scaled by the mover's direction
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_JUMPS: [(i8, i8); 2] = [(1, -1), (1, 1)];
const SILVER_STEPS: [(i8, i8); 4] = [(1, -1), (1, 0), (1, 1), (-1, -1)];
const GOLD_STEPS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];
const PAWN_CAPTURES: [(i8, i8); 2] = [(1, -1), (1, 1)];

/// What a candidate destination holds, seen from the acting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target { OffBoard, Empty, Friend, Enemy }

/// True when `occupant` belongs to the opponent of `player`. Empty cells are neither.
pub fn is_enemy(occupant: Option<Piece>, player: Player) -> bool {
    occupant.map_or(false, |piece| piece.owner != player)
}

fn classify(board: &Board, target: Option<Position>, player: Player) -> Target {
    match target {
        None => Target::OffBoard,
        Some(pos) => match board.get(pos) {
            None => Target::Empty,
            Some(piece) if piece.owner == player => Target::Friend,
            Some(_) => Target::Enemy,
        },
    }
}

/// Adds `target` if it is empty or enemy-held. Returns whether a slide may continue past it.
#[inline]
fn add_move(board: &Board, target: Option<Position>, player: Player, moves: &mut Vec<Position>) -> bool {
    match (classify(board, target, player), target) {
        (Target::Empty, Some(pos)) => { moves.push(pos); true }
        (Target::Enemy, Some(pos)) => { moves.push(pos); false } // Capture ends the path
        _ => false,
    }
}

#[inline]
fn slide(board: &Board, from: Position, player: Player, (dr, dc): (i8, i8), moves: &mut Vec<Position>) {
    for i in 1..BOARD_SIZE as i8 {
        if !add_move(board, from.offset(dr * i, dc * i), player, moves) { break; }
    }
}

#[inline]
fn steps(board: &Board, from: Position, player: Player, offsets: &[(i8, i8)], forward: i8, moves: &mut Vec<Position>) {
    for &(dr, dc) in offsets {
        add_move(board, from.offset(dr * forward, dc), player, moves);
    }
}

fn generate_king_moves(board: &Board, from: Position, player: Player, moves: &mut Vec<Position>) {
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 { continue; }
            add_move(board, from.offset(dr, dc), player, moves);
        }
    }
}

/// Forward push only onto an empty cell; diagonal-forward only onto an enemy.
fn generate_pawn_moves(board: &Board, from: Position, player: Player, moves: &mut Vec<Position>) {
    let forward = player.direction();
    if let Some(ahead) = from.offset(forward, 0) {
        if board.get(ahead).is_none() {
            moves.push(ahead);
        }
    }
    for &(dr, dc) in &PAWN_CAPTURES {
        if let Some(target) = from.offset(dr * forward, dc) {
            if is_enemy(board.get(target), player) {
                moves.push(target);
            }
        }
    }
}

/// Legal destinations for `piece` standing on `from`, moving for `player`.
///
/// Pure: `board` is only read. Every returned position lies on the board and
/// never holds one of `player`'s own pieces.
pub fn generate(from: Position, piece: Piece, player: Player, board: &Board) -> Vec<Position> {
    let mut moves = Vec::with_capacity(16);
    let forward = player.direction();
    match piece.kind {
        Kind::King => generate_king_moves(board, from, player, &mut moves),
        Kind::Rook => {
            for dir in ORTHOGONALS { slide(board, from, player, dir, &mut moves); }
        }
        Kind::Bishop => {
            for dir in DIAGONALS { slide(board, from, player, dir, &mut moves); }
        }
        Kind::Lance => slide(board, from, player, (forward, 0), &mut moves),
        Kind::Pawn => generate_pawn_moves(board, from, player, &mut moves),
        Kind::Knight => steps(board, from, player, &KNIGHT_JUMPS, forward, &mut moves),
        Kind::SilverGeneral => steps(board, from, player, &SILVER_STEPS, forward, &mut moves),
        Kind::GoldGeneral => steps(board, from, player, &GOLD_STEPS, forward, &mut moves),
        Kind::PromotedRook => {
            for dir in ORTHOGONALS { slide(board, from, player, dir, &mut moves); }
            steps(board, from, player, &DIAGONALS, 1, &mut moves);
        }
        Kind::PromotedBishop => {
            for dir in DIAGONALS { slide(board, from, player, dir, &mut moves); }
            steps(board, from, player, &ORTHOGONALS, 1, &mut moves);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn pos(row: u8, col: u8) -> Position { Position { row, col } }

    fn set(cells: &[(u8, u8)]) -> BTreeSet<Position> {
        cells.iter().map(|&(r, c)| pos(r, c)).collect()
    }

    fn lone(kind: Kind, owner: Player, at: Position) -> (Board, Piece) {
        let piece = Piece::new(kind, owner);
        (Board::empty().with_piece(at, Some(piece)), piece)
    }

    fn destinations(board: &Board, at: Position, piece: Piece) -> BTreeSet<Position> {
        generate(at, piece, piece.owner, board).into_iter().collect()
    }

    #[test]
    fn king_on_empty_board_reaches_all_neighbours() {
        let (board, king) = lone(Kind::King, Player::One, pos(4, 4));
        assert_eq!(
            destinations(&board, pos(4, 4), king),
            set(&[(3, 3), (3, 4), (3, 5), (4, 3), (4, 5), (5, 3), (5, 4), (5, 5)])
        );
        let (board, king) = lone(Kind::King, Player::Two, pos(0, 0));
        assert_eq!(destinations(&board, pos(0, 0), king), set(&[(0, 1), (1, 0), (1, 1)]));
    }

    #[test]
    fn lone_pawn_pushes_one_step() {
        let (board, pawn) = lone(Kind::Pawn, Player::One, pos(3, 4));
        assert_eq!(generate(pos(3, 4), pawn, Player::One, &board), vec![pos(4, 4)]);
        let (board, pawn) = lone(Kind::Pawn, Player::Two, pos(3, 4));
        assert_eq!(generate(pos(3, 4), pawn, Player::Two, &board), vec![pos(2, 4)]);
    }

    #[test]
    fn pawn_captures_diagonally_only() {
        let board = Board::from_rows(&[
            ".........",
            ".........",
            ".........",
            "....P....",
            "...pp....",
            ".........",
            ".........",
            ".........",
            ".........",
        ]).unwrap();
        let pawn = Piece::new(Kind::Pawn, Player::One);
        // Blocked forward, one diagonal enemy, other diagonal empty
        assert_eq!(destinations(&board, pos(3, 4), pawn), set(&[(4, 3)]));
    }

    #[test]
    fn rook_stops_on_first_enemy() {
        let board = Board::empty()
            .with_piece(pos(0, 0), Some(Piece::new(Kind::Rook, Player::One)))
            .with_piece(pos(0, 3), Some(Piece::new(Kind::Pawn, Player::Two)));
        let rook = Piece::new(Kind::Rook, Player::One);
        let moves = destinations(&board, pos(0, 0), rook);
        let row0: BTreeSet<_> = moves.iter().copied().filter(|p| p.row == 0).collect();
        assert_eq!(row0, set(&[(0, 1), (0, 2), (0, 3)]));
        assert!(!moves.contains(&pos(0, 4)));
        assert_eq!(moves.len(), 3 + 8);
    }

    #[test]
    fn bishop_excludes_friendly_blocker() {
        let board = Board::empty()
            .with_piece(pos(4, 4), Some(Piece::new(Kind::Bishop, Player::Two)))
            .with_piece(pos(6, 6), Some(Piece::new(Kind::Pawn, Player::Two)));
        let bishop = Piece::new(Kind::Bishop, Player::Two);
        let moves = destinations(&board, pos(4, 4), bishop);
        assert!(moves.contains(&pos(5, 5)));
        assert!(!moves.contains(&pos(6, 6)));
        assert!(!moves.contains(&pos(7, 7)));
        assert!(moves.contains(&pos(0, 0)));
        assert!(moves.contains(&pos(8, 0)));
    }

    #[test]
    fn lance_only_slides_forward() {
        let (board, lance) = lone(Kind::Lance, Player::Two, pos(5, 2));
        assert_eq!(destinations(&board, pos(5, 2), lance), set(&[(4, 2), (3, 2), (2, 2), (1, 2), (0, 2)]));
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let board = Board::from_rows(&[
            ".........",
            ".........",
            "...PPP...",
            "....C....",
            "...P.p...",
            ".........",
            ".........",
            ".........",
            ".........",
        ]).unwrap();
        let knight = Piece::new(Kind::Knight, Player::One);
        assert_eq!(destinations(&board, pos(3, 4), knight), set(&[(4, 5)]));
        let (board, knight) = lone(Kind::Knight, Player::Two, pos(4, 4));
        assert_eq!(destinations(&board, pos(4, 4), knight), set(&[(3, 3), (3, 5)]));
    }

    #[test]
    fn silver_general_keeps_single_backward_diagonal() {
        let (board, silver) = lone(Kind::SilverGeneral, Player::One, pos(4, 4));
        assert_eq!(destinations(&board, pos(4, 4), silver), set(&[(5, 3), (5, 4), (5, 5), (3, 3)]));
        let (board, silver) = lone(Kind::SilverGeneral, Player::Two, pos(4, 4));
        assert_eq!(destinations(&board, pos(4, 4), silver), set(&[(3, 3), (3, 4), (3, 5), (5, 3)]));
    }

    #[test]
    fn gold_general_moves_orthogonally() {
        let (board, gold) = lone(Kind::GoldGeneral, Player::One, pos(4, 4));
        assert_eq!(destinations(&board, pos(4, 4), gold), set(&[(5, 4), (3, 4), (4, 3), (4, 5)]));
    }

    #[test]
    fn promoted_pieces_gain_king_steps() {
        let (board, dragon) = lone(Kind::PromotedRook, Player::One, pos(4, 4));
        let moves = destinations(&board, pos(4, 4), dragon);
        assert_eq!(moves.len(), 16 + 4);
        assert!(moves.contains(&pos(3, 3)) && moves.contains(&pos(5, 5)));
        assert!(!moves.contains(&pos(2, 2)));

        let (board, horse) = lone(Kind::PromotedBishop, Player::Two, pos(0, 0));
        let moves = destinations(&board, pos(0, 0), horse);
        assert_eq!(moves.len(), 8 + 2);
        assert!(moves.contains(&pos(0, 1)) && moves.contains(&pos(1, 0)));
    }

    #[test]
    fn initial_position_has_expected_mobility() {
        let board = Board::initial();
        let at = |r, c| generate(pos(r, c), board.get(pos(r, c)).unwrap(), Player::One, &board);
        assert_eq!(at(2, 4), vec![pos(3, 4)]);
        assert!(at(1, 1).is_empty()); // Bishop boxed in by its own pawns
        assert_eq!(at(1, 7).len(), 6); // Rook slides along row 1
        assert_eq!(at(0, 0), vec![pos(1, 0)]); // Lance stops behind its own pawn
        assert!(!is_enemy(board.get(pos(4, 4)), Player::One));
        assert!(is_enemy(board.get(pos(6, 0)), Player::One));
        assert!(!is_enemy(board.get(pos(2, 0)), Player::One));
    }
}
