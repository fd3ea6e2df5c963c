// src/promotion.rs
use crate::board::{Kind, Piece, Player};

impl Kind {
    /// Kind this piece becomes on promotion, `None` for kings, generals and
    /// already promoted pieces.
    pub fn promoted(&self) -> Option<Kind> {
        match self {
            Kind::Pawn | Kind::Lance | Kind::Knight => Some(Kind::GoldGeneral),
            Kind::Bishop => Some(Kind::PromotedBishop),
            Kind::Rook => Some(Kind::PromotedRook),
            Kind::King | Kind::SilverGeneral | Kind::GoldGeneral
            | Kind::PromotedRook | Kind::PromotedBishop => None,
        }
    }

    pub fn can_promote(&self) -> bool {
        self.promoted().is_some()
    }
}

/// Player 1 promotes on rows 6..=8, player 2 on rows 0..=2.
pub fn is_promotion_zone(row: u8, player: Player) -> bool {
    match player {
        Player::One => row > 5,
        Player::Two => row < 3,
    }
}

/// Upgrades `piece` for `player`. Only the kind changes; the owner is
/// always `piece.owner`, whatever `player` says. Non-promotable pieces come
/// back unchanged.
pub fn promote(piece: Piece, _player: Player) -> Piece {
    match piece.kind.promoted() {
        Some(kind) => Piece::new(kind, piece.owner),
        None => piece,
    }
}
