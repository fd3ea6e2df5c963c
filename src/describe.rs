// src/describe.rs
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

use crate::board::Kind;

/// Display metadata shown next to the board for a selected piece.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PieceInfo {
    pub name: &'static str,
    pub description: &'static str,
}

lazy_static! {
    // Bishop and the promoted kinds have no entry
    static ref DESCRIPTIONS: HashMap<Kind, PieceInfo> = {
        let mut table = HashMap::new();
        table.insert(Kind::King, PieceInfo {
            name: "King",
            description: "Moves one square in any direction.",
        });
        table.insert(Kind::Rook, PieceInfo {
            name: "Rook",
            description: "Moves vertically or horizontally any distance.",
        });
        table.insert(Kind::Pawn, PieceInfo {
            name: "Pawn",
            description: "Moves one square forward and captures diagonally.",
        });
        table.insert(Kind::Lance, PieceInfo {
            name: "Lance",
            description: "Moves like a Rook, but cannot move backward.",
        });
        table.insert(Kind::Knight, PieceInfo {
            name: "Knight",
            description: "Jumps forward like a chess Knight.",
        });
        table.insert(Kind::SilverGeneral, PieceInfo {
            name: "Silver General",
            description: "Moves one step forward or diagonally.",
        });
        table.insert(Kind::GoldGeneral, PieceInfo {
            name: "Gold General",
            description: "Moves one step in every direction except diagonally.",
        });
        table
    };
}

/// Looks up the display metadata for `kind`. `None` means "no description".
pub fn describe(kind: Kind) -> Option<&'static PieceInfo> {
    DESCRIPTIONS.get(&kind)
}
