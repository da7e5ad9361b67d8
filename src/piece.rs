//! Active piece geometry
//!
//! A piece is a kind, a rotation state and the anchor of its bounding box.
//! It never looks at the board: collision checks and applying a chosen kick
//! belong to whoever owns the game loop.

use crate::srs::{KickError, Kicks, get_wall_kicks};
use crate::tetromino::{ColorTag, Offset, Rotation, TetrominoType};

/// A tetromino placed somewhere on (or off) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    /// The type of tetromino
    pub kind: TetrominoType,
    /// Current rotation state
    pub rotation: Rotation,
    /// Top-left corner of the bounding box. May lie outside the board.
    pub row: i32,
    pub col: i32,
}

impl Piece {
    /// Create a piece in its spawn orientation with the given anchor
    pub fn new(kind: TetrominoType, row: i32, col: i32) -> Self {
        Self {
            kind,
            rotation: Rotation::Spawn,
            row,
            col,
        }
    }

    pub fn color(&self) -> ColorTag {
        self.kind.color()
    }

    /// Get the absolute positions of all 4 blocks
    pub fn cells(&self) -> [Offset; 4] {
        self.kind
            .shape(self.rotation)
            .map(|(dr, dc)| (self.row + dr, self.col + dc))
    }

    /// Kick candidates for turning from the current rotation to `target`.
    ///
    /// The piece is left untouched; callers translate each candidate onto
    /// the anchor, keep the first that fits and then assign `rotation`,
    /// `row` and `col` themselves.
    pub fn wall_kicks_for(&self, target: Rotation) -> Result<Kicks, KickError> {
        get_wall_kicks(self.kind, self.rotation, target)
    }
}
