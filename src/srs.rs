//! Super Rotation System (SRS) wall kick data
//!
//! SRS defines the wall kicks attempted when rotating a piece.
//! If a rotation would cause collision, these offsets are tried in order.
//! Offsets are `(row, col)` with rows growing downward, so the row component
//! is the negated `y` of the usual SRS charts.

use crate::tetromino::{Offset, Rotation, TetrominoType};
use thiserror::Error;

/// Five candidate translations for one rotation attempt
pub type Kicks = [Offset; 5];

/// Kick lookup failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KickError {
    /// Kick data only exists for single-step turns around the rotation cycle
    #[error("no wall kick data for {from:?} -> {to:?}: rotations must move one step")]
    NonAdjacent { from: Rotation, to: Rotation },
}

/// Which kick table a tetromino uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickCategory {
    I,
    O,
    Jlstz,
}

impl KickCategory {
    pub fn of(piece_type: TetrominoType) -> Self {
        match piece_type {
            TetrominoType::I => KickCategory::I,
            TetrominoType::O => KickCategory::O,
            _ => KickCategory::Jlstz,
        }
    }
}

/// Get wall kick offsets for a rotation attempt from `from` to `to`
pub fn get_wall_kicks(
    piece_type: TetrominoType,
    from: Rotation,
    to: Rotation,
) -> Result<Kicks, KickError> {
    let Some(slot) = transition_slot(from, to) else {
        tracing::debug!(?piece_type, ?from, ?to, "rejected non-adjacent kick lookup");
        return Err(KickError::NonAdjacent { from, to });
    };

    Ok(match KickCategory::of(piece_type) {
        // O piece doesn't rotate, but we return identity kicks
        KickCategory::O => O_KICKS,
        KickCategory::I => I_KICKS[slot],
        KickCategory::Jlstz => JLSTZ_KICKS[slot],
    })
}

/// Row of the kick tables for a transition: `from * 2` for clockwise,
/// `from * 2 + 1` for counter-clockwise.
fn transition_slot(from: Rotation, to: Rotation) -> Option<usize> {
    if from.cw() == to {
        Some(from.index() * 2)
    } else if from.ccw() == to {
        Some(from.index() * 2 + 1)
    } else {
        None
    }
}

const O_KICKS: Kicks = [(0, 0); 5];

/// Wall kicks for J, L, S, T, Z pieces
const JLSTZ_KICKS: [Kicks; 8] = [
    // 0->R
    [(0, 0), (0, -1), (-1, -1), (2, 0), (2, -1)],
    // 0->L
    [(0, 0), (0, 1), (-1, 1), (2, 0), (2, 1)],
    // R->2
    [(0, 0), (0, 1), (1, 1), (-2, 0), (-2, 1)],
    // R->0
    [(0, 0), (0, 1), (1, 1), (-2, 0), (-2, 1)],
    // 2->L
    [(0, 0), (0, 1), (-1, 1), (2, 0), (2, 1)],
    // 2->R
    [(0, 0), (0, -1), (-1, -1), (2, 0), (2, -1)],
    // L->0
    [(0, 0), (0, -1), (1, -1), (-2, 0), (-2, -1)],
    // L->2
    [(0, 0), (0, -1), (1, -1), (-2, 0), (-2, -1)],
];

/// Wall kicks for I piece (different from other pieces)
const I_KICKS: [Kicks; 8] = [
    // 0->R
    [(0, 0), (0, -2), (0, 1), (1, -2), (-2, 1)],
    // 0->L
    [(0, 0), (0, -1), (0, 2), (-2, -1), (1, 2)],
    // R->2
    [(0, 0), (0, -1), (0, 2), (-2, -1), (1, 2)],
    // R->0
    [(0, 0), (0, 2), (0, -1), (-1, 2), (2, -1)],
    // 2->L
    [(0, 0), (0, 2), (0, -1), (-1, 2), (2, -1)],
    // 2->R
    [(0, 0), (0, 1), (0, -2), (2, 1), (-1, -2)],
    // L->0
    [(0, 0), (0, 1), (0, -2), (2, 1), (-1, -2)],
    // L->2
    [(0, 0), (0, -2), (0, 1), (1, -2), (-2, 1)],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tetromino::RotationDirection;
    use crate::tetromino::Rotation::*;

    fn kicks(piece: TetrominoType, from: Rotation, to: Rotation) -> Kicks {
        get_wall_kicks(piece, from, to).unwrap()
    }

    #[test]
    fn test_first_kick_is_identity() {
        for piece in TetrominoType::all() {
            for from in Rotation::all() {
                for dir in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
                    let kicks = kicks(piece, from, from.rotated(dir));
                    assert_eq!(kicks.len(), 5);
                    assert_eq!(kicks[0], (0, 0));
                }
            }
        }
    }

    #[test]
    fn test_jlstz_reference_values() {
        let expected = [
            (Spawn, Right, [(0, 0), (0, -1), (-1, -1), (2, 0), (2, -1)]),
            (Right, Spawn, [(0, 0), (0, 1), (1, 1), (-2, 0), (-2, 1)]),
            (Right, Flip, [(0, 0), (0, 1), (1, 1), (-2, 0), (-2, 1)]),
            (Flip, Right, [(0, 0), (0, -1), (-1, -1), (2, 0), (2, -1)]),
            (Flip, Left, [(0, 0), (0, 1), (-1, 1), (2, 0), (2, 1)]),
            (Left, Flip, [(0, 0), (0, -1), (1, -1), (-2, 0), (-2, -1)]),
            (Left, Spawn, [(0, 0), (0, -1), (1, -1), (-2, 0), (-2, -1)]),
            (Spawn, Left, [(0, 0), (0, 1), (-1, 1), (2, 0), (2, 1)]),
        ];
        for piece in [
            TetrominoType::J,
            TetrominoType::L,
            TetrominoType::S,
            TetrominoType::T,
            TetrominoType::Z,
        ] {
            for (from, to, want) in expected {
                assert_eq!(kicks(piece, from, to), want, "{piece:?} {from:?}->{to:?}");
            }
        }
    }

    #[test]
    fn test_i_reference_values() {
        let expected = [
            (Spawn, Right, [(0, 0), (0, -2), (0, 1), (1, -2), (-2, 1)]),
            (Right, Spawn, [(0, 0), (0, 2), (0, -1), (-1, 2), (2, -1)]),
            (Right, Flip, [(0, 0), (0, -1), (0, 2), (-2, -1), (1, 2)]),
            (Flip, Right, [(0, 0), (0, 1), (0, -2), (2, 1), (-1, -2)]),
            (Flip, Left, [(0, 0), (0, 2), (0, -1), (-1, 2), (2, -1)]),
            (Left, Flip, [(0, 0), (0, -2), (0, 1), (1, -2), (-2, 1)]),
            (Left, Spawn, [(0, 0), (0, 1), (0, -2), (2, 1), (-1, -2)]),
            (Spawn, Left, [(0, 0), (0, -1), (0, 2), (-2, -1), (1, 2)]),
        ];
        for (from, to, want) in expected {
            assert_eq!(kicks(TetrominoType::I, from, to), want, "{from:?}->{to:?}");
        }
    }

    #[test]
    fn test_i_and_jlstz_tables_differ() {
        assert_ne!(I_KICKS, JLSTZ_KICKS);
        assert_ne!(
            kicks(TetrominoType::I, Spawn, Right),
            kicks(TetrominoType::T, Spawn, Right)
        );
    }

    #[test]
    fn test_reverse_transition_negates_kicks() {
        for piece in TetrominoType::all() {
            for from in Rotation::all() {
                let to = from.cw();
                let forward = kicks(piece, from, to);
                let back = kicks(piece, to, from);
                assert_eq!(forward.map(|(r, c)| (-r, -c)), back, "{piece:?} {from:?}");
            }
        }
    }

    #[test]
    fn test_o_kicks_are_identity() {
        for from in Rotation::all() {
            assert_eq!(kicks(TetrominoType::O, from, from.ccw()), [(0, 0); 5]);
        }
    }

    #[test]
    fn test_non_adjacent_is_rejected() {
        for piece in TetrominoType::all() {
            for from in Rotation::all() {
                let skip = from.cw().cw();
                assert_eq!(
                    get_wall_kicks(piece, from, skip),
                    Err(KickError::NonAdjacent { from, to: skip })
                );
                assert!(get_wall_kicks(piece, from, from).is_err());
            }
        }
    }
}
