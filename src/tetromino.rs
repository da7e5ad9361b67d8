//! Tetromino definitions and shapes
//!
//! All 7 standard tetrominoes in the four SRS orientations. Offsets are
//! `(row, col)` from the top-left corner of the piece's bounding box, with
//! rows growing downward: a 4x4 box for I and a 3x3 box for everything else.

/// The 7 tetromino types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I, // Cyan - long bar
    O, // Yellow - square
    T, // Purple - T-shape
    S, // Green - S-shape
    Z, // Red - Z-shape
    J, // Blue - J-shape
    L, // Orange - L-shape
}

/// Display color of a filled cell, one per tetromino type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

/// A `(row, col)` offset or coordinate
pub type Offset = (i32, i32);

/// Four mino offsets for one orientation
pub type Shape = [Offset; 4];

impl TetrominoType {
    /// Get the color for this tetromino
    pub fn color(&self) -> ColorTag {
        match self {
            TetrominoType::I => ColorTag::Cyan,
            TetrominoType::O => ColorTag::Yellow,
            TetrominoType::T => ColorTag::Purple,
            TetrominoType::S => ColorTag::Green,
            TetrominoType::Z => ColorTag::Red,
            TetrominoType::J => ColorTag::Blue,
            TetrominoType::L => ColorTag::Orange,
        }
    }

    /// Get all tetromino types for bag randomization
    pub fn all() -> [TetrominoType; 7] {
        [
            TetrominoType::I,
            TetrominoType::O,
            TetrominoType::T,
            TetrominoType::S,
            TetrominoType::Z,
            TetrominoType::J,
            TetrominoType::L,
        ]
    }

    /// Side length of the square bounding box the shapes are expressed in
    pub fn box_size(&self) -> i32 {
        match self {
            TetrominoType::I => 4,
            _ => 3,
        }
    }

    /// Get the shape offsets for this tetromino at a given rotation
    pub fn shape(&self, rotation: Rotation) -> Shape {
        let table = match self {
            TetrominoType::I => &I_SHAPES,
            TetrominoType::O => &O_SHAPES,
            TetrominoType::T => &T_SHAPES,
            TetrominoType::S => &S_SHAPES,
            TetrominoType::Z => &Z_SHAPES,
            TetrominoType::J => &J_SHAPES,
            TetrominoType::L => &L_SHAPES,
        };
        table[rotation.index()]
    }
}

// Indexed by `Rotation::index()`: Spawn, Right, Flip, Left.

// ....   ..#.   ....   .#..
// ####   ..#.   ....   .#..
// ....   ..#.   ####   .#..
// ....   ..#.   ....   .#..
const I_SHAPES: [Shape; 4] = [
    [(1, 0), (1, 1), (1, 2), (1, 3)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    [(0, 1), (1, 1), (2, 1), (3, 1)],
];

// O does not rotate
const O_SHAPES: [Shape; 4] = [[(0, 1), (0, 2), (1, 1), (1, 2)]; 4];

const T_SHAPES: [Shape; 4] = [
    [(0, 1), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 1)],
    [(0, 1), (1, 0), (1, 1), (2, 1)],
];

// .##   .#.   ...   #..
// ##.   .##   .##   ##.
// ...   ..#   ##.   .#.
const S_SHAPES: [Shape; 4] = [
    [(0, 1), (0, 2), (1, 0), (1, 1)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 1), (1, 2), (2, 0), (2, 1)],
    [(0, 0), (1, 0), (1, 1), (2, 1)],
];

// ##.   ..#   ...   .#.
// .##   .##   ##.   ##.
// ...   .#.   .##   #..
const Z_SHAPES: [Shape; 4] = [
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 2), (1, 1), (1, 2), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(0, 1), (1, 0), (1, 1), (2, 0)],
];

const J_SHAPES: [Shape; 4] = [
    [(0, 0), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (0, 2), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 0), (2, 1)],
];

const L_SHAPES: [Shape; 4] = [
    [(0, 2), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (1, 2), (2, 0)],
    [(0, 0), (0, 1), (1, 1), (2, 1)],
];

/// Rotation states (using SRS naming convention)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Spawn, // 0
    Right, // Clockwise from Spawn
    Flip,  // 180 from Spawn
    Left,  // Counter-clockwise from Spawn
}

impl Rotation {
    /// All four states in cycle order
    pub fn all() -> [Rotation; 4] {
        [Rotation::Spawn, Rotation::Right, Rotation::Flip, Rotation::Left]
    }

    /// Position on the Spawn → Right → Flip → Left cycle
    pub fn index(&self) -> usize {
        match self {
            Rotation::Spawn => 0,
            Rotation::Right => 1,
            Rotation::Flip => 2,
            Rotation::Left => 3,
        }
    }

    /// Rotate clockwise: Spawn → Right → Flip → Left → Spawn
    pub fn cw(&self) -> Rotation {
        match self {
            Rotation::Spawn => Rotation::Right,
            Rotation::Right => Rotation::Flip,
            Rotation::Flip => Rotation::Left,
            Rotation::Left => Rotation::Spawn,
        }
    }

    /// Rotate counter-clockwise: Spawn → Left → Flip → Right → Spawn
    pub fn ccw(&self) -> Rotation {
        match self {
            Rotation::Spawn => Rotation::Left,
            Rotation::Left => Rotation::Flip,
            Rotation::Flip => Rotation::Right,
            Rotation::Right => Rotation::Spawn,
        }
    }

    pub fn rotated(&self, direction: RotationDirection) -> Rotation {
        match direction {
            RotationDirection::Clockwise => self.cw(),
            RotationDirection::CounterClockwise => self.ccw(),
        }
    }

    /// True when `other` is exactly one step away on the cycle
    pub fn is_adjacent(&self, other: Rotation) -> bool {
        self.cw() == other || self.ccw() == other
    }
}

/// Direction for rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sorted(mut shape: Shape) -> Shape {
        shape.sort();
        shape
    }

    #[test]
    fn test_every_shape_has_four_distinct_cells_in_box() {
        for kind in TetrominoType::all() {
            let size = kind.box_size();
            for rotation in Rotation::all() {
                let shape = kind.shape(rotation);
                let unique: HashSet<_> = shape.iter().collect();
                assert_eq!(unique.len(), 4, "{kind:?} {rotation:?}");
                for (row, col) in shape {
                    assert!((0..size).contains(&row), "{kind:?} {rotation:?}");
                    assert!((0..size).contains(&col), "{kind:?} {rotation:?}");
                }
            }
        }
    }

    #[test]
    fn test_o_piece_does_not_rotate() {
        let spawn = TetrominoType::O.shape(Rotation::Spawn);
        for rotation in Rotation::all() {
            assert_eq!(TetrominoType::O.shape(rotation), spawn);
        }
    }

    #[test]
    fn test_clockwise_turns_shape_inside_box() {
        // (r, c) -> (c, n - 1 - r) rotates a cell clockwise inside an n x n box
        for kind in TetrominoType::all() {
            if kind == TetrominoType::O {
                continue;
            }
            let n = kind.box_size();
            for rotation in Rotation::all() {
                let turned = kind.shape(rotation).map(|(r, c)| (c, n - 1 - r));
                assert_eq!(
                    sorted(turned),
                    sorted(kind.shape(rotation.cw())),
                    "{kind:?} {rotation:?}"
                );
            }
        }
    }

    #[test]
    fn test_spawn_orientations() {
        assert_eq!(
            TetrominoType::T.shape(Rotation::Spawn),
            [(0, 1), (1, 0), (1, 1), (1, 2)]
        );
        assert_eq!(
            TetrominoType::I.shape(Rotation::Spawn),
            [(1, 0), (1, 1), (1, 2), (1, 3)]
        );
        assert_eq!(
            TetrominoType::J.shape(Rotation::Spawn),
            [(0, 0), (1, 0), (1, 1), (1, 2)]
        );
        assert_eq!(
            TetrominoType::L.shape(Rotation::Spawn),
            [(0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn test_rotation_cycle() {
        for rotation in Rotation::all() {
            assert_eq!(rotation.cw().ccw(), rotation);
            assert_eq!(rotation.cw().cw().cw().cw(), rotation);
            assert!(rotation.is_adjacent(rotation.cw()));
            assert!(rotation.is_adjacent(rotation.ccw()));
            assert!(!rotation.is_adjacent(rotation));
            assert!(!rotation.is_adjacent(rotation.cw().cw()));
        }
        assert_eq!(
            Rotation::Left.rotated(RotationDirection::Clockwise),
            Rotation::Spawn
        );
    }

    #[test]
    fn test_one_color_per_kind() {
        let colors: HashSet<_> = TetrominoType::all().iter().map(|k| k.color()).collect();
        assert_eq!(colors.len(), 7);
    }
}
