//! BLOCKTRIS - board and tetromino geometry
//!
//! A 10x20 cell grid plus SRS piece shapes and wall-kick data. The game loop
//! that drives gravity, collision and line clears lives with the caller;
//! this crate answers the geometric questions it asks.

pub mod bag;
pub mod board;
pub mod piece;
pub mod render;
pub mod settings;
pub mod srs;
pub mod tetromino;
pub mod ui;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, Board, Cell};
pub use piece::Piece;
pub use srs::{KickError, Kicks};
pub use tetromino::{ColorTag, Rotation, RotationDirection, TetrominoType};
