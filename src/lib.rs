//! chessapp: a minimal two-player chess rules engine.
//!
//! [`board`] holds the piece vocabulary and the 8x8 grid, [`game`] validates,
//! applies and takes back moves, [`console`] is a line-based front end.

pub mod board;
pub mod console;
pub mod game;
pub mod notation;

pub use board::{Board, Color, Piece, PieceKind};
pub use game::{Game, Move};
