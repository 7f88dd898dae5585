//! `ebonite-othello` is a fast, full-featured Othello library for engines.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked operations for working with
//!    Othello occupancy masks. These are fast, but may result in inconsistent
//!    state if their contracts are not manually checked. Bitboard operations
//!    are also provided through a C FFI.
//!  - [`Board`] implements the core game logic in the same fast, unchecked
//!    way as [`bitboard`], from the perspective of the side to move.
//!  - [`GameState`] adds the pass history the full game rules need, and is
//!    the type search code works with.

pub mod bitboard;
pub mod ffi;
pub mod test_utils;

mod board;
mod game;
mod location;
mod stability;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;
pub use stability::stable_disks;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;

/// The largest score either side can reach: owning every square.
pub const MAX_SCORE: i8 = 64;
