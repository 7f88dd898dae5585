//! Game-level Othello state.
//!
//! [`GameState`] couples a [`Board`] with the one bit of history the rules
//! need: whether the previous player had to pass. Turn bookkeeping and rule
//! enforcement beyond that live with the caller.

use crate::bitboard::{Bitboard, BLACK_START, WHITE_START};
use crate::board::Board;
use crate::location::{Location, ParseLocationError};
use crate::MoveList;
use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// An action in an Othello game: pass, or place a disk on a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Piece(Location),
    Pass,
}

impl From<Location> for Move {
    fn from(loc: Location) -> Self {
        Self::Piece(loc)
    }
}

#[derive(Debug, PartialEq, Error, Display)]
#[display(fmt = "invalid move string")]
pub struct ParseMoveError;

impl From<ParseLocationError> for ParseMoveError {
    fn from(_: ParseLocationError) -> Self {
        ParseMoveError
    }
}

/// Build a [`Move`] from string notation ("c4"; "pass").
impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Self::Pass);
        }
        Ok(Self::Piece(s.parse()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Piece(loc) => loc.fmt(f),
            Move::Pass => f.write_str("pass"),
        }
    }
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub just_passed: bool,
}

impl Default for GameState {
    /// Gets the starting state from the starting player's perspective.
    fn default() -> Self {
        Self::starting_board(Player::default())
    }
}

impl GameState {
    /// Construct the game state as seen by one player from a pair of
    /// per-color bitboards.
    pub const fn for_player(
        player: Player,
        black_bitboard: Bitboard,
        white_bitboard: Bitboard,
        just_passed: bool,
    ) -> Self {
        match player {
            Player::Black => Self {
                board: Board {
                    player_bitboard: black_bitboard,
                    opponent_bitboard: white_bitboard,
                },
                just_passed,
            },
            Player::White => Self {
                board: Board {
                    player_bitboard: white_bitboard,
                    opponent_bitboard: black_bitboard,
                },
                just_passed,
            },
        }
    }

    /// Construct the starting game state as seen by one player.
    const fn starting_board(player: Player) -> Self {
        Self::for_player(player, BLACK_START, WHITE_START, false)
    }

    /// Get the list of moves available for the active player.
    #[inline]
    pub fn get_moves(self) -> MoveList {
        self.board.get_moves()
    }

    /// Make a pass move for the active player.
    #[inline]
    pub fn pass(self) -> Self {
        Self {
            board: self.board.pass(),
            just_passed: true,
        }
    }

    /// Make a placement move for the active player.
    #[inline]
    pub fn make_move(self, loc: Location) -> Self {
        Self {
            board: self.board.make_move(loc),
            just_passed: false,
        }
    }

    /// Make an action as the active player.
    #[inline]
    pub fn act(self, action: Move) -> Self {
        match action {
            Move::Pass => self.pass(),
            Move::Piece(mv) => self.make_move(mv),
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.board.to_string())?;
        if self.just_passed {
            f.write_str("(Last move was a pass)\n")?;
        }
        Ok(())
    }
}
