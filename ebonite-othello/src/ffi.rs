//! C FFI wrappers over the raw bitboard operations, for host programs and
//! UI adapters that exchange occupancy masks and `(x, y)` coordinates.

use crate::bitboard::{self, Bitboard};
use crate::stability;
use crate::Location;

#[repr(C)]
pub struct ApplyMoveResult {
    pub new_player_mask: u64,
    pub new_opponent_mask: u64,
}

#[no_mangle]
pub extern "C" fn ffi_find_moves(player_mask: u64, opponent_mask: u64) -> u64 {
    bitboard::find_moves(player_mask.into(), opponent_mask.into()).into()
}

#[no_mangle]
pub extern "C" fn ffi_apply_move(
    player_mask: u64,
    opponent_mask: u64,
    x: u8,
    y: u8,
) -> ApplyMoveResult {
    let new_disk: Bitboard = Location::from_coords(x, y).into();
    let flipped = bitboard::resolve_move(player_mask.into(), opponent_mask.into(), new_disk);
    ApplyMoveResult {
        new_player_mask: ((Bitboard::from(player_mask) ^ flipped) | new_disk).into(),
        new_opponent_mask: (Bitboard::from(opponent_mask) ^ flipped).into(),
    }
}

#[no_mangle]
pub extern "C" fn ffi_stable_disks(player_mask: u64, opponent_mask: u64) -> u64 {
    stability::stable_disks(player_mask.into(), opponent_mask.into()).into()
}
