//! Random playouts, used to sample reachable positions in tests.

use crate::bitboard::Bitboard;
use crate::{GameState, Location};
use rand::Rng;

/// Play up to `plies` uniformly random legal moves from the starting
/// position, returning the state reached. Stops early when the game ends;
/// forced passes are taken silently.
pub fn random_playout<R: Rng>(rng: &mut R, plies: u32) -> GameState {
    let mut state = GameState::default();
    for _ in 0..plies {
        let moves = state.get_moves();
        if moves.is_empty() {
            if state.just_passed {
                break;
            }
            state = state.pass();
            continue;
        }

        let choice = rng.gen_range(0..moves.len()) as u8;
        let new_disk = Bitboard::from(moves).select_bit(choice);
        state = state.make_move(Location::from_onehot(new_disk));
    }
    state
}
