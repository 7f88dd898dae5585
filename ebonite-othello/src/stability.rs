//! Detection of stable disks: disks that can never be flipped again.

use crate::bitboard::{
    fill_east, fill_north, fill_northeast, fill_northwest, fill_south, fill_southeast,
    fill_southwest, fill_west, step_east, step_north, step_northeast, step_northwest, step_south,
    step_southeast, step_southwest, step_west, Bitboard,
};

const ROW_TOP: u64 = 0xff00000000000000;
const ROW_BOTTOM: u64 = 0x00000000000000ff;
const FILE_A: u64 = 0x8080808080808080;
const FILE_H: u64 = 0x0101010101010101;
const CORNERS: u64 = 0x8100000000000081;

/// Compute the subset of the active player's disks that are provably immune
/// to any future flip. The result is conservative: every reported disk is
/// stable, but some stable disks may go unreported.
///
/// A disk cannot be flipped along an axis while that whole line is occupied,
/// while it touches the board edge on that axis, or while a neighboring disk
/// on that axis is itself stable. A disk held on all four axes is stable.
pub fn stable_disks(player: Bitboard, opponent: Bitboard) -> Bitboard {
    let pieces = player | opponent;

    let top = Bitboard::from(ROW_TOP);
    let bottom = Bitboard::from(ROW_BOTTOM);
    let west = Bitboard::from(FILE_A);
    let east = Bitboard::from(FILE_H);

    // Per axis: squares reachable from both of the axis's edges through
    // occupied squares (the line is filled end-to-end), plus the axis's own
    // edge squares.
    let vertical = (fill_north(bottom & pieces, pieces) & fill_south(top & pieces, pieces))
        | top
        | bottom;
    let horizontal =
        (fill_west(east & pieces, pieces) & fill_east(west & pieces, pieces)) | west | east;
    let falling = (fill_northwest((bottom | east) & pieces, pieces)
        & fill_southeast((top | west) & pieces, pieces))
        | top
        | bottom
        | west
        | east;
    let rising = (fill_northeast((bottom | west) & pieces, pieces)
        & fill_southwest((top | east) & pieces, pieces))
        | top
        | bottom
        | west
        | east;

    let mut stable = (Bitboard::from(CORNERS) | (vertical & horizontal & falling & rising)) & player;

    // Expand along stable neighbors. 16 rounds bound the walk from one corner
    // to the opposite one; the set usually stops growing much earlier.
    for _ in 0..16 {
        let expanded = stable
            | player
                & ((step_north(stable) | step_south(stable) | vertical)
                    & (step_west(stable) | step_east(stable) | horizontal)
                    & (step_northwest(stable) | step_southeast(stable) | falling)
                    & (step_northeast(stable) | step_southwest(stable) | rising));
        if expanded == stable {
            break;
        }
        stable = expanded;
    }

    stable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::random_playout;
    use crate::{Board, Location};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bb(x: u8, y: u8) -> Bitboard {
        Location::from_coords(x, y).into()
    }

    #[test]
    fn starting_position_has_no_stable_disks() {
        let board = Board::new();
        assert_eq!(
            stable_disks(board.player_bitboard, board.opponent_bitboard),
            Bitboard::default()
        );
    }

    #[test]
    fn occupied_corners_are_stable() {
        let player = bb(0, 0) | bb(7, 7);
        let opponent = bb(7, 0) | bb(0, 7);
        let stable = stable_disks(player, opponent);
        assert_eq!(stable, player);
    }

    #[test]
    fn full_board_is_entirely_stable() {
        let player = Bitboard::from(0x5555555555555555);
        let opponent = !player;
        assert_eq!(stable_disks(player, opponent), player);
        assert_eq!(stable_disks(opponent, player), opponent);
    }

    #[test]
    fn edge_run_grows_from_a_corner() {
        let player = bb(0, 0) | bb(1, 0) | bb(2, 0);
        let stable = stable_disks(player, Bitboard::default());
        assert_eq!(stable, player);
    }

    #[test]
    fn edge_run_without_a_corner_is_not_stable() {
        // b1..d1 can still be flanked along the top rank from either side.
        let player = bb(1, 0) | bb(2, 0) | bb(3, 0);
        assert_eq!(stable_disks(player, Bitboard::default()), Bitboard::default());
    }

    #[test]
    fn full_line_alone_is_not_enough() {
        // A full d-file protects its disks vertically, but every square in it
        // stays open to a horizontal flank.
        let mut player = Bitboard::default();
        for y in 0..8 {
            player |= bb(3, y);
        }
        assert_eq!(stable_disks(player, Bitboard::default()), Bitboard::default());
    }

    #[test]
    fn stable_disks_are_a_subset_of_the_player() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let state = random_playout(&mut rng, 40);
            let board = state.board;
            let stable = stable_disks(board.player_bitboard, board.opponent_bitboard);
            assert_eq!(stable & !board.player_bitboard, Bitboard::default());
        }
    }
}
