//! Internal search functions.

use crate::{ScoreMode, SCORE_MIN};
use arrayvec::ArrayVec;
use ebonite_othello::{Board, GameState};

// Depth below which move ordering stops paying for itself.
const FASTEST_FIRST_CUTOFF: u8 = 5;

// The practical ceiling on legal moves in one position. Overrunning it is an
// internal invariant breach, and the capped lists below panic on it.
const MAX_MOVES: usize = 32;

// Mobility marker for candidates that have already been explored.
const EXPLORED: u8 = u8::MAX;

/// Score a finished (or cut off) position under `mode`.
pub(crate) fn evaluate(board: Board, mode: ScoreMode) -> i8 {
    match mode {
        ScoreMode::Differential => board.score_absolute_difference(),
        ScoreMode::WinnerGetsEmpties => board.score_winner_gets_empties(),
    }
}

/// Search `state` inside the window `[alpha, beta]` and return its negamax
/// value under `mode`'s scoring.
pub fn window(state: GameState, alpha: i8, beta: i8, mode: ScoreMode) -> i8 {
    window_fastest_first(state, state.board.count_empties(), alpha, beta, mode)
}

/// Window search with "fastest first" move ordering: explore moves leaving
/// the opponent the fewest answers first, to fail high as early as possible.
pub(crate) fn window_fastest_first(
    state: GameState,
    depth: u8,
    mut alpha: i8,
    beta: i8,
    mode: ScoreMode,
) -> i8 {
    if depth < FASTEST_FIRST_CUTOFF {
        return window_unsorted(state, alpha, beta, mode);
    }

    let moves = state.get_moves();
    if moves.is_empty() {
        // Both players pass: game ends.
        if state.just_passed {
            return evaluate(state.board, mode);
        }

        // I pass, but my opponent may have moves. Passing costs no depth.
        return -window_fastest_first(state.pass(), depth, -beta, -alpha, mode);
    }

    // Precompute every child along with the mobility it leaves the opponent.
    let mut children: ArrayVec<GameState, MAX_MOVES> = ArrayVec::new();
    let mut mobilities: ArrayVec<u8, MAX_MOVES> = ArrayVec::new();
    for loc in moves {
        let child = state.make_move(loc);
        children.push(child);
        mobilities.push(child.get_moves().len() as u8);
    }

    let mut best = SCORE_MIN;
    for _ in 0..children.len() {
        // For these list sizes a repeated scan outperforms explicit sorting.
        // Ties go to the first candidate found, keeping the order (and with
        // it the search) deterministic.
        let mut pick = 0;
        let mut least = EXPLORED;
        for (i, &mobility) in mobilities.iter().enumerate() {
            if mobility < least {
                least = mobility;
                pick = i;
            }
        }
        mobilities[pick] = EXPLORED;

        let score = -window_fastest_first(children[pick], depth - 1, -beta, -alpha, mode);

        if score > best {
            best = score;

            if best > alpha {
                alpha = best;

                // Fail high: my opponent won't allow a line this good.
                if alpha >= beta {
                    return alpha;
                }
            }
        }
    }

    best
}

/// Window search without move ordering, which is faster for shallow trees.
/// Tracks no depth: the empty move sets at the true end of the game stop it.
fn window_unsorted(state: GameState, mut alpha: i8, beta: i8, mode: ScoreMode) -> i8 {
    let moves = state.get_moves();
    if moves.is_empty() {
        if state.just_passed {
            return evaluate(state.board, mode);
        }

        return -window_unsorted(state.pass(), -beta, -alpha, mode);
    }

    let children: ArrayVec<GameState, MAX_MOVES> =
        moves.map(|loc| state.make_move(loc)).collect();

    let mut best = SCORE_MIN;
    for child in children {
        let score = -window_unsorted(child, -beta, -alpha, mode);

        if score > best {
            best = score;

            if best > alpha {
                alpha = best;

                if alpha >= beta {
                    return alpha;
                }
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebonite_othello::test_utils::random_playout;
    use ebonite_othello::{GameState, Location, Player, MAX_SCORE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn disks(coords: &[(u8, u8)]) -> ebonite_othello::bitboard::Bitboard {
        let mut board = ebonite_othello::bitboard::Bitboard::default();
        for &(x, y) in coords {
            board |= Location::from_coords(x, y).into();
        }
        board
    }

    fn corner_standoff() -> GameState {
        // Two disks against one, all out of reach of each other.
        let black = disks(&[(0, 0), (1, 0)]);
        let white = disks(&[(7, 7)]);
        GameState::for_player(Player::Black, black, white, false)
    }

    #[test]
    fn finished_game_evaluates() {
        let state = corner_standoff();
        assert_eq!(
            window(state, -MAX_SCORE, MAX_SCORE, ScoreMode::Differential),
            1
        );
        assert_eq!(
            window(state, -MAX_SCORE, MAX_SCORE, ScoreMode::WinnerGetsEmpties),
            1 + 61
        );
        // The same standoff seen by the losing side.
        assert_eq!(
            window(state.pass(), -MAX_SCORE, MAX_SCORE, ScoreMode::Differential),
            -1
        );
    }

    #[test]
    fn ordered_and_unsorted_searches_agree() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..25 {
            // Deep enough into the game that solving to the end stays cheap,
            // while the ordered routine still gets several plies to reorder.
            let state = random_playout(&mut rng, 53);
            let empties = state.board.count_empties();

            for mode in [ScoreMode::Differential, ScoreMode::WinnerGetsEmpties] {
                // Over the full window both routines back up the exact value,
                // so move ordering cannot change the answer.
                let plain = window_unsorted(state, -MAX_SCORE, MAX_SCORE, mode);
                let ordered =
                    window_fastest_first(state, empties, -MAX_SCORE, MAX_SCORE, mode);
                assert_eq!(plain, ordered);
            }

            // The minimal window only pins down the outcome's sign.
            let plain = window_unsorted(state, -1, 1, ScoreMode::Differential);
            let ordered = window_fastest_first(state, empties, -1, 1, ScoreMode::Differential);
            assert_eq!(plain.signum(), ordered.signum());
        }
    }

    #[test]
    fn forced_pass_inside_the_search() {
        // The side to move is boxed in against the a-file and must pass; the
        // opponent then runs the rank and takes every disk.
        let black = disks(&[(0, 0)]);
        let white = disks(&[(1, 0)]);
        let state = GameState::for_player(Player::White, black, white, false);
        assert_eq!(
            window(state, -MAX_SCORE, MAX_SCORE, ScoreMode::Differential),
            -3
        );
    }
}
