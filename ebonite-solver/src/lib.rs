//! An exact endgame solver for Othello.
//!
//! The solver plays the game out to the end with a negamax alpha-beta
//! search, switching between a mobility-ordered routine and a cheaper
//! unsorted one as the tree shallows out. There is no evaluation heuristic
//! in the middle of the game: a position is worth what perfect play from it
//! ends at, so calls are only practical once enough of the board is full.

pub mod search;

use ebonite_othello::{GameState, Move, MAX_SCORE};

/// How finished games are scored, and with it how wide the solver searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScoreMode {
    /// Plain disk differential, searched with the minimal win/loss/draw
    /// window.
    #[default]
    Differential,
    /// Disk differential with empty squares credited to the winner, searched
    /// over the full score range.
    WinnerGetsEmpties,
}

/// Score reported when the root position has no legal move but the game is
/// not over: the side to move must pass, and no move can carry a real score.
/// Sits outside the legal score range of both modes.
pub const SCORE_UNDEFINED: i8 = i8::MAX;

// A floor below every real score. Kept above i8::MIN so negation stays safe.
pub(crate) const SCORE_MIN: i8 = -i8::MAX;

/// The move the solver chose, with the score backing it up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BestMove {
    pub mv: Move,
    pub score: i8,
}

impl BestMove {
    /// The chosen square as `(x, y)` coordinates, or `(-1, -1)` when there
    /// is no move to report.
    pub fn to_coords(self) -> (i8, i8) {
        match self.mv {
            Move::Piece(loc) => {
                let (x, y) = loc.to_coords();
                (x as i8, y as i8)
            }
            Move::Pass => (-1, -1),
        }
    }
}

/// Solve `state` to the end of the game under `mode`.
///
/// The first ply is explored here rather than in the recursion so the move
/// producing the best score is recorded, not just the score. Every root
/// branch is searched with the same fixed window, which keeps the branches
/// independent of each other; ties go to the first move enumerated.
///
/// A root without a legal move comes back as [`Move::Pass`]: with the exact
/// final score if the opponent is blocked too (the game is over), or with
/// [`SCORE_UNDEFINED`] if play continues and the caller has to pass.
pub fn solve(state: GameState, mode: ScoreMode) -> BestMove {
    let bound = match mode {
        ScoreMode::Differential => 1,
        ScoreMode::WinnerGetsEmpties => MAX_SCORE,
    };

    let moves = state.get_moves();
    if moves.is_empty() {
        if !state.board.pass().has_moves() {
            return BestMove {
                mv: Move::Pass,
                score: search::evaluate(state.board, mode),
            };
        }
        return BestMove {
            mv: Move::Pass,
            score: SCORE_UNDEFINED,
        };
    }

    let depth = state.board.count_empties();
    let mut best_score = SCORE_MIN;
    let mut best_move = Move::Pass;
    for loc in moves {
        let score =
            -search::window_fastest_first(state.make_move(loc), depth, -bound, bound, mode);

        if score > best_score {
            best_score = score;
            best_move = Move::Piece(loc);
        }
    }

    BestMove {
        mv: best_move,
        score: best_score,
    }
}

/// Solve the game, trying to determine the exact final margin.
/// Takes longer, but can be valuable for debugging or winning by a margin.
pub fn solve_exact(state: GameState) -> BestMove {
    solve(state, ScoreMode::WinnerGetsEmpties)
}

/// Solve the game, caring only about solving for a win, loss, or draw.
/// Faster, but provides less information.
pub fn solve_win_loss_draw(state: GameState) -> BestMove {
    solve(state, ScoreMode::Differential)
}
