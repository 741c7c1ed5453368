//! Weights for the Kalah evaluator
//!
//! Every term of the evaluation is counted in stones, so the only tuned
//! numbers are the near-win threshold and its penalty.

use crate::board::Side;

/// Evaluation weights
pub struct Weights;

impl Weights {
    /// A store above this many stones is close to the 25 needed to win
    /// a 48-stone game.
    pub const NEAR_WIN_THRESHOLD: i32 = 24;
    /// Score shifted toward the opponent once it passes the threshold
    pub const NEAR_WIN_PENALTY: i32 = 3;
}

/// Penalty for letting the opponent of the side to move approach a win.
///
/// Positive favours Top. Only the store of the side *not* to move is checked.
pub fn near_win_score(to_move: Side, top_store: i32, bottom_store: i32) -> i32 {
    match to_move {
        Side::Top if bottom_store > Weights::NEAR_WIN_THRESHOLD => -Weights::NEAR_WIN_PENALTY,
        Side::Bottom if top_store > Weights::NEAR_WIN_THRESHOLD => Weights::NEAR_WIN_PENALTY,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_win_below_threshold() {
        assert_eq!(near_win_score(Side::Top, 0, 24), 0);
        assert_eq!(near_win_score(Side::Bottom, 24, 0), 0);
    }

    #[test]
    fn test_near_win_penalises_top_to_move() {
        assert_eq!(near_win_score(Side::Top, 0, 25), -Weights::NEAR_WIN_PENALTY);
    }

    #[test]
    fn test_near_win_penalises_bottom_to_move() {
        assert_eq!(near_win_score(Side::Bottom, 25, 0), Weights::NEAR_WIN_PENALTY);
    }

    #[test]
    fn test_near_win_ignores_own_store() {
        assert_eq!(near_win_score(Side::Top, 30, 0), 0);
        assert_eq!(near_win_score(Side::Bottom, 0, 30), 0);
    }
}
