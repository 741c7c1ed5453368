//! Heuristic evaluation function for Kalah board positions
//!
//! Scores are always in Top's frame: positive favours Top (the maximizer),
//! negative favours Bottom. The search decides how to use the number.

use crate::board::{opposite, GameBoard, Side};

use super::weights::near_win_score;

/// The five evaluation terms, each already signed toward Top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Top's store minus Bottom's store
    pub store: i32,
    /// Stones in Top's pits minus stones in Bottom's pits
    pub material: i32,
    /// Pits that end exactly in their own store, Top's count minus Bottom's
    pub extra_turns: i32,
    /// Stones capturable by the side to move
    pub captures: i32,
    /// Opponent-near-win adjustment
    pub near_win: i32,
}

impl Evaluation {
    #[inline]
    pub fn total(&self) -> i32 {
        self.store + self.material + self.extra_turns + self.captures + self.near_win
    }
}

/// Evaluate the board from Top's point of view.
///
/// # Arguments
/// * `board` - The position to score
///
/// # Returns
/// An i32 score, positive when Top is ahead
#[must_use]
pub fn evaluate<B: GameBoard>(board: &B) -> i32 {
    breakdown(board).total()
}

/// Compute every evaluation term separately.
#[must_use]
pub fn breakdown<B: GameBoard>(board: &B) -> Evaluation {
    let to_move = board.whose_move();
    let top_store = board.stones_at(Side::Top.store());
    let bottom_store = board.stones_at(Side::Bottom.store());

    let mut eval = Evaluation {
        store: top_store - bottom_store,
        near_win: near_win_score(to_move, top_store, bottom_store),
        ..Evaluation::default()
    };

    for side in [Side::Top, Side::Bottom] {
        let sign = if side.is_maximizer() { 1 } else { -1 };
        let store = side.store();

        for pit in side.actions() {
            let stones = board.stones_at(pit);
            eval.material += sign * stones;

            if stones == store as i32 - pit as i32 {
                eval.extra_turns += sign;
            }

            // Capture potential only counts for the side about to move.
            // The landing slot does not wrap, so an empty pit lands on itself.
            if side == to_move {
                let target = pit + stones as usize;
                if target < store
                    && board.stones_at(target) == 0
                    && board.stones_at(opposite(target)) != 0
                {
                    eval.captures += sign * board.stones_at(opposite(target));
                }
            }
        }
    }

    eval
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BOTTOM_STORE, NUM_SLOTS, TOP_STORE};

    fn board(slots: [u8; NUM_SLOTS], to_move: Side) -> Board {
        Board::from_slots(slots, to_move)
    }

    #[test]
    fn test_evaluate_start_position_bottom_to_move() {
        let eval = breakdown(&Board::new());
        assert_eq!(eval.store, 0);
        assert_eq!(eval.material, 0);
        // Pit 9 (Top) and pit 2 (Bottom) both reach their store exactly
        assert_eq!(eval.extra_turns, 0);
        assert_eq!(eval.captures, 0);
        assert_eq!(eval.near_win, 0);
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_evaluate_start_position_top_to_move() {
        let start = Board::with_side_to_move(Side::Top);
        let eval = breakdown(&start);
        assert_eq!(eval.store, 0);
        assert_eq!(eval.material, 0);
        assert_eq!(eval.total(), 0);
    }

    #[test]
    fn test_store_difference_favours_top() {
        let mut slots = [4u8; NUM_SLOTS];
        slots[TOP_STORE] = 10;
        slots[BOTTOM_STORE] = 3;
        let eval = breakdown(&board(slots, Side::Bottom));

        assert_eq!(eval.store, 7);
        assert!(evaluate(&board(slots, Side::Bottom)) > 0);
    }

    #[test]
    fn test_material_difference() {
        let mut slots = [0u8; NUM_SLOTS];
        slots[0] = 5;
        slots[8] = 2;
        slots[12] = 9;
        let eval = breakdown(&board(slots, Side::Bottom));

        assert_eq!(eval.material, 6);
    }

    #[test]
    fn test_extra_turn_counts() {
        let mut slots = [0u8; NUM_SLOTS];
        slots[12] = 1;
        slots[11] = 2;
        slots[5] = 1;
        slots[4] = 3;
        let eval = breakdown(&board(slots, Side::Top));

        assert_eq!(eval.extra_turns, 1);
    }

    #[test]
    fn test_capture_potential_for_bottom() {
        let slots = [2, 3, 0, 3, 3, 3, 0, 0, 0, 0, 5, 0, 0, 0];
        let eval = breakdown(&board(slots, Side::Bottom));

        // Pit 0 lands in empty pit 2 and pit 2 lands on itself; both face pit 10.
        assert_eq!(eval.captures, -10);
        assert_eq!(eval.store, 0);
        assert_eq!(eval.material, -9);
        assert_eq!(eval.extra_turns, -1);
        assert_eq!(eval.near_win, 0);
        assert_eq!(eval.total(), -20);
    }

    #[test]
    fn test_capture_potential_for_top() {
        let slots = [4, 4, 4, 4, 4, 4, 0, 1, 0, 4, 4, 4, 4, 0];
        let eval = breakdown(&board(slots, Side::Top));

        assert_eq!(eval.captures, 8);
    }

    #[test]
    fn test_capture_potential_only_for_side_to_move() {
        let slots = [2, 3, 0, 3, 3, 3, 0, 0, 0, 0, 5, 0, 0, 0];
        let eval = breakdown(&board(slots, Side::Top));

        // Pit 10 sows past the store. Empty pits 7, 8, 9, 11 and 12 land on
        // themselves, facing pits 5, 4, 3, 1 and 0. Bottom's pit 0 is ignored.
        assert_eq!(eval.captures, 3 + 3 + 3 + 3 + 2);
    }

    #[test]
    fn test_near_win_term() {
        let mut slots = [1u8; NUM_SLOTS];
        slots[BOTTOM_STORE] = 25;
        slots[TOP_STORE] = 0;
        assert_eq!(breakdown(&board(slots, Side::Top)).near_win, -3);
        assert_eq!(breakdown(&board(slots, Side::Bottom)).near_win, 0);
    }

    #[test]
    fn test_mirrored_position_isolates_turn_terms() {
        let slots = [1, 0, 3, 2, 0, 6, 5, 1, 0, 3, 2, 0, 6, 5];
        for side in [Side::Top, Side::Bottom] {
            let eval = breakdown(&board(slots, side));
            assert_eq!(eval.store, 0);
            assert_eq!(eval.material, 0);
            assert_eq!(
                eval.total(),
                eval.extra_turns + eval.captures + eval.near_win
            );
        }
    }
}
