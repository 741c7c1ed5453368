//! End-of-game detection
//!
//! The game ends as soon as either side has no stones left in its pits.
//! Whatever remains on the other side goes to that side's store.

use crate::board::{Board, Side};

/// Whether all six of `side`'s pits are empty
#[inline]
pub fn side_is_empty(board: &Board, side: Side) -> bool {
    side.actions().all(|pit| board.slots[pit] == 0)
}

/// Either row emptied
#[inline]
pub fn is_game_over(board: &Board) -> bool {
    side_is_empty(board, Side::Bottom) || side_is_empty(board, Side::Top)
}

/// Move every stone left in the pits into its owner's store.
pub fn sweep_remaining(board: &mut Board) {
    for side in [Side::Bottom, Side::Top] {
        let remaining: u8 = side
            .actions()
            .map(|pit| std::mem::take(&mut board.slots[pit]))
            .sum();
        board.slots[side.store()] += remaining;
    }
}
