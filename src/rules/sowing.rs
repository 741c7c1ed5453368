//! Sowing: one stone per slot, counter-clockwise, skipping the opponent's store

use crate::board::{Board, Side, NUM_SLOTS};

/// Empty `pit` and distribute its stones for the side to move.
///
/// Returns the slot that received the last stone.
pub fn sow(board: &mut Board, pit: usize) -> usize {
    let skip = board.to_move.opponent().store();
    let mut stones = std::mem::take(&mut board.slots[pit]);
    let mut slot = pit;

    while stones > 0 {
        slot = (slot + 1) % NUM_SLOTS;
        if slot == skip {
            continue;
        }
        board.slots[slot] += 1;
        stones -= 1;
    }
    slot
}

/// Ending in your own store earns another move.
#[inline]
pub fn earns_extra_turn(side: Side, landing: usize) -> bool {
    landing == side.store()
}
