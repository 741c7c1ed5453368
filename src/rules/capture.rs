//! Capture rule
//!
//! A last stone dropped into an empty pit on the mover's own row takes that
//! stone plus everything in the pit straight across, provided the opposite
//! pit is not empty.

use crate::board::{opposite, Board, Side};

/// Apply a capture for `side` after sowing ended at `landing`.
///
/// Returns the number of stones moved into the store (0 when no capture).
pub fn capture(board: &mut Board, side: Side, landing: usize) -> u8 {
    if !side.owns_pit(landing) || board.slots[landing] != 1 {
        return 0;
    }
    let across = opposite(landing);
    if board.slots[across] == 0 {
        return 0;
    }

    let taken = board.slots[across] + board.slots[landing];
    board.slots[across] = 0;
    board.slots[landing] = 0;
    board.slots[side.store()] += taken;
    taken
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOTTOM_STORE, NUM_SLOTS, TOP_STORE};

    #[test]
    fn test_capture_takes_opposite() {
        let mut slots = [0u8; NUM_SLOTS];
        slots[3] = 1;
        slots[9] = 5;
        let mut board = Board::from_slots(slots, Side::Bottom);

        assert_eq!(capture(&mut board, Side::Bottom, 3), 6);
        assert_eq!(board.slots[BOTTOM_STORE], 6);
        assert_eq!(board.slots[3], 0);
        assert_eq!(board.slots[9], 0);
    }

    #[test]
    fn test_no_capture_when_opposite_empty() {
        let mut slots = [0u8; NUM_SLOTS];
        slots[3] = 1;
        let mut board = Board::from_slots(slots, Side::Bottom);

        assert_eq!(capture(&mut board, Side::Bottom, 3), 0);
        assert_eq!(board.slots[3], 1);
    }

    #[test]
    fn test_no_capture_on_opponent_row() {
        let mut slots = [0u8; NUM_SLOTS];
        slots[9] = 1;
        slots[3] = 4;
        let mut board = Board::from_slots(slots, Side::Bottom);

        assert_eq!(capture(&mut board, Side::Bottom, 9), 0);
        assert_eq!(capture(&mut board, Side::Bottom, BOTTOM_STORE), 0);
    }

    #[test]
    fn test_no_capture_into_occupied_pit() {
        let mut slots = [0u8; NUM_SLOTS];
        slots[8] = 3;
        slots[4] = 2;
        let mut board = Board::from_slots(slots, Side::Top);

        assert_eq!(capture(&mut board, Side::Top, 8), 0);
        assert_eq!(board.slots[TOP_STORE], 0);
    }

    #[test]
    fn test_top_capture() {
        let mut slots = [0u8; NUM_SLOTS];
        slots[7] = 1;
        slots[5] = 2;
        let mut board = Board::from_slots(slots, Side::Top);

        assert_eq!(capture(&mut board, Side::Top, 7), 3);
        assert_eq!(board.slots[TOP_STORE], 3);
    }
}
