//! Board representation for Kalah
//!
//! The search core only talks to a board through [`GameBoard`]. [`Board`] is
//! the reference implementation used by the binary and the tests.

pub mod board;


use std::ops::RangeInclusive;

// Re-exports
pub use board::{Board, MAX_STONES};

/// Pits on each side, excluding the store
pub const PITS_PER_SIDE: usize = 6;
/// Total slots: 2 x 6 pits + 2 stores
pub const NUM_SLOTS: usize = 2 * PITS_PER_SIDE + 2;
/// Bottom's store (slot 6)
pub const BOTTOM_STORE: usize = PITS_PER_SIDE;
/// Top's store (slot 13)
pub const TOP_STORE: usize = NUM_SLOTS - 1;
/// Stones per pit at the start of a standard game
pub const INITIAL_STONES: u8 = 4;

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    /// The side whose advantage counts as positive score.
    pub const MAXIMIZER: Side = Side::Top;

    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }

    /// Actions this side may play, in canonical search order.
    #[inline]
    pub fn actions(self) -> RangeInclusive<usize> {
        match self {
            Side::Bottom => 0..=BOTTOM_STORE - 1,
            Side::Top => BOTTOM_STORE + 1..=TOP_STORE - 1,
        }
    }

    /// Store slot owned by this side
    #[inline]
    pub fn store(self) -> usize {
        match self {
            Side::Bottom => BOTTOM_STORE,
            Side::Top => TOP_STORE,
        }
    }

    /// Whether `slot` is one of this side's pits (store excluded)
    #[inline]
    pub fn owns_pit(self, slot: usize) -> bool {
        self.actions().contains(&slot)
    }

    #[inline]
    pub fn is_maximizer(self) -> bool {
        self == Side::MAXIMIZER
    }
}

/// Pit across the board from `pit` (0 <-> 12, 5 <-> 7).
#[inline]
pub fn opposite(pit: usize) -> usize {
    debug_assert!(pit != BOTTOM_STORE && pit < TOP_STORE);
    2 * PITS_PER_SIDE - pit
}

/// The board interface consumed by the search core.
///
/// `Clone` is the duplication operation: a clone must be fully independent
/// so that moves applied to it never reach the original.
pub trait GameBoard: Clone {
    /// Stones currently at a pit or store slot.
    fn stones_at(&self, slot: usize) -> i32;

    /// Side to act next.
    fn whose_move(&self) -> Side;

    /// Whether the game has finished.
    fn game_over(&self) -> bool;

    /// Whether `action` is currently playable by the side to move.
    fn legal_move(&self, action: usize) -> bool;

    /// Apply `action`. `announce` only controls outside notification.
    fn make_move(&mut self, action: usize, announce: bool);
}
