//! Reference Kalah board: fourteen slot counts and the side to move

use std::fmt;
use std::str::FromStr;

use super::{GameBoard, Side, INITIAL_STONES, NUM_SLOTS, TOP_STORE};
use crate::error::BoardError;
use crate::rules::{capture, earns_extra_turn, is_game_over, sow, sweep_remaining};

/// Most stones a board may hold in total.
pub const MAX_STONES: u32 = u8::MAX as u32;

/// Game board.
///
/// Slots 0-5 are Bottom's pits, 6 is Bottom's store, 7-12 are Top's pits
/// and 13 is Top's store. The whole board is a plain value, so duplicating
/// it for a search branch is a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) slots: [u8; NUM_SLOTS],
    pub(crate) to_move: Side,
}

impl Board {
    /// Standard starting position, Bottom to move.
    pub fn new() -> Self {
        Self::with_side_to_move(Side::Bottom)
    }

    /// Standard starting position with the given side to move.
    pub fn with_side_to_move(side: Side) -> Self {
        let mut slots = [INITIAL_STONES; NUM_SLOTS];
        slots[Side::Bottom.store()] = 0;
        slots[Side::Top.store()] = 0;
        Self {
            slots,
            to_move: side,
        }
    }

    /// Build a board from raw slot counts.
    ///
    /// The counts must total at most [`MAX_STONES`]: a finished game can
    /// sweep every stone into a single store.
    pub fn from_slots(slots: [u8; NUM_SLOTS], to_move: Side) -> Self {
        let board = Self { slots, to_move };
        debug_assert!(board.total_stones() <= MAX_STONES);
        board
    }

    /// Raw slot counts
    #[inline]
    pub fn slots(&self) -> &[u8; NUM_SLOTS] {
        &self.slots
    }

    /// Stones in a side's store
    #[inline]
    pub fn store(&self, side: Side) -> u8 {
        self.slots[side.store()]
    }

    /// Stones on the whole board, stores included
    pub fn total_stones(&self) -> u32 {
        self.slots.iter().map(|&s| u32::from(s)).sum()
    }

    /// Legal actions for the side to move, in canonical order
    pub fn legal_moves(&self) -> Vec<usize> {
        self.to_move
            .actions()
            .filter(|&action| self.legal_move(action))
            .collect()
    }

    /// Winner of a finished game, `None` while running or on a draw
    pub fn winner(&self) -> Option<Side> {
        if !self.game_over() {
            return None;
        }
        let top = self.store(Side::Top);
        let bottom = self.store(Side::Bottom);
        match top.cmp(&bottom) {
            std::cmp::Ordering::Greater => Some(Side::Top),
            std::cmp::Ordering::Less => Some(Side::Bottom),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Two-row diagram with Top's pits drawn right to left.
    pub fn diagram(&self) -> String {
        fn row(slots: &[u8; NUM_SLOTS], pits: impl Iterator<Item = usize>) -> String {
            pits.map(|pit| format!("[{:>2}]", slots[pit])).collect()
        }

        let top = row(&self.slots, Side::Top.actions().rev());
        let bottom = row(&self.slots, Side::Bottom.actions());
        let width = top.len();
        format!(
            "      {top}\n[{:>2}]  {:width$}  [{:>2}]\n      {bottom}\n{:?} to move",
            self.slots[TOP_STORE],
            "",
            self.slots[Side::Bottom.store()],
            self.to_move,
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoard for Board {
    #[inline]
    fn stones_at(&self, slot: usize) -> i32 {
        i32::from(self.slots[slot])
    }

    #[inline]
    fn whose_move(&self) -> Side {
        self.to_move
    }

    #[inline]
    fn game_over(&self) -> bool {
        is_game_over(self)
    }

    #[inline]
    fn legal_move(&self, action: usize) -> bool {
        self.to_move.owns_pit(action) && self.slots[action] > 0 && !self.game_over()
    }

    fn make_move(&mut self, action: usize, announce: bool) {
        debug_assert!(self.legal_move(action), "illegal action {action}");
        let mover = self.to_move;

        let landing = sow(self, action);
        let captured = capture(self, mover, landing);
        let again = earns_extra_turn(mover, landing);
        if !again {
            self.to_move = mover.opponent();
        }
        if is_game_over(self) {
            sweep_remaining(self);
        }

        if announce {
            log::info!(
                "{:?} plays {} (landed {}, captured {}, go again: {})",
                mover,
                action,
                landing,
                captured,
                again
            );
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for count in &self.slots {
            write!(f, "{count} ")?;
        }
        match self.to_move {
            Side::Top => write!(f, "top"),
            Side::Bottom => write!(f, "bottom"),
        }
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse `"c0 c1 ... c13 [top|bottom]"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens: Vec<&str> = s.split_whitespace().collect();

        let to_move = match tokens.last().map(|t| t.to_ascii_lowercase()) {
            Some(t) if t == "top" => Side::Top,
            Some(t) if t == "bottom" => Side::Bottom,
            Some(t) if t.chars().all(|c| c.is_ascii_alphabetic()) => {
                return Err(BoardError::UnknownSide(t))
            }
            // Not a word: the last token is a stone count.
            _ => {
                tokens.push("bottom");
                Side::Bottom
            }
        };
        tokens.pop();

        if tokens.len() != NUM_SLOTS {
            return Err(BoardError::SlotCount(tokens.len()));
        }

        let mut slots = [0u8; NUM_SLOTS];
        for (slot, token) in tokens.iter().enumerate() {
            slots[slot] = token.parse().map_err(|_| BoardError::InvalidCount {
                slot,
                value: (*token).to_string(),
            })?;
        }

        let board = Self { slots, to_move };
        let total = board.total_stones();
        if total > MAX_STONES {
            return Err(BoardError::TooManyStones(total));
        }
        Ok(board)
    }
}
