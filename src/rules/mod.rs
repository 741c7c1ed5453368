//! Kalah rules for the reference board
//!
//! This module implements the rule set used by [`crate::Board`]:
//! - Sowing with the extra-turn rule
//! - Capture from an empty pit on the mover's own row
//! - End of game and the final sweep

pub mod capture;
pub mod end;
pub mod sowing;

// Re-exports for convenient access
pub use capture::capture;
pub use end::{is_game_over, side_is_empty, sweep_remaining};
pub use sowing::{earns_extra_turn, sow};
