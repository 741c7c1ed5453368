//! Evaluation module for Kalah positions
//!
//! This module provides the static evaluator called at search leaves.
//! The evaluation considers:
//! - Store and on-board material differentials
//! - Extra-turn ("go again") opportunities
//! - Captures available to the side to move
//! - A penalty once the opponent nears a winning store

pub mod heuristic;
pub mod weights;

pub use heuristic::{breakdown, evaluate, Evaluation};
pub use weights::{near_win_score, Weights};
