//! Search module for the Kalah engine
//!
//! Contains:
//! - The per-move time budget and injectable clocks
//! - Depth-limited alpha-beta minimax

pub mod alphabeta;
pub mod clock;

pub use alphabeta::{DeadlineExceeded, SearchOutcome, SearchResult, SearchStats, Searcher};
pub use clock::{Clock, SearchBudget, SteppingClock, Stopwatch};
