//! Kalah move-selection engine
//!
//! A time-bounded adversarial search for the two-player pit-and-store game
//! Kalah (six pits and one store per side):
//! - Iterative deepening under a per-move wall-clock allowance
//! - Minimax with alpha-beta pruning in a fixed move order
//! - A five-term heuristic evaluator, always scored from Top's side
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: The board interface the search consumes, plus a reference board
//! - [`rules`]: Sowing, capture and end-of-game rules for the reference board
//! - [`eval`]: Static evaluation used at search leaves
//! - [`search`]: Time budget and alpha-beta minimax
//! - [`engine`]: Iterative deepening driver returning the move to play
//! - [`config`]: TOML-loadable engine settings
//!
//! # Quick Start
//!
//! ```
//! use kalah::{AIEngine, Board, EngineConfig, GameBoard};
//!
//! let engine = AIEngine::with_config(EngineConfig {
//!     max_depth: Some(6),
//!     ..EngineConfig::default()
//! });
//! let mut board = Board::new();
//!
//! let result = engine.choose_move_with_stats(&board, 200);
//! assert!(board.legal_move(result.best_move));
//! board.make_move(result.best_move, false);
//! ```
//!
//! # Score convention
//!
//! Top maximizes and Bottom minimizes. Every score the crate produces is
//! positive when Top is ahead, whichever side is to move.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, GameBoard, Side, NUM_SLOTS};
pub use config::EngineConfig;
pub use engine::{choose_move, AIEngine, MoveResult};
pub use error::{BoardError, ConfigError};
pub use search::{SearchBudget, SearchResult, Searcher};
