//! Move selection by iterative deepening under a time budget
//!
//! The driver runs the minimax search at depth 1, 2, 3, ... until the
//! per-move allowance runs out or a completed search reports a decided game.
//! A depth that is interrupted by the deadline is thrown away; the move comes
//! from the deepest depth that finished.
//!
//! # Example
//!
//! ```
//! use kalah::{AIEngine, Board, GameBoard};
//!
//! let engine = AIEngine::new();
//! let board = Board::new();
//!
//! let action = engine.choose_move(&board, 50);
//! assert!(board.legal_move(action));
//! ```

use std::time::{Duration, Instant};

use crate::board::GameBoard;
use crate::config::EngineConfig;
use crate::search::{
    Clock, DeadlineExceeded, SearchBudget, SearchResult, SearchStats, Searcher,
};

/// Result of a move decision with search statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Action to play
    pub best_move: usize,
    /// Score of the chosen line, positive favours Top
    pub score: i32,
    /// Deepest depth that completed (0 if none did)
    pub depth: u32,
    /// Whether the chosen line reaches the end of the game
    pub terminal: bool,
    /// Whether the last attempted depth was cut off by the deadline
    pub timed_out: bool,
    /// Counters summed over every depth, including the abandoned one
    pub stats: SearchStats,
    /// Wall-clock time spent
    pub time_ms: u64,
}

/// Kalah move selector.
///
/// Holds only configuration; each decision gets a fresh budget and searcher,
/// so nothing carries over from one move to the next.
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Engine with [`EngineConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Best move using the configured time limit.
    #[must_use]
    pub fn get_move<B: GameBoard>(&self, board: &B) -> usize {
        self.choose_move(board, self.config.time_limit_ms)
    }

    /// Best move for the side to act within `time_allowance_ms`.
    #[must_use]
    pub fn choose_move<B: GameBoard>(&self, board: &B, time_allowance_ms: u64) -> usize {
        self.choose_move_with_stats(board, time_allowance_ms)
            .best_move
    }

    /// Best move plus search statistics, timed by the wall clock.
    #[must_use]
    pub fn choose_move_with_stats<B: GameBoard>(
        &self,
        board: &B,
        time_allowance_ms: u64,
    ) -> MoveResult {
        let budget = SearchBudget::start(Duration::from_millis(time_allowance_ms));
        self.choose_move_with_clock(board, &budget)
    }

    /// Iterative deepening against an arbitrary budget.
    ///
    /// The deadline never escapes this function: an interrupted depth is
    /// discarded and the previous result is kept.
    #[must_use]
    pub fn choose_move_with_clock<B: GameBoard, C: Clock>(
        &self,
        board: &B,
        budget: &SearchBudget<C>,
    ) -> MoveResult {
        let started = Instant::now();
        let mut searcher = if self.config.pruning {
            Searcher::new(budget)
        } else {
            Searcher::without_pruning(budget)
        };

        let mut best = SearchResult::neutral();
        let mut completed = 0;
        let mut timed_out = false;

        while !best.terminal {
            let depth = completed + 1;
            if self.config.max_depth.is_some_and(|max| depth > max) {
                break;
            }

            match searcher.search_root(board, depth) {
                Ok(result) => {
                    log::debug!(
                        "depth {} done: move {} score {} terminal {} nodes {}",
                        depth,
                        result.best_move,
                        result.score,
                        result.terminal,
                        searcher.stats().nodes
                    );
                    best = result;
                    completed = depth;
                }
                Err(DeadlineExceeded) => {
                    log::debug!("depth {} abandoned at deadline", depth);
                    timed_out = true;
                    break;
                }
            }
        }

        let best_move = Self::playable(board, best.best_move);
        let result = MoveResult {
            best_move,
            score: best.score,
            depth: completed,
            terminal: best.terminal,
            timed_out,
            stats: searcher.stats().clone(),
            time_ms: elapsed_ms(started.elapsed()),
        };

        log::info!(
            "{:?} chooses {} (score {}, depth {}, {} nodes, {}ms)",
            board.whose_move(),
            result.best_move,
            result.score,
            result.depth,
            result.stats.nodes,
            result.time_ms
        );
        result
    }

    /// `action` if it is legal, otherwise the first legal action in
    /// canonical order. Only the neutral fallback can be illegal.
    fn playable<B: GameBoard>(board: &B, action: usize) -> usize {
        if board.legal_move(action) {
            return action;
        }
        match board
            .whose_move()
            .actions()
            .find(|&candidate| board.legal_move(candidate))
        {
            Some(candidate) => {
                log::warn!(
                    "no depth completed in time, playing first legal action {}",
                    candidate
                );
                candidate
            }
            None => action,
        }
    }
}

/// Whole milliseconds in `elapsed`, saturating at `u64::MAX`.
fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Pick a move for the side to act with the default engine settings.
#[must_use]
pub fn choose_move<B: GameBoard>(board: &B, time_allowance_ms: u64) -> usize {
    AIEngine::new().choose_move(board, time_allowance_ms)
}
