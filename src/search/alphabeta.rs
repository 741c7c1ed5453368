//! Depth-limited minimax with alpha-beta pruning
//!
//! Top is the maximizing side and Bottom the minimizing side; a node's role
//! comes from whoever is to move there, so an extra turn simply produces two
//! maximizing (or minimizing) layers in a row.
//!
//! # Features
//!
//! - Fixed canonical move order: each side's own six pits, low index first
//! - Fail-soft alpha-beta: a node may return a score outside its window
//! - Deadline check on entry to every node, reported as [`DeadlineExceeded`]
//!   and propagated unchanged to the caller
//!
//! # Example
//!
//! ```
//! use kalah::board::Board;
//! use kalah::search::{SearchBudget, Searcher};
//!
//! let budget = SearchBudget::unlimited();
//! let mut searcher = Searcher::new(&budget);
//!
//! let result = searcher.search_root(&Board::new(), 4).unwrap();
//! assert!(Board::new().legal_moves().contains(&result.best_move));
//! ```

use crate::board::GameBoard;
use crate::eval::evaluate;

use super::clock::{Clock, SearchBudget};

/// The per-move allowance ran out while the search was in progress.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search deadline exceeded")]
pub struct DeadlineExceeded;

/// Outcome of one search call: a finished result or an abandoned one.
pub type SearchOutcome = Result<SearchResult, DeadlineExceeded>;

/// Value produced by every search node as it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best action at this node (0 at leaves, where it has no meaning)
    pub best_move: usize,
    /// Score in Top's frame
    pub score: i32,
    /// Whether the line behind `score` reaches the end of the game
    pub terminal: bool,
}

impl SearchResult {
    /// Placeholder used before any depth has completed.
    pub const fn neutral() -> Self {
        Self {
            best_move: 0,
            score: 0,
            terminal: false,
        }
    }

    #[inline]
    fn leaf(score: i32, terminal: bool) -> Self {
        Self {
            best_move: 0,
            score,
            terminal,
        }
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered (including leaves)
    pub nodes: u64,
    /// Leaves handed to the evaluator
    pub leaves: u64,
    /// Nodes that stopped enumerating because alpha met beta
    pub cutoffs: u64,
}

/// Minimax searcher bound to the budget of one move decision.
pub struct Searcher<'a, C: Clock> {
    budget: &'a SearchBudget<C>,
    pruning: bool,
    stats: SearchStats,
}

impl<'a, C: Clock> Searcher<'a, C> {
    /// Searcher with alpha-beta pruning.
    #[must_use]
    pub fn new(budget: &'a SearchBudget<C>) -> Self {
        Self {
            budget,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Exhaustive minimax over the same code path, never pruning.
    #[must_use]
    pub fn without_pruning(budget: &'a SearchBudget<C>) -> Self {
        Self {
            pruning: false,
            ..Self::new(budget)
        }
    }

    /// Counters accumulated over every search run by this searcher
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search `depth` plies with the widest possible window.
    pub fn search_root<B: GameBoard>(&mut self, board: &B, depth: u32) -> SearchOutcome {
        self.search(board, depth, i32::MIN, i32::MAX)
    }

    /// Search `board` to `depth` plies inside the `(alpha, beta)` window.
    ///
    /// The board is never modified; every explored action is applied to a
    /// private clone.
    pub fn search<B: GameBoard>(
        &mut self,
        board: &B,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchOutcome {
        if self.budget.is_exhausted() {
            return Err(DeadlineExceeded);
        }
        self.stats.nodes += 1;

        let game_over = board.game_over();
        if game_over || depth == 0 {
            self.stats.leaves += 1;
            return Ok(SearchResult::leaf(evaluate(board), game_over));
        }

        let side = board.whose_move();
        let maximizing = side.is_maximizer();
        // Stays as-is if no action turns out to be legal.
        let mut best = SearchResult {
            best_move: 0,
            score: if maximizing { i32::MIN } else { i32::MAX },
            terminal: false,
        };

        for action in side.actions() {
            if self.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
            if !board.legal_move(action) {
                continue;
            }

            let mut child = board.clone();
            child.make_move(action, false);
            let reply = self.search(&child, depth - 1, alpha, beta)?;

            if maximizing {
                if reply.score > best.score {
                    best = SearchResult {
                        best_move: action,
                        score: reply.score,
                        terminal: reply.terminal,
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if reply.score < best.score {
                    best = SearchResult {
                        best_move: action,
                        score: reply.score,
                        terminal: reply.terminal,
                    };
                }
                beta = beta.min(best.score);
            }
        }

        Ok(best)
    }
}
