//! Depth-limited minimax with alpha-beta pruning over board clones

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Cell};
use crate::evaluate::{evaluate_position, EvalConfig, EvalPolicy};

/// Score of a forced win, before the depth adjustment that prefers faster
/// wins. Far above anything the heuristic can sum to.
pub const WIN_SCORE: i32 = 1_000_000;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum SearchError {
    #[error("no legal move available")]
    NoLegalMove,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum recursion depth in plies
    pub depth: u32,
    /// Alpha-beta cutoffs on or off. Disabling changes the number of nodes
    /// visited, never the result; kept as a diagnostic switch.
    pub prune: bool,
    pub eval: EvalConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 6,
            prune: true,
            eval: EvalConfig::default(),
        }
    }
}

/// An adversary that picks columns by exploring hypothetical futures on
/// private clones of the board; the caller's board is never touched.
pub struct Searcher {
    piece: Cell,
    config: SearchConfig,

    /// The number of nodes visited by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` playing `piece`
    pub fn new(piece: Cell, config: SearchConfig) -> Self {
        Self {
            piece,
            config,
            node_count: 0,
        }
    }

    pub fn piece(&self) -> Cell {
        self.piece
    }

    /// Runs the full search and returns only the chosen column
    pub fn choose_move(&mut self, board: &Board) -> Result<usize, SearchError> {
        self.search(board).map(|(column, _)| column)
    }

    /// Runs the full search, returning the chosen column and its minimax value.
    ///
    /// Fails with `NoLegalMove` when the board has no playable column, when
    /// the position is already terminal, or on a degenerate zero-depth call.
    pub fn search(&mut self, board: &Board) -> Result<(usize, i32), SearchError> {
        if self.config.depth == 0 {
            return Err(SearchError::NoLegalMove);
        }
        let (column, value) = self.minimax(board, self.config.depth, i32::MIN, i32::MAX, true);
        match column {
            Some(column) => Ok((column, value)),
            None => Err(SearchError::NoLegalMove),
        }
    }

    /// One node of the recursion.
    ///
    /// Columns are explored in ascending index order at every level, which
    /// fixes the column chosen on score ties. Each child move is played on a
    /// clone of the board; the clone is discarded instead of undoing the move,
    /// so no aliasing with the caller's board is possible.
    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (Option<usize>, i32) {
        self.node_count += 1;

        // terminal tests come before the depth cutoff
        let winner = board.check_winner();
        if !winner.is_empty() {
            // faster wins and slower losses score better
            let value = WIN_SCORE + depth as i32;
            return if winner == self.piece {
                (None, value)
            } else {
                (None, -value)
            };
        }
        if board.is_full() {
            return (None, 0);
        }

        if depth == 0 {
            return (None, self.leaf_score(board, maximizing));
        }

        let mover = if maximizing {
            self.piece
        } else {
            self.piece.opponent()
        };

        let mut best_column = None;
        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };

        for column in 0..board.cols() {
            if !board.is_legal(column) {
                continue;
            }
            let mut child = board.clone();
            let row = match child.next_open_row(column) {
                Ok(row) => row,
                Err(_) => continue,
            };
            child.place(row, column, mover);

            let (_, value) = self.minimax(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_column = Some(column);
                }
                if self.config.prune {
                    alpha = alpha.max(best_value);
                    if alpha >= beta {
                        break;
                    }
                }
            } else {
                if value < best_value {
                    best_value = value;
                    best_column = Some(column);
                }
                if self.config.prune {
                    beta = beta.min(best_value);
                    if alpha >= beta {
                        break;
                    }
                }
            }
        }

        (best_column, best_value)
    }

    fn leaf_score(&self, board: &Board, maximizing: bool) -> i32 {
        match self.config.eval.policy {
            EvalPolicy::TwoSided => evaluate_position(board, self.piece, &self.config.eval),
            EvalPolicy::OneSided => {
                if maximizing {
                    evaluate_position(board, self.piece, &self.config.eval)
                } else {
                    -evaluate_position(board, self.piece.opponent(), &self.config.eval)
                }
            }
        }
    }
}

/// The non-search "pick best move" mode: scores each legal drop with the
/// static evaluator one ply ahead and takes the first best column
pub fn greedy_move(board: &Board, piece: Cell, eval: &EvalConfig) -> Result<usize, SearchError> {
    let mut best: Option<(usize, i32)> = None;

    for column in 0..board.cols() {
        if !board.is_legal(column) {
            continue;
        }
        let mut child = board.clone();
        let row = match child.next_open_row(column) {
            Ok(row) => row,
            Err(_) => continue,
        };
        child.place(row, column, piece);
        let score = evaluate_position(&child, piece, eval);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((column, score));
        }
    }

    best.map(|(column, _)| column).ok_or(SearchError::NoLegalMove)
}
