//! A two-player engine for the board game 'Connect 4' with a minimax adversary
//!
//! The board handles move legality and win/draw detection on a configurable
//! grid; the searcher explores hypothetical futures with depth-limited
//! minimax, alpha-beta pruning and a windowed positional heuristic, and
//! returns the column it wants to play.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::board::{Board, Cell};
//! use connect4_engine::search::{SearchConfig, Searcher};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new(6, 7);
//! board.apply_move(3, Cell::PlayerOne)?;
//!
//! let config = SearchConfig { depth: 4, ..SearchConfig::default() };
//! let mut searcher = Searcher::new(Cell::PlayerTwo, config);
//! let reply = searcher.choose_move(&board)?;
//!
//! assert!(board.is_legal(reply));
//!# Ok(())
//!# }
//! ```

pub use anyhow;

pub mod board;

pub mod evaluate;

pub mod search;

pub mod session;

pub mod config;


/// The default number of rows on the game board
pub const DEFAULT_ROWS: usize = 6;

/// The default number of columns on the game board
pub const DEFAULT_COLS: usize = 7;
