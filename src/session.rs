//! An owned game session: board, side to move and search configuration

use crate::board::{Board, Cell, MoveError};
use crate::config::GameConfig;
use crate::search::{SearchConfig, SearchError, Searcher};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameStatus {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// Holds everything one game needs, so controllers pass the session around
/// instead of sharing ambient state. Player one always moves first.
pub struct GameSession {
    board: Board,
    player_one: bool,
    status: GameStatus,
    search: SearchConfig,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.rows, config.cols),
            player_one: true,
            status: GameStatus::Playing,
            search: config.search.clone(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_player_one_turn(&self) -> bool {
        self.player_one
    }

    pub fn current_piece(&self) -> Cell {
        if self.player_one {
            Cell::PlayerOne
        } else {
            Cell::PlayerTwo
        }
    }

    /// Drops the side-to-move's piece into `column`, recomputes the game
    /// status and flips the turn. The caller should check `status` first;
    /// playing on a finished game still validates the column as usual.
    pub fn play(&mut self, column: usize) -> Result<GameStatus, MoveError> {
        let piece = self.current_piece();
        self.board.apply_move(column, piece)?;

        self.status = match self.board.check_winner() {
            Cell::PlayerOne => GameStatus::PlayerOneWin,
            Cell::PlayerTwo => GameStatus::PlayerTwoWin,
            Cell::Empty => {
                if self.board.is_full() {
                    GameStatus::Draw
                } else {
                    GameStatus::Playing
                }
            }
        };
        self.player_one = !self.player_one;

        Ok(self.status)
    }

    /// Runs the configured search for the side to move, plays the chosen
    /// column and returns it
    pub fn ai_move(&mut self) -> Result<usize, SearchError> {
        let mut searcher = Searcher::new(self.current_piece(), self.search.clone());
        let column = searcher.choose_move(&self.board)?;
        // the searcher only ever returns playable columns
        self.play(column)
            .expect("searcher returned an unplayable column");
        Ok(column)
    }
}
