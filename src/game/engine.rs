use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, info};
use thiserror::Error;

use crate::board::{Board, BoardError, Outcome, Player};
use crate::minimax::{Minimax, Move, SearchStats};

/// Core engine state and configuration
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    pub starting_position: Board,
    pub first_player: Player,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_position: Board::default(),
            first_player: Player::X,
        }
    }
}

/// Game state and runtime info
#[derive(Clone, Debug)]
struct GameState {
    board: Board,
    turn: Player,
    move_history: Vec<usize>,
    last_score: Option<i32>,
}

impl GameState {
    fn new(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position,
            turn: config.first_player,
            move_history: Vec::new(),
            last_score: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("The game is already over: {outcome}")]
    GameOver { outcome: Outcome },
    #[error("Board error: {error}")]
    BoardError { error: BoardError },
    #[error("No available moves")]
    NoAvailableMoves,
    #[error("Background search failed")]
    SearchFailed,
}

impl From<BoardError> for EngineError {
    fn from(error: BoardError) -> Self {
        EngineError::BoardError { error }
    }
}

/// A search running on a worker thread. The result only applies to the
/// position it was started from; see `Engine::resolve_pending`.
pub struct PendingMove {
    generation: u64,
    handle: JoinHandle<Move>,
}

impl PendingMove {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Drives a single game: tracks the board and side to move, validates moves
/// and asks the searcher for the computer's moves.
pub struct Engine {
    config: EngineConfig,
    state: GameState,
    searcher: Arc<Minimax>,
    // bumped whenever the position changes so stale background results can be detected
    generation: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_searcher(config, Arc::new(Minimax::new()))
    }

    /// Builds an engine that shares `searcher` (and its caches) with others.
    pub fn with_searcher(config: EngineConfig, searcher: Arc<Minimax>) -> Self {
        Self {
            config,
            state: GameState::new(config),
            searcher,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn turn(&self) -> Player {
        self.state.turn
    }

    pub fn history(&self) -> &[usize] {
        &self.state.move_history
    }

    pub fn last_move(&self) -> Option<usize> {
        self.state.move_history.last().copied()
    }

    pub fn last_score(&self) -> Option<i32> {
        self.state.last_score
    }

    pub fn check_game_over(&self) -> Option<Outcome> {
        self.state.board.evaluate_outcome()
    }

    /// Plays `index` for the side to move and passes the turn.
    pub fn make_move(&mut self, index: usize) -> Result<(), EngineError> {
        if let Some(outcome) = self.check_game_over() {
            return Err(EngineError::GameOver { outcome });
        }

        let player = self.state.turn;
        self.state.board = self.state.board.try_apply_move(index, player)?;
        self.state.move_history.push(index);
        self.state.turn = player.opposite();
        self.generation += 1;

        info!("{} played cell {}", player, index);
        Ok(())
    }

    pub fn get_best_move(&mut self) -> Result<Move, EngineError> {
        if let Some(outcome) = self.check_game_over() {
            return Err(EngineError::GameOver { outcome });
        }

        let best_move = self.searcher.minimax(&self.state.board, self.state.turn);
        self.state.last_score = Some(best_move.value);
        Ok(best_move)
    }

    /// Searches for and plays the best move, returning the cell played.
    pub fn make_best_move(&mut self) -> Result<usize, EngineError> {
        let best_move = self.get_best_move()?;
        let index = best_move.index.ok_or(EngineError::NoAvailableMoves)?;
        self.make_move(index)?;
        Ok(index)
    }

    /// Starts searching the current position on a worker thread.
    pub fn spawn_best_move(&self) -> PendingMove {
        let searcher = Arc::clone(&self.searcher);
        let board = self.state.board;
        let player = self.state.turn;

        debug!("spawning background search (generation {})", self.generation);
        PendingMove {
            generation: self.generation,
            handle: thread::spawn(move || searcher.minimax(&board, player)),
        }
    }

    /// Waits for a background search and plays its move, unless the position
    /// changed (a move or a reset) since the search was spawned, in which case
    /// the result is discarded and `Ok(None)` is returned.
    pub fn resolve_pending(&mut self, pending: PendingMove) -> Result<Option<usize>, EngineError> {
        let best_move = pending
            .handle
            .join()
            .map_err(|_| EngineError::SearchFailed)?;

        if pending.generation != self.generation {
            debug!(
                "discarding stale search result {:?} (generation {}, now {})",
                best_move, pending.generation, self.generation
            );
            return Ok(None);
        }

        match best_move.index {
            Some(index) => {
                self.state.last_score = Some(best_move.value);
                self.make_move(index)?;
                Ok(Some(index))
            }
            None => Ok(None),
        }
    }

    /// Returns to the configured starting position. Caches are kept.
    pub fn reset(&mut self) {
        self.state = GameState::new(self.config);
        self.generation += 1;
        info!("game reset");
    }

    pub fn search_stats(&self) -> SearchStats {
        self.searcher.stats()
    }
}
