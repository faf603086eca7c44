//! One human against the engine: the turn loop a front end drives.
//!
//! After every move the board is scanned for a winning line. The engine
//! reply can be computed here ([`Session::engine_move`]) or elsewhere
//! with [`Session::engine`] and then committed with
//! [`Session::apply_engine_move`], which lets a UI keep the search off
//! its event thread.

use std::sync::Arc;

use crate::ai::{MinimaxEngine, SearchConfig};
use crate::error::{ConfigError, EngineError, MoveError};
use crate::game::{Dimensions, GameOutcome, GameState, Player};

/// A move that was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
    pub column: usize,
    pub row: usize,
    /// Set when this move ended the game.
    pub outcome: Option<GameOutcome>,
}

pub struct Session {
    state: GameState,
    engine: Arc<MinimaxEngine>,
    human: Player,
}

impl Session {
    pub fn new(
        dims: Dimensions,
        config: SearchConfig,
        human: Player,
        human_first: bool,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let first = if human_first { human } else { human.other() };
        Ok(Session {
            state: GameState::new(dims, first)?,
            engine: Arc::new(MinimaxEngine::new(dims, config)),
            human,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn engine_side(&self) -> Player {
        self.human.other()
    }

    /// Shared handle to the engine, for searching off-thread.
    pub fn engine(&self) -> Arc<MinimaxEngine> {
        Arc::clone(&self.engine)
    }

    /// True when the game is running and the engine is to move.
    pub fn awaiting_engine(&self) -> bool {
        !self.state.is_terminal() && self.state.current_player() == self.engine_side()
    }

    /// Play the human's column. Full or out-of-range columns are rejected
    /// and leave the board untouched.
    pub fn human_move(&mut self, column: usize) -> Result<Turn, MoveError> {
        self.play(self.human, column)
    }

    /// Search and play the engine's reply.
    pub fn engine_move(&mut self) -> Result<Turn, EngineError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver.into());
        }
        let mut board = self.state.board().clone();
        let column = self.engine.choose_move(&mut board, self.engine_side())?;
        Ok(self.play(self.engine_side(), column)?)
    }

    /// Play a column the engine chose elsewhere.
    pub fn apply_engine_move(&mut self, column: usize) -> Result<Turn, MoveError> {
        self.play(self.engine_side(), column)
    }

    fn play(&mut self, player: Player, column: usize) -> Result<Turn, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.state.current_player() != player {
            return Err(MoveError::OutOfTurn(player));
        }
        let row = self.state.apply_move_mut(column)?;
        let outcome = self.state.outcome();
        tracing::debug!(player = player.name(), column, row, "move played");
        Ok(Turn {
            player,
            column,
            row,
            outcome,
        })
    }

    /// Start a new game with the same sides and move order.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
