use crate::error::EngineError;
use crate::game::GameState;

/// Universal interface for anything that picks columns.
pub trait Agent {
    /// Select a column for the player to move in `state`.
    fn select_action(&mut self, state: &GameState) -> Result<usize, EngineError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
