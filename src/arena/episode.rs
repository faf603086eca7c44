use crate::ai::Agent;
use crate::error::{ConfigError, EngineError};
use crate::game::{Dimensions, GameOutcome, GameState, Player};

/// A finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: Option<Player>,
    /// Columns played, oldest first.
    pub moves: Vec<usize>,
    pub final_state: GameState,
}

impl GameRecord {
    pub fn game_length(&self) -> usize {
        self.moves.len()
    }
}

/// Errors from running a game between agents.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("agent {agent} failed: {source}")]
    Agent { agent: String, source: EngineError },

    #[error("agent {agent} selected illegal action {action} (legal: {legal:?})")]
    IllegalAction {
        agent: String,
        action: usize,
        legal: Vec<usize>,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Play one complete game. `red` and `yellow` choose for their own colour;
/// `first` moves first.
pub fn play_game<'a>(
    red: &'a mut dyn Agent,
    yellow: &'a mut dyn Agent,
    dims: Dimensions,
    first: Player,
) -> Result<GameRecord, GameError> {
    let mut state = GameState::new(dims, first)?;

    while !state.is_terminal() {
        let agent = match state.current_player() {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };
        let action = agent.select_action(&state).map_err(|source| GameError::Agent {
            agent: agent.name().to_string(),
            source,
        })?;
        if state.apply_move_mut(action).is_err() {
            return Err(GameError::IllegalAction {
                agent: agent.name().to_string(),
                action,
                legal: state.legal_actions(),
            });
        }
    }

    let winner = match state.outcome() {
        Some(GameOutcome::Winner(p)) => Some(p),
        _ => None,
    };
    tracing::debug!(
        winner = winner.map(Player::name),
        length = state.move_count(),
        "game finished"
    );

    Ok(GameRecord {
        winner,
        moves: state.moves().to_vec(),
        final_state: state,
    })
}
