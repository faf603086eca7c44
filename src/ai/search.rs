//! Depth-limited alpha-beta minimax over a single shared board.
//!
//! The engine side maximizes; plies alternate opponent (odd) and engine
//! (even), ply 0 being the candidate move made at the root. Bounds are
//! tightened from the running best of already searched siblings before
//! each child, and a node stops scanning once `beta < alpha`. This is a
//! little weaker than textbook alpha-beta and decides which column wins a
//! tie, so it must not be "fixed".

use std::ops::{Deref, DerefMut};

use crate::error::{ConfigError, EngineError, MoveError};
use crate::game::{Board, Dimensions, GameState, Player};

use super::agent::Agent;
use super::eval::{Evaluator, LineEvaluator};
use super::score::{Evaluation, Score};

/// Search horizon in plies.
pub const DEFAULT_DEPTH: u8 = 7;
/// Deepest horizon the configuration accepts.
pub const MAX_DEPTH: u8 = 16;

/// Search engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be in [1, {MAX_DEPTH}] (got {})",
                self.depth
            )));
        }
        Ok(())
    }
}

/// Which side moves at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mover {
    /// The engine side.
    Maximizer,
    /// The engine's opponent.
    Minimizer,
}

impl Mover {
    fn next(self) -> Mover {
        match self {
            Mover::Maximizer => Mover::Minimizer,
            Mover::Minimizer => Mover::Maximizer,
        }
    }

    fn player(self, engine_side: Player) -> Player {
        match self {
            Mover::Maximizer => engine_side,
            Mover::Minimizer => engine_side.other(),
        }
    }
}

/// A simulated move that is taken back when the guard is dropped.
struct MoveGuard<'a> {
    board: &'a mut Board,
    row: usize,
    column: usize,
}

impl<'a> MoveGuard<'a> {
    fn apply(board: &'a mut Board, column: usize, player: Player) -> Result<Self, MoveError> {
        let row = board.apply(column, player)?;
        Ok(MoveGuard { board, row, column })
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo(self.row, self.column);
    }
}

/// Outcome of a root search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// Column chosen for the engine side.
    pub column: usize,
    /// Score of the chosen column.
    pub score: Score,
    /// Every legal root column with its score, ascending by column.
    pub candidates: Vec<(usize, Score)>,
    /// Positions visited below the root.
    pub nodes: u64,
}

/// Alpha-beta minimax engine for one board size.
pub struct MinimaxEngine {
    dims: Dimensions,
    depth: u8,
    evaluator: Box<dyn Evaluator>,
}

impl MinimaxEngine {
    pub fn new(dims: Dimensions, config: SearchConfig) -> Self {
        Self::with_evaluator(dims, config, Box::new(LineEvaluator))
    }

    pub fn with_evaluator(
        dims: Dimensions,
        config: SearchConfig,
        evaluator: Box<dyn Evaluator>,
    ) -> Self {
        MinimaxEngine {
            dims,
            depth: config.depth,
            evaluator,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Static evaluation of `board` for `side`.
    pub fn evaluate(&self, board: &Board, side: Player) -> Evaluation {
        self.evaluator.evaluate(board, side)
    }

    /// Pick a column for `side`. The board is back to its input state on
    /// return.
    pub fn choose_move(&self, board: &mut Board, side: Player) -> Result<usize, EngineError> {
        self.analyse(board, side).map(|report| report.column)
    }

    /// Search every legal column for `side` and report all root scores.
    ///
    /// Columns are tried in ascending order and a candidate replaces the
    /// current best when it scores greater than *or equal to* it, so ties
    /// go to the highest column.
    pub fn analyse(&self, board: &mut Board, side: Player) -> Result<SearchReport, EngineError> {
        if board.dimensions() != self.dims {
            return Err(EngineError::DimensionMismatch {
                engine: self.dims,
                board: board.dimensions(),
            });
        }

        let mut search = Search {
            evaluator: self.evaluator.as_ref(),
            side,
            depth: self.depth,
            nodes: 0,
        };
        let mut best: Option<(usize, Score)> = None;
        let mut candidates = Vec::new();

        for column in 0..board.cols() {
            if board.is_column_full(column) {
                continue;
            }
            let score = {
                let mut trial = MoveGuard::apply(board, column, side)?;
                search.search(
                    &mut trial,
                    1,
                    Mover::Minimizer,
                    Score::NEG_INFINITY,
                    Score::POS_INFINITY,
                )?
            };
            tracing::debug!(column, %score, "root candidate scored");
            candidates.push((column, score));

            if best.map_or(true, |(_, value)| score >= value) {
                best = Some((column, score));
            }
        }

        let (column, score) = best.ok_or(EngineError::NoLegalMoves)?;
        tracing::info!(
            column,
            %score,
            nodes = search.nodes,
            side = side.name(),
            "engine move chosen"
        );

        Ok(SearchReport {
            column,
            score,
            candidates,
            nodes: search.nodes,
        })
    }
}

/// Per-call search state.
struct Search<'e> {
    evaluator: &'e dyn Evaluator,
    side: Player,
    depth: u8,
    nodes: u64,
}

impl Search<'_> {
    fn search(
        &mut self,
        board: &mut Board,
        ply: u8,
        mover: Mover,
        mut alpha: Score,
        mut beta: Score,
    ) -> Result<Score, EngineError> {
        self.nodes += 1;

        let eval = self.evaluator.evaluate(board, self.side);
        if eval.is_decisive() || ply >= self.depth || board.is_full() {
            return Ok(Score::terminal(eval, ply));
        }

        let player = mover.player(self.side);
        match mover {
            Mover::Maximizer => {
                let mut best = Score::NEG_INFINITY;
                for column in 0..board.cols() {
                    if board.is_column_full(column) {
                        continue;
                    }
                    alpha = alpha.max(best);
                    if beta < alpha {
                        break;
                    }
                    let mut child = MoveGuard::apply(board, column, player)?;
                    best = best.max(self.search(&mut child, ply + 1, mover.next(), alpha, beta)?);
                }
                Ok(best)
            }
            Mover::Minimizer => {
                let mut best = Score::POS_INFINITY;
                for column in 0..board.cols() {
                    if board.is_column_full(column) {
                        continue;
                    }
                    beta = beta.min(best);
                    if beta < alpha {
                        break;
                    }
                    let mut child = MoveGuard::apply(board, column, player)?;
                    best = best.min(self.search(&mut child, ply + 1, mover.next(), alpha, beta)?);
                }
                Ok(best)
            }
        }
    }
}

/// Agent that plays the engine's choice for whichever side is to move.
pub struct MinimaxAgent {
    engine: MinimaxEngine,
}

impl MinimaxAgent {
    pub fn new(dims: Dimensions, config: SearchConfig) -> Self {
        MinimaxAgent {
            engine: MinimaxEngine::new(dims, config),
        }
    }

    pub fn engine(&self) -> &MinimaxEngine {
        &self.engine
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, EngineError> {
        let mut board = state.board().clone();
        self.engine.choose_move(&mut board, state.current_player())
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
