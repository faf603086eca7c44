//! Computer players: the static line evaluator, the alpha-beta minimax
//! engine, and the `Agent` trait that puts them (and a random baseline)
//! behind one interface.

mod agent;
pub mod eval;
mod random;
pub mod score;
pub mod search;

pub use agent::Agent;
pub use eval::{Evaluator, LineEvaluator, LineScore, LineTally};
pub use random::RandomAgent;
pub use score::{Evaluation, Score, SENTINEL};
pub use search::{MinimaxAgent, MinimaxEngine, SearchConfig, SearchReport, DEFAULT_DEPTH};
