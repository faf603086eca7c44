//! Headless games between agents and the statistics collected over them.

pub mod episode;
pub mod metrics;

pub use episode::{play_game, GameRecord};
pub use metrics::MatchStats;
