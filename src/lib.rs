//! # Connect Four Engine
//!
//! Connect Four against a depth-limited alpha-beta minimax opponent.
//! Boards of any size from 4x4 up are supported; the terminal UI is built
//! with Ratatui and a headless arena runs engine matches.
//!
//! ## Modules
//!
//! - [`game`]: board, players, four-cell windows, win detection, game state
//! - [`ai`]: line-count evaluator, minimax search, agents
//! - [`session`]: human versus engine turn loop
//! - [`arena`]: agent-versus-agent games and match statistics
//! - [`ui`]: terminal game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
