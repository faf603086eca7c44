//! Terminal UI: a human plays the engine on a configurable board.
//!
//! The search runs on a worker thread so the event loop keeps redrawing
//! while the engine thinks.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
