//! Core Connect Four game logic: board representation with reversible moves,
//! four-cell windows, win detection, player types, and the game state machine.

mod board;
mod player;
mod state;
mod win;
pub mod window;

pub use board::{Board, Cell, Dimensions, COLS, MIN_DIMENSION, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use win::{detect_win, WinLine};
pub use window::{Coord, Orientation};
