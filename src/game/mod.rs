//! Core game logic: board, players, win detection, and the per-match state
//! machine.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_SIDE};
pub use player::{Ordinal, Player, PlayerFactory};
pub use state::{GameObserver, GameState, Placement, Status};
pub use win::{has_win, RUN_LENGTH};
