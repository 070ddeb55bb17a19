//! Terminal UI: draws the board and turns key presses into column choices.

mod app;
mod game_view;

pub use app::{App, Feedback};
pub use game_view::player_color;
