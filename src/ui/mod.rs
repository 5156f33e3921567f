//! Terminal UI: the game view with the three pegs, the held disk, and the
//! optional solution panel.

mod app;
mod game_view;
pub mod tower_widget;

pub use app::App;
