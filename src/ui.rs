//! Ratatui front-end. It owns the practice session, turns key presses and
//! mouse clicks into session operations, and redraws the whole screen after
//! every event.

mod app;
mod board;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
