//! Front ends: a ratatui game view with keyboard controls, and a plain
//! line-oriented console driver.

mod app;
pub mod board_widget;
pub mod console;
mod game_view;

pub use app::App;
