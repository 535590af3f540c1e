//! GUI module for the Gomoku game
//!
//! A renderer and input source built on egui/eframe. It only talks to the
//! engine through [`crate::GameController`].

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
pub use board_view::nearest_intersection;
