//! macroquad rendering module
//!
//! Flat-colored rectangles for bricks and paddle, an outlined circle for the
//! ball, and text overlays. Reads game state only.

pub mod colors;
pub mod draw;

pub use draw::{draw_game, draw_menu};
