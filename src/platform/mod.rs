//! Platform layer
//!
//! Handles the parts that touch the outside world:
//! - Keyboard input
//! - Frame pacing / measured frame rate

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{poll_menu_input, poll_tick_input};
