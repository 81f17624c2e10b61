//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per rendered frame, no measured time
//! - Stable iteration order (bricks in grid order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{PaddleContact, first_brick_hit, paddle_contact, resolve_collisions};
pub use rect::Rect;
pub use state::{Ball, Brick, GameConfig, GamePhase, GameState, Layout, Paddle};
pub use tick::{TickInput, TickOutcome, tick};
