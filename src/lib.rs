//! Brick Breaker - a single-screen paddle and ball arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (motion, collisions, game phases)
//! - `settings`: Frame rate / ball speed configuration
//! - `ui`: Settings menu and HUD text
//! - `platform`: Input polling and frame pacing
//! - `renderer`: macroquad drawing

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{BallSpeed, FrameRate, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Lives at the start of every session
    pub const START_LIVES: u8 = 3;

    /// Brick field shape
    pub const BRICK_ROWS: usize = 7;
    pub const BRICK_COLUMNS: usize = 9;
    /// Distance of the first brick from the top-left corner
    pub const BRICK_MARGIN: f32 = 30.0;
    pub const BRICK_GAP_X: f32 = 8.0;
    pub const BRICK_GAP_Y: f32 = 6.0;

    /// Paddle displacement per frame at the reference frame rate
    pub const PADDLE_BASE_SPEED: f32 = 25.0;
    /// Frame rate the paddle base speed is tuned for
    pub const REFERENCE_FPS: f32 = 60.0;
    /// Gap between the paddle's bottom edge and the screen bottom (plus one paddle height)
    pub const PADDLE_FLOOR_GAP: f32 = 10.0;
}

/// Per-axis ball displacement per frame.
///
/// The nominal speed is the diagonal speed in pixels/second, so each axis gets
/// `ceil(|nominal / fps| / sqrt(2))` pixels per frame.
#[inline]
pub fn ball_axis_speed(nominal: f32, fps: f32) -> f32 {
    ((nominal / fps).abs() / std::f32::consts::SQRT_2).ceil()
}

/// Paddle displacement per frame; constant on-screen speed regardless of frame rate.
#[inline]
pub fn paddle_speed(fps: f32) -> f32 {
    consts::PADDLE_BASE_SPEED * (consts::REFERENCE_FPS / fps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_axis_speed_table() {
        assert_eq!(ball_axis_speed(480.0, 60.0), 6.0);
        assert_eq!(ball_axis_speed(480.0, 120.0), 3.0);
        assert_eq!(ball_axis_speed(240.0, 60.0), 3.0);
        assert_eq!(ball_axis_speed(1920.0, 240.0), 6.0);
    }

    #[test]
    fn test_paddle_speed_scales_with_fps() {
        assert_eq!(paddle_speed(60.0), 25.0);
        assert_eq!(paddle_speed(120.0), 12.5);
        assert!((paddle_speed(240.0) * 240.0 - 1500.0).abs() < 0.001);
    }
}
