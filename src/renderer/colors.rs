//! Colors for game elements

use macroquad::color::Color;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

pub const BACKGROUND: Color = rgb(3, 155, 229);
/// Background while the floor acts as a wall
pub const BACKGROUND_DANGER: Color = rgb(199, 237, 204);
pub const PADDLE: Color = rgb(91, 44, 111);
pub const BRICK: Color = rgb(255, 0, 0);
pub const BALL: Color = rgb(255, 255, 0);
pub const BALL_OUTLINE: Color = rgb(0, 0, 0);
pub const TEXT: Color = rgb(255, 255, 255);

/// Menu panel
pub const MENU_BACKGROUND: Color = rgb(40, 41, 35);
pub const MENU_PANEL: Color = rgb(64, 64, 64);
pub const MENU_SELECTED: Color = rgb(255, 255, 0);
