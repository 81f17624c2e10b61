//! Keyboard polling
//!
//! Gameplay keys are read as held; menu keys are edge-triggered so one press
//! moves a selector by exactly one step.

use macroquad::input::{KeyCode, is_key_down, is_key_pressed};

use crate::sim::TickInput;
use crate::ui::MenuInput;

/// Key bindings for gameplay
pub mod keys {
    use macroquad::input::KeyCode;

    pub const LEFT: KeyCode = KeyCode::Left;
    pub const RIGHT: KeyCode = KeyCode::Right;
    pub const LAUNCH: KeyCode = KeyCode::Space;
    pub const QUIT: KeyCode = KeyCode::Q;
    pub const RESET: KeyCode = KeyCode::Enter;
    pub const DANGER_ON: KeyCode = KeyCode::O;
    pub const DANGER_OFF: KeyCode = KeyCode::P;
    pub const HARD_RESET: KeyCode = KeyCode::K;

    /// Menu confirm; must not be LAUNCH or the first play frame sees the key held
    pub const MENU_CONFIRM: KeyCode = KeyCode::Enter;
}

pub fn poll_tick_input() -> TickInput {
    TickInput {
        left: is_key_down(keys::LEFT),
        right: is_key_down(keys::RIGHT),
        launch: is_key_down(keys::LAUNCH),
        quit: is_key_down(keys::QUIT),
        reset: is_key_down(keys::RESET),
        danger_on: is_key_down(keys::DANGER_ON),
        danger_off: is_key_down(keys::DANGER_OFF),
        hard_reset: is_key_down(keys::HARD_RESET),
    }
}

pub fn poll_menu_input() -> MenuInput {
    MenuInput {
        up: is_key_pressed(KeyCode::Up),
        down: is_key_pressed(KeyCode::Down),
        left: is_key_pressed(KeyCode::Left),
        right: is_key_pressed(KeyCode::Right),
        confirm: is_key_pressed(keys::MENU_CONFIRM),
    }
}
