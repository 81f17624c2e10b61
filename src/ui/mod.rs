//! Presentation logic with no drawing: settings menu state and HUD text

pub mod hud;
pub mod menu;

pub use hud::{phase_message, stats_line};
pub use menu::{MenuAction, MenuInput, MenuRow, SettingsMenu};
