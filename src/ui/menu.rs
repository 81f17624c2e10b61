//! Settings menu shown before every session
//!
//! Two wrap-around selectors (frame rate, ball speed) and a Play button,
//! driven by edge-triggered keys.

use crate::settings::{BallSpeed, FrameRate};
use crate::sim::GameConfig;

/// Menu rows, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    FrameRate,
    BallSpeed,
    Play,
}

impl MenuRow {
    pub const ALL: [MenuRow; 3] = [MenuRow::FrameRate, MenuRow::BallSpeed, MenuRow::Play];

    fn index(self) -> usize {
        match self {
            MenuRow::FrameRate => 0,
            MenuRow::BallSpeed => 1,
            MenuRow::Play => 2,
        }
    }
}

/// Keys pressed this frame while the menu is open
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
}

/// Something the game must apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SetFrameRate(FrameRate),
    SetBallSpeed(BallSpeed),
    Start,
}

#[derive(Debug, Clone)]
pub struct SettingsMenu {
    pub cursor: MenuRow,
    frame_rate_index: usize,
    ball_speed_index: usize,
}

impl SettingsMenu {
    pub const TITLE: &'static str = "Settings";

    /// Open the menu with the selectors on the current config
    pub fn new(config: &GameConfig) -> Self {
        Self {
            cursor: MenuRow::FrameRate,
            frame_rate_index: FrameRate::ALL
                .iter()
                .position(|r| *r == config.frame_rate)
                .unwrap_or(0),
            ball_speed_index: BallSpeed::ALL
                .iter()
                .position(|s| *s == config.ball_speed)
                .unwrap_or(0),
        }
    }

    pub fn frame_rate(&self) -> FrameRate {
        FrameRate::ALL[self.frame_rate_index]
    }

    pub fn ball_speed(&self) -> BallSpeed {
        BallSpeed::ALL[self.ball_speed_index]
    }

    /// Label for a row, e.g. `"FPS: < 120 >"`
    pub fn label(&self, row: MenuRow) -> String {
        match row {
            MenuRow::FrameRate => format!("FPS: < {} >", self.frame_rate().hz()),
            MenuRow::BallSpeed => {
                format!("Ball Speed: < {} >", self.ball_speed().pixels_per_second())
            }
            MenuRow::Play => "Play".to_string(),
        }
    }

    pub fn handle(&mut self, input: MenuInput) -> Option<MenuAction> {
        let rows = MenuRow::ALL.len();
        if input.up {
            self.cursor = MenuRow::ALL[(self.cursor.index() + rows - 1) % rows];
        }
        if input.down {
            self.cursor = MenuRow::ALL[(self.cursor.index() + 1) % rows];
        }

        let step = input.right as isize - input.left as isize;
        match self.cursor {
            MenuRow::FrameRate if step != 0 => {
                self.frame_rate_index = cycle(self.frame_rate_index, step, FrameRate::ALL.len());
                Some(MenuAction::SetFrameRate(self.frame_rate()))
            }
            MenuRow::BallSpeed if step != 0 => {
                self.ball_speed_index = cycle(self.ball_speed_index, step, BallSpeed::ALL.len());
                Some(MenuAction::SetBallSpeed(self.ball_speed()))
            }
            MenuRow::Play if input.confirm => Some(MenuAction::Start),
            _ => None,
        }
    }
}

fn cycle(index: usize, step: isize, len: usize) -> usize {
    (index as isize + step).rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(f: impl FnOnce(&mut MenuInput)) -> MenuInput {
        let mut input = MenuInput::default();
        f(&mut input);
        input
    }

    #[test]
    fn test_opens_on_current_config() {
        let config = GameConfig {
            frame_rate: FrameRate::Fps165,
            ball_speed: BallSpeed::Px960,
            start_in_danger: false,
        };
        let menu = SettingsMenu::new(&config);
        assert_eq!(menu.frame_rate(), FrameRate::Fps165);
        assert_eq!(menu.ball_speed(), BallSpeed::Px960);
        assert_eq!(menu.label(MenuRow::FrameRate), "FPS: < 165 >");
        assert_eq!(menu.label(MenuRow::BallSpeed), "Ball Speed: < 960 >");
    }

    #[test]
    fn test_frame_rate_selector_wraps() {
        let mut menu = SettingsMenu::new(&GameConfig::default());
        let action = menu.handle(press(|i| i.left = true));
        assert_eq!(action, Some(MenuAction::SetFrameRate(FrameRate::Fps240)));
        let action = menu.handle(press(|i| i.right = true));
        assert_eq!(action, Some(MenuAction::SetFrameRate(FrameRate::Fps60)));
    }

    #[test]
    fn test_ball_speed_selector() {
        let mut menu = SettingsMenu::new(&GameConfig::default());
        menu.handle(press(|i| i.down = true));
        assert_eq!(menu.cursor, MenuRow::BallSpeed);
        let action = menu.handle(press(|i| i.right = true));
        assert_eq!(action, Some(MenuAction::SetBallSpeed(BallSpeed::Px480)));
    }

    #[test]
    fn test_play_starts_only_from_play_row() {
        let mut menu = SettingsMenu::new(&GameConfig::default());
        assert_eq!(menu.handle(press(|i| i.confirm = true)), None);

        menu.handle(press(|i| i.up = true));
        assert_eq!(menu.cursor, MenuRow::Play);
        assert_eq!(menu.handle(press(|i| i.confirm = true)), Some(MenuAction::Start));
    }
}
