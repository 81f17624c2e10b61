//! Immediate-mode drawing of the game and the settings menu

use macroquad::shapes::{draw_circle, draw_circle_lines, draw_rectangle};
use macroquad::text::{draw_text, measure_text};
use macroquad::window::clear_background;

use super::colors;
use crate::sim::{GameState, Rect};
use crate::ui::{MenuRow, SettingsMenu, phase_message, stats_line};

/// HUD font size in pixels
const FONT_SIZE: u16 = 20;
/// Stat line starts this far from the right edge
const STATS_OFFSET_X: f32 = 1000.0;
const BALL_OUTLINE_WIDTH: f32 = 3.0;

const MENU_SIZE: (f32, f32) = (400.0, 300.0);
const MENU_ROW_HEIGHT: f32 = 50.0;

fn fill_rect(rect: &Rect, color: macroquad::color::Color) {
    draw_rectangle(rect.left(), rect.top(), rect.width(), rect.height(), color);
}

/// Draw `text` centred on the given point
fn draw_text_centered(text: &str, cx: f32, cy: f32, font_size: u16, color: macroquad::color::Color) {
    let dims = measure_text(text, None, font_size, 1.0);
    let x = cx - dims.width / 2.0;
    let y = cy - dims.height / 2.0 + dims.offset_y;
    draw_text(text, x, y, f32::from(font_size), color);
}

fn draw_ball(state: &GameState) {
    let rect = &state.ball.rect;
    let center = rect.center();
    let radius = rect.width() / 2.0;

    draw_circle(center.x, center.y, radius - BALL_OUTLINE_WIDTH, colors::BALL);
    draw_circle_lines(
        center.x,
        center.y,
        radius - BALL_OUTLINE_WIDTH / 2.0,
        BALL_OUTLINE_WIDTH,
        colors::BALL_OUTLINE,
    );

    let label_size = (rect.width() / 2.0).max(1.0) as u16;
    draw_text_centered("BOE", center.x, center.y, label_size, colors::BALL_OUTLINE);
}

/// Draw one gameplay frame
pub fn draw_game(state: &GameState, measured_fps: u32, show_stats: bool) {
    clear_background(if state.danger_mode {
        colors::BACKGROUND_DANGER
    } else {
        colors::BACKGROUND
    });

    for brick in &state.bricks {
        fill_rect(&brick.rect, colors::BRICK);
    }
    fill_rect(&state.paddle.rect, colors::PADDLE);
    draw_ball(state);

    if let Some(message) = phase_message(state.phase) {
        draw_text_centered(
            message,
            state.screen.x / 2.0,
            state.screen.y / 2.0,
            FONT_SIZE,
            colors::TEXT,
        );
    }

    if show_stats {
        let line = stats_line(state, measured_fps);
        let dims = measure_text(&line, None, FONT_SIZE, 1.0);
        draw_text(
            &line,
            state.screen.x - STATS_OFFSET_X,
            5.0 + dims.offset_y,
            f32::from(FONT_SIZE),
            colors::TEXT,
        );
    }
}

/// Draw the settings menu as a centred panel
pub fn draw_menu(menu: &SettingsMenu, screen_width: f32, screen_height: f32) {
    clear_background(colors::MENU_BACKGROUND);

    let (w, h) = MENU_SIZE;
    let left = (screen_width - w) / 2.0;
    let top = (screen_height - h) / 2.0;
    draw_rectangle(left, top, w, h, colors::MENU_PANEL);

    let cx = screen_width / 2.0;
    draw_text_centered(SettingsMenu::TITLE, cx, top + MENU_ROW_HEIGHT / 2.0, 30, colors::TEXT);

    for (i, row) in MenuRow::ALL.into_iter().enumerate() {
        let color = if row == menu.cursor {
            colors::MENU_SELECTED
        } else {
            colors::TEXT
        };
        let cy = top + MENU_ROW_HEIGHT * (i as f32 + 1.5) + MENU_ROW_HEIGHT / 2.0;
        draw_text_centered(&menu.label(row), cx, cy, 26, color);
    }
}
