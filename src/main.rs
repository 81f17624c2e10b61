//! Brick Breaker entry point
//!
//! Opens a fullscreen window, shows the settings menu, then runs one
//! simulation tick per rendered frame at the chosen frame rate.

use brick_breaker::Settings;
use brick_breaker::platform::{FrameClock, poll_menu_input, poll_tick_input};
use brick_breaker::renderer::{draw_game, draw_menu};
use brick_breaker::sim::{GameState, TickOutcome, tick};
use brick_breaker::ui::{MenuAction, SettingsMenu};
use macroquad::miniquad::conf::Platform;
use macroquad::time::get_time;
use macroquad::window::{Conf, next_frame, screen_height, screen_width};

fn window_conf() -> Conf {
    Conf {
        window_title: "BrickBreaker".to_owned(),
        fullscreen: true,
        platform: Platform {
            // Pacing is done by FrameClock; vsync would cap us at the display rate
            swap_interval: Some(0),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Which screen owns the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Playing,
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("BrickBreaker starting...");

    let settings = Settings::load();

    // Let the fullscreen surface settle before reading its size
    next_frame().await;
    let screen_size = glam::Vec2::new(screen_width(), screen_height());
    log::info!("Screen {}x{}", screen_size.x, screen_size.y);

    let mut state = GameState::new(screen_size, &settings);
    let mut menu = SettingsMenu::new(&state.config);
    let mut screen = Screen::Menu;
    let mut clock = FrameClock::new();

    loop {
        clock.begin_frame(get_time());

        match screen {
            Screen::Menu => {
                match menu.handle(poll_menu_input()) {
                    Some(MenuAction::SetFrameRate(rate)) => state.set_frame_rate(rate),
                    Some(MenuAction::SetBallSpeed(speed)) => state.set_ball_speed(speed),
                    Some(MenuAction::Start) => {
                        log::info!(
                            "Starting session at {} fps, {} px/s",
                            state.config.frame_rate.hz(),
                            state.config.ball_speed.pixels_per_second()
                        );
                        screen = Screen::Playing;
                    }
                    None => {}
                }
                draw_menu(&menu, screen_size.x, screen_size.y);
            }
            Screen::Playing => {
                match tick(&mut state, &poll_tick_input()) {
                    TickOutcome::Quit => break,
                    TickOutcome::Reset => {
                        menu = SettingsMenu::new(&state.config);
                        screen = Screen::Menu;
                    }
                    TickOutcome::Continue => {}
                }
                draw_game(&state, clock.fps(), settings.show_stats);
            }
        }

        if let Some(wait) = clock.remaining(get_time(), state.config.frame_rate.hz()) {
            std::thread::sleep(wait);
        }
        next_frame().await;
    }

    log::info!("BrickBreaker exiting");
}
