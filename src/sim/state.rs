//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; entities hold no
//! reference back to it and receive the screen bounds as arguments.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::settings::{BallSpeed, FrameRate, Settings};
use crate::{ball_axis_speed, paddle_speed};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball rests on the paddle, waiting for launch input
    BallInPaddle,
    /// Active gameplay
    InPlay,
    /// Every brick destroyed
    Won,
    /// No lives left
    GameOver,
}

impl GamePhase {
    /// Won and GameOver only accept reset or quit
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::GameOver)
    }
}

/// The ball. Always travels at 45 degrees: `|vel.x| == |vel.y|`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Signed displacement per frame
    pub vel: Vec2,
}

impl Ball {
    pub fn new(diameter: f32, center: Vec2, axis_speed: f32) -> Self {
        let mut rect = Rect::new(0.0, 0.0, diameter, diameter);
        rect.set_center(center);
        Self {
            rect,
            // Up and to the right
            vel: Vec2::new(axis_speed, -axis_speed),
        }
    }

    pub fn diameter(&self) -> f32 {
        self.rect.width()
    }

    /// Advance one frame and reflect off the left, right and top walls.
    ///
    /// The bottom edge is open; falling out is handled by paddle/life logic.
    pub fn advance(&mut self, screen: Vec2) {
        self.rect.translate(self.vel);
        if self.rect.left() <= 0.0 || self.rect.right() >= screen.x {
            self.vel.x = -self.vel.x;
        }
        if self.rect.top() <= 0.0 {
            self.vel.y = -self.vel.y;
        }
    }

    pub fn reverse_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Sit the ball's bottom edge on the paddle's top edge and send it back
    pub fn bounce_off(&mut self, paddle: &Paddle) {
        self.rect.set_bottom(paddle.rect.top());
        self.reverse_vertical();
    }

    /// Rest the ball on top of the paddle, horizontally centred
    pub fn rest_on(&mut self, paddle: &Paddle) {
        self.rect.set_center(paddle.rect.center());
        self.rect.set_top(paddle.rect.top() - self.rect.height());
    }

    /// Replace the per-axis speed, keeping the direction quadrant
    pub fn set_axis_speed(&mut self, speed: f32) {
        self.vel = Vec2::new(speed.copysign(self.vel.x), speed.copysign(self.vel.y));
    }
}

/// The player's paddle. Only moves horizontally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Move horizontally by `dx`, then clamp fully inside the screen
    pub fn steer(&mut self, dx: f32, screen: Vec2) {
        self.rect.translate(Vec2::new(dx, 0.0));
        self.rect.clamp_within(&Rect::from_size(screen));
    }
}

/// A brick; destroyed on first contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub rect: Rect,
}

/// Entity sizes derived from the screen size (integer pixel divisions)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub paddle_size: Vec2,
    /// y of the paddle's bottom edge
    pub paddle_bottom: f32,
    pub ball_diameter: f32,
    pub brick_size: Vec2,
}

impl Layout {
    pub fn for_screen(screen: Vec2) -> Self {
        let paddle_height = (screen.y / 24.0).floor();
        Self {
            paddle_size: Vec2::new((screen.x / 7.0).floor(), paddle_height),
            paddle_bottom: screen.y - paddle_height - PADDLE_FLOOR_GAP,
            ball_diameter: (screen.y / 20.0).floor(),
            brick_size: Vec2::new((screen.x / 10.0).floor(), (screen.y / 24.0).floor()),
        }
    }
}

/// Frame rate, nominal ball speed and danger mode at session start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub frame_rate: FrameRate,
    pub ball_speed: BallSpeed,
    /// Danger mode every session starts with; in-game toggles last until the next reset
    pub start_in_danger: bool,
}

impl GameConfig {
    pub fn ball_axis_speed(&self) -> f32 {
        ball_axis_speed(self.ball_speed.as_f32(), self.frame_rate.as_f32())
    }

    pub fn paddle_speed(&self) -> f32 {
        paddle_speed(self.frame_rate.as_f32())
    }
}

impl From<&Settings> for GameConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            frame_rate: settings.frame_rate,
            ball_speed: settings.ball_speed,
            start_in_danger: settings.danger_mode,
        }
    }
}

/// Complete game state (single owner, mutated once per frame)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Drawing surface size in pixels
    pub screen: Vec2,
    pub layout: Layout,
    pub config: GameConfig,
    /// Floor acts as a wall instead of costing a life
    pub danger_mode: bool,
    /// Player lives
    pub lives: u8,
    /// Score (one point per brick)
    pub score: u64,
    /// Current phase
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Remaining bricks, in grid order (row-major)
    pub bricks: Vec<Brick>,
    /// Paddle displacement per frame while a direction key is held
    pub paddle_speed: f32,
}

impl GameState {
    /// Create a fresh session for a screen of the given size
    pub fn new(screen: Vec2, settings: &Settings) -> Self {
        let config = GameConfig::from(settings);
        let layout = Layout::for_screen(screen);

        let mut paddle_rect = Rect::new(0.0, 0.0, layout.paddle_size.x, layout.paddle_size.y);
        paddle_rect.set_center_x((screen.x / 2.0).floor());
        paddle_rect.set_bottom(layout.paddle_bottom);

        let ball_center = Vec2::new(
            (screen.x / 2.0).floor(),
            layout.paddle_bottom - layout.ball_diameter,
        );

        let paddle = Paddle { rect: paddle_rect };
        let mut ball = Ball::new(layout.ball_diameter, ball_center, config.ball_axis_speed());
        ball.rest_on(&paddle);

        Self {
            screen,
            layout,
            config,
            danger_mode: config.start_in_danger,
            lives: START_LIVES,
            score: 0,
            phase: GamePhase::BallInPaddle,
            paddle,
            ball,
            bricks: build_bricks(layout.brick_size),
            paddle_speed: config.paddle_speed(),
        }
    }

    /// Full re-init of entities and counters; keeps the screen and config.
    ///
    /// Danger mode returns to the configured starting value.
    pub fn reset(&mut self) {
        let settings = Settings {
            frame_rate: self.config.frame_rate,
            ball_speed: self.config.ball_speed,
            danger_mode: self.config.start_in_danger,
            ..Settings::default()
        };
        *self = Self::new(self.screen, &settings);
        log::info!("Session reset");
    }

    /// Change the target frame rate; recomputes paddle and ball speed
    pub fn set_frame_rate(&mut self, frame_rate: FrameRate) {
        self.config.frame_rate = frame_rate;
        self.paddle_speed = self.config.paddle_speed();
        self.ball.set_axis_speed(self.config.ball_axis_speed());
        log::info!(
            "Frame rate {} fps: paddle speed {}, ball axis speed {}",
            frame_rate.hz(),
            self.paddle_speed,
            self.config.ball_axis_speed()
        );
    }

    /// Change the nominal ball speed; recomputes ball speed only
    pub fn set_ball_speed(&mut self, ball_speed: BallSpeed) {
        self.config.ball_speed = ball_speed;
        self.ball.set_axis_speed(self.config.ball_axis_speed());
        log::info!(
            "Ball speed {} px/s: axis speed {}",
            ball_speed.pixels_per_second(),
            self.config.ball_axis_speed()
        );
    }

    pub fn set_danger_mode(&mut self, on: bool) {
        if self.danger_mode != on {
            self.danger_mode = on;
            log::info!("Danger mode {}", if on { "on" } else { "off" });
        }
    }

    pub fn remaining_bricks(&self) -> usize {
        self.bricks.len()
    }
}

/// Lay out the brick grid: rows top to bottom, columns left to right
fn build_bricks(brick_size: Vec2) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLUMNS);
    let mut y = BRICK_MARGIN;
    for row in 0..BRICK_ROWS {
        let mut x = BRICK_MARGIN;
        for col in 0..BRICK_COLUMNS {
            bricks.push(Brick {
                id: (row * BRICK_COLUMNS + col) as u32,
                rect: Rect::new(x, y, brick_size.x, brick_size.y),
            });
            x += brick_size.x + BRICK_GAP_X;
        }
        y += brick_size.y + BRICK_GAP_Y;
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Vec2 = Vec2::new(1920.0, 1080.0);

    #[test]
    fn test_new_session() {
        let state = GameState::new(SCREEN, &Settings::default());
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::BallInPaddle);
        assert_eq!(state.remaining_bricks(), 63);
        assert!(!state.danger_mode);
        assert_eq!(state.paddle_speed, 25.0);
    }

    #[test]
    fn test_layout_from_screen() {
        let state = GameState::new(SCREEN, &Settings::default());
        // 1920 / 7 = 274.28.., 1080 / 24 = 45
        assert_eq!(state.paddle.rect.size, Vec2::new(274.0, 45.0));
        assert_eq!(state.paddle.rect.bottom(), 1080.0 - 45.0 - 10.0);
        assert_eq!(state.paddle.rect.center().x, 960.0);
        assert_eq!(state.ball.diameter(), 54.0);
        // Ball starts resting on the paddle
        assert_eq!(state.ball.rect.center().x, 960.0);
        assert_eq!(state.ball.rect.bottom(), state.paddle.rect.top());
    }

    #[test]
    fn test_brick_grid() {
        let state = GameState::new(SCREEN, &Settings::default());
        let first = &state.bricks[0];
        assert_eq!(first.rect.pos, Vec2::new(30.0, 30.0));
        assert_eq!(first.rect.size, Vec2::new(192.0, 45.0));

        let second = &state.bricks[1];
        assert_eq!(second.rect.left(), 30.0 + 192.0 + 8.0);

        let next_row = &state.bricks[BRICK_COLUMNS];
        assert_eq!(next_row.rect.top(), 30.0 + 45.0 + 6.0);

        // Ids are unique and in grid order
        assert!(state.bricks.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_initial_ball_heads_up_right_at_45_degrees() {
        let settings = Settings {
            ball_speed: BallSpeed::Px480,
            ..Default::default()
        };
        let state = GameState::new(SCREEN, &settings);
        assert_eq!(state.ball.vel, Vec2::new(6.0, -6.0));
    }

    #[test]
    fn test_frame_rate_change_keeps_direction() {
        let settings = Settings {
            ball_speed: BallSpeed::Px480,
            ..Default::default()
        };
        let mut state = GameState::new(SCREEN, &settings);
        state.ball.vel = Vec2::new(-6.0, 6.0);

        state.set_frame_rate(FrameRate::Fps120);
        assert_eq!(state.ball.vel, Vec2::new(-3.0, 3.0));
        assert_eq!(state.paddle_speed, 12.5);

        state.set_frame_rate(FrameRate::Fps60);
        assert_eq!(state.ball.vel, Vec2::new(-6.0, 6.0));
        assert_eq!(state.paddle_speed, 25.0);
    }

    #[test]
    fn test_ball_speed_change_leaves_paddle_alone() {
        let mut state = GameState::new(SCREEN, &Settings::default());
        state.set_frame_rate(FrameRate::Fps144);
        let paddle_speed = state.paddle_speed;

        state.set_ball_speed(BallSpeed::Px1440);
        // 1440 / 144 = 10, / sqrt(2) = 7.07.., ceil = 8
        assert_eq!(state.ball.vel, Vec2::new(8.0, -8.0));
        assert_eq!(state.paddle_speed, paddle_speed);
    }

    #[test]
    fn test_reset_restores_session_and_keeps_config() {
        let mut state = GameState::new(SCREEN, &Settings::default());
        state.set_frame_rate(FrameRate::Fps240);
        state.set_danger_mode(true);
        state.lives = 0;
        state.score = 12;
        state.bricks.truncate(3);
        state.phase = GamePhase::GameOver;

        state.reset();
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.remaining_bricks(), 63);
        assert_eq!(state.phase, GamePhase::BallInPaddle);
        assert_eq!(state.config.frame_rate, FrameRate::Fps240);
        assert!(!state.danger_mode);
    }

    #[test]
    fn test_reset_restores_configured_danger_mode() {
        let settings = Settings {
            danger_mode: true,
            ..Default::default()
        };
        let mut state = GameState::new(SCREEN, &settings);
        assert!(state.danger_mode);

        state.set_danger_mode(false);
        state.reset();
        assert!(state.danger_mode);

        state.reset();
        assert!(state.danger_mode);
    }

    #[test]
    fn test_paddle_steer_clamps_to_screen() {
        let mut state = GameState::new(SCREEN, &Settings::default());
        for _ in 0..200 {
            state.paddle.steer(-25.0, SCREEN);
        }
        assert_eq!(state.paddle.rect.left(), 0.0);
        for _ in 0..200 {
            state.paddle.steer(25.0, SCREEN);
        }
        assert_eq!(state.paddle.rect.right(), SCREEN.x);
    }

    #[test]
    fn test_ball_rest_on_paddle() {
        let mut state = GameState::new(SCREEN, &Settings::default());
        state.paddle.steer(-300.0, SCREEN);
        state.ball.rest_on(&state.paddle);
        assert_eq!(state.ball.rect.center().x, state.paddle.rect.center().x);
        assert_eq!(state.ball.rect.bottom(), state.paddle.rect.top());
    }

    #[test]
    fn test_snapshot_roundtrips_through_json() {
        let state = GameState::new(SCREEN, &Settings::default());
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.remaining_bricks(), 63);
        assert_eq!(restored.ball.vel, state.ball.vel);
    }
}
