//! Per-frame simulation tick
//!
//! One call advances the game by exactly one rendered frame: input, motion,
//! collisions. Nothing here depends on measured wall-clock time.

use super::collision::resolve_collisions;
use super::state::{GamePhase, GameState};

/// Input commands for a single frame (held keys)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move paddle left
    pub left: bool,
    /// Move paddle right
    pub right: bool,
    /// Launch the ball (BallInPaddle only)
    pub launch: bool,
    /// Quit (Won/GameOver only)
    pub quit: bool,
    /// Play again (Won/GameOver only)
    pub reset: bool,
    pub danger_on: bool,
    pub danger_off: bool,
    /// Restart the session from any phase
    pub hard_reset: bool,
}

/// What the frame loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Session was re-initialised; the shell returns to the settings menu
    Reset,
    Quit,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    // Paddle movement; opposite keys cancel out
    let direction = input.right as i8 - input.left as i8;
    if direction != 0 {
        let dx = f32::from(direction) * state.paddle_speed;
        state.paddle.steer(dx, state.screen);
    }

    if input.launch && state.phase == GamePhase::BallInPaddle {
        // Always leave from the paddle, even if the ball fell last frame
        state.ball.rest_on(&state.paddle);
        state.phase = GamePhase::InPlay;
        log::info!("Ball launched with velocity {:?}", state.ball.vel);
    }

    if state.phase.is_terminal() {
        if input.quit {
            log::info!("Quit requested");
            return TickOutcome::Quit;
        }
        if input.reset {
            state.reset();
            return TickOutcome::Reset;
        }
    }

    if input.danger_on {
        state.set_danger_mode(true);
    }
    if input.danger_off {
        state.set_danger_mode(false);
    }

    if input.hard_reset {
        state.reset();
        return TickOutcome::Reset;
    }

    match state.phase {
        GamePhase::BallInPaddle => {
            state.ball.rest_on(&state.paddle);
        }
        GamePhase::InPlay => {
            state.ball.advance(state.screen);
            resolve_collisions(state);
        }
        GamePhase::Won | GamePhase::GameOver => {}
    }

    TickOutcome::Continue
}
