//! HUD text: the stat line and per-phase messages

use crate::sim::{GamePhase, GameState};

/// Centered message for the current phase, if any
pub fn phase_message(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::BallInPaddle => Some("Press Space to launch the ball"),
        GamePhase::GameOver => Some("Game Over, Press Enter to Play again or Q to quit"),
        GamePhase::Won => Some("You Won! Press Enter to play again or Q to quit"),
        GamePhase::InPlay => None,
    }
}

/// One-line summary drawn at the top of the screen
pub fn stats_line(state: &GameState, measured_fps: u32) -> String {
    format!(
        "speed:[{}, {}] real-FPS-now:{} SCORE: {}  LIVES: {}  FPS: {}  BALL SPEED: {} pixels per second Danger{}",
        state.ball.vel.x,
        state.ball.vel.y,
        measured_fps,
        state.score,
        state.lives,
        state.config.frame_rate.hz(),
        state.config.ball_speed.pixels_per_second(),
        u8::from(state.danger_mode),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::Vec2;

    #[test]
    fn test_phase_messages() {
        assert!(phase_message(GamePhase::InPlay).is_none());
        assert!(phase_message(GamePhase::BallInPaddle).unwrap().contains("Space"));
        assert!(phase_message(GamePhase::Won).unwrap().starts_with("You Won!"));
        assert!(phase_message(GamePhase::GameOver).unwrap().starts_with("Game Over"));
    }

    #[test]
    fn test_stats_line() {
        let mut state = GameState::new(Vec2::new(1280.0, 720.0), &Settings::default());
        state.score = 7;
        state.set_danger_mode(true);
        let line = stats_line(&state, 59);
        assert_eq!(
            line,
            "speed:[3, -3] real-FPS-now:59 SCORE: 7  LIVES: 3  FPS: 60  BALL SPEED: 240 pixels per second Danger1"
        );
    }
}
