//! Collision detection and response
//!
//! Everything is axis-aligned: the ball is treated as its bounding square and
//! reflections only flip the sign of one velocity component.

use super::state::{Ball, Brick, GamePhase, GameState, Paddle};

/// Outcome of checking the ball against the paddle line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleContact {
    /// Ball overlaps the paddle
    Hit,
    /// Ball's top edge is below the paddle's top edge without touching it
    Missed,
    /// Neither
    Clear,
}

/// Index of the first brick (in grid order) the ball overlaps
pub fn first_brick_hit(ball: &Ball, bricks: &[Brick]) -> Option<usize> {
    bricks.iter().position(|brick| brick.rect.overlaps(&ball.rect))
}

/// Paddle contact takes priority over the miss check
pub fn paddle_contact(ball: &Ball, paddle: &Paddle) -> PaddleContact {
    if ball.rect.overlaps(&paddle.rect) {
        PaddleContact::Hit
    } else if ball.rect.top() > paddle.rect.top() {
        PaddleContact::Missed
    } else {
        PaddleContact::Clear
    }
}

/// Resolve this frame's collisions, in order:
///
/// 1. No bricks left: the game is won and nothing else happens.
/// 2. First overlapping brick is destroyed, scores one point and flips `vel.y`.
/// 3. Paddle hit: ball is set on the paddle and flips `vel.y`.
/// 4. Ball fell past the paddle: bounce in danger mode, otherwise lose a life.
pub fn resolve_collisions(state: &mut GameState) {
    if state.bricks.is_empty() {
        state.phase = GamePhase::Won;
        log::info!("All bricks cleared, score {}", state.score);
        return;
    }

    if let Some(index) = first_brick_hit(&state.ball, &state.bricks) {
        let brick = state.bricks.remove(index);
        state.score += 1;
        state.ball.reverse_vertical();
        log::debug!(
            "Brick {} destroyed, score {}, {} left",
            brick.id,
            state.score,
            state.bricks.len()
        );
    }

    match paddle_contact(&state.ball, &state.paddle) {
        PaddleContact::Hit => {
            state.ball.bounce_off(&state.paddle);
            log::debug!("Paddle hit at x={}", state.ball.rect.center().x);
        }
        PaddleContact::Missed if state.danger_mode => {
            state.ball.bounce_off(&state.paddle);
            log::debug!("Floor bounce in danger mode");
        }
        PaddleContact::Missed => {
            state.lives = state.lives.saturating_sub(1);
            if state.lives > 0 {
                state.phase = GamePhase::BallInPaddle;
                log::info!("Ball lost, {} lives left", state.lives);
            } else {
                state.phase = GamePhase::GameOver;
                log::info!("Game over, final score {}", state.score);
            }
        }
        PaddleContact::Clear => {}
    }
}
