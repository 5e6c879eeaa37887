//! Power-up lifecycle and effects
//!
//! Capsules fall from destroyed bricks; the paddle collects them. Each kind
//! maps to exactly one state mutation, applied once per collection.

use super::collision::powerup_paddle_collision;
use super::state::{Ball, GameEvent, GameState, PowerUpKind};
use crate::consts::*;

/// Apply a collected power-up's effect plus the flat collection bonus
pub fn apply_powerup(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::ExpandPaddle => state.paddle.expand(POWERUP_EXPAND_AMOUNT),
        PowerUpKind::MultiBall => {
            if let Some(origin) = state.balls.first().map(|ball| ball.pos) {
                for _ in 0..MULTI_BALL_COUNT {
                    let ball = Ball::launch(origin, &mut state.rng);
                    state.balls.push(ball);
                }
            }
        }
        PowerUpKind::SlowBall => {
            for ball in &mut state.balls {
                ball.speed_multiplier = SLOW_BALL_MULTIPLIER;
            }
        }
        PowerUpKind::StickyPaddle => state.paddle.sticky = true,
        PowerUpKind::ExtraLife => state.lives += 1,
        PowerUpKind::Laser => {}
    }
    state.score += POWERUP_SCORE_BONUS;
    log::debug!("Collected {:?}", kind);
}

/// Advance falling capsules, collecting those that touch the paddle
pub fn update_powerups(state: &mut GameState, dt: f32) {
    let mut powerups = std::mem::take(&mut state.powerups);

    for powerup in &mut powerups {
        if powerup.update(dt, state.field.height) {
            powerup.active = false;
            state.events.push(GameEvent::PowerUpMissed { kind: powerup.kind });
            continue;
        }
        if powerup_paddle_collision(powerup, &state.paddle) {
            powerup.active = false;
            apply_powerup(state, powerup.kind);
            state.emit_particles(powerup.pos, POWERUP_COLLECT_PARTICLES);
            state.events.push(GameEvent::PowerUpCollected { kind: powerup.kind });
        }
    }

    powerups.retain(|p| p.active);
    state.powerups = powerups;
}
