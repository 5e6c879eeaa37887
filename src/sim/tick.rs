//! Per-frame simulation tick
//!
//! Dispatches on the current phase. Only `Playing` moves entities; every
//! other phase waits for its input and otherwise leaves the session frozen.

use super::collision::resolve_ball;
use super::powerup::update_powerups;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::MAX_FRAME_DT;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer x in field coordinates (paddle holds still when absent)
    pub pointer_x: Option<f32>,
    /// Start a game from the menu
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
    /// Rebuild the session after game over or victory
    pub restart: bool,
}

/// Clamp a host-supplied dt into `[0, max_dt]`
///
/// Long stalls would otherwise move balls far enough to skip through bricks.
/// A cap that is not a positive finite number falls back to [`MAX_FRAME_DT`].
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    let max_dt = if max_dt.is_finite() && max_dt > 0.0 {
        max_dt
    } else {
        MAX_FRAME_DT
    };
    if dt.is_finite() { dt.max(0.0).min(max_dt) } else { 0.0 }
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    let dt = clamp_dt(dt, state.settings.max_frame_dt);

    match state.phase {
        GamePhase::Menu => tick_menu(state, input),
        GamePhase::Playing => tick_playing(state, input, dt),
        GamePhase::Paused => tick_paused(state, input),
        GamePhase::GameOver | GamePhase::Victory => tick_finished(state, input),
    }
}

fn tick_menu(state: &mut GameState, input: &TickInput) {
    if input.start {
        state.load_level();
        state.set_phase(GamePhase::Playing);
    }
}

fn tick_paused(state: &mut GameState, input: &TickInput) {
    if input.pause {
        state.set_phase(GamePhase::Playing);
    }
}

fn tick_finished(state: &mut GameState, input: &TickInput) {
    if input.restart {
        state.restart();
    }
}

fn tick_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.pause {
        state.set_phase(GamePhase::Paused);
        return;
    }

    state.time_ticks += 1;

    let pointer_x = input
        .pointer_x
        .unwrap_or_else(|| state.paddle.center_x());
    state.paddle.update(dt, pointer_x, state.field.width);

    update_balls(state, dt);
    if state.phase != GamePhase::Playing {
        return;
    }

    state.particles.retain_mut(|p| p.update(dt));
    update_powerups(state, dt);
    check_level_clear(state);
}

/// Move every ball, drop lost ones, and resolve collisions for the rest
fn update_balls(state: &mut GameState, dt: f32) {
    let field = state.field;
    let balls = std::mem::take(&mut state.balls);
    let mut in_play = Vec::with_capacity(balls.len());
    let mut lost = 0usize;

    for mut ball in balls {
        if ball.update(dt, field) {
            lost += 1;
            state.events.push(GameEvent::BallLost);
            continue;
        }
        resolve_ball(state, &mut ball);
        in_play.push(ball);
    }

    state.balls = in_play;

    if lost > 0 && state.balls.is_empty() {
        lose_life(state);
    }
}

/// Last ball gone: take a life and relaunch, or end the game
fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost {
        remaining: state.lives,
    });

    if state.lives > 0 {
        log::info!("Ball lost, {} lives left", state.lives);
        state.spawn_ball();
    } else {
        log::info!("Game over with score {}", state.score);
        state.set_phase(GamePhase::GameOver);
    }
}

fn check_level_clear(state: &mut GameState) {
    if !state.bricks.is_empty() {
        return;
    }

    state.events.push(GameEvent::LevelCleared { level: state.level });
    state.level += 1;

    if state.level > state.settings.final_level {
        log::info!("Victory with score {}", state.score);
        state.set_phase(GamePhase::Victory);
    } else {
        state.load_level();
        state.balls.clear();
        state.spawn_ball();
    }
}
