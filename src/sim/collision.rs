//! Collision detection and response
//!
//! Everything is axis-aligned: balls and power-ups are tested by their
//! bounding boxes against the paddle and brick rectangles. Per ball, the
//! paddle is resolved before bricks, and only the first overlapping brick
//! (in brick order) is processed each tick.

use glam::Vec2;

use super::state::{Ball, Brick, GameEvent, GameState, Paddle, PowerUp};
use super::vector::{magnitude, normalize, reflect, scale};
use crate::consts::*;

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle spanning `center ± (half_w, half_h)`
    pub fn from_center(center: Vec2, half_w: f32, half_h: f32) -> Self {
        Self::new(center.x - half_w, center.y - half_h, half_w * 2.0, half_h * 2.0)
    }

    /// True when the interiors intersect; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Which velocity component a brick bounce flips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    X,
    Y,
}

/// Surface normal for a paddle hit at `ball_x`
///
/// The offset from the paddle centre, normalized to [-1, 1], is mapped onto
/// a deflection of up to 60 degrees either side of straight up.
pub fn paddle_normal(paddle: &Paddle, ball_x: f32) -> Vec2 {
    let half = paddle.width / 2.0;
    let offset = ((ball_x - paddle.center_x()) / half).clamp(-1.0, 1.0);
    let angle = offset * PADDLE_MAX_DEFLECTION;
    Vec2::new(angle.sin(), -angle.cos())
}

/// Pick the bounce axis from the ball's offset to the brick centre
pub fn bounce_axis(ball_center: Vec2, brick_center: Vec2) -> BounceAxis {
    let d = ball_center - brick_center;
    if d.x.abs() > d.y.abs() {
        BounceAxis::X
    } else {
        BounceAxis::Y
    }
}

/// Bounce a descending ball off the paddle. Returns true on contact.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    // Rising balls pass through so they cannot re-trigger
    if ball.vel.y <= 0.0 || !ball.bounds().overlaps(&paddle.rect()) {
        return false;
    }

    let normal = paddle_normal(paddle, ball.pos.x);
    let speed = magnitude(ball.vel);
    ball.vel = scale(normalize(reflect(ball.vel, normal)), speed);
    ball.pos.y = paddle.y - ball.radius;
    ball.vel.x += paddle.velocity() * PADDLE_ENGLISH;
    true
}

/// Index of the first brick the ball overlaps
pub fn first_brick_hit(ball: &Ball, bricks: &[Brick]) -> Option<usize> {
    let bounds = ball.bounds();
    bricks.iter().position(|brick| bounds.overlaps(&brick.rect()))
}

/// Check whether a falling power-up touches the paddle
#[inline]
pub fn powerup_paddle_collision(powerup: &PowerUp, paddle: &Paddle) -> bool {
    powerup.rect().overlaps(&paddle.rect())
}

/// Resolve paddle and brick contacts for a ball that is still in play.
///
/// The ball must not be stored in `state.balls` while this runs. Contacts
/// are reported through `state.events`.
pub fn resolve_ball(state: &mut GameState, ball: &mut Ball) {
    if ball_paddle_collision(ball, &state.paddle) {
        state.emit_particles(ball.pos, PADDLE_HIT_PARTICLES);
        state.events.push(GameEvent::PaddleHit { pos: ball.pos });
    }

    let Some(index) = first_brick_hit(ball, &state.bricks) else {
        return;
    };

    let brick = &mut state.bricks[index];
    let destroyed = brick.hit();
    let center = brick.center();
    let remaining = brick.health;

    if destroyed {
        let brick = state.bricks.remove(index);
        state.score += brick.points;
        state.emit_particles(center, BRICK_BREAK_PARTICLES);
        state.events.push(GameEvent::BrickDestroyed {
            pos: center,
            points: brick.points,
        });
        if let Some(kind) = brick.powerup {
            state.powerups.push(PowerUp::new(center, kind));
            state.events.push(GameEvent::PowerUpSpawned { pos: center, kind });
        }
    } else {
        state.events.push(GameEvent::BrickHit {
            pos: center,
            remaining,
        });
    }

    match bounce_axis(ball.pos, center) {
        BounceAxis::X => ball.vel.x = -ball.vel.x,
        BounceAxis::Y => ball.vel.y = -ball.vel.y,
    }
}
