//! Game state and core simulation types
//!
//! Entities own their per-frame update rules; the session (`GameState`) owns
//! the entity collections, the RNG and the score/lives/level counters.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::level::generate_level;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of the game flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start input
    Menu,
    /// Active gameplay
    Playing,
    /// Simulation frozen until resumed
    Paused,
    /// Out of lives
    GameOver,
    /// Final level cleared
    Victory,
}

/// Play-field bounds. Origin is top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Where fresh balls are launched from
    pub fn launch_point(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - BALL_SPAWN_OFFSET)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scales displacement per tick (Slow Ball sets 0.7)
    pub speed_multiplier: f32,
    /// Recent positions for rendering (oldest first)
    pub trail: VecDeque<Vec2>,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
            speed_multiplier: 1.0,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    /// New ball heading upward, randomly left or right
    pub fn launch(pos: Vec2, rng: &mut impl Rng) -> Self {
        let vx = if rng.random_bool(0.5) {
            BALL_LAUNCH_VX
        } else {
            -BALL_LAUNCH_VX
        };
        Self::new(pos, Vec2::new(vx, BALL_LAUNCH_VY))
    }

    /// Record current position to trail, evicting the oldest
    fn record_trail(&mut self) {
        self.trail.push_back(self.pos);
        while self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }
    }

    /// Integrate one tick and bounce off the side and top walls.
    ///
    /// Returns true when the ball has dropped below the field. The caller
    /// owns removal.
    pub fn update(&mut self, dt: f32, field: Field) -> bool {
        self.pos += self.vel * (dt * self.speed_multiplier);
        self.record_trail();

        // Each wall is checked on its own; corners flip both axes.
        if self.pos.x - self.radius <= 0.0 {
            self.vel.x = self.vel.x.abs();
        }
        if self.pos.x + self.radius >= field.width {
            self.vel.x = -self.vel.x.abs();
        }
        if self.pos.y - self.radius <= 0.0 {
            self.vel.y = self.vel.y.abs();
        }

        self.pos.y > field.height
    }

    /// Axis-aligned bounding box
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.radius, self.radius)
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Set by Sticky Paddle; nothing reads it yet
    pub sticky: bool,
    /// Horizontal velocity from the last update (for "english" on ball)
    vel: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: PADDLE_BASE_WIDTH,
            height: PADDLE_HEIGHT,
            sticky: false,
            vel: 0.0,
        }
    }

    /// Paddle centred near the bottom of the field
    pub fn for_field(field: Field) -> Self {
        Self::new(
            field.width / 2.0 - PADDLE_BASE_WIDTH / 2.0,
            field.height - PADDLE_OFFSET,
        )
    }

    /// Velocity derived by the last `update`
    pub fn velocity(&self) -> f32 {
        self.vel
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Track the pointer with a proportional law, then clamp to the field
    pub fn update(&mut self, dt: f32, pointer_x: f32, field_width: f32) {
        let target_x = pointer_x - self.width / 2.0;
        self.vel = (target_x - self.x) * PADDLE_TRACKING_GAIN;
        self.x += self.vel * dt;
        self.x = self.x.min(field_width - self.width).max(0.0);
    }

    /// Widen by `amount`, never past the maximum width
    pub fn expand(&mut self, amount: f32) {
        self.width = (self.width + amount).clamp(PADDLE_BASE_WIDTH, PADDLE_MAX_WIDTH);
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    ExpandPaddle,
    MultiBall,
    SlowBall,
    /// Collected for score only
    Laser,
    StickyPaddle,
    ExtraLife,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 6] = [
        PowerUpKind::ExpandPaddle,
        PowerUpKind::MultiBall,
        PowerUpKind::SlowBall,
        PowerUpKind::Laser,
        PowerUpKind::StickyPaddle,
        PowerUpKind::ExtraLife,
    ];

    /// Uniform pick among all kinds
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A brick entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub health: u8,
    /// Health at creation; doubles as the colour tier
    pub max_health: u8,
    pub points: u64,
    pub powerup: Option<PowerUpKind>,
}

impl Brick {
    /// Create a brick, rolling for an attached power-up
    pub fn new(pos: Vec2, health: u8, rng: &mut impl Rng) -> Self {
        let powerup = if rng.random_bool(BRICK_POWERUP_CHANCE) {
            Some(PowerUpKind::random(rng))
        } else {
            None
        };
        Self::with_powerup(pos, health, powerup)
    }

    pub fn with_powerup(pos: Vec2, health: u8, powerup: Option<PowerUpKind>) -> Self {
        let health = health.clamp(1, BRICK_MAX_HEALTH);
        Self {
            pos,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            health,
            max_health: health,
            points: health as u64 * BRICK_POINTS_PER_HEALTH,
            powerup,
        }
    }

    /// Take one hit. Returns true when this hit destroyed the brick.
    pub fn hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }

    /// Exact geometric centre, (37.5, 12.5) from the corner with the default
    /// size; bounce-axis ties shift by half a pixel against integer halves.
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// A falling power-up capsule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: PowerUpKind,
    /// Half-extent of the pickup box
    pub size: f32,
    /// Cleared when collected or missed; inactive capsules are compacted away
    pub active: bool,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind) -> Self {
        Self {
            pos,
            vel: Vec2::new(0.0, POWERUP_FALL_SPEED),
            kind,
            size: POWERUP_SIZE,
            active: true,
        }
    }

    /// Fall one tick. Returns true once below the field.
    pub fn update(&mut self, dt: f32, field_height: f32) -> bool {
        self.pos += self.vel * dt;
        self.pos.y > field_height
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size, self.size)
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32, // 1 -> 0
    pub size: f32,
    pub color: u32, // RGBA
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel,
            life: 1.0,
            size,
            color: PARTICLE_COLOR,
        }
    }

    /// Particle thrown upward from `pos` with a random spread
    pub fn spark(pos: Vec2, rng: &mut impl Rng) -> Self {
        let vel = Vec2::new(
            rng.random_range(-200.0..200.0),
            rng.random_range(-300.0..-100.0),
        );
        Self::new(pos, vel, rng.random_range(2.0..5.0))
    }

    /// Advance one tick. Returns false once the particle has faded out.
    pub fn update(&mut self, dt: f32) -> bool {
        self.pos += self.vel * dt;
        self.vel.y += PARTICLE_GRAVITY * dt;
        self.life -= dt * PARTICLE_DECAY;
        self.size *= PARTICLE_SHRINK;
        self.life > 0.0
    }
}

/// Things that happened during the last tick, for audio/render hosts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    PaddleHit { pos: Vec2 },
    BrickHit { pos: Vec2, remaining: u8 },
    BrickDestroyed { pos: Vec2, points: u64 },
    PowerUpSpawned { pos: Vec2, kind: PowerUpKind },
    PowerUpCollected { kind: PowerUpKind },
    PowerUpMissed { kind: PowerUpKind },
    BallLost,
    LifeLost { remaining: u32 },
    LevelCleared { level: u32 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed this session was built from
    pub seed: u64,
    /// Owned RNG; every random draw in the simulation goes through it
    pub rng: Pcg32,
    pub settings: Settings,
    pub field: Field,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Current level (1-based)
    pub level: u32,
    /// Simulated Playing ticks
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub balls: Vec<Ball>,
    pub bricks: Vec<Brick>,
    pub powerups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Events emitted by the current tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session in the menu with level 1 laid out
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let field = settings.field();
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings: settings.clone(),
            field,
            phase: GamePhase::Menu,
            score: 0,
            lives: START_LIVES,
            level: 1,
            time_ticks: 0,
            paddle: Paddle::for_field(field),
            balls: Vec::new(),
            bricks: Vec::new(),
            powerups: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
        };

        state.load_level();
        state.spawn_ball();

        state
    }

    /// Rebuild the whole session, reseeded from this session's RNG
    pub fn restart(&mut self) {
        let from = self.phase;
        let seed = self.rng.random();
        let settings = self.settings.clone();
        *self = Self::new(seed, &settings);
        log::info!("Session restarted with seed {}", seed);
        self.events.push(GameEvent::PhaseChanged {
            from,
            to: GamePhase::Menu,
        });
    }

    /// Lay out bricks for the current level
    pub fn load_level(&mut self) {
        self.bricks = generate_level(self.level, &self.settings.layout, &mut self.rng);
        log::info!("Level {}: {} bricks", self.level, self.bricks.len());
    }

    /// Launch a fresh ball from the default launch point
    pub fn spawn_ball(&mut self) {
        let ball = Ball::launch(self.field.launch_point(), &mut self.rng);
        self.balls.push(ball);
    }

    /// Emit a burst of `count` particles at `pos`
    pub fn emit_particles(&mut self, pos: Vec2, count: usize) {
        if !self.settings.particles {
            return;
        }
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = Particle::spark(pos, &mut self.rng);
            self.particles.push(particle);
        }
    }

    /// Move to `to`, recording the transition
    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::info!("Phase {:?} -> {:?}", from, to);
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> Field {
        Field::new(800.0, 600.0)
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(100.0, 0.0));
        ball.update(0.1, field());
        assert!((ball.pos.x - 410.0).abs() < 1e-4);
    }

    #[test]
    fn test_ball_speed_multiplier_scales_motion() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(100.0, 0.0));
        ball.speed_multiplier = 0.7;
        ball.update(0.1, field());
        assert!((ball.pos.x - 407.0).abs() < 1e-4);
        assert_eq!(ball.vel, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_ball_bounces_off_walls() {
        let mut left = Ball::new(Vec2::new(10.0, 300.0), Vec2::new(-100.0, 0.0));
        left.update(0.1, field());
        assert!(left.vel.x > 0.0);

        let mut right = Ball::new(Vec2::new(790.0, 300.0), Vec2::new(100.0, 0.0));
        right.update(0.1, field());
        assert!(right.vel.x < 0.0);

        let mut top = Ball::new(Vec2::new(400.0, 10.0), Vec2::new(0.0, -100.0));
        top.update(0.1, field());
        assert!(top.vel.y > 0.0);
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let mut ball = Ball::new(Vec2::new(5.0, 5.0), Vec2::new(-50.0, -50.0));
        ball.update(0.01, field());
        assert!(ball.vel.x > 0.0);
        assert!(ball.vel.y > 0.0);
    }

    #[test]
    fn test_ball_lost_below_field() {
        let mut ball = Ball::new(Vec2::new(400.0, 595.0), Vec2::new(0.0, 100.0));
        assert!(ball.update(0.1, field()));

        let mut ball = Ball::new(Vec2::new(400.0, 500.0), Vec2::new(0.0, 100.0));
        assert!(!ball.update(0.1, field()));
    }

    #[test]
    fn test_trail_keeps_last_ten() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(10.0, 0.0));
        for _ in 0..25 {
            ball.update(0.1, field());
        }
        assert_eq!(ball.trail.len(), TRAIL_LENGTH);
        assert_eq!(*ball.trail.back().unwrap(), ball.pos);
        // Oldest retained entry is ten steps behind the newest
        let oldest = ball.trail.front().unwrap();
        assert!((ball.pos.x - oldest.x - 9.0).abs() < 1e-3);
    }

    #[test]
    fn test_launch_heads_upward() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..20 {
            let ball = Ball::launch(Vec2::new(400.0, 520.0), &mut rng);
            assert_eq!(ball.vel.y, BALL_LAUNCH_VY);
            assert_eq!(ball.vel.x.abs(), BALL_LAUNCH_VX);
        }
    }

    #[test]
    fn test_paddle_moves_toward_pointer() {
        let mut paddle = Paddle::new(350.0, 550.0);
        paddle.update(0.1, 500.0, 800.0);
        assert!(paddle.x > 350.0);
        assert!(paddle.velocity() > 0.0);
    }

    #[test]
    fn test_paddle_clamped_to_field() {
        let mut paddle = Paddle::new(0.0, 550.0);
        paddle.update(0.1, -100.0, 800.0);
        assert!(paddle.x >= 0.0);

        paddle.x = 700.0;
        paddle.update(0.1, 900.0, 800.0);
        assert!(paddle.x <= 800.0 - paddle.width);
    }

    #[test]
    fn test_paddle_expand_caps_at_max() {
        let mut paddle = Paddle::new(0.0, 550.0);
        paddle.expand(POWERUP_EXPAND_AMOUNT);
        assert_eq!(paddle.width, 130.0);
        for _ in 0..10 {
            paddle.expand(POWERUP_EXPAND_AMOUNT);
        }
        assert_eq!(paddle.width, PADDLE_MAX_WIDTH);
    }

    #[test]
    fn test_brick_points_and_hits() {
        let mut brick = Brick::with_powerup(Vec2::new(100.0, 50.0), 3, None);
        assert_eq!(brick.points, 300);
        assert_eq!(brick.max_health, 3);
        assert!(!brick.hit());
        assert!(!brick.hit());
        assert!(brick.hit());
        assert_eq!(brick.health, 0);
        // Extra hits never go negative
        assert!(brick.hit());
        assert_eq!(brick.health, 0);
    }

    #[test]
    fn test_brick_health_clamped() {
        assert_eq!(Brick::with_powerup(Vec2::ZERO, 9, None).health, BRICK_MAX_HEALTH);
        assert_eq!(Brick::with_powerup(Vec2::ZERO, 0, None).health, 1);
    }

    #[test]
    fn test_bricks_sometimes_carry_powerups() {
        let mut rng = Pcg32::seed_from_u64(11);
        let carried = (0..1000)
            .filter(|_| Brick::new(Vec2::ZERO, 1, &mut rng).powerup.is_some())
            .count();
        assert!(carried > 50 && carried < 150, "carried {}", carried);
    }

    #[test]
    fn test_powerup_falls_and_leaves_field() {
        let mut powerup = PowerUp::new(Vec2::new(400.0, 100.0), PowerUpKind::MultiBall);
        assert!(!powerup.update(0.1, 600.0));
        assert!(powerup.pos.y > 100.0);

        let mut powerup = PowerUp::new(Vec2::new(400.0, 590.0), PowerUpKind::SlowBall);
        assert!(powerup.update(0.1, 600.0));
    }

    #[test]
    fn test_particle_fades_out() {
        let mut particle = Particle::new(Vec2::new(200.0, 300.0), Vec2::ZERO, 3.0);
        assert!(particle.update(0.1));
        assert!(particle.life < 1.0);
        assert!(particle.size < 3.0);
        let alive = (0..20).fold(true, |_, _| particle.update(0.1));
        assert!(!alive);
    }

    #[test]
    fn test_new_session() {
        let state = GameState::new(12345, &Settings::default());
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.balls.len(), 1);
        assert!(!state.bricks.is_empty());
        assert_eq!(state.paddle.width, PADDLE_BASE_WIDTH);
    }

    #[test]
    fn test_emit_particles_respects_setting() {
        let mut state = GameState::new(1, &Settings::default());
        state.emit_particles(Vec2::new(400.0, 300.0), 5);
        assert_eq!(state.particles.len(), 5);

        let settings = Settings {
            particles: false,
            ..Default::default()
        };
        let mut quiet = GameState::new(1, &settings);
        quiet.emit_particles(Vec2::new(400.0, 300.0), 5);
        assert!(quiet.particles.is_empty());
    }

    proptest! {
        #[test]
        fn wall_contact_forces_velocity_inward(
            x in -20.0f32..8.0,
            vx in -1000.0f32..1000.0,
            vy in -1000.0f32..1000.0,
            dt in 0.001f32..(1.0 / 30.0),
        ) {
            let mut ball = Ball::new(Vec2::new(x, 300.0), Vec2::new(vx, vy));
            ball.update(dt, field());
            prop_assert!(ball.vel.x >= 0.0);

            let mut ball = Ball::new(Vec2::new(800.0 - x, 300.0), Vec2::new(vx, vy));
            ball.update(dt, field());
            prop_assert!(ball.vel.x <= 0.0);

            let mut ball = Ball::new(Vec2::new(400.0, x), Vec2::new(vx, vy));
            ball.update(dt, field());
            prop_assert!(ball.vel.y >= 0.0);
        }

        #[test]
        fn paddle_stays_in_field(
            start in 0.0f32..700.0,
            pointer in -5000.0f32..5000.0,
            dt in 0.001f32..(1.0 / 30.0),
        ) {
            let mut paddle = Paddle::new(start, 550.0);
            paddle.update(dt, pointer, 800.0);
            prop_assert!(paddle.x >= 0.0);
            prop_assert!(paddle.x <= 800.0 - paddle.width);
        }
    }
}
