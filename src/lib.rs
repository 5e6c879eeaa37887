//! Brickfall - A brick-breaker arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `settings`: Runtime configuration (field size, level layout, seed)
//! - `error`: Configuration errors
//!
//! Rendering, input polling and audio live outside this crate. A host feeds
//! [`sim::TickInput`] and `dt` into [`sim::tick`] once per frame and draws
//! from [`sim::GameSnapshot`].

pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the host clock (60 Hz)
    pub const TARGET_DT: f32 = 1.0 / 60.0;
    /// Largest dt a single tick will integrate (bounds per-frame displacement)
    pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;

    /// Default play-field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Launch speed; horizontal sign is random, vertical is always upward
    pub const BALL_LAUNCH_VX: f32 = 200.0;
    pub const BALL_LAUNCH_VY: f32 = -300.0;
    /// Launch point height above the bottom of the field
    pub const BALL_SPAWN_OFFSET: f32 = 80.0;
    /// Number of past positions kept for the trail
    pub const TRAIL_LENGTH: usize = 10;

    /// Paddle defaults
    pub const PADDLE_BASE_WIDTH: f32 = 100.0;
    pub const PADDLE_MAX_WIDTH: f32 = 200.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Paddle top edge height above the bottom of the field
    pub const PADDLE_OFFSET: f32 = 50.0;
    /// Proportional gain of the pointer-tracking law
    pub const PADDLE_TRACKING_GAIN: f32 = 10.0;
    /// Fraction of paddle velocity transferred to the ball on contact
    pub const PADDLE_ENGLISH: f32 = 0.3;
    /// Maximum deflection angle off the paddle (60 degrees)
    pub const PADDLE_MAX_DEFLECTION: f32 = std::f32::consts::FRAC_PI_3;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 25.0;
    pub const BRICK_MAX_HEALTH: u8 = 5;
    pub const BRICK_POINTS_PER_HEALTH: u64 = 100;
    /// Grid pitch and origin
    pub const BRICK_PITCH_X: f32 = 78.0;
    pub const BRICK_PITCH_Y: f32 = 30.0;
    pub const BRICK_ORIGIN_X: f32 = 10.0;
    pub const BRICK_ORIGIN_Y: f32 = 60.0;
    /// Largest accepted grid
    pub const MAX_LAYOUT_COLUMNS: u32 = 64;
    pub const MAX_LAYOUT_ROWS: u32 = 64;
    /// Chance that a grid cell is left empty
    pub const BRICK_OMIT_CHANCE: f64 = 0.1;
    /// Chance that a brick carries a power-up
    pub const BRICK_POWERUP_CHANCE: f64 = 0.1;

    /// Power-up defaults
    pub const POWERUP_FALL_SPEED: f32 = 150.0;
    pub const POWERUP_SIZE: f32 = 20.0;
    pub const POWERUP_SCORE_BONUS: u64 = 50;
    pub const POWERUP_EXPAND_AMOUNT: f32 = 30.0;
    pub const SLOW_BALL_MULTIPLIER: f32 = 0.7;
    pub const MULTI_BALL_COUNT: usize = 2;

    /// Particle behaviour
    pub const PARTICLE_GRAVITY: f32 = 500.0;
    pub const PARTICLE_DECAY: f32 = 2.0;
    pub const PARTICLE_SHRINK: f32 = 0.98;
    pub const PARTICLE_COLOR: u32 = 0xFFFF_C8C8; // RGBA
    /// Burst sizes
    pub const PADDLE_HIT_PARTICLES: usize = 5;
    pub const BRICK_BREAK_PARTICLES: usize = 10;
    pub const POWERUP_COLLECT_PARTICLES: usize = 15;

    /// Session defaults
    pub const START_LIVES: u32 = 3;
    pub const FINAL_LEVEL: u32 = 5;
}
