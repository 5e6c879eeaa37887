//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, owned by the session
//! - Stable iteration order (entity vectors are never reordered)
//! - Removals are deferred until a pass over a collection is finished
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod powerup;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{BounceAxis, Rect, paddle_normal, resolve_ball};
pub use level::{LevelLayout, generate_level};
pub use powerup::{apply_powerup, update_powerups};
pub use snapshot::GameSnapshot;
pub use state::{
    Ball, Brick, Field, GameEvent, GamePhase, GameState, Paddle, Particle, PowerUp, PowerUpKind,
};
pub use tick::{TickInput, clamp_dt, tick};
