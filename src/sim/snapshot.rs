//! Read-only view of a session for renderers

use serde::{Deserialize, Serialize};

use super::state::{Ball, Brick, Field, GameEvent, GamePhase, GameState, Paddle, Particle, PowerUp};

/// Owned copy of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub time_ticks: u64,
    pub field: Field,
    pub paddle: Paddle,
    pub balls: Vec<Ball>,
    pub bricks: Vec<Brick>,
    pub powerups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    /// Events from the tick that produced this snapshot
    pub events: Vec<GameEvent>,
}

impl GameSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            level: self.level,
            time_ticks: self.time_ticks,
            field: self.field,
            paddle: self.paddle.clone(),
            balls: self.balls.clone(),
            bricks: self.bricks.clone(),
            powerups: self.powerups.clone(),
            particles: self.particles.clone(),
            events: self.events.clone(),
        }
    }
}
