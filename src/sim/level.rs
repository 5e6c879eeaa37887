//! Procedural brick layouts
//!
//! Each level is a fixed-width grid whose row count grows with the level
//! index. Cells are randomly left empty and rows nearer the top of a tall
//! stack get more health.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Brick, Field};
use crate::consts::*;
use crate::error::ConfigError;

/// Shape of the brick grid
///
/// Always holds at least one column and one row; invalid shapes are
/// rejected on construction and on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLevelLayout", into = "RawLevelLayout")]
pub struct LevelLayout {
    columns: u32,
    base_rows: u32,
    max_rows: u32,
}

/// Unchecked serde form of [`LevelLayout`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawLevelLayout {
    columns: u32,
    base_rows: u32,
    max_rows: u32,
}

impl LevelLayout {
    /// Rows for level `n` are `min(base_rows + n, max_rows)`
    pub fn new(columns: u32, base_rows: u32, max_rows: u32) -> Result<Self, ConfigError> {
        if columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if max_rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if columns > MAX_LAYOUT_COLUMNS || max_rows > MAX_LAYOUT_ROWS {
            return Err(ConfigError::LayoutTooLarge {
                columns,
                rows: max_rows,
                max_columns: MAX_LAYOUT_COLUMNS,
                max_rows: MAX_LAYOUT_ROWS,
            });
        }
        Ok(Self {
            columns,
            base_rows,
            max_rows,
        })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Row count for a level (levels start at 1)
    pub fn rows_for_level(&self, level: u32) -> u32 {
        self.base_rows
            .saturating_add(level)
            .min(self.max_rows)
            .max(1)
    }

    /// Bottom-right corner of the deepest grid this layout can produce
    pub fn extent(&self) -> Vec2 {
        cell_position(self.max_rows - 1, self.columns - 1) + Vec2::new(BRICK_WIDTH, BRICK_HEIGHT)
    }

    /// Reject layouts whose deepest level leaves the field or reaches the paddle
    ///
    /// Bricks outside the field can never be hit, so such a level never clears.
    pub fn check_fits(&self, field: Field) -> Result<(), ConfigError> {
        let extent = self.extent();
        let paddle_top = field.height - PADDLE_OFFSET;
        if extent.x > field.width || extent.y > paddle_top {
            return Err(ConfigError::LayoutOutOfField {
                columns: self.columns,
                rows: self.max_rows,
                width: field.width,
                height: field.height,
            });
        }
        Ok(())
    }
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self {
            columns: 10,
            base_rows: 5,
            max_rows: 10,
        }
    }
}

impl TryFrom<RawLevelLayout> for LevelLayout {
    type Error = ConfigError;

    fn try_from(raw: RawLevelLayout) -> Result<Self, Self::Error> {
        Self::new(raw.columns, raw.base_rows, raw.max_rows)
    }
}

impl From<LevelLayout> for RawLevelLayout {
    fn from(layout: LevelLayout) -> Self {
        Self {
            columns: layout.columns,
            base_rows: layout.base_rows,
            max_rows: layout.max_rows,
        }
    }
}

/// Top-left corner of a grid cell
pub fn cell_position(row: u32, col: u32) -> Vec2 {
    Vec2::new(
        col as f32 * BRICK_PITCH_X + BRICK_ORIGIN_X,
        row as f32 * BRICK_PITCH_Y + BRICK_ORIGIN_Y,
    )
}

/// Generate the brick set for `level`
pub fn generate_level(level: u32, layout: &LevelLayout, rng: &mut impl Rng) -> Vec<Brick> {
    let rows = layout.rows_for_level(level);
    let cols = layout.columns;
    let mut bricks = Vec::with_capacity(rows.saturating_mul(cols) as usize);

    for row in 0..rows {
        let health = (rows - row).min(BRICK_MAX_HEALTH as u32) as u8;
        for col in 0..cols {
            if rng.random_bool(BRICK_OMIT_CHANCE) {
                continue;
            }
            bricks.push(Brick::new(cell_position(row, col), health, rng));
        }
    }

    log::debug!(
        "Generated level {}: {}x{} grid, {} bricks",
        level,
        rows,
        cols,
        bricks.len()
    );

    bricks
}
