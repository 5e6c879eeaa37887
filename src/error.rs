//! Configuration errors
//!
//! The simulation itself never fails: degenerate arithmetic is clamped or
//! passed through. Only configuration that would produce an unplayable game
//! is rejected, and it is rejected before a session is built.

/// Errors raised while building or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Level layout has no columns.
    #[error("level layout must have at least one column")]
    ZeroColumns,

    /// Level layout can never produce a row.
    #[error("level layout must have at least one row")]
    ZeroRows,

    /// Level layout exceeds the largest accepted grid.
    #[error("level layout {columns}x{rows} is larger than {max_columns}x{max_rows}")]
    LayoutTooLarge {
        columns: u32,
        rows: u32,
        max_columns: u32,
        max_rows: u32,
    },

    /// Deepest level would place bricks outside the field or below the paddle.
    #[error("level layout {columns}x{rows} does not fit a {width}x{height} field")]
    LayoutOutOfField {
        columns: u32,
        rows: u32,
        width: f32,
        height: f32,
    },

    /// Play field is empty or too narrow for the paddle.
    #[error("invalid play field {width}x{height}")]
    InvalidField { width: f32, height: f32 },

    /// Frame dt cap is not a positive number.
    #[error("invalid frame dt cap: {0}")]
    InvalidFrameCap(f32),

    /// Settings file could not be read.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for [`crate::Settings`].
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
