//! Stone Snake - grid snake with apples, inedible apples and stones
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, round state)
//! - `renderer`: Terminal rendering
//! - `platform`: Input mapping and frame pacing
//! - `score_log`: Append-only score log and session scoreboard
//! - `settings`: User settings

pub mod error;
pub mod platform;
pub mod renderer;
pub mod score_log;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use score_log::{ScoreBoard, ScoreLog};
pub use settings::{GlyphStyle, LoadOutcome, Settings};

/// Game configuration constants
pub mod consts {
    /// Board dimensions in pixels
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;
    /// Side of one square cell in pixels
    pub const CELL_SIZE: i32 = 20;

    /// Board dimensions in cells (32x24)
    pub const GRID_WIDTH: i32 = SCREEN_WIDTH / CELL_SIZE;
    pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / CELL_SIZE;

    /// Ticks per second at the start of a round
    pub const INITIAL_SPEED: u32 = 5;
    /// Ticks per second cap
    pub const MAX_SPEED: u32 = 25;
    /// Speed gained per apple
    pub const SPEED_STEP: u32 = 2;
    /// Score gained per apple
    pub const APPLE_SCORE: u32 = 2;

    /// Random samples tried before placement falls back to a grid scan
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 256;
}
