//! Platform layer
//!
//! Handles the terminal side of the game loop:
//! - Input events (key -> command)
//! - Frame pacing (speed -> tick deadline)

pub mod input;
pub mod pacing;

pub use input::{Command, map_key};
pub use pacing::{Pacer, frame_duration};
