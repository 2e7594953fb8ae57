//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per call, no timing of its own
//! - Seeded RNG only
//! - No rendering, terminal or file dependencies

pub mod grid;
pub mod item;
pub mod snake;
pub mod state;
pub mod tick;

pub use grid::{Cell, Direction, Grid};
pub use item::{ItemKind, SpawnableItem};
pub use snake::Snake;
pub use state::{GameEvent, GamePhase, GameState, RoundOverCause};
pub use tick::{RoundSummary, TickInput, TickReport, tick};
