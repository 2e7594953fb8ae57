//! Terminal rendering module
//!
//! Reads the simulation state after each tick and draws it with crossterm.

pub mod palette;
pub mod terminal;

pub use terminal::{TerminalRenderer, TerminalSession};
