//! Crate error type

use thiserror::Error;

/// Errors raised by the game and its collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// No free cell was left for an item.
    #[error("no free cell left on the board ({cells} cells searched)")]
    BoardFull { cells: usize },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
