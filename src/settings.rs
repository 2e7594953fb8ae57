//! Game settings and preferences
//!
//! Stored as JSON next to the game; every field has a default so partial
//! files are fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How cells are drawn in the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GlyphStyle {
    /// Coloured full blocks
    #[default]
    Blocks,
    /// Plain characters, for terminals without colour
    Ascii,
}

impl GlyphStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlyphStyle::Blocks => "Blocks",
            GlyphStyle::Ascii => "Ascii",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blocks" | "block" => Some(GlyphStyle::Blocks),
            "ascii" => Some(GlyphStyle::Ascii),
            _ => None,
        }
    }
}

/// How `Settings::load_or_default` got its settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// No file; defaults used
    Missing,
    /// File unreadable or malformed; defaults used
    Invalid(String),
}

impl LoadOutcome {
    /// Report the outcome through the logger
    pub fn log(&self, path: &Path) {
        match self {
            LoadOutcome::Loaded => log::info!("Loaded settings from {}", path.display()),
            LoadOutcome::Missing => {
                log::info!("No settings at {}, using defaults", path.display())
            }
            LoadOutcome::Invalid(reason) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), reason)
            }
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Append-only score file
    pub score_log: PathBuf,
    /// Where log records go while the terminal is in raw mode
    pub log_file: PathBuf,
    /// Fixed RNG seed; random per run when absent
    pub seed: Option<u64>,
    pub glyphs: GlyphStyle,
    /// Score/speed line under the board
    pub show_hud: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            score_log: PathBuf::from("score_stats.txt"),
            log_file: PathBuf::from("stone-snake.log"),
            seed: None,
            glyphs: GlyphStyle::Blocks,
            show_hud: true,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Read settings, falling back to defaults when the file is missing or
    /// broken. Nothing is logged here; the caller reports the outcome once
    /// logging is up.
    pub fn load_or_default(path: &Path) -> (Self, LoadOutcome) {
        match Self::load(path) {
            Ok(settings) => (settings, LoadOutcome::Loaded),
            Err(crate::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                (Self::default(), LoadOutcome::Missing)
            }
            Err(e) => (Self::default(), LoadOutcome::Invalid(e.to_string())),
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
