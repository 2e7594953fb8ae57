//! Score log and session scoreboard
//!
//! Every finished round appends one human-readable line to a text file. The
//! scoreboard keeps the best score seen so far for the HUD.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Prefix of every log line, followed by the score
const LINE_PREFIX: &str = "Game Over! Score: ";

/// Append-only score file
#[derive(Debug, Clone)]
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format one log line (without newline)
    pub fn format_line(score: u32) -> String {
        format!("{LINE_PREFIX}{score}")
    }

    /// Parse a line written by `append`
    pub fn parse_line(line: &str) -> Option<u32> {
        line.trim().strip_prefix(LINE_PREFIX)?.parse().ok()
    }

    /// Append a round's score, creating the file if needed
    pub fn append(&self, score: u32) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", Self::format_line(score))?;
        log::info!("Score {} written to {}", score, self.path.display());
        Ok(())
    }

    /// All scores in the log, oldest first. Unreadable lines are skipped and
    /// a missing file reads as empty.
    pub fn read_scores(&self) -> Result<Vec<u32>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut scores = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            match Self::parse_line(&line) {
                Some(score) => scores.push(score),
                None => log::warn!("Skipping unrecognised score log line: {:?}", line),
            }
        }
        Ok(scores)
    }

    /// Log a finished round and record it on `board`. A write failure is
    /// logged and the round still counts. Returns true on a new best.
    pub fn record_round(&self, board: &mut ScoreBoard, score: u32) -> bool {
        if let Err(e) = self.append(score) {
            log::error!("Failed to write score log {}: {}", self.path.display(), e);
        }
        let new_best = board.record(score);
        if new_best {
            log::info!("New best score: {}", score);
        }
        new_best
    }
}

/// Best score and round count across the session
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    best: Option<u32>,
    rounds: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the best score from earlier sessions
    pub fn from_history(scores: &[u32]) -> Self {
        Self {
            best: scores.iter().copied().max(),
            rounds: 0,
        }
    }

    /// Check if a score would beat the current best
    pub fn qualifies(&self, score: u32) -> bool {
        score > 0 && self.best.is_none_or(|best| score > best)
    }

    /// Record a finished round. Returns true on a new best.
    pub fn record(&mut self, score: u32) -> bool {
        self.rounds += 1;
        let new_best = self.qualifies(score);
        if new_best {
            self.best = Some(score);
        }
        new_best
    }

    pub fn best(&self) -> Option<u32> {
        self.best
    }

    /// Rounds recorded this session
    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}
