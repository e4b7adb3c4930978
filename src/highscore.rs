//! Best-score persistence
//!
//! One decimal integer in a text file. A missing or unreadable file means
//! "no prior best"; a failed write is logged, never silently dropped.

use std::fs;
use std::path::{Path, PathBuf};

/// Default store location, next to the binary's working directory.
pub const DEFAULT_PATH: &str = "highscore.txt";

#[derive(Debug, Clone)]
pub struct HighScore {
    best: u32,
    path: PathBuf,
}

impl HighScore {
    /// Read the stored best from `path`; any read or parse error counts
    /// as no prior score.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = read_best(&path);
        log::info!("high score loaded: {best}");
        Self { best, path }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record `score` if it beats the stored best, overwriting the file in
    /// full. Returns true when a new best was set.
    pub fn submit(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(err) = fs::write(&self.path, self.best.to_string()) {
            log::warn!("failed to write {}: {err}", self.path.display());
        }
        true
    }

    /// Re-read the file when a finished run resets to the title screen.
    /// Never lowers the in-memory best.
    pub fn reload(&mut self) {
        self.best = self.best.max(read_best(&self.path));
    }
}

fn read_best(path: &Path) -> u32 {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}
