use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "gridsnake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Failure loading or saving the high-score file.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the persisted high score.
///
/// A missing file is a first run and yields `Ok(0)`; an unreadable or
/// malformed file is an error the caller can surface before entering raw
/// terminal mode.
pub fn load_high_score() -> Result<u32, ScoreError> {
    load_from_path(&scores_path())
}

/// Persists the high score, creating parent directories when needed.
pub fn save_high_score(score: u32) -> Result<(), ScoreError> {
    save_to_path(&scores_path(), score)
}

fn load_from_path(path: &Path) -> Result<u32, ScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    let file: HighScoreFile = serde_json::from_str(&raw)?;
    Ok(file.high_score)
}

fn save_to_path(path: &Path, score: u32) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&HighScoreFile { high_score: score })?;
    fs::write(path, json)?;
    Ok(())
}
