use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "snake-sim";
const SCORE_FILE_NAME: &str = "high_score.json";

/// High-score persistence failures.
#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("failed to access the high score file: {0}")]
    Io(#[from] io::Error),
    #[error("high score file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Returns the platform-correct high score file path.
#[must_use]
pub fn high_score_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the stored high score.
///
/// A missing file reads as 0 (first run). A file that exists but cannot
/// be read or parsed surfaces an error so the caller can warn before
/// entering raw terminal mode.
pub fn load_high_score() -> Result<u32, ScoreStoreError> {
    load_from_path(&high_score_path())
}

/// Persists `score`, creating parent directories when needed.
pub fn save_high_score(score: u32) -> Result<(), ScoreStoreError> {
    save_to_path(&high_score_path(), score)
}

fn load_from_path(path: &Path) -> Result<u32, ScoreStoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(error) => return Err(error.into()),
    };

    let file: ScoreFile = serde_json::from_str(&raw)?;
    Ok(file.high_score)
}

fn save_to_path(path: &Path, score: u32) -> Result<(), ScoreStoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = ScoreFile { high_score: score };
    let json = serde_json::to_string_pretty(&payload)?;
    fs::write(path, json)?;
    Ok(())
}
