//! Non-fatal errors collected while loading, scanning, and rendering.
//!
//! None of these abort a run. Each operation returns its partial result
//! alongside the errors it hit and the binary reports them as diagnostics.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Error opening ignore file {}: {source}", path.display())]
    IgnoreOpen { path: PathBuf, source: io::Error },
    #[error("Error reading ignore file {}: {source}", path.display())]
    IgnoreRead { path: PathBuf, source: io::Error },
    #[error("Error walking directory {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        source: walkdir::Error,
    },
    #[error("Error opening file {}: {source}", path.display())]
    FileOpen { path: PathBuf, source: io::Error },
    #[error("Error reading file {}: {source}", path.display())]
    FileRead { path: PathBuf, source: io::Error },
    #[error("Error generating JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Error loading config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}
