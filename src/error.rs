//! Defines custom error types for the application.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotebookError {
    #[error("No URL provided for link collection.")]
    MissingUrl,

    #[error("Invalid date format: {0}. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Log for {date} does not exist: {path}")]
    LogNotFound { date: String, path: PathBuf },

    #[error("Log directory does not exist: {0}")]
    LogDirMissing(PathBuf),

    #[error("Daily note template does not exist: {0}")]
    TemplateMissing(PathBuf),

    #[error("Editor '{editor}' exited with {status}")]
    EditorFailed { editor: String, status: std::process::ExitStatus },

    #[error("Could not determine your home directory")]
    NoHomeDir,
}
