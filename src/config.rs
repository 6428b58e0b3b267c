//! Runtime configuration for the notebook.
//!
//! There is no configuration file: the notebook root and editor are
//! resolved once at startup from the CLI and environment, and the
//! resulting `Config` is passed explicitly to every command handler.

use crate::error::NotebookError;
use std::env;
use std::path::{Path, PathBuf};

/// The organizational folders that make up a notebook.
///
/// Only `nb init` consults this list; every other command addresses the
/// folders it needs by name.
pub const NOTEBOOK_DIRS: &[&str] = &[
    "+Assets",
    "+Templates",
    "Canvases",
    "Collections",
    "Collections/Links",
    "Essays",
    "Fields",
    "Fleeting Thoughts",
    "Log",
    "People",
    "Planning",
    "Projects",
    "Wiki",
];

#[derive(Debug, Clone)]
pub struct Config {
    notebook_root: PathBuf,
    editor: String,
}

impl Config {
    /// Resolves the configuration from an optional `--notebook` flag.
    ///
    /// The notebook root comes from the flag, then the `NOTEBOOK_PATH`
    /// environment variable, then `~/Notebook`. The editor comes from
    /// `$EDITOR`, falling back to `nvim`.
    pub fn resolve(notebook_flag: Option<PathBuf>) -> Result<Self, NotebookError> {
        let notebook_root = match notebook_flag {
            Some(path) => path,
            None => match env::var_os("NOTEBOOK_PATH") {
                Some(path) => PathBuf::from(path),
                None => dirs::home_dir()
                    .ok_or(NotebookError::NoHomeDir)?
                    .join("Notebook"),
            },
        };

        let editor = env::var("EDITOR").unwrap_or_else(|_| "nvim".to_string());

        Ok(Self {
            notebook_root,
            editor,
        })
    }

    #[cfg(test)]
    pub fn with_root(notebook_root: impl Into<PathBuf>) -> Self {
        Self {
            notebook_root: notebook_root.into(),
            editor: "true".to_string(),
        }
    }

    pub fn notebook_root(&self) -> &Path {
        &self.notebook_root
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    /// Directory that link notes are filed into.
    pub fn links_dir(&self) -> PathBuf {
        self.notebook_root.join("Collections").join("Links")
    }

    /// Directory holding the daily log files.
    pub fn log_dir(&self) -> PathBuf {
        self.notebook_root.join("Log")
    }

    /// Path of the daily note template.
    pub fn daily_template(&self) -> PathBuf {
        self.notebook_root.join("+Templates").join("Daily Note.md")
    }
}
