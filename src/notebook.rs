//! Notebook-level commands: scaffolding and opening the notebook.

use crate::config::{Config, NOTEBOOK_DIRS};
use crate::editor;
use anyhow::Context;
use std::fs;

/// `nb init`: create the notebook root and its organizational folders.
///
/// Idempotent: directories that already exist are left untouched.
pub fn init(config: &Config) -> anyhow::Result<()> {
    let root = config.notebook_root();

    for dir in NOTEBOOK_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }

    println!("Initialized notebook at {}", root.display());
    Ok(())
}

/// `nb open`: open the notebook root in the configured editor.
pub fn open(config: &Config) -> anyhow::Result<()> {
    editor::open(config.editor(), config.notebook_root())
}
