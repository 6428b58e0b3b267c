//! Launching the user's editor on notebook files.

use crate::error::NotebookError;
use anyhow::Context;
use std::path::Path;
use std::process::Command;

/// Opens `path` in the given editor command and waits for it to exit.
pub fn open(editor: &str, path: &Path) -> anyhow::Result<()> {
    log::debug!("opening {} with '{editor}'", path.display());

    let status = Command::new(editor)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to launch editor '{editor}'"))?;

    if !status.success() {
        return Err(NotebookError::EditorFailed {
            editor: editor.to_string(),
            status,
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_editor_fails_to_launch() {
        let err = open("nb-no-such-editor-12345", Path::new("/tmp/x.md")).unwrap_err();
        assert!(err.to_string().contains("Failed to launch editor"));
    }

    #[test]
    fn failing_editor_reports_its_status() {
        let err = open("false", Path::new("/tmp/x.md")).unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }

    #[test]
    fn successful_editor_is_ok() {
        assert!(open("true", Path::new("/tmp/x.md")).is_ok());
    }
}
