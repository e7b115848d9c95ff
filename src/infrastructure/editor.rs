//! External editor integration

use crate::error::{LsqError, Result};
use std::path::Path;
use std::process::Command;

/// Editor used when no editor token is given
pub const DEFAULT_EDITOR: &str = "vim";

/// Turn an editor token into a program name.
///
/// An empty token selects [`DEFAULT_EDITOR`]. A token naming a set,
/// non-empty environment variable (e.g. `EDITOR`) selects that variable's
/// value. Anything else is taken as the program name itself.
pub fn select_editor<F>(token: &str, lookup_env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if token.is_empty() {
        return DEFAULT_EDITOR.to_string();
    }

    match lookup_env(token) {
        Some(value) if !value.is_empty() => value,
        _ => token.to_string(),
    }
}

/// [`select_editor`] against the process environment
pub fn select_editor_from_env(token: &str) -> String {
    select_editor(token, |name| std::env::var(name).ok())
}

/// Session for opening a file in an external editor
pub struct EditorSession {
    program: String,
}

impl EditorSession {
    /// Create a new editor session for an already selected program
    pub fn new(program: String) -> Self {
        EditorSession { program }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Open a file in the editor and wait for it to exit.
    ///
    /// The editor inherits stdin, stdout and stderr.
    pub fn open(&self, file_path: &Path) -> Result<()> {
        log::debug!("Launching '{}' on {}", self.program, file_path.display());

        let status = Command::new(&self.program)
            .arg(file_path)
            .status()
            .map_err(|e| {
                LsqError::Editor(format!("Failed to launch editor '{}': {}", self.program, e))
            })?;

        if !status.success() {
            return Err(LsqError::Editor(format!(
                "Editor '{}' exited with {}",
                self.program, status
            )));
        }

        Ok(())
    }
}
