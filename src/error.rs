//! Error types for lsq

use crate::infrastructure::edn::EdnError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lsq application
#[derive(Debug, Error)]
pub enum LsqError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse config.edn: {0}")]
    ConfigParse(#[from] EdnError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Could not determine home directory for vault '{0}'")]
    HomeDirectory(PathBuf),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl LsqError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LsqError::Editor(_) => 2,
            LsqError::Config(_) | LsqError::ConfigParse(_) => 3,
            LsqError::Terminal(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            LsqError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Pick an editor explicitly: lsq -e nvim\n\
                    • Use the built-in editor: lsq -t",
                    msg
                )
            }
            LsqError::HomeDirectory(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Set the HOME environment variable\n\
                    • Pass an absolute vault path: lsq -d /path/to/vault",
                    self
                )
            }
            LsqError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check permissions of the vault's journals directory",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using LsqError
pub type Result<T> = std::result::Result<T, LsqError>;
