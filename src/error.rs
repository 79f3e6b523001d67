//! Error types for habitlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for habitlog
#[derive(Debug, Error)]
pub enum HabitError {
    #[error("Habit log not found: {0}")]
    NotFound(PathBuf),

    #[error("Corrupt habit log {path}: {reason}")]
    CorruptData { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HabitError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HabitError::Config(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            HabitError::Config(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check the syntax of habitlog.toml (or the file named by HABITLOG_CONFIG)\n\
                    • Valid keys: data_file, log_file, persist, log_level\n\
                    • Unset HABITLOG_CONFIG to fall back to the defaults",
                    self
                )
            }
            HabitError::CorruptData { path, .. } => {
                format!(
                    "{}\n\n\
                    The file at {} will be replaced on the next recorded habit.",
                    self,
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }

    /// Whether this error means "start from an empty log" when loading
    pub fn is_recoverable_load(&self) -> bool {
        matches!(
            self,
            HabitError::NotFound(_) | HabitError::CorruptData { .. }
        )
    }
}

/// Result type using HabitError
pub type Result<T> = std::result::Result<T, HabitError>;
