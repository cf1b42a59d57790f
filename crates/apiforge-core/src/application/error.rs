//! Application layer errors.
//!
//! These errors represent failures in orchestration, not input rules.
//! Input-rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Artifact;
use crate::error::{ErrorCategory, ForgeError};

/// Errors that occur while running the setup pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// An external tool exited non-zero or could not be spawned. `reason`
    /// carries the combined output so the tool's own message reaches the
    /// user verbatim.
    #[error("command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The catalog has no body for a requested artifact.
    #[error("no template registered for artifact {artifact:?}")]
    MissingTemplate { artifact: Artifact },

    /// sqlc configuration could not be serialized.
    #[error("could not serialize sqlc configuration: {reason}")]
    CodegenConfig { reason: String },

    /// A pipeline step failed; rollback has already run by the time this
    /// error reaches the caller.
    #[error("setup step '{step}' failed")]
    StepFailed {
        step: &'static str,
        #[source]
        source: Box<ForgeError>,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CommandFailed { command, .. } => vec![
                format!("External command failed: {command}"),
                "Ensure the tool is installed and in your PATH".into(),
                "The tool's own output is shown above".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::MissingTemplate { .. } => vec![
                "This is a packaging problem in apiforge itself".into(),
                "Please report it".into(),
            ],
            Self::CodegenConfig { .. } => {
                vec!["This is a bug in apiforge; please report it".into()]
            }
            Self::StepFailed { source, .. } => {
                let mut s = source.suggestions();
                s.push("Generated files and the container were cleaned up".into());
                s.push("Fix the underlying problem and re-run".into());
                s
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommandFailed { .. } => ErrorCategory::External,
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::MissingTemplate { .. } | Self::CodegenConfig { .. } => ErrorCategory::Internal,
            Self::StepFailed { source, .. } => source.category(),
        }
    }
}
