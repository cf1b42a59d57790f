//! Domain error types.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers keep them past rollback)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The requested DBMS is not one apiforge can provision.
    ///
    /// Callers must treat this as fatal: no directory is created and no
    /// subprocess is spawned for an unsupported driver.
    #[error("driver not supported: '{driver}'")]
    UnsupportedDriver { driver: String },

    #[error("invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },

    /// Identifier destined for SQL or Go source; letters, digits and
    /// underscores only.
    #[error("invalid {field} identifier '{value}'")]
    InvalidIdentifier { field: &'static str, value: String },

    #[error("container port must be non-zero")]
    InvalidPort,

    #[error("module base path must not be empty")]
    EmptyModulePath,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedDriver { driver } => vec![
                format!("'{driver}' is not a supported database driver"),
                "Supported drivers:".into(),
                "  • postgres - PostgreSQL (default)".into(),
                "  • mysql    - MySQL".into(),
            ],
            Self::InvalidServiceName { reason, .. } => vec![
                format!("Service name is invalid: {reason}"),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: orders-api, billing_service".into(),
            ],
            Self::InvalidIdentifier { field, .. } => vec![
                format!("The {field} name ends up in SQL and Go source"),
                "Use only letters, digits, and underscores".into(),
            ],
            Self::InvalidPort => vec![
                "Pick a free host port for the database container".into(),
                "Example: 6432".into(),
            ],
            Self::EmptyModulePath => vec![
                "Provide the module base path used for `go mod init`".into(),
                "Example: github.com/acme".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedDriver { .. } => ErrorCategory::Unsupported,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Unsupported,
    Internal,
}
