//! Application layer for Apiforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GeneratorService, cleanup)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Pipeline**: The ordered fallible step runner
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All driver/input rules live in `crate::domain`.

pub mod error;
pub mod pipeline;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GeneratorService, cleanup};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem, TemplateCatalog};

pub use error::ApplicationError;
pub use pipeline::{Pipeline, RollbackScope, Step};
