//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `apiforge-adapters` implement
//! these. Every port is constructor-injected into the services — there are
//! no process-global executor or client singletons anywhere in this crate.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `CommandRunner`: subprocess execution
//!   - `Filesystem`: file operations
//!   - `TemplateCatalog`: opaque template bodies
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in the CLI layer)

use std::path::Path;

use crate::domain::Artifact;
use crate::error::ForgeResult;

/// Port for running external tools.
///
/// Implemented by:
/// - `apiforge_adapters::process::SystemRunner` (production)
/// - `apiforge_adapters::process::ScriptedRunner` (testing)
///
/// ## Design Notes
///
/// - Blocking: the call returns only after the process exits; the pipeline
///   has no timeout or cancellation, so a hung tool hangs the run
/// - On success, returns the combined stdout/stderr output
/// - Non-zero exit or spawn failure becomes `ApplicationError::CommandFailed`
///   carrying the tool's output verbatim
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` in `workdir` and wait for it to exit.
    fn run(&self, program: &str, args: &[String], workdir: &Path) -> ForgeResult<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `apiforge_adapters::filesystem::LocalFilesystem` (production)
/// - `apiforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()>;
}

/// Port for template body lookup.
///
/// Bodies are opaque format strings; the core only renders and writes them.
///
/// Implemented by:
/// - `apiforge_adapters::BuiltinCatalog` (compiled-in templates)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateCatalog: Send + Sync {
    /// The raw body for an artifact, before variable substitution.
    fn body(&self, artifact: Artifact) -> ForgeResult<String>;
}
