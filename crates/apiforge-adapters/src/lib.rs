//! Infrastructure adapters for Apiforge.
//!
//! This crate implements the ports defined in
//! `apiforge-core::application::ports`. It contains all external
//! dependencies and I/O operations: subprocess execution, the local
//! filesystem, and the compiled-in template catalog, plus in-memory
//! counterparts for tests.

pub mod catalog;
pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use catalog::BuiltinCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordedCall, ScriptedRunner, SystemRunner};
