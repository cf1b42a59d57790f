//! Apiforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Apiforge
//! API-service generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          apiforge-cli (CLI)             │
//! │     (Prompts, flags, exit codes)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (GeneratorService, cleanup::run)     │
//! │      Setup pipeline + rollback          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (CommandRunner, Filesystem, Catalog)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   apiforge-adapters (Infrastructure)    │
//! │ (SystemRunner, LocalFilesystem, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Driver, SetupInputs, RenderContext)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use apiforge_core::{
//!     application::GeneratorService,
//!     domain::{Credentials, Driver, SetupInputs},
//! };
//!
//! // 1. Describe the service to generate
//! let inputs = SetupInputs {
//!     module_path: "example".into(),
//!     workdir: "orders-api".into(),
//!     driver: Driver::Postgres,
//!     container_name: "postgres_db".into(),
//!     container_port: 6432,
//!     credentials: Credentials::new("postgres", "password"),
//!     db_name: "orders".into(),
//!     table_name: "orders".into(),
//!     api_group: "orders".into(),
//! };
//!
//! // 2. Run the pipeline (with injected adapters)
//! let service = GeneratorService::new(runner, filesystem, catalog);
//! service.generate(&inputs).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratorService,
        cleanup::{self, RollbackPlan},
        ports::{CommandRunner, Filesystem, TemplateCatalog},
    };
    pub use crate::domain::{Artifact, Credentials, Driver, RenderContext, SetupInputs};
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
