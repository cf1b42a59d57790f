//! Generated artifacts and where they land in the service tree.
//!
//! The template *bodies* are opaque to the core — they live behind the
//! [`TemplateCatalog`](crate::application::ports::TemplateCatalog) port.
//! What the core owns is the set of artifact identities and their output
//! paths relative to the working directory.

use std::path::PathBuf;

use crate::domain::inputs::SetupInputs;

/// Every file the generator writes from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// HTTP handler for the API group.
    Controller,
    /// Service layer between handler and generated queries.
    ServiceLayer,
    CorsMiddleware,
    AuthMiddleware,
    /// Config loader reading `app.env`.
    UtilsConfig,
    UtilsHelpers,
    /// Database connection wiring.
    Connection,
    /// Test harness opening a real connection.
    ConnectionTestHarness,
    MainFile,
    Makefile,
    EnvFile,
    /// Editor scratch file with ready-made requests.
    HttpScratch,
    MigrationUp,
    MigrationDown,
    /// Named queries consumed by the codegen tool.
    TableQuery,
}

impl Artifact {
    /// Output path relative to the working directory.
    pub fn relative_path(self, inputs: &SetupInputs) -> PathBuf {
        let group = inputs.api_group.as_str();
        match self {
            Self::Controller => ["api", "v1", group, "controller.go"].iter().collect(),
            Self::ServiceLayer => ["api", "v1", group, "service.go"].iter().collect(),
            Self::CorsMiddleware => ["api", "v1", "mw", "cors", "cors.go"].iter().collect(),
            Self::AuthMiddleware => ["api", "v1", "mw", "auth", "auth.go"].iter().collect(),
            Self::UtilsConfig => ["utils", "config.go"].iter().collect(),
            Self::UtilsHelpers => ["utils", "utils.go"].iter().collect(),
            Self::Connection => ["pkg", "db", "connection.go"].iter().collect(),
            Self::ConnectionTestHarness => ["pkg", "db", "main_test.go"].iter().collect(),
            Self::MainFile => PathBuf::from("main.go"),
            Self::Makefile => PathBuf::from("Makefile"),
            Self::EnvFile => PathBuf::from("app.env"),
            Self::HttpScratch => PathBuf::from("api.http"),
            Self::MigrationUp => ["pkg", "db", "migrations", "000001_init_schema.up.sql"]
                .iter()
                .collect(),
            Self::MigrationDown => ["pkg", "db", "migrations", "000001_init_schema.down.sql"]
                .iter()
                .collect(),
            Self::TableQuery => {
                let mut path: PathBuf = ["pkg", "db", "query"].iter().collect();
                path.push(format!("{}.sql", inputs.table_name));
                path
            }
        }
    }
}
