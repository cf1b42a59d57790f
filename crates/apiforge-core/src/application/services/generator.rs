//! Generator service - main application orchestrator.
//!
//! This service runs the entire setup pipeline:
//! 1. Create the working directory and initialise the module
//! 2. Provision the database container
//! 3. Run migrations and query codegen
//! 4. Render and write every source artifact
//!
//! Any step failing stops the run and triggers one compensating cleanup of
//! the directory and (when applicable) the container — rollback lives in
//! exactly one place instead of at every call site.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        pipeline::{Pipeline, RollbackScope, Step, StepFailure},
        ports::{CommandRunner, Filesystem, TemplateCatalog},
        services::cleanup::{self, RollbackPlan},
    },
    domain::{Artifact, RenderContext, SetupInputs},
    error::{ForgeError, ForgeResult},
};

/// Go packages every generated service depends on. The driver's own module
/// is appended per run.
const BASE_PACKAGES: [&str; 6] = [
    "github.com/gin-gonic/gin",
    "github.com/IBM/alchemy-logging/src/go/alog",
    "github.com/golang-migrate/migrate/v4",
    "github.com/gin-contrib/cors",
    "github.com/spf13/viper",
    "github.com/stretchr/testify/mock",
];

/// Directories created under the working directory before any file lands.
const LAYOUT_DIRS: [&str; 10] = [
    "api",
    "api/v1",
    "api/v1/mw",
    "api/v1/mw/cors",
    "api/v1/mw/auth",
    "pkg",
    "pkg/db",
    "pkg/db/migrations",
    "pkg/db/query",
    "utils",
];

/// Main generation service.
///
/// All external effects go through constructor-injected ports.
pub struct GeneratorService {
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
    catalog: Box<dyn TemplateCatalog>,
}

impl GeneratorService {
    /// Create a new generator service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use apiforge_core::application::GeneratorService;
    ///
    /// let service = GeneratorService::new(
    ///     runner,     // impl CommandRunner
    ///     filesystem, // impl Filesystem
    ///     catalog,    // impl TemplateCatalog
    /// );
    /// ```
    pub fn new(
        runner: Box<dyn CommandRunner>,
        filesystem: Box<dyn Filesystem>,
        catalog: Box<dyn TemplateCatalog>,
    ) -> Self {
        Self {
            runner,
            filesystem,
            catalog,
        }
    }

    /// Generate a complete service from the collected inputs.
    ///
    /// This is the main use case. Inputs are validated before any side
    /// effect; afterwards the pipeline runs to the end or rolls back.
    #[instrument(skip_all, fields(service = %inputs.workdir, driver = %inputs.driver))]
    pub fn generate(&self, inputs: &SetupInputs) -> ForgeResult<()> {
        inputs.validate()?;

        info!(
            container = %inputs.container_name,
            port = inputs.container_port,
            "generating service"
        );

        let ctx = RenderContext::for_inputs(inputs);
        let workdir = PathBuf::from(&inputs.workdir);

        use RollbackScope::{WithContainer, WorkdirOnly};
        let mut pipeline = Pipeline::new();
        pipeline.push(Step::new("create working directory", WorkdirOnly, || {
            self.filesystem.create_dir_all(&workdir)
        }));
        pipeline.push(Step::new("initialise module", WorkdirOnly, || {
            self.init_module(inputs)
        }));
        pipeline.push(Step::new("fetch dependencies", WorkdirOnly, || {
            self.fetch_dependencies(inputs)
        }));
        pipeline.push(Step::new("create layout directories", WorkdirOnly, || {
            self.create_layout(&workdir)
        }));
        pipeline.push(Step::new("launch database container", WithContainer, || {
            self.launch_container(inputs)
        }));
        pipeline.push(Step::new("run migrations", WithContainer, || {
            self.run_migrations(inputs, &ctx)
        }));
        pipeline.push(Step::new("write table queries", WithContainer, || {
            self.write_artifacts(&[Artifact::TableQuery], inputs, &ctx)
        }));
        pipeline.push(Step::new("generate query code", WithContainer, || {
            self.run_codegen(inputs)
        }));
        pipeline.push(Step::new("wire database connection", WithContainer, || {
            self.write_artifacts(
                &[Artifact::Connection, Artifact::ConnectionTestHarness],
                inputs,
                &ctx,
            )
        }));
        pipeline.push(Step::new("write api handlers", WithContainer, || {
            self.write_artifacts(&[Artifact::Controller, Artifact::ServiceLayer], inputs, &ctx)
        }));
        pipeline.push(Step::new("write middleware", WithContainer, || {
            self.write_artifacts(
                &[Artifact::CorsMiddleware, Artifact::AuthMiddleware],
                inputs,
                &ctx,
            )
        }));
        pipeline.push(Step::new("write utilities", WithContainer, || {
            self.write_artifacts(&[Artifact::UtilsConfig, Artifact::UtilsHelpers], inputs, &ctx)
        }));
        pipeline.push(Step::new("write service entrypoint", WithContainer, || {
            self.write_artifacts(
                &[
                    Artifact::MainFile,
                    Artifact::Makefile,
                    Artifact::EnvFile,
                    Artifact::HttpScratch,
                ],
                inputs,
                &ctx,
            )
        }));

        match pipeline.run() {
            Ok(()) => {
                info!("service generated successfully");
                Ok(())
            }
            Err(failure) => Err(self.rollback_and_report(inputs, failure)),
        }
    }

    // -------------------------------------------------------------------------
    // Pipeline steps
    // -------------------------------------------------------------------------

    fn init_module(&self, inputs: &SetupInputs) -> ForgeResult<()> {
        self.runner.run(
            "go",
            &argv(&["mod", "init", &inputs.module_name()]),
            Path::new(&inputs.workdir),
        )?;
        Ok(())
    }

    fn fetch_dependencies(&self, inputs: &SetupInputs) -> ForgeResult<()> {
        let workdir = Path::new(&inputs.workdir);
        for package in BASE_PACKAGES
            .iter()
            .copied()
            .chain([inputs.driver.go_module()])
        {
            self.runner.run("go", &argv(&["get", package]), workdir)?;
        }
        Ok(())
    }

    fn create_layout(&self, workdir: &Path) -> ForgeResult<()> {
        for dir in LAYOUT_DIRS {
            self.filesystem.create_dir_all(&workdir.join(dir))?;
        }
        Ok(())
    }

    fn launch_container(&self, inputs: &SetupInputs) -> ForgeResult<()> {
        info!(
            container = %inputs.container_name,
            image = inputs.driver.image(),
            "starting database container"
        );
        self.runner
            .run("docker", &inputs.driver.run_args(inputs), Path::new("."))?;
        Ok(())
    }

    fn run_migrations(&self, inputs: &SetupInputs, ctx: &RenderContext) -> ForgeResult<()> {
        let workdir = Path::new(&inputs.workdir);

        self.runner.run(
            "migrate",
            &argv(&[
                "create",
                "-ext",
                "sql",
                "-dir",
                "pkg/db/migrations",
                "-seq",
                "init_schema",
            ]),
            workdir,
        )?;

        // Fill the files `migrate create` just produced, then apply them.
        self.write_artifacts(&[Artifact::MigrationUp, Artifact::MigrationDown], inputs, ctx)?;

        let database = inputs.driver.connection_string(inputs);
        self.runner.run(
            "migrate",
            &argv(&[
                "-path",
                "pkg/db/migrations",
                "-database",
                &database,
                "-verbose",
                "up",
            ]),
            workdir,
        )?;
        Ok(())
    }

    fn run_codegen(&self, inputs: &SetupInputs) -> ForgeResult<()> {
        let workdir = Path::new(&inputs.workdir);

        self.runner.run("sqlc", &argv(&["init"]), workdir)?;

        let yaml = sqlc_config_yaml(inputs)?;
        self.filesystem.write_file(&workdir.join("sqlc.yaml"), &yaml)?;

        self.runner.run("sqlc", &argv(&["generate"]), workdir)?;
        Ok(())
    }

    fn write_artifacts(
        &self,
        artifacts: &[Artifact],
        inputs: &SetupInputs,
        ctx: &RenderContext,
    ) -> ForgeResult<()> {
        for &artifact in artifacts {
            let body = self.catalog.body(artifact)?;
            let content = ctx.render(&body);
            let path = Path::new(&inputs.workdir).join(artifact.relative_path(inputs));

            // Ensure parent exists — the API group directory is named after
            // user input and is not part of the fixed layout.
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            self.filesystem.write_file(&path, &content)?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Rollback
    // -------------------------------------------------------------------------

    fn rollback_and_report(&self, inputs: &SetupInputs, failure: StepFailure) -> ForgeError {
        warn!(
            step = failure.step,
            error = %failure.error,
            "setup failed, cleaning up partial state"
        );

        let container = match failure.scope {
            RollbackScope::WithContainer => {
                Some((inputs.container_name.as_str(), inputs.driver))
            }
            RollbackScope::WorkdirOnly => None,
        };

        cleanup::run(
            self.runner.as_ref(),
            self.filesystem.as_ref(),
            &RollbackPlan {
                workdir: Path::new(&inputs.workdir),
                container,
            },
        );

        ApplicationError::StepFailed {
            step: failure.step,
            source: Box::new(failure.error),
        }
        .into()
    }
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

// ── sqlc configuration ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct SqlcConfig {
    version: String,
    packages: Vec<SqlcPackage>,
}

#[derive(Debug, Serialize)]
struct SqlcPackage {
    name: String,
    path: String,
    queries: String,
    schema: String,
    engine: String,
    emit_interface: bool,
}

fn sqlc_config_yaml(inputs: &SetupInputs) -> ForgeResult<String> {
    let config = SqlcConfig {
        version: "1".into(),
        packages: vec![SqlcPackage {
            name: "db".into(),
            path: "./pkg/db".into(),
            queries: "./pkg/db/query/".into(),
            schema: "./pkg/db/migrations".into(),
            engine: inputs.driver.engine().into(),
            emit_interface: false,
        }],
    };

    serde_yaml::to_string(&config).map_err(|e| {
        ApplicationError::CodegenConfig {
            reason: e.to_string(),
        }
        .into()
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
