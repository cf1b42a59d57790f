//! Implementation of the `apiforge generate` command.
//!
//! Responsibility: validate the service name, collect prompt answers, wire
//! the production adapters into the core service, and display results. No
//! pipeline logic lives here.

use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, instrument};

use apiforge_adapters::{BuiltinCatalog, LocalFilesystem, SystemRunner};
use apiforge_core::{application::GeneratorService, domain::SetupInputs};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompts,
};

/// Execute the `apiforge generate` command.
///
/// Dispatch sequence:
/// 1. Validate the service name and check the target directory is free
/// 2. Collect the setup inputs (prompts, or defaults with `--defaults`)
/// 3. Show the configuration summary
/// 4. Run the pipeline via `GeneratorService`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(service = %args.name))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Name and target directory
    validate_service_name(&args.name)?;

    let target = Path::new(&args.name);
    if target.exists() {
        return Err(CliError::ServiceExists {
            path: target.to_path_buf(),
        });
    }

    // 2. Inputs
    let inputs = prompts::collect(&args.name, &config, args.defaults)?;

    // 3. Summary
    if !global.quiet {
        show_configuration(&inputs, &output)?;
    }

    // 4. Wire adapters and run
    let service = GeneratorService::new(
        Box::new(SystemRunner::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinCatalog::new()),
    );

    output.header(&format!("Generating '{}'...", args.name))?;
    info!(service = %args.name, "generation started");

    let spinner = make_spinner(global.quiet);
    let result = service.generate(&inputs);
    spinner.finish_and_clear();

    result.map_err(CliError::Core)?;

    info!(service = %args.name, "generation completed");

    // 5. Success + next steps
    output.success(&format!("Service '{}' generated!", args.name))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", args.name))?;
        output.print("  make server")?;
        output.print("  # then try the requests in api.http")?;
    }

    Ok(())
}

// ── Name validation ───────────────────────────────────────────────────────────

fn validate_service_name(name: &str) -> CliResult<()> {
    let invalid = |reason: &str| CliError::InvalidServiceName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(inputs: &SetupInputs, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Service:    {}", inputs.workdir))?;
    out.print(&format!("  Module:     {}", inputs.module_name()))?;
    out.print(&format!("  Driver:     {}", inputs.driver))?;
    out.print(&format!(
        "  Container:  {} (port {})",
        inputs.container_name, inputs.container_port
    ))?;
    out.print(&format!("  Database:   {}", inputs.db_name.to_lowercase()))?;
    out.print(&format!("  Table:      {}", inputs.table_name))?;
    out.print(&format!("  API group:  {}", inputs.api_group))?;
    out.print("")?;
    Ok(())
}

fn make_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("running setup pipeline (docker, migrate, sqlc)...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

// ── Tests ─────────────────────────────────────────────────────────────────────
