//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "apiforge",
    bin_name = "apiforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Generate a database-backed API service",
    long_about = "Apiforge generates a complete API service skeleton: handlers, \
                  middleware, migrations, typed query code, and a running \
                  database container to develop against.",
    after_help = "EXAMPLES:\n\
        \x20 apiforge generate --name orders-api\n\
        \x20 apiforge generate --name billing --defaults\n\
        \x20 apiforge completions zsh > ~/.zfunc/_apiforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new API service.
    #[command(
        visible_alias = "g",
        about = "Generate an API service skeleton",
        after_help = "EXAMPLES:\n\
            \x20 apiforge generate --name orders-api\n\
            \x20 apiforge generate --name billing --defaults\n\n\
            The command walks through a short series of prompts (database \
            driver, container settings, credentials, table and API group \
            names); every prompt has a sensible default."
    )]
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 apiforge completions bash > ~/.local/share/bash-completion/completions/apiforge\n\
            \x20 apiforge completions zsh  > ~/.zfunc/_apiforge\n\
            \x20 apiforge completions fish > ~/.config/fish/completions/apiforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `apiforge generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Name of the service to generate; becomes the working directory.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Name of the API service to generate"
    )]
    pub name: String,

    /// Accept every prompt's default without asking.
    #[arg(
        short = 'y',
        long = "defaults",
        help = "Accept all defaults, skip the prompts"
    )]
    pub defaults: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `apiforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
