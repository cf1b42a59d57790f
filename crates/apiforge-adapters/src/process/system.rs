//! Production command runner using std::process.

use std::path::Path;
use std::process::Command;

use tracing::{debug, error};

use apiforge_core::{
    application::{ApplicationError, ports::CommandRunner},
    error::ForgeResult,
};

/// Runs external tools as real subprocesses.
///
/// Blocking by design: the setup pipeline is strictly sequential, so each
/// call waits for the process to exit. Stdout and stderr are captured and
/// combined so a failing tool's message can be surfaced verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], workdir: &Path) -> ForgeResult<String> {
        let command = display_command(program, args);
        debug!(command = %command, workdir = %workdir.display(), "running");

        let output = Command::new(program)
            .args(args)
            .current_dir(workdir)
            .output()
            .map_err(|e| ApplicationError::CommandFailed {
                command: command.clone(),
                reason: format!("could not spawn: {e}"),
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            let status = output
                .status
                .code()
                .map_or_else(|| "terminated by signal".into(), |c| format!("exit code {c}"));
            error!(command = %command, status = %status, output = %combined.trim(), "command failed");
            return Err(ApplicationError::CommandFailed {
                command,
                reason: format!("{status}: {}", combined.trim()),
            }
            .into());
        }

        if !combined.trim().is_empty() {
            debug!(output = %combined.trim(), "command output");
        }
        Ok(combined)
    }
}

fn display_command(program: &str, args: &[String]) -> String {
    let mut s = program.to_string();
    for arg in args {
        s.push(' ');
        s.push_str(arg);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    #[cfg(unix)]
    fn captures_stdout_of_successful_command() {
        let runner = SystemRunner::new();
        let out = runner
            .run("sh", &argv(&["-c", "echo hello"]), Path::new("."))
            .unwrap();
        assert!(out.contains("hello"));
    }

    #[test]
    #[cfg(unix)]
    fn nonzero_exit_surfaces_output_in_error() {
        let runner = SystemRunner::new();
        let err = runner
            .run("sh", &argv(&["-c", "echo boom >&2; exit 3"]), Path::new("."))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("exit code 3"), "got: {msg}");
        assert!(msg.contains("boom"), "got: {msg}");
    }

    #[test]
    fn missing_program_is_command_failed() {
        let runner = SystemRunner::new();
        let err = runner
            .run("definitely-not-a-real-tool", &[], Path::new("."))
            .unwrap_err();
        assert!(err.to_string().contains("could not spawn"));
    }
}
