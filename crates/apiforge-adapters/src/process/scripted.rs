//! Scripted command runner for testing.
//!
//! Records every invocation and succeeds by default; individual commands can
//! be scripted to fail by program name plus an argument fragment. This is
//! the test stand-in for the original's process-global mock executor —
//! injected through the port instead of swapped into a global.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use apiforge_core::{
    application::{ApplicationError, ports::CommandRunner},
    error::ForgeResult,
};

/// One recorded subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub workdir: PathBuf,
}

impl RecordedCall {
    /// The args joined with spaces, convenient for substring assertions.
    pub fn arg_line(&self) -> String {
        self.args.join(" ")
    }
}

#[derive(Debug, Default)]
struct Inner {
    calls: Vec<RecordedCall>,
    failures: Vec<(String, String)>,
}

/// Test double: records calls, replays scripted failures.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    inner: Arc<Mutex<Inner>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any future call to `program` whose joined argument line contains
    /// `arg_fragment`.
    pub fn fail_when(&self, program: &str, arg_fragment: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .failures
            .push((program.to_string(), arg_fragment.to_string()));
    }

    /// All recorded calls, in invocation order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Recorded calls to one program only.
    pub fn calls_for(&self, program: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.program == program)
            .collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String], workdir: &Path) -> ForgeResult<String> {
        let call = RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
            workdir: workdir.to_path_buf(),
        };
        let arg_line = call.arg_line();

        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);

        let fails = inner
            .failures
            .iter()
            .any(|(p, fragment)| p.as_str() == program && arg_line.contains(fragment.as_str()));
        if fails {
            return Err(ApplicationError::CommandFailed {
                command: format!("{program} {arg_line}"),
                reason: "scripted failure".into(),
            }
            .into());
        }

        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn records_calls_in_order() {
        let runner = ScriptedRunner::new();
        runner.run("go", &argv(&["mod", "init"]), Path::new("svc")).unwrap();
        runner.run("docker", &argv(&["run"]), Path::new(".")).unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].program, "go");
        assert_eq!(calls[1].program, "docker");
    }

    #[test]
    fn scripted_failure_matches_program_and_fragment() {
        let runner = ScriptedRunner::new();
        runner.fail_when("docker", "run");

        assert!(runner.run("docker", &argv(&["ps"]), Path::new(".")).is_ok());
        assert!(runner.run("go", &argv(&["run"]), Path::new(".")).is_ok());
        assert!(
            runner
                .run("docker", &argv(&["run", "--name", "x"]), Path::new("."))
                .is_err()
        );
    }

    #[test]
    fn failed_calls_are_still_recorded() {
        let runner = ScriptedRunner::new();
        runner.fail_when("migrate", "up");
        let _ = runner.run("migrate", &argv(&["-verbose", "up"]), Path::new("svc"));
        assert_eq!(runner.calls_for("migrate").len(), 1);
    }
}
