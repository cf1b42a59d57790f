//! Compensating cleanup for a failed run.
//!
//! The rollback state is small on purpose: the working directory, plus the
//! container name and driver when a container may have been provisioned.
//! This is best-effort total cleanup, not an undo log — every removal is
//! attempted independently, failures are logged and never escalated, and
//! invoking it on an already-clean state is a harmless no-op.

use std::path::Path;

use tracing::{info, warn};

use crate::application::ports::{CommandRunner, Filesystem};
use crate::domain::Driver;

/// Everything needed to reverse the side effects of a partial run.
#[derive(Debug, Clone, Copy)]
pub struct RollbackPlan<'a> {
    pub workdir: &'a Path,
    /// `Some` only when the pipeline had reached the container-launch step.
    pub container: Option<(&'a str, Driver)>,
}

/// Remove the working directory, then — only if a container name was
/// supplied — force-remove the container and its named volume.
pub fn run(runner: &dyn CommandRunner, filesystem: &dyn Filesystem, plan: &RollbackPlan<'_>) {
    match filesystem.remove_dir_all(plan.workdir) {
        Ok(()) => info!(path = %plan.workdir.display(), "removed working directory"),
        Err(e) => warn!(
            error = %e,
            path = %plan.workdir.display(),
            "could not remove working directory"
        ),
    }

    let Some((container, driver)) = plan.container else {
        return;
    };

    let rm = ["rm".to_string(), "-f".to_string(), container.to_string()];
    match runner.run("docker", &rm, Path::new(".")) {
        Ok(_) => info!(container, "removed container"),
        Err(e) => warn!(error = %e, container, "could not remove container"),
    }

    let volume_rm = [
        "volume".to_string(),
        "rm".to_string(),
        driver.volume().to_string(),
    ];
    match runner.run("docker", &volume_rm, Path::new(".")) {
        Ok(_) => info!(volume = driver.volume(), "removed volume"),
        Err(e) => warn!(error = %e, volume = driver.volume(), "could not remove volume"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{MockCommandRunner, MockFilesystem};

    fn fs_error() -> crate::error::ForgeError {
        ApplicationError::Filesystem {
            path: "gone".into(),
            reason: "no such file or directory".into(),
        }
        .into()
    }

    #[test]
    fn without_container_no_docker_calls() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(0);

        let mut fs = MockFilesystem::new();
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));

        run(
            &runner,
            &fs,
            &RollbackPlan {
                workdir: Path::new("svc"),
                container: None,
            },
        );
    }

    #[test]
    fn directory_failure_does_not_stop_container_removal() {
        let mut fs = MockFilesystem::new();
        fs.expect_remove_dir_all()
            .times(1)
            .returning(|_| Err(fs_error()));

        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .times(2)
            .returning(|_, _, _| Ok(String::new()));

        run(
            &runner,
            &fs,
            &RollbackPlan {
                workdir: Path::new("svc"),
                container: Some(("pg1", Driver::Postgres)),
            },
        );
    }

    #[test]
    fn container_failure_does_not_stop_volume_removal() {
        let mut fs = MockFilesystem::new();
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));

        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|program, args, _| program == "docker" && args[0] == "rm")
            .times(1)
            .returning(|_, _, _| {
                Err(ApplicationError::CommandFailed {
                    command: "docker rm".into(),
                    reason: "no such container".into(),
                }
                .into())
            });
        runner
            .expect_run()
            .withf(|program, args, _| program == "docker" && args[0] == "volume")
            .times(1)
            .returning(|_, _, _| Ok(String::new()));

        run(
            &runner,
            &fs,
            &RollbackPlan {
                workdir: Path::new("svc"),
                container: Some(("pg1", Driver::Postgres)),
            },
        );
    }

    #[test]
    fn removes_driver_specific_volume() {
        for (driver, volume) in [(Driver::Postgres, "pgdata"), (Driver::Mysql, "mysql_data")] {
            let mut fs = MockFilesystem::new();
            fs.expect_remove_dir_all().returning(|_| Ok(()));

            let expected = volume.to_string();
            let mut runner = MockCommandRunner::new();
            runner
                .expect_run()
                .withf(|_, args, _| args[0] == "rm")
                .returning(|_, _, _| Ok(String::new()));
            runner
                .expect_run()
                .withf(move |_, args, _| args[0] == "volume" && args[2] == expected)
                .times(1)
                .returning(|_, _, _| Ok(String::new()));

            run(
                &runner,
                &fs,
                &RollbackPlan {
                    workdir: Path::new("svc"),
                    container: Some(("c", driver)),
                },
            );
        }
    }
}
