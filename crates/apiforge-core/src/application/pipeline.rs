//! The setup pipeline runner.
//!
//! An ordered list of named, fallible steps executed sequentially on one
//! thread. The first failing step stops the run immediately — remaining
//! steps are never attempted — and reports which rollback scope applies.
//! No step is ever retried.

use tracing::{debug, info};

use crate::error::ForgeError;

/// How much state may exist by the time a given step fails.
///
/// Steps before the container launch can at most have created the working
/// directory; from the launch step onward a container may exist as well,
/// even when the launch itself is what failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollbackScope {
    WorkdirOnly,
    WithContainer,
}

/// One fallible unit of the generation sequence.
pub struct Step<'a> {
    name: &'static str,
    scope: RollbackScope,
    action: Box<dyn FnOnce() -> Result<(), ForgeError> + 'a>,
}

impl<'a> Step<'a> {
    pub fn new(
        name: &'static str,
        scope: RollbackScope,
        action: impl FnOnce() -> Result<(), ForgeError> + 'a,
    ) -> Self {
        Self {
            name,
            scope,
            action: Box::new(action),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// A failed step: identity, applicable rollback scope, underlying error.
#[derive(Debug)]
pub struct StepFailure {
    pub step: &'static str,
    pub scope: RollbackScope,
    pub error: ForgeError,
}

/// Ordered sequence of setup steps.
#[derive(Default)]
pub struct Pipeline<'a> {
    steps: Vec<Step<'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn push(&mut self, step: Step<'a>) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order, stopping at the first failure.
    pub fn run(self) -> Result<(), StepFailure> {
        let total = self.steps.len();
        for (index, step) in self.steps.into_iter().enumerate() {
            debug!(step = step.name, "{}/{total}", index + 1);
            if let Err(error) = (step.action)() {
                return Err(StepFailure {
                    step: step.name,
                    scope: step.scope,
                    error,
                });
            }
            info!(step = step.name, "completed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::application::ApplicationError;

    fn failing() -> Result<(), ForgeError> {
        Err(ApplicationError::CommandFailed {
            command: "docker run".into(),
            reason: "port is already allocated".into(),
        }
        .into())
    }

    #[test]
    fn all_steps_run_in_order() {
        let seen = RefCell::new(Vec::new());
        let seen = &seen;
        let mut pipeline = Pipeline::new();
        for name in ["first", "second", "third"] {
            pipeline.push(Step::new(name, RollbackScope::WorkdirOnly, move || {
                seen.borrow_mut().push(name);
                Ok(())
            }));
        }

        assert!(pipeline.run().is_ok());
        assert_eq!(*seen.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn stops_at_first_failure() {
        let seen = RefCell::new(Vec::new());
        let mut pipeline = Pipeline::new();
        pipeline.push(Step::new("ok", RollbackScope::WorkdirOnly, || {
            seen.borrow_mut().push("ok");
            Ok(())
        }));
        pipeline.push(Step::new("boom", RollbackScope::WithContainer, failing));
        pipeline.push(Step::new("never", RollbackScope::WithContainer, || {
            seen.borrow_mut().push("never");
            Ok(())
        }));

        let failure = pipeline.run().unwrap_err();
        assert_eq!(failure.step, "boom");
        assert_eq!(failure.scope, RollbackScope::WithContainer);
        assert_eq!(*seen.borrow(), vec!["ok"], "later steps must not run");
    }

    #[test]
    fn failure_carries_underlying_error_verbatim() {
        let mut pipeline = Pipeline::new();
        pipeline.push(Step::new("launch", RollbackScope::WithContainer, failing));

        let failure = pipeline.run().unwrap_err();
        assert!(
            failure
                .error
                .to_string()
                .contains("port is already allocated")
        );
    }

    #[test]
    fn empty_pipeline_succeeds() {
        assert!(Pipeline::new().run().is_ok());
    }
}
