use std::fmt::Display;
use std::io::{self, Write};

use crate::{CheckReport, ServiceState};

/// Runs a fallible check and reports its error as a service state instead of
/// letting it bubble up into a panic or an unchecked process exit.
pub struct Runner<E> {
    on_error: Option<Box<dyn FnOnce(&E) -> ServiceState>>,
}

impl<E: Display> Runner<E> {
    pub fn new() -> Self {
        Self { on_error: None }
    }

    /// Decides which [ServiceState] to report when the check returns an error.
    /// Without a handler the runner reports [ServiceState::Critical].
    pub fn on_error(mut self, f: impl FnOnce(&E) -> ServiceState + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Runs the given check. An error is paired with the state from the
    /// `on_error` handler so the caller can print and exit with both.
    pub fn safe_run(self, f: impl FnOnce() -> Result<CheckReport, E>) -> RunnerResult<E> {
        match f() {
            Ok(report) => RunnerResult::Ok(report),
            Err(err) => {
                let state = self
                    .on_error
                    .map(|f| f(&err))
                    .unwrap_or(ServiceState::Critical);

                RunnerResult::Err(state, err)
            }
        }
    }
}

pub enum RunnerResult<E> {
    Ok(CheckReport),
    Err(ServiceState, E),
}

impl<E: Display> RunnerResult<E> {
    pub fn print_and_exit(self) -> ! {
        match self {
            RunnerResult::Ok(report) => report.print_and_exit(),
            RunnerResult::Err(state, err) => {
                // error output carries no trailing newline
                print!("{}", err);
                let _ = io::stdout().flush();
                std::process::exit(state.exit_code());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("woops")]
    struct EmptyError;

    #[test]
    fn test_runner_ok() {
        let result = Runner::<EmptyError>::new()
            .on_error(|_| panic!("on_error must not run for a successful check"))
            .safe_run(|| Ok(CheckReport::new(ServiceState::Ok, "test is OK")));

        assert!(matches!(result, RunnerResult::Ok(_)));
    }

    #[test]
    fn test_runner_error() {
        let result = Runner::<EmptyError>::new()
            .on_error(|_| ServiceState::Unknown)
            .safe_run(|| Err(EmptyError));

        assert!(matches!(result, RunnerResult::Err(ServiceState::Unknown, _)));
    }

    #[test]
    fn test_runner_error_without_handler() {
        let result = Runner::<EmptyError>::new().safe_run(|| Err(EmptyError));

        assert!(matches!(result, RunnerResult::Err(ServiceState::Critical, _)));
    }
}
