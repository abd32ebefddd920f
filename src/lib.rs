//! The checkfilechange crate implements a small nagios/icinga check which
//! verifies that a file has been modified within a given timerange.
//!
//! The binary parses its command line into a [`CheckConfig`], stats the
//! configured file once and reports the file age as a [`ServiceState`]
//! understood by the monitoring scheduler.

use std::fmt;
use std::process;

mod check;
mod cli;
mod runner;

pub use crate::check::{evaluate, perform_check, CheckError, TIMESTAMP_FORMAT};
pub use crate::cli::CheckConfig;
pub use crate::runner::{Runner, RunnerResult};

/// Represents a service state from nagios.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    /// Returns the corresponding nagios exit code to signal the service state of self.
    pub fn exit_code(&self) -> i32 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// The outcome of a single check: one line of output for the monitoring
/// system together with the service state it maps to.
#[derive(Debug)]
pub struct CheckReport {
    state: ServiceState,
    message: String,
}

impl CheckReport {
    pub fn new(state: ServiceState, message: impl Into<String>) -> CheckReport {
        CheckReport {
            state,
            message: message.into(),
        }
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Will return the exit code of the state of this report.
    pub fn exit_code(&self) -> i32 {
        self.state.exit_code()
    }

    /// Will print Self::message and exit with the exit code from Self::exit_code.
    pub fn print_and_exit(self) -> ! {
        println!("{}", self.message);
        process::exit(self.exit_code());
    }
}
