//! Turning a fatal error into a one-line diagnostic and an exit code.
use std::process::ExitCode;

use anyhow::Error;

/// Prefix for every diagnostic written to stderr.
pub const DIAGNOSTIC_PREFIX: &str = "fish-nix-locale";

/// Bundles a fatal error message with the exit code to terminate with.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    /// Flatten the error chain into a single line.
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{DIAGNOSTIC_PREFIX}: {}", self.message);
        self.exit_code
    }
}
