//! Error types for configuration, locale resolution, and the final exec.
use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

use crate::config::ConfigOrigin;

/// Errors that can occur while loading or validating the launcher configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration sources.
    #[error("Failed to read configuration from {origin}")]
    FileRead {
        origin: ConfigOrigin,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration from {origin}")]
    Parse {
        origin: ConfigOrigin,
        #[source]
        source: ConfigLoaderError,
    },
    /// `~/` expansion was requested but `HOME` is not set.
    #[error("Configuration from {origin} uses `~` in `{field}` but HOME is not set")]
    HomeUnavailable {
        origin: ConfigOrigin,
        field: &'static str,
    },
    /// Field failed validation.
    #[error("Configuration from {origin} has invalid `{field}`: {message}")]
    InvalidField {
        origin: ConfigOrigin,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(origin: ConfigOrigin, source: ConfigLoaderError) -> Self {
        Self::FileRead { origin, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(origin: ConfigOrigin, source: ConfigLoaderError) -> Self {
        Self::Parse { origin, source }
    }
}

/// Failures of the locale archive resolution command. All of them are fatal.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to start resolution command via {interpreter}")]
    Spawn {
        interpreter: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("resolution command stdout was not captured")]
    StdoutUnavailable,
    #[error("failed to read resolution command output")]
    Read {
        #[source]
        source: io::Error,
    },
    #[error("failed to wait for resolution command")]
    Wait {
        #[source]
        source: io::Error,
    },
    #[error("command failed with status {status}")]
    CommandFailed { status: i32 },
    #[error("command terminated by signal {signal}")]
    Signaled { signal: i32 },
}

impl ResolveError {
    /// Numeric status to report for a failed command, if the command ran at all.
    pub fn status(&self) -> Option<i32> {
        match self {
            ResolveError::CommandFailed { status } => Some(*status),
            _ => None,
        }
    }
}

/// Terminal failures of a launch. A launch that succeeds never returns.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to resolve locale archive path")]
    Resolve(#[from] ResolveError),
    #[error("failed to exec {program}")]
    Exec {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}
