//! `[shell]` section: the target shell binary and its argument-0 name.
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigOrigin;
use crate::lib::{
    errors::ConfigError,
    paths::{expand_home, is_nonempty_absolute},
};

pub const DEFAULT_SHELL_PATH: &str = "~/.nix-profile/bin/fish";
pub const DEFAULT_SHELL_NAME: &str = "fish";

/// Target shell the launcher replaces itself with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSection {
    pub path: PathBuf,
    pub name: String,
}

impl ShellSection {
    /// Argument 0 for a login invocation (`-fish`).
    pub fn login_name(&self) -> String {
        format!("-{}", self.name)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawShellSection {
    pub path: Option<PathBuf>,
    pub name: Option<String>,
}

pub fn parse_shell_section(
    raw: Option<RawShellSection>,
    origin: &ConfigOrigin,
    home: Option<&Path>,
) -> Result<ShellSection, ConfigError> {
    let shell_raw = raw.unwrap_or_default();

    let configured = shell_raw
        .path
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SHELL_PATH));
    let shell_path = expand_home(&configured, home).ok_or(ConfigError::HomeUnavailable {
        origin: origin.clone(),
        field: "shell.path",
    })?;
    validate_shell_path(origin, &shell_path)?;

    let name = shell_raw
        .name
        .unwrap_or_else(|| DEFAULT_SHELL_NAME.to_string());
    validate_shell_name(origin, &name)?;

    Ok(ShellSection {
        path: shell_path,
        name,
    })
}

fn validate_shell_path(origin: &ConfigOrigin, shell_path: &Path) -> Result<(), ConfigError> {
    if is_nonempty_absolute(shell_path) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        origin: origin.clone(),
        field: "shell.path",
        message: format!("{} must be an absolute path", shell_path.display()),
    })
}

fn validate_shell_name(origin: &ConfigOrigin, name: &str) -> Result<(), ConfigError> {
    let message = if name.trim().is_empty() {
        "must not be empty"
    } else if name.starts_with('-') {
        "must not start with `-`; the login prefix is added automatically"
    } else if name.contains('/') {
        "must be a bare name, not a path"
    } else if name.contains('\0') {
        "must not contain NUL bytes"
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidField {
        origin: origin.clone(),
        field: "shell.name",
        message: message.into(),
    })
}
