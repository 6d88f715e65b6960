//! `[locale]` section: how the locale archive path is resolved and exported.
use std::path::PathBuf;

use serde::Deserialize;

use super::ConfigOrigin;
use crate::lib::{errors::ConfigError, paths::is_nonempty_absolute};

pub const DEFAULT_LOCALE_ENV_VAR: &str = "LOCALE_ARCHIVE_2_27";
pub const DEFAULT_INTERPRETER: &str = "/bin/sh";
/// Sources the Nix profile, then prints the glibcLocales archive path without a newline.
pub const DEFAULT_RESOLVE_COMMAND: &str = concat!(
    ". ~/.nix-profile/etc/profile.d/nix.sh && ",
    "printf \"%s\" \"$(nix-build --no-out-link \"<nixpkgs>\" -A glibcLocales)/lib/locale/locale-archive\""
);

/// How the locale archive path is resolved and exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSection {
    pub env_var: String,
    pub command: String,
    pub interpreter: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawLocaleSection {
    pub env_var: Option<String>,
    pub command: Option<String>,
    pub interpreter: Option<PathBuf>,
}

pub fn parse_locale_section(
    raw: Option<RawLocaleSection>,
    origin: &ConfigOrigin,
) -> Result<LocaleSection, ConfigError> {
    let locale_raw = raw.unwrap_or_default();

    let env_var = locale_raw
        .env_var
        .unwrap_or_else(|| DEFAULT_LOCALE_ENV_VAR.to_string());
    validate_env_var(origin, &env_var)?;

    let command = locale_raw
        .command
        .unwrap_or_else(|| DEFAULT_RESOLVE_COMMAND.to_string());
    validate_command(origin, &command)?;

    let interpreter = locale_raw
        .interpreter
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INTERPRETER));
    if !is_nonempty_absolute(&interpreter) {
        return Err(invalid(
            origin,
            "locale.interpreter",
            format!("{} must be an absolute path", interpreter.display()),
        ));
    }

    Ok(LocaleSection {
        env_var,
        command,
        interpreter,
    })
}

fn validate_env_var(origin: &ConfigOrigin, env_var: &str) -> Result<(), ConfigError> {
    if env_var.is_empty() {
        return Err(invalid(origin, "locale.env_var", "must not be empty".into()));
    }
    if env_var.contains(['=', '\0']) {
        return Err(invalid(
            origin,
            "locale.env_var",
            format!("{env_var:?} must not contain `=` or NUL"),
        ));
    }
    Ok(())
}

fn validate_command(origin: &ConfigOrigin, command: &str) -> Result<(), ConfigError> {
    if command.trim().is_empty() {
        return Err(invalid(origin, "locale.command", "must not be empty".into()));
    }
    if command.contains('\0') {
        return Err(invalid(
            origin,
            "locale.command",
            "must not contain NUL bytes".into(),
        ));
    }
    Ok(())
}

fn invalid(origin: &ConfigOrigin, field: &'static str, message: String) -> ConfigError {
    ConfigError::InvalidField {
        origin: origin.clone(),
        field,
        message,
    }
}
