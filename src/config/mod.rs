//! Load and validate launcher configuration.
use std::{
    env,
    ffi::OsString,
    fmt,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, info};

use crate::lib::errors::ConfigError;

pub mod locale;
pub mod shell;
pub mod telemetry;

pub use locale::{
    parse_locale_section, LocaleSection, RawLocaleSection, DEFAULT_INTERPRETER,
    DEFAULT_LOCALE_ENV_VAR, DEFAULT_RESOLVE_COMMAND,
};
pub use shell::{
    parse_shell_section, RawShellSection, ShellSection, DEFAULT_SHELL_NAME, DEFAULT_SHELL_PATH,
};

pub const CONFIG_ENV_KEY: &str = "FISH_NIX_LOCALE_CONFIG";
/// Prefix for `FISH_NIX_LOCALE_<SECTION>__<KEY>` overrides.
const ENV_OVERRIDE_PREFIX: &str = "FISH_NIX_LOCALE";
const CONFIG_DIR_NAME: &str = "fish-nix-locale";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub shell: ShellSection,
    pub locale: LocaleSection,
    pub origin: ConfigOrigin,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    shell: Option<RawShellSection>,
    locale: Option<RawLocaleSection>,
}

/// Where the loaded values came from, besides `FISH_NIX_LOCALE_*` overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigOrigin::File(path) => write!(f, "{}", path.display()),
            ConfigOrigin::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Where the configuration file is looked up and whether it has to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub required: bool,
}

impl ConfigLocation {
    /// Resolve in the order: `FISH_NIX_LOCALE_CONFIG` → `$XDG_CONFIG_HOME` → `$HOME/.config`.
    pub fn from_env() -> Option<Self> {
        Self::resolve(
            env::var_os(CONFIG_ENV_KEY),
            env::var_os("XDG_CONFIG_HOME"),
            home_dir().as_deref(),
        )
    }

    /// `None` when no absolute config directory is known; the current
    /// directory is never searched.
    pub fn resolve(
        explicit: Option<OsString>,
        xdg_config_home: Option<OsString>,
        home: Option<&Path>,
    ) -> Option<Self> {
        if let Some(path) = explicit.filter(|value| !value.is_empty()) {
            return Some(Self {
                path: PathBuf::from(path),
                required: true,
            });
        }

        let config_root = xdg_config_home
            .map(PathBuf::from)
            .filter(|path| path.is_absolute())
            .or_else(|| home.map(|home| home.join(".config")))?;

        Some(Self {
            path: config_root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
            required: false,
        })
    }
}

/// `$HOME`, ignoring an empty value.
pub fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

impl LauncherConfig {
    /// Load from `FISH_NIX_LOCALE_CONFIG` when set, otherwise from the optional
    /// default location; a missing default file yields built-in defaults.
    pub fn load_from_env_or_default() -> Result<Self, ConfigError> {
        let location = ConfigLocation::from_env();
        telemetry::log_location(location.as_ref());
        match location {
            Some(location) if location.required => Self::load_from_path(location.path),
            location => Self::load_with(location, None, home_dir().as_deref()),
        }
    }

    /// Load configuration from a specific path that must exist.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        Self::load_with(
            Some(ConfigLocation {
                path,
                required: true,
            }),
            None,
            home_dir().as_deref(),
        )
    }

    /// Load with explicit inputs. `env_source` replaces the process environment
    /// as the source of `FISH_NIX_LOCALE_*` overrides when given.
    pub fn load_with(
        location: Option<ConfigLocation>,
        env_source: Option<config::Map<String, String>>,
        home: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let origin = location
            .as_ref()
            .map_or(ConfigOrigin::Defaults, |location| {
                ConfigOrigin::File(location.path.clone())
            });
        info!(
            target: "fish_nix_locale::config",
            origin = %origin,
            required = location.as_ref().is_some_and(|location| location.required),
            "Starting configuration load"
        );

        let mut builder = config::Config::builder();
        if let Some(location) = location {
            builder = builder.add_source(
                config::File::from(location.path)
                    .format(config::FileFormat::Toml)
                    .required(location.required),
            );
        }
        let overrides = config::Environment::with_prefix(ENV_OVERRIDE_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(env_source);
        let document = builder.add_source(overrides).build().map_err(|err| {
            let error = ConfigError::from_read_error(origin.clone(), err);
            debug!(
                target: "fish_nix_locale::config",
                origin = %origin,
                reason = %error,
                "Failed to read configuration"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(origin.clone(), err);
            debug!(
                target: "fish_nix_locale::config",
                origin = %origin,
                reason = %error,
                "Failed to parse configuration"
            );
            error
        })?;

        let config = Self::from_raw(raw, origin.clone(), home).map_err(|err| {
            debug!(
                target: "fish_nix_locale::config",
                origin = %origin,
                reason = %err,
                "Failed to validate configuration"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(
        raw: RawLauncherConfig,
        origin: ConfigOrigin,
        home: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let shell = parse_shell_section(raw.shell, &origin, home)?;
        let locale = parse_locale_section(raw.locale, &origin)?;

        Ok(Self {
            shell,
            locale,
            origin,
        })
    }
}
