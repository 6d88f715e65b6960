//! Log events emitted while locating and loading configuration.
use tracing::{debug, info};

use super::{ConfigLocation, LauncherConfig, CONFIG_ENV_KEY};

pub fn log_location(location: Option<&ConfigLocation>) {
    match location {
        Some(location) if location.required => info!(
            target: "fish_nix_locale::config",
            path = %location.path.display(),
            "Loading configuration using FISH_NIX_LOCALE_CONFIG environment variable"
        ),
        Some(location) => debug!(
            target: "fish_nix_locale::config",
            path = %location.path.display(),
            env = CONFIG_ENV_KEY,
            "FISH_NIX_LOCALE_CONFIG not set; using optional default location"
        ),
        None => debug!(
            target: "fish_nix_locale::config",
            "Neither HOME nor XDG_CONFIG_HOME is set; using built-in defaults"
        ),
    }
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "fish_nix_locale::config",
        origin = %config.origin,
        shell_path = %config.shell.path.display(),
        shell_name = %config.shell.name,
        env_var = %config.locale.env_var,
        interpreter = %config.locale.interpreter.display(),
        "Configuration loaded successfully"
    );
}
