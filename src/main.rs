//! Entry point for fish-nix-locale.
use std::{convert::Infallible, env, process::ExitCode};

use fish_nix_locale::{
    config::LauncherConfig,
    launcher::{self, RuntimeExit, ShellLocaleResolver, SystemProcessReplacer},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(never) => match never {},
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<Infallible, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let config = LauncherConfig::load_from_env_or_default().map_err(RuntimeExit::from_error)?;
    let resolver = ShellLocaleResolver::from_config(&config.locale);

    launcher::run(
        env::args_os().collect(),
        &config,
        &resolver,
        &SystemProcessReplacer,
    )
    .map_err(RuntimeExit::from_error)
}
