//! The launcher: login detection, locale resolution, and process replacement.
use std::{convert::Infallible, env, ffi::OsString, path::PathBuf};

use tracing::info;

use crate::{
    config::LauncherConfig,
    lib::{
        errors::{LaunchError, ResolveError},
        telemetry::{self, LaunchTelemetry},
    },
};

pub mod exec;
pub mod exit;
pub mod invocation;
pub mod resolver;

pub use exec::{ProcessReplacer, SystemProcessReplacer};
pub use exit::RuntimeExit;
pub use invocation::{is_login_name, Invocation, InvocationKind};
pub use resolver::{capture_output, LocaleResolver, ShellLocaleResolver};

/// Environment variable written before the exec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleExport {
    pub name: String,
    pub value: OsString,
}

/// Everything the final exec needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: PathBuf,
    /// Full argument vector, argument 0 included.
    pub args: Vec<OsString>,
    /// Present only for a login invocation whose resolution succeeded.
    pub export: Option<LocaleExport>,
}

impl LaunchPlan {
    /// Set the exported variable in this process, overwriting any previous value.
    pub fn apply_export(&self) {
        if let Some(export) = &self.export {
            env::set_var(&export.name, &export.value);
        }
    }
}

/// Decide argument 0 and, for a login invocation, resolve the locale archive.
///
/// The resolver is not called for a non-login invocation.
pub fn plan_launch<R>(
    args: Vec<OsString>,
    config: &LauncherConfig,
    resolver: &R,
) -> Result<LaunchPlan, ResolveError>
where
    R: LocaleResolver + ?Sized,
{
    let invocation = Invocation::from_args(args);
    info!(
        target: "fish_nix_locale::launcher",
        invocation = invocation.kind().as_str(),
        "Detected invocation kind"
    );

    let (args, export) = match invocation.kind() {
        InvocationKind::NonLogin => (invocation.into_argv(config.shell.name.as_str()), None),
        InvocationKind::Login => {
            let value = resolver.resolve_locale_path()?;
            let export = LocaleExport {
                name: config.locale.env_var.clone(),
                value,
            };
            (invocation.into_argv(config.shell.login_name()), Some(export))
        }
    };

    Ok(LaunchPlan {
        program: config.shell.path.clone(),
        args,
        export,
    })
}

/// Run the launcher. Success replaces the process, so this only ever returns an error.
pub fn run<R, X>(
    args: Vec<OsString>,
    config: &LauncherConfig,
    resolver: &R,
    replacer: &X,
) -> Result<Infallible, LaunchError>
where
    R: LocaleResolver + ?Sized,
    X: ProcessReplacer + ?Sized,
{
    let plan = plan_launch(args, config, resolver)?;

    telemetry::emit_launch(&LaunchTelemetry {
        login: plan.export.is_some(),
        program: &plan.program,
        args: &plan.args,
        exported_var: plan.export.as_ref().map(|export| export.name.as_str()),
    });

    let source = replacer.replace(&plan);
    Err(LaunchError::Exec {
        program: plan.program,
        source,
    })
}
