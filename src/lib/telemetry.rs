//! Telemetry initialization and launch span helpers.

use std::{ffi::OsString, path::Path, time::Instant};

use anyhow::Result;
use tracing::{debug, info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_FILTER_ENV: &str = "FISH_NIX_LOCALE_LOG";
/// This binary runs on every login, so only problems are shown by default.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs to stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper recording start and finish of the locale resolution command.
pub struct ResolveSpan {
    span: Span,
    started_at: Instant,
}

impl ResolveSpan {
    /// Start a resolution span.
    pub fn start(interpreter: &Path) -> Self {
        let span = info_span!(
            target: "fish_nix_locale::resolver",
            "resolve_locale_archive",
            interpreter = %interpreter.display()
        );
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Close the span while recording status and output size.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>, output_bytes: usize) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "fish_nix_locale::resolver",
            status = status,
            exit_code = exit_code,
            output_bytes = output_bytes,
            elapsed_ms = elapsed_ms,
            "Completed locale archive resolution"
        );
    }
}

/// Payload for logging the launch decision as structured telemetry.
#[derive(Debug)]
pub struct LaunchTelemetry<'a> {
    pub login: bool,
    pub program: &'a Path,
    pub args: &'a [OsString],
    pub exported_var: Option<&'a str>,
}

/// Emit the launch decision to `tracing` right before the exec attempt.
pub fn emit_launch(telemetry: &LaunchTelemetry<'_>) {
    info!(
        target: "fish_nix_locale::launcher",
        login = telemetry.login,
        program = %telemetry.program.display(),
        argc = telemetry.args.len(),
        exported_var = telemetry.exported_var.unwrap_or(""),
        "Replacing process with target shell"
    );
    debug!(
        target: "fish_nix_locale::launcher",
        args = ?telemetry.args,
        "Forwarded arguments"
    );
}
