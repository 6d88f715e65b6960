//! Locale archive path resolution through an external setup command.
use std::{
    ffi::OsString,
    io::{self, Read},
    os::unix::{ffi::OsStringExt, process::ExitStatusExt},
    path::PathBuf,
    process::{Command, ExitStatus, Stdio},
};

use tracing::{debug, warn};

use crate::{
    config::LocaleSection,
    lib::{errors::ResolveError, telemetry::ResolveSpan},
};

/// Starting capacity of the capture buffer; a locale archive path fits comfortably.
pub const INITIAL_CAPTURE_CAPACITY: usize = 1024;

/// Resolves the value exported for the locale archive.
pub trait LocaleResolver {
    fn resolve_locale_path(&self) -> Result<OsString, ResolveError>;
}

/// Runs `<interpreter> -c <command>` and takes its standard output as the path.
#[derive(Debug, Clone)]
pub struct ShellLocaleResolver {
    interpreter: PathBuf,
    command: String,
}

impl ShellLocaleResolver {
    pub fn new(interpreter: impl Into<PathBuf>, command: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
            command: command.into(),
        }
    }

    pub fn from_config(locale: &LocaleSection) -> Self {
        Self::new(&locale.interpreter, &locale.command)
    }

    fn run_command(&self) -> Result<(Vec<u8>, ExitStatus), ResolveError> {
        let mut child = Command::new(&self.interpreter)
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ResolveError::Spawn {
                interpreter: self.interpreter.clone(),
                source,
            })?;
        debug!(
            target: "fish_nix_locale::resolver",
            pid = child.id(),
            "Spawned resolution command"
        );

        // The pipe is dropped inside `capture_output`, so `wait` cannot block on a full pipe.
        let output = match child.stdout.take() {
            Some(stdout) => capture_output(stdout).map_err(|source| ResolveError::Read { source }),
            None => Err(ResolveError::StdoutUnavailable),
        };
        let status = child.wait().map_err(|source| ResolveError::Wait { source });

        Ok((output?, status?))
    }
}

impl LocaleResolver for ShellLocaleResolver {
    fn resolve_locale_path(&self) -> Result<OsString, ResolveError> {
        let span = ResolveSpan::start(&self.interpreter);
        let (output, status) = match self.run_command() {
            Ok(result) => result,
            Err(err) => {
                span.finish("error", err.status(), 0);
                return Err(err);
            }
        };

        if let Err(err) = check_status(status) {
            span.finish("failed", err.status(), output.len());
            return Err(err);
        }
        span.finish("succeeded", Some(0), output.len());

        let path = trim_line_terminators(output);
        if path.is_empty() {
            warn!(
                target: "fish_nix_locale::resolver",
                "Resolution command succeeded but printed nothing; exporting an empty value"
            );
        }
        Ok(OsString::from_vec(path))
    }
}

/// Drain `reader` until end of stream. Interrupted reads are retried and the
/// buffer grows geometrically, so output of any length is kept byte-exact.
pub fn capture_output<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(INITIAL_CAPTURE_CAPACITY);
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}

fn check_status(status: ExitStatus) -> Result<(), ResolveError> {
    if status.success() {
        return Ok(());
    }
    match (status.code(), status.signal()) {
        (Some(code), _) => Err(ResolveError::CommandFailed { status: code }),
        (None, Some(signal)) => Err(ResolveError::Signaled { signal }),
        (None, None) => Err(ResolveError::CommandFailed {
            status: status.into_raw(),
        }),
    }
}

fn trim_line_terminators(mut bytes: Vec<u8>) -> Vec<u8> {
    while matches!(bytes.last(), Some(b'\n' | b'\r')) {
        bytes.pop();
    }
    bytes
}
