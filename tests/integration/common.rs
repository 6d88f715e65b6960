use std::{
    fs,
    os::unix::process::CommandExt,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Result};
use serde::Serialize;
use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_fish-nix-locale");
pub const ARCHIVE_VAR: &str = "LOCALE_ARCHIVE_2_27";
pub const ARCHIVE: &str = "/nix/store/abc/lib/locale/locale-archive";
pub const PRINT_ARCHIVE: &str = "printf '%s' /nix/store/abc/lib/locale/locale-archive";

#[derive(Serialize)]
struct ConfigDocument<'a> {
    shell: ShellTable<'a>,
    locale: LocaleTable<'a>,
}

#[derive(Serialize)]
struct ShellTable<'a> {
    path: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct LocaleTable<'a> {
    env_var: &'a str,
    command: &'a str,
}

/// A temporary HOME holding a launcher config file.
pub struct LauncherFixture {
    home: TempDir,
    config_path: PathBuf,
}

impl LauncherFixture {
    pub fn new(shell_path: &str, shell_name: &str, command: &str) -> Result<Self> {
        let document = ConfigDocument {
            shell: ShellTable {
                path: shell_path,
                name: shell_name,
            },
            locale: LocaleTable {
                env_var: ARCHIVE_VAR,
                command,
            },
        };
        let raw = toml::to_string(&document).context("failed to serialize test config")?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let home = tempfile::tempdir().context("failed to create temporary HOME")?;
        let config_path = home.path().join("launcher.toml");
        fs::write(&config_path, raw).context("failed to write test config")?;
        Ok(Self { home, config_path })
    }

    /// Launcher command whose argument 0 is `arg0`.
    pub fn command(&self, arg0: &str) -> Command {
        let mut command = Command::new(BINARY_PATH);
        command
            .arg0(arg0)
            .env("HOME", self.home.path())
            .env("FISH_NIX_LOCALE_CONFIG", &self.config_path)
            .env_remove("FISH_NIX_LOCALE_LOG")
            .env_remove(ARCHIVE_VAR)
            .stdin(Stdio::null());
        command
    }
}

pub fn run(command: &mut Command) -> Result<Output> {
    command.output().context("failed to run launcher binary")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
