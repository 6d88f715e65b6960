use anyhow::Result;

use crate::common::{run, stderr, stdout, LauncherFixture, ARCHIVE_VAR, PRINT_ARCHIVE};

#[test]
fn failing_resolution_exits_nonzero_with_status() -> Result<()> {
    let fixture = LauncherFixture::new("/usr/bin/env", "env", "printf '%s' /partial; exit 3")?;

    let output = run(fixture.command("-fish").args(["printenv", ARCHIVE_VAR]))?;

    assert_eq!(output.status.code(), Some(1));
    let diagnostic = stderr(&output);
    assert!(
        diagnostic.starts_with("fish-nix-locale: "),
        "stderr: {diagnostic}"
    );
    assert!(
        diagnostic.contains("command failed with status 3"),
        "stderr: {diagnostic}"
    );
    assert_eq!(diagnostic.lines().count(), 1, "stderr: {diagnostic}");
    assert!(stdout(&output).is_empty(), "target must not run");
    Ok(())
}

#[test]
fn missing_target_reports_exec_failure() -> Result<()> {
    let fixture =
        LauncherFixture::new("/nonexistent/fish-nix-locale/fish", "fish", PRINT_ARCHIVE)?;

    let output = run(&mut fixture.command("fish"))?;

    assert_eq!(output.status.code(), Some(1));
    let diagnostic = stderr(&output);
    assert!(
        diagnostic.contains("failed to exec /nonexistent/fish-nix-locale/fish: "),
        "stderr: {diagnostic}"
    );
    assert_eq!(diagnostic.matches("os error").count(), 1, "stderr: {diagnostic}");
    assert_eq!(diagnostic.lines().count(), 1, "stderr: {diagnostic}");
    Ok(())
}

#[test]
fn invalid_config_reports_field() -> Result<()> {
    let fixture = LauncherFixture::from_toml("[shell]\npath = \"/bin/sh\"\nname = \"-sh\"\n")?;

    let output = run(&mut fixture.command("sh"))?;

    assert_eq!(output.status.code(), Some(1));
    let diagnostic = stderr(&output);
    assert!(diagnostic.contains("shell.name"), "stderr: {diagnostic}");
    Ok(())
}

#[test]
fn missing_interpreter_reports_cause_once() -> Result<()> {
    let fixture = LauncherFixture::from_toml(
        "[shell]\npath = \"/usr/bin/env\"\nname = \"env\"\n\n\
         [locale]\ninterpreter = \"/nonexistent/fish-nix-locale/sh\"\ncommand = \"true\"\n",
    )?;

    let output = run(&mut fixture.command("-fish"))?;

    assert_eq!(output.status.code(), Some(1));
    let diagnostic = stderr(&output);
    assert!(
        diagnostic.contains("via /nonexistent/fish-nix-locale/sh: "),
        "stderr: {diagnostic}"
    );
    assert_eq!(diagnostic.matches("os error").count(), 1, "stderr: {diagnostic}");
    assert!(stdout(&output).is_empty(), "target must not run");
    Ok(())
}
