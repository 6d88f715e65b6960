use anyhow::Result;

use crate::common::{run, stderr, stdout, LauncherFixture};

/// Fails loudly if the launcher ever runs it.
const MUST_NOT_RUN: &str = "exit 7";

#[test]
fn non_login_leaves_environment_untouched() -> Result<()> {
    let fixture = LauncherFixture::new("/usr/bin/env", "env", MUST_NOT_RUN)?;

    let output = run(fixture.command("fish").args([
        "sh",
        "-c",
        "printf '%s' \"${LOCALE_ARCHIVE_2_27-unset}\"",
    ]))?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "unset");
    Ok(())
}

#[test]
fn non_login_rewrites_arg0_to_shell_name() -> Result<()> {
    let fixture = LauncherFixture::new("/bin/sh", "sh", MUST_NOT_RUN)?;

    let output = run(fixture
        .command("/some/other/name")
        .args(["-c", "printf '%s' \"$0\""]))?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "sh");
    Ok(())
}

#[test]
fn non_login_forwards_arguments_unchanged() -> Result<()> {
    let fixture = LauncherFixture::new("/bin/sh", "sh", MUST_NOT_RUN)?;

    let output = run(fixture.command("fish").args([
        "-c",
        "printf '%s|' \"$@\"",
        "zero",
        "one",
        "two words",
        "-",
    ]))?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "one|two words|-|");
    Ok(())
}
