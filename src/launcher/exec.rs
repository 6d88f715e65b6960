//! Replacing the current process image with the target shell.
use std::{io, os::unix::process::CommandExt, process::Command};

use tracing::debug;

use super::LaunchPlan;

/// Final step of a launch. Implementations only return on failure.
pub trait ProcessReplacer {
    fn replace(&self, plan: &LaunchPlan) -> io::Error;
}

/// Exports the plan's variable into this process, then `execv`s the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessReplacer;

impl ProcessReplacer for SystemProcessReplacer {
    fn replace(&self, plan: &LaunchPlan) -> io::Error {
        plan.apply_export();

        let mut command = Command::new(&plan.program);
        if let Some((arg0, rest)) = plan.args.split_first() {
            command.arg0(arg0).args(rest);
        }
        debug!(
            target: "fish_nix_locale::launcher",
            program = %plan.program.display(),
            "Calling exec"
        );
        command.exec()
    }
}

