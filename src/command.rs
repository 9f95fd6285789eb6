use super::{CONFIGURE_QUIET, Layout, SCANCODE_ROOT_DIR};
use anyhow::{Context, Result};
use std::{
    ffi::OsStr,
    path::Path,
    process::{Command, ExitStatus},
};

/// Runs a child process to completion and reports its exit code
pub trait ProcessRunner {
    fn run(&mut self, command: Command) -> Result<i32>;
}

/// Runs commands with [`Command::status`], inheriting stdin, stdout, and stderr
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&mut self, mut command: Command) -> Result<i32> {
        let status = command
            .status()
            .with_context(|| format!("failed to run command: {command:?}"))?;
        Ok(exit_code(status))
    }
}

/// Exit code the launcher should report for a finished child
///
/// A child killed by a signal is reported as `128 + signal`, as a shell would.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

pub fn build_configure_command(root: &Path, layout: &Layout) -> Command {
    let mut command = Command::new(layout.configure_script_path(root));
    command.arg(&layout.config_dir);
    command.env(CONFIGURE_QUIET, "1");
    command.env(SCANCODE_ROOT_DIR, root);
    // The configure directory is relative to the install, not to the caller's directory.
    command.current_dir(root);
    command
}

pub fn build_target_command<T: AsRef<OsStr>>(
    root: &Path,
    layout: &Layout,
    args: &[T],
) -> Command {
    let mut command = Command::new(layout.target_path(root));
    command.args(args);
    command.env(SCANCODE_ROOT_DIR, root);
    command
}
