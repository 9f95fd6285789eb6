use anyhow::{Context, Result, bail};
use log::debug;
use std::{
    env::current_exe,
    ffi::{OsStr, OsString},
    path::{PathBuf, absolute},
};

mod command;
pub use command::{
    ProcessRunner, SystemRunner, build_configure_command, build_target_command, exit_code,
};

mod layout;
pub use layout::Layout;

mod util;
use util::write_status;

/// Set to `1` for the configure script so that it runs quietly
pub const CONFIGURE_QUIET: &str = "CONFIGURE_QUIET";

/// Set for both children to the directory containing the launcher
pub const SCANCODE_ROOT_DIR: &str = "SCANCODE_ROOT_DIR";

pub const STATUS_LINE: &str = "* Configuring ScanCode for first use...";

/// Directory containing the running launcher
pub fn resolve_root() -> Result<PathBuf> {
    let exe = current_exe().context("failed to locate launcher executable")?;
    let exe = absolute(&exe)
        .with_context(|| format!("failed to make `{}` absolute", exe.display()))?;
    let Some(root) = exe.parent() else {
        bail!("launcher executable `{}` has no parent", exe.display());
    };
    Ok(root.to_path_buf())
}

/// Arguments to forward to the target, in order and unmodified
///
/// `argv` should not include the program name.
pub fn collect_args<I, S>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    argv.into_iter().map(|arg| arg.as_ref().to_owned()).collect()
}

pub struct Launcher<R> {
    root: PathBuf,
    layout: Layout,
    runner: R,
}

impl<R: ProcessRunner> Launcher<R> {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            root: root.into(),
            layout: Layout::default(),
            runner,
        }
    }

    /// Use `layout` in place of the platform default
    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Configure the install if needed, then run the target with `args`
    ///
    /// Returns the exit code of the last child run. The target is not run if configuring fails.
    pub fn run<T: AsRef<OsStr>>(&mut self, args: &[T]) -> Result<i32> {
        if self.is_configured() {
            debug!("already configured: {}", self.root.display());
        } else {
            let code = self.configure()?;
            if code != 0 {
                debug!("configure failed with exit code {code}");
                return Ok(code);
            }
        }
        self.invoke_target(args)
    }

    /// Whether the interpreter exists
    ///
    /// Anything other than a successful existence check counts as not configured, including
    /// permission errors.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        let path = self.layout.interpreter_path(&self.root);
        match path.try_exists() {
            Ok(exists) => exists,
            Err(error) => {
                debug!("failed to check `{}`: {error}", path.display());
                false
            }
        }
    }

    /// Print the status line, then run the configure script
    ///
    /// Failing to print the status line does not stop the configure script from running.
    pub fn configure(&mut self) -> Result<i32> {
        if let Err(error) = write_status(STATUS_LINE) {
            debug!("failed to write status line: {error}");
        }
        let command = build_configure_command(&self.root, &self.layout);
        debug!("configure: {command:?}");
        self.runner.run(command)
    }

    pub fn invoke_target<T: AsRef<OsStr>>(&mut self, args: &[T]) -> Result<i32> {
        let command = build_target_command(&self.root, &self.layout, args);
        debug!("target: {command:?}");
        self.runner.run(command)
    }
}
