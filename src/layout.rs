use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Where things live inside an install, relative to the install root
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Interpreter whose presence means the install has been configured
    pub interpreter: PathBuf,
    pub configure_script: PathBuf,
    /// Passed to the configure script as its only argument
    pub config_dir: OsString,
    pub target: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        os_specific::layout()
    }
}

impl Layout {
    #[must_use]
    pub fn interpreter_path(&self, root: &Path) -> PathBuf {
        root.join(&self.interpreter)
    }

    #[must_use]
    pub fn configure_script_path(&self, root: &Path) -> PathBuf {
        root.join(&self.configure_script)
    }

    #[must_use]
    pub fn target_path(&self, root: &Path) -> PathBuf {
        root.join(&self.target)
    }
}

const CONFIG_DIR: &str = "etc/conf";

#[cfg(not(windows))]
mod os_specific {
    use super::{CONFIG_DIR, Layout};
    use std::{ffi::OsString, path::PathBuf};

    pub fn layout() -> Layout {
        Layout {
            interpreter: PathBuf::from("bin/python"),
            configure_script: PathBuf::from("configure"),
            config_dir: OsString::from(CONFIG_DIR),
            target: PathBuf::from("bin/scancode"),
        }
    }
}

#[cfg(windows)]
mod os_specific {
    use super::{CONFIG_DIR, Layout};
    use std::{ffi::OsString, path::PathBuf};

    // `CONFIG_DIR` keeps its forward slash here too.
    pub fn layout() -> Layout {
        Layout {
            interpreter: PathBuf::from(r"bin\python.exe"),
            configure_script: PathBuf::from("configure.bat"),
            config_dir: OsString::from(CONFIG_DIR),
            target: PathBuf::from(r"bin\scancode.exe"),
        }
    }
}
