use anyhow::Result;
use scancode_launcher::{Launcher, SystemRunner, collect_args, resolve_root};
use std::{env::args_os, process::exit};

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or_default();

    let args = collect_args(args_os().skip(1));
    let root = resolve_root()?;

    let code = Launcher::new(root, SystemRunner).run(&args)?;
    exit(code);
}
