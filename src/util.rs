use anstyle::Style;
use std::io::{self, IsTerminal, Write};

/// Print `message` on its own line, bold if stdout is a terminal
pub fn write_status(message: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    let style = if stdout.is_terminal() {
        Style::new().bold()
    } else {
        Style::new()
    };
    writeln!(
        stdout,
        "{}{message}{}",
        style.render(),
        style.render_reset()
    )?;
    stdout.flush()
}
