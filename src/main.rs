use std::io;

use anyhow::Result;
use tracing::info;

use slidewise_shell::Shell;

fn main() -> Result<()> {
    // stdout carries the shell protocol; logs go to stderr.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("slidewise starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Shell::new().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
