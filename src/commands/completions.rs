//! Completions command handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io;

/// Handle `tinct completions`.
pub fn handle<C: CommandFactory>(shell: Option<CompletionShell>) -> Result<()> {
    let Some(shell) = shell else {
        eprintln!("Usage: tinct completions --shell <bash|zsh|fish|powershell>");
        std::process::exit(1);
    };

    let mut cmd = C::command();
    generate(shell, &mut cmd, "tinct", &mut io::stdout());
    Ok(())
}
