//! Shell completions command implementation.

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;
use clap::CommandFactory;
use clap_complete::generate;
use std::io;

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Infallible in practice; the signature matches the other commands.
pub fn execute(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "rb", &mut io::stdout());
    Ok(())
}
