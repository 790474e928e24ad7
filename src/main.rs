//! redboard CLI entry point.

use clap::Parser;
use redboard::cli::commands;
use redboard::cli::{Cli, Commands};
use redboard::logging::init_logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.quiet) {
        eprintln!("failed to initialize logging: {e}");
        // Continue without logging rather than aborting the command.
    }

    let result = match &cli.command {
        Commands::Board => commands::board::execute(&cli).await,
        Commands::Stats(args) => commands::stats::execute(args, &cli).await,
        Commands::Issues(args) => commands::issues::execute(args, &cli).await,
        Commands::Projects => commands::projects::execute(&cli).await,
        Commands::Trend => commands::trend::execute(&cli).await,
        Commands::Config(args) => commands::config::execute(&args.command, &cli),
        Commands::Completions(args) => commands::completions::execute(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
