//! Logging initialization.
//!
//! Tracing goes to stderr so JSON output on stdout stays clean.
//! `RUST_LOG` overrides the CLI verbosity flags.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber from CLI verbosity.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("redboard={default_level},rb={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to set tracing subscriber: {err}"))?;

    Ok(())
}
