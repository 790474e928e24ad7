//! Trend command: the 30-day created/closed/open series.

use crate::analytics::{self, TrendPoint};
use crate::cli::Cli;
use crate::error::Result;
use crate::output;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
struct TrendReport<'a> {
    #[serde(flatten)]
    info: super::SourceInfo<'a>,
    trend: Vec<TrendPoint>,
}

/// Execute the trend command.
///
/// # Errors
///
/// Returns an error if the config store cannot be resolved or JSON
/// output fails to serialize.
pub async fn execute(cli: &Cli) -> Result<()> {
    let ctx = super::load_snapshot(cli).await?;
    let snapshot = &ctx.snapshot;
    let points = analytics::trend(snapshot.issues(), Utc::now().date_naive());

    if cli.json {
        let report = TrendReport {
            info: super::SourceInfo::from_snapshot(snapshot),
            trend: points,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print_source_line(snapshot, ctx.base_url.as_deref());
    output::print_trend(&points);
    Ok(())
}
