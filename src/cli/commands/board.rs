//! Board command: the dashboard overview.

use crate::analytics::{self, Slice, Stats, TrendPoint};
use crate::cli::Cli;
use crate::error::Result;
use crate::output;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
struct BoardReport<'a> {
    #[serde(flatten)]
    info: super::SourceInfo<'a>,
    summary: Stats,
    by_status: Vec<Slice>,
    by_priority: Vec<Slice>,
    trend: Vec<TrendPoint>,
}

/// Execute the board command.
///
/// # Errors
///
/// Returns an error if the config store cannot be resolved or JSON
/// output fails to serialize.
pub async fn execute(cli: &Cli) -> Result<()> {
    let ctx = super::load_snapshot(cli).await?;
    let snapshot = &ctx.snapshot;
    let now = Utc::now();

    let summary = analytics::stats(snapshot.issues(), now);
    let by_status = analytics::by_status(snapshot.issues());
    let by_priority = analytics::by_priority(snapshot.issues());
    let trend = analytics::trend(snapshot.issues(), now.date_naive());

    if cli.json {
        let report = BoardReport {
            info: super::SourceInfo::from_snapshot(snapshot),
            summary,
            by_status,
            by_priority,
            trend,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print_source_line(snapshot, ctx.base_url.as_deref());
    output::print_stats(&summary);
    output::print_slices("status", &by_status);
    output::print_slices("priority", &by_priority);
    println!();
    output::print_trend(&trend);
    Ok(())
}
