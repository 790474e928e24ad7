//! Stats command: summary metrics plus optional breakdowns.

use crate::analytics::{self, AssigneeLoad, Slice, Stats};
use crate::cli::{Cli, StatsArgs};
use crate::error::Result;
use crate::output;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    info: super::SourceInfo<'a>,
    summary: Stats,
    #[serde(skip_serializing_if = "Option::is_none")]
    by_status: Option<Vec<Slice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    by_priority: Option<Vec<Slice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    by_project: Option<Vec<Slice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    by_tracker: Option<Vec<Slice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    by_assignee: Option<Vec<AssigneeLoad>>,
}

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if the config store cannot be resolved or JSON
/// output fails to serialize.
pub async fn execute(args: &StatsArgs, cli: &Cli) -> Result<()> {
    let ctx = super::load_snapshot(cli).await?;
    let snapshot = &ctx.snapshot;
    let issues = snapshot.issues();

    let summary = analytics::stats(issues, Utc::now());
    let by_status = (args.by_status || args.all).then(|| analytics::by_status(issues));
    let by_priority = (args.by_priority || args.all).then(|| analytics::by_priority(issues));
    let by_project = (args.by_project || args.all).then(|| analytics::by_project(issues));
    let by_tracker = (args.by_tracker || args.all).then(|| analytics::by_tracker(issues));
    let by_assignee = (args.by_assignee || args.all).then(|| analytics::by_assignee(issues));

    if cli.json {
        let report = StatsReport {
            info: super::SourceInfo::from_snapshot(snapshot),
            summary,
            by_status,
            by_priority,
            by_project,
            by_tracker,
            by_assignee,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print_source_line(snapshot, ctx.base_url.as_deref());
    output::print_stats(&summary);
    if let Some(slices) = &by_status {
        output::print_slices("status", slices);
    }
    if let Some(slices) = &by_priority {
        output::print_slices("priority", slices);
    }
    if let Some(slices) = &by_project {
        output::print_slices("project", slices);
    }
    if let Some(slices) = &by_tracker {
        output::print_slices("tracker", slices);
    }
    if let Some(loads) = &by_assignee {
        output::print_assignees(loads);
    }
    Ok(())
}
