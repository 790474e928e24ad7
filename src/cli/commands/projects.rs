//! Projects command: project list with per-project issue counts.

use crate::analytics;
use crate::cli::Cli;
use crate::error::Result;
use crate::output;
use serde::Serialize;

#[derive(Serialize)]
struct ProjectRow<'a> {
    id: u32,
    name: &'a str,
    identifier: &'a str,
    issues: usize,
}

#[derive(Serialize)]
struct ProjectsReport<'a> {
    #[serde(flatten)]
    info: super::SourceInfo<'a>,
    projects: Vec<ProjectRow<'a>>,
}

/// Execute the projects command.
///
/// # Errors
///
/// Returns an error if the config store cannot be resolved or JSON
/// output fails to serialize.
pub async fn execute(cli: &Cli) -> Result<()> {
    let ctx = super::load_snapshot(cli).await?;
    let snapshot = &ctx.snapshot;

    let counts = analytics::by_project(snapshot.issues());
    let issue_count = |name: &str| {
        counts
            .iter()
            .find(|slice| slice.label == name)
            .map_or(0, |slice| slice.count)
    };

    let rows: Vec<ProjectRow> = snapshot
        .projects()
        .iter()
        .map(|project| ProjectRow {
            id: project.id,
            name: &project.name,
            identifier: &project.identifier,
            issues: issue_count(&project.name),
        })
        .collect();

    if cli.json {
        let report = ProjectsReport {
            info: super::SourceInfo::from_snapshot(snapshot),
            projects: rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print_source_line(snapshot, ctx.base_url.as_deref());
    println!("Projects:");
    for row in &rows {
        println!("  {} ({}): {} issues", row.name, row.identifier, row.issues);
    }
    Ok(())
}
