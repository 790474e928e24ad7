//! Issues command: the filterable/sortable/groupable list.

use crate::cli::{Cli, GroupField, IssuesArgs, SortField};
use crate::error::Result;
use crate::list::{self, GroupKey, IssueFilter, SortKey, StatusFilter};
use crate::model::Issue;
use crate::output;
use serde::Serialize;

#[derive(Serialize)]
struct IssueGroup<'a> {
    label: &'a str,
    issues: &'a [&'a Issue],
}

#[derive(Serialize)]
struct IssuesReport<'a> {
    #[serde(flatten)]
    info: super::SourceInfo<'a>,
    count: usize,
    groups: Vec<IssueGroup<'a>>,
}

const fn sort_key(field: SortField) -> SortKey {
    match field {
        SortField::Updated => SortKey::Updated,
        SortField::Created => SortKey::Created,
        SortField::Priority => SortKey::Priority,
        SortField::Due => SortKey::Due,
    }
}

const fn group_key(field: GroupField) -> GroupKey {
    match field {
        GroupField::None => GroupKey::None,
        GroupField::Status => GroupKey::Status,
        GroupField::Priority => GroupKey::Priority,
        GroupField::Project => GroupKey::Project,
        GroupField::Assignee => GroupKey::Assignee,
        GroupField::Tracker => GroupKey::Tracker,
    }
}

/// Execute the issues command.
///
/// # Errors
///
/// Returns an error if the config store cannot be resolved or JSON
/// output fails to serialize.
pub async fn execute(args: &IssuesArgs, cli: &Cli) -> Result<()> {
    let ctx = super::load_snapshot(cli).await?;
    let snapshot = &ctx.snapshot;

    let filter = IssueFilter {
        search: args.search.clone(),
        project: args.project.clone(),
        status: StatusFilter::parse(&args.status),
        priority: args.priority.clone(),
    };

    let mut refs = list::filter_issues(snapshot.issues(), &filter);
    list::sort_issues(&mut refs, sort_key(args.sort));
    if let Some(limit) = args.limit {
        refs.truncate(limit);
    }
    let groups = list::group_issues(&refs, group_key(args.group_by));

    if cli.json {
        let report = IssuesReport {
            info: super::SourceInfo::from_snapshot(snapshot),
            count: refs.len(),
            groups: groups
                .iter()
                .map(|(label, members)| IssueGroup {
                    label: label.as_str(),
                    issues: members.as_slice(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print_source_line(snapshot, ctx.base_url.as_deref());
    if refs.is_empty() {
        println!("No issues match the given filters.");
        return Ok(());
    }
    for (label, members) in &groups {
        println!("{label} ({}):", members.len());
        for issue in members {
            output::print_issue_line(issue);
        }
        println!();
    }
    Ok(())
}
