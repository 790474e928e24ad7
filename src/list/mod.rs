//! Issue list transforms: filter, sort, group.
//!
//! Synchronous, pure helpers behind the `rb issues` view. They operate
//! on borrowed issues and never touch the underlying store.

use crate::model::Issue;

/// Status dimension of the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Closed,
    /// Match one status label exactly (case-insensitive).
    Name(String),
}

impl StatusFilter {
    /// Parse the CLI form: `all`, `open`, `closed`, or a status name.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "all" => Self::All,
            "open" => Self::Open,
            "closed" => Self::Closed,
            _ => Self::Name(raw.to_string()),
        }
    }
}

/// Sort order for the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recently updated first.
    #[default]
    Updated,
    /// Most recently created first.
    Created,
    /// Highest priority id first.
    Priority,
    /// Earliest due date first; issues without one sink to the end.
    Due,
}

/// Grouping dimension for the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupKey {
    #[default]
    None,
    Status,
    Priority,
    Project,
    Assignee,
    Tracker,
}

/// Combined filter over the issue sequence.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    /// Case-insensitive match against subject, id, project, assignee.
    pub search: Option<String>,
    /// Project name or numeric id.
    pub project: Option<String>,
    pub status: StatusFilter,
    /// Priority label (case-insensitive).
    pub priority: Option<String>,
}

impl IssueFilter {
    fn matches(&self, issue: &Issue) -> bool {
        if let Some(query) = &self.search {
            let query = query.to_lowercase();
            let hit = issue.subject.to_lowercase().contains(&query)
                || issue.id.to_string().contains(&query)
                || issue.project.name.to_lowercase().contains(&query)
                || issue
                    .assigned_to
                    .as_ref()
                    .is_some_and(|u| u.name.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }

        if let Some(project) = &self.project {
            let by_id = issue.project.id.to_string() == *project;
            let by_name = issue.project.name.eq_ignore_ascii_case(project);
            if !(by_id || by_name) {
                return false;
            }
        }

        match &self.status {
            StatusFilter::All => {}
            StatusFilter::Open => {
                if issue.status.is_closed {
                    return false;
                }
            }
            StatusFilter::Closed => {
                if !issue.status.is_closed {
                    return false;
                }
            }
            StatusFilter::Name(name) => {
                if !issue.status.name.eq_ignore_ascii_case(name) {
                    return false;
                }
            }
        }

        if let Some(priority) = &self.priority {
            if !issue.priority.name.eq_ignore_ascii_case(priority) {
                return false;
            }
        }

        true
    }
}

/// Apply the filter, preserving input order.
#[must_use]
pub fn filter_issues<'a>(issues: &'a [Issue], filter: &IssueFilter) -> Vec<&'a Issue> {
    issues.iter().filter(|i| filter.matches(i)).collect()
}

/// Sort the filtered list in place.
pub fn sort_issues(issues: &mut [&Issue], key: SortKey) {
    match key {
        SortKey::Updated => issues.sort_by(|a, b| b.updated_on.cmp(&a.updated_on)),
        SortKey::Created => issues.sort_by(|a, b| b.created_on.cmp(&a.created_on)),
        SortKey::Priority => issues.sort_by(|a, b| b.priority.id.cmp(&a.priority.id)),
        SortKey::Due => issues.sort_by(|a, b| match (a.due_date, b.due_date) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }),
    }
}

/// Group the (already filtered and sorted) list, groups in first-seen
/// order. `GroupKey::None` yields a single `All Issues` group.
#[must_use]
pub fn group_issues<'a>(issues: &[&'a Issue], key: GroupKey) -> Vec<(String, Vec<&'a Issue>)> {
    if key == GroupKey::None {
        return vec![("All Issues".to_string(), issues.to_vec())];
    }

    let mut groups: Vec<(String, Vec<&Issue>)> = Vec::new();
    for &issue in issues {
        let label = match key {
            GroupKey::Status => issue.status.name.as_str(),
            GroupKey::Priority => issue.priority.name.as_str(),
            GroupKey::Project => issue.project.name.as_str(),
            GroupKey::Assignee => issue.assignee_name(),
            GroupKey::Tracker => issue.tracker.name.as_str(),
            GroupKey::None => unreachable!("handled above"),
        };
        match groups.iter().position(|(seen, _)| seen == label) {
            Some(index) => groups[index].1.push(issue),
            None => groups.push((label.to_string(), vec![issue])),
        }
    }
    groups
}
