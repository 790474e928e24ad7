//! Core data types for `redboard`.
//!
//! This module defines the Redmine wire types the dashboard works with:
//! - `Issue` - a tracked work item as returned by `/issues.json`
//! - `Project` - a project record from `/projects.json`
//! - `NamedRef` / `IssueStatus` - the nested id+name references
//! - `DataSet` - one consistent issues+projects snapshot payload
//!
//! Issues are immutable once fetched: a refresh replaces the whole
//! sequence, nothing is ever mutated in place.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Bucket label used when an issue has no assignee.
pub const UNASSIGNED: &str = "Unassigned";

/// An id+name reference as Redmine nests them (project, tracker,
/// priority, users).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: u32,
    pub name: String,
}

impl NamedRef {
    #[must_use]
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// Issue status reference. Older Redmine servers omit `is_closed` from
/// the issue payload; absent means open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueStatus {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub is_closed: bool,
}

/// The primary issue entity, wire-faithful to `/issues.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique positive id.
    pub id: u32,

    pub project: NamedRef,
    pub tracker: NamedRef,
    pub status: IssueStatus,
    pub priority: NamedRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<NamedRef>,

    /// Assigned user, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<NamedRef>,

    pub subject: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Due date (calendar date, no time portion).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Completion percentage (0-100).
    #[serde(default)]
    pub done_ratio: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent_hours: Option<f32>,

    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,

    /// Closure timestamp. Present iff the issue reached a closed status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_on: Option<DateTime<Utc>>,
}

impl Issue {
    /// Whether the issue sits in a closed status.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.status.is_closed
    }

    /// Assignee display name, or the `Unassigned` bucket label.
    #[must_use]
    pub fn assignee_name(&self) -> &str {
        self.assigned_to.as_ref().map_or(UNASSIGNED, |u| u.name.as_str())
    }

    /// Overdue: open, with a due date whose UTC midnight lies strictly
    /// before `now`. An issue due today counts once the day has started;
    /// one due tomorrow never does.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        if self.status.is_closed {
            return false;
        }
        self.due_date
            .is_some_and(|due| due.and_time(NaiveTime::MIN).and_utc() < now)
    }
}

/// A project record, wire-faithful to `/projects.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One consistent issues+projects payload. Both sequences always come
/// from the same refresh cycle (or the same demo generation) - the sync
/// layer never publishes one updated and the other stale.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DataSet {
    pub issues: Vec<Issue>,
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn wire_issue_json() -> &'static str {
        r#"{
            "id": 4321,
            "project": {"id": 1, "name": "Web Platform"},
            "tracker": {"id": 1, "name": "Bug"},
            "status": {"id": 2, "name": "In Progress", "is_closed": false},
            "priority": {"id": 3, "name": "High"},
            "author": {"id": 5, "name": "Edward Norton"},
            "assigned_to": {"id": 1, "name": "Alice Johnson"},
            "subject": "Fix session management bug",
            "description": "Sessions expire too early.",
            "start_date": "2026-07-01",
            "due_date": "2026-08-15",
            "done_ratio": 40,
            "estimated_hours": 8.0,
            "custom_fields": [{"id": 1, "name": "Severity", "value": "major"}],
            "created_on": "2026-07-01T08:30:00Z",
            "updated_on": "2026-08-01T16:45:00Z"
        }"#
    }

    #[test]
    fn issue_deserializes_from_wire_json() {
        let issue: Issue = serde_json::from_str(wire_issue_json()).unwrap();
        assert_eq!(issue.id, 4321);
        assert_eq!(issue.project.name, "Web Platform");
        assert_eq!(issue.status.name, "In Progress");
        assert!(!issue.status.is_closed);
        assert_eq!(issue.priority.id, 3);
        assert_eq!(issue.assignee_name(), "Alice Johnson");
        assert_eq!(issue.due_date, NaiveDate::from_ymd_opt(2026, 8, 15));
        assert!(issue.closed_on.is_none());
        // unknown fields (custom_fields) are ignored
    }

    #[test]
    fn status_is_closed_defaults_to_open() {
        let status: IssueStatus =
            serde_json::from_str(r#"{"id": 1, "name": "New"}"#).unwrap();
        assert!(!status.is_closed);
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let mut issue: Issue = serde_json::from_str(wire_issue_json()).unwrap();
        issue.assigned_to = None;
        issue.due_date = None;
        let json = serde_json::to_string(&issue).unwrap();
        assert!(!json.contains("assigned_to"));
        assert!(!json.contains("due_date"));
        assert!(json.contains("\"subject\":\"Fix session management bug\""));
    }

    #[test]
    fn unassigned_bucket_label() {
        let mut issue: Issue = serde_json::from_str(wire_issue_json()).unwrap();
        issue.assigned_to = None;
        assert_eq!(issue.assignee_name(), UNASSIGNED);
    }

    #[test]
    fn overdue_compares_due_midnight_against_now() {
        let mut issue: Issue = serde_json::from_str(wire_issue_json()).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 8, 10, 12, 0, 0).unwrap();

        issue.due_date = NaiveDate::from_ymd_opt(2026, 8, 9);
        assert!(issue.is_overdue(now), "due yesterday is overdue");

        issue.due_date = NaiveDate::from_ymd_opt(2026, 8, 10);
        assert!(issue.is_overdue(now), "due today counts once the day started");

        issue.due_date = NaiveDate::from_ymd_opt(2026, 8, 11);
        assert!(!issue.is_overdue(now), "due tomorrow is not overdue");

        issue.due_date = None;
        assert!(!issue.is_overdue(now), "no due date is never overdue");

        issue.due_date = NaiveDate::from_ymd_opt(2026, 8, 1);
        issue.status.is_closed = true;
        assert!(!issue.is_overdue(now), "closed issues are never overdue");
    }
}
