//! Shared test fixtures.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use redboard::model::{Issue, IssueStatus, NamedRef};

/// Fixed "now" so time-dependent assertions stay deterministic.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
}

/// A plain open issue with sensible defaults; tests mutate the fields
/// they care about.
pub fn make_issue(id: u32) -> Issue {
    Issue {
        id,
        project: NamedRef::new(1, "Web Platform"),
        tracker: NamedRef::new(1, "Bug"),
        status: IssueStatus {
            id: 1,
            name: "New".to_string(),
            is_closed: false,
        },
        priority: NamedRef::new(2, "Normal"),
        author: None,
        assigned_to: Some(NamedRef::new(1, "Alice Johnson")),
        subject: format!("Issue {id}"),
        description: None,
        start_date: None,
        due_date: None,
        done_ratio: 0,
        estimated_hours: None,
        spent_hours: None,
        created_on: fixed_now() - Duration::days(10),
        updated_on: fixed_now() - Duration::days(1),
        closed_on: None,
    }
}

/// Flip an issue into a closed status with the given closure time.
pub fn close(issue: &mut Issue, closed_on: DateTime<Utc>) {
    issue.status = IssueStatus {
        id: 5,
        name: "Closed".to_string(),
        is_closed: true,
    };
    issue.done_ratio = 100;
    issue.closed_on = Some(closed_on);
}
