//! Demo data generator.
//!
//! Produces the synthetic issue set the dashboard runs on when no
//! usable connection is configured. Fields are randomized but
//! internally consistent: a closed issue always carries `done_ratio`
//! 100 and a closure timestamp strictly between creation and now, and
//! due dates straddle "now" so the overdue path gets exercised.

use crate::model::{DataSet, Issue, IssueStatus, NamedRef, Project};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Number of issues the generator produces.
pub const ISSUE_COUNT: usize = 75;

const STATUSES: [(u32, &str, bool); 6] = [
    (1, "New", false),
    (2, "In Progress", false),
    (3, "Resolved", false),
    (4, "Feedback", false),
    (5, "Closed", true),
    (6, "Rejected", true),
];

const TRACKERS: [(u32, &str); 4] = [(1, "Bug"), (2, "Feature"), (3, "Support"), (4, "Task")];

const PRIORITIES: [(u32, &str); 5] = [
    (1, "Low"),
    (2, "Normal"),
    (3, "High"),
    (4, "Urgent"),
    (5, "Immediate"),
];

const USERS: [(u32, &str); 6] = [
    (1, "Alice Johnson"),
    (2, "Bob Smith"),
    (3, "Charlie Brown"),
    (4, "Diana Prince"),
    (5, "Edward Norton"),
    (6, "Fiona Apple"),
];

const PROJECTS: [(u32, &str, &str, &str); 5] = [
    (1, "Web Platform", "web-platform", "Main web application platform"),
    (2, "Mobile App", "mobile-app", "iOS and Android mobile applications"),
    (3, "API Services", "api-services", "Backend API microservices"),
    (4, "Infrastructure", "infrastructure", "DevOps and cloud infrastructure"),
    (5, "Design System", "design-system", "UI component library and design tokens"),
];

const SUBJECTS: [&str; 30] = [
    "Fix authentication timeout issue",
    "Implement dark mode support",
    "Add export to CSV functionality",
    "Performance optimization for dashboard",
    "Update user profile page design",
    "Fix mobile responsive layout",
    "Add batch operations support",
    "Implement real-time notifications",
    "Database query optimization",
    "Add multi-language support",
    "Fix file upload validation",
    "Improve search functionality",
    "Add two-factor authentication",
    "Update API documentation",
    "Fix session management bug",
    "Implement caching layer",
    "Add audit logging",
    "Fix timezone handling",
    "Implement rate limiting",
    "Add analytics dashboard",
    "Fix memory leak in worker",
    "Update payment integration",
    "Add webhook support",
    "Fix email template rendering",
    "Implement SSO integration",
    "Add role-based permissions",
    "Fix image compression",
    "Update CI/CD pipeline",
    "Add health check endpoints",
    "Fix data migration script",
];

/// The fixed demo project list.
#[must_use]
pub fn projects() -> Vec<Project> {
    PROJECTS
        .iter()
        .map(|&(id, name, identifier, description)| Project {
            id,
            name: name.to_string(),
            identifier: identifier.to_string(),
            description: Some(description.to_string()),
        })
        .collect()
}

/// Generate the demo issue sequence, sorted descending by update time.
#[must_use]
pub fn issues(now: DateTime<Utc>) -> Vec<Issue> {
    let mut rng = rand::rng();
    let mut out: Vec<Issue> = (1..=ISSUE_COUNT as u32)
        .map(|n| generate_issue(&mut rng, n, now))
        .collect();
    out.sort_by(|a, b| b.updated_on.cmp(&a.updated_on));
    out
}

/// One consistent demo payload (issues + projects).
#[must_use]
pub fn dataset(now: DateTime<Utc>) -> DataSet {
    DataSet {
        issues: issues(now),
        projects: projects(),
    }
}

fn generate_issue<R: Rng>(rng: &mut R, n: u32, now: DateTime<Utc>) -> Issue {
    let (status_id, status_name, is_closed) = STATUSES[rng.random_range(0..STATUSES.len())];
    let (tracker_id, tracker_name) = TRACKERS[rng.random_range(0..TRACKERS.len())];
    let (priority_id, priority_name) = PRIORITIES[rng.random_range(0..PRIORITIES.len())];
    let (project_id, project_name, _, _) = PROJECTS[rng.random_range(0..PROJECTS.len())];
    let (author_id, author_name) = USERS[rng.random_range(0..USERS.len())];

    let created_days = rng.random_range(1..=90i64);
    let created_on = now - Duration::days(created_days);

    // Closure lands on a later day than creation and at least a minute
    // before now, so closed_on is always inside (created_on, now).
    let closed_on = is_closed.then(|| {
        let days_back = rng.random_range(0..created_days);
        now - Duration::days(days_back) - Duration::minutes(rng.random_range(1..=600))
    });

    let updated_on = now - Duration::days(rng.random_range(0..=created_days));

    let assigned_to = rng.random_bool(0.8).then(|| {
        let (id, name) = USERS[rng.random_range(0..USERS.len())];
        NamedRef::new(id, name)
    });

    let due_date = rng
        .random_bool(0.8)
        .then(|| (now + Duration::days(rng.random_range(-10..=30))).date_naive());

    let start_date = rng
        .random_bool(0.7)
        .then(|| (now - Duration::days(rng.random_range(0..=created_days))).date_naive());

    let done_ratio = if is_closed {
        100
    } else {
        rng.random_range(0..=9u8) * 10
    };

    let subject = format!("{} #{n}", SUBJECTS[rng.random_range(0..SUBJECTS.len())]);

    Issue {
        id: 1000 + n,
        project: NamedRef::new(project_id, project_name),
        tracker: NamedRef::new(tracker_id, tracker_name),
        status: IssueStatus {
            id: status_id,
            name: status_name.to_string(),
            is_closed,
        },
        priority: NamedRef::new(priority_id, priority_name),
        author: Some(NamedRef::new(author_id, author_name)),
        assigned_to,
        subject,
        description: Some(format!(
            "Synthetic demo issue #{n}. Generated locally because no Redmine connection is configured."
        )),
        start_date,
        due_date,
        done_ratio,
        estimated_hours: rng.random_bool(0.5).then(|| rng.random_range(1..=40) as f32),
        spent_hours: rng.random_bool(0.5).then(|| rng.random_range(0..=30) as f32),
        created_on,
        updated_on,
        closed_on,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_exactly_seventy_five_issues() {
        assert_eq!(issues(Utc::now()).len(), ISSUE_COUNT);
    }

    #[test]
    fn sorted_descending_by_update_time() {
        let issues = issues(Utc::now());
        assert!(
            issues
                .windows(2)
                .all(|pair| pair[0].updated_on >= pair[1].updated_on)
        );
    }

    #[test]
    fn closed_issues_are_structurally_consistent() {
        let now = Utc::now();
        // Randomized output: a few rounds to get decent coverage of the
        // closed branch.
        for _ in 0..10 {
            for issue in issues(now) {
                if issue.status.is_closed {
                    assert_eq!(issue.done_ratio, 100);
                    let closed_on = issue.closed_on.expect("closed issue has closed_on");
                    assert!(closed_on > issue.created_on);
                    assert!(closed_on < now);
                } else {
                    assert!(issue.closed_on.is_none());
                    assert!(issue.done_ratio <= 90);
                }
            }
        }
    }

    #[test]
    fn is_closed_flag_matches_status_table() {
        for issue in issues(Utc::now()) {
            let expected = matches!(issue.status.name.as_str(), "Closed" | "Rejected");
            assert_eq!(issue.status.is_closed, expected, "{}", issue.status.name);
        }
    }

    #[test]
    fn updates_never_predate_creation() {
        for issue in issues(Utc::now()) {
            assert!(issue.updated_on >= issue.created_on);
        }
    }

    #[test]
    fn demo_projects_are_the_fixed_five() {
        let projects = projects();
        assert_eq!(projects.len(), 5);
        assert_eq!(projects[0].identifier, "web-platform");
    }
}
