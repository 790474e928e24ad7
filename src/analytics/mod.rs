//! Pure aggregation over the in-memory issue sequence.
//!
//! Every function here is deterministic and side-effect free: it takes
//! the current issue slice (plus an explicit "now"/"today" where time
//! matters), never mutates its input, and returns a fresh derived
//! structure. Empty input yields empty output, not an error.

pub mod palette;

use crate::model::Issue;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;

/// Number of days in the trend window, ending today.
pub const TREND_DAYS: usize = 30;

/// Summary metrics over the whole issue sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    /// Open issues whose due date has passed (see [`Issue::is_overdue`]).
    pub overdue: usize,
    /// `round(closed / total * 100)`; 0 for an empty sequence.
    pub completion_rate: u8,
    /// Mean days from creation to closure over issues carrying both
    /// timestamps, rounded to one decimal; 0 when none qualify.
    pub avg_completion_days: f64,
}

/// One labeled count in a breakdown, with its chart color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub label: String,
    pub count: usize,
    pub color: &'static str,
}

/// Per-assignee workload with the open/closed split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssigneeLoad {
    pub assignee: String,
    pub total: usize,
    pub open: usize,
    pub closed: usize,
}

/// One day of the created/closed/open trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub created: usize,
    pub closed: usize,
    pub cumulative_open: usize,
}

/// Compute the summary metrics.
#[must_use]
pub fn stats(issues: &[Issue], now: DateTime<Utc>) -> Stats {
    let total = issues.len();
    let closed = issues.iter().filter(|i| i.is_closed()).count();
    let open = total - closed;
    let overdue = issues.iter().filter(|i| i.is_overdue(now)).count();

    let completion_rate = if total == 0 {
        0
    } else {
        ((closed as f64 / total as f64) * 100.0).round() as u8
    };

    let completion_days: Vec<f64> = issues
        .iter()
        .filter_map(|issue| {
            issue.closed_on.map(|closed_on| {
                closed_on.signed_duration_since(issue.created_on).num_seconds() as f64 / 86_400.0
            })
        })
        .collect();
    let avg_completion_days = if completion_days.is_empty() {
        0.0
    } else {
        let mean = completion_days.iter().sum::<f64>() / completion_days.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    Stats {
        total,
        open,
        closed,
        overdue,
        completion_rate,
        avg_completion_days,
    }
}

/// Frequency counts in first-seen order, preserving input encounter
/// order so color assignment is stable across recomputations of the
/// same sequence.
fn count_first_seen<'a, K>(issues: &'a [Issue], key: K) -> Vec<(String, usize)>
where
    K: Fn(&'a Issue) -> &'a str,
{
    let mut out: Vec<(String, usize)> = Vec::new();
    for issue in issues {
        let label = key(issue);
        match out.iter().position(|(seen, _)| seen == label) {
            Some(index) => out[index].1 += 1,
            None => out.push((label.to_string(), 1)),
        }
    }
    out
}

/// Issue counts per status label, first-seen order.
#[must_use]
pub fn by_status(issues: &[Issue]) -> Vec<Slice> {
    count_first_seen(issues, |i| i.status.name.as_str())
        .into_iter()
        .enumerate()
        .map(|(index, (label, count))| Slice {
            color: palette::status_color(&label, index),
            label,
            count,
        })
        .collect()
}

/// Issue counts per priority label, first-seen order.
#[must_use]
pub fn by_priority(issues: &[Issue]) -> Vec<Slice> {
    count_first_seen(issues, |i| i.priority.name.as_str())
        .into_iter()
        .enumerate()
        .map(|(index, (label, count))| Slice {
            color: palette::priority_color(&label, index),
            label,
            count,
        })
        .collect()
}

/// Issue counts per project, sorted by descending count. Colors are
/// assigned before sorting, so they follow first-seen order.
#[must_use]
pub fn by_project(issues: &[Issue]) -> Vec<Slice> {
    let mut slices: Vec<Slice> = count_first_seen(issues, |i| i.project.name.as_str())
        .into_iter()
        .enumerate()
        .map(|(index, (label, count))| Slice {
            color: palette::fallback_color(index),
            label,
            count,
        })
        .collect();
    slices.sort_by(|a, b| b.count.cmp(&a.count));
    slices
}

/// Issue counts per tracker, first-seen order.
#[must_use]
pub fn by_tracker(issues: &[Issue]) -> Vec<Slice> {
    count_first_seen(issues, |i| i.tracker.name.as_str())
        .into_iter()
        .enumerate()
        .map(|(index, (label, count))| Slice {
            color: palette::fallback_color(index),
            label,
            count,
        })
        .collect()
}

/// Per-assignee workload, sorted by descending total. Unassigned issues
/// land in one `Unassigned` bucket; ties keep first-seen order (the
/// sort is stable).
#[must_use]
pub fn by_assignee(issues: &[Issue]) -> Vec<AssigneeLoad> {
    let mut out: Vec<AssigneeLoad> = Vec::new();
    for issue in issues {
        let name = issue.assignee_name();
        let index = match out.iter().position(|load| load.assignee == name) {
            Some(index) => index,
            None => {
                out.push(AssigneeLoad {
                    assignee: name.to_string(),
                    total: 0,
                    open: 0,
                    closed: 0,
                });
                out.len() - 1
            }
        };
        let entry = &mut out[index];
        entry.total += 1;
        if issue.is_closed() {
            entry.closed += 1;
        } else {
            entry.open += 1;
        }
    }
    out.sort_by(|a, b| b.total.cmp(&a.total));
    out
}

/// The 30-day trend ending `today` (inclusive), one point per UTC
/// calendar day in ascending order.
///
/// The running open counter is seeded with every issue created strictly
/// before the window, then moves by `+created - closed` per day.
/// Bucketing uses only the date portion of the timestamps. The running
/// value stays signed internally; each published point is clamped at 0.
#[must_use]
pub fn trend(issues: &[Issue], today: NaiveDate) -> Vec<TrendPoint> {
    let window_start = today - Days::new(TREND_DAYS as u64 - 1);

    let mut running: i64 = issues
        .iter()
        .filter(|i| i.created_on.date_naive() < window_start)
        .count() as i64;

    (0..TREND_DAYS)
        .map(|offset| {
            let date = window_start + Days::new(offset as u64);
            let created = issues
                .iter()
                .filter(|i| i.created_on.date_naive() == date)
                .count();
            let closed = issues
                .iter()
                .filter(|i| i.closed_on.is_some_and(|c| c.date_naive() == date))
                .count();
            running += created as i64 - closed as i64;
            TrendPoint {
                date,
                created,
                closed,
                cumulative_open: usize::try_from(running.max(0)).unwrap_or(0),
            }
        })
        .collect()
}
