//! Plain-text rendering for dashboard commands.
//!
//! JSON output is handled per command via serde; everything here is the
//! human-readable text mode.

use crate::analytics::{AssigneeLoad, Slice, Stats, TrendPoint};
use crate::model::Issue;
use crate::sync::Snapshot;

/// One-line data-source banner printed ahead of text output.
pub fn print_source_line(snapshot: &Snapshot, base_url: Option<&str>) {
    if snapshot.is_connected() {
        let host = base_url.unwrap_or("remote");
        println!("Source: {host} ({} issues)\n", snapshot.issues().len());
    } else if snapshot.data.is_demo() {
        println!("Source: demo data (run `rb config set` to connect)\n");
    } else {
        println!("Source: cached data (last refresh failed)\n");
    }
}

pub fn print_stats(stats: &Stats) {
    println!("Summary:");
    println!("  Total issues:     {}", stats.total);
    println!("  Open:             {}", stats.open);
    println!("  Closed:           {}", stats.closed);
    println!("  Overdue:          {}", stats.overdue);
    println!("  Completion rate:  {}%", stats.completion_rate);
    if stats.avg_completion_days > 0.0 {
        println!("  Avg completion:   {:.1}d", stats.avg_completion_days);
    }
}

pub fn print_slices(title: &str, slices: &[Slice]) {
    println!("\nBy {title}:");
    for slice in slices {
        println!("  {}: {}", slice.label, slice.count);
    }
}

pub fn print_assignees(loads: &[AssigneeLoad]) {
    println!("\nBy assignee:");
    for load in loads {
        println!(
            "  {}: {} ({} open, {} closed)",
            load.assignee, load.total, load.open, load.closed
        );
    }
}

pub fn print_trend(points: &[TrendPoint]) {
    println!("Trend (last {} days):", points.len());
    println!("  {:<12} {:>7} {:>6} {:>5}", "date", "created", "closed", "open");
    for point in points {
        println!(
            "  {:<12} {:>7} {:>6} {:>5}",
            point.date.format("%Y-%m-%d"),
            point.created,
            point.closed,
            point.cumulative_open
        );
    }
}

/// One list line: id, status, priority, subject, due date when present.
pub fn print_issue_line(issue: &Issue) {
    let due = issue
        .due_date
        .map(|d| format!("  (due {})", d.format("%Y-%m-%d")))
        .unwrap_or_default();
    println!(
        "  #{:<6} [{}] {:<9} {}{due}",
        issue.id, issue.status.name, issue.priority.name, issue.subject
    );
}
