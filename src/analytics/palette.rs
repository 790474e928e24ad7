//! Deterministic chart colors.
//!
//! Known status and priority labels map to fixed colors; anything else
//! (custom workflows, localized labels) gets a color from a cyclic
//! palette indexed by the label's first-seen position, so the same
//! issue sequence always colors the same way.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static STATUS_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("New", "#60bcfa"),
        ("In Progress", "#ffbe20"),
        ("Resolved", "#43e5aa"),
        ("Feedback", "#f87a71"),
        ("Closed", "#737384"),
        ("Rejected", "#91919f"),
    ])
});

static PRIORITY_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Low", "#737384"),
        ("Normal", "#60bcfa"),
        ("High", "#ffbe20"),
        ("Urgent", "#f87a71"),
        ("Immediate", "#ef5144"),
    ])
});

/// Fallback cycle for unknown labels and unkeyed dimensions.
pub const FALLBACK: [&str; 6] = [
    "#60bcfa", "#43e5aa", "#ffbe20", "#f87a71", "#a855f7", "#737384",
];

const PRIORITY_FALLBACK: [&str; 5] = ["#737384", "#60bcfa", "#ffbe20", "#f87a71", "#ef5144"];

#[must_use]
pub fn status_color(label: &str, index: usize) -> &'static str {
    STATUS_COLORS
        .get(label)
        .copied()
        .unwrap_or(FALLBACK[index % FALLBACK.len()])
}

#[must_use]
pub fn priority_color(label: &str, index: usize) -> &'static str {
    PRIORITY_COLORS
        .get(label)
        .copied()
        .unwrap_or(PRIORITY_FALLBACK[index % PRIORITY_FALLBACK.len()])
}

#[must_use]
pub fn fallback_color(index: usize) -> &'static str {
    FALLBACK[index % FALLBACK.len()]
}
