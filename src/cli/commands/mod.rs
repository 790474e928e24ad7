//! Command implementations.

pub mod board;
pub mod completions;
pub mod config;
pub mod issues;
pub mod projects;
pub mod stats;
pub mod trend;

use crate::cli::Cli;
use crate::config::ConfigStore;
use crate::error::Result;
use crate::sync::{DataSync, Snapshot};
use serde::Serialize;

/// Snapshot plus the base URL it was (or would be) fetched from, for
/// the source banner.
pub(crate) struct SnapshotContext {
    pub snapshot: Snapshot,
    pub base_url: Option<String>,
}

/// Data-source fields shared by every JSON report.
#[derive(Serialize)]
pub(crate) struct SourceInfo<'a> {
    pub source: &'static str,
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

impl<'a> SourceInfo<'a> {
    pub(crate) fn from_snapshot(snapshot: &'a Snapshot) -> Self {
        Self {
            source: if snapshot.data.is_demo() {
                "demo"
            } else {
                "redmine"
            },
            connected: snapshot.is_connected(),
            error: snapshot.error.as_deref(),
        }
    }
}

pub(crate) fn store(cli: &Cli) -> Result<ConfigStore> {
    match &cli.config {
        Some(path) => Ok(ConfigStore::new(path.clone())),
        None => ConfigStore::from_env(),
    }
}

/// One user-initiated refresh cycle. `--demo` skips the config entirely;
/// otherwise a fetch failure is reported on stderr and the retained data
/// is rendered - the dashboard always has something to show.
pub(crate) async fn load_snapshot(cli: &Cli) -> Result<SnapshotContext> {
    if cli.demo {
        return Ok(SnapshotContext {
            snapshot: Snapshot::demo(),
            base_url: None,
        });
    }

    let store = store(cli)?;
    let base_url = store
        .load()
        .ok()
        .flatten()
        .filter(crate::config::Connection::is_usable)
        .map(|conn| conn.base_url);

    let sync = DataSync::new(store);
    let snapshot = sync.refresh().await;
    if let Some(err) = &snapshot.error {
        eprintln!("warning: {err} (showing previous data)");
    }

    Ok(SnapshotContext { snapshot, base_url })
}
