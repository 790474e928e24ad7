//! Refresh orchestration for the dashboard.
//!
//! Owns the config-store subscription and the published [`Snapshot`].
//! One refresh cycle reads the config, fetches issues and projects
//! through an [`IssueSource`], and commits both together - never one
//! updated and the other stale. A monotonic request sequence number
//! guards against out-of-order completions: a response belonging to a
//! superseded request is discarded on arrival (last write wins, no
//! explicit cancellation).
//!
//! No timeout is enforced here; a hung request leaves that cycle in
//! `loading`.

use crate::api::{self, IssueSource, RedmineClient};
use crate::config::{ConfigStore, Connection};
use crate::demo;
use crate::error::Result;
use crate::model::DataSet;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Where the published data came from. The tagged form makes
/// "connected with generator data" unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardData {
    Demo(DataSet),
    Connected(DataSet),
}

impl DashboardData {
    #[must_use]
    pub const fn dataset(&self) -> &DataSet {
        match self {
            Self::Demo(data) | Self::Connected(data) => data,
        }
    }

    #[must_use]
    pub const fn is_demo(&self) -> bool {
        matches!(self, Self::Demo(_))
    }
}

/// The published dashboard state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub data: DashboardData,
    pub loading: bool,
    /// Single user-visible message from the last failed refresh, if any.
    pub error: Option<String>,
}

impl Snapshot {
    /// A freshly generated demo snapshot: not loading, no error.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            data: DashboardData::Demo(demo::dataset(Utc::now())),
            loading: false,
            error: None,
        }
    }

    /// Connected means live data with no recorded failure. Stale live
    /// data kept after a failed refresh reports disconnected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.error.is_none() && matches!(self.data, DashboardData::Connected(_))
    }

    #[must_use]
    pub fn issues(&self) -> &[crate::model::Issue] {
        &self.data.dataset().issues
    }

    #[must_use]
    pub fn projects(&self) -> &[crate::model::Project] {
        &self.data.dataset().projects
    }
}

/// Builds a fetch source from connection settings.
///
/// The indirection keeps the orchestrator testable: production plugs in
/// [`RedmineConnect`], tests plug in mock sources.
pub trait Connect: Send + Sync {
    type Source: IssueSource;

    fn connect(&self, conn: &Connection) -> Self::Source;
}

/// Production connector: a fresh HTTP client per refresh, owned by that
/// cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedmineConnect;

impl Connect for RedmineConnect {
    type Source = RedmineClient;

    fn connect(&self, conn: &Connection) -> RedmineClient {
        RedmineClient::new(conn)
    }
}

/// The data-sync hook: config-driven refresh with a stale-response
/// guard, publishing snapshots through a watch channel.
pub struct DataSync<C: Connect = RedmineConnect> {
    store: ConfigStore,
    connector: C,
    seq: AtomicU64,
    state: watch::Sender<Snapshot>,
}

impl DataSync<RedmineConnect> {
    #[must_use]
    pub fn new(store: ConfigStore) -> Self {
        Self::with_connector(store, RedmineConnect)
    }
}

impl<C: Connect> DataSync<C> {
    /// Create the hook with an explicit connector. The initial state is
    /// demo data, not loading, no error.
    #[must_use]
    pub fn with_connector(store: ConfigStore, connector: C) -> Self {
        Self {
            store,
            connector,
            seq: AtomicU64::new(0),
            state: watch::channel(Snapshot::demo()).0,
        }
    }

    /// Current published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.borrow().clone()
    }

    /// Subscribe to snapshot updates.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.state.subscribe()
    }

    /// Run one refresh cycle and return the snapshot it settled on.
    ///
    /// Unusable config settles in demo data. On fetch failure the
    /// previous data is kept (demo data on a first load, since that is
    /// the initial state) with the error recorded. A cycle superseded
    /// by a newer one leaves the published snapshot untouched.
    pub async fn refresh(&self) -> Snapshot {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|snapshot| snapshot.loading = true);

        let outcome = self.fetch_cycle().await;

        if self.seq.load(Ordering::SeqCst) != seq {
            debug!(seq, "discarding response of superseded refresh");
            return self.snapshot();
        }

        self.state.send_modify(|snapshot| {
            snapshot.loading = false;
            match outcome {
                Ok(Some(data)) => {
                    info!(
                        issues = data.issues.len(),
                        projects = data.projects.len(),
                        "refresh complete"
                    );
                    snapshot.data = DashboardData::Connected(data);
                    snapshot.error = None;
                }
                Ok(None) => {
                    debug!("no usable connection settings; settling in demo data");
                    snapshot.data = DashboardData::Demo(demo::dataset(Utc::now()));
                    snapshot.error = None;
                }
                Err(err) => {
                    warn!(error = %err, "refresh failed; keeping previous data");
                    snapshot.error = Some(err.to_string());
                }
            }
        });

        self.snapshot()
    }

    /// Fetch issues and projects for the configured user.
    /// `Ok(None)` means unconfigured; any failure aborts the whole
    /// cycle so no mixed-freshness state can be published.
    async fn fetch_cycle(&self) -> Result<Option<DataSet>> {
        let Some(conn) = self.store.load()? else {
            return Ok(None);
        };
        if !conn.is_usable() {
            return Ok(None);
        }

        info!(base_url = %conn.base_url, "refreshing from remote");
        let source = self.connector.connect(&conn);
        let issues = api::fetch_assigned_issues(&source, conn.user_id.trim()).await?;
        let projects = api::fetch_projects(&source).await?;
        Ok(Some(DataSet { issues, projects }))
    }

    /// Initial refresh, then one refresh per config-store notification,
    /// until every store handle able to notify is gone.
    pub async fn run(&self) {
        let mut changes = self.store.subscribe();
        self.refresh().await;
        while changes.changed().await.is_ok() {
            self.refresh().await;
        }
    }
}
