//! Data-sync orchestration tests: demo fallback, atomic publication,
//! failure retention, the stale-response guard, and config-driven
//! re-refresh.

mod common;

use redboard::api::{IssueQuery, IssueSource, IssuesPage, ProjectsPage};
use redboard::config::{ConfigStore, Connection};
use redboard::demo;
use redboard::error::{BoardError, Result};
use redboard::model::Issue;
use redboard::sync::{Connect, DataSync};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

fn usable_conn() -> Connection {
    Connection {
        base_url: "https://tracker.example".to_string(),
        api_key: "secret".to_string(),
        user_id: "7".to_string(),
    }
}

fn configured_store(dir: &TempDir) -> ConfigStore {
    let store = ConfigStore::new(dir.path().join("config.json"));
    store.save(&usable_conn()).unwrap();
    store
}

/// Scripted fetch source: one page of issues, optional delay, optional
/// failure.
#[derive(Clone)]
struct StubSource {
    issues: Vec<Issue>,
    delay: Duration,
    fail: bool,
}

impl StubSource {
    fn ok(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            delay: Duration::ZERO,
            fail: false,
        }
    }

    fn slow(issues: Vec<Issue>, delay: Duration) -> Self {
        Self {
            issues,
            delay,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            issues: Vec::new(),
            delay: Duration::ZERO,
            fail: true,
        }
    }
}

impl IssueSource for StubSource {
    async fn issues_page(&self, _query: &IssueQuery) -> Result<IssuesPage> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(BoardError::HttpStatus {
                url: "https://tracker.example/issues.json".to_string(),
                status: reqwest::StatusCode::BAD_GATEWAY,
            });
        }
        Ok(IssuesPage {
            issues: self.issues.clone(),
            total_count: self.issues.len() as u64,
            offset: 0,
            limit: 100,
        })
    }

    async fn projects_page(&self, limit: u32) -> Result<ProjectsPage> {
        Ok(ProjectsPage {
            projects: demo::projects(),
            total_count: 5,
            offset: 0,
            limit,
        })
    }
}

/// Hands out one scripted source per refresh, in order.
struct QueueConnect {
    sources: Mutex<VecDeque<StubSource>>,
}

impl QueueConnect {
    fn new(sources: Vec<StubSource>) -> Self {
        Self {
            sources: Mutex::new(sources.into()),
        }
    }
}

impl Connect for QueueConnect {
    type Source = StubSource;

    fn connect(&self, _conn: &Connection) -> StubSource {
        self.sources
            .lock()
            .unwrap()
            .pop_front()
            .expect("a scripted source per refresh")
    }
}

#[tokio::test]
async fn unconfigured_settles_in_demo_mode() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));
    let sync = DataSync::with_connector(store, QueueConnect::new(Vec::new()));

    let snapshot = sync.refresh().await;
    assert!(snapshot.data.is_demo());
    assert!(!snapshot.is_connected());
    assert!(snapshot.error.is_none());
    assert!(!snapshot.loading);
    assert_eq!(snapshot.issues().len(), demo::ISSUE_COUNT);
}

#[tokio::test]
async fn unusable_config_also_settles_in_demo_mode() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));
    store
        .save(&Connection {
            base_url: "https://tracker.example".to_string(),
            api_key: String::new(),
            user_id: "7".to_string(),
        })
        .unwrap();
    let sync = DataSync::with_connector(store, QueueConnect::new(Vec::new()));

    let snapshot = sync.refresh().await;
    assert!(snapshot.data.is_demo());
    assert!(!snapshot.is_connected());
}

#[tokio::test]
async fn successful_refresh_publishes_issues_and_projects_together() {
    let dir = TempDir::new().unwrap();
    let store = configured_store(&dir);
    let fetched = vec![common::make_issue(1), common::make_issue(2)];
    let sync = DataSync::with_connector(store, QueueConnect::new(vec![StubSource::ok(fetched)]));

    let snapshot = sync.refresh().await;
    assert!(snapshot.is_connected());
    assert!(!snapshot.data.is_demo());
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.issues().len(), 2);
    assert_eq!(snapshot.projects().len(), 5);
}

#[tokio::test]
async fn first_load_failure_keeps_demo_data_with_error() {
    let dir = TempDir::new().unwrap();
    let store = configured_store(&dir);
    let sync = DataSync::with_connector(store, QueueConnect::new(vec![StubSource::failing()]));

    let snapshot = sync.refresh().await;
    assert!(snapshot.data.is_demo());
    assert!(!snapshot.is_connected());
    assert!(snapshot.error.as_deref().unwrap().contains("502"));
    assert_eq!(snapshot.issues().len(), demo::ISSUE_COUNT);
}

#[tokio::test]
async fn later_failure_keeps_previous_live_data() {
    let dir = TempDir::new().unwrap();
    let store = configured_store(&dir);
    let first_batch = vec![common::make_issue(1)];
    let recovered = vec![common::make_issue(2), common::make_issue(3)];
    let sync = DataSync::with_connector(
        store,
        QueueConnect::new(vec![
            StubSource::ok(first_batch.clone()),
            StubSource::failing(),
            StubSource::ok(recovered),
        ]),
    );

    let connected = sync.refresh().await;
    assert!(connected.is_connected());

    let failed = sync.refresh().await;
    assert!(!failed.is_connected());
    assert!(failed.error.is_some());
    assert!(!failed.data.is_demo(), "previous live data must be kept");
    assert_eq!(failed.issues(), connected.issues());

    let back = sync.refresh().await;
    assert!(back.is_connected());
    assert!(back.error.is_none(), "a successful refresh clears the error");
    assert_eq!(back.issues().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn later_refresh_wins_when_responses_arrive_out_of_order() {
    let dir = TempDir::new().unwrap();
    let store = configured_store(&dir);
    let slow_batch = vec![common::make_issue(1)];
    let fast_batch = vec![common::make_issue(2), common::make_issue(3)];
    let sync = DataSync::with_connector(
        store,
        QueueConnect::new(vec![
            StubSource::slow(slow_batch, Duration::from_secs(5)),
            StubSource::ok(fast_batch),
        ]),
    );

    let first = sync.refresh();
    let second = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        sync.refresh().await
    };
    let (stale, fresh) = tokio::join!(first, second);

    // The second (newer) request finished first; the first request's
    // response arrived later and must have been discarded.
    assert_eq!(fresh.issues().len(), 2);
    assert_eq!(
        stale.issues().len(),
        2,
        "superseded response must not overwrite newer data"
    );
    assert_eq!(sync.snapshot().issues().len(), 2);
    assert!(sync.snapshot().is_connected());
}

#[tokio::test]
async fn config_change_triggers_another_refresh() {
    let dir = TempDir::new().unwrap();
    let store = configured_store(&dir);
    let sync = Arc::new(DataSync::with_connector(
        store.clone(),
        QueueConnect::new(vec![
            StubSource::ok(vec![common::make_issue(1)]),
            StubSource::ok(vec![common::make_issue(2), common::make_issue(3)]),
        ]),
    ));
    let mut snapshots = sync.subscribe();

    let worker = tokio::spawn({
        let sync = Arc::clone(&sync);
        async move { sync.run().await }
    });

    snapshots
        .wait_for(|s| !s.loading && s.issues().len() == 1)
        .await
        .unwrap();

    store.save(&usable_conn()).unwrap();

    snapshots
        .wait_for(|s| !s.loading && s.issues().len() == 2)
        .await
        .unwrap();
    assert!(sync.snapshot().is_connected());

    worker.abort();
}

#[tokio::test(start_paused = true)]
async fn refresh_reports_loading_while_in_flight() {
    let dir = TempDir::new().unwrap();
    let store = configured_store(&dir);
    let sync = Arc::new(DataSync::with_connector(
        store,
        QueueConnect::new(vec![StubSource::slow(
            vec![common::make_issue(1)],
            Duration::from_millis(50),
        )]),
    ));
    let mut snapshots = sync.subscribe();

    let worker = tokio::spawn({
        let sync = Arc::clone(&sync);
        async move { sync.refresh().await }
    });

    snapshots.wait_for(|s| s.loading).await.unwrap();
    let finished = worker.await.unwrap();
    assert!(!finished.loading);
    assert!(finished.is_connected());
}
