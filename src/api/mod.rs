//! Redmine REST client and the paginated fetch loop.
//!
//! The transport sits behind the [`IssueSource`] trait so the sync
//! layer and the pagination contract can be tested against mock
//! sources. [`RedmineClient`] is the production implementation: plain
//! GETs with the API key appended as a query parameter.
//!
//! Pagination contract: pages of [`PAGE_SIZE`] are concatenated until a
//! page comes back short, the reported `total_count` is reached, or the
//! next offset would pass [`OFFSET_CAP`]. The cap guarantees
//! termination even when the server reports an inconsistent total.

use crate::config::Connection;
use crate::error::{BoardError, Result};
use crate::model::{Issue, Project};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{debug, warn};

/// Fixed page size for issue pagination.
pub const PAGE_SIZE: u32 = 100;

/// Highest offset the fetch loop will request.
pub const OFFSET_CAP: u32 = 500;

/// Single bounded page for the best-effort project fetch.
pub const PROJECT_PAGE_SIZE: u32 = 100;

/// Server-side ordering for assigned issues.
pub const ISSUE_SORT: &str = "priority:desc,updated_on:desc";

/// Query parameters for one issue page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueQuery {
    pub assigned_to: String,
    pub offset: u32,
    pub limit: u32,
}

/// Wire shape of `/issues.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuesPage {
    pub issues: Vec<Issue>,
    pub total_count: u64,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
}

/// Wire shape of `/projects.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsPage {
    pub projects: Vec<Project>,
    pub total_count: u64,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
}

/// A paged source of issues and projects.
///
/// Implemented by [`RedmineClient`] over HTTP and by in-memory mocks in
/// tests.
pub trait IssueSource: Send + Sync {
    /// Fetch one page of issues assigned to the query's user.
    fn issues_page(
        &self,
        query: &IssueQuery,
    ) -> impl Future<Output = Result<IssuesPage>> + Send;

    /// Fetch one bounded page of projects.
    fn projects_page(&self, limit: u32) -> impl Future<Output = Result<ProjectsPage>> + Send;
}

/// HTTP client for one Redmine instance.
///
/// Owned by the refresh cycle that created it - there is no process-wide
/// client state, so config changes simply build a new client.
#[derive(Debug, Clone)]
pub struct RedmineClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RedmineClient {
    #[must_use]
    pub fn new(conn: &Connection) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: conn.base_url.trim_end_matches('/').to_string(),
            api_key: conn.api_key.trim().to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{endpoint}", self.base_url);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| BoardError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::HttpStatus { url, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| BoardError::Decode { url, source })
    }
}

impl IssueSource for RedmineClient {
    async fn issues_page(&self, query: &IssueQuery) -> Result<IssuesPage> {
        self.get_json(
            "/issues.json",
            &[
                ("limit", query.limit.to_string()),
                ("offset", query.offset.to_string()),
                ("assigned_to_id", query.assigned_to.clone()),
                ("status_id", "*".to_string()),
                ("sort", ISSUE_SORT.to_string()),
            ],
        )
        .await
    }

    async fn projects_page(&self, limit: u32) -> Result<ProjectsPage> {
        self.get_json(
            "/projects.json",
            &[("limit", limit.to_string()), ("offset", "0".to_string())],
        )
        .await
    }
}

/// Fetch every issue assigned to `user_id`, across all statuses.
///
/// # Errors
///
/// Any page failure aborts the whole fetch; partial results are never
/// returned.
pub async fn fetch_assigned_issues<S: IssueSource>(
    source: &S,
    user_id: &str,
) -> Result<Vec<Issue>> {
    let mut all = Vec::new();
    let mut offset = 0u32;

    loop {
        let page = source
            .issues_page(&IssueQuery {
                assigned_to: user_id.to_string(),
                offset,
                limit: PAGE_SIZE,
            })
            .await?;

        let fetched = page.issues.len();
        all.extend(page.issues);
        offset += PAGE_SIZE;

        let full_page = fetched == PAGE_SIZE as usize;
        let more_reported = u64::from(offset) < page.total_count;
        if !(full_page && more_reported) {
            break;
        }
        if offset > OFFSET_CAP {
            warn!(total = all.len(), "stopping at the pagination safety cap");
            break;
        }
    }

    debug!(count = all.len(), "fetched assigned issues");
    Ok(all)
}

/// Fetch the visible projects (single bounded page).
///
/// # Errors
///
/// Propagates the page failure; the caller treats it as failing the
/// whole refresh cycle.
pub async fn fetch_projects<S: IssueSource>(source: &S) -> Result<Vec<Project>> {
    Ok(source.projects_page(PROJECT_PAGE_SIZE).await?.projects)
}
