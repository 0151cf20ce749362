//! Resource groups of the Jira REST API. Each service is a borrowed handle
//! on a [`JiraClient`](crate::JiraClient) and maps its methods 1:1 onto
//! REST endpoints.

pub mod dashboard;
pub mod filter_share;
pub mod issue_metadata;
pub mod issue_watcher;
pub mod project_version;

pub use dashboard::DashboardService;
pub use filter_share::FilterShareService;
pub use issue_metadata::IssueMetadataService;
pub use issue_watcher::IssueWatcherService;
pub use project_version::ProjectVersionService;

use crate::error::{Error, Result};

/// Rejects blank identifiers before any request is built. `.` and `..`
/// are rejected too, since URL joining would resolve them as dot segments.
pub(crate) fn require_id(value: &str, missing: Error) -> Result<&str> {
    if value.trim().is_empty() || is_dot_segment(value) {
        Err(missing)
    } else {
        Ok(value)
    }
}

fn is_dot_segment(value: &str) -> bool {
    let decoded = value.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}
