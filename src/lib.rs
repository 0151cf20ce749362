//! Async client for the Jira Cloud REST API.
//!
//! Every call goes through [`JiraClient::new_request`] and
//! [`JiraClient::call`], and hands back a [`ResponseScheme`] envelope next
//! to the decoded data. Resource groups are reached through service handles:
//!
//! ```no_run
//! use jira_cloud::{Auth, JiraClient, JiraConfig};
//!
//! # async fn run() -> jira_cloud::Result<()> {
//! let config = JiraConfig::new(
//!     "https://your-domain.atlassian.net",
//!     Auth::Basic {
//!         username: "me@example.com".to_string(),
//!         api_token: "token".to_string(),
//!     },
//! )?;
//! let client = JiraClient::new(config)?;
//!
//! let (page, response) = client.dashboard().gets(0, 50, None).await?;
//! println!("{} dashboards ({} {})", page.total, response.method, response.code);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
mod query;
pub mod response;
pub mod services;

pub use client::{Auth, DEFAULT_USER_AGENT, JiraClient, JiraConfig};
pub use error::{Error, Result};
pub use models::*;
pub use response::ResponseScheme;

// Service re-exports
pub use services::{
    DashboardService, FilterShareService, IssueMetadataService, IssueWatcherService,
    ProjectVersionService,
};
