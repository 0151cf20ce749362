use reqwest::Method;

use super::require_id;
use crate::client::{JiraClient, NO_PAYLOAD};
use crate::error::{Error, Result};
use crate::models::IssueWatcherScheme;
use crate::query::{QueryParams, segment};
use crate::response::ResponseScheme;

/// Issue watchers (`rest/api/3/issue/{key}/watchers`).
#[derive(Debug, Clone, Copy)]
pub struct IssueWatcherService<'a> {
    client: &'a JiraClient,
}

impl<'a> IssueWatcherService<'a> {
    pub(crate) fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, issue_key_or_id: &str) -> Result<(IssueWatcherScheme, ResponseScheme)> {
        let endpoint = watchers_endpoint(issue_key_or_id)?;
        self.client.get_json(&endpoint).await
    }

    /// Adds `account_id` as a watcher, or the calling user when `None`.
    pub async fn add(&self, issue_key_or_id: &str, account_id: Option<&str>) -> Result<ResponseScheme> {
        let endpoint = watchers_endpoint(issue_key_or_id)?;

        // Jira takes the account ID as a bare JSON string.
        let request = match account_id.filter(|id| !id.is_empty()) {
            Some(account_id) => self
                .client
                .new_request(Method::POST, &endpoint, Some(account_id))?,
            None => self
                .client
                .new_request(Method::POST, &endpoint, NO_PAYLOAD)?,
        };
        self.client.call(request).await
    }

    /// Removes `account_id` from the watchers, or the calling user when `None`.
    pub async fn delete(
        &self,
        issue_key_or_id: &str,
        account_id: Option<&str>,
    ) -> Result<ResponseScheme> {
        let mut params = QueryParams::new();
        params.add_opt("accountId", account_id);

        let endpoint = params.append_to(watchers_endpoint(issue_key_or_id)?);
        let request = self
            .client
            .new_request(Method::DELETE, &endpoint, NO_PAYLOAD)?;
        self.client.call(request).await
    }
}

fn watchers_endpoint(issue_key_or_id: &str) -> Result<String> {
    let issue = require_id(issue_key_or_id, Error::NoIssueKey)?;
    Ok(format!("rest/api/3/issue/{}/watchers", segment(issue)))
}
