//! Filter sharing: the caller's default share scope and the share
//! permissions of individual filters (`rest/api/2/filter`).

use reqwest::Method;

use crate::client::{JiraClient, NO_PAYLOAD};
use crate::error::{Error, Result};
use crate::models::{
    PermissionFilterPayloadScheme, ShareFilterScopeScheme, SharePermissionScheme, ShareScope,
};
use crate::response::ResponseScheme;

const DEFAULT_SHARE_SCOPE: &str = "rest/api/2/filter/defaultShareScope";

#[derive(Debug, Clone, Copy)]
pub struct FilterShareService<'a> {
    client: &'a JiraClient,
}

impl<'a> FilterShareService<'a> {
    pub(crate) fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// Default sharing settings for new filters and dashboards of the calling user.
    pub async fn scope(&self) -> Result<(ShareFilterScopeScheme, ResponseScheme)> {
        self.client.get_json(DEFAULT_SHARE_SCOPE).await
    }

    /// Sets the default sharing for new filters and dashboards.
    ///
    /// `scope` must be one of `GLOBAL`, `AUTHENTICATED` or `PRIVATE`; anything
    /// else fails with [`Error::InvalidScope`] without contacting Jira.
    pub async fn set_scope(&self, scope: &str) -> Result<ResponseScheme> {
        let scope: ShareScope = scope.parse()?;
        let payload = ShareFilterScopeScheme { scope };

        let request = self
            .client
            .new_request(Method::PUT, DEFAULT_SHARE_SCOPE, Some(&payload))?;
        self.client.call(request).await
    }

    /// Share permissions of a filter.
    pub async fn gets(
        &self,
        filter_id: u64,
    ) -> Result<(Vec<SharePermissionScheme>, ResponseScheme)> {
        let endpoint = permissions_endpoint(filter_id)?;
        self.client.get_json(&endpoint).await
    }

    /// Adds a share permission to a filter and returns the resulting list.
    ///
    /// A global permission (`global` or `authenticated`) overwrites every
    /// existing share permission of the filter.
    pub async fn add(
        &self,
        filter_id: u64,
        payload: &PermissionFilterPayloadScheme,
    ) -> Result<(Vec<SharePermissionScheme>, ResponseScheme)> {
        let endpoint = permissions_endpoint(filter_id)?;
        self.client.send_json(Method::POST, &endpoint, payload).await
    }

    pub async fn get(
        &self,
        filter_id: u64,
        permission_id: u64,
    ) -> Result<(SharePermissionScheme, ResponseScheme)> {
        let endpoint = permission_endpoint(filter_id, permission_id)?;
        self.client.get_json(&endpoint).await
    }

    pub async fn delete(&self, filter_id: u64, permission_id: u64) -> Result<ResponseScheme> {
        let endpoint = permission_endpoint(filter_id, permission_id)?;
        let request = self
            .client
            .new_request(Method::DELETE, &endpoint, NO_PAYLOAD)?;
        self.client.call(request).await
    }
}

fn permissions_endpoint(filter_id: u64) -> Result<String> {
    if filter_id == 0 {
        return Err(Error::NoFilterId);
    }
    Ok(format!("rest/api/2/filter/{}/permission", filter_id))
}

fn permission_endpoint(filter_id: u64, permission_id: u64) -> Result<String> {
    let base = permissions_endpoint(filter_id)?;
    if permission_id == 0 {
        return Err(Error::NoPermissionId);
    }
    Ok(format!("{}/{}", base, permission_id))
}
