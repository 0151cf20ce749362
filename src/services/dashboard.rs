//! Dashboards (`rest/api/3/dashboard`).

use reqwest::Method;

use super::require_id;
use crate::client::{JiraClient, NO_PAYLOAD};
use crate::error::{Error, Result};
use crate::models::{
    DashboardFilter, DashboardPageScheme, DashboardPayloadScheme, DashboardScheme,
    DashboardSearchOptions, DashboardSearchPageScheme,
};
use crate::query::{QueryParams, segment};
use crate::response::ResponseScheme;

#[derive(Debug, Clone, Copy)]
pub struct DashboardService<'a> {
    client: &'a JiraClient,
}

impl<'a> DashboardService<'a> {
    pub(crate) fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// One page of the dashboards visible to the caller, optionally limited
    /// to favourites or dashboards the caller owns.
    pub async fn gets(
        &self,
        start_at: u32,
        max_results: u32,
        filter: Option<DashboardFilter>,
    ) -> Result<(DashboardPageScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_opt("filter", filter.map(|f| f.as_str()));

        let endpoint = params.append_to("rest/api/3/dashboard".to_string());
        self.client.get_json(&endpoint).await
    }

    pub async fn search(
        &self,
        options: Option<&DashboardSearchOptions>,
        start_at: u32,
        max_results: u32,
    ) -> Result<(DashboardSearchPageScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params
            .add("startAt", start_at)
            .add("maxResults", max_results);

        if let Some(options) = options {
            params
                .add_opt("dashboardName", options.dashboard_name.as_deref())
                .add_opt("accountId", options.owner_account_id.as_deref())
                .add_opt("groupname", options.group_permission_name.as_deref())
                .add_opt("orderBy", options.order_by.as_deref())
                .add_joined("expand", &options.expand);
        }

        let endpoint = params.append_to("rest/api/3/dashboard/search".to_string());
        self.client.get_json(&endpoint).await
    }

    pub async fn create(
        &self,
        payload: &DashboardPayloadScheme,
    ) -> Result<(DashboardScheme, ResponseScheme)> {
        self.client
            .send_json(Method::POST, "rest/api/3/dashboard", payload)
            .await
    }

    pub async fn get(&self, dashboard_id: &str) -> Result<(DashboardScheme, ResponseScheme)> {
        let endpoint = dashboard_endpoint(dashboard_id)?;
        self.client.get_json(&endpoint).await
    }

    /// Replaces the dashboard's name, description and permissions.
    pub async fn update(
        &self,
        dashboard_id: &str,
        payload: &DashboardPayloadScheme,
    ) -> Result<(DashboardScheme, ResponseScheme)> {
        let endpoint = dashboard_endpoint(dashboard_id)?;
        self.client.send_json(Method::PUT, &endpoint, payload).await
    }

    /// Copies a dashboard, gadgets included. `payload` describes the copy.
    pub async fn copy(
        &self,
        dashboard_id: &str,
        payload: &DashboardPayloadScheme,
    ) -> Result<(DashboardScheme, ResponseScheme)> {
        let endpoint = format!("{}/copy", dashboard_endpoint(dashboard_id)?);
        self.client.send_json(Method::POST, &endpoint, payload).await
    }

    pub async fn delete(&self, dashboard_id: &str) -> Result<ResponseScheme> {
        let endpoint = dashboard_endpoint(dashboard_id)?;
        let request = self
            .client
            .new_request(Method::DELETE, &endpoint, NO_PAYLOAD)?;
        self.client.call(request).await
    }
}

fn dashboard_endpoint(dashboard_id: &str) -> Result<String> {
    let id = require_id(dashboard_id, Error::NoDashboardId)?;
    Ok(format!("rest/api/3/dashboard/{}", segment(id)))
}
