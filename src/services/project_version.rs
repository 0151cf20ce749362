//! Project versions (`rest/api/2/project/{key}/version*` and `rest/api/2/version`).

use reqwest::Method;

use super::require_id;
use crate::client::{JiraClient, NO_PAYLOAD};
use crate::error::{Error, Result};
use crate::models::{
    VersionGetsOptions, VersionIssueCountsScheme, VersionPageScheme, VersionPayloadScheme,
    VersionScheme, VersionUnresolvedIssuesCountScheme,
};
use crate::query::{QueryParams, segment};
use crate::response::ResponseScheme;

#[derive(Debug, Clone, Copy)]
pub struct ProjectVersionService<'a> {
    client: &'a JiraClient,
}

impl<'a> ProjectVersionService<'a> {
    pub(crate) fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// All versions of a project, unpaginated.
    pub async fn gets(
        &self,
        project_key_or_id: &str,
    ) -> Result<(Vec<VersionScheme>, ResponseScheme)> {
        let project = require_id(project_key_or_id, Error::NoProjectId)?;

        let endpoint = format!("rest/api/2/project/{}/versions", segment(project));
        self.client.get_json(&endpoint).await
    }

    /// One page of a project's versions. Only the options that are set are
    /// sent as query parameters.
    pub async fn search(
        &self,
        project_key_or_id: &str,
        options: Option<&VersionGetsOptions>,
        start_at: u32,
        max_results: u32,
    ) -> Result<(VersionPageScheme, ResponseScheme)> {
        let project = require_id(project_key_or_id, Error::NoProjectId)?;

        let mut params = QueryParams::new();
        params.add("startAt", start_at).add("maxResults", max_results);

        if let Some(options) = options {
            params
                .add_joined("expand", &options.expand)
                .add_opt("query", options.query.as_deref())
                .add_opt("status", options.status.as_deref())
                .add_opt("orderBy", options.order_by.as_deref());
        }

        let endpoint =
            params.append_to(format!("rest/api/2/project/{}/version", segment(project)));
        self.client.get_json(&endpoint).await
    }

    pub async fn create(
        &self,
        payload: &VersionPayloadScheme,
    ) -> Result<(VersionScheme, ResponseScheme)> {
        self.client
            .send_json(Method::POST, "rest/api/2/version", payload)
            .await
    }

    /// A version, optionally expanded with `operations` and/or `issuesstatus`.
    pub async fn get(
        &self,
        version_id: &str,
        expand: &[&str],
    ) -> Result<(VersionScheme, ResponseScheme)> {
        let version = require_id(version_id, Error::NoVersionId)?;

        let mut params = QueryParams::new();
        params.add_joined("expand", expand);

        let endpoint = params.append_to(format!("rest/api/2/version/{}", segment(version)));
        self.client.get_json(&endpoint).await
    }

    pub async fn update(
        &self,
        version_id: &str,
        payload: &VersionPayloadScheme,
    ) -> Result<(VersionScheme, ResponseScheme)> {
        let version = require_id(version_id, Error::NoVersionId)?;

        let endpoint = format!("rest/api/2/version/{}", segment(version));
        self.client.send_json(Method::PUT, &endpoint, payload).await
    }

    /// Deletes `version_id` and moves its fixVersion references to
    /// `move_issues_to`.
    pub async fn merge(&self, version_id: &str, move_issues_to: &str) -> Result<ResponseScheme> {
        let version = require_id(version_id, Error::NoVersionId)?;
        let target = require_id(move_issues_to, Error::NoVersionId)?;

        let endpoint = format!(
            "rest/api/2/version/{}/mergeto/{}",
            segment(version),
            segment(target)
        );
        let request = self
            .client
            .new_request(Method::PUT, &endpoint, NO_PAYLOAD)?;
        self.client.call(request).await
    }

    /// Counts of issues referencing the version as fixVersion, affectedVersion
    /// or through a version custom field.
    pub async fn related_issue_counts(
        &self,
        version_id: &str,
    ) -> Result<(VersionIssueCountsScheme, ResponseScheme)> {
        let version = require_id(version_id, Error::NoVersionId)?;

        let endpoint = format!("rest/api/2/version/{}/relatedIssueCounts", segment(version));
        self.client.get_json(&endpoint).await
    }

    pub async fn unresolved_issue_count(
        &self,
        version_id: &str,
    ) -> Result<(VersionUnresolvedIssuesCountScheme, ResponseScheme)> {
        let version = require_id(version_id, Error::NoVersionId)?;

        let endpoint = format!(
            "rest/api/2/version/{}/unresolvedIssueCount",
            segment(version)
        );
        self.client.get_json(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::services::test_support::{client_for, expect_no_requests};

    fn version_json(id: &str, name: &str) -> serde_json::Value {
        json!({
            "self": format!("https://your-domain.atlassian.net/rest/api/2/version/{id}"),
            "id": id,
            "name": name,
            "archived": false,
            "released": false,
            "projectId": 10000
        })
    }

    #[tokio::test]
    async fn test_gets() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/project/KP/versions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                version_json("10000", "Version 1"),
                version_json("10010", "Next Version")
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);

        let (versions, _) = client.project_version().gets("KP").await.unwrap();

        assert_eq!(versions.len(), 2);
        assert_eq!(versions[1].name.as_deref(), Some("Next Version"));
    }

    #[tokio::test]
    async fn test_search_sends_only_pagination_by_default() {
        // Given
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/project/KP/version"))
            .and(query_param("startAt", "0"))
            .and(query_param("maxResults", "50"))
            .and(query_param_is_missing("expand"))
            .and(query_param_is_missing("query"))
            .and(query_param_is_missing("status"))
            .and(query_param_is_missing("orderBy"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "maxResults": 50,
                "startAt": 0,
                "total": 1,
                "isLast": true,
                "values": [version_json("10000", "Version 1")]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);

        // When
        let (page, response) = client
            .project_version()
            .search("KP", None, 0, 50)
            .await
            .unwrap();

        // Then
        assert!(page.is_last);
        assert_eq!(page.values.len(), 1);
        assert!(response.endpoint.ends_with("/rest/api/2/project/KP/version?startAt=0&maxResults=50"));
        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("startAt=0&maxResults=50"));
    }

    #[tokio::test]
    async fn test_search_with_all_options() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/project/KP/version"))
            .and(query_param("startAt", "50"))
            .and(query_param("maxResults", "25"))
            .and(query_param("expand", "operations,issuesstatus"))
            .and(query_param("query", "sprint"))
            .and(query_param("status", "released,unreleased"))
            .and(query_param("orderBy", "-sequence"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "maxResults": 25,
                "startAt": 50,
                "total": 50,
                "isLast": true,
                "values": []
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);
        let options = VersionGetsOptions::new()
            .expand(vec!["operations".to_string(), "issuesstatus".to_string()])
            .query("sprint")
            .status("released,unreleased")
            .order_by("-sequence");

        let (page, _) = client
            .project_version()
            .search("KP", Some(&options), 50, 25)
            .await
            .unwrap();

        assert_eq!(page.start_at, 50);
        assert!(page.values.is_empty());
    }

    #[tokio::test]
    async fn test_empty_project_fails_before_request() {
        let mock_server = MockServer::start().await;
        expect_no_requests(&mock_server).await;
        let client = client_for(&mock_server);

        let search = client.project_version().search("", None, 0, 50).await;
        let gets = client.project_version().gets("").await;

        assert!(matches!(search, Err(Error::NoProjectId)));
        assert!(matches!(gets, Err(Error::NoProjectId)));
        assert_eq!(Error::NoProjectId.to_string(), "No project key or ID set");
    }

    #[tokio::test]
    async fn test_create_and_update() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/api/2/version"))
            .and(body_json(json!({
                "name": "New Version 1",
                "description": "An excellent version",
                "projectId": 10000,
                "releaseDate": "2010-07-06",
                "released": true
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(version_json("10000", "New Version 1")))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/rest/api/2/version/10000"))
            .and(body_json(json!({"archived": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "10000",
                "name": "New Version 1",
                "archived": true
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);
        let service = client.project_version();

        let payload = VersionPayloadScheme::new("New Version 1", 10000)
            .description("An excellent version")
            .release_date(NaiveDate::from_ymd_opt(2010, 7, 6).unwrap())
            .released(true);
        let (created, response) = service.create(&payload).await.unwrap();
        assert_eq!(created.id.as_deref(), Some("10000"));
        assert_eq!(response.code, 201);

        let update = VersionPayloadScheme::default().archived(true);
        let (updated, _) = service.update("10000", &update).await.unwrap();
        assert_eq!(updated.archived, Some(true));
    }

    #[tokio::test]
    async fn test_get_with_and_without_expand() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/version/10000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(version_json("10000", "Version 1")))
            .expect(2)
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);
        let service = client.project_version();

        service.get("10000", &[]).await.unwrap();
        service.get("10000", &["operations", "issuesstatus"]).await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests[0].url.query().is_none());
        assert_eq!(requests[1].url.query(), Some("expand=operations%2Cissuesstatus"));
    }

    #[tokio::test]
    async fn test_merge() {
        let mock_server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/rest/api/2/version/10000/mergeto/10001"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);

        let response = client.project_version().merge("10000", "10001").await.unwrap();

        assert_eq!(response.code, 204);
        assert_eq!(response.method, "PUT");
    }

    #[tokio::test]
    async fn test_empty_version_ids_fail_before_request() {
        let mock_server = MockServer::start().await;
        expect_no_requests(&mock_server).await;
        let client = client_for(&mock_server);
        let service = client.project_version();

        assert!(matches!(service.merge("", "10001").await, Err(Error::NoVersionId)));
        assert!(matches!(service.merge("10000", "").await, Err(Error::NoVersionId)));
        assert!(matches!(service.get("", &[]).await, Err(Error::NoVersionId)));
        assert!(matches!(
            service.update("", &VersionPayloadScheme::default()).await,
            Err(Error::NoVersionId)
        ));
        assert!(matches!(service.related_issue_counts("").await, Err(Error::NoVersionId)));
        assert!(matches!(service.unresolved_issue_count(" ").await, Err(Error::NoVersionId)));
    }

    #[tokio::test]
    async fn test_dot_segment_ids_fail_before_request() {
        let mock_server = MockServer::start().await;
        expect_no_requests(&mock_server).await;
        let client = client_for(&mock_server);
        let service = client.project_version();

        assert!(matches!(service.merge("..", "10001").await, Err(Error::NoVersionId)));
        assert!(matches!(service.merge("10000", ".").await, Err(Error::NoVersionId)));
        assert!(matches!(service.get("%2E%2E", &[]).await, Err(Error::NoVersionId)));
        assert!(matches!(service.gets("..").await, Err(Error::NoProjectId)));
        assert!(matches!(client.dashboard().delete("..").await, Err(Error::NoDashboardId)));
        assert!(matches!(client.issue_watcher().get(".").await, Err(Error::NoIssueKey)));
    }

    #[tokio::test]
    async fn test_issue_counts() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/version/10000/relatedIssueCounts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "issuesFixedCount": 23,
                "issuesAffectedCount": 101,
                "issueCountWithCustomFieldsShowingVersion": 54
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/version/10000/unresolvedIssueCount"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "issuesUnresolvedCount": 23,
                "issuesCount": 30
            })))
            .mount(&mock_server)
            .await;
        let client = client_for(&mock_server);
        let service = client.project_version();

        let (related, _) = service.related_issue_counts("10000").await.unwrap();
        let (unresolved, _) = service.unresolved_issue_count("10000").await.unwrap();

        assert_eq!(related.issues_affected_count, 101);
        assert!(related.custom_field_usage.is_empty());
        assert_eq!(unresolved.issues_count, 30);
    }
}
