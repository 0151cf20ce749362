use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VersionScheme {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdue: Option<bool>,
    #[serde(rename = "startDate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "releaseDate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    /// Release date formatted for the calling user, e.g. `6/Jul/2010`.
    #[serde(rename = "userReleaseDate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_release_date: Option<String>,
    #[serde(rename = "userStartDate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_start_date: Option<String>,
    #[serde(rename = "projectId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(rename = "moveUnfixedIssuesTo")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_unfixed_issues_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<VersionOperationScheme>>,
    #[serde(rename = "issuesStatusForFixVersion")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues_status_for_fix_version: Option<VersionIssuesStatusScheme>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VersionOperationScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "styleClass")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VersionIssuesStatusScheme {
    #[serde(default)]
    pub unmapped: i64,
    #[serde(rename = "toDo")]
    #[serde(default)]
    pub to_do: i64,
    #[serde(rename = "inProgress")]
    #[serde(default)]
    pub in_progress: i64,
    #[serde(default)]
    pub done: i64,
}

/// One page of `GET project/{key}/version`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VersionPageScheme {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(rename = "nextPage")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    pub max_results: u32,
    #[serde(rename = "startAt")]
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(rename = "isLast")]
    #[serde(default)]
    pub is_last: bool,
    #[serde(default)]
    pub values: Vec<VersionScheme>,
}

/// Body for creating or updating a version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VersionPayloadScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "projectId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<bool>,
    #[serde(rename = "startDate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "releaseDate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
}

impl VersionPayloadScheme {
    pub fn new(name: impl Into<String>, project_id: i64) -> Self {
        Self {
            name: Some(name.into()),
            project_id: Some(project_id),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    pub fn released(mut self, released: bool) -> Self {
        self.released = Some(released);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = Some(date);
        self
    }
}

/// Optional filters for the paginated version search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VersionGetsOptions {
    /// `issuesstatus` and/or `operations`.
    pub expand: Vec<String>,
    /// Matched case-insensitively against version name and description.
    pub query: Option<String>,
    /// Comma-separated `released`, `unreleased`, `archived`.
    pub status: Option<String>,
    /// `description`, `name`, `releaseDate`, `sequence` or `startDate`,
    /// optionally prefixed with `+` or `-`.
    pub order_by: Option<String>,
}

impl VersionGetsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expand(mut self, expand: Vec<String>) -> Self {
        self.expand = expand;
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VersionIssueCountsScheme {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(rename = "issuesFixedCount")]
    #[serde(default)]
    pub issues_fixed_count: i64,
    #[serde(rename = "issuesAffectedCount")]
    #[serde(default)]
    pub issues_affected_count: i64,
    #[serde(rename = "issueCountWithCustomFieldsShowingVersion")]
    #[serde(default)]
    pub issue_count_with_custom_fields_showing_version: i64,
    #[serde(rename = "customFieldUsage")]
    #[serde(default)]
    pub custom_field_usage: Vec<VersionUsageInCustomFieldScheme>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VersionUsageInCustomFieldScheme {
    #[serde(rename = "fieldName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(rename = "customFieldId")]
    #[serde(default)]
    pub custom_field_id: i64,
    #[serde(rename = "issueCountWithVersionInCustomField")]
    #[serde(default)]
    pub issue_count_with_version_in_custom_field: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VersionUnresolvedIssuesCountScheme {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(rename = "issuesUnresolvedCount")]
    #[serde(default)]
    pub issues_unresolved_count: i64,
    #[serde(rename = "issuesCount")]
    #[serde(default)]
    pub issues_count: i64,
}
