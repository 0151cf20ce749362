use serde::{Deserialize, Serialize};

use super::{SharePermissionScheme, UserScheme};

/// Restricts `GET dashboard` to the caller's favourite or owned dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardFilter {
    Favourite,
    My,
}

impl DashboardFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardFilter::Favourite => "favourite",
            DashboardFilter::My => "my",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardScheme {
    #[serde(default)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "isFavourite")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favourite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(rename = "sharePermissions")]
    #[serde(default)]
    pub share_permissions: Vec<SharePermissionScheme>,
    #[serde(rename = "editPermissions")]
    #[serde(default)]
    pub edit_permissions: Vec<SharePermissionScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
}

/// One page of `GET dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardPageScheme {
    #[serde(rename = "startAt")]
    #[serde(default)]
    pub start_at: u32,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default)]
    pub dashboards: Vec<DashboardScheme>,
}

/// One page of `GET dashboard/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardSearchPageScheme {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
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
    pub values: Vec<DashboardScheme>,
}

/// Body for creating, updating or copying a dashboard. Jira expects both
/// permission lists to be present, even when empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardPayloadScheme {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "sharePermissions")]
    pub share_permissions: Vec<SharePermissionScheme>,
    #[serde(rename = "editPermissions")]
    pub edit_permissions: Vec<SharePermissionScheme>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSearchOptions {
    pub dashboard_name: Option<String>,
    pub owner_account_id: Option<String>,
    pub group_permission_name: Option<String>,
    /// `description`, `favorite_count`, `id`, `is_favorite`, `name` or
    /// `owner`, optionally prefixed with `+` or `-`.
    pub order_by: Option<String>,
    pub expand: Vec<String>,
}

impl DashboardSearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dashboard_name(mut self, name: impl Into<String>) -> Self {
        self.dashboard_name = Some(name.into());
        self
    }

    pub fn owner_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.owner_account_id = Some(account_id.into());
        self
    }

    pub fn group_permission_name(mut self, group: impl Into<String>) -> Self {
        self.group_permission_name = Some(group.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn expand(mut self, expand: Vec<String>) -> Self {
        self.expand = expand;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dashboard_page_deserialization() {
        let json_data = json!({
            "startAt": 10,
            "maxResults": 10,
            "total": 143,
            "prev": "https://your-domain.atlassian.net/rest/api/3/dashboard?startAt=0",
            "next": "https://your-domain.atlassian.net/rest/api/3/dashboard?startAt=10",
            "dashboards": [
                {
                    "id": "10000",
                    "isFavourite": false,
                    "name": "System Dashboard",
                    "popularity": 1,
                    "self": "https://your-domain.atlassian.net/rest/api/3/dashboard/10000",
                    "sharePermissions": [{"type": "global"}],
                    "view": "https://your-domain.atlassian.net/secure/Dashboard.jspa?selectPageId=10000"
                },
                {
                    "id": "20000",
                    "isFavourite": true,
                    "name": "Build Engineering",
                    "owner": {
                        "accountId": "5b10a2844c20165700ede21g",
                        "displayName": "Mia Krystof",
                        "active": true
                    },
                    "popularity": 1,
                    "sharePermissions": [
                        {"id": 10105, "type": "group", "group": {"name": "administrators"}}
                    ]
                }
            ]
        });

        let page: DashboardPageScheme = serde_json::from_value(json_data).unwrap();

        assert_eq!(page.total, 143);
        assert_eq!(page.dashboards.len(), 2);
        assert_eq!(page.dashboards[0].share_permissions[0].permission_type, "global");
        assert!(page.dashboards[0].edit_permissions.is_empty());
        assert_eq!(
            page.dashboards[1].owner.as_ref().unwrap().display_name.as_deref(),
            Some("Mia Krystof")
        );
    }

    #[test]
    fn test_dashboard_payload_always_sends_permission_lists() {
        let payload = DashboardPayloadScheme {
            name: "Team board".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            json!({"name": "Team board", "sharePermissions": [], "editPermissions": []})
        );
    }

    #[test]
    fn test_dashboard_filter_values() {
        assert_eq!(DashboardFilter::Favourite.as_str(), "favourite");
        assert_eq!(DashboardFilter::My.as_str(), "my");
    }
}
