use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ProjectRoleScheme, ProjectScheme, UserScheme};
use crate::error::Error;

/// Default sharing visibility for new filters and dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShareScope {
    Global,
    Authenticated,
    Private,
}

impl ShareScope {
    pub const ALL: [ShareScope; 3] = [
        ShareScope::Global,
        ShareScope::Authenticated,
        ShareScope::Private,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShareScope::Global => "GLOBAL",
            ShareScope::Authenticated => "AUTHENTICATED",
            ShareScope::Private => "PRIVATE",
        }
    }
}

impl fmt::Display for ShareScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShareScope {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ShareScope::ALL
            .into_iter()
            .find(|scope| scope.as_str() == value)
            .ok_or_else(|| Error::InvalidScope(value.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShareFilterScopeScheme {
    pub scope: ShareScope,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GroupScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "groupId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
}

/// A rule granting visibility of a filter or dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SharePermissionScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// `user`, `group`, `project`, `projectRole`, `global`, `loggedin`,
    /// `authenticated` or `project-unknown`.
    #[serde(rename = "type")]
    pub permission_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ProjectRoleScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserScheme>,
}

/// Body of an "add share permission" call. Unset fields are left out of
/// the JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PermissionFilterPayloadScheme {
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_type: Option<String>,
    #[serde(rename = "projectId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(rename = "groupname")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(rename = "projectRoleId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_role_id: Option<String>,
    #[serde(rename = "accountId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl PermissionFilterPayloadScheme {
    fn of_type(permission_type: &str) -> Self {
        Self {
            permission_type: Some(permission_type.to_string()),
            ..Default::default()
        }
    }

    pub fn group(group_name: impl Into<String>) -> Self {
        Self {
            group_name: Some(group_name.into()),
            ..Self::of_type("group")
        }
    }

    pub fn project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Self::of_type("project")
        }
    }

    pub fn project_role(project_id: impl Into<String>, project_role_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            project_role_id: Some(project_role_id.into()),
            ..Self::of_type("projectRole")
        }
    }

    pub fn user(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            ..Self::of_type("user")
        }
    }

    /// Share with everyone. Replaces every other share permission of the filter.
    pub fn global() -> Self {
        Self::of_type("global")
    }

    /// Share with all logged-in users. Replaces every other share permission of the filter.
    pub fn authenticated() -> Self {
        Self::of_type("authenticated")
    }
}
