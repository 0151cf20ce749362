//! Create/edit screen metadata (`rest/api/2/issue/.../editmeta`,
//! `rest/api/2/issue/createmeta`).
//!
//! The shape of these responses depends on each project's field
//! configuration, so they are handed back as untyped JSON.

use serde_json::Value;

use super::require_id;
use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::IssueMetadataCreateOptions;
use crate::query::{QueryParams, segment};
use crate::response::ResponseScheme;

#[derive(Debug, Clone, Copy)]
pub struct IssueMetadataService<'a> {
    client: &'a JiraClient,
}

impl<'a> IssueMetadataService<'a> {
    pub(crate) fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// Edit screen fields of an issue that are visible to and editable by
    /// the caller. Both overrides require administrator rights on Jira's side.
    pub async fn get(
        &self,
        issue_key_or_id: &str,
        override_screen_security: bool,
        override_editable_flag: bool,
    ) -> Result<(Value, ResponseScheme)> {
        let issue = require_id(issue_key_or_id, Error::NoIssueKey)?;

        let mut params = QueryParams::new();
        if override_editable_flag {
            params.add("overrideEditableFlag", true);
        }
        if override_screen_security {
            params.add("overrideScreenSecurity", true);
        }

        let endpoint = params.append_to(format!("rest/api/2/issue/{}/editmeta", segment(issue)));
        self.client.get_json(&endpoint).await
    }

    /// Projects and issue types the caller can create issues in, plus the
    /// create screen fields when expanded with `projects.issuetypes.fields`.
    pub async fn create(
        &self,
        options: Option<&IssueMetadataCreateOptions>,
    ) -> Result<(Value, ResponseScheme)> {
        let mut params = QueryParams::new();

        if let Some(options) = options {
            params
                .add_each("projectIds", &options.project_ids)
                .add_each("projectKeys", &options.project_keys)
                .add_each("issuetypeIds", &options.issue_type_ids)
                .add_each("issuetypeNames", &options.issue_type_names)
                .add_opt("expand", options.expand.as_deref());
        }

        let endpoint = params.append_to("rest/api/2/issue/createmeta".to_string());
        self.client.get_json(&endpoint).await
    }
}
