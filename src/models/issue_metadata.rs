/// Filters for `GET issue/createmeta`. List parameters are sent once per
/// element; empty lists are not sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IssueMetadataCreateOptions {
    pub project_ids: Vec<String>,
    pub project_keys: Vec<String>,
    pub issue_type_ids: Vec<String>,
    pub issue_type_names: Vec<String>,
    /// e.g. `projects.issuetypes.fields`.
    pub expand: Option<String>,
}

impl IssueMetadataCreateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_ids(mut self, ids: Vec<String>) -> Self {
        self.project_ids = ids;
        self
    }

    pub fn project_keys(mut self, keys: Vec<String>) -> Self {
        self.project_keys = keys;
        self
    }

    pub fn issue_type_ids(mut self, ids: Vec<String>) -> Self {
        self.issue_type_ids = ids;
        self
    }

    pub fn issue_type_names(mut self, names: Vec<String>) -> Self {
        self.issue_type_names = names;
        self
    }

    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }
}
