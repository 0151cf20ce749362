use serde::{Deserialize, Serialize};

use super::UserScheme;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IssueWatcherScheme {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(rename = "isWatching")]
    #[serde(default)]
    pub is_watching: bool,
    #[serde(rename = "watchCount")]
    #[serde(default)]
    pub watch_count: i64,
    #[serde(default)]
    pub watchers: Vec<UserScheme>,
}
