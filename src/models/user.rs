use serde::{Deserialize, Serialize};

/// A Jira user as embedded in dashboards, watcher lists and share permissions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserScheme {
    #[serde(rename = "accountId")]
    #[serde(default)]
    pub account_id: String,
    #[serde(rename = "displayName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "emailAddress")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(rename = "avatarUrls")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_urls: Option<AvatarUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(rename = "timeZone")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(rename = "accountType")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvatarUrls {
    #[serde(rename = "48x48")]
    pub size_48: String,
    #[serde(rename = "24x24")]
    pub size_24: String,
    #[serde(rename = "16x16")]
    pub size_16: String,
    #[serde(rename = "32x32")]
    pub size_32: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_deserialization() {
        let json_data = json!({
            "accountId": "5b10a2844c20165700ede21g",
            "displayName": "Mia Krystof",
            "self": "https://your-domain.atlassian.net/rest/api/3/user?accountId=5b10a2844c20165700ede21g",
            "avatarUrls": {
                "48x48": "https://avatar.example.com/48.png",
                "24x24": "https://avatar.example.com/24.png",
                "16x16": "https://avatar.example.com/16.png",
                "32x32": "https://avatar.example.com/32.png"
            },
            "active": true,
            "accountType": "atlassian"
        });

        let user: UserScheme = serde_json::from_value(json_data).unwrap();

        assert_eq!(user.account_id, "5b10a2844c20165700ede21g");
        assert_eq!(user.display_name.as_deref(), Some("Mia Krystof"));
        assert_eq!(user.active, Some(true));
        assert!(user.email_address.is_none());
        assert_eq!(user.avatar_urls.unwrap().size_16, "https://avatar.example.com/16.png");
    }

    #[test]
    fn test_user_serialization_omits_unset_fields() {
        let user = UserScheme {
            account_id: "5b10ac8d82e05b22cc7d4ef5".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json, json!({"accountId": "5b10ac8d82e05b22cc7d4ef5"}));
    }
}
