use thiserror::Error;

use crate::response::ResponseScheme;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Response decoding failed: {source}")]
    ResponseDecoding {
        source: serde_json::Error,
        response: Box<ResponseScheme>,
    },

    #[error("API error: {status} - {message}")]
    ApiError {
        status: u16,
        message: String,
        response: Box<ResponseScheme>,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid scope {0:?}, please provide one of the following: GLOBAL,AUTHENTICATED,PRIVATE")]
    InvalidScope(String),

    #[error("No project key or ID set")]
    NoProjectId,

    #[error("No version ID set")]
    NoVersionId,

    #[error("No issue key or ID set")]
    NoIssueKey,

    #[error("No filter ID set")]
    NoFilterId,

    #[error("No share permission ID set")]
    NoPermissionId,

    #[error("No dashboard ID set")]
    NoDashboardId,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Envelope of the call that produced this error, if the request was sent.
    pub fn response(&self) -> Option<&ResponseScheme> {
        match self {
            Error::ApiError { response, .. } | Error::ResponseDecoding { response, .. } => {
                Some(&**response)
            }
            _ => None,
        }
    }

    /// True for errors raised before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_)
                | Error::InvalidScope(_)
                | Error::NoProjectId
                | Error::NoVersionId
                | Error::NoIssueKey
                | Error::NoFilterId
                | Error::NoPermissionId
                | Error::NoDashboardId
        )
    }

    pub fn status(&self) -> Option<u16> {
        self.response().map(|response| response.code)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> ResponseScheme {
        ResponseScheme {
            code: 404,
            endpoint: "https://example.atlassian.net/rest/api/2/filter/10000/permission".to_string(),
            method: "GET".to_string(),
            bytes: b"{\"errorMessages\":[\"The filter does not exist\"],\"errors\":{}}".to_vec(),
        }
    }

    #[test]
    fn test_api_error_exposes_envelope() {
        let err = Error::ApiError {
            status: 404,
            message: "The filter does not exist".to_string(),
            response: Box::new(not_found()),
        };

        assert_eq!(err.status(), Some(404));
        assert!(!err.is_validation());
        let response = err.response().unwrap();
        assert!(response.endpoint.ends_with("filter/10000/permission"));
        assert_eq!(err.to_string(), "API error: 404 - The filter does not exist");
    }

    #[test]
    fn test_validation_errors_have_no_envelope() {
        for err in [
            Error::NoProjectId,
            Error::NoVersionId,
            Error::NoIssueKey,
            Error::NoFilterId,
            Error::NoPermissionId,
            Error::NoDashboardId,
            Error::InvalidScope("PUBLIC".to_string()),
        ] {
            assert!(err.is_validation(), "{err} should be a validation error");
            assert!(err.response().is_none());
            assert!(err.status().is_none());
        }
    }

    #[test]
    fn test_invalid_scope_message_lists_allowed_values() {
        let err = Error::InvalidScope("PUBLIC".to_string());
        let message = err.to_string();
        assert!(message.contains("\"PUBLIC\""));
        assert!(message.contains("GLOBAL,AUTHENTICATED,PRIVATE"));
    }
}
