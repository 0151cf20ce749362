use crate::error::{Error, Result};
use crate::response::ResponseScheme;
use crate::services::{
    DashboardService, FilterShareService, IssueMetadataService, IssueWatcherService,
    ProjectVersionService,
};
use base64::Engine;
use reqwest::{Client, Method, Request, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use url::Url;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Body placeholder for requests that carry no payload.
pub(crate) const NO_PAYLOAD: Option<&()> = None;

#[derive(Debug, Clone)]
pub enum Auth {
    Basic { username: String, api_token: String },
    Bearer { token: String },
}

impl Auth {
    fn header_value(&self) -> Result<header::HeaderValue> {
        let raw = match self {
            Auth::Basic { username, api_token } => {
                let credentials = format!("{}:{}", username, api_token);
                let encoded =
                    base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());
                format!("Basic {}", encoded)
            }
            Auth::Bearer { token } => format!("Bearer {}", token),
        };

        let mut value = header::HeaderValue::from_str(&raw)
            .map_err(|_| Error::InvalidConfiguration("Invalid auth header".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub auth: Auth,
    pub user_agent: String,
}

impl JiraConfig {
    pub fn new(base_url: impl Into<String>, auth: Auth) -> Result<Self> {
        let base_url = base_url.into();

        let parsed = Url::parse(&base_url)
            .map_err(|_| Error::InvalidConfiguration("Invalid base URL".to_string()))?;
        // Endpoints are joined onto the path; a query or fragment would swallow them.
        if parsed.cannot_be_a_base() || parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(Error::InvalidConfiguration(
                "Base URL must not carry a query or fragment".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            auth,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Reads `JIRA_URL` plus either `JIRA_BEARER_TOKEN` or the
    /// `JIRA_USER`/`JIRA_API_TOKEN` pair. `JIRA_USER_AGENT` is optional.
    pub fn from_env() -> Result<Self> {
        use std::env;

        let base_url = env::var("JIRA_URL").map_err(|_| {
            Error::ConfigurationMissing("JIRA_URL not found in environment".to_string())
        })?;

        let auth = match env::var("JIRA_BEARER_TOKEN") {
            Ok(token) if !token.is_empty() => Auth::Bearer { token },
            _ => {
                let username = env::var("JIRA_USER").map_err(|_| {
                    Error::ConfigurationMissing("JIRA_USER not found in environment".to_string())
                })?;

                let api_token = env::var("JIRA_API_TOKEN").map_err(|_| {
                    Error::ConfigurationMissing(
                        "JIRA_API_TOKEN not found in environment".to_string(),
                    )
                })?;

                Auth::Basic {
                    username,
                    api_token,
                }
            }
        };

        let config = Self::new(base_url, auth)?;
        match env::var("JIRA_USER_AGENT") {
            Ok(user_agent) if !user_agent.is_empty() => Ok(config.with_user_agent(user_agent)),
            _ => Ok(config),
        }
    }

    /// Loads a dotenv file into the process environment, then behaves like
    /// [`JiraConfig::from_env`]. Variables already set are not overridden.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        dotenv::from_path(path).map_err(|e| {
            Error::InvalidConfiguration(format!("Failed to load {}: {}", path.display(), e))
        })?;
        Self::from_env()
    }

    /// Resolves an API path such as `rest/api/2/version/10000` against the base URL.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }

        Url::parse(&base)
            .and_then(|url| url.join(endpoint.trim_start_matches('/')))
            .map_err(|e| Error::InvalidConfiguration(format!("Invalid endpoint {}: {}", endpoint, e)))
    }
}

/// Entry point to the API. Cheap to clone; clones share the connection
/// pool and the configuration.
#[derive(Debug, Clone)]
pub struct JiraClient {
    pub(crate) client: Client,
    pub(crate) config: Arc<JiraConfig>,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to build HTTP client: {}", e)))?;

        tracing::debug!(base_url = %config.base_url, "created Jira client");

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    pub fn set_basic_auth(&mut self, username: impl Into<String>, api_token: impl Into<String>) {
        Arc::make_mut(&mut self.config).auth = Auth::Basic {
            username: username.into(),
            api_token: api_token.into(),
        };
    }

    pub fn set_bearer_token(&mut self, token: impl Into<String>) {
        Arc::make_mut(&mut self.config).auth = Auth::Bearer {
            token: token.into(),
        };
    }

    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        Arc::make_mut(&mut self.config).user_agent = user_agent.into();
    }

    pub fn filter_share(&self) -> FilterShareService<'_> {
        FilterShareService::new(self)
    }

    pub fn project_version(&self) -> ProjectVersionService<'_> {
        ProjectVersionService::new(self)
    }

    pub fn issue_metadata(&self) -> IssueMetadataService<'_> {
        IssueMetadataService::new(self)
    }

    pub fn issue_watcher(&self) -> IssueWatcherService<'_> {
        IssueWatcherService::new(self)
    }

    pub fn dashboard(&self) -> DashboardService<'_> {
        DashboardService::new(self)
    }

    /// Builds a request for `endpoint` (relative to the base URL) with the
    /// client's auth and user agent applied. A present `body` is sent as JSON.
    /// Headers can still be adjusted on the returned request before [`JiraClient::call`].
    pub fn new_request<B>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint_url(endpoint)?;

        let mut builder = self
            .client
            .request(method, url)
            .header(header::AUTHORIZATION, self.config.auth.header_value()?)
            .header(header::USER_AGENT, self.config.user_agent.as_str());

        if let Some(payload) = body {
            let bytes = serde_json::to_vec(payload)?;
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(bytes);
        }

        Ok(builder.build()?)
    }

    /// Sends `request` once and captures the envelope. Non-2xx statuses are
    /// turned into [`Error::ApiError`] with the envelope attached.
    pub async fn call(&self, request: Request) -> Result<ResponseScheme> {
        let method = request.method().to_string();
        let endpoint = request.url().to_string();
        tracing::debug!(%method, %endpoint, "sending Jira request");

        let response = self.client.execute(request).await?;
        let code = response.status().as_u16();
        let bytes = response.bytes().await?.to_vec();

        let envelope = ResponseScheme {
            code,
            endpoint,
            method,
            bytes,
        };
        tracing::debug!(status = code, size = envelope.bytes.len(), "received Jira response");

        if !envelope.is_success() {
            let message = extract_error_message(&envelope);
            tracing::warn!(
                status = code,
                endpoint = %envelope.endpoint,
                "Jira request failed: {}",
                message
            );
            return Err(Error::ApiError {
                status: code,
                message,
                response: Box::new(envelope),
            });
        }

        Ok(envelope)
    }

    /// [`JiraClient::call`] followed by decoding the JSON body into `T`.
    pub async fn call_json<T>(&self, request: Request) -> Result<(T, ResponseScheme)>
    where
        T: DeserializeOwned,
    {
        let response = self.call(request).await?;

        match serde_json::from_slice::<T>(&response.bytes) {
            Ok(data) => Ok((data, response)),
            Err(source) => {
                tracing::warn!(endpoint = %response.endpoint, "failed to decode Jira response: {}", source);
                Err(Error::ResponseDecoding {
                    source,
                    response: Box::new(response),
                })
            }
        }
    }

    pub(crate) async fn get_json<T>(&self, endpoint: &str) -> Result<(T, ResponseScheme)>
    where
        T: DeserializeOwned,
    {
        let request = self.new_request(Method::GET, endpoint, NO_PAYLOAD)?;
        self.call_json(request).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<(T, ResponseScheme)>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.new_request(method, endpoint, Some(body))?;
        self.call_json(request).await
    }
}

/// Flattens Jira's `{"errorMessages": [...], "errors": {...}}` body into one
/// line, falling back to the raw body.
fn extract_error_message(response: &ResponseScheme) -> String {
    let mut messages = Vec::new();

    if let Ok(value) = serde_json::from_slice::<Value>(&response.bytes) {
        if let Some(list) = value.get("errorMessages").and_then(Value::as_array) {
            messages.extend(list.iter().filter_map(Value::as_str).map(str::to_string));
        }
        if let Some(fields) = value.get("errors").and_then(Value::as_object) {
            for (field, detail) in fields {
                match detail.as_str() {
                    Some(text) => messages.push(format!("{}: {}", field, text)),
                    None => messages.push(format!("{}: {}", field, detail)),
                }
            }
        }
    }

    if !messages.is_empty() {
        return messages.join("; ");
    }

    if response.is_empty() {
        format!(
            "request failed. Please analyze the request body for more details. Status Code: {}",
            response.code
        )
    } else {
        response.body_text()
    }
}
