//! HTTP client implementation for the UserHub API.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

use crate::api::{AvatarsService, JobTitlesService, UsersService};
use crate::auth::{bearer_value, EnvToken, TokenProvider};
use crate::models::TextResponse;
use crate::{Error, Result};

use super::config::ClientConfig;

/// Environment variable read by [`UserHubClient::from_env`] for the token.
pub const ACCESS_TOKEN_VAR: &str = "USERHUB_ACCESS_TOKEN";

/// Path segments of the users API below the backend URL.
const USERS_PATH: [&str; 2] = ["api", "users"];

/// The main client for interacting with the UserHub API.
///
/// The client is cheap to clone; clones share one connection pool and one
/// token provider. Each API area is reached through a service handle.
///
/// # Example
///
/// ```no_run
/// use userhub_rs::{ClientConfig, UserHubClient, UserId};
/// use userhub_rs::auth::StaticToken;
///
/// # async fn example() -> userhub_rs::Result<()> {
/// let client = UserHubClient::new(
///     ClientConfig::new("https://users.example.org")?,
///     StaticToken::new("my-token"),
/// )?;
///
/// let user = client.users().get(UserId::new(7)).await?;
/// let titles = client.job_titles().list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct UserHubClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    tokens: Arc<dyn TokenProvider>,
}

impl UserHubClient {
    /// Create a client from a configuration and a token provider.
    pub fn new(config: ClientConfig, tokens: impl TokenProvider + 'static) -> Result<Self> {
        Self::with_provider(config, Arc::new(tokens))
    }

    /// Create a client sharing an existing token provider.
    pub fn with_provider(config: ClientConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                tokens,
            }),
        })
    }

    /// Create a client configured from the environment.
    ///
    /// See [`ClientConfig::from_env`]; the token is read from
    /// `USERHUB_ACCESS_TOKEN` on every authorized call.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?, EnvToken::new(ACCESS_TOKEN_VAR))
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the avatars service.
    pub fn avatars(&self) -> AvatarsService {
        AvatarsService::new(self.inner.clone())
    }

    /// Get the job titles service.
    pub fn job_titles(&self) -> JobTitlesService {
        JobTitlesService::new(self.inner.clone())
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

/// Header set attached to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Headers {
    /// Nothing beyond what reqwest adds.
    Plain,
    /// `Content-Type: application/json`.
    Json,
    /// JSON content type plus `Authorization`.
    JsonAuthorized,
    /// `Authorization` only; the body sets its own content type.
    Authorized,
}

impl ClientInner {
    /// URL of `/api/users/<segments...>` below the backend URL.
    ///
    /// Segments are percent-encoded; an empty final segment yields a
    /// trailing slash.
    pub(crate) fn users_url<I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.config.backend_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                Error::Config(format!(
                    "backend URL cannot carry a path: {}",
                    self.config.backend_url
                ))
            })?;
            path.pop_if_empty().extend(USERS_PATH);
            path.extend(segments);
        }
        Ok(url)
    }

    fn authorization(&self) -> Result<HeaderValue> {
        let token = self.tokens.access_token();
        let mut value = HeaderValue::from_str(&bearer_value(token.as_ref()))
            .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Build request headers.
    pub(crate) fn build_headers(&self, headers: Headers) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();

        if matches!(headers, Headers::Json | Headers::JsonAuthorized) {
            map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        if matches!(headers, Headers::JsonAuthorized | Headers::Authorized) {
            map.insert(AUTHORIZATION, self.authorization()?);
        }

        Ok(map)
    }

    /// Start a request to `/api/users/<segments...>` with the given header set.
    pub(crate) fn request<I>(&self, method: Method, segments: I, headers: Headers) -> Result<RequestBuilder>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let url = self.users_url(segments)?;
        tracing::debug!(%method, %url, "userhub request");
        Ok(self.http.request(method, url).headers(self.build_headers(headers)?))
    }

    /// Send a request and decode a JSON body.
    pub(crate) async fn json<T: DeserializeOwned>(&self, request: Result<RequestBuilder>) -> Result<T> {
        self.fetch_json(request?).await.map_err(handle_error)
    }

    /// Send a request and keep the body as opaque text.
    pub(crate) async fn text(&self, request: Result<RequestBuilder>) -> Result<TextResponse> {
        self.fetch_text(request?).await.map_err(handle_error)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn fetch_text(&self, request: RequestBuilder) -> Result<TextResponse> {
        let response = self.send(request).await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.text().await?;

        Ok(TextResponse {
            status,
            content_type,
            body,
        })
    }

    /// Send a request, turning non-success statuses into [`Error::Api`].
    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(Error::from_api_response(status.as_u16(), &text))
    }
}

/// Shared failure handler: every transport, status and parse failure is
/// logged here once and handed back to the caller.
fn handle_error(err: Error) -> Error {
    tracing::error!(
        kind = ?err.kind(),
        status = ?err.status(),
        message = %err.message(),
        "userhub request failed"
    );
    err
}

impl std::fmt::Debug for UserHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserHubClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
