//! Access-token providers.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use secrecy::{ExposeSecret, SecretString};

/// Storage key the web frontend uses for the bearer token.
pub const DEFAULT_TOKEN_KEY: &str = "access_token";

/// Source of the bearer token attached to authorized requests.
///
/// The client asks the provider on every authorized call and never keeps
/// the token itself, so a provider backed by mutable storage sees logins
/// and logouts immediately.
pub trait TokenProvider: Send + Sync {
    /// The current access token, or `None` if nothing is stored.
    fn access_token(&self) -> Option<SecretString>;
}

/// Build the `Authorization` header value for an optional token.
///
/// A missing token renders as `Bearer null` rather than dropping the header;
/// the backend answers such requests with 401.
pub(crate) fn bearer_value(token: Option<&SecretString>) -> String {
    match token {
        Some(token) => format!("Bearer {}", token.expose_secret()),
        None => "Bearer null".to_string(),
    }
}

/// A blank stored value counts as no token, so it renders `Bearer null`
/// instead of a bare `Bearer `.
fn stored_token(raw: String) -> Option<SecretString> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(SecretString::from(raw))
    }
}

/// A fixed token, or no token at all.
#[derive(Clone, Default)]
pub struct StaticToken(Option<SecretString>);

impl StaticToken {
    /// Always return `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(SecretString::from(token.into())))
    }

    /// Never return a token.
    pub fn none() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    fn access_token(&self) -> Option<SecretString> {
        self.0.clone()
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticToken")
            .field(&self.0.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// An in-memory token slot shared between the client and whatever performs
/// login.
///
/// Clones share the same slot.
///
/// ```
/// use userhub_rs::auth::{SharedToken, TokenProvider};
///
/// let slot = SharedToken::empty();
/// assert!(slot.access_token().is_none());
/// slot.set("abc");
/// assert!(slot.access_token().is_some());
/// ```
#[derive(Clone, Default)]
pub struct SharedToken {
    slot: Arc<RwLock<Option<SecretString>>>,
}

impl SharedToken {
    /// Create an empty slot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store a new token.
    pub fn set(&self, token: impl Into<String>) {
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(SecretString::from(token.into()));
    }

    /// Forget the stored token.
    pub fn clear(&self) {
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }
}

impl TokenProvider for SharedToken {
    fn access_token(&self) -> Option<SecretString> {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl fmt::Debug for SharedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedToken")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Reads the token from an environment variable on every call.
///
/// An unset or blank variable means no token.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    /// Read the token from `var`.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl TokenProvider for EnvToken {
    fn access_token(&self) -> Option<SecretString> {
        std::env::var(&self.var).ok().and_then(stored_token)
    }
}

/// Persistent key-value token store: a JSON object file read on every call.
///
/// A missing file, missing key or blank value means no token.
///
/// ```json
/// { "access_token": "eyJhbGciOi..." }
/// ```
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
    key: String,
}

impl FileTokenStore {
    /// Look up [`DEFAULT_TOKEN_KEY`] in the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_key(path, DEFAULT_TOKEN_KEY)
    }

    /// Look up `key` in the file at `path`.
    pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    fn read(&self) -> Option<SecretString> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "token store unreadable");
                return None;
            }
        };

        let store: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(store) => store,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "token store is not valid JSON");
                return None;
            }
        };

        let token = store
            .get(&self.key)
            .and_then(|v| v.as_str())
            .map(String::from)
            .and_then(stored_token);
        if token.is_none() {
            tracing::debug!(path = %self.path.display(), key = %self.key, "no token stored");
        }
        token
    }
}

impl TokenProvider for FileTokenStore {
    fn access_token(&self) -> Option<SecretString> {
        self.read()
    }
}
