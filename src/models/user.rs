//! User and job-title records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::primitives::{JobTitleId, UserId};

/// A user record.
///
/// Only `id` and `email` are typed. Every other field the backend sends
/// (name, organization, role, status, publish flag, skills, job title, ...)
/// is kept in [`extra`](Self::extra) and sent back unchanged, so records
/// round-trip without this crate knowing the backend's full schema. A
/// missing or `null` email stays absent when the record is sent back.
///
/// `id` and `email` are reserved: [`with_field`](Self::with_field) routes
/// them to the typed fields, and they should not be inserted into `extra`
/// directly.
///
/// # Example
///
/// ```
/// use userhub_rs::models::User;
///
/// let user = User::new("ada@example.org")
///     .with_field("firstName", "Ada")
///     .with_field("role", "VOLUNTEER");
/// assert!(user.id.is_none());
/// assert_eq!(user.field("role").and_then(|v| v.as_str()), Some("VOLUNTEER"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identifier; absent until the backend has created the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Remaining backend fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// A new, not yet created user.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: None,
            email: Some(email.into()),
            extra: Map::new(),
        }
    }

    /// Set the identifier.
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set a backend field.
    ///
    /// `id` and `email` land in the typed fields; a value of the wrong JSON
    /// type (or `null`) clears them. Any other name is stored in `extra`.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match name.as_str() {
            "id" => self.id = value.as_u64().map(UserId::new),
            "email" => self.email = value.as_str().map(String::from),
            _ => {
                self.extra.insert(name, value);
            }
        }
        self
    }

    /// The email address, if the record has one.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Read an untyped backend field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

/// A job title from the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTitle {
    /// Identifier, usable as a search filter
    pub id: JobTitleId,
    /// Remaining backend fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobTitle {
    /// Read an untyped backend field such as `name`.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

/// One page of search results.
///
/// Accepts both `{data, totalItems}` and the Spring page shape
/// `{content, totalElements}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    /// Users on this page
    #[serde(default, alias = "content")]
    pub data: Vec<User>,
    /// Number of matching users across all pages
    #[serde(default, alias = "totalElements")]
    pub total_items: u64,
}

/// A response whose body is treated as opaque text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResponse {
    /// HTTP status code
    pub status: u16,
    /// `Content-Type` header, if any
    pub content_type: Option<String>,
    /// Response body
    pub body: String,
}
