//! HTTP client and service layer for the UserHub API.
//!
//! This module provides the main entry point [`UserHubClient`] for
//! interacting with the UserHub API.
//!
//! # Example
//!
//! ```no_run
//! use userhub_rs::UserHubClient;
//!
//! # async fn example() -> userhub_rs::Result<()> {
//! // Reads USERHUB_BACKEND_URL, USERHUB_TIMEOUT_SECS and USERHUB_ACCESS_TOKEN
//! let client = UserHubClient::from_env()?;
//!
//! let users = client.users().list().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
pub mod query;

pub use config::{ClientConfig, BACKEND_URL_VAR, DEFAULT_BACKEND_URL, TIMEOUT_VAR};
pub use http::{UserHubClient, ACCESS_TOKEN_VAR};
pub use paginated::{Page, PaginatedStream, PaginationInfo, DEFAULT_PAGE_SIZE};
pub use query::QueryParams;
pub(crate) use http::{ClientInner, Headers};
