//! # userhub-rs
//!
//! An async Rust client for the UserHub user-management REST API.
//!
//! The crate covers the whole `/api/users` resource: listing, searching,
//! creating, updating and deleting users, avatar upload and retrieval, and
//! the job-title lookup.
//!
//! ## Features
//!
//! - **Typed calls**: one method per endpoint, strongly-typed identifiers
//! - **Pass-through records**: unknown user fields round-trip untouched
//! - **Injected credentials**: bearer tokens come from a [`auth::TokenProvider`]
//!   read on every authorized call
//! - **Structured errors**: network, status and parse failures are distinct
//!   [`Error`] variants, each logged once through `tracing`
//! - **Lazy paging**: search results as a `Stream` that fetches pages on demand
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use userhub_rs::{ClientConfig, UserHubClient, UserId};
//! use userhub_rs::api::UserSearch;
//! use userhub_rs::auth::SharedToken;
//!
//! #[tokio::main]
//! async fn main() -> userhub_rs::Result<()> {
//!     let token = SharedToken::empty();
//!     let client = UserHubClient::new(
//!         ClientConfig::new("https://users.example.org")?,
//!         token.clone(),
//!     )?;
//!
//!     // Anonymous lookups
//!     let user = client.users().get(UserId::new(7)).await?;
//!     println!("{}", user.email().unwrap_or("-"));
//!
//!     let page = client
//!         .users()
//!         .search(&UserSearch::new().keyword("rust").page(1).size(10))
//!         .await?;
//!     println!("{} of {} users", page.data.len(), page.total_items);
//!
//!     // Authorized calls pick up the token at call time
//!     token.set("eyJhbGciOi...");
//!     client.users().delete(UserId::new(7)).await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, ErrorKind, Result};
pub use models::{CountryId, JobTitleId, OrganizationId, UserId};
pub use client::{ClientConfig, UserHubClient};

/// Prelude module for convenient imports.
///
/// ```rust
/// use userhub_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::UserSearch;
    pub use crate::auth::{EnvToken, FileTokenStore, SharedToken, StaticToken, TokenProvider};
    pub use crate::client::{ClientConfig, PaginatedStream, UserHubClient};
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::models::{
        CountryId, JobTitle, JobTitleId, OrganizationId, TextResponse, User, UserId, UserPage,
    };
}
