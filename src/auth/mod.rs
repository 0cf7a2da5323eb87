//! Credentials for authorized UserHub calls.
//!
//! Creating, updating and deleting users, and changing avatars, require a
//! bearer token. The client never stores that token: it asks a
//! [`TokenProvider`] on every authorized request.
//!
//! ```no_run
//! use userhub_rs::{ClientConfig, UserHubClient};
//! use userhub_rs::auth::FileTokenStore;
//!
//! # fn example() -> userhub_rs::Result<()> {
//! let client = UserHubClient::new(
//!     ClientConfig::new("https://users.example.org")?,
//!     FileTokenStore::new("/home/me/.config/userhub/storage.json"),
//! )?;
//! # Ok(())
//! # }
//! ```

mod provider;

pub use provider::{
    EnvToken, FileTokenStore, SharedToken, StaticToken, TokenProvider, DEFAULT_TOKEN_KEY,
};
pub(crate) use provider::bearer_value;
