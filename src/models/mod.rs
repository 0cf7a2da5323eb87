//! Data models for the UserHub API.
//!
//! - [`primitives`] - Identifier newtypes like `UserId`
//! - [`user`] - User, job-title and page records

pub mod primitives;
pub mod user;

pub use primitives::*;
pub use user::*;
