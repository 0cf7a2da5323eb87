//! API service modules for UserHub endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the `/api/users` resource.

mod avatars;
mod job_titles;
mod users;

pub use avatars::AvatarsService;
pub use job_titles::JobTitlesService;
pub use users::{UserSearch, UsersService};
