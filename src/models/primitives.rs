//! Primitive types and newtypes for type-safe API interactions.
//!
//! The backend identifies users, organizations, job titles and countries by
//! bare numbers; these wrappers keep them from being mixed up at compile
//! time.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw identifier.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// The raw identifier.
            pub const fn get(&self) -> u64 {
                self.0
            }

            /// Fail with [`crate::Error::InvalidInput`] unless the id is non-zero.
            #[allow(dead_code)]
            pub(crate) fn ensure_positive(self) -> crate::Result<Self> {
                if self.0 == 0 {
                    return Err(crate::Error::InvalidInput(format!(
                        "{} must be a positive integer",
                        stringify!($name)
                    )));
                }
                Ok(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

numeric_id!(
    /// A user identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use userhub_rs::UserId;
    ///
    /// let id = UserId::new(7);
    /// assert_eq!(id.to_string(), "7");
    /// ```
    UserId
);

numeric_id!(
    /// An organization identifier.
    OrganizationId
);

numeric_id!(
    /// A job-title identifier, as returned by the job-title lookup.
    JobTitleId
);

numeric_id!(
    /// A country identifier used by the search filters.
    CountryId
);
