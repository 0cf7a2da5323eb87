//! Users service.

use std::sync::Arc;

use reqwest::Method;

use crate::client::paginated::{Page, PaginatedStream, DEFAULT_PAGE_SIZE};
use crate::client::{ClientInner, Headers, QueryParams};
use crate::models::{CountryId, JobTitleId, OrganizationId, TextResponse, User, UserId, UserPage};
use crate::{Error, Result};

/// Service for user records.
///
/// # Example
///
/// ```no_run
/// use userhub_rs::api::UserSearch;
/// use userhub_rs::models::User;
///
/// # async fn example(client: userhub_rs::UserHubClient) -> userhub_rs::Result<()> {
/// let created = client
///     .users()
///     .create(&User::new("ada@example.org").with_field("firstName", "Ada"))
///     .await?;
///
/// let page = client
///     .users()
///     .search(&UserSearch::new().keyword("ada").page(1).size(10))
///     .await?;
/// println!("{} matches", page.total_items);
/// # Ok(())
/// # }
/// ```
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List every user.
    pub async fn list(&self) -> Result<Vec<User>> {
        self.inner
            .json(self.inner.request(Method::GET, NO_SEGMENTS, Headers::Plain))
            .await
    }

    /// Get a user by id.
    pub async fn get(&self, id: UserId) -> Result<User> {
        let id = id.ensure_positive()?;
        self.inner
            .json(self.inner.request(Method::GET, [id.to_string()], Headers::Json))
            .await
    }

    /// Get a user by email address.
    pub async fn get_by_email(&self, email: &str) -> Result<User> {
        if email.is_empty() {
            return Err(Error::InvalidInput("email must not be empty".to_string()));
        }

        self.inner
            .json(self.inner.request(Method::GET, ["email", email, ""], Headers::Plain))
            .await
    }

    /// List the users of an organization.
    pub async fn list_by_organization(&self, organization: OrganizationId) -> Result<Vec<User>> {
        let organization = organization.ensure_positive()?;
        self.inner
            .json(self.inner.request(
                Method::GET,
                ["organization".to_string(), organization.to_string()],
                Headers::Plain,
            ))
            .await
    }

    /// Search users.
    ///
    /// Pages are 1-based here; the backend is 0-based and receives
    /// `page - 1`.
    pub async fn search(&self, criteria: &UserSearch) -> Result<UserPage> {
        search(&self.inner, &criteria.to_query()).await
    }

    /// Stream every user matching `criteria`, fetching pages lazily.
    ///
    /// Any page set on `criteria` is ignored; the stream starts at the
    /// first page and uses `criteria`'s size, or [`DEFAULT_PAGE_SIZE`].
    pub fn search_stream(&self, criteria: UserSearch) -> PaginatedStream<User> {
        let size = criteria.size.filter(|s| *s > 0).unwrap_or(DEFAULT_PAGE_SIZE);
        let inner = self.inner.clone();

        PaginatedStream::new(size, move |page| {
            let inner = inner.clone();
            let query = criteria.clone().page(page + 1).size(size).to_query();
            async move {
                search(&inner, &query).await.map(|page| Page {
                    items: page.data,
                    total_items: page.total_items,
                })
            }
        })
    }

    /// Create a user. Requires a bearer token.
    pub async fn create(&self, user: &User) -> Result<User> {
        self.inner
            .json(
                self.inner
                    .request(Method::POST, NO_SEGMENTS, Headers::JsonAuthorized)
                    .map(|r| r.json(user)),
            )
            .await
    }

    /// Delete a user. Requires a bearer token.
    pub async fn delete(&self, id: UserId) -> Result<TextResponse> {
        let id = id.ensure_positive()?;
        self.inner
            .text(self.inner.request(Method::DELETE, [id.to_string()], Headers::JsonAuthorized))
            .await
    }

    /// Update a user. The record must carry its id. Requires a bearer token.
    pub async fn update(&self, user: &User) -> Result<TextResponse> {
        user.id
            .ok_or_else(|| Error::InvalidInput("cannot update a user without an id".to_string()))?
            .ensure_positive()?;

        self.inner
            .text(
                self.inner
                    .request(Method::PUT, NO_SEGMENTS, Headers::JsonAuthorized)
                    .map(|r| r.json(user)),
            )
            .await
    }
}

const NO_SEGMENTS: [&str; 0] = [];

async fn search(inner: &ClientInner, query: &QueryParams) -> Result<UserPage> {
    inner
        .json(
            inner
                .request(Method::GET, ["search"], Headers::Json)
                .map(|r| r.query(query.pairs())),
        )
        .await
}

/// Search criteria. Every filter is optional.
///
/// # Example
///
/// ```
/// use userhub_rs::api::UserSearch;
/// use userhub_rs::models::JobTitleId;
///
/// let query = UserSearch::new()
///     .job_titles([JobTitleId::new(1), JobTitleId::new(2)])
///     .page(1)
///     .to_query();
///
/// assert_eq!(query.values("jobTitles").collect::<Vec<_>>(), ["1", "2"]);
/// assert_eq!(query.values("page").collect::<Vec<_>>(), ["0"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearch {
    /// Free-text keyword
    pub keyword: Option<String>,
    /// Job titles, any of which must match
    pub job_titles: Vec<JobTitleId>,
    /// Skill names
    pub skills: Vec<String>,
    /// Countries
    pub countries: Vec<CountryId>,
    /// User status
    pub status: Option<String>,
    /// User role
    pub role: Option<String>,
    /// Publish flag
    pub publish_flag: Option<String>,
    /// 1-based page
    pub page: Option<u32>,
    /// Page size
    pub size: Option<u32>,
}

impl UserSearch {
    /// Empty criteria: matches every user.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by keyword.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Filter by job titles.
    pub fn job_titles(mut self, ids: impl IntoIterator<Item = JobTitleId>) -> Self {
        self.job_titles = ids.into_iter().collect();
        self
    }

    /// Filter by skill names.
    pub fn skills<S: Into<String>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by countries.
    pub fn countries(mut self, ids: impl IntoIterator<Item = CountryId>) -> Self {
        self.countries = ids.into_iter().collect();
        self
    }

    /// Filter by status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Filter by role.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Filter by publish flag.
    pub fn publish_flag(mut self, flag: impl Into<String>) -> Self {
        self.publish_flag = Some(flag.into());
        self
    }

    /// Request a 1-based page.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// The query string these criteria produce, in wire order.
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .text("keyWord", self.keyword.as_deref())
            .each("jobTitles", &self.job_titles)
            .each("skills", &self.skills)
            .each("countries", &self.countries)
            .text("status", self.status.as_deref())
            .text("publishFlag", self.publish_flag.as_deref())
            .text("role", self.role.as_deref())
            .number("page", self.page, |page| page - 1)
            .number("size", self.size, |size| size)
    }
}
