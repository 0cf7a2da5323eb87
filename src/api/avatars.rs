//! Avatar service.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use crate::client::{ClientInner, Headers};
use crate::models::{TextResponse, UserId};
use crate::{Error, Result};

/// Service for user avatars.
///
/// Avatars travel as opaque text (for example base64 image data); this
/// service does not interpret them.
///
/// # Example
///
/// ```no_run
/// use userhub_rs::UserId;
///
/// # async fn example(client: userhub_rs::UserHubClient) -> userhub_rs::Result<()> {
/// let id = UserId::new(7);
/// client
///     .avatars()
///     .set_from_url(id, "https://cdn.example.org/ada.png")
///     .await?;
///
/// let avatar = client.avatars().fetch(id).await?;
/// println!("{} bytes of avatar data", avatar.body.len());
/// # Ok(())
/// # }
/// ```
pub struct AvatarsService {
    inner: Arc<ClientInner>,
}

impl AvatarsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch a user's avatar.
    pub async fn fetch(&self, id: UserId) -> Result<TextResponse> {
        let id = id.ensure_positive()?;
        self.inner
            .text(self.inner.request(Method::GET, avatar_path(id), Headers::Plain))
            .await
    }

    /// Upload a multipart form as the user's avatar. Requires a bearer token.
    pub async fn upload(&self, id: UserId, form: Form) -> Result<TextResponse> {
        let id = id.ensure_positive()?;
        self.inner
            .text(
                self.inner
                    .request(Method::POST, avatar_path(id), Headers::Authorized)
                    .map(|r| r.multipart(form)),
            )
            .await
    }

    /// Upload raw image bytes as a single `file` form part.
    /// Requires a bearer token.
    pub async fn upload_image(
        &self,
        id: UserId,
        file_name: impl Into<String>,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<TextResponse> {
        let part = Part::bytes(bytes)
            .file_name(file_name.into())
            .mime_str(mime_type)
            .map_err(|_| Error::InvalidInput(format!("Invalid MIME type: {}", mime_type)))?;

        self.upload(id, Form::new().part("file", part)).await
    }

    /// Point the user's avatar at an image URL. Requires a bearer token.
    ///
    /// The URL travels as the `imgUrl` query parameter; the body is empty.
    pub async fn set_from_url(&self, id: UserId, img_url: &str) -> Result<TextResponse> {
        let id = id.ensure_positive()?;
        self.inner
            .text(
                self.inner
                    .request(Method::PUT, avatar_path(id), Headers::Authorized)
                    .map(|r| r.query(&[("imgUrl", img_url)]).body("")),
            )
            .await
    }
}

fn avatar_path(id: UserId) -> [String; 2] {
    [id.to_string(), "avatar".to_string()]
}
