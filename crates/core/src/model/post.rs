use chrono::{DateTime, Utc};
use thiserror::Error;
use url::Url;

use crate::model::PostId;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PostError {
    #[error("post author name cannot be empty")]
    EmptyName,

    #[error("invalid {field} url: {raw}")]
    InvalidMediaUrl { field: &'static str, raw: String },
}

//
// ─── POST ──────────────────────────────────────────────────────────────────────
//

/// A single feed post as served by the posts endpoint.
///
/// Immutable once constructed; like/save toggles are view-local state and do
/// not write back into the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    id: PostId,
    name: String,
    avatar: Url,
    image: Url,
    location: String,
    description: String,
    likes: u64,
    comments: u64,
    liked: bool,
    saved: bool,
    created_at: DateTime<Utc>,
}

impl Post {
    /// Validate and build a post from API-shaped fields.
    ///
    /// # Errors
    ///
    /// Returns `PostError::EmptyName` if the author name is blank and
    /// `PostError::InvalidMediaUrl` if the avatar or image reference does not
    /// parse as a URL.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PostId,
        name: impl Into<String>,
        avatar: impl AsRef<str>,
        image: impl AsRef<str>,
        location: impl Into<String>,
        description: impl Into<String>,
        likes: u64,
        comments: u64,
        liked: bool,
        saved: bool,
        created_at: DateTime<Utc>,
    ) -> Result<Self, PostError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PostError::EmptyName);
        }
        let avatar = parse_media_url("avatar", avatar.as_ref())?;
        let image = parse_media_url("image", image.as_ref())?;

        Ok(Self {
            id,
            name,
            avatar,
            image,
            location: location.into(),
            description: description.into(),
            likes,
            comments,
            liked,
            saved,
            created_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> &PostId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn avatar(&self) -> &Url {
        &self.avatar
    }

    #[must_use]
    pub fn image(&self) -> &Url {
        &self.image
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn likes(&self) -> u64 {
        self.likes
    }

    #[must_use]
    pub fn comments(&self) -> u64 {
        self.comments
    }

    #[must_use]
    pub fn liked(&self) -> bool {
        self.liked
    }

    #[must_use]
    pub fn saved(&self) -> bool {
        self.saved
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn parse_media_url(field: &'static str, raw: &str) -> Result<Url, PostError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PostError::InvalidMediaUrl {
            field,
            raw: raw.to_string(),
        });
    }
    Url::parse(trimmed).map_err(|_| PostError::InvalidMediaUrl {
        field,
        raw: raw.to_string(),
    })
}
