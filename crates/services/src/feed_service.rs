use std::env;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use feed_core::model::{Post, PostError, PostId};

use crate::error::FeedError;
use crate::post_source::PostSource;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the HTTP feed client.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    pub base_url: String,
}

impl FeedConfig {
    /// Reads `GLIMPSE_API_URL`. Returns `None` when unset or blank, which
    /// leaves the client disabled rather than pointed at a bogus host.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("GLIMPSE_API_URL").ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        Some(Self { base_url })
    }
}

/// Feed client for the read-only `/posts` endpoint.
#[derive(Clone)]
pub struct HttpPostSource {
    client: Client,
    config: Option<FeedConfig>,
}

impl HttpPostSource {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(FeedConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<FeedConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    /// Fetch the feed.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::MissingBaseUrl` when unconfigured, `HttpStatus`
    /// for non-success responses, and `Post` when a record fails domain
    /// validation.
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError> {
        let config = self.config.as_ref().ok_or(FeedError::MissingBaseUrl)?;
        let url = format!("{}/posts", config.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FeedError::HttpStatus(response.status()));
        }

        let records: Vec<PostRecord> = response.json().await?;
        let posts = records
            .into_iter()
            .map(PostRecord::into_post)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(posts)
    }
}

/// Wire shape of one post as served by the feed API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostRecord {
    id: String,
    name: String,
    avatar: String,
    image: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    likes: u64,
    #[serde(default)]
    comments: u64,
    #[serde(default)]
    liked: bool,
    #[serde(default)]
    saved: bool,
    created_at: DateTime<Utc>,
}

impl PostRecord {
    fn into_post(self) -> Result<Post, PostError> {
        Post::new(
            PostId::new(self.id),
            self.name,
            &self.avatar,
            &self.image,
            self.location,
            self.description,
            self.likes,
            self.comments,
            self.liked,
            self.saved,
            self.created_at,
        )
    }
}
