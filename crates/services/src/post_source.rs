use async_trait::async_trait;

use feed_core::model::Post;

use crate::error::FeedError;

/// Read-only source of the ordered post feed.
///
/// The UI only ever reads the feed; likes and saves are view-local and
/// never written back.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError>;
}

/// Fixed in-memory source, for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticPostSource {
    posts: Vec<Post>,
}

impl StaticPostSource {
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl PostSource for StaticPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError> {
        Ok(self.posts.clone())
    }
}
