use chrono::{DateTime, Utc};
use url::Url;

use crate::model::Post;

/// Maximum number of entries in the stories rail.
pub const MAX_RAIL_STORIES: usize = 10;

/// One user's single timed media item within a viewing session.
///
/// Stories carry no id: their identity is their position in the session's
/// ordered list, fixed for the lifetime of that session.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    name: String,
    avatar: Url,
    image: Url,
    created_at: DateTime<Utc>,
}

impl Story {
    /// Derive a story from a feed post by the same author.
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        Self {
            name: post.name().to_string(),
            avatar: post.avatar().clone(),
            image: post.image().clone(),
            created_at: post.created_at(),
        }
    }

    /// Build the stories rail from the feed: one story per unique author,
    /// first occurrence wins, capped at [`MAX_RAIL_STORIES`].
    #[must_use]
    pub fn rail_from_posts(posts: &[Post]) -> Vec<Self> {
        let mut seen: Vec<&str> = Vec::new();
        let mut rail = Vec::new();
        for post in posts {
            if seen.contains(&post.name()) {
                continue;
            }
            seen.push(post.name());
            rail.push(Self::from_post(post));
            if rail.len() == MAX_RAIL_STORIES {
                break;
            }
        }
        rail
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First whitespace-separated word of the author name, used as the rail
    /// label.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
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
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
