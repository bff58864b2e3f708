use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use feed_core::model::{Post, Story};

use crate::vm::time_fmt::format_post_date;

/// Render-ready card for one feed post.
///
/// Media URLs are the originals; fallback swapping happens in the image
/// components once a load actually fails.
#[derive(Clone, Debug, PartialEq)]
pub struct PostCardVm {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub image: String,
    pub location: String,
    pub description: String,
    pub likes: u64,
    pub comments: u64,
    pub liked: bool,
    pub saved: bool,
    pub created_label: String,
}

#[must_use]
pub fn map_post_cards(posts: &[Post], now: DateTime<Utc>) -> Vec<PostCardVm> {
    posts
        .iter()
        .map(|post| PostCardVm {
            id: post.id().to_string(),
            name: post.name().to_string(),
            avatar: post.avatar().to_string(),
            image: post.image().to_string(),
            location: post.location().to_string(),
            description: post.description().to_string(),
            likes: post.likes(),
            comments: post.comments(),
            liked: post.liked(),
            saved: post.saved(),
            created_label: format_post_date(post.created_at(), now),
        })
        .collect()
}

/// One ring in the stories rail.
#[derive(Clone, Debug, PartialEq)]
pub struct StoryRingVm {
    pub index: usize,
    pub name: String,
    pub first_name: String,
    pub avatar: String,
    pub viewed: bool,
}

#[must_use]
pub fn map_story_rings(stories: &[Story], viewed: &BTreeSet<usize>) -> Vec<StoryRingVm> {
    stories
        .iter()
        .enumerate()
        .map(|(index, story)| StoryRingVm {
            index,
            name: story.name().to_string(),
            first_name: story.first_name().to_string(),
            avatar: story.avatar().to_string(),
            viewed: viewed.contains(&index),
        })
        .collect()
}
