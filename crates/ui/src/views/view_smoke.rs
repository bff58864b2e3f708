use std::sync::Arc;

use feed_core::model::{Post, Story};
use services::{FeedError, PostSource};

use super::test_harness::{
    sample_posts, setup_feed_harness, setup_feed_harness_with_source, setup_viewer_harness,
};

struct FailingPostSource;

#[async_trait::async_trait]
impl PostSource for FailingPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError> {
        Err(FeedError::MissingBaseUrl)
    }
}

#[tokio::test(flavor = "current_thread")]
async fn feed_smoke_shows_loading_before_posts_arrive() {
    let mut harness = setup_feed_harness(sample_posts());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading feed"), "missing loading state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn feed_smoke_renders_posts_and_rail() {
    let mut harness = setup_feed_harness(sample_posts());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("GLIMPSE"), "missing wordmark in {html}");
    assert!(html.contains("Ada Lovelace"), "missing author in {html}");
    assert!(html.contains("stories-rail"), "missing rail in {html}");
    assert!(html.contains("1.2K likes"), "missing like count in {html}");
    assert!(
        html.contains("View all 12 comments"),
        "missing comments link in {html}"
    );

    // Three posts, two unique authors: exactly two rings.
    assert_eq!(
        html.matches("story-item-name").count(),
        2,
        "rail should dedupe authors in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn feed_smoke_surfaces_fetch_errors_with_retry() {
    let mut harness = setup_feed_harness_with_source(Arc::new(FailingPostSource));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("load the feed"), "missing error copy in {html}");
    assert!(html.contains("Retry"), "missing retry button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn feed_smoke_renders_timestamps() {
    let mut harness = setup_feed_harness(sample_posts());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("now"), "missing relative date in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_renders_bars_header_and_loading() {
    let stories = Story::rail_from_posts(&sample_posts());
    let mut harness = setup_viewer_harness(stories, 0);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("story-overlay"), "missing overlay in {html}");
    assert!(html.contains("Ada Lovelace"), "missing header name in {html}");
    assert!(html.contains("Loading"), "missing load gate in {html}");
    // One bar per story in the session.
    assert_eq!(html.matches("story-bar-fill").count(), 2, "bad bar count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_opens_at_requested_index() {
    let stories = Story::rail_from_posts(&sample_posts());
    let mut harness = setup_viewer_harness(stories, 1);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Grace Hopper"), "missing second author in {html}");
    // The earlier story's bar opens already full.
    assert!(html.contains("width: 100%"), "missing completed bar in {html}");
}
