use std::collections::BTreeSet;

use dioxus::prelude::*;

use feed_core::model::{Post, Story};

use crate::context::AppContext;
use crate::views::post::PostCard;
use crate::views::stories::StoriesRail;
use crate::views::story_viewer::StoryViewer;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{StoryViewerVm, map_post_cards, map_story_rings};

#[component]
pub fn FeedView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let viewport = ctx.viewport();
    let posts_source = ctx.posts();

    // Viewed stories live with the feed, not the viewer: rings stay dimmed
    // across viewer sessions until the feed itself is rebuilt.
    let viewed = use_signal(BTreeSet::<usize>::new);
    let mut viewer = use_signal(|| None::<StoryViewerVm>);

    let resource = use_resource(move || {
        let posts = posts_source.clone();
        async move {
            posts
                .fetch_posts()
                .await
                .map_err(|_| ViewError::FeedUnavailable)
        }
    });
    let state = view_state_from_resource(&resource);

    let open_viewer = use_callback(move |(stories, index): (Vec<Story>, usize)| {
        if let Ok(vm) = StoryViewerVm::open(stories, index, viewport, clock) {
            viewer.set(Some(vm));
        }
    });

    let on_refresh = {
        let mut resource = resource;
        use_callback(move |()| resource.restart())
    };

    rsx! {
        div { class: "feed",
            header { class: "feed-header",
                button { class: "feed-icon", aria_label: "camera", "📷" }
                span { class: "feed-title", "GLIMPSE" }
                div { class: "feed-header-right",
                    button {
                        class: "feed-icon",
                        aria_label: "refresh",
                        onclick: move |_| on_refresh.call(()),
                        "↻"
                    }
                    button { class: "feed-icon", aria_label: "messages", "✈" }
                }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    div { class: "feed-loading", p { "Loading feed…" } }
                },
                ViewState::Ready(posts) => rsx! {
                    FeedBody { posts, viewed, open_viewer }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "feed-error",
                        p { "{err.message()}" }
                        button { class: "feed-retry", onclick: move |_| on_refresh.call(()), "Retry" }
                    }
                },
            }

            if viewer.read().is_some() {
                StoryViewer { viewer, viewed }
            }
        }
    }
}

#[component]
fn FeedBody(
    posts: Vec<Post>,
    viewed: Signal<BTreeSet<usize>>,
    open_viewer: Callback<(Vec<Story>, usize)>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let stories = Story::rail_from_posts(&posts);
    let rings = map_story_rings(&stories, &viewed.read());
    let cards = map_post_cards(&posts, ctx.clock().now());

    rsx! {
        if !rings.is_empty() {
            StoriesRail {
                rings,
                on_open: move |index| open_viewer.call((stories.clone(), index)),
            }
        }
        div { class: "post-list",
            for card in cards {
                PostCard { key: "{card.id}", card: card.clone() }
            }
        }
    }
}
