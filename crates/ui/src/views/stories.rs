use dioxus::prelude::*;

use services::media;

use crate::vm::StoryRingVm;

/// Horizontal rail of story rings above the feed.
#[component]
pub(crate) fn StoriesRail(rings: Vec<StoryRingVm>, on_open: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "stories-rail",
            for ring in rings {
                StoryRing { key: "{ring.index}", ring: ring.clone(), on_open }
            }
        }
    }
}

#[component]
fn StoryRing(ring: StoryRingVm, on_open: EventHandler<usize>) -> Element {
    let mut failed = use_signal(|| false);
    let mut loaded = use_signal(|| false);

    let src = if failed() {
        media::alternative_avatar(&ring.name)
    } else {
        ring.avatar.clone()
    };
    let index = ring.index;

    rsx! {
        button { class: "story-item", onclick: move |_| on_open.call(index),
            div {
                class: if ring.viewed { "story-ring viewed" } else { "story-ring" },
                img {
                    class: if loaded() { "story-ring-avatar loaded" } else { "story-ring-avatar" },
                    src: "{src}",
                    onload: move |_| loaded.set(true),
                    onerror: move |_| {
                        failed.set(true);
                        loaded.set(false);
                    },
                }
            }
            span { class: "story-item-name", "{ring.first_name}" }
        }
    }
}
