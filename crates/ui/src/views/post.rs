use dioxus::prelude::*;

use services::media;

use crate::vm::{PostCardVm, format_count};

#[component]
pub(crate) fn PostCard(card: PostCardVm) -> Element {
    rsx! {
        article { class: "post",
            PostHeader {
                name: card.name.clone(),
                avatar: card.avatar.clone(),
                location: card.location.clone(),
            }
            PostImage { image: card.image.clone() }
            PostInteractions {
                liked: card.liked,
                saved: card.saved,
                likes: card.likes,
                comments: card.comments,
            }
            PostFooter {
                name: card.name.clone(),
                description: card.description.clone(),
                created_label: card.created_label.clone(),
            }
        }
    }
}

#[component]
fn PostHeader(name: String, avatar: String, location: String) -> Element {
    let mut failed = use_signal(|| false);
    let mut loaded = use_signal(|| false);

    let src = if failed() {
        media::alternative_avatar(&name)
    } else {
        avatar.clone()
    };

    rsx! {
        header { class: "post-header",
            div { class: "post-user",
                div { class: "avatar-wrap",
                    if !loaded() {
                        div { class: "avatar-shimmer" }
                    }
                    img {
                        class: if loaded() { "avatar loaded" } else { "avatar" },
                        src: "{src}",
                        onload: move |_| loaded.set(true),
                        onerror: move |_| {
                            failed.set(true);
                            loaded.set(false);
                        },
                    }
                }
                div { class: "post-user-text",
                    span { class: "post-username", "{name}" }
                    span { class: "post-location", "{location}" }
                }
            }
            button { class: "post-options", aria_label: "options", "⋯" }
        }
    }
}

#[component]
fn PostImage(image: String) -> Element {
    let initial = image.clone();
    let mut src = use_signal(move || initial);
    let mut attempts = use_signal(|| 0_u32);
    let mut loaded = use_signal(|| false);
    let mut errored = use_signal(|| false);

    let original = image;
    let on_error = move |_| {
        if attempts() < 2 {
            attempts += 1;
            loaded.set(false);
            src.set(media::post_image_url(&original, media::random_seed()));
        } else {
            errored.set(true);
        }
    };

    rsx! {
        div { class: "post-image-wrap",
            if errored() {
                div { class: "post-image-error",
                    span { "Image not available" }
                }
            } else {
                img {
                    class: if loaded() { "post-image loaded" } else { "post-image" },
                    src: "{src}",
                    onload: move |_| loaded.set(true),
                    onerror: on_error,
                }
            }
        }
    }
}

#[component]
fn PostInteractions(liked: bool, saved: bool, likes: u64, comments: u64) -> Element {
    let mut is_liked = use_signal(|| liked);
    let mut is_saved = use_signal(|| saved);
    let mut likes_count = use_signal(|| likes);

    let toggle_like = move |_| {
        let current = likes_count();
        if is_liked() {
            likes_count.set(current.saturating_sub(1));
        } else {
            likes_count.set(current.saturating_add(1));
        }
        is_liked.toggle();
    };

    rsx! {
        div { class: "post-actions",
            div { class: "post-actions-row",
                div { class: "post-actions-left",
                    button {
                        class: if is_liked() { "action like liked" } else { "action like" },
                        aria_label: "like",
                        onclick: toggle_like,
                        if is_liked() { "♥" } else { "♡" }
                    }
                    button { class: "action", aria_label: "comment", "💬" }
                    button { class: "action", aria_label: "share", "✈" }
                }
                button {
                    class: if is_saved() { "action save saved" } else { "action save" },
                    aria_label: "save",
                    onclick: move |_| is_saved.toggle(),
                    "🔖"
                }
            }
            div { class: "post-stats",
                span { class: "post-likes", "{format_count(likes_count())} likes" }
                if comments > 0 {
                    button { class: "post-comments-link",
                        "View all {format_count(comments)} comments"
                    }
                }
            }
        }
    }
}

#[component]
fn PostFooter(name: String, description: String, created_label: String) -> Element {
    rsx! {
        footer { class: "post-footer",
            p { class: "post-caption",
                span { class: "post-username", "{name}" }
                " "
                span { "{description}" }
            }
            span { class: "post-timestamp", "{created_label}" }
        }
    }
}
