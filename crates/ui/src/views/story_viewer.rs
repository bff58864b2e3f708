use std::collections::BTreeSet;

use dioxus::prelude::*;

use feed_core::engine::Event as EngineEvent;

use crate::vm::{DispatchOutcome, StoryViewerVm};

/// Full-screen story viewer overlay.
///
/// The component is a thin shell: it forwards raw pointer and image events
/// into [`StoryViewerVm`], drives the engine with a ~60 fps heartbeat while
/// mounted, and renders pure frame snapshots. Closing clears the `viewer`
/// signal, which unmounts the overlay.
#[component]
pub(crate) fn StoryViewer(
    viewer: Signal<Option<StoryViewerVm>>,
    viewed: Signal<BTreeSet<usize>>,
) -> Element {
    let apply = use_callback(move |outcome: DispatchOutcome| {
        let mut viewer = viewer;
        let mut viewed = viewed;
        if !outcome.viewed.is_empty() {
            let mut set = viewed.write();
            for index in outcome.viewed {
                set.insert(index);
            }
        }
        if outcome.closed {
            viewer.set(None);
        }
    });

    let dispatch = use_callback(move |event: EngineEvent| {
        let mut viewer = viewer;
        let outcome = viewer.write().as_mut().map(|vm| vm.dispatch(event));
        if let Some(outcome) = outcome {
            apply.call(outcome);
        }
    });

    let on_image_error = use_callback(move |()| {
        let mut viewer = viewer;
        let outcome = viewer.write().as_mut().map(StoryViewerVm::image_failed);
        if let Some(outcome) = outcome {
            apply.call(outcome);
        }
    });

    // Heartbeat while the viewer is mounted. Timing itself lives in the
    // engine's clock, so tick cadence only affects render smoothness.
    use_future(move || async move {
        let mut viewer = viewer;
        let mut ticker = tokio::time::interval(std::time::Duration::from_millis(16));
        loop {
            ticker.tick().await;
            let outcome = match viewer.write().as_mut() {
                Some(vm) => vm.tick(),
                None => break,
            };
            apply.call(outcome);
        }
    });

    let Some(frame) = viewer.read().as_ref().map(StoryViewerVm::frame) else {
        return rsx! {};
    };
    let bars: Vec<(usize, f32)> = frame
        .bars
        .iter()
        .enumerate()
        .map(|(index, value)| (index, value * 100.0))
        .collect();

    rsx! {
        div { class: "story-overlay",
            div { class: "story-backdrop", style: "opacity: {frame.opacity};" }
            section {
                class: "story-stage",
                style: "transform: translateY({frame.offset}px);",
                onpointerdown: move |evt| {
                    let p = evt.data.element_coordinates();
                    dispatch.call(EngineEvent::PointerDown {
                        x: p.x as f32,
                        y: p.y as f32,
                    });
                },
                onpointermove: move |evt| {
                    let p = evt.data.element_coordinates();
                    dispatch.call(EngineEvent::PointerMove {
                        x: p.x as f32,
                        y: p.y as f32,
                    });
                },
                onpointerup: move |evt| {
                    let p = evt.data.element_coordinates();
                    dispatch.call(EngineEvent::PointerUp {
                        x: p.x as f32,
                        y: p.y as f32,
                    });
                },

                div { class: "story-progress",
                    for (index, width) in bars {
                        div { key: "{index}", class: "story-bar",
                            div {
                                class: "story-bar-fill",
                                style: "width: {width}%;",
                            }
                        }
                    }
                }

                header { class: "story-header",
                    div { class: "story-user",
                        img { class: "story-avatar", src: "{frame.avatar}" }
                        div { class: "story-user-text",
                            span { class: "story-username", "{frame.name}" }
                            span { class: "story-timestamp", "{frame.timestamp}" }
                        }
                    }
                    button {
                        class: "story-close",
                        aria_label: "close",
                        onclick: move |_| dispatch.call(EngineEvent::CloseRequested),
                        "✕"
                    }
                }

                div { class: "story-content",
                    img {
                        class: "story-image",
                        src: "{frame.image}",
                        onload: move |_| dispatch.call(EngineEvent::ImageLoaded),
                        onerror: move |_| on_image_error.call(()),
                    }
                    if !frame.image_ready {
                        div { class: "story-loading", span { "Loading…" } }
                    }
                    if frame.paused && frame.image_ready {
                        div { class: "story-paused",
                            span { class: "story-paused-icon", "▶" }
                        }
                    }
                }
            }
        }
    }
}
