use std::collections::BTreeSet;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use feed_core::Clock;
use feed_core::engine::Viewport;
use feed_core::model::{Post, PostId, Story};
use feed_core::time::{fixed_clock, fixed_now};
use services::{PostSource, StaticPostSource};

use crate::context::{UiApp, build_app_context};
use crate::views::FeedView;
use crate::views::story_viewer::StoryViewer;
use crate::vm::StoryViewerVm;

const TEST_VIEWPORT: Viewport = Viewport {
    width: 400.0,
    height: 700.0,
};

#[derive(Clone)]
struct TestApp {
    clock: Clock,
    viewport: Viewport,
    posts: Arc<dyn PostSource>,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn posts(&self) -> Arc<dyn PostSource> {
        Arc::clone(&self.posts)
    }
}

#[derive(Props, Clone)]
struct FeedHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for FeedHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for FeedHarnessProps {}

#[component]
fn FeedHarness(props: FeedHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { FeedView {} }
}

#[derive(Props, Clone)]
struct ViewerHarnessProps {
    stories: Vec<Story>,
    initial: usize,
}

impl PartialEq for ViewerHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewerHarnessProps {}

#[component]
fn ViewerHarness(props: ViewerHarnessProps) -> Element {
    let stories = props.stories.clone();
    let initial = props.initial;
    let viewer = use_signal(move || {
        StoryViewerVm::open(stories, initial, TEST_VIEWPORT, fixed_clock()).ok()
    });
    let viewed = use_signal(BTreeSet::new);
    rsx! {
        StoryViewer { viewer, viewed }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_posts() -> Vec<Post> {
    let now = fixed_now();
    vec![
        Post::new(
            PostId::new("p1"),
            "Ada Lovelace",
            "https://example.com/ada.jpg",
            "https://example.com/post1.jpg",
            "London",
            "engine room",
            1234,
            12,
            false,
            false,
            now,
        )
        .expect("valid post"),
        Post::new(
            PostId::new("p2"),
            "Grace Hopper",
            "https://example.com/grace.jpg",
            "https://example.com/post2.jpg",
            "Arlington",
            "nanoseconds",
            87,
            0,
            true,
            false,
            now,
        )
        .expect("valid post"),
        // Second post by the same author: must not add a second ring.
        Post::new(
            PostId::new("p3"),
            "Ada Lovelace",
            "https://example.com/ada.jpg",
            "https://example.com/post3.jpg",
            "London",
            "notes on the engine",
            45,
            3,
            false,
            true,
            now,
        )
        .expect("valid post"),
    ]
}

pub fn setup_feed_harness(posts: Vec<Post>) -> ViewHarness {
    setup_feed_harness_with_source(Arc::new(StaticPostSource::new(posts)))
}

pub fn setup_feed_harness_with_source(posts: Arc<dyn PostSource>) -> ViewHarness {
    let app = Arc::new(TestApp {
        clock: fixed_clock(),
        viewport: TEST_VIEWPORT,
        posts,
    });
    let dom = VirtualDom::new_with_props(FeedHarness, FeedHarnessProps { app });
    ViewHarness { dom }
}

pub fn setup_viewer_harness(stories: Vec<Story>, initial: usize) -> ViewHarness {
    let dom = VirtualDom::new_with_props(ViewerHarness, ViewerHarnessProps { stories, initial });
    ViewHarness { dom }
}
