use std::sync::Arc;

use feed_core::Clock;
use feed_core::engine::Viewport;
use services::PostSource;

/// What the composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    /// Host viewport, queried once at launch. Drives the story viewer's tap
    /// zones and dismissal travel.
    fn viewport(&self) -> Viewport;
    fn posts(&self) -> Arc<dyn PostSource>;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    viewport: Viewport,
    posts: Arc<dyn PostSource>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            viewport: app.viewport(),
            posts: app.posts(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn posts(&self) -> Arc<dyn PostSource> {
        Arc::clone(&self.posts)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
