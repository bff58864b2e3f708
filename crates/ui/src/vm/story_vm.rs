use feed_core::Clock;
use feed_core::engine::{Effect, Event, SessionError, StorySession, StoryTiming, Viewport};
use feed_core::model::Story;
use services::media;

use crate::vm::time_fmt::format_post_date;

/// What one dispatch asked the embedder to do.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// Indices to add to the feed's viewed-set (idempotent inserts).
    pub viewed: Vec<usize>,
    /// The session finished its exit animation; drop the viewer.
    pub closed: bool,
}

/// Pure render snapshot of the viewer, taken once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerFrame {
    pub bars: Vec<f32>,
    pub current_index: usize,
    pub paused: bool,
    pub image_ready: bool,
    pub offset: f32,
    pub opacity: f32,
    pub name: String,
    pub avatar: String,
    pub image: String,
    pub timestamp: String,
}

/// Bridges the playback engine to the story viewer component.
///
/// Owns the ordered story list for one session plus the engine session over
/// it; the component forwards raw events here and renders from
/// [`ViewerFrame`] snapshots.
#[derive(Clone, Debug)]
pub struct StoryViewerVm {
    stories: Vec<Story>,
    session: StorySession,
    clock: Clock,
    fallback_image: Option<(usize, String)>,
}

impl StoryViewerVm {
    /// Open the viewer over `stories` starting at `initial_index`.
    ///
    /// # Errors
    ///
    /// Propagates the engine's fail-fast validation of the list and index.
    pub fn open(
        stories: Vec<Story>,
        initial_index: usize,
        viewport: Viewport,
        clock: Clock,
    ) -> Result<Self, SessionError> {
        let session = StorySession::open(
            stories.len(),
            initial_index,
            viewport,
            StoryTiming::default(),
            clock.now(),
        )?;
        Ok(Self {
            stories,
            session,
            clock,
            fallback_image: None,
        })
    }

    /// Forward a raw event into the engine.
    pub fn dispatch(&mut self, event: Event) -> DispatchOutcome {
        let now = self.clock.now();
        let mut outcome = DispatchOutcome::default();
        for effect in self.session.dispatch(event, now) {
            match effect {
                Effect::StoryViewed(index) => outcome.viewed.push(index),
                Effect::Closed => outcome.closed = true,
            }
        }
        outcome
    }

    /// Animation heartbeat; the component calls this from its tick loop.
    pub fn tick(&mut self) -> DispatchOutcome {
        self.dispatch(Event::Tick)
    }

    /// The current image failed to load: substitute a deterministic fallback
    /// and keep playback gated until it reports ready.
    pub fn image_failed(&mut self) -> DispatchOutcome {
        let index = self.session.current_index();
        let name = self.stories[index].name().to_string();
        self.fallback_image = Some((index, media::alternative_story_image(&name)));
        self.dispatch(Event::ImageFailed)
    }

    #[must_use]
    pub fn frame(&self) -> ViewerFrame {
        let index = self.session.current_index();
        let story = &self.stories[index];
        ViewerFrame {
            bars: self.session.progress_values().to_vec(),
            current_index: index,
            paused: self.session.is_paused(),
            image_ready: self.session.is_image_ready(),
            offset: self.session.offset(),
            opacity: self.session.opacity(),
            name: story.name().to_string(),
            avatar: media::avatar_url(story.avatar().as_str(), story.name()),
            image: self.image_url(),
            timestamp: format_post_date(story.created_at(), self.clock.now()),
        }
    }

    fn image_url(&self) -> String {
        let index = self.session.current_index();
        if let Some((failed_index, fallback)) = &self.fallback_image {
            if *failed_index == index {
                return fallback.clone();
            }
        }
        let story = &self.stories[index];
        media::story_image_url(story.image().as_str(), story.name())
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.session.is_closed()
    }

    #[cfg(test)]
    pub(crate) fn advance_clock_ms(&mut self, ms: i64) {
        self.clock.advance_ms(ms);
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &StorySession {
        &self.session
    }
}
