use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::engine::dismiss::DismissController;
use crate::engine::progress::ProgressTrack;
use crate::engine::router::{DragUpdate, Gesture, GestureRouter};
use crate::engine::{Effect, Event, StoryTiming, Viewport};

/// Taps left of this fraction of the viewport width go to the previous story.
pub const LEFT_TAP_ZONE: f32 = 0.25;
/// Taps right of this fraction of the viewport width go to the next story.
pub const RIGHT_TAP_ZONE: f32 = 0.75;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot open a story session with no stories")]
    EmptyStories,

    #[error("initial index {index} out of range for {len} stories")]
    IndexOutOfRange { index: usize, len: usize },
}

/// One full viewing pass through an ordered story list.
///
/// The session is the `Viewing` state of the viewer; `Idle` is simply not
/// holding one. It owns the progress cells, the dismissal transform and the
/// gesture router, and is driven exclusively through [`dispatch`].
///
/// Pause has two independent authorities, kept deliberately separate: the
/// center-tap toggle, and long-press / release-after-long-press. A
/// long-press followed immediately by a toggle tap can double-toggle; that
/// matches the observed behavior and is not reconciled here.
///
/// [`dispatch`]: StorySession::dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct StorySession {
    story_count: usize,
    current: usize,
    viewed: BTreeSet<usize>,
    paused: bool,
    image_ready: bool,
    progress: ProgressTrack,
    dismiss: DismissController,
    router: GestureRouter,
    viewport: Viewport,
    closed: bool,
}

impl StorySession {
    /// Open a session over `story_count` stories, starting at
    /// `initial_index`. Cells before the initial index open complete; the
    /// viewed-set opens empty.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyStories` for an empty list and
    /// `SessionError::IndexOutOfRange` when `initial_index >= story_count`.
    pub fn open(
        story_count: usize,
        initial_index: usize,
        viewport: Viewport,
        timing: StoryTiming,
        now: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if story_count == 0 {
            return Err(SessionError::EmptyStories);
        }
        if initial_index >= story_count {
            return Err(SessionError::IndexOutOfRange {
                index: initial_index,
                len: story_count,
            });
        }

        Ok(Self {
            story_count,
            current: initial_index,
            viewed: BTreeSet::new(),
            paused: false,
            image_ready: false,
            progress: ProgressTrack::new(story_count, initial_index, timing.story_duration_ms),
            dismiss: DismissController::open(viewport.height, timing, now),
            router: GestureRouter::new(timing.long_press_ms),
            viewport,
            closed: false,
        })
    }

    /// Feed one event into the session and collect the effects to perform.
    ///
    /// Every state transition happens inside this call; nothing runs
    /// between dispatches, so a `Closed` effect guarantees no further
    /// completion can fire.
    pub fn dispatch(&mut self, event: Event, now: DateTime<Utc>) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        let mut effects = Vec::new();
        match event {
            Event::Tick => {
                if self.router.poll_long_press(now) && self.image_ready {
                    self.pause_playback(now);
                }
                if let Some(index) = self.progress.tick(now) {
                    effects.push(Effect::StoryViewed(index));
                    self.viewed.insert(index);
                    self.advance(now, &mut effects);
                }
                if self.dismiss.tick(now) {
                    self.closed = true;
                    effects.push(Effect::Closed);
                }
            }
            Event::PointerDown { x, y } => {
                if !self.dismiss.is_exiting() {
                    self.router.begin(x, y, now);
                }
            }
            Event::PointerMove { x, y } => match self.router.track(x, y, now) {
                Some(DragUpdate::Claimed { dy }) => {
                    self.pause_playback(now);
                    self.dismiss.drag_start();
                    self.dismiss.drag_move(dy);
                }
                Some(DragUpdate::Moved { dy }) => self.dismiss.drag_move(dy),
                None => {}
            },
            Event::PointerUp { x, y } => match self.router.finish(x, y, now) {
                Some(Gesture::Tap { x }) => self.handle_tap(x, now, &mut effects),
                Some(Gesture::LongPressRelease) => {
                    if self.paused && self.image_ready {
                        self.resume_playback(now);
                    }
                }
                Some(Gesture::DragRelease { dy, velocity }) => {
                    let decision = self.dismiss.release(dy, velocity, now);
                    if decision.commits {
                        self.progress.pause(now);
                    }
                    if decision.resumes {
                        self.resume_playback(now);
                    }
                }
                None => {}
            },
            Event::ImageLoaded => {
                if !self.image_ready {
                    self.image_ready = true;
                    self.viewed.insert(self.current);
                    effects.push(Effect::StoryViewed(self.current));
                    if !self.paused {
                        self.progress.start(self.current, now);
                    }
                }
            }
            Event::ImageFailed => self.image_ready = false,
            Event::CloseRequested => self.begin_close(now),
        }
        effects
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────────
    //

    fn advance(&mut self, now: DateTime<Utc>, effects: &mut Vec<Effect>) {
        effects.push(Effect::StoryViewed(self.current));
        self.viewed.insert(self.current);

        if self.current + 1 < self.story_count {
            self.progress.complete(self.current);
            self.current += 1;
            self.image_ready = false;
            self.paused = false;
        } else {
            self.begin_close(now);
        }
    }

    fn retreat(&mut self) {
        if self.current == 0 {
            return;
        }
        self.progress.reset(self.current);
        self.current -= 1;
        self.image_ready = false;
        self.paused = false;
    }

    fn handle_tap(&mut self, x: f32, now: DateTime<Utc>, effects: &mut Vec<Effect>) {
        if !self.image_ready || self.dismiss.is_exiting() {
            return;
        }
        if x < self.viewport.width * LEFT_TAP_ZONE {
            self.retreat();
        } else if x > self.viewport.width * RIGHT_TAP_ZONE {
            self.advance(now, effects);
        } else if self.paused {
            self.resume_playback(now);
        } else {
            self.pause_playback(now);
        }
    }

    //
    // ─── PLAYBACK ──────────────────────────────────────────────────────────────
    //

    fn pause_playback(&mut self, now: DateTime<Utc>) {
        self.progress.pause(now);
        self.paused = true;
    }

    /// The paused flag always clears; the timer only restarts once the
    /// current image is ready.
    fn resume_playback(&mut self, now: DateTime<Utc>) {
        if self.image_ready {
            self.progress.start(self.current, now);
        }
        self.paused = false;
    }

    /// Stop the in-flight timer in the same call that starts the exit
    /// animation, so a stale completion can never fire during teardown.
    fn begin_close(&mut self, now: DateTime<Utc>) {
        self.progress.pause(now);
        self.dismiss.begin_exit(now);
    }

    //
    // ─── RENDER SURFACE ────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn story_count(&self) -> usize {
        self.story_count
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn progress(&self, index: usize) -> f32 {
        self.progress.value(index)
    }

    #[must_use]
    pub fn progress_values(&self) -> &[f32] {
        self.progress.values()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_image_ready(&self) -> bool {
        self.image_ready
    }

    #[must_use]
    pub fn has_viewed(&self, index: usize) -> bool {
        self.viewed.contains(&index)
    }

    /// Live dismissal offset, in viewport pixels.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.dismiss.offset()
    }

    /// Live overlay opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.dismiss.opacity()
    }

    /// True once the exit animation has started (input is no longer
    /// serviced) or finished.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.dismiss.is_exiting()
    }

    /// True once `Effect::Closed` has been emitted.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.progress.is_running()
    }
}
