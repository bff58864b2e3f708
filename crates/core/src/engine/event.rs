/// Raw input dispatched into a viewing session.
///
/// Pointer coordinates are in viewport space. `Tick` is the animation
/// heartbeat; the embedder sends it at whatever cadence it renders at and
/// the engine samples its injected clock, so tick frequency never changes
/// observable timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Tick,
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    /// The current story's image finished loading.
    ImageLoaded,
    /// The current story's image failed to load. Playback stays gated until
    /// the embedder substitutes a fallback and a load succeeds.
    ImageFailed,
    /// Explicit close request (the header close button).
    CloseRequested,
}

/// Side effects a dispatch asks the embedder to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Record the story at this index as seen. May be emitted more than once
    /// per index (image-ready and advance both report it); receivers must
    /// treat it as an idempotent set insert.
    StoryViewed(usize),
    /// The exit animation finished; tear the overlay down. Emitted exactly
    /// once per session.
    Closed,
}
