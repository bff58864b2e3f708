/// Durations shared by every story in a session.
///
/// One fixed playback duration applies to all stories; there is no
/// per-story override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryTiming {
    /// Full playback time of one story, milliseconds.
    pub story_duration_ms: i64,
    /// Overlay fade-in when the viewer opens.
    pub fade_in_ms: i64,
    /// Slide/fade out when a dismissal commits or the last story completes.
    pub exit_ms: i64,
    /// Settle back to rest after a drag released below the commit thresholds.
    pub settle_ms: i64,
    /// Hold time before a press counts as a long-press.
    pub long_press_ms: i64,
}

impl Default for StoryTiming {
    fn default() -> Self {
        Self {
            story_duration_ms: 4000,
            fade_in_ms: 200,
            exit_ms: 250,
            settle_ms: 150,
            long_press_ms: 500,
        }
    }
}

/// Host viewport dimensions, queried once at open.
///
/// Width drives the tap zones, height the dismissal travel distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
