use chrono::{DateTime, Utc};

use crate::engine::StoryTiming;

/// Drag distance over which the background dim reaches full strength.
pub(crate) const DIM_TRAVEL: f32 = 200.0;
/// Maximum dim applied by a drag; the overlay never goes below 0.4 opacity.
pub(crate) const DIM_STRENGTH: f32 = 0.6;
/// Release displacement beyond which a dismissal commits.
pub(crate) const COMMIT_DISTANCE: f32 = 100.0;
/// Release velocity (px/ms, downward) beyond which a dismissal commits.
pub(crate) const COMMIT_VELOCITY: f32 = 0.5;

/// What a drag release decided.
///
/// `commits` and `resumes` are computed from independent condition checks
/// (`dy > 100 OR vy > 0.5` vs `dy <= 100 AND vy <= 0.5`); near the
/// boundary both or neither may hold and callers tolerate that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReleaseDecision {
    pub commits: bool,
    pub resumes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    FadingIn {
        started_at: DateTime<Utc>,
    },
    Resting,
    Dragging,
    Settling {
        from_offset: f32,
        from_opacity: f32,
        started_at: DateTime<Utc>,
    },
    Exiting {
        from_offset: f32,
        from_opacity: f32,
        started_at: DateTime<Utc>,
    },
    Closed,
}

/// Vertical swipe-to-dismiss: live-follow offset and correlated dim while
/// dragging, commit-or-settle on release, and the open/close transitions.
///
/// Closing leaves the offset and opacity wherever the exit animation put
/// them; only the next open resets them.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DismissController {
    phase: Phase,
    offset: f32,
    opacity: f32,
    travel: f32,
    timing: StoryTiming,
}

impl DismissController {
    /// Opens at offset 0 and opacity 0, then fades the overlay in.
    pub(crate) fn open(travel: f32, timing: StoryTiming, now: DateTime<Utc>) -> Self {
        Self {
            phase: Phase::FadingIn { started_at: now },
            offset: 0.0,
            opacity: 0.0,
            travel,
            timing,
        }
    }

    /// A vertical drag claimed the gesture; freeze at the current visuals.
    pub(crate) fn drag_start(&mut self) {
        if !self.is_exiting() {
            self.phase = Phase::Dragging;
        }
    }

    /// Follow a downward drag. Upward movement is ignored.
    pub(crate) fn drag_move(&mut self, dy: f32) {
        if self.phase != Phase::Dragging || dy <= 0.0 {
            return;
        }
        let progress = (dy / DIM_TRAVEL).min(1.0);
        self.offset = dy;
        self.opacity = 1.0 - progress * DIM_STRENGTH;
    }

    /// Decide between commit and settle for a released drag.
    pub(crate) fn release(
        &mut self,
        dy: f32,
        velocity: f32,
        now: DateTime<Utc>,
    ) -> ReleaseDecision {
        let decision = ReleaseDecision {
            commits: dy > COMMIT_DISTANCE || velocity > COMMIT_VELOCITY,
            resumes: dy <= COMMIT_DISTANCE && velocity <= COMMIT_VELOCITY,
        };
        if self.phase == Phase::Dragging {
            if decision.commits {
                self.begin_exit(now);
            } else {
                self.phase = Phase::Settling {
                    from_offset: self.offset,
                    from_opacity: self.opacity,
                    started_at: now,
                };
            }
        }
        decision
    }

    /// Start the exit slide/fade. No-op if already exiting or closed, so the
    /// close signal fires at most once.
    pub(crate) fn begin_exit(&mut self, now: DateTime<Utc>) {
        if self.is_exiting() {
            return;
        }
        self.phase = Phase::Exiting {
            from_offset: self.offset,
            from_opacity: self.opacity,
            started_at: now,
        };
    }

    /// Advance whichever transition is in flight. Returns true exactly once,
    /// on the tick that finishes the exit animation.
    pub(crate) fn tick(&mut self, now: DateTime<Utc>) -> bool {
        match self.phase {
            Phase::FadingIn { started_at } => {
                let t = fraction(started_at, now, self.timing.fade_in_ms);
                self.opacity = t;
                if t >= 1.0 {
                    self.phase = Phase::Resting;
                }
                false
            }
            Phase::Settling {
                from_offset,
                from_opacity,
                started_at,
            } => {
                let t = fraction(started_at, now, self.timing.settle_ms);
                self.offset = lerp(from_offset, 0.0, t);
                self.opacity = lerp(from_opacity, 1.0, t);
                if t >= 1.0 {
                    self.phase = Phase::Resting;
                }
                false
            }
            Phase::Exiting {
                from_offset,
                from_opacity,
                started_at,
            } => {
                let t = fraction(started_at, now, self.timing.exit_ms);
                self.offset = lerp(from_offset, self.travel, t);
                self.opacity = lerp(from_opacity, 0.0, t);
                if t >= 1.0 {
                    self.phase = Phase::Closed;
                    return true;
                }
                false
            }
            Phase::Resting | Phase::Dragging | Phase::Closed => false,
        }
    }

    pub(crate) fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. } | Phase::Closed)
    }

    pub(crate) fn offset(&self) -> f32 {
        self.offset
    }

    pub(crate) fn opacity(&self) -> f32 {
        self.opacity
    }
}

fn fraction(started_at: DateTime<Utc>, now: DateTime<Utc>, duration_ms: i64) -> f32 {
    if duration_ms <= 0 {
        return 1.0;
    }
    let elapsed = (now - started_at).num_milliseconds();
    if elapsed <= 0 {
        return 0.0;
    }
    (elapsed as f32 / duration_ms as f32).min(1.0)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
