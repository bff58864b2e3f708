use chrono::{DateTime, Utc};

/// Vertical travel past which a gesture is claimed as a drag mid-stream.
pub(crate) const DRAG_SLOP: f32 = 5.0;
/// Vertical travel needed for the axis-dominance claim on the first move.
pub(crate) const AXIS_SLOP: f32 = 2.0;
/// Displacement ceiling for taps and long-presses.
pub(crate) const TAP_SLOP: f32 = 10.0;

/// Live update while a drag owns the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DragUpdate {
    /// The drag just claimed exclusivity.
    Claimed { dy: f32 },
    Moved { dy: f32 },
}

/// Terminal classification of one physical gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Gesture {
    Tap { x: f32 },
    LongPressRelease,
    DragRelease { dy: f32, velocity: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pointer {
    origin_x: f32,
    origin_y: f32,
    last_y: f32,
    last_at: DateTime<Utc>,
    pressed_at: DateTime<Utc>,
    velocity: f32,
    max_dx: f32,
    max_dy: f32,
    saw_move: bool,
    drag: bool,
    long_press_fired: bool,
}

/// Classifies one raw pointer stream into tap, long-press or vertical drag.
///
/// A drag claims exclusivity the moment it is recognized: once claimed, the
/// release can only be a `DragRelease`, never a tap or long-press. Only one
/// classification is serviced per physical gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GestureRouter {
    long_press_ms: i64,
    pointer: Option<Pointer>,
}

impl GestureRouter {
    pub(crate) fn new(long_press_ms: i64) -> Self {
        Self {
            long_press_ms,
            pointer: None,
        }
    }

    pub(crate) fn begin(&mut self, x: f32, y: f32, now: DateTime<Utc>) {
        self.pointer = Some(Pointer {
            origin_x: x,
            origin_y: y,
            last_y: y,
            last_at: now,
            pressed_at: now,
            velocity: 0.0,
            max_dx: 0.0,
            max_dy: 0.0,
            saw_move: false,
            drag: false,
            long_press_fired: false,
        });
    }

    /// Track a move sample. Returns a drag update once the drag has claimed
    /// the gesture, nothing before.
    pub(crate) fn track(&mut self, x: f32, y: f32, now: DateTime<Utc>) -> Option<DragUpdate> {
        let pointer = self.pointer.as_mut()?;
        let dx = (x - pointer.origin_x).abs();
        let dy_abs = (y - pointer.origin_y).abs();
        pointer.max_dx = pointer.max_dx.max(dx);
        pointer.max_dy = pointer.max_dy.max(dy_abs);

        let dt_ms = (now - pointer.last_at).num_milliseconds();
        if dt_ms > 0 {
            pointer.velocity = (y - pointer.last_y) / dt_ms as f32;
        }
        pointer.last_y = y;
        pointer.last_at = now;

        let first_move = !pointer.saw_move;
        pointer.saw_move = true;
        let dy = y - pointer.origin_y;

        if pointer.drag {
            return Some(DragUpdate::Moved { dy });
        }

        let axis_claim = first_move && dy_abs > dx && dy_abs > AXIS_SLOP;
        if axis_claim || dy_abs > DRAG_SLOP {
            pointer.drag = true;
            return Some(DragUpdate::Claimed { dy });
        }
        None
    }

    /// Poll for a long-press while the pointer is held. Fires at most once
    /// per gesture, and never after a drag has claimed it.
    pub(crate) fn poll_long_press(&mut self, now: DateTime<Utc>) -> bool {
        let Some(pointer) = self.pointer.as_mut() else {
            return false;
        };
        if pointer.drag || pointer.long_press_fired {
            return false;
        }
        if pointer.max_dx.max(pointer.max_dy) > TAP_SLOP {
            return false;
        }
        if (now - pointer.pressed_at).num_milliseconds() >= self.long_press_ms {
            pointer.long_press_fired = true;
            return true;
        }
        false
    }

    /// Classify the release. A held press past the long-press threshold is a
    /// `LongPressRelease` even if no poll happened to land in between.
    pub(crate) fn finish(&mut self, x: f32, y: f32, now: DateTime<Utc>) -> Option<Gesture> {
        let pointer = self.pointer.take()?;
        if pointer.drag {
            let dt_ms = (now - pointer.last_at).num_milliseconds();
            let velocity = if dt_ms > 0 {
                (y - pointer.last_y) / dt_ms as f32
            } else {
                pointer.velocity
            };
            return Some(Gesture::DragRelease {
                dy: y - pointer.origin_y,
                velocity,
            });
        }
        if pointer.max_dx.max(pointer.max_dy) > TAP_SLOP {
            return None;
        }
        let held_ms = (now - pointer.pressed_at).num_milliseconds();
        if pointer.long_press_fired || held_ms >= self.long_press_ms {
            return Some(Gesture::LongPressRelease);
        }
        Some(Gesture::Tap { x })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_clock;

    const LONG_PRESS_MS: i64 = 500;

    #[test]
    fn quick_low_displacement_release_is_a_tap() {
        let mut clock = fixed_clock();
        let mut router = GestureRouter::new(LONG_PRESS_MS);
        router.begin(40.0, 300.0, clock.now());
        clock.advance_ms(80);
        assert_eq!(
            router.finish(41.0, 301.0, clock.now()),
            Some(Gesture::Tap { x: 41.0 })
        );
    }

    #[test]
    fn held_press_fires_long_press_once_then_releases_as_such() {
        let mut clock = fixed_clock();
        let mut router = GestureRouter::new(LONG_PRESS_MS);
        router.begin(100.0, 300.0, clock.now());

        clock.advance_ms(499);
        assert!(!router.poll_long_press(clock.now()));
        clock.advance_ms(1);
        assert!(router.poll_long_press(clock.now()));
        assert!(!router.poll_long_press(clock.now()));

        assert_eq!(
            router.finish(100.0, 300.0, clock.now()),
            Some(Gesture::LongPressRelease)
        );
    }

    #[test]
    fn unpolled_held_press_still_releases_as_long_press() {
        let mut clock = fixed_clock();
        let mut router = GestureRouter::new(LONG_PRESS_MS);
        router.begin(100.0, 300.0, clock.now());
        clock.advance_ms(600);
        assert_eq!(
            router.finish(100.0, 300.0, clock.now()),
            Some(Gesture::LongPressRelease)
        );
    }

    #[test]
    fn vertical_first_move_claims_by_axis_dominance() {
        let mut clock = fixed_clock();
        let mut router = GestureRouter::new(LONG_PRESS_MS);
        router.begin(100.0, 300.0, clock.now());
        clock.advance_ms(16);
        assert_eq!(
            router.track(101.0, 304.0, clock.now()),
            Some(DragUpdate::Claimed { dy: 4.0 })
        );
    }

    #[test]
    fn slow_vertical_travel_claims_past_slop() {
        let mut clock = fixed_clock();
        let mut router = GestureRouter::new(LONG_PRESS_MS);
        router.begin(100.0, 300.0, clock.now());
        clock.advance_ms(16);
        // Horizontal dominance at start: not claimed.
        assert_eq!(router.track(104.0, 302.0, clock.now()), None);
        clock.advance_ms(16);
        assert_eq!(
            router.track(104.0, 308.0, clock.now()),
            Some(DragUpdate::Claimed { dy: 8.0 })
        );
        clock.advance_ms(16);
        assert_eq!(
            router.track(104.0, 340.0, clock.now()),
            Some(DragUpdate::Moved { dy: 40.0 })
        );
    }

    #[test]
    fn drag_release_reports_displacement_and_velocity() {
        let mut clock = fixed_clock();
        let mut router = GestureRouter::new(LONG_PRESS_MS);
        router.begin(100.0, 300.0, clock.now());
        clock.advance_ms(16);
        router.track(100.0, 320.0, clock.now());
        clock.advance_ms(100);
        let gesture = router.finish(100.0, 380.0, clock.now());
        let Some(Gesture::DragRelease { dy, velocity }) = gesture else {
            panic!("expected drag release, got {gesture:?}");
        };
        assert!((dy - 80.0).abs() < 1e-5);
        assert!((velocity - 0.6).abs() < 1e-5);
    }

    #[test]
    fn claimed_drag_excludes_tap_and_long_press() {
        let mut clock = fixed_clock();
        let mut router = GestureRouter::new(LONG_PRESS_MS);
        router.begin(100.0, 300.0, clock.now());
        clock.advance_ms(16);
        router.track(100.0, 320.0, clock.now());

        clock.advance_ms(LONG_PRESS_MS);
        assert!(!router.poll_long_press(clock.now()));
        assert!(matches!(
            router.finish(100.0, 320.0, clock.now()),
            Some(Gesture::DragRelease { .. })
        ));
    }

    #[test]
    fn large_horizontal_swipe_is_not_serviced() {
        let mut clock = fixed_clock();
        let mut router = GestureRouter::new(LONG_PRESS_MS);
        router.begin(100.0, 300.0, clock.now());
        clock.advance_ms(16);
        assert_eq!(router.track(160.0, 302.0, clock.now()), None);
        clock.advance_ms(16);
        assert_eq!(router.finish(220.0, 303.0, clock.now()), None);
    }
}
