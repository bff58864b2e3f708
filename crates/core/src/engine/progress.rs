use chrono::{DateTime, Utc};

/// Per-story progress cells plus the single active playback anchor.
///
/// Cells hold fractions in `[0, 1]`. At most one cell is animating at a
/// time; its value is derived from an anchor `(value, instant)` pair, so
/// progress is a pure function of the injected clock and pause/resume
/// cycles cannot drift: the remaining duration is always
/// `D * (1 - value)`, which keeps the advance rate at exactly `1/D`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProgressTrack {
    cells: Vec<f32>,
    active: Option<Anchor>,
    duration_ms: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Anchor {
    index: usize,
    value: f32,
    started_at: DateTime<Utc>,
}

impl ProgressTrack {
    /// Allocate one cell per story. Cells before `initial_index` open
    /// complete, the rest at zero.
    pub(crate) fn new(len: usize, initial_index: usize, duration_ms: i64) -> Self {
        let cells = (0..len)
            .map(|i| if i < initial_index { 1.0 } else { 0.0 })
            .collect();
        Self {
            cells,
            active: None,
            duration_ms,
        }
    }

    /// Begin advancing `index` toward 1 from its current value.
    ///
    /// A cell that is already complete restarts from zero, so retreating to
    /// a previously finished story replays it in full.
    pub(crate) fn start(&mut self, index: usize, now: DateTime<Utc>) {
        if self.cells[index] >= 1.0 {
            self.cells[index] = 0.0;
        }
        self.active = Some(Anchor {
            index,
            value: self.cells[index],
            started_at: now,
        });
    }

    /// Freeze the active cell at its value as of `now`. Idempotent.
    pub(crate) fn pause(&mut self, now: DateTime<Utc>) {
        if let Some(anchor) = self.active.take() {
            self.cells[anchor.index] = sample(&anchor, now, self.duration_ms);
        }
    }

    /// Force a cell back to zero. Stops the timer if it was the active one.
    pub(crate) fn reset(&mut self, index: usize) {
        self.cells[index] = 0.0;
        if self.active.is_some_and(|a| a.index == index) {
            self.active = None;
        }
    }

    /// Force a cell to complete without reporting a natural completion.
    pub(crate) fn complete(&mut self, index: usize) {
        self.cells[index] = 1.0;
        if self.active.is_some_and(|a| a.index == index) {
            self.active = None;
        }
    }

    /// Sample the active cell. Returns the index on natural completion,
    /// exactly once per start: the anchor is cleared before reporting.
    pub(crate) fn tick(&mut self, now: DateTime<Utc>) -> Option<usize> {
        let anchor = self.active?;
        let value = sample(&anchor, now, self.duration_ms);
        self.cells[anchor.index] = value;
        if value >= 1.0 {
            self.active = None;
            return Some(anchor.index);
        }
        None
    }

    pub(crate) fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub(crate) fn value(&self, index: usize) -> f32 {
        self.cells[index]
    }

    pub(crate) fn values(&self) -> &[f32] {
        &self.cells
    }
}

fn sample(anchor: &Anchor, now: DateTime<Utc>, duration_ms: i64) -> f32 {
    if duration_ms <= 0 {
        return 1.0;
    }
    let elapsed = (now - anchor.started_at).num_milliseconds();
    if elapsed <= 0 {
        return anchor.value;
    }
    let advanced = anchor.value + elapsed as f32 / duration_ms as f32;
    advanced.min(1.0)
}
