use crate::VisibleInterval;

/// Per-session playback state: a cursor into the interval array plus the
/// last emitted visibility. Sessions start visible, matching a HUD that is
/// shown until the first gating event approaches.
#[derive(Debug, Clone)]
pub struct PlaybackTracker {
    cursor: usize,
    visible: bool,
}

impl Default for PlaybackTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackTracker {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            visible: true,
        }
    }

    /// Current position in the interval array. Non-decreasing under
    /// monotonic playback; reset to zero only by a rewind.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The last emitted visibility decision.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advances the tracker to `current_time` and returns `Some(visible)`
    /// only when the decision differs from the previous tick.
    ///
    /// The scan resumes from the stored cursor rather than the start of the
    /// array, so steady-state cost is O(1) amortized per tick. Callers must
    /// pass the same interval slice for the lifetime of the session and
    /// serialize calls; an empty slice makes the tracker inert.
    pub fn tick(
        &mut self,
        current_time: f32,
        is_paused: bool,
        intervals: &[VisibleInterval],
        unhide_when_paused: bool,
    ) -> Option<bool> {
        // Nothing to do while paused with the HUD already shown.
        if is_paused && self.visible {
            return None;
        }

        // Past the last interval the decision is frozen for the session.
        if self.cursor >= intervals.len() {
            return None;
        }

        // A backward seek invalidates the cursor; rescan from the start.
        if self.cursor > 0 && current_time < intervals[self.cursor - 1].end {
            self.cursor = 0;
        }

        let mut inside = false;
        for interval in &intervals[self.cursor..] {
            if interval.start > current_time {
                break;
            }
            if interval.end < current_time {
                self.cursor += 1;
                continue;
            }
            inside = true;
            break;
        }

        let visible = inside || (is_paused && unhide_when_paused);
        if visible == self.visible {
            return None;
        }

        self.visible = visible;
        Some(visible)
    }
}
