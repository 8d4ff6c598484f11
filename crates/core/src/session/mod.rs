use crate::{build_intervals, BeatmapEvent, FocusConfig, PlaybackTracker, VisibleInterval};

/// Selects the element handles a session should manage. Outside of hide-all
/// mode only the primary element is touched; the extra handles stay under
/// host control.
pub fn select_elements<E>(config: &FocusConfig, primary: E, extras: Vec<E>) -> Vec<E> {
    if config.hide_all_mode {
        let mut elements = Vec::with_capacity(extras.len() + 1);
        elements.push(primary);
        elements.extend(extras);
        elements
    } else {
        vec![primary]
    }
}

/// One playthrough's worth of visibility control over a set of opaque
/// element handles. The interval array is computed once at construction and
/// never mutated afterwards; the session only re-evaluates the tracker.
#[derive(Debug)]
pub struct FocusSession<E> {
    config: FocusConfig,
    intervals: Vec<VisibleInterval>,
    tracker: PlaybackTracker,
    elements: Vec<E>,
}

impl<E> FocusSession<E> {
    /// Builds the interval array for the chart and starts tracking with the
    /// HUD visible. `elements` are the handles the host wants driven by
    /// visibility changes; see [`select_elements`].
    pub fn new(
        events: &[BeatmapEvent],
        song_length: f32,
        config: FocusConfig,
        elements: Vec<E>,
    ) -> Self {
        let intervals = build_intervals(events, song_length, &config);
        Self {
            config,
            intervals,
            tracker: PlaybackTracker::new(),
            elements,
        }
    }

    /// The precomputed safe intervals, for host-side diagnostics.
    pub fn intervals(&self) -> &[VisibleInterval] {
        &self.intervals
    }

    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn is_visible(&self) -> bool {
        self.tracker.is_visible()
    }

    /// Feeds one frame of the live clock through the tracker. On a decision
    /// change `apply` is invoked once per managed element with the new
    /// visibility, and the change is returned.
    pub fn tick(
        &mut self,
        current_time: f32,
        is_paused: bool,
        mut apply: impl FnMut(&E, bool),
    ) -> Option<bool> {
        let visible = self.tracker.tick(
            current_time,
            is_paused,
            &self.intervals,
            self.config.unhide_when_paused,
        )?;

        for element in &self.elements {
            apply(element, visible);
        }
        Some(visible)
    }
}
