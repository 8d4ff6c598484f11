use serde::{Deserialize, Serialize};

use crate::{BeatmapEvent, EventKind, FocusConfig, NoteGameplay, SliderType};

/// A window during which auxiliary elements may stay on screen. Invariant:
/// `start <= end`. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibleInterval {
    pub start: f32,
    pub end: f32,
}

impl VisibleInterval {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: f32) -> bool {
        self.start <= time && time <= self.end
    }
}

/// Converts the ordered event timeline into disjoint visibility intervals.
///
/// Walks the chart once, tracking the time of the most recent gating event.
/// Whenever the gap up to the next gating event leaves at least
/// `minimum_display_time` of slack after subtracting `lead_time`, the gap
/// becomes a visible interval ending `lead_time` before the event. The
/// stretch between the final gating event and the end of the song is always
/// emitted, with no lead-time subtraction.
///
/// Events must arrive in non-decreasing time order; the first event at a
/// given timestamp wins and exact duplicates are ignored. This is a contract
/// with the caller, not a runtime check.
pub fn build_intervals(
    events: &[BeatmapEvent],
    song_length: f32,
    config: &FocusConfig,
) -> Vec<VisibleInterval> {
    let mut intervals = Vec::new();
    let mut last_gate_time = 0.0_f32;

    for event in events {
        // Exact-equality dedup only; near-duplicates are distinct gates.
        if event.time == last_gate_time {
            continue;
        }

        let gate_time = match event.kind {
            EventKind::Obstacle { width, line_index } => {
                if config.ignore_obstacles {
                    continue;
                }
                // A single-lane wall hugging either edge never blocks the view.
                if width == 1 && (line_index == 0 || line_index == 3) {
                    continue;
                }
                event.time
            }
            EventKind::Slider {
                slider_type,
                tail_time,
            } => {
                if slider_type == SliderType::Normal {
                    continue;
                }
                tail_time.max(event.time)
            }
            EventKind::Note { gameplay } => {
                if config.ignore_bombs && gameplay == NoteGameplay::Bomb {
                    continue;
                }
                event.time
            }
        };

        if gate_time - last_gate_time - config.lead_time >= config.minimum_display_time {
            intervals.push(VisibleInterval::new(
                last_gate_time,
                gate_time - config.lead_time,
            ));
        }
        last_gate_time = gate_time;
    }

    intervals.push(VisibleInterval::new(last_gate_time, song_length));
    intervals
}
