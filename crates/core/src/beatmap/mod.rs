use serde::{Deserialize, Serialize};

/// Gameplay sub-kind of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteGameplay {
    Normal,
    Bomb,
}

/// Variant of a slider segment. Only [`SliderType::Normal`] is considered
/// harmless for visibility purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderType {
    Normal,
    Arc,
    Chain,
}

/// Kind-specific payload of a beatmap event. The variant set is fixed, so
/// consumers match exhaustively instead of downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    Note { gameplay: NoteGameplay },
    Obstacle { width: u32, line_index: u32 },
    Slider { slider_type: SliderType, tail_time: f32 },
}

/// A single timed object in the chart. For sliders, `time` is the head time
/// and the tail lives in the kind payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeatmapEvent {
    pub time: f32,
    pub kind: EventKind,
}

impl BeatmapEvent {
    /// Creates a regular note.
    pub fn note(time: f32) -> Self {
        Self {
            time,
            kind: EventKind::Note {
                gameplay: NoteGameplay::Normal,
            },
        }
    }

    /// Creates a bomb note.
    pub fn bomb(time: f32) -> Self {
        Self {
            time,
            kind: EventKind::Note {
                gameplay: NoteGameplay::Bomb,
            },
        }
    }

    /// Creates an obstacle spanning `width` lanes starting at `line_index`.
    pub fn obstacle(time: f32, width: u32, line_index: u32) -> Self {
        Self {
            time,
            kind: EventKind::Obstacle { width, line_index },
        }
    }

    /// Creates a slider segment with the given head and tail times.
    pub fn slider(time: f32, slider_type: SliderType, tail_time: f32) -> Self {
        Self {
            time,
            kind: EventKind::Slider {
                slider_type,
                tail_time,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_survives_json_round_trip() {
        let chart = vec![
            BeatmapEvent::note(1.0),
            BeatmapEvent::bomb(2.5),
            BeatmapEvent::obstacle(3.0, 2, 1),
            BeatmapEvent::slider(4.0, SliderType::Arc, 4.75),
        ];

        let json = serde_json::to_string(&chart).unwrap();
        let restored: Vec<BeatmapEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, chart);
    }

    #[test]
    fn constructors_set_expected_kinds() {
        assert_eq!(
            BeatmapEvent::bomb(1.0).kind,
            EventKind::Note {
                gameplay: NoteGameplay::Bomb
            }
        );
        assert_eq!(
            BeatmapEvent::obstacle(1.0, 1, 3).kind,
            EventKind::Obstacle {
                width: 1,
                line_index: 3
            }
        );
    }
}
