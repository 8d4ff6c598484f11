//! Core library for the HUD Focus visibility controller.
//!
//! Given a chart's ordered event timeline, the crate precomputes the safe
//! windows in which auxiliary HUD elements may stay on screen without
//! obscuring upcoming gameplay, then maps a live playback clock to a
//! per-frame visibility decision. Interval building runs once per song;
//! tracking runs every frame and resumes from a cursor so the steady-state
//! cost stays constant. Everything host-specific (element discovery, layer
//! toggling, clocks) stays outside: the host feeds in events, time, and a
//! pause flag, and receives a boolean on every visibility change.

pub mod beatmap;
pub mod config;
pub mod error;
pub mod intervals;
pub mod session;
pub mod tracker;

pub use beatmap::{BeatmapEvent, EventKind, NoteGameplay, SliderType};
pub use config::{ActivationContext, FocusConfig};
pub use error::{FocusError, Result};
pub use intervals::{build_intervals, VisibleInterval};
pub use session::{select_elements, FocusSession};
pub use tracker::PlaybackTracker;
