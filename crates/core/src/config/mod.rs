use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// User-facing options consumed once at session start. All fields have
/// serde defaults so partial configuration files remain loadable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Seconds before a gating event during which the HUD must already be
    /// hidden. A non-positive value disables the feature entirely.
    #[serde(default = "default_lead_time")]
    pub lead_time: f32,
    /// Minimum length a gap between events must have for the HUD to be
    /// shown in it at all.
    #[serde(default = "default_minimum_display_time")]
    pub minimum_display_time: f32,
    /// Treat obstacles as never gating.
    #[serde(default)]
    pub ignore_obstacles: bool,
    /// Treat bomb notes as never gating.
    #[serde(default)]
    pub ignore_bombs: bool,
    /// Minimum note jump speed required for the feature to activate.
    #[serde(default)]
    pub minimum_speed_threshold: f32,
    /// Force the HUD visible while playback is paused.
    #[serde(default = "default_unhide_when_paused")]
    pub unhide_when_paused: bool,
    /// Manage every host-provided element instead of only the primary one.
    #[serde(default)]
    pub hide_all_mode: bool,
}

fn default_lead_time() -> f32 {
    0.8
}

fn default_minimum_display_time() -> f32 {
    1.0
}

fn default_unhide_when_paused() -> bool {
    true
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            lead_time: default_lead_time(),
            minimum_display_time: default_minimum_display_time(),
            ignore_obstacles: false,
            ignore_bombs: false,
            minimum_speed_threshold: 0.0,
            unhide_when_paused: default_unhide_when_paused(),
            hide_all_mode: false,
        }
    }
}

/// Live signals the host gathers before a session is created. Optional
/// signals default to "feature active" when the source is absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivationContext {
    /// Note jump speed of the selected difficulty.
    pub note_jump_speed: f32,
    /// Whether an external replay system reports live playback. `None` when
    /// no such system is installed.
    pub replay_playback: Option<bool>,
}

impl FocusConfig {
    /// Decides whether a session should run at all. Interval building and
    /// tracking assume a positive lead time, so callers check this first.
    pub fn should_activate(&self, ctx: &ActivationContext) -> bool {
        if self.lead_time <= 0.0 {
            return false;
        }
        if ctx.replay_playback == Some(false) {
            return false;
        }
        ctx.note_jump_speed >= self.minimum_speed_threshold
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Writes the configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_falls_back_to_defaults() {
        let config: FocusConfig = serde_json::from_str("{}").unwrap();
        assert!((config.lead_time - 0.8).abs() < f32::EPSILON);
        assert!((config.minimum_display_time - 1.0).abs() < f32::EPSILON);
        assert!(!config.ignore_obstacles);
        assert!(!config.ignore_bombs);
        assert!(config.unhide_when_paused);
        assert!(!config.hide_all_mode);
    }

    #[test]
    fn serialization_round_trip() {
        let config = FocusConfig {
            lead_time: 1.2,
            minimum_display_time: 0.5,
            ignore_obstacles: true,
            ignore_bombs: true,
            minimum_speed_threshold: 14.0,
            unhide_when_paused: false,
            hide_all_mode: true,
        };

        let json = serde_json::to_string(&config).unwrap();
        let restored: FocusConfig = serde_json::from_str(&json).unwrap();
        assert!((restored.lead_time - 1.2).abs() < f32::EPSILON);
        assert!(restored.ignore_obstacles);
        assert!(restored.hide_all_mode);
        assert!(!restored.unhide_when_paused);
    }

    #[test]
    fn zero_lead_time_deactivates() {
        let config = FocusConfig {
            lead_time: 0.0,
            ..Default::default()
        };
        assert!(!config.should_activate(&ActivationContext::default()));
    }

    #[test]
    fn slow_note_jump_speed_deactivates() {
        let config = FocusConfig {
            minimum_speed_threshold: 16.0,
            ..Default::default()
        };
        let ctx = ActivationContext {
            note_jump_speed: 12.0,
            replay_playback: None,
        };
        assert!(!config.should_activate(&ctx));
    }

    #[test]
    fn missing_replay_signal_defaults_to_active() {
        let config = FocusConfig::default();
        let ctx = ActivationContext {
            note_jump_speed: 18.0,
            replay_playback: None,
        };
        assert!(config.should_activate(&ctx));
    }

    #[test]
    fn replay_playback_disabled_deactivates() {
        let config = FocusConfig::default();
        let ctx = ActivationContext {
            note_jump_speed: 18.0,
            replay_playback: Some(false),
        };
        assert!(!config.should_activate(&ctx));
        let ctx = ActivationContext {
            replay_playback: Some(true),
            ..ctx
        };
        assert!(config.should_activate(&ctx));
    }
}
