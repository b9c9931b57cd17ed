//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gesture recognition thresholds.
    pub gesture: GestureConfig,

    /// Output/effect settings.
    pub control: ControlConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Recognition thresholds for the gesture core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Consecutive identical frames required before a pose is confirmed.
    pub confirmation_frames: usize,

    /// Minimum interval between any two discrete actions (ms).
    pub action_cooldown_ms: u64,

    /// Normalized thumb-to-index distance below which a pinch is declared.
    pub pinch_threshold: f64,

    /// Number of wrist samples kept for swipe detection.
    pub swipe_window: usize,

    /// Minimum horizontal displacement for a swipe (normalized).
    pub swipe_min_distance: f64,

    /// Minimum wrist velocity for a swipe (normalized units per second).
    pub swipe_velocity_threshold: f64,

    /// Minimum time span across the swipe window (seconds). Guards
    /// against velocity blow-up on near-zero spans.
    pub swipe_min_span_secs: f64,
}

/// Settings for translating gestures into OS effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlConfig {
    /// Minimum fingertip delta before a scroll is emitted (normalized).
    pub scroll_noise_threshold: f64,

    /// Multiplier from normalized fingertip delta to scroll amount.
    pub scroll_sensitivity: f64,

    /// Pointer smoothing divisor: each frame the pointer covers
    /// 1/sensitivity of the remaining distance to the target.
    pub pointer_sensitivity: f64,

    /// Screen dimensions for pointer mapping (pixels).
    pub screen_width: u32,
    pub screen_height: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "airctl=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            confirmation_frames: 5,
            action_cooldown_ms: 500,
            pinch_threshold: 0.05,
            swipe_window: 10,
            swipe_min_distance: 0.15,
            swipe_velocity_threshold: 0.3,
            swipe_min_span_secs: 0.1,
        }
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            scroll_noise_threshold: 0.01,
            scroll_sensitivity: 30.0,
            pointer_sensitivity: 1.5,
            screen_width: 1920,
            screen_height: 1080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from(config_path: &Path) -> Self {
        if config_path.exists() {
            match std::fs::read_to_string(config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("airctl").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tuned_thresholds() {
        let config = AppConfig::default();
        assert_eq!(config.gesture.confirmation_frames, 5);
        assert_eq!(config.gesture.action_cooldown_ms, 500);
        assert!((config.gesture.pinch_threshold - 0.05).abs() < 1e-9);
        assert!((config.control.scroll_noise_threshold - 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.gesture.confirmation_frames,
            config.gesture.confirmation_frames
        );
        assert_eq!(parsed.control.screen_width, config.control.screen_width);
    }

    #[test]
    fn test_load_from_missing_path_uses_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/airctl.json"));
        assert_eq!(config.gesture.swipe_window, 10);
    }
}
