//! Shared types for the carousel crate

use std::fmt::{self, Display};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::viewport::Breakpoints;

/// Identifies a carousel instance in logs and errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CarouselKey {
    Certificates,
    Experience,
    Custom(&'static str),
}

impl Display for CarouselKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselKey::Certificates => f.write_str("certificates"),
            CarouselKey::Experience => f.write_str("experience"),
            CarouselKey::Custom(name) => f.write_str(name),
        }
    }
}

/// How hover and manual navigation combine into the paused flag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PauseMode {
    /// One flag shared by both sources; whichever callback ran last wins.
    /// A hover-leave unpauses even while a manual episode is pending, and a
    /// manual episode's delayed resume unpauses even while hovered.
    #[default]
    Shared,
    /// Hover and manual pause are tracked separately; autoplay resumes only
    /// once the pointer has left and no manual episode is pending.
    Independent,
}

/// Static configuration for a carousel instance. Presets cover the two
/// portfolio carousels; callsites can also build one ad-hoc or load it from
/// a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Period of the autoplay timer in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Delay before autoplay resumes after a manual navigation.
    pub resume_delay_ms: u64,
    /// Horizontal travel (px) a touch must exceed to count as a swipe.
    pub swipe_threshold_px: f32,
    pub pause_mode: PauseMode,
    /// Noun used in control labels, e.g. "Go to certificate 3".
    pub label: String,
    // Last field: TOML tables must follow plain values.
    pub breakpoints: Breakpoints,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::certificates_defaults()
    }
}

impl CarouselConfig {
    pub const DEFAULT_RESUME_DELAY_MS: u64 = 5_000;
    pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

    /// Certificates carousel: advances every 5 seconds.
    pub fn certificates_defaults() -> Self {
        Self {
            autoplay_interval_ms: 5_000,
            resume_delay_ms: Self::DEFAULT_RESUME_DELAY_MS,
            swipe_threshold_px: Self::DEFAULT_SWIPE_THRESHOLD_PX,
            breakpoints: Breakpoints::default(),
            pause_mode: PauseMode::Shared,
            label: "certificate".to_string(),
        }
    }

    /// Work experience ("journey") carousel: advances every 4 seconds.
    pub fn experience_defaults() -> Self {
        Self {
            autoplay_interval_ms: 4_000,
            label: "slide".to_string(),
            ..Self::certificates_defaults()
        }
    }

    pub fn autoplay_interval(&self) -> Duration {
        // A zero period would spin the timer; floor it at 1ms.
        Duration::from_millis(self.autoplay_interval_ms.max(1))
    }

    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.resume_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_only_in_period_and_label() {
        let certs = CarouselConfig::certificates_defaults();
        let journey = CarouselConfig::experience_defaults();
        assert_eq!(certs.autoplay_interval(), Duration::from_secs(5));
        assert_eq!(journey.autoplay_interval(), Duration::from_secs(4));
        assert_eq!(certs.resume_delay(), journey.resume_delay());
        assert_eq!(certs.breakpoints, journey.breakpoints);
        assert_eq!(journey.label, "slide");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: CarouselConfig = serde_json::from_str(
            r#"{ "autoplay_interval_ms": 2500, "pause_mode": "independent" }"#,
        )
        .expect("valid config json");
        assert_eq!(cfg.autoplay_interval_ms, 2_500);
        assert_eq!(cfg.pause_mode, PauseMode::Independent);
        assert_eq!(cfg.resume_delay_ms, 5_000);
        assert_eq!(cfg.breakpoints.narrow_below_px, 768);
    }

    #[test]
    fn zero_interval_is_floored() {
        let cfg = CarouselConfig {
            autoplay_interval_ms: 0,
            ..CarouselConfig::default()
        };
        assert_eq!(cfg.autoplay_interval(), Duration::from_millis(1));
    }
}
