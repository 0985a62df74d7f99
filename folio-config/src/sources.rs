//! Raw configuration as written by the user
//!
//! Every field is optional; anything left out falls back to the preset of
//! the carousel the section belongs to, so a partial `[experience]` section
//! keeps the 4 second period.

use std::env;
use std::path::PathBuf;

use folio_carousel::{Breakpoints, CarouselConfig, PauseMode};
use serde::{Deserialize, Serialize};

use crate::models::SiteConfig;

pub const CONFIG_PATH_VAR: &str = "FOLIO_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "FOLIO_CONFIG_JSON";

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificates: Option<FileCarouselConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<FileCarouselConfig>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCarouselConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay_interval_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_delay_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swipe_threshold_px: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_mode: Option<PauseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<FileBreakpoints>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileBreakpoints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrow_below_px: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrow_items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wide_items: Option<usize>,
}

impl FileConfig {
    /// Overlay the file's values onto the built-in presets.
    pub fn into_site_config(self) -> SiteConfig {
        let defaults = SiteConfig::default();
        SiteConfig {
            certificates: overlay(self.certificates, defaults.certificates),
            experience: overlay(self.experience, defaults.experience),
        }
    }
}

fn overlay(
    file: Option<FileCarouselConfig>,
    base: CarouselConfig,
) -> CarouselConfig {
    match file {
        Some(file) => file.apply(base),
        None => base,
    }
}

impl FileCarouselConfig {
    pub fn apply(self, base: CarouselConfig) -> CarouselConfig {
        CarouselConfig {
            autoplay_interval_ms: self
                .autoplay_interval_ms
                .unwrap_or(base.autoplay_interval_ms),
            resume_delay_ms: self.resume_delay_ms.unwrap_or(base.resume_delay_ms),
            swipe_threshold_px: self
                .swipe_threshold_px
                .unwrap_or(base.swipe_threshold_px),
            pause_mode: self.pause_mode.unwrap_or(base.pause_mode),
            label: self.label.unwrap_or(base.label),
            breakpoints: match self.breakpoints {
                Some(file) => file.apply(base.breakpoints),
                None => base.breakpoints,
            },
        }
    }
}

impl FileBreakpoints {
    pub fn apply(self, base: Breakpoints) -> Breakpoints {
        Breakpoints {
            narrow_below_px: self.narrow_below_px.unwrap_or(base.narrow_below_px),
            narrow_items: self.narrow_items.unwrap_or(base.narrow_items),
            wide_items: self.wide_items.unwrap_or(base.wide_items),
        }
    }
}

/// Configuration hints read from the process environment. Empty values are
/// treated as unset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub config_json: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var(CONFIG_PATH_VAR).map(PathBuf::from),
            config_json: non_empty_var(CONFIG_JSON_VAR),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.trim().is_empty())
}
