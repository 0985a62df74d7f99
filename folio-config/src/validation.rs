use std::fmt;

use folio_carousel::CarouselConfig;
use thiserror::Error;

use crate::models::SiteConfig;

/// Values no carousel can run with.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("{section}: autoplay_interval_ms must be greater than zero")]
    ZeroAutoplayInterval { section: &'static str },
    #[error("{section}: resume_delay_ms must be greater than zero")]
    ZeroResumeDelay { section: &'static str },
    #[error("{section}: breakpoints.{field} must be at least 1")]
    ZeroItemsPerView {
        section: &'static str,
        field: &'static str,
    },
    #[error("{section}: swipe_threshold_px must be positive, got {value}")]
    NonPositiveSwipeThreshold { section: &'static str, value: f32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hint {
            Some(hint) => write!(f, "{} ({hint})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

/// Reject unusable values and collect warnings for legal but odd ones.
pub fn apply_guard_rails(
    config: &SiteConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();
    for (section, carousel) in config.sections() {
        check_carousel(section, carousel, &mut warnings)?;
    }
    Ok(warnings)
}

fn check_carousel(
    section: &'static str,
    config: &CarouselConfig,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    if config.autoplay_interval_ms == 0 {
        return Err(ConfigGuardRailError::ZeroAutoplayInterval { section });
    }
    if config.resume_delay_ms == 0 {
        return Err(ConfigGuardRailError::ZeroResumeDelay { section });
    }
    if config.breakpoints.narrow_items == 0 {
        return Err(ConfigGuardRailError::ZeroItemsPerView {
            section,
            field: "narrow_items",
        });
    }
    if config.breakpoints.wide_items == 0 {
        return Err(ConfigGuardRailError::ZeroItemsPerView {
            section,
            field: "wide_items",
        });
    }
    let threshold = config.swipe_threshold_px;
    if threshold.is_nan() || threshold <= 0.0 {
        return Err(ConfigGuardRailError::NonPositiveSwipeThreshold {
            section,
            value: threshold,
        });
    }

    let breakpoints = &config.breakpoints;
    if breakpoints.narrow_items > breakpoints.wide_items {
        warnings.push_with_hint(
            format!(
                "{section}: narrow layout shows more items ({}) than wide ({})",
                breakpoints.narrow_items, breakpoints.wide_items
            ),
            "narrow_items is used below narrow_below_px; swap the values if this is unintended",
        );
    }
    if breakpoints.narrow_below_px == 0 {
        warnings.push(format!(
            "{section}: narrow_below_px is 0; the narrow layout is never used"
        ));
    }
    if config.resume_delay_ms < config.autoplay_interval_ms {
        warnings.push_with_hint(
            format!(
                "{section}: resume delay ({}ms) is shorter than the autoplay interval ({}ms)",
                config.resume_delay_ms, config.autoplay_interval_ms
            ),
            "autoplay restarts a full period after the resume, so a manual pause lasts at least resume_delay_ms + autoplay_interval_ms",
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_pass_without_warnings() {
        let warnings = apply_guard_rails(&SiteConfig::default()).unwrap();
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn zero_interval_is_rejected() {
        let mut config = SiteConfig::default();
        config.experience.autoplay_interval_ms = 0;
        assert_eq!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::ZeroAutoplayInterval {
                section: "experience"
            })
        );
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let mut config = SiteConfig::default();
        config.certificates.swipe_threshold_px = f32::NAN;
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::NonPositiveSwipeThreshold {
                section: "certificates",
                ..
            })
        ));
    }

    #[test]
    fn zero_items_names_the_field() {
        let mut config = SiteConfig::default();
        config.certificates.breakpoints.wide_items = 0;
        let err = apply_guard_rails(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "certificates: breakpoints.wide_items must be at least 1"
        );
    }

    #[test]
    fn odd_values_only_warn() {
        let mut config = SiteConfig::default();
        config.certificates.breakpoints.narrow_items = 3;
        config.experience.resume_delay_ms = 1_000;
        let warnings = apply_guard_rails(&config).unwrap();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|warning| warning.hint.is_some()));
    }
}
