use folio_carousel::{CarouselConfig, CarouselKey};
use serde::Serialize;

/// Effective configuration for every carousel on the site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    pub certificates: CarouselConfig,
    pub experience: CarouselConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            certificates: CarouselConfig::certificates_defaults(),
            experience: CarouselConfig::experience_defaults(),
        }
    }
}

impl SiteConfig {
    /// Settings for one carousel. Ad-hoc carousels get the certificates
    /// preset.
    pub fn carousel(&self, key: &CarouselKey) -> &CarouselConfig {
        match key {
            CarouselKey::Experience => &self.experience,
            CarouselKey::Certificates | CarouselKey::Custom(_) => {
                &self.certificates
            }
        }
    }

    /// Sections with their names, in display order.
    pub fn sections(&self) -> [(&'static str, &CarouselConfig); 2] {
        [
            ("certificates", &self.certificates),
            ("experience", &self.experience),
        ]
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json_string(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_per_carousel_presets() {
        let config = SiteConfig::default();
        assert_eq!(config.certificates.autoplay_interval_ms, 5_000);
        assert_eq!(config.experience.autoplay_interval_ms, 4_000);
        assert_eq!(
            config.carousel(&CarouselKey::Custom("extra")),
            &config.certificates
        );
    }

    #[test]
    fn renders_as_toml_tables() {
        let rendered = SiteConfig::default().to_toml_string().unwrap();
        assert!(rendered.contains("[certificates]"));
        assert!(rendered.contains("[experience.breakpoints]"));
        assert!(rendered.contains("pause_mode = \"shared\""));
    }
}
