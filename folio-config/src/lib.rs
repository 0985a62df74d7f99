//! Configuration loading for the folio carousels.
//!
//! Settings come from a TOML or JSON file, inline JSON in the environment,
//! or the built-in presets. Every loaded configuration passes through the
//! guard rails in [`validation`] before it is handed to a carousel.
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions,
    ConfigSource,
};
pub use models::SiteConfig;
pub use sources::{EnvConfig, FileCarouselConfig, FileConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
