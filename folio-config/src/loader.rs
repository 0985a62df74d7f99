//! Resolve, read and validate the site configuration
//!
//! Evaluation order:
//! 1) an explicit path (`--config`),
//! 2) `$FOLIO_CONFIG_PATH` (TOML or JSON file),
//! 3) `$FOLIO_CONFIG_JSON` (inline JSON),
//! 4) the first existing default file under the search root,
//! 5) built-in presets.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::SiteConfig;
use crate::sources::{CONFIG_JSON_VAR, EnvConfig, FileConfig};
use crate::validation::{self, ConfigGuardRailError, ConfigWarnings};

const DEFAULT_CONFIG_LOCATIONS: &[&str] = &[
    "folio.toml",
    "folio.json",
    "config/folio.toml",
    "config/folio.json",
];

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path)
            | ConfigSource::EnvPath(path)
            | ConfigSource::File(path) => Some(path),
            ConfigSource::Default | ConfigSource::EnvInline => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => f.write_str("built-in defaults"),
            ConfigSource::Explicit(path) => {
                write!(f, "{} (--config)", path.display())
            }
            ConfigSource::EnvPath(path) => {
                write!(f, "{} (FOLIO_CONFIG_PATH)", path.display())
            }
            ConfigSource::EnvInline => f.write_str(CONFIG_JSON_VAR),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// An explicitly named file does not exist.
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {origin}")]
    ParseToml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to parse configuration {origin}")]
    ParseJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "failed to parse configuration {origin}: toml error: {toml}; json error: {json}"
    )]
    Unrecognized {
        origin: String,
        toml: String,
        json: String,
    },
    /// The file parsed but holds values no carousel can run with.
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    /// Directory the default locations are relative to. Defaults to the
    /// working directory.
    pub search_root: Option<PathBuf>,
    /// Environment snapshot; gathered from the process when `None`.
    pub env: Option<EnvConfig>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: SiteConfig,
    pub source: ConfigSource,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_search_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.options.search_root = Some(root.into());
        self
    }

    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.options.env = Some(env);
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env = self
            .options
            .env
            .clone()
            .unwrap_or_else(EnvConfig::gather);

        let (file_config, source) = self.resolve(&env)?;
        let config = file_config.into_site_config();
        let warnings = validation::apply_guard_rails(&config)?;

        debug!(%source, "configuration loaded");
        for warning in warnings.iter() {
            warn!("config: {warning}");
        }

        Ok(ConfigLoad {
            config,
            source,
            warnings,
        })
    }

    fn resolve(
        &self,
        env: &EnvConfig,
    ) -> Result<(FileConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            let file = read_file(path)?;
            return Ok((file, ConfigSource::Explicit(path.clone())));
        }

        if let Some(path) = &env.config_path {
            let file = read_file(path)?;
            return Ok((file, ConfigSource::EnvPath(path.clone())));
        }

        if let Some(raw) = &env.config_json {
            let file = parse_json(raw, CONFIG_JSON_VAR)?;
            return Ok((file, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let file = read_file(&path)?;
            return Ok((file, ConfigSource::File(path)));
        }

        Ok((FileConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let root = self
            .options
            .search_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.is_file())
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    if !path.exists() {
        return Err(ConfigLoadError::MissingConfig {
            path: path.to_path_buf(),
        });
    }
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents, &origin),
        Some("toml") | Some("tml") => parse_toml(&contents, &origin),
        _ => parse_from_str(&contents, &origin),
    }
}

fn parse_toml(contents: &str, origin: &str) -> Result<FileConfig, ConfigLoadError> {
    toml::from_str(contents).map_err(|source| ConfigLoadError::ParseToml {
        origin: origin.to_string(),
        source,
    })
}

fn parse_json(contents: &str, origin: &str) -> Result<FileConfig, ConfigLoadError> {
    serde_json::from_str(contents).map_err(|source| ConfigLoadError::ParseJson {
        origin: origin.to_string(),
        source,
    })
}

/// Try TOML first, then JSON.
pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<FileConfig, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::Unrecognized {
                origin: origin.to_string(),
                toml: toml_err.to_string(),
                json: json_err.to_string(),
            }
        })
    })
}
