//! Configuration and collaborator factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use geoquiz_core::model::{Coordinates, Permission};
use geoquiz_core::traits::{LocationProvider, ReverseGeocoder};
use geoquiz_core::OrchestratorConfig;

use crate::location::StaticLocation;
use crate::nominatim::{
    NominatimGeocoder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Reverse-geocoding service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocoderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent as the `User-Agent` header on every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Preferred language for returned names (e.g. "en").
    #[serde(default)]
    pub accept_language: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
            accept_language: None,
        }
    }
}

/// Device location settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_permission")]
    pub permission: Permission,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

fn default_permission() -> Permission {
    Permission::Granted
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            permission: default_permission(),
            latitude: None,
            longitude: None,
        }
    }
}

impl LocationConfig {
    /// The configured position, if both latitude and longitude are set.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates::new(self.latitude?, self.longitude?))
    }
}

/// Top-level geoquiz configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoquizConfig {
    /// Catalog file to load instead of the builtin catalog.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Bound on the whole resolution step.
    #[serde(default)]
    pub resolve_timeout_secs: Option<u64>,
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    #[serde(default)]
    pub location: LocationConfig,
}

impl GeoquizConfig {
    pub fn orchestrator_config(&self) -> OrchestratorConfig {
        OrchestratorConfig {
            resolve_timeout: self.resolve_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `geoquiz.toml` in the current directory
/// 2. `~/.config/geoquiz/config.toml`
///
/// Environment variable overrides: `GEOQUIZ_GEOCODER_URL`, `GEOQUIZ_USER_AGENT`.
pub fn load_config() -> Result<GeoquizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<GeoquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("geoquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<GeoquizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => GeoquizConfig::default(),
    };

    if let Ok(url) = std::env::var("GEOQUIZ_GEOCODER_URL") {
        config.geocoder.base_url = url;
    }
    if let Ok(agent) = std::env::var("GEOQUIZ_USER_AGENT") {
        config.geocoder.user_agent = agent;
    }

    config.geocoder.base_url = resolve_env_vars(&config.geocoder.base_url);
    config.geocoder.user_agent = resolve_env_vars(&config.geocoder.user_agent);
    config.geocoder.accept_language = config
        .geocoder
        .accept_language
        .as_deref()
        .map(resolve_env_vars);
    config.catalog = config
        .catalog
        .as_ref()
        .map(|p| PathBuf::from(resolve_env_vars(&p.to_string_lossy())));

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("geoquiz"))
}

/// Create the reverse geocoder described by `config`.
pub fn create_geocoder(config: &GeocoderConfig) -> Result<Arc<dyn ReverseGeocoder>> {
    let geocoder = NominatimGeocoder::new(&config.base_url, &config.user_agent, config.timeout_secs)?
        .with_accept_language(config.accept_language.clone());
    Ok(Arc::new(geocoder))
}

/// Create the location provider described by `config`.
pub fn create_location(config: &LocationConfig) -> Arc<dyn LocationProvider> {
    Arc::new(StaticLocation::new(config.permission, config.coordinates()))
}
