//! Subcommand implementations and the helpers they share.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::Result;

use geoquiz_core::model::Permission;
use geoquiz_core::parser::parse_catalog;
use geoquiz_core::{CountryResolver, QuizCatalog};
use geoquiz_providers::config::{load_config_from, GeoquizConfig};
use geoquiz_providers::{create_geocoder, create_location};

use crate::LocationArgs;

pub mod countries;
pub mod init;
pub mod play;
pub mod resolve;
pub mod validate;

/// Load config and apply command-line location overrides.
pub fn load_config(config_path: Option<&Path>, location: &LocationArgs) -> Result<GeoquizConfig> {
    let mut config = load_config_from(config_path)?;
    if let Some(lat) = location.lat {
        config.location.latitude = Some(lat);
    }
    if let Some(lon) = location.lon {
        config.location.longitude = Some(lon);
    }
    if location.deny_location {
        config.location.permission = Permission::Denied;
    }
    Ok(config)
}

/// The catalog named on the command line, else the one in config, else the builtin.
pub fn load_catalog(
    flag: Option<&Path>,
    config: Option<&GeoquizConfig>,
) -> Result<Cow<'static, QuizCatalog>> {
    let path: Option<PathBuf> = flag
        .map(Path::to_path_buf)
        .or_else(|| config.and_then(|c| c.catalog.clone()));

    match path {
        Some(path) => Ok(Cow::Owned(parse_catalog(&path)?)),
        None => Ok(Cow::Borrowed(QuizCatalog::builtin())),
    }
}

pub fn build_resolver(config: &GeoquizConfig) -> Result<CountryResolver> {
    Ok(CountryResolver::new(
        create_location(&config.location),
        create_geocoder(&config.geocoder)?,
    ))
}
