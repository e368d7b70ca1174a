//! The `geoquiz resolve` command.

use std::path::PathBuf;

use anyhow::Result;

use geoquiz_core::SessionOrchestrator;

use crate::LocationArgs;

pub async fn execute(
    location: LocationArgs,
    catalog_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = super::load_config(config_path.as_deref(), &location)?;
    let catalog = super::load_catalog(catalog_path.as_deref(), Some(&config))?;
    let resolver = super::build_resolver(&config)?;
    let mut session = SessionOrchestrator::new(resolver, &catalog, config.orchestrator_config());

    let resolution = session.start().await?;

    println!("Latitude: {}", resolution.coordinates.latitude);
    println!("Longitude: {}", resolution.coordinates.longitude);
    println!("Country: {}", resolution.country);
    println!("Questions available: {}", session.questions().len());

    Ok(())
}
