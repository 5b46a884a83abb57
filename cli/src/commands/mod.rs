pub mod catalog;
pub mod regions;
pub mod render;

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use choromap::{build_registry, Config, CountryMap, DirSource, GeoSource, MapState};
use tracing::info;

use crate::cli::GeoArgs;

/// A single boundary file given on the command line, served whatever name is asked for.
struct FileSource(PathBuf);

impl GeoSource for FileSource {
    fn fetch(&self, _file: &str) -> Result<Vec<u8>> {
        std::fs::read(&self.0).with_context(|| format!("[cli] Failed to read {}", self.0.display()))
    }

    fn location(&self, _file: &str) -> String {
        self.0.display().to_string()
    }
}

fn source(config: &Config, geo: &GeoArgs) -> Result<Box<dyn GeoSource>> {
    if let Some(path) = &geo.geo { return Ok(Box::new(FileSource(path.clone()))) }
    if let Some(dir) = &geo.assets { return Ok(Box::new(DirSource::new(dir))) }
    config.assets.source()
}

/// Resolve `country` through the registry and load its boundaries.
pub(crate) fn load_country(config: &Config, country: &str, geo: &GeoArgs) -> Result<CountryMap> {
    let registry = build_registry();
    let key = country.trim().to_ascii_lowercase();
    let profile = registry.choropleth(&key)
        .ok_or_else(|| anyhow!("[cli] No map for {country:?}; try `choromap catalog --geo`"))?;

    let source = source(config, geo)?;
    info!(country = profile.key, location = %source.location(profile.geo_file), "loading boundaries");

    let mut map = CountryMap::new(profile).with_policy(config.fetch);
    match map.load(source.as_ref()) {
        MapState::Ready(collection) => info!(features = collection.len(), "boundaries ready"),
        MapState::Failed { error, attempts } => bail!("[cli] Failed to load {} after {attempts} attempt(s): {error}", profile.geo_file),
        MapState::Loading => bail!("[cli] {} is still loading", profile.geo_file),
    }
    Ok(map)
}
