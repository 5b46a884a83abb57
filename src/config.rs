//! JSON configuration shared by the library entry points and the CLI.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    country::{CountryMapProps, DirSource, FetchPolicy, GeoSource},
    theme::{FontSpec, ThemeTable, DEFAULT_THEME},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding the boundary files.
    pub dir: PathBuf,
    /// When set, boundary files are fetched from `{base_url}/{file}` instead.
    pub base_url: Option<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from(DirSource::DEFAULT_DIR), base_url: None }
    }
}

impl AssetsConfig {
    pub fn source(&self) -> Result<Box<dyn GeoSource>> {
        match &self.base_url {
            #[cfg(feature = "download")]
            Some(url) => Ok(Box::new(crate::country::HttpSource::new(url.as_str())?)),
            #[cfg(not(feature = "download"))]
            Some(url) => bail!("[config] base_url {url:?} requires the \"download\" feature"),
            None => Ok(Box::new(DirSource::new(&self.dir))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderDefaults {
    pub theme: String,
    pub intensity: f64,
    pub font_family: String,
    /// Named size from the theme table, e.g. "Small".
    pub font_size: String,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            intensity: 1.0,
            font_family: "System Default".to_string(),
            font_size: "Extra Small".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub assets: AssetsConfig,
    pub fetch: FetchPolicy,
    /// Palettes and fonts added to (or replacing) the built-in ones.
    pub themes: ThemeTable,
    pub render: RenderDefaults,
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("[config] Failed to parse {}", path.display()))?;
        config.validate()
            .with_context(|| format!("[config] Invalid configuration in {}", path.display()))?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.render.intensity.is_finite() || self.render.intensity <= 0.0 {
            bail!("[config] render.intensity must be positive, got {}", self.render.intensity);
        }
        self.themes.validate()
    }

    /// Built-in themes with the configured ones merged on top.
    pub fn theme_table(&self) -> ThemeTable {
        let mut table = ThemeTable::default();
        table.merge(self.themes.clone());
        table
    }

    pub fn font(&self, themes: &ThemeTable) -> FontSpec {
        themes.font(&self.render.font_family, &self.render.font_size)
    }

    /// Country map props seeded from the render defaults.
    pub fn props(&self, themes: &ThemeTable) -> CountryMapProps {
        CountryMapProps {
            theme: self.render.theme.clone(),
            intensity: self.render.intensity,
            font: self.font(themes),
            ..CountryMapProps::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(text: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("choromap.json");
        std::fs::write(&path, text).unwrap();
        (dir, path)
    }

    #[test]
    fn empty_file_takes_defaults() {
        let (_dir, path) = write("{}");
        let config = Config::from_path(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.assets.dir, Path::new("public/data"));
        assert_eq!(config.fetch.attempts, 1);
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let (_dir, path) = write(r##"{
            "assets": {"dir": "geo"},
            "fetch": {"attempts": 3},
            "themes": {"palettes": {"Forest": ["#e5f5e0", "#31a354"]}},
            "render": {"theme": "Forest", "font_size": "Large"}
        }"##);
        let config = Config::from_path(&path).unwrap();
        assert_eq!(config.assets.dir, Path::new("geo"));
        assert_eq!(config.fetch.attempts, 3);
        assert_eq!(config.render.intensity, 1.0);

        let themes = config.theme_table();
        assert_eq!(themes.palette("Forest"), ["#e5f5e0", "#31a354"]);
        assert_eq!(themes.palette("Cool Blues")[0], "#dbeafe");

        let props = config.props(&themes);
        assert_eq!(props.theme, "Forest");
        assert_eq!(props.font.size, 18.0);
    }

    #[test]
    fn rejects_bad_values() {
        let (_dir, path) = write(r#"{"render": {"intensity": 0}}"#);
        assert!(Config::from_path(&path).is_err());

        let (_dir, path) = write(r#"{"themes": {"palettes": {"Bad": ["blue"]}}}"#);
        let err = Config::from_path(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Bad"));

        let (_dir, path) = write("{not json");
        assert!(Config::from_path(&path).is_err());
    }

    #[test]
    fn local_assets_use_directory_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("usa.json"), "{}").unwrap();
        let assets = AssetsConfig { dir: dir.path().to_path_buf(), base_url: None };
        assert_eq!(assets.source().unwrap().fetch("usa.json").unwrap(), b"{}");
    }
}
