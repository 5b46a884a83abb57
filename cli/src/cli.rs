use std::path::PathBuf;

use anyhow::{Context, Result};
use choromap::Config;

/// Choropleth map renderer (SVG output)
#[derive(clap::Parser, Debug)]
#[command(name = "choromap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON configuration file
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration from `--config`, or the defaults.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::from_path(path).context("[cli] Failed to load --config"),
            None => Ok(Config::default()),
        }
    }
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render a country map as SVG
    Render(RenderArgs),

    /// List the region names of a country's boundary file
    Regions(RegionsArgs),

    /// List chart types known to the registry
    Catalog(CatalogArgs),
}

/// Where to read boundaries from; overrides the configured assets.
#[derive(clap::Args, Debug)]
pub struct GeoArgs {
    /// Boundary file (GeoJSON) to use instead of the country's default file
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub geo: Option<PathBuf>,

    /// Static-assets directory holding the boundary files
    #[arg(long, value_hint = clap::ValueHint::DirPath, conflicts_with = "geo")]
    pub assets: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Country key, e.g. india, usa, delhi
    pub country: String,

    /// Region values as JSON: {"Region": 12} or {"Region": {"value": 12, "meta": "..."}}
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Output SVG file, defaults to "./<country>.svg"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Color theme name
    #[arg(long)]
    pub theme: Option<String>,

    /// Color intensity (> 0)
    #[arg(long)]
    pub intensity: Option<f64>,

    /// Data layer to color by
    #[arg(long)]
    pub layer: Option<String>,

    /// Region to outline
    #[arg(long)]
    pub focus: Option<String>,

    /// Region to zoom to
    #[arg(long)]
    pub search: Option<String>,

    /// Mark feature centroids
    #[arg(long)]
    pub dev: bool,

    /// Draw region names
    #[arg(long)]
    pub labels: bool,

    /// Also write the legend on its own
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub legend: Option<PathBuf>,

    #[command(flatten)]
    pub geo: GeoArgs,
}

#[derive(clap::Args, Debug)]
pub struct RegionsArgs {
    /// Country key, e.g. india, usa, delhi
    pub country: String,

    #[command(flatten)]
    pub geo: GeoArgs,
}

#[derive(clap::Args, Debug)]
pub struct CatalogArgs {
    /// Only geographic chart types
    #[arg(long)]
    pub geo: bool,

    /// Recommend chart types for these column kinds (categorical, numeric, temporal, geographic)
    #[arg(long, value_delimiter = ',')]
    pub recommend: Vec<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
