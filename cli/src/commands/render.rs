use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use choromap::{MapView, RegionValues};
use tracing::info;

use super::load_country;

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::RenderArgs) -> Result<()> {
    let config = cli.load_config()?;
    let themes = config.theme_table();

    let text = std::fs::read_to_string(&args.data)
        .with_context(|| format!("[render] Failed to read {}", args.data.display()))?;
    let values: RegionValues = serde_json::from_str(&text)
        .with_context(|| format!("[render] Failed to parse region values in {}", args.data.display()))?;

    let map = load_country(&config, &args.country, &args.geo)?;

    let mut props = config.props(&themes);
    if let Some(theme) = &args.theme { props.theme = theme.clone() }
    if let Some(intensity) = args.intensity { props.intensity = intensity }
    props.selected_layer = args.layer.clone();
    props.focused_region = args.focus.clone();
    props.search_region = args.search.clone();
    props.dev_mode = args.dev;
    props.show_labels = args.labels;

    let mut base = match map.render(&values, &props, &themes)? {
        MapView::Ready(base) => base,
        MapView::Failed(message) => bail!("[render] {message}"),
        MapView::Loading(text) => bail!("[render] {text}"),
    };

    // Static output shows where a search would land.
    base.finish_transition();

    let output = args.output.clone()
        .unwrap_or_else(|| PathBuf::from(format!("./{}.svg", map.profile().key)));
    info!(regions = base.regions().len(), bands = base.scale().band_count(), "writing {}", output.display());
    base.write_svg(&output)?;

    if let Some(path) = &args.legend {
        std::fs::write(path, base.legend_svg()?)
            .with_context(|| format!("[render] Failed to write {}", path.display()))?;
    }

    let missing = base.regions().iter().filter(|r| r.value.is_none()).count();
    if missing > 0 {
        info!(missing, "regions without a value were drawn in the neutral color");
    }

    Ok(())
}
