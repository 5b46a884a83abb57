use std::{fmt, sync::Arc};

use geo::Coord;

use crate::{features::Feature, projection::Projection, scale::NEUTRAL_FILL, theme::FontSpec};

/// Per-feature overrides of the computed paint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

pub type RegionStyleFn = Arc<dyn Fn(&Feature) -> RegionStyle + Send + Sync>;

/// Label anchor in viewport pixels; `None` falls back to the centroid.
pub type LabelPositionFn = Arc<dyn Fn(&Feature) -> Option<Coord<f64>> + Send + Sync>;

/// Everything the base renderer needs besides the features, values and names.
#[derive(Clone)]
pub struct MapOptions {
    pub width: f64,
    pub height: f64,
    pub palette: Vec<String>,
    /// Compresses (< 1) or stretches (> 1) the high end of the color domain.
    pub intensity: f64,
    pub projection: Projection,
    pub zoomable: bool,
    /// Marks every feature centroid to debug projection alignment.
    pub dev_mode: bool,
    pub show_labels: bool,
    pub selected_layer: Option<String>,
    pub focused_region: Option<String>,
    pub search_region: Option<String>,
    pub region_style: Option<RegionStyleFn>,
    pub label_position: Option<LabelPositionFn>,
    pub aria_label: String,
    pub legend_id: String,
    pub font: FontSpec,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            palette: vec![NEUTRAL_FILL.to_string()],
            intensity: 1.0,
            projection: Projection::Mercator,
            zoomable: false,
            dev_mode: false,
            show_labels: false,
            selected_layer: None,
            focused_region: None,
            search_region: None,
            region_style: None,
            label_position: None,
            aria_label: "Choropleth Map".to_string(),
            legend_id: "choropleth-legend".to_string(),
            font: FontSpec::default(),
        }
    }
}

impl fmt::Debug for MapOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapOptions")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("palette", &self.palette)
            .field("intensity", &self.intensity)
            .field("projection", &self.projection)
            .field("zoomable", &self.zoomable)
            .field("dev_mode", &self.dev_mode)
            .field("show_labels", &self.show_labels)
            .field("selected_layer", &self.selected_layer)
            .field("focused_region", &self.focused_region)
            .field("search_region", &self.search_region)
            .field("region_style", &self.region_style.is_some())
            .field("label_position", &self.label_position.is_some())
            .finish_non_exhaustive()
    }
}
