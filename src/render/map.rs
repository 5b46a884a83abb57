use anyhow::Result;
use geo::{BoundingRect, Centroid, Coord, LineString, MultiPolygon, Polygon, Rect};
use rstar::RTree;
use tracing::debug;

use super::{
    options::MapOptions,
    hit::{hit_index, RegionEnvelope},
    svg::multipolygon_to_path,
    zoom::{Transition, ZoomBehavior, ZoomTransform, SEARCH_DURATION_MS},
    Tooltip,
};
use crate::{
    features::FeatureCollection,
    projection::ScreenProjector,
    region::{NormalizedValues, Reading, RegionProfile, RegionValues},
    scale::{ColorScale, Legend, NEUTRAL_FILL},
    theme::FontSpec,
};

pub(super) const DEFAULT_STROKE: &str = "#fff";
pub(super) const FOCUS_STROKE: &str = "#000";

/// One feature after projection and painting, in map (untransformed) pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRegion {
    /// Display name from the boundary file.
    pub name: Option<String>,
    /// Normalized lookup key.
    pub key: String,
    /// `None` when the value map has no entry for this region.
    pub value: Option<f64>,
    pub meta: Option<String>,
    pub shape: MultiPolygon<f64>,
    pub path: String,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub focused: bool,
    pub centroid: Option<Coord<f64>>,
    pub label_at: Option<Coord<f64>>,
    pub bounds: Option<Rect<f64>>,
}

impl RenderedRegion {
    /// Name and value passed to hover/click callbacks.
    pub fn reading(&self) -> Reading {
        Reading { value: self.value.unwrap_or(0.0), meta: self.meta.clone() }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// A fully drawn choropleth: projected regions, their paint, the legend and
/// the interaction state (tooltip, zoom, search transition).
///
/// Every call to [`BaseMap::render`] starts from scratch; the feature collection
/// and the value map are only read.
pub struct BaseMap<P> {
    pub(super) profile: P,
    pub(super) width: f64,
    pub(super) height: f64,
    pub(super) regions: Vec<RenderedRegion>,
    pub(super) rtree: RTree<RegionEnvelope>,
    pub(super) scale: ColorScale,
    pub(super) legend: Legend,
    pub(super) zoom: Option<ZoomBehavior>,
    pub(super) transform: ZoomTransform,
    pub(super) transition: Option<Transition>,
    pub(super) tooltip: Tooltip,
    pub(super) hovered: Option<usize>,
    pub(super) dev_mode: bool,
    pub(super) show_labels: bool,
    pub(super) aria_label: String,
    pub(super) font: FontSpec,
}

impl<P: RegionProfile> BaseMap<P> {
    pub fn render(collection: &FeatureCollection, values: &RegionValues, profile: P, options: &MapOptions) -> Result<Self> {
        let layer = options.selected_layer.as_deref();
        let normalized = NormalizedValues::new(values, &profile);
        let scale = ColorScale::build(&normalized.resolved(layer), options.intensity, &options.palette)?;
        let legend = Legend::from_scale(&scale, options.legend_id.as_str());

        let project = options.projection.fit(options.width, options.height, collection)?;
        let focused = options.focused_region.as_deref().map(|name| profile.normalize_name(name));

        let regions: Vec<RenderedRegion> = collection.iter()
            .map(|feature| {
                let key = feature.name.as_deref()
                    .map(|name| profile.normalize_name(name))
                    .unwrap_or_default();
                let entry = feature.name.as_ref().and_then(|_| normalized.get(&key));
                let value = entry.map(|v| v.resolve(layer)).filter(|v| v.is_finite());
                let style = options.region_style.as_ref().map(|f| f(feature)).unwrap_or_default();
                let is_focused = feature.name.is_some() && focused.as_deref() == Some(key.as_str());

                let shape = project_shape(&feature.shape, &project);
                let centroid = shape.centroid().map(|p| p.0);
                let label_at = options.label_position.as_ref()
                    .and_then(|f| f(feature))
                    .or(centroid);

                RenderedRegion {
                    name: feature.name.clone(),
                    meta: entry.and_then(|v| v.meta()).map(str::to_owned),
                    fill: style.fill.unwrap_or_else(|| match value {
                        Some(v) => scale.color(v).to_string(),
                        None => NEUTRAL_FILL.to_string(),
                    }),
                    stroke: if is_focused {
                        FOCUS_STROKE.to_string()
                    } else {
                        style.stroke.unwrap_or_else(|| DEFAULT_STROKE.to_string())
                    },
                    stroke_width: style.stroke_width.unwrap_or(1.0),
                    focused: is_focused,
                    path: multipolygon_to_path(&shape),
                    bounds: shape.bounding_rect(),
                    key,
                    value,
                    shape,
                    centroid,
                    label_at,
                }
            })
            .collect();

        let rtree = hit_index(&regions);

        debug!(
            regions = regions.len(),
            values = normalized.len(),
            bands = scale.band_count(),
            projection = options.projection.name(),
            "rendered choropleth",
        );

        let mut map = Self {
            profile,
            width: options.width,
            height: options.height,
            regions,
            rtree,
            scale,
            legend,
            zoom: options.zoomable.then(ZoomBehavior::default),
            transform: ZoomTransform::IDENTITY,
            transition: None,
            tooltip: Tooltip::default(),
            hovered: None,
            dev_mode: options.dev_mode,
            show_labels: options.show_labels,
            aria_label: options.aria_label.clone(),
            font: options.font.clone(),
        };

        if let Some(name) = options.search_region.as_deref() {
            map.search(name);
        }

        Ok(map)
    }

    #[inline] pub fn width(&self) -> f64 { self.width }

    #[inline] pub fn height(&self) -> f64 { self.height }

    #[inline] pub fn regions(&self) -> &[RenderedRegion] { &self.regions }

    #[inline] pub fn scale(&self) -> &ColorScale { &self.scale }

    #[inline] pub fn legend(&self) -> &Legend { &self.legend }

    #[inline] pub fn profile(&self) -> &P { &self.profile }

    /// Current transform of the feature group.
    #[inline] pub fn transform(&self) -> ZoomTransform { self.transform }

    #[inline] pub fn transition(&self) -> Option<&Transition> { self.transition.as_ref() }

    /// First region whose display name normalizes to the same key as `name`.
    pub fn region(&self, name: &str) -> Option<&RenderedRegion> {
        self.position(name).map(|i| &self.regions[i])
    }

    pub(super) fn position(&self, name: &str) -> Option<usize> {
        let key = self.profile.normalize_name(name);
        self.regions.iter().position(|r| r.name.is_some() && r.key == key)
    }

    /// Start an animated move that centers the named region. Returns the target
    /// transform, or `None` when no region has that name.
    pub fn search(&mut self, name: &str) -> Option<ZoomTransform> {
        let Some(bounds) = self.position(name).and_then(|i| self.regions[i].bounds) else {
            debug!(region = name, "search target not found");
            return None;
        };

        let target = ZoomTransform::focus(bounds, self.width, self.height);
        self.transition = Some(Transition::new(self.transform, target, SEARCH_DURATION_MS));
        Some(target)
    }

    /// Advance a running search transition by `dt_ms`.
    pub fn tick(&mut self, dt_ms: f64) -> ZoomTransform {
        if let Some(transition) = self.transition.as_mut() {
            self.transform = transition.advance(dt_ms);
            if transition.is_done() { self.transition = None }
        }
        self.transform
    }

    /// Jump to the end of a running transition.
    pub fn finish_transition(&mut self) -> ZoomTransform {
        if let Some(transition) = self.transition.take() {
            self.transform = transition.to;
        }
        self.transform
    }
}

/// Project every ring, dropping invisible points and rings that collapse.
fn project_shape(shape: &MultiPolygon<f64>, project: &ScreenProjector) -> MultiPolygon<f64> {
    let ring = |ring: &LineString<f64>| -> Option<LineString<f64>> {
        let points: Vec<Coord<f64>> = ring.0.iter().filter_map(|&c| project(c)).collect();
        (points.len() >= 3).then_some(LineString(points))
    };

    MultiPolygon(
        shape.0.iter()
            .filter_map(|polygon| {
                let exterior = ring(polygon.exterior())?;
                let interiors = polygon.interiors().iter().filter_map(|r| ring(r)).collect();
                Some(Polygon::new(exterior, interiors))
            })
            .collect()
    )
}
