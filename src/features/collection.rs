use anyhow::{anyhow, bail, Context, Result};
use geo::{BoundingRect, Coord, LineString, MultiPolygon, Polygon, Rect};
use serde_json::{Map, Value};
use tracing::debug;

use crate::region::RegionProfile;

/// Property consulted for a feature's display name.
pub const DEFAULT_NAME_KEYS: &[&str] = &["name"];

/// A single region of a boundary file.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: Option<String>,
    pub properties: Map<String, Value>,
    pub shape: MultiPolygon<f64>,
}

/// Read-only boundary dataset for one country or city, in lon/lat degrees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Parse GeoJSON bytes, taking each feature's name from the first string
    /// property found among `name_keys`.
    pub fn from_slice(bytes: &[u8], name_keys: &[&str]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .context("[features] Failed to parse GeoJSON bytes")?;
        Self::from_value(&value, name_keys)
    }

    pub fn from_value(value: &Value, name_keys: &[&str]) -> Result<Self> {
        let features = value.get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| anyhow!("[features] GeoJSON has no \"features\" array"))?;

        let features = features.iter()
            .enumerate()
            .map(|(i, feature)| parse_feature(feature, name_keys)
                .with_context(|| format!("[features] Invalid feature at index {i}")))
            .collect::<Result<Vec<_>>>()?;

        debug!(count = features.len(), "parsed feature collection");
        Ok(Self { features })
    }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    #[inline] pub fn features(&self) -> &[Feature] { &self.features }

    #[inline] pub fn iter(&self) -> impl Iterator<Item = &Feature> { self.features.iter() }

    /// Bounding rectangle of all shapes, in degrees.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.features.iter()
            .filter_map(|feature| feature.shape.bounding_rect())
            .reduce(|a, b| Rect::new(
                Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            ))
    }

    /// Index of the first feature whose normalized name matches `name`.
    pub fn position(&self, name: &str, profile: &dyn RegionProfile) -> Option<usize> {
        let key = profile.normalize_name(name);
        self.features.iter().position(|feature| {
            feature.name.as_deref().is_some_and(|n| profile.normalize_name(n) == key)
        })
    }
}

fn parse_feature(feature: &Value, name_keys: &[&str]) -> Result<Feature> {
    let properties = feature.get("properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    let name = name_keys.iter()
        .find_map(|key| properties.get(*key).and_then(Value::as_str))
        .map(str::to_owned);

    let shape = match feature.get("geometry") {
        Some(geometry) if geometry.is_object() => parse_geometry(geometry)?,
        _ => MultiPolygon(Vec::new()),
    };

    Ok(Feature { name, properties, shape })
}

/// Polygon and MultiPolygon become shapes; anything else is an empty shape.
fn parse_geometry(geometry: &Value) -> Result<MultiPolygon<f64>> {
    let coords = geometry.get("coordinates").and_then(Value::as_array);
    match (geometry.get("type").and_then(Value::as_str), coords) {
        (Some("Polygon"), Some(rings)) => Ok(MultiPolygon(vec![parse_polygon(rings)?])),
        (Some("MultiPolygon"), Some(polygons)) => polygons.iter()
            .map(|polygon| polygon.as_array()
                .ok_or_else(|| anyhow!("MultiPolygon member is not an array"))
                .and_then(|rings| parse_polygon(rings)))
            .collect::<Result<Vec<_>>>()
            .map(MultiPolygon),
        (ty, _) => {
            debug!(geometry = ?ty, "skipping non-polygonal geometry");
            Ok(MultiPolygon(Vec::new()))
        }
    }
}

/// `[exterior, hole, hole, ...]`
fn parse_polygon(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| {
        ring.as_array()
            .ok_or_else(|| anyhow!("ring is not an array"))
            .and_then(|ring| parse_ring(ring))
    });

    let exterior = rings.next().transpose()?.unwrap_or_else(|| LineString(Vec::new()));
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// `[[x, y], [x, y], ...]`, closed if the source left it open.
fn parse_ring(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len());

    for pair in coords {
        let pair = pair.as_array().ok_or_else(|| anyhow!("coordinate is not an array"))?;
        if pair.len() < 2 { bail!("coordinate has fewer than two components") }
        let x = pair[0].as_f64().ok_or_else(|| anyhow!("coordinate x must be a number"))?;
        let y = pair[1].as_f64().ok_or_else(|| anyhow!("coordinate y must be a number"))?;
        points.push(Coord { x, y });
    }

    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last { points.push(first) }
    }

    Ok(LineString(points))
}
