use std::sync::Arc;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{CountryProfile, GeoSource};
use crate::{
    features::FeatureCollection,
    region::RegionValues,
    render::{BaseMap, MapOptions},
    theme::{FontSpec, ThemeTable, DEFAULT_THEME},
};

/// How hard to try when fetching a boundary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchPolicy {
    /// Tries per `load`/`retry` call; at least one is always made.
    pub attempts: u32,
}

impl Default for FetchPolicy {
    fn default() -> Self { Self { attempts: 1 } }
}

#[derive(Debug, Clone)]
pub enum MapState {
    /// Boundary file not fetched yet.
    Loading,
    Ready(Arc<FeatureCollection>),
    /// Every try failed; `attempts` counts tries across all calls.
    Failed { error: String, attempts: u32 },
}

/// Per-render inputs of a country map.
#[derive(Debug, Clone)]
pub struct CountryMapProps {
    pub selected_layer: Option<String>,
    pub focused_region: Option<String>,
    pub search_region: Option<String>,
    pub dev_mode: bool,
    pub show_labels: bool,
    pub theme: String,
    pub intensity: f64,
    pub font: FontSpec,
}

impl Default for CountryMapProps {
    fn default() -> Self {
        Self {
            selected_layer: None,
            focused_region: None,
            search_region: None,
            dev_mode: false,
            show_labels: false,
            theme: DEFAULT_THEME.to_string(),
            intensity: 1.0,
            font: FontSpec::default(),
        }
    }
}

/// What a country map shows right now.
pub enum MapView {
    Loading(&'static str),
    Failed(String),
    Ready(Box<BaseMap<&'static CountryProfile>>),
}

/// A country's boundary data together with its fetch state.
#[derive(Debug, Clone)]
pub struct CountryMap {
    profile: &'static CountryProfile,
    policy: FetchPolicy,
    state: MapState,
}

impl CountryMap {
    pub fn new(profile: &'static CountryProfile) -> Self {
        Self { profile, policy: FetchPolicy::default(), state: MapState::Loading }
    }

    pub fn with_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline] pub fn profile(&self) -> &'static CountryProfile { self.profile }

    #[inline] pub fn state(&self) -> &MapState { &self.state }

    /// Fetch and parse the boundary file. Only the first call does any work;
    /// after a failure use [`CountryMap::retry`].
    pub fn load(&mut self, source: &dyn GeoSource) -> &MapState {
        if matches!(self.state, MapState::Loading) {
            self.fetch(source, 0);
        }
        &self.state
    }

    /// Fetch again after a failure.
    pub fn retry(&mut self, source: &dyn GeoSource) -> Result<&MapState> {
        let MapState::Failed { attempts, .. } = self.state else {
            bail!("[country] {} map can only be retried after a failed load", self.profile.key);
        };
        self.state = MapState::Loading;
        self.fetch(source, attempts);
        Ok(&self.state)
    }

    fn fetch(&mut self, source: &dyn GeoSource, previous: u32) {
        let file = self.profile.geo_file;
        let tries = self.policy.attempts.max(1);
        let mut error = None;

        for attempt in 1..=tries {
            let result = source.fetch(file)
                .and_then(|bytes| FeatureCollection::from_slice(&bytes, self.profile.name_keys));
            match result {
                Ok(collection) => {
                    debug!(country = self.profile.key, features = collection.len(), attempt, "loaded boundaries");
                    self.state = MapState::Ready(Arc::new(collection));
                    return;
                }
                Err(err) => {
                    warn!(country = self.profile.key, location = %source.location(file), attempt, "failed to load boundaries: {err:#}");
                    error = Some(err);
                }
            }
        }

        self.state = MapState::Failed {
            error: error.map(|e| format!("{e:#}")).unwrap_or_default(),
            attempts: previous + tries,
        };
    }

    /// Map options for this country; country maps are always zoomable.
    pub fn options(&self, props: &CountryMapProps, themes: &ThemeTable) -> MapOptions {
        MapOptions {
            width: self.profile.width,
            height: self.profile.height,
            palette: themes.palette(&props.theme).to_vec(),
            intensity: props.intensity,
            projection: self.profile.projection.clone(),
            zoomable: true,
            dev_mode: props.dev_mode,
            show_labels: props.show_labels,
            selected_layer: props.selected_layer.clone(),
            focused_region: props.focused_region.clone(),
            search_region: props.search_region.clone(),
            aria_label: format!("{} Choropleth Map", self.profile.title),
            legend_id: self.profile.legend_id.to_string(),
            font: props.font.clone(),
            ..MapOptions::default()
        }
    }

    pub fn render(&self, values: &RegionValues, props: &CountryMapProps, themes: &ThemeTable) -> Result<MapView> {
        match &self.state {
            MapState::Loading => Ok(MapView::Loading(self.profile.loading_text)),
            MapState::Failed { error, attempts } => Ok(MapView::Failed(format!(
                "Failed to load {} map after {attempts} attempt(s): {error}",
                self.profile.title,
            ))),
            MapState::Ready(collection) => {
                let map = BaseMap::render(collection, values, self.profile, &self.options(props, themes))?;
                Ok(MapView::Ready(Box::new(map)))
            }
        }
    }
}
