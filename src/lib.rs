#![doc = "Choromap public API"]
mod catalog;
mod config;
mod country;
mod features;
mod projection;
mod region;
mod render;
mod scale;
mod theme;

#[doc(inline)]
pub use region::{
    clean_name, default_tooltip, NormalizedValues, PlainNames, Reading, RegionProfile, RegionValue,
    RegionValues, ALBANIA_ALIASES, INDIA_ALIASES, INDONESIA_ALIASES,
};

#[doc(inline)]
pub use scale::{ColorScale, Legend, LegendBand, NEUTRAL_FILL};

#[doc(inline)]
pub use theme::{FontSpec, Rgb, ThemeTable, DEFAULT_THEME};

#[doc(inline)]
pub use features::{Feature, FeatureCollection, DEFAULT_NAME_KEYS};

#[doc(inline)]
pub use projection::{CustomProjection, Projection, ScreenProjector};

#[doc(inline)]
pub use render::{
    BaseMap, LabelPositionFn, MapOptions, RegionEvent, RegionEventKind, RegionListener, RegionStyle,
    RegionStyleFn, RenderedRegion, Tooltip, Transition, ZoomBehavior, ZoomTransform,
    SEARCH_DURATION_MS, SEARCH_MAX_SCALE,
};

#[doc(inline)]
pub use country::{
    profile, CountryMap, CountryMapProps, CountryProfile, DirSource, FetchPolicy, GeoSource,
    MapState, MapView, AFGHANISTAN, ALBANIA, DELHI, INDIA, INDONESIA, PROFILES, USA,
};

#[cfg(feature = "download")]
#[doc(inline)]
pub use country::HttpSource;

#[doc(inline)]
pub use catalog::{
    build_registry, meta, ChartCategory, ChartComponent, ChartEntry, ChartTypeInfo, ChoroplethMeta,
    Registry, VariableKind, VariableRequirement, CHOROPLETH_META,
};

#[doc(inline)]
pub use config::{AssetsConfig, Config, RenderDefaults};
