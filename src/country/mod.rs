//! Per-country wrappers: boundary file, naming rules and projection preset for
//! each supported map, plus the load/render state machine around [`BaseMap`].
//!
//! [`BaseMap`]: crate::render::BaseMap

mod profile;
mod source;
mod state;

pub use profile::{profile, CountryProfile, AFGHANISTAN, ALBANIA, DELHI, INDIA, INDONESIA, PROFILES, USA};
pub use source::{DirSource, GeoSource};
#[cfg(feature = "download")]
pub use source::HttpSource;
pub use state::{CountryMap, CountryMapProps, FetchPolicy, MapState, MapView};
