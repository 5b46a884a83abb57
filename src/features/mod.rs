//! Geographic boundary data: one named (multi)polygon per region.

mod collection;

pub use collection::{Feature, FeatureCollection, DEFAULT_NAME_KEYS};
