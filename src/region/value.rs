use ahash::AHashMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::RegionProfile;

/// Value attached to a region: a bare number or a record with optional meta text
/// and named sub-metrics ("layers").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionValue {
    Number(f64),
    Record {
        value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meta: Option<String>,
        #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
        layers: IndexMap<String, f64>,
    },
}

impl RegionValue {
    /// The number to paint: the requested layer when the record carries it,
    /// otherwise the base value.
    pub fn resolve(&self, layer: Option<&str>) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Record { value, layers, .. } => layer
                .and_then(|name| layers.get(name))
                .copied()
                .unwrap_or(*value),
        }
    }

    pub fn meta(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Record { meta, .. } => meta.as_deref(),
        }
    }
}

impl From<f64> for RegionValue {
    fn from(value: f64) -> Self { Self::Number(value) }
}

/// Caller-owned map from raw region display name to its value, in input order.
pub type RegionValues = IndexMap<String, RegionValue>;

/// What hover/click callbacks receive for a region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reading {
    pub value: f64,
    pub meta: Option<String>,
}

/// Lookup table keyed by normalized region name, derived for one render pass.
///
/// Raw keys that normalize to the same name collapse to the one inserted last.
#[derive(Debug, Clone, Default)]
pub struct NormalizedValues<'a> {
    entries: AHashMap<String, &'a RegionValue>,
}

impl<'a> NormalizedValues<'a> {
    pub fn new(values: &'a RegionValues, profile: &dyn RegionProfile) -> Self {
        let mut entries = AHashMap::with_capacity(values.len());
        for (raw, value) in values {
            entries.insert(profile.normalize_name(raw), value);
        }
        Self { entries }
    }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Look up an already-normalized key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&'a RegionValue> {
        self.entries.get(key).copied()
    }

    /// Normalize `raw` with `profile` and look it up.
    pub fn lookup(&self, raw: &str, profile: &dyn RegionProfile) -> Option<&'a RegionValue> {
        self.get(&profile.normalize_name(raw))
    }

    /// Resolved reading for a key; absent regions read as zero without meta.
    pub fn reading(&self, key: &str, layer: Option<&str>) -> Reading {
        match self.get(key) {
            Some(value) => Reading { value: value.resolve(layer), meta: value.meta().map(str::to_owned) },
            None => Reading::default(),
        }
    }

    /// Every resolved value, in no particular order.
    pub fn resolved(&self, layer: Option<&str>) -> Vec<f64> {
        self.entries.values().map(|value| value.resolve(layer)).collect()
    }
}
