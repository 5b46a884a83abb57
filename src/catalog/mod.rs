//! Chart catalog and renderer registry.

mod meta;
mod registry;

pub use meta::{meta, ChoroplethMeta, CHOROPLETH_META};
pub use registry::{
    build_registry, ChartCategory, ChartComponent, ChartEntry, ChartTypeInfo, Registry,
    VariableKind, VariableRequirement,
};
