use std::{fmt, str::FromStr};

use anyhow::{bail, Error, Result};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use super::{ChoroplethMeta, CHOROPLETH_META};
use crate::country::{self, CountryProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartCategory {
    Basic,
    Geo,
}

/// Column types a dataset can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Categorical,
    Numeric,
    Temporal,
    Geographic,
}

impl FromStr for VariableKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "categorical" => Ok(Self::Categorical),
            "numeric" => Ok(Self::Numeric),
            "temporal" => Ok(Self::Temporal),
            "geographic" => Ok(Self::Geographic),
            other => bail!("[catalog] unknown variable kind {other:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableRequirement {
    pub kind: VariableKind,
    pub required: bool,
    pub description: String,
}

impl VariableRequirement {
    fn required(kind: VariableKind, description: impl Into<String>) -> Self {
        Self { kind, required: true, description: description.into() }
    }
}

/// Catalog card for one chart type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTypeInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ChartCategory,
    pub examples: Vec<String>,
    /// Expected shape of the input data.
    pub structure: String,
    pub variables: Vec<VariableRequirement>,
}

/// Renderer behind a registry entry.
#[derive(Clone, Copy)]
pub enum ChartComponent {
    Bar,
    Line,
    Pie,
    Choropleth(&'static CountryProfile),
}

impl fmt::Debug for ChartComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bar => f.write_str("Bar"),
            Self::Line => f.write_str("Line"),
            Self::Pie => f.write_str("Pie"),
            Self::Choropleth(profile) => write!(f, "Choropleth({})", profile.key),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartEntry {
    pub name: String,
    pub component: ChartComponent,
    pub info: ChartTypeInfo,
}

/// Chart types that can actually be drawn, plus the wider catalog of chart
/// descriptions used for browsing and recommendations.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: IndexMap<String, ChartEntry>,
    catalog: Vec<ChartTypeInfo>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn base_entries() -> [ChartEntry; 3] {
    use VariableKind::*;

    let entry = |id: &str, name: &str, component, description: &str, examples: &[&str], structure: &str, variables| ChartEntry {
        name: name.to_string(),
        component,
        info: ChartTypeInfo {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: ChartCategory::Basic,
            examples: strings(examples),
            structure: structure.to_string(),
            variables,
        },
    };

    [
        entry("bar", "Bar Chart", ChartComponent::Bar, "Compare values across categories",
            &["Sales comparison", "Population distribution"], "Categories and values",
            vec![
                VariableRequirement::required(Categorical, "X-axis categories"),
                VariableRequirement::required(Numeric, "Y-axis values"),
            ]),
        entry("line", "Line Chart", ChartComponent::Line, "Show trends over time",
            &["Time series", "Trend analysis"], "Time points and values",
            vec![
                VariableRequirement::required(Temporal, "X-axis time points"),
                VariableRequirement::required(Numeric, "Y-axis values"),
            ]),
        entry("pie", "Pie Chart", ChartComponent::Pie, "Show parts of a whole",
            &["Market share", "Budget allocation"], "Categories and values",
            vec![
                VariableRequirement::required(Categorical, "Segments"),
                VariableRequirement::required(Numeric, "Values"),
            ]),
    ]
}

fn choropleth_id(key: &str) -> String {
    format!("{key}Choropleth")
}

fn choropleth_info(meta: &ChoroplethMeta, description: String) -> ChartTypeInfo {
    ChartTypeInfo {
        id: choropleth_id(meta.key),
        name: meta.title.to_string(),
        description,
        category: ChartCategory::Geo,
        examples: strings(meta.examples),
        structure: format!("{} and values", meta.geo_label),
        variables: vec![
            VariableRequirement::required(VariableKind::Geographic, meta.geo_label),
            VariableRequirement::required(VariableKind::Numeric, "Values for color intensity"),
        ],
    }
}

/// Assemble the registry from the base chart types and the choropleth metadata.
/// Only regions with a country profile get a drawable entry; every region is in
/// the catalog.
pub fn build_registry() -> Registry {
    let mut entries: IndexMap<String, ChartEntry> = base_entries().into_iter()
        .map(|entry| (entry.info.id.clone(), entry))
        .collect();
    let mut catalog: Vec<ChartTypeInfo> = entries.values().map(|e| e.info.clone()).collect();

    for meta in CHOROPLETH_META {
        catalog.push(choropleth_info(meta, format!(
            "Displays regional data on a map of {} using color intensity.",
            meta.place(),
        )));

        if let Some(profile) = country::profile(meta.key) {
            let info = choropleth_info(meta, meta.description.to_string());
            entries.insert(info.id.clone(), ChartEntry {
                name: meta.title.to_string(),
                component: ChartComponent::Choropleth(profile),
                info,
            });
        }
    }

    debug!(entries = entries.len(), catalog = catalog.len(), "built chart registry");
    Registry { entries, catalog }
}

impl Registry {
    pub fn get(&self, id: &str) -> Option<&ChartEntry> {
        self.entries.get(id)
    }

    /// Drawable entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &ChartEntry> {
        self.entries.values()
    }

    /// Country profile for a region key such as `"india"`.
    pub fn choropleth(&self, key: &str) -> Option<&'static CountryProfile> {
        match self.entries.get(&choropleth_id(key))?.component {
            ChartComponent::Choropleth(profile) => Some(profile),
            _ => None,
        }
    }

    /// Every chart description, drawable or not.
    pub fn catalog(&self) -> &[ChartTypeInfo] {
        &self.catalog
    }

    /// Catalog entries suited to a dataset with the given column kinds.
    pub fn recommend(&self, kinds: &[VariableKind]) -> Vec<&ChartTypeInfo> {
        let has = |kind| kinds.contains(&kind);
        let mut ids: Vec<String> = Vec::new();

        if has(VariableKind::Numeric) {
            if has(VariableKind::Categorical) {
                ids.extend(["bar".to_string(), "pie".to_string()]);
            }
            if has(VariableKind::Temporal) {
                ids.push("line".to_string());
            }
            if has(VariableKind::Geographic) {
                ids.extend(CHOROPLETH_META.iter().map(|m| choropleth_id(m.key)));
            }
        }

        ids.iter()
            .filter_map(|id| self.catalog.iter().find(|info| &info.id == id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_base_types_and_profiled_maps() {
        let registry = build_registry();
        let ids: Vec<&str> = registry.entries().map(|e| e.info.id.as_str()).collect();
        assert_eq!(ids, [
            "bar", "line", "pie",
            "indiaChoropleth", "usaChoropleth", "delhiChoropleth",
            "afghanistanChoropleth", "albaniaChoropleth", "indonesiaChoropleth",
        ]);
    }

    #[test]
    fn choropleth_entry_describes_its_data() {
        let registry = build_registry();
        let entry = registry.get("delhiChoropleth").unwrap();
        assert_eq!(entry.name, "Delhi Map");
        assert_eq!(entry.info.category, ChartCategory::Geo);
        assert_eq!(entry.info.structure, "District names and values");
        assert_eq!(entry.info.variables[0].kind, VariableKind::Geographic);
        assert_eq!(registry.choropleth("delhi").map(|p| p.geo_file), Some("delhi.json"));
        assert!(registry.choropleth("bar").is_none());
        assert!(registry.choropleth("france").is_none());
    }

    #[test]
    fn catalog_lists_every_region() {
        let registry = build_registry();
        assert_eq!(registry.catalog().len(), 3 + CHOROPLETH_META.len());
        let india = registry.catalog().iter().find(|i| i.id == "indiaChoropleth").unwrap();
        assert_eq!(india.description, "Displays regional data on a map of India using color intensity.");
    }

    #[test]
    fn recommends_by_column_kinds() {
        use VariableKind::*;
        let registry = build_registry();

        let ids = |kinds: &[VariableKind]| -> Vec<String> {
            registry.recommend(kinds).into_iter().map(|i| i.id.clone()).collect()
        };

        assert_eq!(ids(&[Categorical, Numeric]), ["bar", "pie"]);
        assert_eq!(ids(&[Temporal, Numeric]), ["line"]);
        assert!(ids(&[Categorical, Temporal]).is_empty());

        let geo = ids(&[Geographic, Numeric]);
        assert_eq!(geo.len(), CHOROPLETH_META.len());
        assert_eq!(geo[0], "indiaChoropleth");
    }

    #[test]
    fn parses_variable_kinds() {
        assert_eq!("Geographic".parse::<VariableKind>().unwrap(), VariableKind::Geographic);
        assert!("spatial".parse::<VariableKind>().is_err());
    }
}
