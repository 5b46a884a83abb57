use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Rgb;

/// Palette used when a requested theme is unknown.
pub const DEFAULT_THEME: &str = "Default Theme";

const SYSTEM_FONT: &str = "System Default";

/// Resolved font for labels and legend ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self { family: "sans-serif".to_string(), size: 10.0 }
    }
}

/// Named palettes and font settings shared by every chart type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTable {
    pub palettes: IndexMap<String, Vec<String>>,
    pub font_families: Vec<String>,
    pub font_sizes: IndexMap<String, f64>,
}

impl Default for ThemeTable {
    fn default() -> Self {
        let palette = |colors: &[&str]| colors.iter().map(|c| c.to_string()).collect::<Vec<_>>();

        let palettes = IndexMap::from([
            (DEFAULT_THEME.to_string(), palette(&["#3b82f6", "#6366f1", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#14b8a6"])),
            ("Cool Blues".to_string(), palette(&["#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1e40af"])),
            ("Warm Reds".to_string(), palette(&["#fee2e2", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c", "#991b1b"])),
            ("Greyscale".to_string(), palette(&["#f3f4f6", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151", "#1f2937"])),
            ("High Contrast".to_string(), palette(&["#000000", "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff"])),
            ("Pastel".to_string(), palette(&["#fcd5ce", "#fae1dd", "#f8edeb", "#e8e8e4", "#d8e2dc", "#ece4db", "#ffe5ec"])),
            ("Neon".to_string(), palette(&["#39ff14", "#ff073a", "#fe019a", "#08f7fe", "#f5f500", "#ff6ec7", "#9d00ff"])),
        ]);

        Self {
            palettes,
            font_families: [SYSTEM_FONT, "Helvetica", "OpenDyslexic", "Comic Sans MS"]
                .iter().map(|f| f.to_string()).collect(),
            font_sizes: IndexMap::from([
                ("Extra Small".to_string(), 10.0),
                ("Small".to_string(), 12.0),
                ("Medium".to_string(), 14.0),
                ("Large".to_string(), 18.0),
                ("Extra Large".to_string(), 24.0),
            ]),
        }
    }
}

impl ThemeTable {
    /// Palette for `name`, falling back to the default theme.
    pub fn palette(&self, name: &str) -> &[String] {
        if let Some(colors) = self.palettes.get(name) { return colors }
        warn!(theme = name, "unknown color theme, using {DEFAULT_THEME:?}");
        self.palettes.get(DEFAULT_THEME)
            .or_else(|| self.palettes.values().next())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Theme names in display order.
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }

    /// Resolve a font family and a named size ("Small", "Large", ...).
    /// Unknown families fall back to the system font, unknown sizes to 10px.
    pub fn font(&self, family: &str, size: &str) -> FontSpec {
        let family = if family == SYSTEM_FONT || !self.font_families.iter().any(|f| f == family) {
            FontSpec::default().family
        } else {
            family.to_string()
        };
        let size = self.font_sizes.get(size).copied().unwrap_or(FontSpec::default().size);
        FontSpec { family, size }
    }

    /// Add or replace palettes and font entries from `other`.
    pub fn merge(&mut self, other: ThemeTable) {
        self.palettes.extend(other.palettes);
        for family in other.font_families {
            if !self.font_families.contains(&family) { self.font_families.push(family) }
        }
        self.font_sizes.extend(other.font_sizes);
    }

    /// Every palette must be non-empty and made of parseable hex colors.
    pub fn validate(&self) -> Result<()> {
        for (name, colors) in &self.palettes {
            if colors.is_empty() { bail!("[theme] palette {name:?} has no colors") }
            for color in colors {
                color.parse::<Rgb>()
                    .with_context(|| format!("[theme] invalid color in palette {name:?}"))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let table = ThemeTable::default();
        table.validate().unwrap();
        assert_eq!(table.palettes.len(), 7);
        assert!(table.palettes.values().all(|p| p.len() == 7));
        assert_eq!(table.theme_names().next(), Some(DEFAULT_THEME));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let table = ThemeTable::default();
        assert_eq!(table.palette("Cool Blues")[0], "#dbeafe");
        assert_eq!(table.palette("No Such Theme"), table.palette(DEFAULT_THEME));
    }

    #[test]
    fn fonts_resolve_by_name() {
        let table = ThemeTable::default();
        assert_eq!(table.font("Helvetica", "Large"), FontSpec { family: "Helvetica".into(), size: 18.0 });
        assert_eq!(table.font("System Default", "Huge"), FontSpec::default());
        assert_eq!(table.font("Wingdings", "Small").family, "sans-serif");
    }

    #[test]
    fn merge_overrides_and_extends() {
        let mut table = ThemeTable::default();
        let extra: ThemeTable = serde_json::from_str(r##"{
            "palettes": {"Neon": ["#000"], "Forest": ["#e8f5e9", "#1b5e20"]},
            "font_families": ["Inter"]
        }"##).unwrap();

        table.merge(extra);
        assert_eq!(table.palette("Neon"), &["#000".to_string()]);
        assert_eq!(table.palette("Forest").len(), 2);
        assert!(table.font_families.iter().any(|f| f == "Inter"));
        table.validate().unwrap();
    }

    #[test]
    fn validate_rejects_bad_palettes() {
        let mut table = ThemeTable::default();
        table.palettes.insert("Broken".into(), vec!["blue".into()]);
        assert!(table.validate().is_err());

        let mut table = ThemeTable::default();
        table.palettes.insert("Empty".into(), vec![]);
        assert!(table.validate().is_err());
    }
}
