use std::fmt::Write;

/// Trim surrounding whitespace and lower-case a raw region name.
pub fn clean_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Per-country knowledge about region names: how to canonicalize them and how to
/// describe a region in a tooltip.
///
/// Implementations must be deterministic; `normalize_name` must be idempotent.
pub trait RegionProfile {
    /// Known spellings mapped to their canonical (cleaned) form.
    fn alias_table(&self) -> &[(&'static str, &'static str)] { &[] }

    /// Map a feature name or data-row key to the key used for lookups.
    fn normalize_name(&self, raw: &str) -> String {
        let cleaned = clean_name(raw);
        self.alias_table().iter()
            .find(|(alias, _)| *alias == cleaned)
            .map(|(_, canonical)| canonical.to_string())
            .unwrap_or(cleaned)
    }

    /// Tooltip markup shown while hovering a region.
    fn format_tooltip(&self, name: &str, value: f64, meta: Option<&str>) -> String {
        default_tooltip(name, value, meta)
    }
}

impl<T: RegionProfile + ?Sized> RegionProfile for &T {
    fn alias_table(&self) -> &[(&'static str, &'static str)] { (**self).alias_table() }

    fn normalize_name(&self, raw: &str) -> String { (**self).normalize_name(raw) }

    fn format_tooltip(&self, name: &str, value: f64, meta: Option<&str>) -> String {
        (**self).format_tooltip(name, value, meta)
    }
}

/// Profile without aliases: names are only trimmed and lower-cased.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainNames;

impl RegionProfile for PlainNames {}

/// `<strong>name</strong><br/>Value: v` plus the meta line when present.
pub fn default_tooltip(name: &str, value: f64, meta: Option<&str>) -> String {
    let mut out = format!("<strong>{}</strong><br/>Value: {}", escape_html(name), format_number(value));
    if let Some(meta) = meta.filter(|m| !m.is_empty()) {
        let _ = write!(out, "<br/><em>{}</em>", escape_html(meta));
    }
    out
}

/// Print a number the way a browser would: no trailing `.0` on integers.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Escape text for HTML/XML content and attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Aliased;

    impl RegionProfile for Aliased {
        fn alias_table(&self) -> &[(&'static str, &'static str)] {
            &[("orissa", "odisha"), ("pondicherry", "puducherry")]
        }
    }

    #[test]
    fn clean_name_trims_and_lowercases() {
        assert_eq!(clean_name("  Tamil Nadu\t"), "tamil nadu");
        assert_eq!(clean_name("KORÇË"), "korçë");
        assert_eq!(clean_name(""), "");
    }

    #[test]
    fn aliases_resolve_after_cleaning() {
        assert_eq!(Aliased.normalize_name(" Orissa "), "odisha");
        assert_eq!(Aliased.normalize_name("Odisha"), "odisha");
        assert_eq!(Aliased.normalize_name("Kerala"), "kerala");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["Orissa", "  PONDICHERRY", "Goa", "", "   ", "Andaman & Nicobar"] {
            let once = Aliased.normalize_name(raw);
            assert_eq!(Aliased.normalize_name(&once), once, "input {raw:?}");
            assert_eq!(PlainNames.normalize_name(&PlainNames.normalize_name(raw)), PlainNames.normalize_name(raw));
        }
    }

    #[test]
    fn tooltip_includes_meta_only_when_present() {
        assert_eq!(default_tooltip("Goa", 10.0, None), "<strong>Goa</strong><br/>Value: 10");
        assert_eq!(default_tooltip("Goa", 2.5, Some("")), "<strong>Goa</strong><br/>Value: 2.5");
        assert_eq!(
            default_tooltip("A&B", 1.0, Some("<est>")),
            "<strong>A&amp;B</strong><br/>Value: 1<br/><em>&lt;est&gt;</em>",
        );
    }

    #[test]
    fn numbers_print_without_trailing_zero() {
        assert_eq!(format_number(30.0), "30");
        assert_eq!(format_number(-4.0), "-4");
        assert_eq!(format_number(0.125), "0.125");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
