use crate::{
    features::DEFAULT_NAME_KEYS,
    projection::Projection,
    region::{RegionProfile, ALBANIA_ALIASES, INDIA_ALIASES, INDONESIA_ALIASES},
};

/// Static description of one supported map.
#[derive(Debug)]
pub struct CountryProfile {
    /// Registry key, e.g. `"india"`.
    pub key: &'static str,
    pub title: &'static str,
    /// Boundary file name inside the static-assets location.
    pub geo_file: &'static str,
    /// Feature properties tried, in order, for a region's display name.
    pub name_keys: &'static [&'static str],
    pub aliases: &'static [(&'static str, &'static str)],
    pub projection: Projection,
    pub width: f64,
    pub height: f64,
    pub legend_id: &'static str,
    /// Placeholder shown while the boundary file is being fetched.
    pub loading_text: &'static str,
}

impl RegionProfile for CountryProfile {
    fn alias_table(&self) -> &[(&'static str, &'static str)] { self.aliases }
}

pub static INDIA: CountryProfile = CountryProfile {
    key: "india",
    title: "India",
    geo_file: "india.json",
    name_keys: DEFAULT_NAME_KEYS,
    aliases: INDIA_ALIASES,
    projection: Projection::Mercator,
    width: 800.0,
    height: 600.0,
    legend_id: "legend-india-map",
    loading_text: "Loading map...",
};

pub static USA: CountryProfile = CountryProfile {
    key: "usa",
    title: "USA",
    geo_file: "usa.json",
    name_keys: DEFAULT_NAME_KEYS,
    aliases: &[],
    projection: Projection::Albers,
    width: 960.0,
    height: 600.0,
    legend_id: "legend-usa-map",
    loading_text: "Loading USA map...",
};

pub static DELHI: CountryProfile = CountryProfile {
    key: "delhi",
    title: "Delhi",
    geo_file: "delhi.json",
    name_keys: &["name", "district"],
    aliases: &[],
    projection: Projection::Mercator,
    width: 800.0,
    height: 550.0,
    legend_id: "legend-delhi-map",
    loading_text: "Loading Delhi map...",
};

pub static AFGHANISTAN: CountryProfile = CountryProfile {
    key: "afghanistan",
    title: "Afghanistan",
    geo_file: "afghanistan.json",
    name_keys: DEFAULT_NAME_KEYS,
    aliases: &[],
    projection: Projection::Mercator,
    width: 800.0,
    height: 600.0,
    legend_id: "legend-afghanistan-map",
    loading_text: "Loading Afghanistan map...",
};

pub static ALBANIA: CountryProfile = CountryProfile {
    key: "albania",
    title: "Albania",
    geo_file: "albania.json",
    name_keys: DEFAULT_NAME_KEYS,
    aliases: ALBANIA_ALIASES,
    projection: Projection::Mercator,
    width: 800.0,
    height: 600.0,
    legend_id: "legend-albania-map",
    loading_text: "Loading Albania map...",
};

pub static INDONESIA: CountryProfile = CountryProfile {
    key: "indonesia",
    title: "Indonesia",
    geo_file: "indonesia.json",
    name_keys: DEFAULT_NAME_KEYS,
    aliases: INDONESIA_ALIASES,
    projection: Projection::Mercator,
    width: 800.0,
    height: 600.0,
    legend_id: "legend-indonesia-map",
    loading_text: "Loading map...",
};

/// Every map with a boundary file.
pub static PROFILES: [&CountryProfile; 6] = [&INDIA, &USA, &DELHI, &AFGHANISTAN, &ALBANIA, &INDONESIA];

/// Look up a profile by registry key (case-insensitive).
pub fn profile(key: &str) -> Option<&'static CountryProfile> {
    let key = key.trim();
    PROFILES.iter().copied().find(|p| p.key.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_unique() {
        for (i, a) in PROFILES.iter().enumerate() {
            for b in &PROFILES[i + 1..] {
                assert_ne!(a.key, b.key);
                assert_ne!(a.geo_file, b.geo_file);
                assert_ne!(a.legend_id, b.legend_id);
            }
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(profile("USA").map(|p| p.key), Some("usa"));
        assert_eq!(profile(" delhi ").map(|p| p.height), Some(550.0));
        assert!(profile("atlantis").is_none());
    }

    #[test]
    fn india_resolves_former_names() {
        assert_eq!(INDIA.normalize_name("Orissa"), INDIA.normalize_name("odisha"));
        assert_eq!(USA.normalize_name(" Texas "), "texas");
    }

    #[test]
    fn usa_uses_albers() {
        assert_eq!(USA.projection.name(), "albers");
        assert_eq!(DELHI.name_keys, ["name", "district"]);
    }
}
