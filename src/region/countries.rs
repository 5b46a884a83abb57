//! Alias tables for countries whose data sources disagree on region spellings.
//! Keys and values are already cleaned (trimmed, lower-case).

/// Former or abbreviated names of Indian states and union territories.
pub const INDIA_ALIASES: &[(&str, &str)] = &[
    ("orissa", "odisha"),
    ("uttaranchal", "uttarakhand"),
    ("pondicherry", "puducherry"),
    ("dadra and nagar haveli", "dadra and nagar haveli and daman and diu"),
    ("andaman & nicobar islands", "andaman and nicobar islands"),
];

/// Bahasa official names mapped to the English names used by the boundary file.
pub const INDONESIA_ALIASES: &[(&str, &str)] = &[
    ("daerah istimewa yogyakarta", "yogyakarta"),
    ("kepulauan riau", "riau islands"),
    ("dki jakarta", "jakarta"),
];

/// ASCII spellings of Albanian counties mapped to the official diacritic names.
pub const ALBANIA_ALIASES: &[(&str, &str)] = &[
    ("tirana", "tiranë"),
    ("shkoder", "shkodër"),
    ("vlore", "vlorë"),
    ("diber", "dibër"),
    ("fier", "fier"),
    ("berat", "berat"),
    ("durres", "durrës"),
    ("gjirokaster", "gjirokastër"),
    ("korce", "korçë"),
    ("kukes", "kukës"),
    ("lezhe", "lezhë"),
    ("elbasan", "elbasan"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::clean_name;

    #[test]
    fn tables_are_cleaned_and_never_chain() {
        for table in [INDIA_ALIASES, INDONESIA_ALIASES, ALBANIA_ALIASES] {
            for &(alias, canonical) in table {
                assert_eq!(clean_name(alias), alias);
                assert_eq!(clean_name(canonical), canonical);
                // A canonical name that is itself an alias must map to itself.
                if let Some(&(_, target)) = table.iter().find(|(a, _)| *a == canonical) {
                    assert_eq!(target, canonical, "{alias} -> {canonical} -> {target}");
                }
            }
        }
    }
}
