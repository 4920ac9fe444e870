//! Compiled mode catalog
//!
//! Tables are generated by build.rs from data/modes.yaml.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/modes.rs"));
}

pub use generated::{MAQAM_KEY_OVERRIDES, MODES, PREFER_SHARPS};

/// The catalog as JSON, for JavaScript consumers
pub const CATALOG_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/modes.json"));

/// Mode name selected by every maqam override
pub const MAQAM_MODE: &str = "maqam";

/// Mode name that always means the full temperament
pub const CHROMATIC_MODE: &str = "chromatic";

/// Mode name given to key signatures built from explicit intervals
pub const CUSTOM_MODE: &str = "custom";

static MODE_INDEX: Lazy<HashMap<&'static str, &'static [u32]>> =
    Lazy::new(|| MODES.iter().copied().collect());

static MAQAM_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| MAQAM_KEY_OVERRIDES.iter().copied().collect());

static PREFER_SHARPS_INDEX: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PREFER_SHARPS.iter().copied().collect());

/// Interval pattern of a named mode
pub fn intervals(name: &str) -> Option<&'static [u32]> {
    MODE_INDEX.get(name).copied()
}

/// Key fixed by a maqam mode name
pub fn maqam_key(name: &str) -> Option<&'static str> {
    MAQAM_INDEX.get(name).copied()
}

/// Whether "{key} {mode}" is spelled with sharps
pub fn prefers_sharps(key: &str, mode: &str) -> bool {
    PREFER_SHARPS_INDEX.contains(format!("{} {}", key, mode).as_str())
}

/// Catalog mode names in declaration order
pub fn mode_names() -> impl Iterator<Item = &'static str> {
    MODES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(intervals("major"), Some(&[2, 2, 1, 2, 2, 2, 1][..]));
        assert_eq!(intervals("major blues").map(|p| p.iter().sum::<u32>()), Some(12));
        assert_eq!(intervals("Major"), None);
        assert_eq!(maqam_key("ajam"), Some("bb"));
        assert!(intervals(MAQAM_MODE).is_some());
        assert!(intervals(CHROMATIC_MODE).is_some());
    }

    #[test]
    fn test_prefer_sharps() {
        assert!(prefers_sharps("g", "major"));
        assert!(prefers_sharps("a", "minor"));
        assert!(!prefers_sharps("f", "major"));
        assert!(!prefers_sharps("d", "minor"));
    }

    #[test]
    fn test_catalog_json_matches_tables() {
        let catalog: serde_json::Value = serde_json::from_str(CATALOG_JSON).unwrap();
        let modes = catalog["modes"].as_array().unwrap();
        assert_eq!(modes.len(), MODES.len());
        assert_eq!(mode_names().next(), modes[0]["name"].as_str());
    }
}
