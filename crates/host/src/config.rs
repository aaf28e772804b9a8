use std::path::PathBuf;

use bevy::prelude::*;

pub const MOD_NAME: &str = "CityStats";

// Channel modules published by the game itself.
pub const INFOVIEW_MODULE: &str = "infoview";
pub const GAME_MODULE: &str = "game";
pub const TOOL_MODULE: &str = "tool";

// Mod value channels.
pub const VALUE_HIDDEN_STATS: &str = "hiddenStats";
pub const VALUE_PANEL_OPEN_ON_LOAD: &str = "panelOpenOnLoad";
pub const VALUE_PANEL_ORIENTATION: &str = "panelOrientation";
pub const VALUE_PANEL_POSITION: &str = "panelPosition";
pub const VALUE_PANEL_VISIBLE: &str = "panelVisible";

// Mod trigger channels.
pub const TRIGGER_TOGGLE_PANEL_VISIBLE: &str = "togglePanelVisible";
pub const TRIGGER_SET_HIDDEN_STATS: &str = "setHiddenStats";
pub const TRIGGER_SET_PANEL_POSITION: &str = "setPanelPosition";
pub const TRIGGER_SET_PANEL_VISIBLE: &str = "setPanelVisible";

// Game info channels.
pub const VALUE_IN_PHOTO_MODE: &str = "inPhotoMode";
pub const VALUE_IS_EDITOR: &str = "isEditor";

/// Dragged panel positions are snapped to multiples of this many units.
pub const PANEL_GRID_SNAP: f32 = 10.0;

/// Production/processing rates further apart than this factor read as fully
/// unavailable (or fully covered).
pub const RATE_MULTIPLIER_CAP: f64 = 2.0;

/// Current on-disk format of the persisted hidden-stat string.
pub const HIDDEN_STATS_FORMAT_VERSION: u32 = 1;

pub const DEFAULT_DATA_DIR: &str = "ModsData/CityStats";
/// Hidden-stat save file inside the data folder.
pub const HIDDEN_STATS_FILE: &str = "hidden-stats.bin";
pub const DEFAULT_LOG_FILTER: &str = "info,wgpu=error,naga=warn";

pub const ENV_DATA_DIR: &str = "CITY_STATS_DATA_DIR";
pub const ENV_DUMP_LOCALE: &str = "CITY_STATS_DUMP_LOCALE";
pub const ENV_LOCALE: &str = "CITY_STATS_LOCALE";
pub const ENV_LOG_FILTER: &str = "CITY_STATS_LOG";

/// Process-level configuration, read once from the environment at startup.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ModConfig {
    /// Folder for mod-owned files (locale dumps).
    pub data_dir: PathBuf,
    /// Write the active string table to the data folder on startup.
    pub dump_locale: bool,
    /// Locale to activate on startup; `None` keeps the default.
    pub locale: Option<String>,
}

impl Default for ModConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            dump_locale: false,
            locale: None,
        }
    }
}

impl ModConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            data_dir: get(ENV_DATA_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            dump_locale: get(ENV_DUMP_LOCALE).is_some_and(|v| parse_flag(&v)),
            locale: get(ENV_LOCALE).map(|v| v.trim().to_string()),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ModConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ModConfig::default());
        assert_eq!(config.data_dir, PathBuf::from("ModsData/CityStats"));
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = ModConfig::from_lookup(lookup(&[
            (ENV_DATA_DIR, "/tmp/city-stats"),
            (ENV_DUMP_LOCALE, "TRUE"),
            (ENV_LOCALE, " de "),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/city-stats"));
        assert!(config.dump_locale);
        assert_eq!(config.locale.as_deref(), Some("de"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = ModConfig::from_lookup(lookup(&[(ENV_DATA_DIR, "  "), (ENV_LOCALE, "")]));
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert!(config.locale.is_none());
    }

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag("on"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }
}
