mod tables_en;
mod tables_other;

use bevy::prelude::*;
use std::collections::BTreeMap;

use crate::config::ModConfig;
use crate::data_folder::dump_string_table;

use tables_en::build_english_table;
use tables_other::{build_german_table, build_spanish_table};

// =============================================================================
// Constants
// =============================================================================

/// Locale used when no locale is explicitly set, and the lookup fallback.
pub const DEFAULT_LOCALE: &str = "en";

pub const SUPPORTED_LOCALES: &[&str] = &["en", "de", "es"];

/// Display names, same order as `SUPPORTED_LOCALES`.
pub const LOCALE_NAMES: &[&str] = &["English", "Deutsch", "Espanol"];

/// Localization key -> translated text, for one locale.
pub type StringTable = BTreeMap<String, String>;

pub(crate) fn table_from(entries: &[(&str, &str)]) -> StringTable {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Resource
// =============================================================================

/// Built-in string tables and the active locale.
///
/// UI code reads through `t()`, which falls back to English and then to the
/// key itself, so a missing translation never blanks a label.
#[derive(Resource, Debug, Clone)]
pub struct LocalizationState {
    pub active_locale: String,
    pub tables: BTreeMap<String, StringTable>,
}

impl Default for LocalizationState {
    fn default() -> Self {
        let mut tables = BTreeMap::new();
        tables.insert("en".to_string(), build_english_table());
        tables.insert("de".to_string(), build_german_table());
        tables.insert("es".to_string(), build_spanish_table());
        Self {
            active_locale: DEFAULT_LOCALE.to_string(),
            tables,
        }
    }
}

impl LocalizationState {
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tables
            .get(&self.active_locale)
            .and_then(|table| table.get(key).map(|s| s.as_str()))
            .or_else(|| {
                self.tables
                    .get(DEFAULT_LOCALE)
                    .and_then(|table| table.get(key).map(|s| s.as_str()))
            })
    }

    /// Switch locale. Unsupported locales are ignored and reported as `false`.
    pub fn set_locale(&mut self, locale: &str) -> bool {
        if self.tables.contains_key(locale) {
            self.active_locale = locale.to_string();
            true
        } else {
            false
        }
    }

    pub fn active_table(&self) -> Option<&StringTable> {
        self.tables.get(&self.active_locale)
    }

    pub fn active_locale_name(&self) -> &str {
        SUPPORTED_LOCALES
            .iter()
            .position(|code| *code == self.active_locale)
            .map(|i| LOCALE_NAMES[i])
            .unwrap_or(self.active_locale.as_str())
    }

    pub fn available_locales(&self) -> Vec<(&'static str, &'static str)> {
        SUPPORTED_LOCALES
            .iter()
            .zip(LOCALE_NAMES.iter())
            .map(|(code, name)| (*code, *name))
            .collect()
    }
}

// =============================================================================
// Startup
// =============================================================================

/// Activate the configured locale and, if asked, dump the English table to
/// the data folder so translators can start from it.
fn apply_locale_config(config: Res<ModConfig>, mut loc: ResMut<LocalizationState>) {
    if let Some(locale) = &config.locale {
        if loc.set_locale(locale) {
            info!("[Localization] active locale: {}", loc.active_locale_name());
        } else {
            warn!("[Localization] unsupported locale '{}', keeping '{}'", locale, loc.active_locale);
        }
    }

    if !config.dump_locale {
        return;
    }
    let Some(table) = loc.tables.get(DEFAULT_LOCALE) else {
        return;
    };
    match dump_string_table(&config.data_dir, DEFAULT_LOCALE, table) {
        Ok(path) => debug!("[Localization] Dumped mod locale ({})", path.display()),
        Err(e) => warn!(
            "[Localization] Failed to dump mod locale to '{}': {}",
            config.data_dir.display(),
            e
        ),
    }
}

pub struct LocalizationPlugin;

impl Plugin for LocalizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocalizationState>()
            .init_resource::<ModConfig>()
            .add_systems(Startup, apply_locale_config);
    }
}
