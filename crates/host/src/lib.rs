//! Host side of the City Stats mod: settings, hotkeys, localization, save
//! data and the channels that feed the stats panel.

use bevy::prelude::*;
use bindings::BindingBus;

pub mod config;
pub mod data_folder;
pub mod game_info;
pub mod hidden_stats_save;
pub mod indicators;
pub mod keybindings;
pub mod localization;
pub mod mod_settings;
pub mod settings_schema;
pub mod ui_system;

use config::ModConfig;

/// Ordering of host systems within `Update`.
///
/// Configured as a chain: `Input` → `Commands` → `Publish`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostUpdateSet {
    /// Hotkeys and rebind capture.
    Input,
    /// Apply queued UI requests, settings edits and lifecycle events.
    Commands,
    /// Push changed host state onto value channels.
    Publish,
}

pub struct HostPlugin;

impl Plugin for HostPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<ModConfig>() {
            app.insert_resource(ModConfig::from_env());
        }
        app.init_resource::<BindingBus>()
            .init_resource::<settings_schema::SettingsSchema>()
            .configure_sets(
                Update,
                (
                    HostUpdateSet::Input,
                    HostUpdateSet::Commands,
                    HostUpdateSet::Publish,
                )
                    .chain(),
            )
            .add_plugins((
                localization::LocalizationPlugin,
                keybindings::KeyBindingsPlugin,
                game_info::GameInfoPlugin,
                indicators::IndicatorsPlugin,
                ui_system::ModUiPlugin,
            ));

        let mod_config = app.world().resource::<ModConfig>();
        info!(
            "[Mod] {} loaded (data folder: {})",
            config::MOD_NAME,
            mod_config.data_dir.display()
        );
    }
}
