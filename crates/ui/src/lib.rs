//! egui front end of the City Stats mod.
//!
//! Panel state comes from the host only through value and trigger channels
//! (see [`stats_bindings`]). The options window is the exception: it edits
//! host settings directly, the way the game's own options screen would.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod availability;
pub mod color_scale;
pub mod hidden_stats;
pub mod menu_button;
pub mod options_panel;
pub mod panel_items;
pub mod panel_layout;
pub mod stat_descriptors;
pub mod stats_bindings;
pub mod stats_panel;
pub mod theme;

use stats_panel::{StatsPanelPlugin, StatsPanelSync};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((EguiPlugin, StatsPanelPlugin))
            .init_resource::<options_panel::OptionsWindowVisible>()
            .init_resource::<options_panel::PendingConfirm>()
            .add_systems(Startup, theme::apply_panel_theme)
            .add_systems(
                Update,
                (
                    stats_panel::stats_panel_ui,
                    menu_button::menu_button_ui,
                    options_panel::options_window_ui,
                )
                    .chain()
                    .after(StatsPanelSync),
            );
    }
}
