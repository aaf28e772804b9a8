//! The stats overlay panel.
//!
//! `sync_panel_state` mirrors host channels into [`StatsPanelState`] whenever
//! a channel reports a change, and rebuilds the item list. The egui system in
//! `panel_ui` only reads that state and turns clicks and drags into
//! [`PanelAction`]s, which `controller` applies and forwards to the host.

pub mod controller;
mod panel_ui;
pub mod stat_icon;

pub use controller::PanelAction;
pub(crate) use panel_ui::stats_panel_ui;

use bevy::prelude::*;
use host::localization::LocalizationState;
use host::ui_system::PanelPosition;
use host::HostUpdateSet;

use crate::hidden_stats::HiddenStatSet;
use crate::panel_items::{build_items, StatsPanelItem};
use crate::panel_layout::PanelLayout;
use crate::stats_bindings::{connect_stats_bindings, StatsBindings};

#[derive(Resource, Debug, Default)]
pub struct StatsPanelState {
    pub layout: PanelLayout,
    pub hidden: HiddenStatSet,
    /// Empty until every indicator channel has answered.
    pub items: Vec<StatsPanelItem>,
    last_host_position: Option<PanelPosition>,
    last_host_hidden: Option<String>,
    items_stale: bool,
}

/// Runs after the host has published this frame's values.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatsPanelSync;

pub fn sync_panel_state(
    bindings: Option<Res<StatsBindings>>,
    loc: Res<LocalizationState>,
    mut state: ResMut<StatsPanelState>,
) {
    let Some(bindings) = bindings else {
        return;
    };
    let host_changed = bindings.take_changed();
    if !host_changed && !state.items_stale && !loc.is_changed() {
        return;
    }
    let state = &mut *state;
    if host_changed {
        controller::apply_host_values(state, &bindings);
    }
    state.items = bindings
        .indicator_snapshot()
        .map(|city| build_items(&city, &state.hidden, &loc))
        .unwrap_or_default();
    state.items_stale = false;
}

/// Channel wiring and panel state, without any rendering. Added by
/// [`crate::UiPlugin`]; usable on its own in headless apps.
pub struct StatsPanelPlugin;

impl Plugin for StatsPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StatsPanelState>()
            .configure_sets(Update, StatsPanelSync.after(HostUpdateSet::Publish))
            .add_systems(Startup, connect_stats_bindings)
            .add_systems(Update, sync_panel_state.in_set(StatsPanelSync));
    }
}
