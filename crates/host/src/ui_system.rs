//! Host side of the mod's UI channels.
//!
//! `ModUiBindings` owns the five value channels and four trigger channels of
//! the `CityStats` module. Trigger handlers run on whatever thread fires the
//! signal, so they only queue a [`HostCommand`]; `apply_host_commands` drains
//! the queue once per frame, in arrival order.

use std::sync::{Arc, Mutex, PoisonError};

use bevy::prelude::*;
use bindings::{BindingBus, HostValueBinding, TriggerBinding};
use serde::{Deserialize, Serialize};

use crate::config::{
    MOD_NAME, TRIGGER_SET_HIDDEN_STATS, TRIGGER_SET_PANEL_POSITION, TRIGGER_SET_PANEL_VISIBLE,
    TRIGGER_TOGGLE_PANEL_VISIBLE, VALUE_HIDDEN_STATS, VALUE_PANEL_OPEN_ON_LOAD,
    VALUE_PANEL_ORIENTATION, VALUE_PANEL_POSITION, VALUE_PANEL_VISIBLE,
};
use crate::game_info::GameLoaded;
use crate::hidden_stats_save::HiddenStatsData;
use crate::keybindings::{capture_rebind_input, KeyBindings, RebindState};
use crate::mod_settings::{ModSettings, PanelOrientation};
use crate::settings_schema::{SettingId, SettingsButtonPressed};
use crate::HostUpdateSet;

/// Panel offset from its docked default. Wire form `{"x": .., "y": ..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelPosition {
    pub x: f32,
    pub y: f32,
}

impl PanelPosition {
    pub const ZERO: PanelPosition = PanelPosition { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A UI request received over a trigger channel.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    TogglePanelVisible,
    SetPanelVisible(bool),
    SetPanelPosition(PanelPosition),
    SetHiddenStats(String),
}

type CommandQueue = Arc<Mutex<Vec<HostCommand>>>;

fn queue_handler<P: 'static>(
    queue: &CommandQueue,
    wrap: fn(P) -> HostCommand,
) -> impl Fn(P) + Send + Sync + 'static {
    let queue = Arc::clone(queue);
    move |payload| {
        queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(wrap(payload));
    }
}

#[derive(Resource)]
pub struct ModUiBindings {
    pub hidden_stats: HostValueBinding<String>,
    pub panel_open_on_load: HostValueBinding<bool>,
    pub panel_orientation: HostValueBinding<PanelOrientation>,
    pub panel_position: HostValueBinding<PanelPosition>,
    pub panel_visible: HostValueBinding<bool>,
    commands: CommandQueue,
    _triggers: Vec<TriggerBinding>,
}

impl FromWorld for ModUiBindings {
    fn from_world(world: &mut World) -> Self {
        let transport = world
            .get_resource_or_insert_with(BindingBus::default)
            .0
            .clone();
        let settings = world.get_resource::<ModSettings>().cloned().unwrap_or_default();
        let hidden = world
            .get_resource::<HiddenStatsData>()
            .map(|d| d.hidden.clone())
            .unwrap_or_default();

        let commands: CommandQueue = Arc::default();
        let toggle_queue = Arc::clone(&commands);
        let triggers = vec![
            TriggerBinding::new(
                transport.clone(),
                MOD_NAME,
                TRIGGER_TOGGLE_PANEL_VISIBLE,
                move || {
                    toggle_queue
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .push(HostCommand::TogglePanelVisible);
                },
            ),
            TriggerBinding::with_payload(
                transport.clone(),
                MOD_NAME,
                TRIGGER_SET_PANEL_VISIBLE,
                queue_handler(&commands, HostCommand::SetPanelVisible),
            ),
            TriggerBinding::with_payload(
                transport.clone(),
                MOD_NAME,
                TRIGGER_SET_PANEL_POSITION,
                queue_handler(&commands, HostCommand::SetPanelPosition),
            ),
            TriggerBinding::with_payload(
                transport.clone(),
                MOD_NAME,
                TRIGGER_SET_HIDDEN_STATS,
                queue_handler(&commands, HostCommand::SetHiddenStats),
            ),
        ];

        Self {
            hidden_stats: HostValueBinding::new(
                transport.clone(),
                MOD_NAME,
                VALUE_HIDDEN_STATS,
                hidden,
            ),
            panel_open_on_load: HostValueBinding::new(
                transport.clone(),
                MOD_NAME,
                VALUE_PANEL_OPEN_ON_LOAD,
                settings.panel_open_on_load,
            ),
            panel_orientation: HostValueBinding::new(
                transport.clone(),
                MOD_NAME,
                VALUE_PANEL_ORIENTATION,
                settings.panel_orientation,
            ),
            panel_position: HostValueBinding::new(
                transport.clone(),
                MOD_NAME,
                VALUE_PANEL_POSITION,
                PanelPosition::ZERO,
            ),
            panel_visible: HostValueBinding::new(transport, MOD_NAME, VALUE_PANEL_VISIBLE, false),
            commands,
            _triggers: triggers,
        }
    }
}

impl ModUiBindings {
    pub fn drain_commands(&self) -> Vec<HostCommand> {
        std::mem::take(&mut *self.commands.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn toggle_panel_visibility(&self) {
        self.set_panel_visibility(!self.panel_visible.value());
    }

    pub fn set_panel_visibility(&self, open: bool) {
        if self.panel_visible.update(open) {
            debug!("[ModUISystem] panel visible: {}", open);
        }
    }

    pub fn set_panel_position(&self, position: PanelPosition) {
        if self.panel_position.update(position) {
            debug!("[ModUISystem] panel position: ({}, {})", position.x, position.y);
        }
    }

    pub fn reset_panel_position(&self) {
        self.panel_position.update(PanelPosition::ZERO);
        info!("[ModUISystem] Reset panel position");
    }

    /// Changing the orientation also resets the position, since offsets from
    /// one docked default make no sense for the other.
    pub fn set_panel_orientation(&self, orientation: PanelOrientation) {
        if self.panel_orientation.value() != orientation {
            self.reset_panel_position();
        }
        if self.panel_orientation.update(orientation) {
            debug!("[ModUISystem] panel orientation: {}", orientation);
        }
    }
}

// =============================================================================
// Systems
// =============================================================================

pub fn apply_host_commands(bindings: Res<ModUiBindings>, mut hidden: ResMut<HiddenStatsData>) {
    for command in bindings.drain_commands() {
        match command {
            HostCommand::TogglePanelVisible => bindings.toggle_panel_visibility(),
            HostCommand::SetPanelVisible(open) => bindings.set_panel_visibility(open),
            HostCommand::SetPanelPosition(position) => bindings.set_panel_position(position),
            HostCommand::SetHiddenStats(value) => {
                debug!("[ModUISystem] hidden stats: '{}'", value);
                hidden.set_if_neq(HiddenStatsData { hidden: value });
            }
        }
    }
}

fn apply_settings(settings: Res<ModSettings>, bindings: Res<ModUiBindings>) {
    if !settings.is_changed() {
        return;
    }
    debug!("[ModUISystem] Settings applied: {}", *settings);
    bindings.set_panel_orientation(settings.panel_orientation);
    bindings.panel_open_on_load.update(settings.panel_open_on_load);
}

fn toggle_panel_hotkey(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    key_bindings: Res<KeyBindings>,
    rebind: Res<RebindState>,
    bindings: Res<ModUiBindings>,
) {
    let Some(keys) = keys else {
        return;
    };
    if rebind.awaiting.is_some() {
        return;
    }
    if key_bindings.toggle_panel.just_pressed(&keys) {
        bindings.toggle_panel_visibility();
    }
}

fn open_panel_on_load(
    mut loaded: EventReader<GameLoaded>,
    settings: Res<ModSettings>,
    bindings: Res<ModUiBindings>,
) {
    for _ in loaded.read() {
        debug!("[ModUISystem] OnGameLoaded");
        bindings.set_panel_visibility(settings.panel_open_on_load);
    }
}

fn handle_settings_buttons(
    mut pressed: EventReader<SettingsButtonPressed>,
    bindings: Res<ModUiBindings>,
    mut hidden: ResMut<HiddenStatsData>,
    mut key_bindings: ResMut<KeyBindings>,
) {
    for SettingsButtonPressed(id) in pressed.read() {
        match id {
            SettingId::ResetPanelPosition => bindings.reset_panel_position(),
            SettingId::ResetHiddenStats => {
                info!("[ModUISystem] Clear hidden stats");
                hidden.set_if_neq(HiddenStatsData::default());
            }
            SettingId::ResetBindings => {
                info!("[ModUISystem] Reset key bindings");
                key_bindings.reset();
            }
            other => warn!("[ModUISystem] {:?} is not a button", other),
        }
    }
}

/// Push the accepted hidden-stat string, whether it came from the UI, a
/// settings button or a loaded save.
fn publish_hidden_stats(hidden: Res<HiddenStatsData>, bindings: Res<ModUiBindings>) {
    if hidden.is_changed() {
        bindings.hidden_stats.update(hidden.hidden.clone());
    }
}

pub struct ModUiPlugin;

impl Plugin for ModUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ModSettings>()
            .init_resource::<HiddenStatsData>()
            .init_resource::<KeyBindings>()
            .init_resource::<RebindState>()
            .add_event::<GameLoaded>()
            .add_event::<SettingsButtonPressed>()
            .init_resource::<ModUiBindings>()
            // The key press that completes a rebind must not also fire the action.
            .add_systems(
                Update,
                toggle_panel_hotkey
                    .before(capture_rebind_input)
                    .in_set(HostUpdateSet::Input),
            )
            .add_systems(
                Update,
                (
                    apply_host_commands,
                    apply_settings,
                    open_panel_on_load,
                    handle_settings_buttons,
                )
                    .chain()
                    .in_set(HostUpdateSet::Commands),
            )
            .add_systems(Update, publish_hidden_stats.in_set(HostUpdateSet::Publish));
    }
}

#[cfg(test)]
mod tests;
