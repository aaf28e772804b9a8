use std::sync::Arc;

use bindings::{bind_value, EventBus, Subscription, TriggerChannel};

use super::*;
use crate::config::ModConfig;
use crate::hidden_stats_save::HiddenStatsSavePlugin;
use crate::HostPlugin;

fn test_app() -> (App, Arc<EventBus>) {
    let bus = Arc::new(EventBus::new());
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(BindingBus(bus.clone()))
        .insert_resource(ModConfig::default())
        .add_plugins(HostPlugin);
    app.update();
    (app, bus)
}

fn trigger(bus: &Arc<EventBus>, name: &str) -> TriggerChannel {
    TriggerChannel::new(bus.clone(), MOD_NAME, name)
}

fn visible(bus: &Arc<EventBus>) -> Subscription<bool> {
    bind_value(bus.clone(), MOD_NAME, VALUE_PANEL_VISIBLE, false)
        .subscribe()
        .unwrap()
}

fn position(bus: &Arc<EventBus>) -> Subscription<PanelPosition> {
    bind_value(bus.clone(), MOD_NAME, VALUE_PANEL_POSITION, PanelPosition::ZERO)
        .subscribe()
        .unwrap()
}

// -------------------------------------------------------------------------
// Trigger channels
// -------------------------------------------------------------------------

#[test]
fn test_initial_values_answer_subscribe() {
    let (_app, bus) = test_app();
    assert_eq!(visible(&bus).value(), Ok(false));
    let orientation = bind_value(
        bus.clone(),
        MOD_NAME,
        VALUE_PANEL_ORIENTATION,
        PanelOrientation::Vertical,
    )
    .subscribe()
    .unwrap();
    assert_eq!(orientation.value(), Ok(PanelOrientation::Horizontal));
}

#[test]
fn test_toggle_trigger_flips_visibility() {
    let (mut app, bus) = test_app();
    let sub = visible(&bus);
    trigger(&bus, TRIGGER_TOGGLE_PANEL_VISIBLE).fire();
    app.update();
    assert_eq!(sub.value(), Ok(true));
    trigger(&bus, TRIGGER_TOGGLE_PANEL_VISIBLE).fire();
    app.update();
    assert_eq!(sub.value(), Ok(false));
}

#[test]
fn test_commands_apply_in_arrival_order() {
    let (mut app, bus) = test_app();
    let sub = visible(&bus);
    trigger(&bus, TRIGGER_SET_PANEL_VISIBLE).fire_with(&true);
    trigger(&bus, TRIGGER_TOGGLE_PANEL_VISIBLE).fire();
    trigger(&bus, TRIGGER_TOGGLE_PANEL_VISIBLE).fire();
    app.update();
    assert_eq!(sub.value(), Ok(true));
}

#[test]
fn test_set_panel_position_trigger() {
    let (mut app, bus) = test_app();
    let sub = position(&bus);
    trigger(&bus, TRIGGER_SET_PANEL_POSITION).fire_with(&PanelPosition::new(30.0, -40.0));
    app.update();
    assert_eq!(sub.value(), Ok(PanelPosition::new(30.0, -40.0)));
}

#[test]
fn test_malformed_position_is_ignored() {
    let (mut app, bus) = test_app();
    let sub = position(&bus);
    trigger(&bus, TRIGGER_SET_PANEL_POSITION).fire_with("left");
    app.update();
    assert_eq!(sub.value(), Ok(PanelPosition::ZERO));
}

#[test]
fn test_set_hidden_stats_updates_save_data_and_channel() {
    let (mut app, bus) = test_app();
    let sub = bind_value(bus.clone(), MOD_NAME, VALUE_HIDDEN_STATS, String::new())
        .subscribe()
        .unwrap();
    trigger(&bus, TRIGGER_SET_HIDDEN_STATS).fire_with("crimeRate,fireHazard");
    app.update();
    assert_eq!(sub.value(), Ok("crimeRate,fireHazard".to_string()));
    assert_eq!(
        app.world().resource::<HiddenStatsData>().hidden,
        "crimeRate,fireHazard"
    );
}

// -------------------------------------------------------------------------
// Settings, hotkey and lifecycle
// -------------------------------------------------------------------------

#[test]
fn test_orientation_change_resets_position() {
    let (mut app, bus) = test_app();
    let pos = position(&bus);
    trigger(&bus, TRIGGER_SET_PANEL_POSITION).fire_with(&PanelPosition::new(50.0, 60.0));
    app.update();
    assert_eq!(pos.value(), Ok(PanelPosition::new(50.0, 60.0)));

    app.world_mut()
        .resource_mut::<ModSettings>()
        .panel_orientation = PanelOrientation::Vertical;
    app.update();
    assert_eq!(pos.value(), Ok(PanelPosition::ZERO));
    assert_eq!(
        app.world()
            .resource::<ModUiBindings>()
            .panel_orientation
            .value(),
        PanelOrientation::Vertical
    );
}

#[test]
fn test_unrelated_settings_change_keeps_position() {
    let (mut app, bus) = test_app();
    let pos = position(&bus);
    trigger(&bus, TRIGGER_SET_PANEL_POSITION).fire_with(&PanelPosition::new(10.0, 10.0));
    app.update();

    app.world_mut()
        .resource_mut::<ModSettings>()
        .panel_open_on_load = true;
    app.update();
    assert_eq!(pos.value(), Ok(PanelPosition::new(10.0, 10.0)));
    assert!(app
        .world()
        .resource::<ModUiBindings>()
        .panel_open_on_load
        .value());
}

#[test]
fn test_game_loaded_applies_open_on_load() {
    let (mut app, bus) = test_app();
    let sub = visible(&bus);
    app.world_mut()
        .resource_mut::<ModSettings>()
        .panel_open_on_load = true;
    app.world_mut().send_event(GameLoaded);
    app.update();
    assert_eq!(sub.value(), Ok(true));

    app.world_mut()
        .resource_mut::<ModSettings>()
        .panel_open_on_load = false;
    app.world_mut().send_event(GameLoaded);
    app.update();
    assert_eq!(sub.value(), Ok(false));
}

#[test]
fn test_hotkey_toggles_panel() {
    let (mut app, bus) = test_app();
    app.init_resource::<ButtonInput<KeyCode>>();
    let sub = visible(&bus);
    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.press(KeyCode::ControlLeft);
        keys.press(KeyCode::ShiftLeft);
        keys.press(KeyCode::KeyS);
    }
    app.update();
    assert_eq!(sub.value(), Ok(true));
}

#[test]
fn test_hotkey_ignored_while_rebinding() {
    let (mut app, bus) = test_app();
    app.init_resource::<ButtonInput<KeyCode>>();
    let sub = visible(&bus);
    app.world_mut().resource_mut::<RebindState>().awaiting =
        Some(crate::keybindings::BindableAction::TogglePanel);
    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.press(KeyCode::ControlLeft);
        keys.press(KeyCode::ShiftLeft);
        keys.press(KeyCode::KeyS);
    }
    app.update();
    assert_eq!(sub.value(), Ok(false));
}

#[test]
fn test_completing_rebind_does_not_toggle_panel() {
    let (mut app, bus) = test_app();
    app.init_resource::<ButtonInput<KeyCode>>();
    let sub = visible(&bus);
    app.world_mut().resource_mut::<RebindState>().awaiting =
        Some(crate::keybindings::BindableAction::TogglePanel);
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyP);
    app.update();

    let bound = app.world().resource::<KeyBindings>().toggle_panel;
    assert_eq!(bound.key, KeyCode::KeyP);
    assert!(!bound.ctrl && !bound.shift);
    assert!(app.world().resource::<RebindState>().awaiting.is_none());
    assert_eq!(sub.value(), Ok(false));
}

#[test]
fn test_settings_buttons() {
    let (mut app, bus) = test_app();
    let pos = position(&bus);
    trigger(&bus, TRIGGER_SET_PANEL_POSITION).fire_with(&PanelPosition::new(20.0, 20.0));
    trigger(&bus, TRIGGER_SET_HIDDEN_STATS).fire_with("unemployment");
    app.update();
    app.world_mut()
        .resource_mut::<KeyBindings>()
        .toggle_panel
        .key = KeyCode::KeyX;

    app.world_mut()
        .send_event(SettingsButtonPressed(SettingId::ResetPanelPosition));
    app.world_mut()
        .send_event(SettingsButtonPressed(SettingId::ResetHiddenStats));
    app.world_mut()
        .send_event(SettingsButtonPressed(SettingId::ResetBindings));
    app.update();

    assert_eq!(pos.value(), Ok(PanelPosition::ZERO));
    assert_eq!(app.world().resource::<HiddenStatsData>().hidden, "");
    assert_eq!(*app.world().resource::<KeyBindings>(), KeyBindings::default());
}

// -------------------------------------------------------------------------
// Save data
// -------------------------------------------------------------------------

#[test]
fn test_saved_file_pushes_hidden_stats_next_session() {
    let dir = std::env::temp_dir().join(format!("city-stats-session-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let session = |dir: &std::path::Path| {
        let bus = Arc::new(EventBus::new());
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(BindingBus(bus.clone()))
            .insert_resource(ModConfig {
                data_dir: dir.to_path_buf(),
                ..ModConfig::default()
            })
            .add_plugins((HostPlugin, HiddenStatsSavePlugin));
        app.update();
        (app, bus)
    };

    let (mut app, bus) = session(&dir);
    trigger(&bus, TRIGGER_SET_HIDDEN_STATS).fire_with("parkingAvailability");
    app.update();
    drop(app);

    let (_other, other_bus) = session(&dir);
    let sub = bind_value(other_bus.clone(), MOD_NAME, VALUE_HIDDEN_STATS, String::new())
        .subscribe()
        .unwrap();
    assert_eq!(sub.value(), Ok("parkingAvailability".to_string()));
    let _ = std::fs::remove_dir_all(&dir);
}
