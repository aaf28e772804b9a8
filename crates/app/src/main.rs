use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use host::config::{DEFAULT_LOG_FILTER, ENV_LOG_FILTER};
use host::game_info::{GameLoaded, GameMode};
use host::hidden_stats_save::HiddenStatsSavePlugin;
use host::mod_settings::ModSettings;

mod demo_feed;

fn main() {
    let filter = std::env::var(ENV_LOG_FILTER).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "City Stats".to_string(),
                    resolution: (1280.0, 720.0).into(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter,
                ..default()
            }),
    )
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(ModSettings {
        panel_open_on_load: true,
        ..default()
    })
    .add_plugins((
        host::HostPlugin,
        HiddenStatsSavePlugin,
        ui::UiPlugin,
        demo_feed::DemoFeedPlugin,
    ))
    .add_systems(Startup, (spawn_camera, enter_city));

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// The demo has no menus: start straight in a loaded city.
fn enter_city(mut mode: ResMut<GameMode>, mut loaded: EventWriter<GameLoaded>) {
    *mode = GameMode::Game;
    loaded.send(GameLoaded);
}
