//! Game mode, photo mode and the load lifecycle, as seen by the mod.

use bevy::prelude::*;
use bindings::{BindingBus, HostValueBinding};

use crate::config::{GAME_MODULE, TOOL_MODULE, VALUE_IN_PHOTO_MODE, VALUE_IS_EDITOR};

/// Which top-level mode the game is running in.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameMode {
    #[default]
    MainMenu,
    Game,
    Editor,
}

impl GameMode {
    pub fn in_game(self) -> bool {
        self == GameMode::Game
    }

    pub fn is_editor(self) -> bool {
        self == GameMode::Editor
    }
}

/// Whether the photo mode camera is active.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhotoMode(pub bool);

/// Sent once a city has finished loading.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct GameLoaded;

/// Host side of `tool.isEditor` and `game.inPhotoMode`.
#[derive(Resource)]
pub struct GameInfoBindings {
    pub is_editor: HostValueBinding<bool>,
    pub in_photo_mode: HostValueBinding<bool>,
}

impl FromWorld for GameInfoBindings {
    fn from_world(world: &mut World) -> Self {
        let transport = world
            .get_resource_or_insert_with(BindingBus::default)
            .0
            .clone();
        let mode = world.get_resource::<GameMode>().copied().unwrap_or_default();
        let photo = world.get_resource::<PhotoMode>().copied().unwrap_or_default();
        Self {
            is_editor: HostValueBinding::new(
                transport.clone(),
                TOOL_MODULE,
                VALUE_IS_EDITOR,
                mode.is_editor(),
            ),
            in_photo_mode: HostValueBinding::new(
                transport,
                GAME_MODULE,
                VALUE_IN_PHOTO_MODE,
                photo.0,
            ),
        }
    }
}

fn publish_game_info(
    mode: Res<GameMode>,
    photo: Res<PhotoMode>,
    bindings: Res<GameInfoBindings>,
) {
    if mode.is_changed() && bindings.is_editor.update(mode.is_editor()) {
        debug!("[GameInfo] editor mode: {}", mode.is_editor());
    }
    if photo.is_changed() && bindings.in_photo_mode.update(photo.0) {
        debug!("[GameInfo] photo mode: {}", photo.0);
    }
}

pub struct GameInfoPlugin;

impl Plugin for GameInfoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameMode>()
            .init_resource::<PhotoMode>()
            .add_event::<GameLoaded>()
            .init_resource::<GameInfoBindings>()
            .add_systems(
                Update,
                publish_game_info.in_set(crate::HostUpdateSet::Publish),
            );
    }
}
