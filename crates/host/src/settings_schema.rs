//! Declarative description of the mod's options page.
//!
//! The options window renders whatever this schema lists; it never hardcodes
//! individual options. Value options edit `ModSettings` / `KeyBindings`
//! directly, buttons are reported through `SettingsButtonPressed`.

use bevy::prelude::*;

use crate::config::MOD_NAME;
use crate::game_info::GameMode;
use crate::keybindings::BindableAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsGroup {
    General,
    KeyBinding,
}

impl SettingsGroup {
    pub const ALL: [SettingsGroup; 2] = [SettingsGroup::General, SettingsGroup::KeyBinding];

    pub fn name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::KeyBinding => "KeyBinding",
        }
    }

    pub fn locale_key(self) -> String {
        format!("Options.GROUP[{MOD_NAME}.{}]", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingId {
    PanelOpenOnLoad,
    PanelOrientation,
    ResetPanelPosition,
    ResetHiddenStats,
    TogglePanelBinding,
    ResetBindings,
}

impl SettingId {
    pub fn name(self) -> &'static str {
        match self {
            Self::PanelOpenOnLoad => "PanelOpenOnLoad",
            Self::PanelOrientation => "PanelOrientation",
            Self::ResetPanelPosition => "ResetPanelPosition",
            Self::ResetHiddenStats => "ResetHiddenStats",
            Self::TogglePanelBinding => "TogglePanelBinding",
            Self::ResetBindings => "ResetBindings",
        }
    }
}

/// How an option is presented and what editing it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingEffect {
    /// Checkbox bound to `ModSettings::panel_open_on_load`.
    TogglePanelOpenOnLoad,
    /// Dropdown bound to `ModSettings::panel_orientation`.
    SelectPanelOrientation,
    /// Button; fires `SettingsButtonPressed`, after confirmation if asked.
    Button { confirm: bool },
    /// Rebind button for a hotkey.
    KeyBinding(BindableAction),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingOption {
    pub id: SettingId,
    pub group: SettingsGroup,
    pub effect: SettingEffect,
    /// Only shown while a city is open.
    pub in_game_only: bool,
}

impl SettingOption {
    pub fn label_key(&self) -> String {
        format!("Options.OPTION[{MOD_NAME}.{}]", self.id.name())
    }

    pub fn description_key(&self) -> String {
        format!("Options.OPTION_DESCRIPTION[{MOD_NAME}.{}]", self.id.name())
    }

    /// Confirmation prompt key, for buttons that ask first.
    pub fn warning_key(&self) -> Option<String> {
        match self.effect {
            SettingEffect::Button { confirm: true } => {
                Some(format!("Options.WARNING[{MOD_NAME}.{}]", self.id.name()))
            }
            _ => None,
        }
    }

    pub fn is_visible(&self, mode: GameMode) -> bool {
        !self.in_game_only || mode.in_game()
    }
}

#[derive(Resource, Debug, Clone)]
pub struct SettingsSchema {
    pub options: Vec<SettingOption>,
}

impl Default for SettingsSchema {
    fn default() -> Self {
        let option = |id, group, effect, in_game_only| SettingOption {
            id,
            group,
            effect,
            in_game_only,
        };
        Self {
            options: vec![
                option(
                    SettingId::PanelOpenOnLoad,
                    SettingsGroup::General,
                    SettingEffect::TogglePanelOpenOnLoad,
                    false,
                ),
                option(
                    SettingId::PanelOrientation,
                    SettingsGroup::General,
                    SettingEffect::SelectPanelOrientation,
                    false,
                ),
                option(
                    SettingId::ResetPanelPosition,
                    SettingsGroup::General,
                    SettingEffect::Button { confirm: true },
                    true,
                ),
                option(
                    SettingId::ResetHiddenStats,
                    SettingsGroup::General,
                    SettingEffect::Button { confirm: true },
                    false,
                ),
                option(
                    SettingId::TogglePanelBinding,
                    SettingsGroup::KeyBinding,
                    SettingEffect::KeyBinding(BindableAction::TogglePanel),
                    false,
                ),
                option(
                    SettingId::ResetBindings,
                    SettingsGroup::KeyBinding,
                    SettingEffect::Button { confirm: false },
                    false,
                ),
            ],
        }
    }
}

impl SettingsSchema {
    pub fn section_key() -> String {
        format!("Options.SECTION[{MOD_NAME}]")
    }

    /// Options of `group` that should be shown in `mode`, in declaration order.
    pub fn visible_in(
        &self,
        group: SettingsGroup,
        mode: GameMode,
    ) -> impl Iterator<Item = &SettingOption> {
        self.options
            .iter()
            .filter(move |o| o.group == group && o.is_visible(mode))
    }
}

/// A schema button was activated (and confirmed, where required).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsButtonPressed(pub SettingId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_position_hidden_outside_game() {
        let schema = SettingsSchema::default();
        let menu: Vec<SettingId> = schema
            .visible_in(SettingsGroup::General, GameMode::MainMenu)
            .map(|o| o.id)
            .collect();
        assert!(!menu.contains(&SettingId::ResetPanelPosition));

        let game: Vec<SettingId> = schema
            .visible_in(SettingsGroup::General, GameMode::Game)
            .map(|o| o.id)
            .collect();
        assert_eq!(
            game,
            vec![
                SettingId::PanelOpenOnLoad,
                SettingId::PanelOrientation,
                SettingId::ResetPanelPosition,
                SettingId::ResetHiddenStats,
            ]
        );
    }

    #[test]
    fn test_keybinding_group() {
        let schema = SettingsSchema::default();
        let ids: Vec<SettingId> = schema
            .visible_in(SettingsGroup::KeyBinding, GameMode::MainMenu)
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![SettingId::TogglePanelBinding, SettingId::ResetBindings]);
    }

    #[test]
    fn test_locale_keys() {
        let schema = SettingsSchema::default();
        let reset = schema
            .options
            .iter()
            .find(|o| o.id == SettingId::ResetHiddenStats)
            .unwrap();
        assert_eq!(reset.label_key(), "Options.OPTION[CityStats.ResetHiddenStats]");
        assert_eq!(
            reset.warning_key().as_deref(),
            Some("Options.WARNING[CityStats.ResetHiddenStats]")
        );
        let bindings = schema
            .options
            .iter()
            .find(|o| o.id == SettingId::ResetBindings)
            .unwrap();
        assert!(bindings.warning_key().is_none());
    }
}
