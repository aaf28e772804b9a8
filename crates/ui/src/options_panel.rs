//! The mod's options window.
//!
//! Rendered from [`SettingsSchema`]: each group becomes a section and each
//! option a row whose widget depends on its [`SettingEffect`]. Buttons that
//! carry a warning ask for confirmation in a modal before
//! [`SettingsButtonPressed`] is sent.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use host::game_info::GameMode;
use host::keybindings::{KeyBindings, RebindState};
use host::localization::LocalizationState;
use host::mod_settings::{ModSettings, PanelOrientation};
use host::settings_schema::{
    SettingEffect, SettingId, SettingOption, SettingsButtonPressed, SettingsGroup, SettingsSchema,
};

const CONFIRM_KEY: &str = "Options.Common[Confirm]";
const CANCEL_KEY: &str = "Options.Common[Cancel]";
const PRESS_KEY_KEY: &str = "Options.Common[PressKey]";

const AWAITING_COLOR: egui::Color32 = egui::Color32::from_rgb(100, 200, 255);

// =============================================================================
// Resources
// =============================================================================

#[derive(Resource, Default)]
pub struct OptionsWindowVisible(pub bool);

/// A button waiting for the player to confirm its warning.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PendingConfirm(pub Option<SettingOption>);

/// Route a button press: straight to the host, or through the confirmation
/// modal when the option has a warning.
pub fn request_button(option: &SettingOption, pending: &mut PendingConfirm) -> Option<SettingId> {
    if option.warning_key().is_some() {
        pending.0 = Some(option.clone());
        None
    } else {
        Some(option.id)
    }
}

/// Close the modal; a confirmed button is returned for sending.
pub fn resolve_confirm(pending: &mut PendingConfirm, confirmed: bool) -> Option<SettingId> {
    let option = pending.0.take()?;
    confirmed.then_some(option.id)
}

// =============================================================================
// Systems
// =============================================================================

#[allow(clippy::too_many_arguments)]
pub fn options_window_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<OptionsWindowVisible>,
    schema: Res<SettingsSchema>,
    mode: Res<GameMode>,
    mut loc: ResMut<LocalizationState>,
    mut settings: ResMut<ModSettings>,
    key_bindings: Res<KeyBindings>,
    mut rebind: ResMut<RebindState>,
    mut pending: ResMut<PendingConfirm>,
    mut pressed: EventWriter<SettingsButtonPressed>,
) {
    if !visible.0 {
        return;
    }

    let mut open = true;
    let mut chosen_locale = None;
    let mut open_on_load = settings.panel_open_on_load;
    let mut orientation = settings.panel_orientation;
    let mut buttons = Vec::new();

    let title = loc.t(&SettingsSchema::section_key()).to_string();
    egui::Window::new(title)
        .id(egui::Id::new("city_stats_options"))
        .open(&mut open)
        .resizable(false)
        .default_width(340.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 6.0;

            ui.horizontal(|ui| {
                ui.label("🌐");
                egui::ComboBox::from_id_salt("city_stats_locale")
                    .selected_text(loc.active_locale_name())
                    .show_ui(ui, |ui| {
                        for (code, name) in loc.available_locales() {
                            if ui
                                .selectable_label(loc.active_locale == code, name)
                                .clicked()
                            {
                                chosen_locale = Some(code);
                            }
                        }
                    });
            });

            for group in SettingsGroup::ALL {
                let mut options = schema.visible_in(group, *mode).peekable();
                if options.peek().is_none() {
                    continue;
                }
                ui.add_space(6.0);
                ui.heading(loc.t(&group.locale_key()));
                ui.separator();

                for option in options {
                    let label_key = option.label_key();
                    let label = loc.t(&label_key);
                    let description_key = option.description_key();
                    let description = loc.get(&description_key);

                    let response = match option.effect {
                        SettingEffect::TogglePanelOpenOnLoad => {
                            ui.checkbox(&mut open_on_load, label)
                        }
                        SettingEffect::SelectPanelOrientation => {
                            ui.horizontal(|ui| {
                                ui.label(label);
                                let selected = orientation.locale_key();
                                egui::ComboBox::from_id_salt("city_stats_orientation")
                                    .selected_text(loc.t(&selected))
                                    .show_ui(ui, |ui| {
                                        for choice in PanelOrientation::ALL {
                                            let key = choice.locale_key();
                                            ui.selectable_value(
                                                &mut orientation,
                                                choice,
                                                loc.t(&key),
                                            );
                                        }
                                    });
                            })
                            .response
                        }
                        SettingEffect::Button { .. } => {
                            let response = ui.button(label);
                            if response.clicked() {
                                buttons.push(option.clone());
                            }
                            response
                        }
                        SettingEffect::KeyBinding(action) => {
                            ui.horizontal(|ui| {
                                ui.label(label);
                                let awaiting = rebind.awaiting == Some(action);
                                let text = if awaiting {
                                    egui::RichText::new(loc.t(PRESS_KEY_KEY))
                                        .color(AWAITING_COLOR)
                                } else {
                                    egui::RichText::new(key_bindings.get(action).display_label())
                                        .monospace()
                                };
                                let button =
                                    egui::Button::new(text).min_size(egui::vec2(100.0, 0.0));
                                if ui.add(button).clicked() {
                                    rebind.awaiting = if awaiting { None } else { Some(action) };
                                }
                            })
                            .response
                        }
                    };
                    if let Some(description) = description {
                        response.on_hover_text(description);
                    }
                }
            }
        });

    if let Some(code) = chosen_locale {
        if loc.active_locale != code && loc.set_locale(code) {
            info!("[Options] locale: {}", loc.active_locale_name());
        }
    }
    if open_on_load != settings.panel_open_on_load {
        settings.panel_open_on_load = open_on_load;
    }
    if orientation != settings.panel_orientation {
        settings.panel_orientation = orientation;
    }
    for option in buttons {
        if let Some(id) = request_button(&option, &mut pending) {
            pressed.send(SettingsButtonPressed(id));
        }
    }

    confirm_modal(contexts.ctx_mut(), &loc, &mut pending, &mut pressed);

    if !open {
        visible.0 = false;
        rebind.awaiting = None;
        pending.0 = None;
    }
}

fn confirm_modal(
    ctx: &egui::Context,
    loc: &LocalizationState,
    pending: &mut PendingConfirm,
    pressed: &mut EventWriter<SettingsButtonPressed>,
) {
    let Some(option) = &pending.0 else {
        return;
    };
    let warning = option
        .warning_key()
        .map(|key| loc.t(&key).to_string())
        .unwrap_or_default();

    let mut answer = None;
    egui::Window::new("city_stats_confirm")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(300.0)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(warning);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let size = egui::vec2(110.0, 28.0);
                    if ui
                        .add_sized(size, egui::Button::new(loc.t(CONFIRM_KEY)))
                        .clicked()
                    {
                        answer = Some(true);
                    }
                    if ui
                        .add_sized(size, egui::Button::new(loc.t(CANCEL_KEY)))
                        .clicked()
                    {
                        answer = Some(false);
                    }
                });
                ui.add_space(4.0);
            });
        });

    if let Some(confirmed) = answer {
        if let Some(id) = resolve_confirm(pending, confirmed) {
            pressed.send(SettingsButtonPressed(id));
        }
    }
}
