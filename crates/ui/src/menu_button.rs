//! Toolbar button that opens and closes the stats panel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use host::localization::LocalizationState;

use crate::options_panel::OptionsWindowVisible;
use crate::stats_bindings::StatsBindings;

const TOOLTIP_TITLE_KEY: &str = "CityStats.ToolbarActions[TogglePanel].TooltipTitle";
const TOOLTIP_DESCRIPTION_KEY: &str = "CityStats.ToolbarActions[TogglePanel].TooltipDescription";
const OPTIONS_TITLE_KEY: &str = "Options.SECTION[CityStats]";

const BUTTON_SIZE: egui::Vec2 = egui::vec2(32.0, 32.0);

pub fn menu_button_ui(
    mut contexts: EguiContexts,
    bindings: Option<Res<StatsBindings>>,
    loc: Res<LocalizationState>,
    mut options_visible: ResMut<OptionsWindowVisible>,
) {
    let Some(bindings) = bindings else {
        return;
    };
    if bindings.ui_suppressed() {
        return;
    }
    let panel_open = bindings.panel_visible.value_or_fallback();

    egui::Area::new(egui::Id::new("city_stats_menu_button"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .order(egui::Order::Foreground)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                let toggle = egui::Button::new(egui::RichText::new("📊").size(18.0))
                    .selected(panel_open)
                    .min_size(BUTTON_SIZE);
                let response = ui.add(toggle).on_hover_ui(|ui| {
                    ui.strong(loc.t(TOOLTIP_TITLE_KEY));
                    ui.label(loc.t(TOOLTIP_DESCRIPTION_KEY));
                });
                if response.clicked() {
                    bindings.toggle_panel_visible.fire();
                }

                let options = egui::Button::new(egui::RichText::new("⚙").size(16.0))
                    .selected(options_visible.0)
                    .min_size(BUTTON_SIZE);
                if ui
                    .add(options)
                    .on_hover_text(loc.t(OPTIONS_TITLE_KEY))
                    .clicked()
                {
                    options_visible.0 = !options_visible.0;
                }
            });
        });
}
