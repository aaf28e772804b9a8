use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use host::localization::LocalizationState;
use host::mod_settings::PanelOrientation;

use super::controller::{apply_action, PanelAction};
use super::stat_icon::stat_icon;
use super::StatsPanelState;
use crate::color_scale::PANEL_EDITING_COLOR;
use crate::panel_layout::PanelAxis;
use crate::stats_bindings::StatsBindings;

// =============================================================================
// Constants
// =============================================================================

/// Distance of the docked panel from the screen edge.
const DOCK_MARGIN: f32 = 12.0;
/// Long side of a drag handle.
const HANDLE_LENGTH: f32 = 48.0;
const HANDLE_THICKNESS: f32 = 6.0;

const PANEL_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(30, 32, 42, 225);
const PANEL_BORDER: egui::Color32 = egui::Color32::from_rgb(55, 60, 75);
const HANDLE_COLOR: egui::Color32 = egui::Color32::from_rgb(120, 130, 150);
const NOTE_COLOR: egui::Color32 = egui::Color32::from_rgb(170, 175, 190);

const TOGGLE_STATS_KEY: &str = "CityStats.StatsPanel.Actions[ToggleStats]";
const ALL_HIDDEN_KEY: &str = "CityStats.StatsPanel.Notes[AllHidden]";
const ADDITIONAL_STATS_KEY: &str = "CityStats.StatsPanel.Notes[AdditionalStats]";

/// Docked default of each orientation; the stored position is an offset
/// from here.
fn docked_anchor(screen: egui::Rect, orientation: PanelOrientation) -> (egui::Align2, egui::Pos2) {
    match orientation {
        PanelOrientation::Horizontal => (
            egui::Align2::CENTER_TOP,
            egui::pos2(screen.center().x, screen.min.y + DOCK_MARGIN),
        ),
        PanelOrientation::Vertical => (
            egui::Align2::LEFT_CENTER,
            egui::pos2(screen.min.x + DOCK_MARGIN, screen.center().y),
        ),
    }
}

// =============================================================================
// System
// =============================================================================

pub(crate) fn stats_panel_ui(
    mut contexts: EguiContexts,
    bindings: Option<Res<StatsBindings>>,
    loc: Res<LocalizationState>,
    mut state: ResMut<StatsPanelState>,
) {
    let Some(bindings) = bindings else {
        return;
    };
    if !state.layout.should_render() || state.items.is_empty() {
        return;
    }

    let ctx = contexts.ctx_mut();
    let (pivot, anchor) = docked_anchor(ctx.screen_rect(), state.layout.orientation);
    let offset = state.layout.position();
    let stroke = if state.layout.editing {
        egui::Stroke::new(2.0, PANEL_EDITING_COLOR)
    } else {
        egui::Stroke::new(1.0, PANEL_BORDER)
    };

    let mut actions = Vec::new();
    let panel = egui::Area::new(egui::Id::new("city_stats_panel"))
        .pivot(pivot)
        .fixed_pos(anchor + egui::vec2(offset.x, offset.y))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(PANEL_FILL)
                .stroke(stroke)
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(6))
                .show(ui, |ui| {
                    let handles_visible = state.layout.handles_visible();
                    match state.layout.axis() {
                        PanelAxis::Row => {
                            ui.vertical_centered(|ui| {
                                drag_handle(
                                    ui,
                                    egui::vec2(HANDLE_LENGTH, HANDLE_THICKNESS),
                                    handles_visible,
                                    &mut actions,
                                );
                                panel_body(ui, &state, &loc, &mut actions);
                            });
                        }
                        PanelAxis::Column => {
                            ui.horizontal(|ui| {
                                let size = egui::vec2(HANDLE_THICKNESS, HANDLE_LENGTH);
                                drag_handle(ui, size, handles_visible, &mut actions);
                                panel_body(ui, &state, &loc, &mut actions);
                                drag_handle(ui, size, handles_visible, &mut actions);
                            });
                        }
                    }
                });
        });

    let hovering = panel.response.contains_pointer();
    if hovering != state.layout.hovering {
        actions.push(PanelAction::Hover(hovering));
    }
    for action in actions {
        apply_action(&mut state, &bindings, action);
    }
}

// =============================================================================
// Render helpers
// =============================================================================

fn flow<R>(ui: &mut egui::Ui, axis: PanelAxis, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    match axis {
        PanelAxis::Row => ui.horizontal(add).inner,
        PanelAxis::Column => ui.vertical_centered(add).inner,
    }
}

/// Tooltip of the "+N" badge.
fn additional_stats_note(loc: &LocalizationState, count: usize) -> String {
    loc.t(ADDITIONAL_STATS_KEY).replace("{COUNT}", &count.to_string())
}

fn panel_body(
    ui: &mut egui::Ui,
    state: &StatsPanelState,
    loc: &LocalizationState,
    actions: &mut Vec<PanelAction>,
) {
    let editing = state.layout.editing;
    let hidden_count = state.hidden.len();

    flow(ui, state.layout.axis(), |ui| {
        ui.spacing_mut().item_spacing = egui::vec2(4.0, 4.0);

        for item in state.items.iter().filter(|item| editing || !item.hidden) {
            if stat_icon(ui, item).clicked() && editing {
                actions.push(PanelAction::ToggleStat(item.descriptor.id));
            }
        }

        if state.hidden.all_hidden() && !editing {
            ui.label(
                egui::RichText::new(loc.t(ALL_HIDDEN_KEY))
                    .italics()
                    .size(11.0)
                    .color(NOTE_COLOR),
            );
        }

        if hidden_count > 0 {
            ui.label(
                egui::RichText::new(format!("+{hidden_count}"))
                    .size(12.0)
                    .color(NOTE_COLOR),
            )
            .on_hover_text(additional_stats_note(loc, hidden_count));
        }

        let glyph = if editing { "✔" } else { "⚙" };
        let button = egui::Button::new(egui::RichText::new(glyph).size(14.0))
            .min_size(egui::vec2(24.0, 24.0));
        if ui
            .add(button)
            .on_hover_text(loc.t(TOGGLE_STATS_KEY))
            .clicked()
        {
            actions.push(PanelAction::ToggleEditing);
        }
    });
}

fn drag_handle(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    visible: bool,
    actions: &mut Vec<PanelAction>,
) {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());
    let response = response.on_hover_cursor(egui::CursorIcon::Grab);
    if visible {
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(3), HANDLE_COLOR);
    }
    if response.drag_started() {
        actions.push(PanelAction::DragStart);
    }
    if response.dragged() {
        let delta = response.drag_delta();
        actions.push(PanelAction::DragBy {
            dx: delta.x,
            dy: delta.y,
        });
    }
    if response.drag_stopped() {
        actions.push(PanelAction::DragStop);
    }
}
