//! Panel interaction and host reconciliation.

use bevy::prelude::*;
use host::ui_system::PanelPosition;

use super::StatsPanelState;
use crate::stat_descriptors::StatId;
use crate::stats_bindings::StatsBindings;

/// Something the player did to the panel this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    ToggleStat(StatId),
    ToggleEditing,
    Hover(bool),
    DragStart,
    DragBy { dx: f32, dy: f32 },
    DragStop,
}

/// Mirror the host channels into the panel state.
///
/// Position and hidden stats are only taken when the host value itself
/// moved, so an unrelated update never rolls back an optimistic local edit
/// that the host has not echoed yet.
pub fn apply_host_values(state: &mut StatsPanelState, bindings: &StatsBindings) {
    let layout = &mut state.layout;
    layout.visible = bindings.panel_visible.value_or_fallback();
    layout.in_photo_mode = bindings.in_photo_mode.value_or_fallback();
    layout.in_editor = bindings.is_editor.value_or_fallback();

    if let Ok(orientation) = bindings.panel_orientation.value() {
        if layout.observe_orientation(orientation) {
            bindings.set_panel_position.fire_with(&PanelPosition::ZERO);
        }
    }

    if let Ok(position) = bindings.panel_position.value() {
        if state.last_host_position != Some(position) && layout.adopt_host_position(position) {
            state.last_host_position = Some(position);
        }
    }

    if let Ok(raw) = bindings.hidden_stats.value() {
        if state.last_host_hidden.as_deref() != Some(raw.as_str()) {
            if state.hidden.load(&raw) {
                debug!("[StatsPanel] hidden stats: '{}'", raw);
            }
            state.last_host_hidden = Some(raw);
        }
    }
}

/// Apply one player action, sending whatever the host needs to know.
pub fn apply_action(state: &mut StatsPanelState, bindings: &StatsBindings, action: PanelAction) {
    match action {
        PanelAction::ToggleStat(id) => {
            // Stats are only clickable while editing.
            if !state.layout.editing {
                return;
            }
            if let Some(raw) = state.hidden.toggle(id) {
                debug!("[StatsPanel] toggled {}, sending '{}'", id, raw);
                bindings.set_hidden_stats.fire_with(&raw);
                state.items_stale = true;
            }
        }
        PanelAction::ToggleEditing => {
            let all_hidden = state.hidden.all_hidden();
            state.layout.toggle_editing(all_hidden);
        }
        PanelAction::Hover(hovering) => state.layout.hovering = hovering,
        PanelAction::DragStart => state.layout.start_drag(),
        PanelAction::DragBy { dx, dy } => state.layout.drag_by(dx, dy),
        PanelAction::DragStop => {
            if let Some(position) = state.layout.stop_drag() {
                debug!("[StatsPanel] moved to ({}, {})", position.x, position.y);
                bindings.set_panel_position.fire_with(&position);
            }
        }
    }
}
