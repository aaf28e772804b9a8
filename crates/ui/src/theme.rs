use bevy_egui::{egui, EguiContexts};

/// Dark, rounded style shared by the panel, the menu button and the options
/// window.
pub fn apply_panel_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    apply_visuals(&mut style.visuals);
    ctx.set_style(style);
}

fn apply_visuals(visuals: &mut egui::Visuals) {
    let panel = egui::Color32::from_rgb(30, 32, 42);
    let inactive = egui::Color32::from_rgb(48, 52, 64);
    let hover = egui::Color32::from_rgb(66, 74, 94);
    let active = egui::Color32::from_rgb(0, 195, 241);

    for (widget, fill) in [
        (&mut visuals.widgets.noninteractive, panel),
        (&mut visuals.widgets.inactive, inactive),
        (&mut visuals.widgets.hovered, hover),
        (&mut visuals.widgets.active, active),
    ] {
        widget.bg_fill = fill;
        widget.weak_bg_fill = fill;
        widget.corner_radius = egui::CornerRadius::same(6);
    }

    visuals.window_fill = panel;
    visuals.panel_fill = panel;
    visuals.extreme_bg_color = egui::Color32::from_rgb(24, 26, 34);
    visuals.faint_bg_color = egui::Color32::from_rgb(38, 40, 50);
    visuals.window_corner_radius = egui::CornerRadius::same(8);

    visuals.selection.bg_fill = active;
    visuals.selection.stroke = egui::Stroke::new(1.0, active);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widgets_share_rounding() {
        let mut visuals = egui::Visuals::dark();
        apply_visuals(&mut visuals);
        assert_eq!(visuals.widgets.hovered.corner_radius, egui::CornerRadius::same(6));
        assert_eq!(visuals.window_corner_radius, egui::CornerRadius::same(8));
        assert_eq!(visuals.selection.bg_fill, visuals.widgets.active.bg_fill);
    }
}
