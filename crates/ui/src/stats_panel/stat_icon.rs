//! Circular progress icon for a single stat.

use bevy_egui::egui;

use crate::availability::{percent_from_value, PercentFormat};
use crate::color_scale::{with_opacity, ICON_FILL_OPACITY};
use crate::panel_items::StatsPanelItem;

pub const ICON_SIZE: f32 = 40.0;
pub const TRACK_WIDTH: f32 = 3.0;

/// Keeps the arc from collapsing: a full ring would start and end on the
/// same point, and an empty one would not be drawn at all.
const PROGRESS_EDGE_OFFSET: f64 = 0.005;
const ARC_SEGMENTS: f32 = 64.0;

const TRACK_COLOR: egui::Color32 = egui::Color32::from_rgb(60, 64, 78);
const HIDDEN_SHADE: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 150);

/// Fraction of the ring to draw for `progress` in `0..=1`.
pub fn progress_fraction(progress: f64) -> f64 {
    let percent = percent_from_value(progress, 0.0, 1.0, PercentFormat::Float);
    if percent >= 1.0 {
        1.0 - PROGRESS_EDGE_OFFSET
    } else if percent <= PROGRESS_EDGE_OFFSET {
        PROGRESS_EDGE_OFFSET
    } else {
        percent
    }
}

/// Points along a clockwise arc starting at the top of the circle.
pub fn arc_points(center: egui::Pos2, radius: f32, fraction: f32) -> Vec<egui::Pos2> {
    let sweep = std::f32::consts::TAU * fraction.clamp(0.0, 1.0);
    let segments = (ARC_SEGMENTS * fraction).ceil().max(2.0) as usize;
    (0..=segments)
        .map(|i| {
            let angle = sweep * i as f32 / segments as f32;
            center + radius * egui::vec2(angle.sin(), -angle.cos())
        })
        .collect()
}

/// Draw one stat. Clicks are reported through the returned response.
pub fn stat_icon(ui: &mut egui::Ui, item: &StatsPanelItem) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(ICON_SIZE, ICON_SIZE), egui::Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter();
    let center = rect.center();
    let radius = ICON_SIZE / 2.0 - TRACK_WIDTH;
    let color = item.color.color32();

    painter.circle(
        center,
        radius,
        with_opacity(color, ICON_FILL_OPACITY),
        egui::Stroke::new(TRACK_WIDTH, TRACK_COLOR),
    );
    painter.add(egui::Shape::line(
        arc_points(center, radius, progress_fraction(item.value) as f32),
        egui::Stroke::new(TRACK_WIDTH, color),
    ));
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        item.descriptor.glyph,
        egui::FontId::proportional(16.0),
        egui::Color32::WHITE,
    );
    if let Some(badge) = item.descriptor.badge {
        painter.text(
            center + egui::vec2(8.0, 8.0),
            egui::Align2::CENTER_CENTER,
            badge,
            egui::FontId::proportional(10.0),
            egui::Color32::WHITE,
        );
    }
    if item.hidden {
        painter.circle_filled(center, radius + TRACK_WIDTH / 2.0, HIDDEN_SHADE);
    }

    response.on_hover_text(item.tooltip.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_stays_inside_ring() {
        assert_eq!(progress_fraction(1.0), 0.995);
        assert_eq!(progress_fraction(3.0), 0.995);
        assert_eq!(progress_fraction(0.0), 0.005);
        assert_eq!(progress_fraction(0.004), 0.005);
        assert_eq!(progress_fraction(0.5), 0.5);
    }

    #[test]
    fn test_arc_starts_at_top_and_runs_clockwise() {
        let center = egui::pos2(20.0, 20.0);
        let points = arc_points(center, 10.0, 0.25);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first.x - 20.0).abs() < 1e-4 && (first.y - 10.0).abs() < 1e-4);
        // A quarter turn clockwise from the top ends on the right.
        assert!((last.x - 30.0).abs() < 1e-4 && (last.y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_arc_has_at_least_one_segment() {
        assert!(arc_points(egui::Pos2::ZERO, 5.0, 0.005).len() >= 3);
    }
}
