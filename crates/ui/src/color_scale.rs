//! Stepped color scales for stat icons.

use bevy_egui::egui::Color32;

/// Palette of the stat icon progress rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconColor {
    /// Neutral color for stats without a usable value or scale.
    Normal,
    Bad,
    BadLight,
    GoodLight,
    Good,
}

impl IconColor {
    pub const fn color32(self) -> Color32 {
        match self {
            IconColor::Normal => Color32::from_rgb(0x00, 0xC3, 0xF1),
            IconColor::Bad => Color32::from_rgb(0xFF, 0x4E, 0x18),
            IconColor::BadLight => Color32::from_rgb(0xFF, 0x83, 0x1B),
            IconColor::GoodLight => Color32::from_rgb(0x63, 0xB5, 0x06),
            IconColor::Good => Color32::from_rgb(0x47, 0x94, 0x36),
        }
    }
}

/// Border of the panel while stats are being edited.
pub const PANEL_EDITING_COLOR: Color32 = Color32::from_rgb(0xFF, 0xAA, 0x00);

/// Opacity of the disc behind each progress ring.
pub const ICON_FILL_OPACITY: f32 = 0.25;

/// Lowest value that still gets `color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScaleStep {
    pub color: IconColor,
    pub start: f64,
}

const fn step(color: IconColor, start: f64) -> ColorScaleStep {
    ColorScaleStep { color, start }
}

/// Steps ordered by ascending `start`.
pub type ColorScale = [ColorScaleStep];

pub const DEFAULT: &ColorScale = &[
    step(IconColor::Bad, 0.0),
    step(IconColor::BadLight, 0.4),
    step(IconColor::GoodLight, 0.5),
    step(IconColor::Good, 0.6),
];

pub const GRADUAL: &ColorScale = &[
    step(IconColor::Bad, 0.0),
    step(IconColor::BadLight, 0.25),
    step(IconColor::GoodLight, 0.5),
    step(IconColor::Good, 0.75),
];

pub const LANDFILL: &ColorScale = &[
    step(IconColor::Bad, 0.0),
    step(IconColor::BadLight, 0.25),
    step(IconColor::Good, 0.5),
    step(IconColor::GoodLight, 0.75),
];

pub const FIRE_HAZARD: &ColorScale = &[
    step(IconColor::Good, 0.0),
    step(IconColor::GoodLight, 0.33),
    step(IconColor::BadLight, 0.5),
    step(IconColor::Bad, 0.66),
];

pub const CRIME: &ColorScale = &[
    step(IconColor::Good, 0.0),
    step(IconColor::GoodLight, 0.2),
    step(IconColor::BadLight, 0.4),
    step(IconColor::Bad, 0.66),
];

pub const UNEMPLOYMENT: &ColorScale = &[
    step(IconColor::Good, 0.0),
    step(IconColor::GoodLight, 0.05),
    step(IconColor::BadLight, 0.12),
    step(IconColor::Bad, 0.2),
];

/// Color of the highest step whose `start <= value`.
///
/// Values below every step take the lowest step's color. Without a scale,
/// or without a usable value, the neutral color is returned.
pub fn color_for(scale: Option<&ColorScale>, value: Option<f64>) -> IconColor {
    let (Some(scale), Some(value)) = (scale, value) else {
        return IconColor::Normal;
    };
    if value.is_nan() {
        return IconColor::Normal;
    }
    scale
        .iter()
        .rev()
        .find(|step| value >= step.start)
        .or_else(|| scale.first())
        .map_or(IconColor::Normal, |step| step.color)
}

/// Alpha byte for an opacity in `0..=1`.
pub fn opacity_alpha(percent: f32) -> u8 {
    (255.0 * percent.clamp(0.0, 1.0)).round() as u8
}

pub fn with_opacity(color: Color32, percent: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), opacity_alpha(percent))
}
