//! Builds the ordered list of stats the panel draws.

use host::indicators::CityIndicators;
use host::localization::LocalizationState;

use crate::availability::{
    default_rate_availability_percent, percent_from_indicator, unemployment_percent,
    PercentFormat,
};
use crate::color_scale::{color_for, IconColor};
use crate::hidden_stats::HiddenStatSet;
use crate::stat_descriptors::{StatDescriptor, StatSource, STAT_DESCRIPTORS};

const HIDDEN_MODIFIER_KEY: &str = "CityStats.StatsPanel.StatTooltip.Modifier[Hidden]";

/// One stat as drawn this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsPanelItem {
    pub descriptor: &'static StatDescriptor,
    /// Progress in `0..=1`.
    pub value: f64,
    pub color: IconColor,
    pub hidden: bool,
    pub tooltip: String,
}

/// Progress value of one stat.
pub fn stat_value(source: &StatSource, city: &CityIndicators) -> f64 {
    match source {
        StatSource::Indicator(channel) => {
            percent_from_indicator(&city.indicator(*channel), PercentFormat::Float)
        }
        StatSource::Rates {
            production,
            processing,
        } => {
            let processed: f64 = processing.iter().map(|ch| city.scalar(*ch)).sum();
            default_rate_availability_percent(city.scalar(*production), processed)
        }
        StatSource::Percentage(channel) => unemployment_percent(city.scalar(*channel)),
    }
}

/// Every stat in display order. Hidden stats are included and flagged;
/// the panel decides whether to draw them.
pub fn build_items(
    city: &CityIndicators,
    hidden: &HiddenStatSet,
    loc: &LocalizationState,
) -> Vec<StatsPanelItem> {
    STAT_DESCRIPTORS
        .iter()
        .map(|descriptor| {
            let value = stat_value(&descriptor.source, city);
            let is_hidden = hidden.is_hidden(descriptor.id);
            let label = loc.t(descriptor.tooltip_key);
            let tooltip = if is_hidden {
                format!("{} ({})", label, loc.t(HIDDEN_MODIFIER_KEY))
            } else {
                label.to_string()
            };
            StatsPanelItem {
                descriptor,
                value,
                color: color_for(Some(descriptor.color_scale), Some(value)),
                hidden: is_hidden,
                tooltip,
            }
        })
        .collect()
}
