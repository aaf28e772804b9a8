//! Percent normalization for indicator readings and production/processing
//! rate pairs.
//!
//! Every number the stats panel draws goes through these functions; color
//! selection in [`crate::color_scale`] works on their output and never
//! re-derives a percentage.

use host::config::RATE_MULTIPLIER_CAP;
use host::indicators::IndicatorValue;

/// Whether a percentage is expressed as `0..=1` or `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PercentFormat {
    #[default]
    Float,
    Int,
}

impl PercentFormat {
    fn multiplier(self) -> f64 {
        match self {
            PercentFormat::Float => 1.0,
            PercentFormat::Int => 100.0,
        }
    }
}

/// Clamp into `[min, max]` without panicking on an inverted range.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

pub fn clamp_percent(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Position of `value` within `[min, max]` as a percentage.
///
/// `value` is clamped first. A value at `min` is exactly `0`, which also
/// covers the empty range `min == max`.
pub fn percent_from_value(value: f64, min: f64, max: f64, format: PercentFormat) -> f64 {
    let value = clamp(value, min, max);
    if value == min {
        return 0.0;
    }
    (value - min) / (max - min) * format.multiplier()
}

/// Inverse of [`percent_from_value`].
pub fn value_from_percent(percent: f64, min: f64, max: f64, format: PercentFormat) -> f64 {
    (max - min) / format.multiplier() * percent + min
}

pub fn percent_from_indicator(indicator: &IndicatorValue, format: PercentFormat) -> f64 {
    percent_from_value(indicator.current, indicator.min, indicator.max, format)
}

/// How well processing keeps up with production, in `[-1, 1]`.
///
/// Saturates at `-1` once processing falls below `production / cap` and at
/// `1` once it exceeds `cap * production`. Both boundaries are exclusive, so
/// processing at exactly half (or double) production with a cap of 2 gives
/// `-0.5` (or `0.5`).
pub fn availability_from_rates(production: f64, processing: f64, cap: f64) -> f64 {
    if processing < production / cap {
        return -1.0;
    }
    if processing > cap * production {
        return 1.0;
    }
    if processing < production {
        processing / nonzero(production) - 1.0
    } else {
        1.0 - production / nonzero(processing)
    }
}

fn nonzero(rate: f64) -> f64 {
    if rate == 0.0 {
        f64::EPSILON
    } else {
        rate
    }
}

/// [`availability_from_rates`] mapped onto `0..=1`, with balanced rates at
/// `0.5`.
pub fn rate_availability_percent(production: f64, processing: f64, cap: f64) -> f64 {
    let availability = availability_from_rates(production, processing, cap);
    percent_from_value(availability, -1.0 / cap, 1.0 / cap, PercentFormat::Float)
}

/// Same as [`rate_availability_percent`] with the default multiplier cap.
pub fn default_rate_availability_percent(production: f64, processing: f64) -> f64 {
    rate_availability_percent(production, processing, RATE_MULTIPLIER_CAP)
}

/// Unemployment arrives in percent; negative or missing readings count as
/// zero.
pub fn unemployment_percent(unemployment: f64) -> f64 {
    if unemployment > 0.0 {
        unemployment / 100.0
    } else {
        0.0
    }
}
