//! Stand-in for the game's simulation: drifts every indicator on a timer so
//! the panel has something to show.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::common_conditions::on_timer;
use host::indicators::{CityIndicators, IndicatorChannel, IndicatorValue, ScalarChannel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_SEED: u64 = 42;
const STEP_INTERVAL: Duration = Duration::from_millis(500);
/// Largest single step, as a fraction of an indicator's range.
const MAX_DRIFT: f64 = 0.05;
const RATE_MAX: f64 = 1000.0;

/// Seeded RNG for the demo feed.
#[derive(Resource)]
pub struct DemoRng(pub StdRng);

impl Default for DemoRng {
    fn default() -> Self {
        Self(StdRng::seed_from_u64(DEFAULT_SEED))
    }
}

/// A plausible starting city: every indicator somewhere inside `0..=100`.
pub fn seed_indicators(rng: &mut impl Rng) -> CityIndicators {
    let mut city = CityIndicators::default();
    for channel in IndicatorChannel::ALL {
        *city.indicator_mut(channel) = IndicatorValue::new(rng.gen_range(20.0..=100.0), 0.0, 100.0);
    }
    for channel in ScalarChannel::ALL {
        *city.scalar_mut(channel) = match channel {
            ScalarChannel::Unemployment => rng.gen_range(0.0..=15.0),
            _ => rng.gen_range(100.0..=RATE_MAX),
        };
    }
    city
}

/// Move every value a small random step, staying inside its range.
pub fn drift_indicators(city: &mut CityIndicators, rng: &mut impl Rng) {
    for channel in IndicatorChannel::ALL {
        let value = city.indicator_mut(channel);
        let span = value.max - value.min;
        let step = rng.gen_range(-MAX_DRIFT..=MAX_DRIFT) * span;
        value.current = (value.current + step).clamp(value.min, value.max);
    }
    for channel in ScalarChannel::ALL {
        let max = match channel {
            ScalarChannel::Unemployment => 100.0,
            _ => RATE_MAX,
        };
        let value = city.scalar_mut(channel);
        *value = (*value + rng.gen_range(-MAX_DRIFT..=MAX_DRIFT) * max).clamp(0.0, max);
    }
}

fn seed_city(mut rng: ResMut<DemoRng>, mut city: ResMut<CityIndicators>) {
    *city = seed_indicators(&mut rng.0);
    info!("[DemoFeed] seeded city indicators");
}

fn drift_city(mut rng: ResMut<DemoRng>, mut city: ResMut<CityIndicators>) {
    drift_indicators(&mut city, &mut rng.0);
}

pub struct DemoFeedPlugin;

impl Plugin for DemoFeedPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DemoRng>()
            .add_systems(Startup, seed_city)
            .add_systems(
                Update,
                drift_city
                    .run_if(on_timer(STEP_INTERVAL))
                    .before(host::HostUpdateSet::Publish),
            );
    }
}
