//! City-wide indicators read by the stats panel, and their publisher.
//!
//! `CityIndicators` is written by the simulation (or a stand-in feed); this
//! module only mirrors it onto the `infoview` channels.

use bevy::prelude::*;
use bindings::{BindingBus, HostValueBinding};
use serde::{Deserialize, Serialize};

use crate::config::INFOVIEW_MODULE;

/// A bounded indicator. The producer keeps `min <= current <= max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub current: f64,
    pub min: f64,
    pub max: f64,
}

impl IndicatorValue {
    pub const fn new(current: f64, min: f64, max: f64) -> Self {
        Self { current, min, max }
    }
}

// =============================================================================
// Channels
// =============================================================================

/// Bounded `infoview` channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorChannel {
    Electricity,
    Water,
    Sewage,
    Landfill,
    Healthcare,
    Cemetery,
    Deathcare,
    FireHazard,
    Crime,
    Shelter,
    Elementary,
    HighSchool,
    College,
    University,
    Parking,
}

impl IndicatorChannel {
    pub const ALL: [IndicatorChannel; 15] = [
        Self::Electricity,
        Self::Water,
        Self::Sewage,
        Self::Landfill,
        Self::Healthcare,
        Self::Cemetery,
        Self::Deathcare,
        Self::FireHazard,
        Self::Crime,
        Self::Shelter,
        Self::Elementary,
        Self::HighSchool,
        Self::College,
        Self::University,
        Self::Parking,
    ];

    /// Channel name within the `infoview` module.
    pub fn name(self) -> &'static str {
        match self {
            Self::Electricity => "electricityAvailability",
            Self::Water => "waterAvailability",
            Self::Sewage => "sewageAvailability",
            Self::Landfill => "landfillAvailability",
            Self::Healthcare => "healthcareAvailability",
            Self::Cemetery => "cemeteryAvailability",
            Self::Deathcare => "deathcareAvailability",
            Self::FireHazard => "averageFireHazard",
            Self::Crime => "averageCrimeProbability",
            Self::Shelter => "shelterAvailability",
            Self::Elementary => "elementaryAvailability",
            Self::HighSchool => "highSchoolAvailability",
            Self::College => "collegeAvailability",
            Self::University => "universityAvailability",
            Self::Parking => "parkingAvailability",
        }
    }
}

/// Unbounded scalar `infoview` channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarChannel {
    GarbageProductionRate,
    GarbageProcessingRate,
    MailProductionRate,
    CollectedMail,
    DeliveredMail,
    Unemployment,
}

impl ScalarChannel {
    pub const ALL: [ScalarChannel; 6] = [
        Self::GarbageProductionRate,
        Self::GarbageProcessingRate,
        Self::MailProductionRate,
        Self::CollectedMail,
        Self::DeliveredMail,
        Self::Unemployment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::GarbageProductionRate => "garbageProductionRate",
            Self::GarbageProcessingRate => "garbageProcessingRate",
            Self::MailProductionRate => "mailProductionRate",
            Self::CollectedMail => "collectedMail",
            Self::DeliveredMail => "deliveredMail",
            Self::Unemployment => "unemployment",
        }
    }
}

// =============================================================================
// Resource
// =============================================================================

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct CityIndicators {
    pub electricity: IndicatorValue,
    pub water: IndicatorValue,
    pub sewage: IndicatorValue,
    pub landfill: IndicatorValue,
    pub healthcare: IndicatorValue,
    pub cemetery: IndicatorValue,
    pub deathcare: IndicatorValue,
    pub fire_hazard: IndicatorValue,
    pub crime: IndicatorValue,
    pub shelter: IndicatorValue,
    pub elementary: IndicatorValue,
    pub high_school: IndicatorValue,
    pub college: IndicatorValue,
    pub university: IndicatorValue,
    pub parking: IndicatorValue,
    pub garbage_production_rate: f64,
    pub garbage_processing_rate: f64,
    pub mail_production_rate: f64,
    pub collected_mail: f64,
    pub delivered_mail: f64,
    /// Unemployment in percent (0..100).
    pub unemployment: f64,
}

impl CityIndicators {
    pub fn indicator(&self, channel: IndicatorChannel) -> IndicatorValue {
        match channel {
            IndicatorChannel::Electricity => self.electricity,
            IndicatorChannel::Water => self.water,
            IndicatorChannel::Sewage => self.sewage,
            IndicatorChannel::Landfill => self.landfill,
            IndicatorChannel::Healthcare => self.healthcare,
            IndicatorChannel::Cemetery => self.cemetery,
            IndicatorChannel::Deathcare => self.deathcare,
            IndicatorChannel::FireHazard => self.fire_hazard,
            IndicatorChannel::Crime => self.crime,
            IndicatorChannel::Shelter => self.shelter,
            IndicatorChannel::Elementary => self.elementary,
            IndicatorChannel::HighSchool => self.high_school,
            IndicatorChannel::College => self.college,
            IndicatorChannel::University => self.university,
            IndicatorChannel::Parking => self.parking,
        }
    }

    pub fn indicator_mut(&mut self, channel: IndicatorChannel) -> &mut IndicatorValue {
        match channel {
            IndicatorChannel::Electricity => &mut self.electricity,
            IndicatorChannel::Water => &mut self.water,
            IndicatorChannel::Sewage => &mut self.sewage,
            IndicatorChannel::Landfill => &mut self.landfill,
            IndicatorChannel::Healthcare => &mut self.healthcare,
            IndicatorChannel::Cemetery => &mut self.cemetery,
            IndicatorChannel::Deathcare => &mut self.deathcare,
            IndicatorChannel::FireHazard => &mut self.fire_hazard,
            IndicatorChannel::Crime => &mut self.crime,
            IndicatorChannel::Shelter => &mut self.shelter,
            IndicatorChannel::Elementary => &mut self.elementary,
            IndicatorChannel::HighSchool => &mut self.high_school,
            IndicatorChannel::College => &mut self.college,
            IndicatorChannel::University => &mut self.university,
            IndicatorChannel::Parking => &mut self.parking,
        }
    }

    pub fn scalar(&self, channel: ScalarChannel) -> f64 {
        match channel {
            ScalarChannel::GarbageProductionRate => self.garbage_production_rate,
            ScalarChannel::GarbageProcessingRate => self.garbage_processing_rate,
            ScalarChannel::MailProductionRate => self.mail_production_rate,
            ScalarChannel::CollectedMail => self.collected_mail,
            ScalarChannel::DeliveredMail => self.delivered_mail,
            ScalarChannel::Unemployment => self.unemployment,
        }
    }

    pub fn scalar_mut(&mut self, channel: ScalarChannel) -> &mut f64 {
        match channel {
            ScalarChannel::GarbageProductionRate => &mut self.garbage_production_rate,
            ScalarChannel::GarbageProcessingRate => &mut self.garbage_processing_rate,
            ScalarChannel::MailProductionRate => &mut self.mail_production_rate,
            ScalarChannel::CollectedMail => &mut self.collected_mail,
            ScalarChannel::DeliveredMail => &mut self.delivered_mail,
            ScalarChannel::Unemployment => &mut self.unemployment,
        }
    }
}

// =============================================================================
// Publisher
// =============================================================================

/// Host side of every `infoview` channel.
#[derive(Resource)]
pub struct InfoviewBindings {
    pub indicators: Vec<(IndicatorChannel, HostValueBinding<IndicatorValue>)>,
    pub scalars: Vec<(ScalarChannel, HostValueBinding<f64>)>,
}

impl FromWorld for InfoviewBindings {
    fn from_world(world: &mut World) -> Self {
        let transport = world
            .get_resource_or_insert_with(BindingBus::default)
            .0
            .clone();
        let current = world
            .get_resource::<CityIndicators>()
            .cloned()
            .unwrap_or_default();
        Self {
            indicators: IndicatorChannel::ALL
                .iter()
                .map(|&ch| {
                    let binding = HostValueBinding::new(
                        transport.clone(),
                        INFOVIEW_MODULE,
                        ch.name(),
                        current.indicator(ch),
                    );
                    (ch, binding)
                })
                .collect(),
            scalars: ScalarChannel::ALL
                .iter()
                .map(|&ch| {
                    let binding = HostValueBinding::new(
                        transport.clone(),
                        INFOVIEW_MODULE,
                        ch.name(),
                        current.scalar(ch),
                    );
                    (ch, binding)
                })
                .collect(),
        }
    }
}

/// System: mirror `CityIndicators` onto the `infoview` channels.
pub fn publish_indicators(indicators: Res<CityIndicators>, bindings: Res<InfoviewBindings>) {
    if !indicators.is_changed() {
        return;
    }
    for (channel, binding) in &bindings.indicators {
        binding.update(indicators.indicator(*channel));
    }
    for (channel, binding) in &bindings.scalars {
        binding.update(indicators.scalar(*channel));
    }
}

pub struct IndicatorsPlugin;

impl Plugin for IndicatorsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CityIndicators>()
            .init_resource::<InfoviewBindings>()
            .add_systems(
                Update,
                publish_indicators.in_set(crate::HostUpdateSet::Publish),
            );
    }
}
