//! Static metadata for every stat the panel can show.
//!
//! `STAT_DESCRIPTORS` is in display order. The same order is used to render
//! the panel and to serialize the hidden-stat string.

use std::fmt;
use std::str::FromStr;

use host::indicators::{IndicatorChannel, ScalarChannel};

use crate::color_scale::{self, ColorScale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatId {
    ElectricityAvailability,
    WaterAvailability,
    SewageAvailability,
    GarbageAvailability,
    LandfillAvailability,
    HealthcareAvailability,
    CemeteryAvailability,
    CremationAvailability,
    FireHazard,
    CrimeRate,
    ShelterAvailability,
    EducationElementaryAvailability,
    EducationHighschoolAvailability,
    EducationCollegeAvailability,
    EducationUniversityAvailability,
    MailAvailability,
    ParkingAvailability,
    Unemployment,
}

impl StatId {
    pub const COUNT: usize = 18;

    pub const ALL: [StatId; Self::COUNT] = [
        Self::ElectricityAvailability,
        Self::WaterAvailability,
        Self::SewageAvailability,
        Self::GarbageAvailability,
        Self::LandfillAvailability,
        Self::HealthcareAvailability,
        Self::CemeteryAvailability,
        Self::CremationAvailability,
        Self::FireHazard,
        Self::CrimeRate,
        Self::ShelterAvailability,
        Self::EducationElementaryAvailability,
        Self::EducationHighschoolAvailability,
        Self::EducationCollegeAvailability,
        Self::EducationUniversityAvailability,
        Self::MailAvailability,
        Self::ParkingAvailability,
        Self::Unemployment,
    ];

    /// Identifier used in the hidden-stat string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ElectricityAvailability => "electricityAvailability",
            Self::WaterAvailability => "waterAvailability",
            Self::SewageAvailability => "sewageAvailability",
            Self::GarbageAvailability => "garbageAvailability",
            Self::LandfillAvailability => "landfillAvailability",
            Self::HealthcareAvailability => "healthcareAvailability",
            Self::CemeteryAvailability => "cemeteryAvailability",
            Self::CremationAvailability => "cremationAvailability",
            Self::FireHazard => "fireHazard",
            Self::CrimeRate => "crimeRate",
            Self::ShelterAvailability => "shelterAvailability",
            Self::EducationElementaryAvailability => "educationElementaryAvailability",
            Self::EducationHighschoolAvailability => "educationHighschoolAvailability",
            Self::EducationCollegeAvailability => "educationCollegeAvailability",
            Self::EducationUniversityAvailability => "educationUniversityAvailability",
            Self::MailAvailability => "mailAvailability",
            Self::ParkingAvailability => "parkingAvailability",
            Self::Unemployment => "unemployment",
        }
    }

    /// Position in display order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn descriptor(self) -> &'static StatDescriptor {
        &STAT_DESCRIPTORS[self.index()]
    }
}

impl fmt::Display for StatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stat id not present in this build's descriptor table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatId(pub String);

impl fmt::Display for UnknownStatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown stat id '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatId {}

impl FromStr for StatId {
    type Err = UnknownStatId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownStatId(s.to_string()))
    }
}

// =============================================================================
// Descriptors
// =============================================================================

/// Where a stat's value comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatSource {
    /// Percent of a bounded indicator.
    Indicator(IndicatorChannel),
    /// Processing keeping up with production; processing is the sum of the
    /// listed channels.
    Rates {
        production: ScalarChannel,
        processing: &'static [ScalarChannel],
    },
    /// Scalar already in percent (`0..100`).
    Percentage(ScalarChannel),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatDescriptor {
    pub id: StatId,
    /// Glyph drawn inside the progress ring.
    pub glyph: &'static str,
    /// Letter drawn over the glyph to tell apart stats sharing one.
    pub badge: Option<&'static str>,
    pub tooltip_key: &'static str,
    pub color_scale: &'static ColorScale,
    /// Infoview the stat belongs to in the game.
    pub infoview: &'static str,
    pub source: StatSource,
}

const fn indicator(
    id: StatId,
    glyph: &'static str,
    tooltip_key: &'static str,
    color_scale: &'static ColorScale,
    infoview: &'static str,
    channel: IndicatorChannel,
) -> StatDescriptor {
    StatDescriptor {
        id,
        glyph,
        badge: None,
        tooltip_key,
        color_scale,
        infoview,
        source: StatSource::Indicator(channel),
    }
}

const fn education(
    id: StatId,
    badge: &'static str,
    tooltip_key: &'static str,
    channel: IndicatorChannel,
) -> StatDescriptor {
    StatDescriptor {
        id,
        glyph: "🎓",
        badge: Some(badge),
        tooltip_key,
        color_scale: color_scale::DEFAULT,
        infoview: "Education",
        source: StatSource::Indicator(channel),
    }
}

pub static STAT_DESCRIPTORS: [StatDescriptor; StatId::COUNT] = [
    indicator(
        StatId::ElectricityAvailability,
        "⚡",
        "CityStats.Stats[ElectricityAvailability]",
        color_scale::DEFAULT,
        "Electricity",
        IndicatorChannel::Electricity,
    ),
    indicator(
        StatId::WaterAvailability,
        "💧",
        "CityStats.Stats[WaterAvailability]",
        color_scale::DEFAULT,
        "WaterPipes",
        IndicatorChannel::Water,
    ),
    indicator(
        StatId::SewageAvailability,
        "🚽",
        "CityStats.Stats[SewageTreatment]",
        color_scale::DEFAULT,
        "WaterPipes",
        IndicatorChannel::Sewage,
    ),
    StatDescriptor {
        id: StatId::GarbageAvailability,
        glyph: "🗑",
        badge: None,
        tooltip_key: "CityStats.Stats[GarbageProcessing]",
        color_scale: color_scale::DEFAULT,
        infoview: "Garbage",
        source: StatSource::Rates {
            production: ScalarChannel::GarbageProductionRate,
            processing: &[ScalarChannel::GarbageProcessingRate],
        },
    },
    indicator(
        StatId::LandfillAvailability,
        "⛰",
        "CityStats.Stats[LandfillAvailability]",
        color_scale::LANDFILL,
        "Garbage",
        IndicatorChannel::Landfill,
    ),
    indicator(
        StatId::HealthcareAvailability,
        "✚",
        "CityStats.Stats[HealthcareAvailability]",
        color_scale::DEFAULT,
        "Healthcare",
        IndicatorChannel::Healthcare,
    ),
    indicator(
        StatId::CemeteryAvailability,
        "⚰",
        "CityStats.Stats[CemeteryAvailability]",
        color_scale::GRADUAL,
        "Healthcare",
        IndicatorChannel::Cemetery,
    ),
    indicator(
        StatId::CremationAvailability,
        "⚱",
        "CityStats.Stats[CrematoryAvailability]",
        color_scale::DEFAULT,
        "Healthcare",
        IndicatorChannel::Deathcare,
    ),
    indicator(
        StatId::FireHazard,
        "🔥",
        "CityStats.Stats[FireHazard]",
        color_scale::FIRE_HAZARD,
        "FireRescue",
        IndicatorChannel::FireHazard,
    ),
    indicator(
        StatId::CrimeRate,
        "👮",
        "CityStats.Stats[CrimeRate]",
        color_scale::CRIME,
        "Police",
        IndicatorChannel::Crime,
    ),
    indicator(
        StatId::ShelterAvailability,
        "⛺",
        "CityStats.Stats[ShelterAvailability]",
        color_scale::GRADUAL,
        "DisasterControl",
        IndicatorChannel::Shelter,
    ),
    education(
        StatId::EducationElementaryAvailability,
        "E",
        "CityStats.Stats[ElementaryAvailability]",
        IndicatorChannel::Elementary,
    ),
    education(
        StatId::EducationHighschoolAvailability,
        "H",
        "CityStats.Stats[HighschoolAvailability]",
        IndicatorChannel::HighSchool,
    ),
    education(
        StatId::EducationCollegeAvailability,
        "C",
        "CityStats.Stats[CollegeAvailability]",
        IndicatorChannel::College,
    ),
    education(
        StatId::EducationUniversityAvailability,
        "U",
        "CityStats.Stats[UniversityAvailability]",
        IndicatorChannel::University,
    ),
    StatDescriptor {
        id: StatId::MailAvailability,
        glyph: "✉",
        badge: None,
        tooltip_key: "CityStats.Stats[MailAvailability]",
        color_scale: color_scale::DEFAULT,
        infoview: "PostService",
        source: StatSource::Rates {
            production: ScalarChannel::MailProductionRate,
            processing: &[ScalarChannel::CollectedMail, ScalarChannel::DeliveredMail],
        },
    },
    indicator(
        StatId::ParkingAvailability,
        "🅿",
        "CityStats.Stats[ParkingAvailability]",
        color_scale::DEFAULT,
        "Roads",
        IndicatorChannel::Parking,
    ),
    StatDescriptor {
        id: StatId::Unemployment,
        glyph: "💼",
        badge: None,
        tooltip_key: "CityStats.Stats[Unemployment]",
        color_scale: color_scale::UNEMPLOYMENT,
        infoview: "Workplaces",
        source: StatSource::Percentage(ScalarChannel::Unemployment),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use host::localization::LocalizationState;

    #[test]
    fn test_descriptor_table_matches_id_order() {
        for (index, descriptor) in STAT_DESCRIPTORS.iter().enumerate() {
            assert_eq!(descriptor.id.index(), index, "{}", descriptor.id);
            assert_eq!(StatId::ALL[index], descriptor.id);
        }
    }

    #[test]
    fn test_id_strings_round_trip() {
        for id in StatId::ALL {
            assert_eq!(id.as_str().parse::<StatId>(), Ok(id));
        }
        assert_eq!(
            "bogusId".parse::<StatId>(),
            Err(UnknownStatId("bogusId".to_string()))
        );
    }

    #[test]
    fn test_every_tooltip_is_translated() {
        let loc = LocalizationState::default();
        for descriptor in &STAT_DESCRIPTORS {
            assert!(loc.get(descriptor.tooltip_key).is_some(), "{}", descriptor.tooltip_key);
        }
    }

    #[test]
    fn test_education_badges() {
        let badges: Vec<_> = STAT_DESCRIPTORS.iter().filter_map(|d| d.badge).collect();
        assert_eq!(badges, ["E", "H", "C", "U"]);
    }
}
