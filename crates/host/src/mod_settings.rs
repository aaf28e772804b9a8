use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Layout direction of the stats panel. Serialized as the variant name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelOrientation {
    #[default]
    Horizontal,
    Vertical,
}

impl PanelOrientation {
    pub const ALL: [PanelOrientation; 2] = [PanelOrientation::Horizontal, PanelOrientation::Vertical];

    pub fn as_str(self) -> &'static str {
        match self {
            PanelOrientation::Horizontal => "Horizontal",
            PanelOrientation::Vertical => "Vertical",
        }
    }

    /// Localization key of the dropdown entry.
    pub fn locale_key(self) -> String {
        format!("Options.CityStats.PANELORIENTATION[{}]", self.as_str())
    }
}

impl fmt::Display for PanelOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing mod settings. Global, not per city.
///
/// Systems react to edits through change detection on this resource.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ModSettings {
    /// Show the panel automatically when a city finishes loading.
    pub panel_open_on_load: bool,
    pub panel_orientation: PanelOrientation,
}

impl fmt::Display for ModSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PanelOrientation={};PanelOpenOnLoad={}",
            self.panel_orientation, self.panel_open_on_load
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ModSettings::default();
        assert!(!settings.panel_open_on_load);
        assert_eq!(settings.panel_orientation, PanelOrientation::Horizontal);
    }

    #[test]
    fn test_display_summary() {
        let settings = ModSettings {
            panel_open_on_load: true,
            panel_orientation: PanelOrientation::Vertical,
        };
        assert_eq!(
            settings.to_string(),
            "PanelOrientation=Vertical;PanelOpenOnLoad=true"
        );
    }

    #[test]
    fn test_orientation_wire_form_is_variant_name() {
        assert_eq!(
            serde_json::to_value(PanelOrientation::Vertical).unwrap(),
            serde_json::json!("Vertical")
        );
        let parsed: PanelOrientation = serde_json::from_value(serde_json::json!("Horizontal")).unwrap();
        assert_eq!(parsed, PanelOrientation::Horizontal);
        assert!(serde_json::from_value::<PanelOrientation>(serde_json::json!("Diagonal")).is_err());
    }
}
