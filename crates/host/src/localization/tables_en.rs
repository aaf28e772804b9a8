use super::{table_from, StringTable};

pub(super) fn build_english_table() -> StringTable {
    table_from(&[
        // Options page
        ("Options.SECTION[CityStats]", "City Stats"),
        ("Options.TAB[CityStats.Main]", "Main"),
        ("Options.GROUP[CityStats.General]", "General"),
        ("Options.GROUP[CityStats.KeyBinding]", "Keybindings"),
        ("Options.OPTION[CityStats.PanelOpenOnLoad]", "Open on load"),
        (
            "Options.OPTION_DESCRIPTION[CityStats.PanelOpenOnLoad]",
            "Whether panel should open automatically when loading a save.",
        ),
        ("Options.OPTION[CityStats.PanelOrientation]", "Panel orientation"),
        (
            "Options.OPTION_DESCRIPTION[CityStats.PanelOrientation]",
            "Whether panel is oriented vertically or horizontally.",
        ),
        ("Options.CityStats.PANELORIENTATION[Horizontal]", "Horizontal"),
        ("Options.CityStats.PANELORIENTATION[Vertical]", "Vertical"),
        ("Options.OPTION[CityStats.ResetPanelPosition]", "Reset panel position"),
        (
            "Options.OPTION_DESCRIPTION[CityStats.ResetPanelPosition]",
            "Reset panel position (ie. if inaccessible, etc)",
        ),
        (
            "Options.WARNING[CityStats.ResetPanelPosition]",
            "Are you sure you want to reset the panel position?",
        ),
        ("Options.OPTION[CityStats.ResetHiddenStats]", "Clear hidden stats"),
        (
            "Options.OPTION_DESCRIPTION[CityStats.ResetHiddenStats]",
            "Clear hidden stats and display all stats again.",
        ),
        (
            "Options.WARNING[CityStats.ResetHiddenStats]",
            "Are you sure you want to show all stats again?",
        ),
        ("Options.OPTION[CityStats.TogglePanelBinding]", "Toggle panel"),
        (
            "Options.OPTION_DESCRIPTION[CityStats.TogglePanelBinding]",
            "Hotkey to toggle panel display",
        ),
        ("Options.OPTION[CityStats.ResetBindings]", "Reset key bindings"),
        (
            "Options.OPTION_DESCRIPTION[CityStats.ResetBindings]",
            "Reset all key bindings of the mod",
        ),
        ("Options.Common[Confirm]", "Yes"),
        ("Options.Common[Cancel]", "Cancel"),
        ("Options.Common[PressKey]", "Press a key..."),
        // Toolbar
        ("CityStats.ToolbarActions[TogglePanel].TooltipTitle", "City Stats"),
        (
            "CityStats.ToolbarActions[TogglePanel].TooltipDescription",
            "View important city statistics at a glance",
        ),
        // Stats
        ("CityStats.Stats[ElectricityAvailability]", "Electricity Availability"),
        ("CityStats.Stats[WaterAvailability]", "Water Availability"),
        ("CityStats.Stats[SewageTreatment]", "Sewage Treatment"),
        ("CityStats.Stats[GarbageProcessing]", "Garbage Processing"),
        ("CityStats.Stats[LandfillAvailability]", "Landfill Availability"),
        ("CityStats.Stats[HealthcareAvailability]", "Healthcare Availability"),
        ("CityStats.Stats[CemeteryAvailability]", "Cemetery Availability"),
        ("CityStats.Stats[CrematoryAvailability]", "Crematory Availability"),
        ("CityStats.Stats[FireHazard]", "Fire Hazard"),
        ("CityStats.Stats[CrimeRate]", "Crime Rate"),
        ("CityStats.Stats[ShelterAvailability]", "Shelter Availability"),
        ("CityStats.Stats[ElementaryAvailability]", "Elementary Availability"),
        ("CityStats.Stats[HighschoolAvailability]", "Highschool Availability"),
        ("CityStats.Stats[CollegeAvailability]", "College Availability"),
        ("CityStats.Stats[UniversityAvailability]", "University Availability"),
        ("CityStats.Stats[MailAvailability]", "Mail Availability"),
        ("CityStats.Stats[ParkingAvailability]", "Parking Availability"),
        ("CityStats.Stats[Unemployment]", "Unemployment"),
        // Panel
        ("CityStats.StatsPanel.Actions[ToggleStats]", "Toggle stat visibility"),
        ("CityStats.StatsPanel.StatTooltip.Modifier[Hidden]", "hidden"),
        ("CityStats.StatsPanel.Notes[AllHidden]", "All stats hidden"),
        ("CityStats.StatsPanel.Notes[AdditionalStats]", "{COUNT} additional stats"),
    ])
}
