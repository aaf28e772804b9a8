use super::{table_from, StringTable};

pub(super) fn build_german_table() -> StringTable {
    table_from(&[
        ("Options.SECTION[CityStats]", "City Stats"),
        ("Options.TAB[CityStats.Main]", "Allgemein"),
        ("Options.GROUP[CityStats.General]", "Allgemein"),
        ("Options.GROUP[CityStats.KeyBinding]", "Tastenbelegung"),
        ("Options.OPTION[CityStats.PanelOpenOnLoad]", "Beim Laden öffnen"),
        (
            "Options.OPTION_DESCRIPTION[CityStats.PanelOpenOnLoad]",
            "Ob das Panel beim Laden eines Spielstands automatisch geöffnet wird.",
        ),
        ("Options.OPTION[CityStats.PanelOrientation]", "Ausrichtung des Panels"),
        (
            "Options.OPTION_DESCRIPTION[CityStats.PanelOrientation]",
            "Ob das Panel vertikal oder horizontal ausgerichtet ist.",
        ),
        ("Options.CityStats.PANELORIENTATION[Horizontal]", "Horizontal"),
        ("Options.CityStats.PANELORIENTATION[Vertical]", "Vertikal"),
        ("Options.OPTION[CityStats.ResetPanelPosition]", "Panelposition zurücksetzen"),
        (
            "Options.WARNING[CityStats.ResetPanelPosition]",
            "Panelposition wirklich zurücksetzen?",
        ),
        ("Options.OPTION[CityStats.ResetHiddenStats]", "Ausgeblendete Werte zurücksetzen"),
        (
            "Options.WARNING[CityStats.ResetHiddenStats]",
            "Wirklich alle Werte wieder anzeigen?",
        ),
        ("Options.OPTION[CityStats.TogglePanelBinding]", "Panel umschalten"),
        ("Options.OPTION[CityStats.ResetBindings]", "Tastenbelegung zurücksetzen"),
        ("Options.Common[Confirm]", "Ja"),
        ("Options.Common[Cancel]", "Abbrechen"),
        ("Options.Common[PressKey]", "Taste drücken..."),
        ("CityStats.ToolbarActions[TogglePanel].TooltipTitle", "City Stats"),
        (
            "CityStats.ToolbarActions[TogglePanel].TooltipDescription",
            "Wichtige Stadtstatistiken auf einen Blick",
        ),
        ("CityStats.Stats[ElectricityAvailability]", "Stromverfügbarkeit"),
        ("CityStats.Stats[WaterAvailability]", "Wasserverfügbarkeit"),
        ("CityStats.Stats[SewageTreatment]", "Abwasserbehandlung"),
        ("CityStats.Stats[GarbageProcessing]", "Müllverarbeitung"),
        ("CityStats.Stats[LandfillAvailability]", "Deponiekapazität"),
        ("CityStats.Stats[HealthcareAvailability]", "Gesundheitsversorgung"),
        ("CityStats.Stats[CemeteryAvailability]", "Friedhofskapazität"),
        ("CityStats.Stats[CrematoryAvailability]", "Krematoriumskapazität"),
        ("CityStats.Stats[FireHazard]", "Brandgefahr"),
        ("CityStats.Stats[CrimeRate]", "Kriminalitätsrate"),
        ("CityStats.Stats[ShelterAvailability]", "Notunterkünfte"),
        ("CityStats.Stats[ElementaryAvailability]", "Grundschulplätze"),
        ("CityStats.Stats[HighschoolAvailability]", "Oberschulplätze"),
        ("CityStats.Stats[CollegeAvailability]", "Collegeplätze"),
        ("CityStats.Stats[UniversityAvailability]", "Universitätsplätze"),
        ("CityStats.Stats[MailAvailability]", "Postversorgung"),
        ("CityStats.Stats[ParkingAvailability]", "Parkplätze"),
        ("CityStats.Stats[Unemployment]", "Arbeitslosigkeit"),
        ("CityStats.StatsPanel.Actions[ToggleStats]", "Sichtbarkeit der Werte ändern"),
        ("CityStats.StatsPanel.StatTooltip.Modifier[Hidden]", "ausgeblendet"),
        ("CityStats.StatsPanel.Notes[AllHidden]", "Alle Werte ausgeblendet"),
        ("CityStats.StatsPanel.Notes[AdditionalStats]", "{COUNT} weitere Werte"),
    ])
}

pub(super) fn build_spanish_table() -> StringTable {
    table_from(&[
        ("Options.SECTION[CityStats]", "City Stats"),
        ("Options.TAB[CityStats.Main]", "Principal"),
        ("Options.GROUP[CityStats.General]", "General"),
        ("Options.GROUP[CityStats.KeyBinding]", "Atajos de teclado"),
        ("Options.OPTION[CityStats.PanelOpenOnLoad]", "Abrir al cargar"),
        ("Options.OPTION[CityStats.PanelOrientation]", "Orientación del panel"),
        ("Options.CityStats.PANELORIENTATION[Horizontal]", "Horizontal"),
        ("Options.CityStats.PANELORIENTATION[Vertical]", "Vertical"),
        ("Options.OPTION[CityStats.ResetPanelPosition]", "Restablecer posición del panel"),
        ("Options.OPTION[CityStats.ResetHiddenStats]", "Mostrar todas las estadísticas"),
        ("Options.OPTION[CityStats.TogglePanelBinding]", "Mostrar/ocultar panel"),
        ("Options.OPTION[CityStats.ResetBindings]", "Restablecer atajos"),
        ("Options.Common[Confirm]", "Sí"),
        ("Options.Common[Cancel]", "Cancelar"),
        ("Options.Common[PressKey]", "Pulsa una tecla..."),
        (
            "CityStats.ToolbarActions[TogglePanel].TooltipDescription",
            "Estadísticas importantes de la ciudad de un vistazo",
        ),
        ("CityStats.Stats[ElectricityAvailability]", "Disponibilidad eléctrica"),
        ("CityStats.Stats[WaterAvailability]", "Disponibilidad de agua"),
        ("CityStats.Stats[SewageTreatment]", "Tratamiento de aguas residuales"),
        ("CityStats.Stats[GarbageProcessing]", "Procesamiento de basura"),
        ("CityStats.Stats[LandfillAvailability]", "Capacidad de vertedero"),
        ("CityStats.Stats[HealthcareAvailability]", "Atención sanitaria"),
        ("CityStats.Stats[CemeteryAvailability]", "Capacidad de cementerio"),
        ("CityStats.Stats[CrematoryAvailability]", "Capacidad de crematorio"),
        ("CityStats.Stats[FireHazard]", "Riesgo de incendio"),
        ("CityStats.Stats[CrimeRate]", "Tasa de criminalidad"),
        ("CityStats.Stats[ShelterAvailability]", "Disponibilidad de refugios"),
        ("CityStats.Stats[ElementaryAvailability]", "Plazas de primaria"),
        ("CityStats.Stats[HighschoolAvailability]", "Plazas de secundaria"),
        ("CityStats.Stats[CollegeAvailability]", "Plazas de instituto"),
        ("CityStats.Stats[UniversityAvailability]", "Plazas universitarias"),
        ("CityStats.Stats[MailAvailability]", "Servicio postal"),
        ("CityStats.Stats[ParkingAvailability]", "Aparcamiento"),
        ("CityStats.Stats[Unemployment]", "Desempleo"),
        ("CityStats.StatsPanel.StatTooltip.Modifier[Hidden]", "oculto"),
        ("CityStats.StatsPanel.Notes[AllHidden]", "Todas las estadísticas ocultas"),
        ("CityStats.StatsPanel.Notes[AdditionalStats]", "{COUNT} estadísticas más"),
    ])
}
