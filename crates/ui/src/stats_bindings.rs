//! The UI's end of every channel the stats panel uses.
//!
//! Created once from the shared [`BindingBus`] and injected as a resource, so
//! tests can run the panel against any transport. Change listeners only raise
//! a flag; systems poll it with [`StatsBindings::take_changed`] and re-derive
//! panel state when something actually moved.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bevy::prelude::*;
use bindings::{
    bind_value, BindingBus, BindingError, BindingValue, Subscription, Transport, TriggerChannel,
};
use host::config::{
    GAME_MODULE, INFOVIEW_MODULE, MOD_NAME, TOOL_MODULE, TRIGGER_SET_HIDDEN_STATS,
    TRIGGER_SET_PANEL_POSITION, TRIGGER_SET_PANEL_VISIBLE, TRIGGER_TOGGLE_PANEL_VISIBLE,
    VALUE_HIDDEN_STATS, VALUE_IN_PHOTO_MODE, VALUE_IS_EDITOR, VALUE_PANEL_ORIENTATION,
    VALUE_PANEL_POSITION, VALUE_PANEL_VISIBLE,
};
use host::indicators::{CityIndicators, IndicatorChannel, IndicatorValue, ScalarChannel};
use host::mod_settings::PanelOrientation;
use host::ui_system::PanelPosition;

#[derive(Resource)]
pub struct StatsBindings {
    pub hidden_stats: Subscription<String>,
    pub panel_orientation: Subscription<PanelOrientation>,
    pub panel_position: Subscription<PanelPosition>,
    pub panel_visible: Subscription<bool>,
    pub in_photo_mode: Subscription<bool>,
    pub is_editor: Subscription<bool>,
    pub indicators: Vec<(IndicatorChannel, Subscription<IndicatorValue>)>,
    pub scalars: Vec<(ScalarChannel, Subscription<f64>)>,
    pub toggle_panel_visible: TriggerChannel,
    pub set_hidden_stats: TriggerChannel,
    pub set_panel_position: TriggerChannel,
    pub set_panel_visible: TriggerChannel,
    changed: Arc<AtomicBool>,
}

fn watch<T: BindingValue>(
    transport: &Arc<dyn Transport>,
    module: &str,
    name: &str,
    fallback: T,
    changed: &Arc<AtomicBool>,
) -> Result<Subscription<T>, BindingError> {
    let flag = Arc::clone(changed);
    bind_value(transport.clone(), module, name, fallback)
        .subscribe_with(move |_| flag.store(true, Ordering::Release))
}

impl StatsBindings {
    pub fn connect(transport: Arc<dyn Transport>) -> Result<Self, BindingError> {
        let changed = Arc::new(AtomicBool::new(true));
        let indicators = IndicatorChannel::ALL
            .iter()
            .map(|&ch| {
                watch(&transport, INFOVIEW_MODULE, ch.name(), IndicatorValue::default(), &changed)
                    .map(|sub| (ch, sub))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let scalars = ScalarChannel::ALL
            .iter()
            .map(|&ch| {
                watch(&transport, INFOVIEW_MODULE, ch.name(), 0.0, &changed).map(|sub| (ch, sub))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            hidden_stats: watch(&transport, MOD_NAME, VALUE_HIDDEN_STATS, String::new(), &changed)?,
            panel_orientation: watch(
                &transport,
                MOD_NAME,
                VALUE_PANEL_ORIENTATION,
                PanelOrientation::Horizontal,
                &changed,
            )?,
            panel_position: watch(
                &transport,
                MOD_NAME,
                VALUE_PANEL_POSITION,
                PanelPosition::ZERO,
                &changed,
            )?,
            panel_visible: watch(&transport, MOD_NAME, VALUE_PANEL_VISIBLE, false, &changed)?,
            in_photo_mode: watch(&transport, GAME_MODULE, VALUE_IN_PHOTO_MODE, false, &changed)?,
            is_editor: watch(&transport, TOOL_MODULE, VALUE_IS_EDITOR, false, &changed)?,
            indicators,
            scalars,
            toggle_panel_visible: TriggerChannel::new(
                transport.clone(),
                MOD_NAME,
                TRIGGER_TOGGLE_PANEL_VISIBLE,
            ),
            set_hidden_stats: TriggerChannel::new(
                transport.clone(),
                MOD_NAME,
                TRIGGER_SET_HIDDEN_STATS,
            ),
            set_panel_position: TriggerChannel::new(
                transport.clone(),
                MOD_NAME,
                TRIGGER_SET_PANEL_POSITION,
            ),
            set_panel_visible: TriggerChannel::new(transport, MOD_NAME, TRIGGER_SET_PANEL_VISIBLE),
            changed,
        })
    }

    fn channel_count(&self) -> usize {
        6 + self.indicators.len() + self.scalars.len()
    }

    /// Whether any channel delivered a new value since the last call.
    pub fn take_changed(&self) -> bool {
        self.changed.swap(false, Ordering::AcqRel)
    }

    /// Photo mode or an editor is active. Unknown counts as suppressed.
    pub fn ui_suppressed(&self) -> bool {
        self.in_photo_mode.value().unwrap_or(true) || self.is_editor.value().unwrap_or(true)
    }

    /// Every indicator channel at once, or `None` until all of them have
    /// answered.
    pub fn indicator_snapshot(&self) -> Option<CityIndicators> {
        let mut snapshot = CityIndicators::default();
        for (channel, sub) in &self.indicators {
            *snapshot.indicator_mut(*channel) = sub.value().ok()?;
        }
        for (channel, sub) in &self.scalars {
            *snapshot.scalar_mut(*channel) = sub.value().ok()?;
        }
        Some(snapshot)
    }
}

/// Startup system: subscribe to the host's channels.
pub fn connect_stats_bindings(mut commands: Commands, bus: Res<BindingBus>) {
    match StatsBindings::connect(bus.transport().clone()) {
        Ok(bindings) => {
            info!("[StatsPanel] connected to {} channels", bindings.channel_count());
            commands.insert_resource(bindings);
        }
        Err(err) => error!("[StatsPanel] failed to connect: {}", err),
    }
}
