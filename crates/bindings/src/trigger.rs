//! Fire-and-forget trigger channels.

use std::sync::Arc;

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::decode_payload;
use crate::event_bus::{EventHandle, Transport};
use crate::event_path;

/// UI-side sender for one trigger channel.
#[derive(Clone)]
pub struct TriggerChannel {
    transport: Arc<dyn Transport>,
    path: String,
}

impl TriggerChannel {
    pub fn new(transport: Arc<dyn Transport>, module: &str, name: &str) -> Self {
        Self {
            transport,
            path: event_path(module, name),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn fire(&self) {
        self.transport.trigger(&self.path, None);
    }

    pub fn fire_with<P: Serialize + ?Sized>(&self, payload: &P) {
        match serde_json::to_value(payload) {
            Ok(value) => self.transport.trigger(&self.path, Some(value)),
            Err(e) => warn!("[TriggerChannel] dropped '{}': {}", self.path, e),
        }
    }
}

/// Host-side receiver for one trigger channel. Dropping it unregisters the
/// handler.
pub struct TriggerBinding {
    transport: Arc<dyn Transport>,
    handle: EventHandle,
}

impl TriggerBinding {
    /// Listen for a trigger that carries no payload. Any payload sent anyway
    /// is ignored.
    pub fn new(
        transport: Arc<dyn Transport>,
        module: &str,
        name: &str,
        handler: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        let handle = transport.on(
            &event_path(module, name),
            Arc::new(move |_: Option<&Value>| handler()),
        );
        Self { transport, handle }
    }

    /// Listen for a trigger carrying a `P`. Payloads that fail to decode are
    /// logged and never reach `handler`.
    pub fn with_payload<P: DeserializeOwned + 'static>(
        transport: Arc<dyn Transport>,
        module: &str,
        name: &str,
        handler: impl Fn(P) + Send + Sync + 'static,
    ) -> Self {
        let path = event_path(module, name);
        let event = path.clone();
        let handle = transport.on(
            &event,
            Arc::new(move |payload: Option<&Value>| {
                match decode_payload::<P>(&path, payload) {
                    Ok(p) => handler(p),
                    Err(e) => warn!("[TriggerBinding] {}", e),
                }
            }),
        );
        Self { transport, handle }
    }

    pub fn path(&self) -> &str {
        self.handle.event()
    }
}

impl Drop for TriggerBinding {
    fn drop(&mut self) {
        self.transport.off(&self.handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventBus;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Position {
        x: f32,
        y: f32,
    }

    #[test]
    fn test_fire_without_payload() {
        let bus = Arc::new(EventBus::new());
        let hits = Arc::new(Mutex::new(0));
        let h = Arc::clone(&hits);
        let _binding = TriggerBinding::new(bus.clone(), "CityStats", "togglePanelVisible", move || {
            *h.lock().unwrap() += 1;
        });
        let channel = TriggerChannel::new(bus.clone(), "CityStats", "togglePanelVisible");
        channel.fire();
        channel.fire();
        assert_eq!(*hits.lock().unwrap(), 2);
    }

    #[test]
    fn test_fire_with_struct_payload() {
        let bus = Arc::new(EventBus::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = Arc::clone(&seen);
        let _binding = TriggerBinding::with_payload(
            bus.clone(),
            "CityStats",
            "setPanelPosition",
            move |p: Position| s.lock().unwrap().push(p),
        );
        let channel = TriggerChannel::new(bus.clone(), "CityStats", "setPanelPosition");
        channel.fire_with(&Position { x: 10.0, y: -20.0 });
        assert_eq!(*seen.lock().unwrap(), vec![Position { x: 10.0, y: -20.0 }]);
    }

    #[test]
    fn test_bad_payload_is_dropped() {
        let bus = Arc::new(EventBus::new());
        let seen = Arc::new(Mutex::new(Vec::<bool>::new()));
        let s = Arc::clone(&seen);
        let _binding = TriggerBinding::with_payload(
            bus.clone(),
            "CityStats",
            "setPanelVisible",
            move |v: bool| s.lock().unwrap().push(v),
        );
        let channel = TriggerChannel::new(bus.clone(), "CityStats", "setPanelVisible");
        channel.fire_with("yes");
        channel.fire();
        channel.fire_with(&true);
        assert_eq!(*seen.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_fire_with_str_payload() {
        let bus = Arc::new(EventBus::new());
        let seen = Arc::new(Mutex::new(String::new()));
        let s = Arc::clone(&seen);
        let _binding = TriggerBinding::with_payload(
            bus.clone(),
            "CityStats",
            "setHiddenStats",
            move |v: String| *s.lock().unwrap() = v,
        );
        TriggerChannel::new(bus.clone(), "CityStats", "setHiddenStats")
            .fire_with("crimeRate,fireHazard");
        assert_eq!(*seen.lock().unwrap(), "crimeRate,fireHazard");
    }

    #[test]
    fn test_drop_unregisters() {
        let bus = Arc::new(EventBus::new());
        let binding = TriggerBinding::new(bus.clone(), "CityStats", "togglePanelVisible", || {});
        assert_eq!(binding.path(), "CityStats.togglePanelVisible");
        assert_eq!(bus.handler_count("CityStats.togglePanelVisible"), 1);
        drop(binding);
        assert_eq!(bus.handler_count("CityStats.togglePanelVisible"), 0);
    }
}
