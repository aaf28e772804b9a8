//! Transport abstraction and the in-process event bus.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bevy::prelude::*;
use serde_json::Value;

/// Callback invoked for every signal fired on an event path.
pub type EventHandler = Arc<dyn Fn(Option<&Value>) + Send + Sync>;

/// Registration handle returned by [`Transport::on`]; pass it to
/// [`Transport::off`] to stop receiving the event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventHandle {
    event: String,
    id: u64,
}

impl EventHandle {
    pub fn event(&self) -> &str {
        &self.event
    }
}

/// Signal transport shared by the host and the UI.
///
/// Implementations must deliver signals for a single event path in the order
/// they were fired, and must not hold internal locks while handlers run.
pub trait Transport: Send + Sync {
    /// Register a handler for an event path.
    fn on(&self, event: &str, handler: EventHandler) -> EventHandle;
    /// Remove a previously registered handler. Unknown handles are ignored.
    fn off(&self, handle: &EventHandle);
    /// Fire a signal. Fire-and-forget: nothing is reported back to the caller.
    fn trigger(&self, event: &str, payload: Option<Value>);
}

#[derive(Default)]
struct BusInner {
    handlers: BTreeMap<String, Vec<(u64, EventHandler)>>,
    next_id: u64,
}

/// Synchronous in-process transport.
///
/// Handlers run on the calling thread in registration order. The handler list
/// is snapshotted before dispatch, so handlers may register, unregister or
/// fire further signals.
#[derive(Default)]
pub struct EventBus {
    inner: Mutex<BusInner>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BusInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of handlers currently registered for `event`.
    pub fn handler_count(&self, event: &str) -> usize {
        self.lock().handlers.get(event).map_or(0, Vec::len)
    }
}

impl Transport for EventBus {
    fn on(&self, event: &str, handler: EventHandler) -> EventHandle {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner
            .handlers
            .entry(event.to_string())
            .or_default()
            .push((id, handler));
        EventHandle {
            event: event.to_string(),
            id,
        }
    }

    fn off(&self, handle: &EventHandle) {
        let mut inner = self.lock();
        if let Some(list) = inner.handlers.get_mut(&handle.event) {
            list.retain(|(id, _)| *id != handle.id);
            if list.is_empty() {
                inner.handlers.remove(&handle.event);
            }
        }
    }

    fn trigger(&self, event: &str, payload: Option<Value>) {
        let handlers: Vec<EventHandler> = match self.lock().handlers.get(event) {
            Some(list) => list.iter().map(|(_, h)| Arc::clone(h)).collect(),
            None => Vec::new(),
        };
        if handlers.is_empty() {
            trace!("[EventBus] no listener for '{}'", event);
            return;
        }
        for handler in handlers {
            handler(payload.as_ref());
        }
    }
}

/// Shared transport owned by the application root.
///
/// Host and UI plugins both read this resource, so a test can insert a bus of
/// its own before adding them.
#[derive(Resource, Clone)]
pub struct BindingBus(pub Arc<dyn Transport>);

impl Default for BindingBus {
    fn default() -> Self {
        Self(Arc::new(EventBus::new()))
    }
}

impl BindingBus {
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter(bus: &EventBus, event: &str) -> (Arc<AtomicUsize>, EventHandle) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let handle = bus.on(
            event,
            Arc::new(move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            }),
        );
        (count, handle)
    }

    #[test]
    fn test_trigger_reaches_registered_handler() {
        let bus = EventBus::new();
        let (count, _handle) = counter(&bus, "CityStats.togglePanelVisible");
        bus.trigger("CityStats.togglePanelVisible", None);
        bus.trigger("CityStats.togglePanelVisible", None);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_trigger_without_listener_is_silent() {
        let bus = EventBus::new();
        bus.trigger("nobody.listens", Some(serde_json::json!(1)));
        assert_eq!(bus.handler_count("nobody.listens"), 0);
    }

    #[test]
    fn test_off_removes_only_that_handler() {
        let bus = EventBus::new();
        let (first, first_handle) = counter(&bus, "e");
        let (second, _second_handle) = counter(&bus, "e");
        bus.off(&first_handle);
        bus.trigger("e", None);
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert_eq!(bus.handler_count("e"), 1);
    }

    #[test]
    fn test_off_twice_is_harmless() {
        let bus = EventBus::new();
        let (_count, handle) = counter(&bus, "e");
        bus.off(&handle);
        bus.off(&handle);
        assert_eq!(bus.handler_count("e"), 0);
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let bus = EventBus::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        for tag in ["a", "b", "c"] {
            let log = Arc::clone(&log);
            bus.on(
                "e",
                Arc::new(move |_| {
                    log.lock().unwrap().push(tag);
                }),
            );
        }
        bus.trigger("e", None);
        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_handler_may_fire_nested_signal() {
        let bus = Arc::new(EventBus::new());
        let (count, _handle) = counter(&bus, "inner");
        let weak = Arc::downgrade(&bus);
        bus.on(
            "outer",
            Arc::new(move |_| {
                if let Some(bus) = weak.upgrade() {
                    bus.trigger("inner", None);
                }
            }),
        );
        bus.trigger("outer", None);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_payload_is_delivered() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(None));
        let s = Arc::clone(&seen);
        bus.on(
            "e",
            Arc::new(move |payload| {
                *s.lock().unwrap() = payload.cloned();
            }),
        );
        bus.trigger("e", Some(serde_json::json!({"x": 10.0, "y": 20.0})));
        assert_eq!(
            *seen.lock().unwrap(),
            Some(serde_json::json!({"x": 10.0, "y": 20.0}))
        );
    }
}
