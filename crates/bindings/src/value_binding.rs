//! UI half of a value channel.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{decode_payload, BindingError};
use crate::event_bus::{EventHandle, Transport};
use crate::event_path;

/// Values that can travel over a value channel.
pub trait BindingValue: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static {}

impl<T> BindingValue for T where T: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static {}

/// Listener invoked with the new value after a changing update.
pub type ChangeListener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct State<T> {
    value: T,
    ready: bool,
    /// One slot per live subscription, keyed by subscription id.
    listeners: BTreeMap<u64, Option<ChangeListener<T>>>,
    handles: Vec<EventHandle>,
    disposed: bool,
    next_id: u64,
}

struct Shared<T> {
    transport: Arc<dyn Transport>,
    path: String,
    fallback: T,
    state: Mutex<State<T>>,
}

impl<T: BindingValue> Shared<T> {
    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn signal(&self, suffix: &str) -> String {
        format!("{}.{suffix}", self.path)
    }

    fn connect(self: &Arc<Self>) {
        let weak: Weak<Self> = Arc::downgrade(self);
        let update = self.transport.on(
            &self.signal("update"),
            Arc::new(move |payload: Option<&Value>| {
                if let Some(shared) = weak.upgrade() {
                    shared.on_update(payload);
                }
            }),
        );
        let patch = self
            .transport
            .on(&self.signal("patch"), Arc::new(|_: Option<&Value>| {}));
        self.lock().handles = vec![update, patch];
        debug!("[ValueBinding] connecting '{}'", self.path);
        self.transport.trigger(&self.signal("subscribe"), None);
    }

    fn disconnect(&self) {
        let handles = {
            let mut state = self.lock();
            state.value = self.fallback.clone();
            state.ready = false;
            std::mem::take(&mut state.handles)
        };
        if handles.is_empty() {
            return;
        }
        for handle in &handles {
            self.transport.off(handle);
        }
        debug!("[ValueBinding] disconnecting '{}'", self.path);
        self.transport.trigger(&self.signal("unsubscribe"), None);
    }

    fn on_update(&self, payload: Option<&Value>) {
        let value: T = match decode_payload(&self.path, payload) {
            Ok(v) => v,
            Err(e) => {
                warn!("[ValueBinding] {}", e);
                return;
            }
        };
        let listeners: Vec<ChangeListener<T>> = {
            let mut state = self.lock();
            let changed = state.value != value;
            state.ready = true;
            if !changed {
                return;
            }
            state.value = value.clone();
            state.listeners.values().flatten().cloned().collect()
        };
        for listener in listeners {
            listener(&value);
        }
    }

    fn read(&self) -> Result<T, BindingError> {
        let state = self.lock();
        if state.ready {
            Ok(state.value.clone())
        } else {
            Err(BindingError::NotReady {
                event: self.signal("update"),
            })
        }
    }
}

/// Connect to the value channel `module.name`.
///
/// Nothing is sent on the transport until the first [`ValueBinding::subscribe`].
pub fn bind_value<T: BindingValue>(
    transport: Arc<dyn Transport>,
    module: &str,
    name: &str,
    fallback: T,
) -> ValueBinding<T> {
    ValueBinding {
        shared: Arc::new(Shared {
            transport,
            path: event_path(module, name),
            state: Mutex::new(State {
                value: fallback.clone(),
                ready: false,
                listeners: BTreeMap::new(),
                handles: Vec::new(),
                disposed: false,
                next_id: 0,
            }),
            fallback,
        }),
    }
}

/// Shared, reference-counted view of one host value.
///
/// All subscriptions share a single transport connection: the first one
/// connects, the last one to leave disconnects and resets the cached value to
/// the fallback.
pub struct ValueBinding<T: BindingValue> {
    shared: Arc<Shared<T>>,
}

impl<T: BindingValue> Clone for ValueBinding<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: BindingValue> ValueBinding<T> {
    pub fn path(&self) -> &str {
        &self.shared.path
    }

    pub fn fallback(&self) -> &T {
        &self.shared.fallback
    }

    pub fn subscribe(&self) -> Result<Subscription<T>, BindingError> {
        self.subscribe_inner(None)
    }

    /// Subscribe with a change listener already attached, so the answer to
    /// the initial `subscribe` signal is observed too.
    pub fn subscribe_with(
        &self,
        listener: impl Fn(&T) + Send + Sync + 'static,
    ) -> Result<Subscription<T>, BindingError> {
        self.subscribe_inner(Some(Arc::new(listener)))
    }

    fn subscribe_inner(
        &self,
        listener: Option<ChangeListener<T>>,
    ) -> Result<Subscription<T>, BindingError> {
        let (id, first) = {
            let mut state = self.shared.lock();
            if state.disposed {
                return Err(BindingError::Disposed {
                    path: self.shared.path.clone(),
                });
            }
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.insert(id, listener);
            (id, state.listeners.len() == 1)
        };
        if first {
            self.shared.connect();
        }
        Ok(Subscription {
            shared: Arc::clone(&self.shared),
            id,
            active: true,
        })
    }

    /// Current value. Without live subscribers this connects, reads and
    /// disconnects again.
    pub fn value(&self) -> Result<T, BindingError> {
        if self.subscriber_count() > 0 {
            return self.shared.read();
        }
        let subscription = self.subscribe()?;
        subscription.value()
    }

    pub fn is_connected(&self) -> bool {
        !self.shared.lock().handles.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.lock().listeners.len()
    }

    /// Drop every subscriber, disconnect, and refuse further subscriptions.
    pub fn dispose(&self) {
        {
            let mut state = self.shared.lock();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.listeners.clear();
        }
        self.shared.disconnect();
    }
}

/// One consumer's handle on a [`ValueBinding`]. Dropping it unsubscribes.
pub struct Subscription<T: BindingValue> {
    shared: Arc<Shared<T>>,
    id: u64,
    active: bool,
}

impl<T: BindingValue> Subscription<T> {
    pub fn value(&self) -> Result<T, BindingError> {
        self.shared.read()
    }

    /// Cached value, or the fallback while the channel is not ready.
    pub fn value_or_fallback(&self) -> T {
        self.shared
            .read()
            .unwrap_or_else(|_| self.shared.fallback.clone())
    }

    pub fn is_ready(&self) -> bool {
        self.shared.lock().ready
    }

    pub fn set_change_listener(&self, listener: impl Fn(&T) + Send + Sync + 'static) {
        if let Some(slot) = self.shared.lock().listeners.get_mut(&self.id) {
            *slot = Some(Arc::new(listener));
        }
    }

    pub fn clear_change_listener(&self) {
        if let Some(slot) = self.shared.lock().listeners.get_mut(&self.id) {
            *slot = None;
        }
    }

    /// Unsubscribe. Calling this more than once has no further effect.
    pub fn dispose(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let last = {
            let mut state = self.shared.lock();
            state.listeners.remove(&self.id).is_some() && state.listeners.is_empty()
        };
        if last {
            self.shared.disconnect();
        }
    }
}

impl<T: BindingValue> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventBus;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn bus() -> Arc<EventBus> {
        Arc::new(EventBus::new())
    }

    fn count_signal(bus: &EventBus, event: &str) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        bus.on(
            event,
            Arc::new(move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            }),
        );
        count
    }

    #[test]
    fn test_read_before_update_is_not_ready() {
        let bus = bus();
        let binding = bind_value(bus.clone(), "CityStats", "panelVisible", false);
        let sub = binding.subscribe().unwrap();
        let err = sub.value().unwrap_err();
        assert_eq!(
            err,
            BindingError::NotReady {
                event: "CityStats.panelVisible.update".to_string()
            }
        );
        assert!(!sub.value_or_fallback());
    }

    #[test]
    fn test_first_subscriber_fires_subscribe_once() {
        let bus = bus();
        let subscribes = count_signal(&bus, "CityStats.hiddenStats.subscribe");
        let binding = bind_value(bus.clone(), "CityStats", "hiddenStats", String::new());
        let _a = binding.subscribe().unwrap();
        let _b = binding.subscribe().unwrap();
        assert_eq!(subscribes.load(Ordering::SeqCst), 1);
        assert_eq!(binding.subscriber_count(), 2);
        assert_eq!(bus.handler_count("CityStats.hiddenStats.update"), 1);
        assert_eq!(bus.handler_count("CityStats.hiddenStats.patch"), 1);
    }

    #[test]
    fn test_update_reaches_every_subscriber() {
        let bus = bus();
        let binding = bind_value(bus.clone(), "CityStats", "panelVisible", false);
        let a = binding.subscribe().unwrap();
        let b = binding.subscribe().unwrap();
        bus.trigger("CityStats.panelVisible.update", Some(serde_json::json!(true)));
        assert_eq!(a.value(), Ok(true));
        assert_eq!(b.value(), Ok(true));
    }

    #[test]
    fn test_equal_update_does_not_notify() {
        let bus = bus();
        let binding = bind_value(bus.clone(), "CityStats", "panelVisible", false);
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        let sub = binding
            .subscribe_with(move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        bus.trigger("CityStats.panelVisible.update", Some(serde_json::json!(true)));
        bus.trigger("CityStats.panelVisible.update", Some(serde_json::json!(true)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(sub.value(), Ok(true));
    }

    #[test]
    fn test_first_update_equal_to_fallback_marks_ready_silently() {
        let bus = bus();
        let binding = bind_value(bus.clone(), "CityStats", "panelVisible", false);
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        let sub = binding
            .subscribe_with(move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        bus.trigger("CityStats.panelVisible.update", Some(serde_json::json!(false)));
        assert_eq!(sub.value(), Ok(false));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_last_unsubscribe_resets_to_fallback() {
        let bus = bus();
        let unsubscribes = count_signal(&bus, "CityStats.panelVisible.unsubscribe");
        let binding = bind_value(bus.clone(), "CityStats", "panelVisible", false);
        let mut a = binding.subscribe().unwrap();
        let b = binding.subscribe().unwrap();
        bus.trigger("CityStats.panelVisible.update", Some(serde_json::json!(true)));

        a.dispose();
        assert_eq!(unsubscribes.load(Ordering::SeqCst), 0);
        assert!(binding.is_connected());

        drop(b);
        assert_eq!(unsubscribes.load(Ordering::SeqCst), 1);
        assert!(!binding.is_connected());
        assert_eq!(bus.handler_count("CityStats.panelVisible.update"), 0);

        let c = binding.subscribe().unwrap();
        assert!(c.value().is_err());
        assert!(!c.value_or_fallback());
    }

    #[test]
    fn test_dispose_subscription_is_idempotent() {
        let bus = bus();
        let unsubscribes = count_signal(&bus, "CityStats.panelVisible.unsubscribe");
        let binding = bind_value(bus.clone(), "CityStats", "panelVisible", false);
        let mut a = binding.subscribe().unwrap();
        a.dispose();
        a.dispose();
        drop(a);
        assert_eq!(unsubscribes.load(Ordering::SeqCst), 1);
        assert_eq!(binding.subscriber_count(), 0);
    }

    #[test]
    fn test_value_without_subscribers_reads_through_temporary_connection() {
        let bus = bus();
        let weak = Arc::downgrade(&bus);
        bus.on(
            "CityStats.panelOrientation.subscribe",
            Arc::new(move |_| {
                if let Some(bus) = weak.upgrade() {
                    bus.trigger(
                        "CityStats.panelOrientation.update",
                        Some(serde_json::json!("Vertical")),
                    );
                }
            }),
        );
        let unsubscribes = count_signal(&bus, "CityStats.panelOrientation.unsubscribe");
        let binding = bind_value(
            bus.clone(),
            "CityStats",
            "panelOrientation",
            "Horizontal".to_string(),
        );
        assert_eq!(binding.value(), Ok("Vertical".to_string()));
        assert_eq!(unsubscribes.load(Ordering::SeqCst), 1);
        assert!(!binding.is_connected());
    }

    #[test]
    fn test_decode_failure_keeps_previous_value() {
        let bus = bus();
        let binding = bind_value(bus.clone(), "infoview", "unemployment", 0.0_f64);
        let sub = binding.subscribe().unwrap();
        bus.trigger("infoview.unemployment.update", Some(serde_json::json!(4.5)));
        bus.trigger("infoview.unemployment.update", Some(serde_json::json!("oops")));
        assert_eq!(sub.value(), Ok(4.5));
    }

    #[test]
    fn test_disposed_binding_refuses_subscribe() {
        let bus = bus();
        let binding = bind_value(bus.clone(), "CityStats", "panelVisible", false);
        let _sub = binding.subscribe().unwrap();
        binding.dispose();
        assert!(!binding.is_connected());
        assert!(matches!(
            binding.subscribe(),
            Err(BindingError::Disposed { .. })
        ));
    }

    #[test]
    fn test_listener_can_be_replaced() {
        let bus = bus();
        let binding = bind_value(bus.clone(), "CityStats", "hiddenStats", String::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sub = binding.subscribe().unwrap();
        let s = Arc::clone(&seen);
        sub.set_change_listener(move |v: &String| s.lock().unwrap().push(v.clone()));
        bus.trigger(
            "CityStats.hiddenStats.update",
            Some(serde_json::json!("crimeRate")),
        );
        sub.clear_change_listener();
        bus.trigger("CityStats.hiddenStats.update", Some(serde_json::json!("")));
        assert_eq!(*seen.lock().unwrap(), vec!["crimeRate".to_string()]);
    }
}
