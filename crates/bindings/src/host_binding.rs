//! Host half of a value channel.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use bevy::prelude::*;
use serde::Serialize;

use crate::event_bus::{EventHandle, Transport};
use crate::event_path;

struct HostState<T> {
    value: T,
    subscribers: usize,
}

struct HostShared<T> {
    transport: Arc<dyn Transport>,
    path: String,
    state: Mutex<HostState<T>>,
    handles: Mutex<Vec<EventHandle>>,
}

impl<T: Clone + PartialEq + Serialize + Send + 'static> HostShared<T> {
    fn lock(&self) -> MutexGuard<'_, HostState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, value: &T) {
        match serde_json::to_value(value) {
            Ok(payload) => self
                .transport
                .trigger(&format!("{}.update", self.path), Some(payload)),
            Err(e) => warn!("[HostValueBinding] failed to encode '{}': {}", self.path, e),
        }
    }

    fn on_subscribe(&self) {
        let value = {
            let mut state = self.lock();
            state.subscribers += 1;
            state.value.clone()
        };
        self.push(&value);
    }

    fn on_unsubscribe(&self) {
        let mut state = self.lock();
        state.subscribers = state.subscribers.saturating_sub(1);
    }
}

impl<T> Drop for HostShared<T> {
    fn drop(&mut self) {
        let handles = self
            .handles
            .get_mut()
            .map(std::mem::take)
            .unwrap_or_default();
        for handle in &handles {
            self.transport.off(handle);
        }
    }
}

/// Authoritative side of a value channel.
///
/// Answers every `subscribe` signal with an `update` carrying the current
/// value, and pushes later changes while at least one UI subscriber is
/// connected. Dropping the last clone unregisters from the transport.
pub struct HostValueBinding<T: Clone + PartialEq + Serialize + Send + 'static> {
    shared: Arc<HostShared<T>>,
}

impl<T: Clone + PartialEq + Serialize + Send + 'static> Clone for HostValueBinding<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone + PartialEq + Serialize + Send + 'static> HostValueBinding<T> {
    pub fn new(transport: Arc<dyn Transport>, module: &str, name: &str, initial: T) -> Self {
        let path = event_path(module, name);
        let shared = Arc::new(HostShared {
            transport: Arc::clone(&transport),
            path: path.clone(),
            state: Mutex::new(HostState {
                value: initial,
                subscribers: 0,
            }),
            handles: Mutex::new(Vec::new()),
        });

        let weak: Weak<HostShared<T>> = Arc::downgrade(&shared);
        let subscribe = transport.on(
            &format!("{path}.subscribe"),
            Arc::new(move |_| {
                if let Some(shared) = weak.upgrade() {
                    shared.on_subscribe();
                }
            }),
        );
        let weak: Weak<HostShared<T>> = Arc::downgrade(&shared);
        let unsubscribe = transport.on(
            &format!("{path}.unsubscribe"),
            Arc::new(move |_| {
                if let Some(shared) = weak.upgrade() {
                    shared.on_unsubscribe();
                }
            }),
        );
        *shared
            .handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = vec![subscribe, unsubscribe];

        Self { shared }
    }

    pub fn path(&self) -> &str {
        &self.shared.path
    }

    pub fn value(&self) -> T {
        self.shared.lock().value.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.lock().subscribers
    }

    /// Store `value`. Returns `true` when it differed from the stored value;
    /// the change is pushed only while someone is subscribed.
    pub fn update(&self, value: T) -> bool {
        let push = {
            let mut state = self.shared.lock();
            if state.value == value {
                return false;
            }
            state.value = value.clone();
            state.subscribers > 0
        };
        if push {
            self.shared.push(&value);
        }
        true
    }
}
