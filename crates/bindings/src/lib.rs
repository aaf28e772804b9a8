//! Named-channel bridge between host-side state and the UI layer.
//!
//! Every channel lives on a [`Transport`] and is addressed by a
//! `(module, name)` pair, flattened to the event path `"module.name"`.
//!
//! - Value channels mirror a single piece of host state into the UI. The UI
//!   side is a [`ValueBinding`] handing out reference-counted
//!   [`Subscription`]s; the host side is a [`HostValueBinding`].
//! - Trigger channels carry fire-and-forget UI-to-host requests. The UI fires
//!   through a [`TriggerChannel`]; the host listens with a [`TriggerBinding`].
//!
//! [`EventBus`] is the in-process transport used by the application and tests.

mod error;
mod event_bus;
mod host_binding;
mod trigger;
mod value_binding;

pub use error::BindingError;
pub use event_bus::{BindingBus, EventBus, EventHandle, EventHandler, Transport};
pub use host_binding::HostValueBinding;
pub use trigger::{TriggerBinding, TriggerChannel};
pub use value_binding::{bind_value, BindingValue, ChangeListener, Subscription, ValueBinding};

/// Flatten a `(module, name)` pair into the event path used on the transport.
pub fn event_path(module: &str, name: &str) -> String {
    format!("{module}.{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_path_joins_with_dot() {
        assert_eq!(event_path("CityStats", "hiddenStats"), "CityStats.hiddenStats");
    }
}
