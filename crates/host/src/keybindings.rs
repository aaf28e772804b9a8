//! Rebindable hotkeys of the mod.
//!
//! Systems read the `KeyBindings` resource instead of hardcoding `KeyCode`
//! values. The options window starts a rebind through `RebindState` and
//! `capture_rebind_input` assigns the next key press.

use bevy::prelude::*;

// =============================================================================
// Bindable actions
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindableAction {
    TogglePanel,
}

impl BindableAction {
    pub const ALL: &'static [BindableAction] = &[BindableAction::TogglePanel];

    /// Localization key of the option label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::TogglePanel => "Options.OPTION[CityStats.TogglePanelBinding]",
        }
    }
}

// =============================================================================
// Key binding definition
// =============================================================================

/// A key code plus modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyBinding {
    pub const fn simple(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    pub const fn ctrl_shift(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: true,
            shift: true,
        }
    }

    /// True on the frame the key goes down with exactly these modifiers held.
    pub fn just_pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        if !keys.just_pressed(self.key) {
            return false;
        }
        let ctrl_held = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
        let shift_held = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
        ctrl_held == self.ctrl && shift_held == self.shift
    }

    /// Human-readable label (e.g. "Ctrl+Shift+S").
    pub fn display_label(self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(keycode_label(self.key));
        parts.join("+")
    }
}

pub fn keycode_label(key: KeyCode) -> &'static str {
    match key {
        KeyCode::KeyA => "A",
        KeyCode::KeyB => "B",
        KeyCode::KeyC => "C",
        KeyCode::KeyD => "D",
        KeyCode::KeyE => "E",
        KeyCode::KeyF => "F",
        KeyCode::KeyG => "G",
        KeyCode::KeyH => "H",
        KeyCode::KeyI => "I",
        KeyCode::KeyJ => "J",
        KeyCode::KeyK => "K",
        KeyCode::KeyL => "L",
        KeyCode::KeyM => "M",
        KeyCode::KeyN => "N",
        KeyCode::KeyO => "O",
        KeyCode::KeyP => "P",
        KeyCode::KeyQ => "Q",
        KeyCode::KeyR => "R",
        KeyCode::KeyS => "S",
        KeyCode::KeyT => "T",
        KeyCode::KeyU => "U",
        KeyCode::KeyV => "V",
        KeyCode::KeyW => "W",
        KeyCode::KeyX => "X",
        KeyCode::KeyY => "Y",
        KeyCode::KeyZ => "Z",
        KeyCode::Digit0 => "0",
        KeyCode::Digit1 => "1",
        KeyCode::Digit2 => "2",
        KeyCode::Digit3 => "3",
        KeyCode::Digit4 => "4",
        KeyCode::Digit5 => "5",
        KeyCode::Digit6 => "6",
        KeyCode::Digit7 => "7",
        KeyCode::Digit8 => "8",
        KeyCode::Digit9 => "9",
        KeyCode::F1 => "F1",
        KeyCode::F2 => "F2",
        KeyCode::F3 => "F3",
        KeyCode::F4 => "F4",
        KeyCode::F5 => "F5",
        KeyCode::F6 => "F6",
        KeyCode::F7 => "F7",
        KeyCode::F8 => "F8",
        KeyCode::F9 => "F9",
        KeyCode::F10 => "F10",
        KeyCode::F11 => "F11",
        KeyCode::F12 => "F12",
        KeyCode::Space => "Space",
        KeyCode::Tab => "Tab",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PgUp",
        KeyCode::PageDown => "PgDn",
        _ => "???",
    }
}

// =============================================================================
// KeyBindings resource
// =============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub toggle_panel: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle_panel: KeyBinding::ctrl_shift(KeyCode::KeyS),
        }
    }
}

impl KeyBindings {
    pub fn get(&self, action: BindableAction) -> KeyBinding {
        match action {
            BindableAction::TogglePanel => self.toggle_panel,
        }
    }

    pub fn set(&mut self, action: BindableAction, binding: KeyBinding) {
        match action {
            BindableAction::TogglePanel => self.toggle_panel = binding,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Rebind capture
// =============================================================================

/// Which action (if any) is waiting for a new key.
#[derive(Resource, Default)]
pub struct RebindState {
    pub awaiting: Option<BindableAction>,
}

/// System: while a rebind is pending, assign the next non-modifier key press.
/// No-ops without `ButtonInput<KeyCode>` (headless runs).
pub fn capture_rebind_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut bindings: ResMut<KeyBindings>,
    mut rebind: ResMut<RebindState>,
) {
    let Some(keys) = keys else {
        return;
    };
    let Some(action) = rebind.awaiting else {
        return;
    };

    for key in keys.get_just_pressed() {
        if matches!(
            key,
            KeyCode::ControlLeft
                | KeyCode::ControlRight
                | KeyCode::ShiftLeft
                | KeyCode::ShiftRight
                | KeyCode::AltLeft
                | KeyCode::AltRight
                | KeyCode::SuperLeft
                | KeyCode::SuperRight
        ) {
            continue;
        }
        if *key == KeyCode::Escape {
            rebind.awaiting = None;
            return;
        }

        let binding = KeyBinding {
            key: *key,
            ctrl: keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight),
            shift: keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight),
        };
        info!("[KeyBindings] {:?} bound to {}", action, binding.display_label());
        bindings.set(action, binding);
        rebind.awaiting = None;
        return;
    }
}

pub struct KeyBindingsPlugin;

impl Plugin for KeyBindingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .init_resource::<RebindState>()
            .add_systems(
                Update,
                capture_rebind_input.in_set(crate::HostUpdateSet::Input),
            );
    }
}
