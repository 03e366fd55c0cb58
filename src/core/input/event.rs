//=========================================================================
// Input Event Types
//=========================================================================
//
// Platform-independent input events forwarded to the active state.
//
// The state machine treats these as opaque payloads. Only the platform
// layer (which builds them) and state hooks (which read them) look
// inside.
//
// Event Flow:
// ```text
// Winit → InputProcessor → InputBuffer → PlatformEvent::Inputs
//       → FrameDriver → StateMachine::dispatch_input → State::on_input
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Side, thumb and any non-standard buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical key location, independent of keyboard layout.
///
/// Covers the keys a small menu-driven application needs. Anything else
/// maps to `Unidentified` and is dropped by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier keys held while an event was produced.
///
/// Left and right variants are not distinguished. On macOS, Command
/// reports as `ctrl` and Option as `alt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };
}

//=== InputEvent ==========================================================

/// Low-level input event produced by the platform layer.
///
/// # Equality & Hashing
///
/// Events compare by kind and payload, except `MouseMoved`, which compares
/// equal regardless of coordinates. The input buffer relies on this to keep
/// only the latest cursor position per frame.
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown { key: KeyCode, modifiers: Modifiers },
    KeyUp { key: KeyCode, modifiers: Modifiers },
    MouseButtonDown { button: MouseButton, modifiers: Modifiers },
    MouseButtonUp { button: MouseButton, modifiers: Modifiers },

    /// Cursor position in window pixels, top-left origin.
    MouseMoved { x: f32, y: f32 },

    Unidentified,
}

impl InputEvent {
    /// Key pressed by this event, if it is a `KeyDown`.
    pub fn pressed_key(&self) -> Option<KeyCode> {
        match self {
            Self::KeyDown { key, .. } => Some(*key),
            _ => None,
        }
    }

    /// Returns `true` for a `KeyDown` of `key`, whatever the modifiers.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.pressed_key() == Some(key)
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb })
            | (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                MouseButtonDown { button: a, modifiers: ma },
                MouseButtonDown { button: b, modifiers: mb },
            )
            | (
                MouseButtonUp { button: a, modifiers: ma },
                MouseButtonUp { button: b, modifiers: mb },
            ) => a == b && ma == mb,
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

// Must agree with `eq`: coordinates never reach the hasher.
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::MouseButtonDown { button, modifiers }
            | Self::MouseButtonUp { button, modifiers } => {
                button.hash(state);
                modifiers.hash(state);
            }
            Self::MouseMoved { .. } | Self::Unidentified => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
