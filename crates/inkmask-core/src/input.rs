//! Pointer and keyboard event routing.
//!
//! The collaborator owns the window event loop; it forwards events here and
//! [`EventBindings`] maps them onto the engine's stroke lifecycle and the
//! undo key chord. Because the bindings and the engine are plain owned
//! values, handler lifetime is bound to their owner: dropping the owner
//! detaches everything, the moral equivalent of removing window listeners
//! on teardown.

use crate::engine::{EngineResult, MaskEngine};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state, reported alongside each key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Pointer event in raw (screen) coordinates.
///
/// `Up` must be delivered globally: a release outside the canvas bounds
/// still finalizes the active stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

/// Keyboard event with the modifier state at the time of the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KeyEvent {
    Pressed { key: String, modifiers: Modifiers },
    Released { key: String, modifiers: Modifiers },
}

/// Routes raw input events into a [`MaskEngine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBindings;

impl EventBindings {
    pub fn new() -> Self {
        Self
    }

    /// Forward a pointer event to the engine.
    ///
    /// A move arriving before the surface is mounted propagates the
    /// engine's precondition error instead of being swallowed.
    pub fn handle_pointer_event(
        &self,
        engine: &mut MaskEngine,
        event: PointerEvent,
    ) -> EngineResult<()> {
        match event {
            PointerEvent::Down { .. } => {
                engine.pointer_down();
                Ok(())
            }
            PointerEvent::Move { position } => engine.pointer_move(position),
            PointerEvent::Up { .. } => {
                engine.pointer_up();
                Ok(())
            }
        }
    }

    /// Forward a key event to the engine. Returns `true` when the event was
    /// the undo chord and a stroke was actually undone.
    pub fn handle_key_event(
        &self,
        engine: &mut MaskEngine,
        event: &KeyEvent,
    ) -> EngineResult<bool> {
        match event {
            KeyEvent::Pressed { key, modifiers } if is_undo_chord(key, *modifiers) => {
                engine.undo()
            }
            _ => Ok(false),
        }
    }
}

/// The recognized global undo chord: Meta+Z or Ctrl+Z.
fn is_undo_chord(key: &str, modifiers: Modifiers) -> bool {
    key.eq_ignore_ascii_case("z") && (modifiers.meta || modifiers.ctrl) && !modifiers.shift
}
